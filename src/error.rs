//! Unified error handling for the orchestration core
//!
//! Every operation surfaces one of four failure kinds to its caller:
//! configuration, invocation, response parsing, or input validation.
//! Document ingestion (reading a PDF from disk before encoding) is the one
//! boundary outside those kinds and carries its own variant. Nothing is
//! retried and nothing is silently defaulted.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type returned by all services.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("model invocation failed: {0}")]
    Invocation(#[from] InvocationError),

    #[error("response parse failed: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid input: {0}")]
    Validation(#[from] InputValidationError),

    /// Local document ingestion failed before any model call was attempted.
    #[error("failed to read document {}: {source}", .path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Startup configuration failure. Calls must not be attempted without a
/// credential, so this is raised at construction time rather than on first
/// use.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key is not set (expected in {0})")]
    MissingApiKey(&'static str),

    #[error("API key is empty")]
    EmptyApiKey,
}

/// Transport, auth, or service failure from the remote model API.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("response contained no candidate text")]
    EmptyResponse,
}

/// The model's reply did not contain a decodable structured payload.
///
/// Carries the full raw text for diagnostics.
#[derive(Debug, Error)]
#[error("no decodable JSON payload in model response: {reason}")]
pub struct ParseError {
    pub reason: String,
    pub raw: String,
}

/// A caller-supplied argument violated a documented constraint. Raised
/// before any network call is made.
#[derive(Debug, Error)]
pub enum InputValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("unknown journal section: {0}")]
    UnknownSection(String),

    #[error("chat history must start with a requester turn")]
    HistoryStartsWithResponder,
}

pub(crate) fn require_non_empty(
    value: &str,
    field: &'static str,
) -> std::result::Result<(), InputValidationError> {
    if value.trim().is_empty() {
        return Err(InputValidationError::EmptyField { field });
    }
    Ok(())
}
