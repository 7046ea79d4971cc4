//! Client for the generateContent model endpoint
//!
//! Every call is independent and stateless from the client's perspective:
//! chat context travels entirely in the caller-supplied history. Failures
//! are not retried; they surface once with the underlying cause attached.

pub mod wire;

use std::time::Instant;

use crate::error::{require_non_empty, InputValidationError, InvocationError, Result};
use crate::model::{Config, ConversationTurn, Speaker};
use wire::{Content, GenerateContentRequest, GenerationConfig, Part};

/// One inline binary attachment for a multimodal call.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub mime_type: &'static str,
    /// Base64-encoded payload bytes.
    pub data: String,
}

impl Attachment {
    pub fn jpeg(base64_data: impl Into<String>) -> Self {
        Self {
            mime_type: "image/jpeg",
            data: base64_data.into(),
        }
    }

    pub fn pdf(base64_data: impl Into<String>) -> Self {
        Self {
            mime_type: "application/pdf",
            data: base64_data.into(),
        }
    }

    pub fn mp3(base64_data: impl Into<String>) -> Self {
        Self {
            mime_type: "audio/mp3",
            data: base64_data.into(),
        }
    }
}

/// Shared client wrapper for the remote model API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: Config,
}

impl GeminiClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Single-turn completion with no history.
    pub async fn complete(
        &self,
        prompt: &str,
        generation: Option<GenerationConfig>,
    ) -> Result<String> {
        require_non_empty(prompt, "prompt")?;

        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text(prompt)])],
            system_instruction: None,
            generation_config: generation,
        };
        self.send(request).await
    }

    /// Completion carrying one inline binary blob alongside the prompt.
    pub async fn complete_multimodal(
        &self,
        prompt: &str,
        attachment: Attachment,
        generation: Option<GenerationConfig>,
    ) -> Result<String> {
        require_non_empty(prompt, "prompt")?;
        require_non_empty(&attachment.data, "attachment data")?;

        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![
                Part::text(prompt),
                Part::inline(attachment.mime_type, attachment.data),
            ])],
            system_instruction: None,
            generation_config: generation,
        };
        self.send(request).await
    }

    /// One chat turn against a session seeded with `history`.
    ///
    /// The remote API requires seeded history to start on the requester
    /// side; a responder-first history is rejected before any request is
    /// issued.
    pub async fn chat(
        &self,
        system_instruction: &str,
        history: &[ConversationTurn],
        message: &str,
        generation: Option<GenerationConfig>,
    ) -> Result<String> {
        require_non_empty(message, "message")?;
        if let Some(first) = history.first() {
            if first.speaker == Speaker::Responder {
                return Err(InputValidationError::HistoryStartsWithResponder.into());
            }
        }
        for turn in history {
            require_non_empty(&turn.text, "history turn text")?;
        }

        let mut contents: Vec<Content> = history.iter().map(Content::from_turn).collect();
        contents.push(Content::user(vec![Part::text(message)]));

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content::system(system_instruction)),
            generation_config: generation,
        };
        self.send(request).await
    }

    async fn send(&self, request: GenerateContentRequest) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let start = Instant::now();

        tracing::debug!(
            model = %self.config.model,
            contents = request.contents.len(),
            "Issuing generateContent request"
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(InvocationError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<wire::ApiErrorBody>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| "unknown error".to_string());

            tracing::error!(
                model = %self.config.model,
                status = status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                message = %message,
                "generateContent request failed"
            );
            return Err(InvocationError::Api {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let body: wire::GenerateContentResponse =
            response.json().await.map_err(InvocationError::Http)?;
        let text = body.text().ok_or(InvocationError::EmptyResponse)?;

        tracing::info!(
            model = %self.config.model,
            elapsed_ms = start.elapsed().as_millis() as u64,
            response_length = text.len(),
            "generateContent request completed"
        );
        Ok(text)
    }
}
