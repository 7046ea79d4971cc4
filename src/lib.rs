//! SintaScan orchestration core
//!
//! Turns a journal document (page photo or full PDF) into a structured
//! SINTA publishability assessment by prompting a generative-model API,
//! extracting the JSON payload embedded in its reply, and validating the
//! result. Also drives the follow-up reviewer chat, the requirements
//! checklist, English practice tasks, and text report export.
//!
//! The UI, pickers, permissions, and PDF rendering are external
//! collaborators: they hand this crate a base64 payload or a file path and
//! receive a typed result or an error.

pub mod error;
pub mod extract;
pub mod model;
pub mod service;

pub use error::{Error, Result};
pub use model::{
    AnalysisResult, ChatSession, ChecklistItem, ChecklistReport, ChecklistStatus, Config,
    ConversationTurn, SectionAnalysis, SintaLevel, Speaker,
};
pub use service::report::{render_markdown, ReportData};
pub use service::{
    AnalysisService, Attachment, ChecklistService, GeminiClient, JournalSection, PracticeService,
    ReviewService,
};
