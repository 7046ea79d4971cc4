pub mod analysis;
pub mod checklist;
pub mod config;
pub mod conversation;

pub use analysis::{AnalysisResult, SectionAnalysis, SintaLevel};
pub use checklist::{ChecklistItem, ChecklistReport, ChecklistStatus};
pub use config::Config;
pub use conversation::{ChatSession, ConversationTurn, Speaker};
