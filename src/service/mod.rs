pub mod analysis;
pub mod checklist;
pub mod gemini;
pub mod practice;
pub mod report;
pub mod review;

pub use analysis::AnalysisService;
pub use checklist::ChecklistService;
pub use gemini::{Attachment, GeminiClient};
pub use practice::PracticeService;
pub use review::{JournalSection, ReviewService};
