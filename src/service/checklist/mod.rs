//! SINTA requirements checklist evaluation

pub mod prompts;

use crate::error::{require_non_empty, Result};
use crate::extract;
use crate::model::ChecklistReport;
use crate::service::gemini::GeminiClient;

/// Number of requirements in the fixed checklist.
pub const REQUIREMENT_COUNT: u32 = prompts::REQUIREMENTS.len() as u32;

/// Service evaluating a journal against the fixed requirement set.
pub struct ChecklistService {
    client: GeminiClient,
}

impl ChecklistService {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Evaluate `journal_text` against the 10 fixed requirements.
    pub async fn check_requirements(&self, journal_text: &str) -> Result<ChecklistReport> {
        require_non_empty(journal_text, "journal_text")?;

        let prompt = prompts::requirements_prompt(journal_text);
        let raw = self.client.complete(&prompt, None).await?;
        let report: ChecklistReport = extract::extract_payload(&raw)?;
        Ok(normalize_report(report))
    }
}

/// Enforce the report invariants: `total` is the fixed requirement count
/// and `passed` never exceeds it.
fn normalize_report(mut report: ChecklistReport) -> ChecklistReport {
    if report.total != REQUIREMENT_COUNT {
        tracing::warn!(
            total = report.total,
            expected = REQUIREMENT_COUNT,
            "Checklist total differs from fixed requirement count"
        );
        report.total = REQUIREMENT_COUNT;
    }
    if report.passed > report.total {
        tracing::warn!(
            passed = report.passed,
            total = report.total,
            "Passed count exceeds total, clamping"
        );
        report.passed = report.total;
    }
    if report.checklist.len() as u32 != REQUIREMENT_COUNT {
        tracing::warn!(
            items = report.checklist.len(),
            expected = REQUIREMENT_COUNT,
            "Checklist item count differs from fixed requirement count"
        );
    }
    report
}
