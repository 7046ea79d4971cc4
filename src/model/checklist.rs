//! Requirements checklist model

use serde::{Deserialize, Serialize};

/// Outcome of a single requirement check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub name: String,
    pub status: ChecklistStatus,
    pub details: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistStatus {
    Pass,
    Fail,
    Warning,
}

/// Full checklist evaluation. `passed <= total` and `total` equals the
/// fixed number of requirements; both are enforced after extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistReport {
    pub passed: u32,
    pub total: u32,
    pub checklist: Vec<ChecklistItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_lowercase_wire_labels() {
        assert_eq!(
            serde_json::to_string(&ChecklistStatus::Warning).unwrap(),
            "\"warning\""
        );
        let decoded: ChecklistStatus = serde_json::from_str("\"pass\"").unwrap();
        assert_eq!(decoded, ChecklistStatus::Pass);
    }

    #[test]
    fn report_decodes_from_wire_shape() {
        let json = r#"{
            "passed": 7,
            "total": 10,
            "checklist": [
                {"name": "Title", "status": "pass", "details": "Clear and specific"}
            ]
        }"#;
        let report: ChecklistReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.passed, 7);
        assert_eq!(report.checklist[0].status, ChecklistStatus::Pass);
    }
}
