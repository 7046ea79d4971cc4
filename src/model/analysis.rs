//! Journal assessment result model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Predicted SINTA accreditation tier. Tier 1 is the highest rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SintaLevel {
    #[serde(rename = "SINTA 1")]
    Sinta1,
    #[serde(rename = "SINTA 2")]
    Sinta2,
    #[serde(rename = "SINTA 3")]
    Sinta3,
    #[serde(rename = "SINTA 4")]
    Sinta4,
    #[serde(rename = "SINTA 5")]
    Sinta5,
    #[serde(rename = "SINTA 6")]
    Sinta6,
}

impl fmt::Display for SintaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SintaLevel::Sinta1 => "SINTA 1",
            SintaLevel::Sinta2 => "SINTA 2",
            SintaLevel::Sinta3 => "SINTA 3",
            SintaLevel::Sinta4 => "SINTA 4",
            SintaLevel::Sinta5 => "SINTA 5",
            SintaLevel::Sinta6 => "SINTA 6",
        };
        f.write_str(label)
    }
}

/// Structured outcome of one document assessment.
///
/// Created fresh per analysis request, immutable once returned, and never
/// persisted. Scores are guaranteed to be in [0,100] after validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sinta_level: SintaLevel,
    pub publishability_score: u8,
    pub completeness: u8,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    pub detailed_analysis: SectionAnalysis,
}

/// Per-section commentary. All five sections are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionAnalysis {
    pub title: String,
    pub r#abstract: String,
    pub methodology: String,
    pub results: String,
    pub references: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinta_level_round_trips_through_wire_label() {
        let encoded = serde_json::to_string(&SintaLevel::Sinta2).unwrap();
        assert_eq!(encoded, "\"SINTA 2\"");
        let decoded: SintaLevel = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, SintaLevel::Sinta2);
    }

    #[test]
    fn unknown_level_label_is_rejected() {
        assert!(serde_json::from_str::<SintaLevel>("\"SINTA 7\"").is_err());
    }

    #[test]
    fn result_encodes_with_camel_case_keys() {
        let result = AnalysisResult {
            sinta_level: SintaLevel::Sinta3,
            publishability_score: 70,
            completeness: 80,
            weaknesses: vec![],
            suggestions: vec![],
            detailed_analysis: SectionAnalysis {
                title: "t".into(),
                r#abstract: "a".into(),
                methodology: "m".into(),
                results: "r".into(),
                references: "f".into(),
            },
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["publishabilityScore"], 70);
        assert_eq!(value["detailedAnalysis"]["abstract"], "a");
    }

    #[test]
    fn missing_section_key_is_rejected() {
        let json = r#"{"title":"t","abstract":"a","methodology":"m","results":"r"}"#;
        assert!(serde_json::from_str::<SectionAnalysis>(json).is_err());
    }
}
