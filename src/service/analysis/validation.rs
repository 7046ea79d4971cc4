//! Validation of model-produced assessments
//!
//! The model is asked for integer scores in [0,100] but is not trusted to
//! comply: scores arrive as raw JSON numbers and are rounded and clamped
//! into range, with a warning when out of contract. Non-numeric scores are
//! a parse failure upstream.

use serde::Deserialize;

use crate::model::{AnalysisResult, SectionAnalysis, SintaLevel};

/// Assessment exactly as decoded from the model reply, before score
/// validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawAnalysis {
    sinta_level: SintaLevel,
    publishability_score: f64,
    completeness: f64,
    #[serde(default)]
    weaknesses: Vec<String>,
    #[serde(default)]
    suggestions: Vec<String>,
    detailed_analysis: SectionAnalysis,
}

pub(crate) fn validate(raw: RawAnalysis) -> AnalysisResult {
    AnalysisResult {
        sinta_level: raw.sinta_level,
        publishability_score: clamp_score(raw.publishability_score, "publishabilityScore"),
        completeness: clamp_score(raw.completeness, "completeness"),
        weaknesses: raw.weaknesses,
        suggestions: raw.suggestions,
        detailed_analysis: raw.detailed_analysis,
    }
}

fn clamp_score(value: f64, field: &'static str) -> u8 {
    if !value.is_finite() {
        tracing::warn!(field, value, "Non-finite score, treating as 0");
        return 0;
    }
    if !(0.0..=100.0).contains(&value) {
        tracing::warn!(field, value, "Score outside [0,100], clamping");
    }
    value.round().clamp(0.0, 100.0) as u8
}
