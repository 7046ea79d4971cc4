//! Text report rendering for completed analyses
//!
//! One-way export boundary: consumes a finished assessment and produces a
//! shareable markdown document. Converting to PDF is the caller's concern.

use chrono::{DateTime, Utc};

use crate::model::AnalysisResult;

/// Input for report rendering.
#[derive(Debug, Clone)]
pub struct ReportData {
    pub journal_title: String,
    pub analysis_date: DateTime<Utc>,
    pub analysis: AnalysisResult,
}

/// Render the assessment as a markdown report.
pub fn render_markdown(data: &ReportData) -> String {
    let analysis = &data.analysis;
    let mut out = String::new();

    out.push_str("# SINTA Analysis Report\n\n");
    out.push_str(&format!("**Journal:** {}\n", data.journal_title));
    out.push_str(&format!(
        "**Date:** {}\n\n",
        data.analysis_date.format("%Y-%m-%d %H:%M UTC")
    ));

    out.push_str(&format!("## Predicted Level: {}\n\n", analysis.sinta_level));
    out.push_str(&format!(
        "- Publishability: {}/100\n",
        analysis.publishability_score
    ));
    out.push_str(&format!("- Completeness: {}%\n\n", analysis.completeness));

    if !analysis.weaknesses.is_empty() {
        out.push_str("## Issues Found\n\n");
        for weakness in &analysis.weaknesses {
            out.push_str(&format!("- {weakness}\n"));
        }
        out.push('\n');
    }

    if !analysis.suggestions.is_empty() {
        out.push_str("## Suggestions\n\n");
        for suggestion in &analysis.suggestions {
            out.push_str(&format!("- {suggestion}\n"));
        }
        out.push('\n');
    }

    out.push_str("## Detailed Analysis\n\n");
    let sections = [
        ("Title", &analysis.detailed_analysis.title),
        ("Abstract", &analysis.detailed_analysis.r#abstract),
        ("Methodology", &analysis.detailed_analysis.methodology),
        ("Results", &analysis.detailed_analysis.results),
        ("References", &analysis.detailed_analysis.references),
    ];
    for (heading, commentary) in sections {
        out.push_str(&format!("### {heading}\n\n{commentary}\n\n"));
    }

    out
}
