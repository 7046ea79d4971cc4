//! Prompt for the SINTA requirements checklist

/// The fixed requirement set. The model evaluates exactly these, in order.
pub const REQUIREMENTS: [&str; 10] = [
    "Title: Clear, specific, under 20 words",
    "Keywords: 3-5 relevant keywords",
    "Abstract: Complete structure, 150-250 words",
    "Introduction: Clear problem statement and objectives",
    "Methodology: Detailed and reproducible",
    "Results: Clear presentation with data",
    "Discussion: Compares with previous research",
    "Conclusion: Aligns with objectives",
    "References: At least 15 references, mostly recent (last 5 years)",
    "Writing: Academic language, proper grammar",
];

/// Build the checklist evaluation prompt for the given journal text.
pub fn requirements_prompt(journal_text: &str) -> String {
    let listed = REQUIREMENTS
        .iter()
        .enumerate()
        .map(|(i, requirement)| format!("{}. {}", i + 1, requirement))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Evaluate this journal against SINTA requirements checklist:

Journal text: "{journal_text}"

Check these requirements:
{listed}

Return JSON:
{{
  "passed": number,
  "total": {total},
  "checklist": [
    {{
      "name": "requirement name",
      "status": "pass" | "fail" | "warning",
      "details": "specific explanation"
    }},
    ...
  ]
}}"#,
        journal_text = journal_text,
        listed = listed,
        total = REQUIREMENTS.len(),
    )
}
