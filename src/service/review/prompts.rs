//! Prompts for the reviewer chat and section improvement

use super::JournalSection;

/// Per-session system instruction embedding the journal context. Used once
/// per chat session, not per turn.
pub fn reviewer_system_instruction(journal_context: &str) -> String {
    format!(
        r#"You are an expert academic journal reviewer helping improve a research paper for SINTA publication.

Journal context: {journal_context}

Provide specific, actionable feedback. You can:
- Explain specific weaknesses in detail
- Suggest improvements for any section
- Provide revised versions of text
- Answer questions about SINTA criteria
- Give writing and structure advice

Be professional, constructive, and helpful. Keep responses concise and focused."#
    )
}

/// Guided rewrite prompt for one journal section, using the fixed
/// per-section guideline.
pub fn section_improvement_prompt(section: JournalSection, current_text: &str) -> String {
    format!(
        r#"Improve this journal {section} to meet SINTA standards.

Current text:
"{current_text}"

Guidelines for {section}: {guideline}

Provide:
1. Improved version of the text
2. Specific changes made
3. Why these changes improve the quality

Format your response clearly with sections."#,
        section = section.name(),
        current_text = current_text,
        guideline = section.guideline(),
    )
}
