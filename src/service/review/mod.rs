//! Reviewer chat and section improvement

pub mod prompts;

use std::fmt;
use std::str::FromStr;

use crate::error::{require_non_empty, InputValidationError, Result};
use crate::model::ChatSession;
use crate::service::gemini::wire::GenerationConfig;
use crate::service::gemini::GeminiClient;

/// Sections eligible for guided improvement. The set is closed; anything
/// else is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalSection {
    Abstract,
    Methodology,
    Results,
    Discussion,
}

impl JournalSection {
    pub fn name(self) -> &'static str {
        match self {
            JournalSection::Abstract => "abstract",
            JournalSection::Methodology => "methodology",
            JournalSection::Results => "results",
            JournalSection::Discussion => "discussion",
        }
    }

    pub(crate) fn guideline(self) -> &'static str {
        match self {
            JournalSection::Abstract => {
                "Background, Problem, Method, Results, Conclusion. Max 250 words."
            }
            JournalSection::Methodology => "Clear, detailed, reproducible research procedures.",
            JournalSection::Results => {
                "Clear presentation with tables/figures, statistical analysis."
            }
            JournalSection::Discussion => {
                "Interpretation, comparison with previous research, implications."
            }
        }
    }
}

impl fmt::Display for JournalSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JournalSection {
    type Err = InputValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abstract" => Ok(JournalSection::Abstract),
            "methodology" => Ok(JournalSection::Methodology),
            "results" => Ok(JournalSection::Results),
            "discussion" => Ok(JournalSection::Discussion),
            other => Err(InputValidationError::UnknownSection(other.to_string())),
        }
    }
}

/// Service for the AI reviewer: follow-up chat and guided rewrites.
pub struct ReviewService {
    client: GeminiClient,
}

impl ReviewService {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// One reviewer chat turn against the active session. The session's
    /// outbound history seeds the call; the synthetic greeting never
    /// leaves the device.
    pub async fn chat(
        &self,
        journal_context: &str,
        session: &ChatSession,
        message: &str,
    ) -> Result<String> {
        let system = prompts::reviewer_system_instruction(journal_context);
        self.client
            .chat(
                &system,
                session.outbound_history(),
                message,
                Some(GenerationConfig::CHAT),
            )
            .await
    }

    /// Guided rewrite of one journal section.
    pub async fn improve_section(
        &self,
        section: JournalSection,
        current_text: &str,
    ) -> Result<String> {
        require_non_empty(current_text, "current_text")?;
        let prompt = prompts::section_improvement_prompt(section, current_text);
        self.client.complete(&prompt, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::Config;

    #[test]
    fn known_sections_parse() {
        assert_eq!(
            "Abstract".parse::<JournalSection>().unwrap(),
            JournalSection::Abstract
        );
        assert_eq!(
            "discussion".parse::<JournalSection>().unwrap(),
            JournalSection::Discussion
        );
    }

    #[test]
    fn sections_outside_the_closed_set_are_rejected() {
        for name in ["introduction", "references", "conclusion", ""] {
            let err = name.parse::<JournalSection>().unwrap_err();
            assert!(matches!(err, InputValidationError::UnknownSection(_)));
        }
    }

    fn offline_service() -> ReviewService {
        let mut config = Config::new("test-key").unwrap();
        config.base_url = "http://127.0.0.1:9".to_string();
        ReviewService::new(GeminiClient::new(config))
    }

    #[tokio::test]
    async fn empty_section_text_is_rejected_before_any_request() {
        let service = offline_service();
        let err = service
            .improve_section(JournalSection::Results, "   ")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(InputValidationError::EmptyField {
                field: "current_text"
            })
        ));
    }
}
