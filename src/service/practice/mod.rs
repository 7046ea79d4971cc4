//! English practice: debate topics, grammar feedback, pronunciation

pub mod prompts;

use crate::error::{require_non_empty, Result};
use crate::model::ChatSession;
use crate::service::gemini::wire::GenerationConfig;
use crate::service::gemini::{Attachment, GeminiClient};

/// Service for the English practice tasks.
pub struct PracticeService {
    client: GeminiClient,
}

impl PracticeService {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Generate a fresh debate topic with the `Topic:` prefix stripped.
    pub async fn new_debate_topic(&self) -> Result<String> {
        let raw = self.client.complete(prompts::DEBATE_TOPIC_PROMPT, None).await?;
        Ok(prompts::clean_topic(&raw))
    }

    /// Generate a short text for pronunciation practice.
    pub async fn pronunciation_text(&self) -> Result<String> {
        self.client
            .complete(prompts::PRONUNCIATION_TEXT_PROMPT, None)
            .await
    }

    /// Score a recorded reading of `original_text` (inline MP3 audio).
    pub async fn analyze_pronunciation(
        &self,
        original_text: &str,
        audio_base64: &str,
    ) -> Result<String> {
        require_non_empty(original_text, "original_text")?;
        let prompt = prompts::pronunciation_analysis_prompt(original_text);
        self.client
            .complete_multimodal(&prompt, Attachment::mp3(audio_base64), None)
            .await
    }

    /// Grammar feedback on one student message.
    pub async fn analyze_grammar(
        &self,
        user_message: &str,
        context: Option<&str>,
    ) -> Result<String> {
        require_non_empty(user_message, "user_message")?;
        let prompt = prompts::grammar_analysis_prompt(user_message, context);
        self.client.complete(&prompt, None).await
    }

    /// One tutor chat turn against the active debate session.
    pub async fn chat(&self, session: &ChatSession, message: &str) -> Result<String> {
        self.client
            .chat(
                prompts::TUTOR_SYSTEM_INSTRUCTION,
                session.outbound_history(),
                message,
                Some(GenerationConfig::CHAT),
            )
            .await
    }
}
