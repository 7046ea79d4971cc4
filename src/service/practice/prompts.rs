//! Prompts for English practice tasks

/// Per-session system instruction for the tutor chat.
pub const TUTOR_SYSTEM_INSTRUCTION: &str = "You are a helpful English learning assistant.";

pub const DEBATE_TOPIC_PROMPT: &str = r#"Generate one random interesting debate topic for English learners.
The topic should be:
- Suitable for intermediate to advanced English learners
- Engaging and thought-provoking
- Not too controversial or sensitive
- Can be discussed in 5-10 minutes

Just give the topic, no explanation. Format: "Topic: [your topic here]""#;

pub const PRONUNCIATION_TEXT_PROMPT: &str = r#"Generate a short English text (2-3 sentences) for pronunciation practice.
The text should:
- Include common English words that are often mispronounced
- Be interesting and meaningful
- Include a mix of different sounds and phonemes
- Be suitable for intermediate learners

Just give the text, no explanation or title."#;

/// Feedback prompt for a recorded reading of `original_text`.
pub fn pronunciation_analysis_prompt(original_text: &str) -> String {
    format!(
        r#"You are an English pronunciation teacher.

The student was supposed to read this text:
"{original_text}"

Please analyze their pronunciation and provide:
1. Overall pronunciation score (0-100)
2. Specific words that were mispronounced
3. Common pronunciation errors detected
4. Tips for improvement
5. Encouragement and positive feedback

Be constructive and encouraging in your feedback."#
    )
}

/// Grammar feedback prompt, optionally anchored to a discussion context.
pub fn grammar_analysis_prompt(user_message: &str, context: Option<&str>) -> String {
    let context_line = match context {
        Some(context) if !context.trim().is_empty() => format!("Context: {context}\n\n"),
        _ => String::new(),
    };
    format!(
        r#"You are an English grammar teacher.

{context_line}Student's message: "{user_message}"

Please analyze the grammar and provide:
1. Grammar score (0-100)
2. Grammatical errors (if any) with corrections
3. Suggestions for better sentence structure
4. Vocabulary usage feedback
5. Brief encouragement

Format your response clearly with sections."#
    )
}

/// Strip the `Topic:` prefix the topic prompt asks the model to emit.
pub fn clean_topic(raw: &str) -> String {
    raw.replacen("Topic:", "", 1).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_topic_strips_prefix_and_whitespace() {
        assert_eq!(
            clean_topic("Topic: Should homework be abolished?"),
            "Should homework be abolished?"
        );
    }

    #[test]
    fn clean_topic_leaves_unprefixed_text_alone() {
        assert_eq!(clean_topic("  Cats or dogs?  "), "Cats or dogs?");
    }

    #[test]
    fn grammar_prompt_includes_context_when_present() {
        let prompt = grammar_analysis_prompt("I has a dog.", Some("pet ownership"));
        assert!(prompt.contains("Context: pet ownership"));
        assert!(prompt.contains("Student's message: \"I has a dog.\""));
    }

    #[test]
    fn grammar_prompt_omits_empty_context() {
        let prompt = grammar_analysis_prompt("I has a dog.", None);
        assert!(!prompt.contains("Context:"));
    }

    #[test]
    fn pronunciation_prompt_embeds_target_text() {
        let prompt = pronunciation_analysis_prompt("The sixth sheik's sheep is sick.");
        assert!(prompt.contains("\"The sixth sheik's sheep is sick.\""));
    }
}
