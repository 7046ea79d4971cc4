//! Conversation state for reviewer and tutor chat sessions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attribution of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Requester,
    Responder,
}

impl Speaker {
    /// Role name in the remote API's two-role vocabulary.
    ///
    /// This is the single place speakers are translated; a new variant
    /// cannot be sent until it picks a remote role here.
    pub fn remote_role(self) -> &'static str {
        match self {
            Speaker::Requester => "user",
            Speaker::Responder => "model",
        }
    }
}

/// One exchange unit in a chat session. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
    /// Display timestamp; not sent to the model.
    pub created_at: DateTime<Utc>,
    synthetic: bool,
}

impl ConversationTurn {
    pub fn requester(text: impl Into<String>) -> Self {
        Self::new(Speaker::Requester, text, false)
    }

    pub fn responder(text: impl Into<String>) -> Self {
        Self::new(Speaker::Responder, text, false)
    }

    fn greeting(text: impl Into<String>) -> Self {
        Self::new(Speaker::Responder, text, true)
    }

    fn new(speaker: Speaker, text: impl Into<String>, synthetic: bool) -> Self {
        Self {
            speaker,
            text: text.into(),
            created_at: Utc::now(),
            synthetic,
        }
    }

    /// Seeded greeting turns are rendered but excluded from outbound
    /// history.
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }
}

/// Append-only ordered turn sequence for one active session.
///
/// Owned exclusively by the active screen instance; cleared when a new
/// analysis or topic session starts and never persisted.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    turns: Vec<ConversationTurn>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session seeded with a synthetic greeting from the responder.
    pub fn with_greeting(text: impl Into<String>) -> Self {
        Self {
            turns: vec![ConversationTurn::greeting(text)],
        }
    }

    pub fn append(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    /// All turns, including a seeded greeting, for rendering.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Turns used to seed the next model call: everything except a leading
    /// synthetic greeting. Empty means "start a fresh session".
    pub fn outbound_history(&self) -> &[ConversationTurn] {
        match self.turns.first() {
            Some(first) if first.is_synthetic() => &self.turns[1..],
            _ => &self.turns,
        }
    }

    /// Clear all turns and reseed with a new greeting.
    pub fn reset(&mut self, greeting: impl Into<String>) {
        self.turns.clear();
        self.turns.push(ConversationTurn::greeting(greeting));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_role_mapping() {
        assert_eq!(Speaker::Requester.remote_role(), "user");
        assert_eq!(Speaker::Responder.remote_role(), "model");
    }

    #[test]
    fn greeting_only_session_has_empty_outbound_history() {
        let session = ChatSession::with_greeting("Let's discuss your journal.");
        assert_eq!(session.turns().len(), 1);
        assert!(session.outbound_history().is_empty());
    }

    #[test]
    fn outbound_history_keeps_appended_turns_in_order() {
        let mut session = ChatSession::with_greeting("Hello!");
        session.append(ConversationTurn::requester("How is my abstract?"));
        session.append(ConversationTurn::responder("It needs a clearer method."));

        let history = session.outbound_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].speaker, Speaker::Requester);
        assert_eq!(history[0].text, "How is my abstract?");
        assert_eq!(history[1].speaker, Speaker::Responder);
        assert_eq!(history[1].text, "It needs a clearer method.");
    }

    #[test]
    fn session_without_greeting_exposes_all_turns() {
        let mut session = ChatSession::new();
        session.append(ConversationTurn::requester("Hi"));
        assert_eq!(session.outbound_history().len(), 1);
    }

    #[test]
    fn reset_clears_turns_and_reseeds_greeting() {
        let mut session = ChatSession::with_greeting("First topic");
        session.append(ConversationTurn::requester("A question"));
        session.reset("Second topic");

        assert_eq!(session.turns().len(), 1);
        assert!(session.turns()[0].is_synthetic());
        assert_eq!(session.turns()[0].text, "Second topic");
        assert!(session.outbound_history().is_empty());
    }
}
