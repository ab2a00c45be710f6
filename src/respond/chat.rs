use serde::Serialize;
use tracing::warn;

use super::ResponseProvider;

pub const GREETING: &str = "Ask me any questions about this aspect of the case.";
pub const ERROR_REPLY: &str = "Sorry, I encountered an error while processing your question.";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    fn user(content: &str) -> Self {
        Self { role: Role::User, content: content.to_string() }
    }

    fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Transcript of one detail overlay's chat panel.
#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self { messages: vec![ChatMessage::assistant(GREETING)] }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Ask `provider` about a node of `category`. Blank input is ignored and
    /// returns `None`; otherwise the assistant's reply is returned. A provider
    /// failure becomes [`ERROR_REPLY`] in the transcript.
    pub fn send<P: ResponseProvider + ?Sized>(
        &mut self,
        provider: &mut P,
        category: &str,
        input: &str,
    ) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(input));
        let reply = match provider.respond(category, input) {
            Ok(text) => ChatMessage::assistant(text),
            Err(e) => {
                warn!(category, error = %e, "error generating response");
                ChatMessage::assistant(ERROR_REPLY)
            }
        };
        self.messages.push(reply);
        self.messages.last()
    }
}
