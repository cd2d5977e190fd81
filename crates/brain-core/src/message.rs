//! Conversation message types.

use serde::{Deserialize, Serialize};

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// A single turn in a conversation.
///
/// Messages are never mutated after creation; a conversation is an ordered
/// slice of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the author.
    pub role: Role,
    /// Message content.
    pub content: String,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Whether the message has no content at all.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A completion request sent to a [`Brain`](crate::Brain).
#[derive(Debug, Clone, Default)]
pub struct CompletionRequest {
    /// Conversation to complete, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Credential for this call. Overrides the backend's configured key when set.
    pub api_key: Option<String>,
}

impl CompletionRequest {
    /// Create a request for the given conversation.
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            api_key: None,
        }
    }

    /// Attach a per-call credential.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::assistant("hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }

    #[test]
    fn test_deserialize_user_message() {
        let message: ChatMessage =
            serde_json::from_str(r#"{"role":"user","content":"gas price?"}"#).unwrap();
        assert_eq!(message, ChatMessage::user("gas price?"));
        assert!(!message.is_empty());
    }

    #[test]
    fn test_request_api_key_override() {
        let request = CompletionRequest::new(vec![ChatMessage::user("hello")])
            .with_api_key(Some("secret".to_string()));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.api_key.as_deref(), Some("secret"));
    }
}
