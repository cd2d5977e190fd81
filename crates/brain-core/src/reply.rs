//! The backend's answer to a completion request.

/// Tri-state reply from a completion backend.
///
/// Backends signal "show the raw on-chain data instead of my phrasing" with
/// [`ModelReply::PreferData`] rather than a magic substring, so callers never
/// inspect reply text to decide what to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReply {
    /// The model produced text that should be shown to the user.
    Answer(String),
    /// The model asked for live data to be shown instead of its own text.
    PreferData,
    /// The model produced nothing usable.
    NoOpinion,
}

impl ModelReply {
    /// Create an answer reply.
    pub fn answer(text: impl Into<String>) -> Self {
        Self::Answer(text.into())
    }

    /// The answer text, if this reply carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Answer(text) => Some(text),
            Self::PreferData | Self::NoOpinion => None,
        }
    }

    /// Consume the reply, returning the answer text if any.
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Answer(text) => Some(text),
            Self::PreferData | Self::NoOpinion => None,
        }
    }
}
