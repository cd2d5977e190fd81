//! Scripted brain implementation - plays back canned replies.

use std::collections::VecDeque;
use std::sync::Mutex;

use brain_core::{async_trait, Brain, BrainError, CompletionRequest, ModelReply};

/// A brain that returns pre-scripted replies and records every request.
///
/// Replies queued with [`ScriptedBrain::then`] are consumed in order; once
/// the queue is empty the default reply is returned for every call.
#[derive(Debug)]
pub struct ScriptedBrain {
    queued: Mutex<VecDeque<ModelReply>>,
    default_reply: ModelReply,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedBrain {
    /// Create a brain that always returns `reply`.
    pub fn new(reply: ModelReply) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            default_reply: reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Shorthand for a brain that always answers with `text`.
    pub fn answering(text: impl Into<String>) -> Self {
        Self::new(ModelReply::Answer(text.into()))
    }

    /// Queue a one-shot reply ahead of the default.
    pub fn then(self, reply: ModelReply) -> Self {
        self.queued
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(reply);
        self
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl Brain for ScriptedBrain {
    async fn complete(&self, request: CompletionRequest) -> Result<ModelReply, BrainError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);

        let next = self
            .queued
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        Ok(next.unwrap_or_else(|| self.default_reply.clone()))
    }

    fn name(&self) -> &str {
        "ScriptedBrain"
    }
}
