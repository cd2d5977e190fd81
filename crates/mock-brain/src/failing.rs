//! Failing brain implementation - simulates an unavailable backend.

use std::sync::atomic::{AtomicUsize, Ordering};

use brain_core::{async_trait, Brain, BrainError, CompletionRequest, ModelReply};

/// A brain whose every call fails.
///
/// By default calls return [`BrainError::Unavailable`]. A panicking variant
/// exists for exercising catch-all handling in callers.
#[derive(Debug, Default)]
pub struct FailingBrain {
    panic: bool,
    calls: AtomicUsize,
}

impl FailingBrain {
    /// Create a brain that returns an error on every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a brain that panics on every call.
    pub fn panicking() -> Self {
        Self {
            panic: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Brain for FailingBrain {
    async fn complete(&self, _request: CompletionRequest) -> Result<ModelReply, BrainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.panic {
            panic!("FailingBrain configured to panic");
        }
        Err(BrainError::Unavailable("backend offline".to_string()))
    }

    fn name(&self) -> &str {
        "FailingBrain"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}
