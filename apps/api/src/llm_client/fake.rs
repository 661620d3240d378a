use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CritiqueService, LlmError};

/// Deterministic stand-in for the Gemini client.
///
/// Replies with `"critique for <n> chars"`; the first `fail_first` calls
/// return an `Api` error instead. Records every prompt it receives.
pub struct FakeCritic {
    calls: AtomicUsize,
    fail_first: usize,
    prompts: Mutex<Vec<String>>,
}

impl FakeCritic {
    pub fn ok() -> Self {
        Self::failing_first(0)
    }

    pub fn failing_first(n: usize) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_first: n,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CritiqueService for FakeCritic {
    async fn submit(&self, prompt: &str) -> Result<String, LlmError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        if n < self.fail_first {
            return Err(LlmError::Api {
                status: 503,
                message: "model is overloaded".to_string(),
            });
        }
        Ok(format!("critique for {} chars", prompt.len()))
    }
}
