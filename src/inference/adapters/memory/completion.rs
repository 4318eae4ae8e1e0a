//! Deterministic completion oracle double.

use crate::inference::ports::{CompletionClient, CompletionError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Completion client that replays scripted responses in order.
///
/// Once the script is exhausted every call reports a transport failure,
/// which doubles as an "oracle unavailable" simulation: a client
/// constructed with no responses fails immediately.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCompletionClient {
    responses: Arc<Mutex<VecDeque<Result<String, CompletionError>>>>,
}

impl ScriptedCompletionClient {
    /// Creates a client with no scripted responses; every call fails with
    /// a transport error.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Creates a client that replays the given successful responses in
    /// order.
    #[must_use]
    pub fn with_responses(responses: impl IntoIterator<Item = String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into_iter().map(Ok).collect())),
        }
    }

    /// Appends a successful response to the script.
    pub fn push_response(&self, response: impl Into<String>) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(Ok(response.into()));
        }
    }

    /// Appends a transport failure to the script.
    pub fn push_failure(&self, reason: impl Into<String>) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(Err(CompletionError::Transport(reason.into())));
        }
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletionClient {
    async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
        let mut queue = self
            .responses
            .lock()
            .map_err(|err| CompletionError::Transport(err.to_string()))?;
        queue
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::Transport("no completion available".to_owned())))
    }
}
