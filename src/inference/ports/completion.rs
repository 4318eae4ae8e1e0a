//! Text-completion oracle port.

use async_trait::async_trait;
use thiserror::Error;

/// Text-completion contract.
///
/// The oracle is untrusted: its responses carry no guaranteed structure,
/// and callers must defensively extract what they need. A single failure
/// is reported as-is; this core never retries.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends a prompt and returns the raw completion text.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::Transport`] when the oracle is
    /// unreachable, times out, or otherwise fails to produce a response.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Errors returned by completion client implementations.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// The oracle could not be reached or failed to respond.
    #[error("completion transport failure: {0}")]
    Transport(String),
}
