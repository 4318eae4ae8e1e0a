//! In-memory adapter implementations for skill inference.

mod completion;

pub use completion::ScriptedCompletionClient;
