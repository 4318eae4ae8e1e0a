//! Adapters for skill inference ports.
//!
//! - [`trigram::TrigramTaskFinder`]: similarity search over the task
//!   repository using in-process trigram scoring
//! - [`memory::ScriptedCompletionClient`]: deterministic completion oracle
//!   double for tests

pub mod memory;
pub mod trigram;
