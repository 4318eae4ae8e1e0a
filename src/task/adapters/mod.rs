//! Persistence adapters for the task aggregate.
//!
//! Provides concrete implementations of the [`TaskRepository`] port.
//! Persistent storage sits outside this core, so the only shipped adapter
//! is the thread-safe in-memory store used by tests and embedders.
//!
//! [`TaskRepository`]: crate::task::ports::TaskRepository

pub mod memory;
