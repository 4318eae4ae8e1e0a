//! Persistence adapters for the skill catalog.
//!
//! Provides concrete implementations of the [`SkillRepository`] port.
//! Persistent storage sits outside this core, so the only shipped adapter
//! is the thread-safe in-memory catalog used by tests and embedders.
//!
//! [`SkillRepository`]: crate::skill::ports::SkillRepository

pub mod memory;
