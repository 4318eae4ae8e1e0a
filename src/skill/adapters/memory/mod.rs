//! In-memory adapter implementations for the skill catalog.

mod catalog;

pub use catalog::InMemorySkillRepository;
