//! Domain model for the skill catalog.

mod error;
mod ids;
mod skill;

pub use error::SkillDomainError;
pub use ids::SkillId;
pub use skill::{Skill, SkillName, SkillRef};
