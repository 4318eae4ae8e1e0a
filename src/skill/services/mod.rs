//! Query services for the skill catalog.

pub mod catalog;

pub use catalog::{SkillCatalogError, SkillCatalogService};
