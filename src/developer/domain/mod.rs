//! Domain model for the developer directory.

mod developer;
mod error;
mod ids;

pub use developer::{Developer, DeveloperName, DeveloperRef};
pub use error::DeveloperDomainError;
pub use ids::DeveloperId;
