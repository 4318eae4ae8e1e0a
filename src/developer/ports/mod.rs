//! Port contracts for the developer directory.

pub mod repository;

pub use repository::{DeveloperRepository, DeveloperRepositoryError, DeveloperRepositoryResult};
