//! Query services for the developer directory.

pub mod directory;

pub use directory::{DeveloperDirectoryError, DeveloperDirectoryService, DeveloperView};
