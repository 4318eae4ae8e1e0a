//! Error types for developer domain validation.

use thiserror::Error;

/// Errors returned while constructing developer domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeveloperDomainError {
    /// The developer name is empty after trimming.
    #[error("developer name must not be empty")]
    EmptyName,

    /// The developer name exceeds the maximum length.
    #[error("developer name cannot exceed {limit} characters")]
    NameTooLong {
        /// Maximum permitted length.
        limit: usize,
    },

    /// The developer skill set contains a duplicate skill identifier.
    #[error("developer skill set contains duplicate skill identifiers")]
    DuplicateSkill,
}
