//! Error types for skill domain validation.

use thiserror::Error;

/// Errors returned while constructing skill domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SkillDomainError {
    /// The skill name is empty after trimming.
    #[error("skill name must not be empty")]
    EmptyName,

    /// The skill name exceeds the maximum length.
    #[error("skill name cannot exceed {limit} characters")]
    NameTooLong {
        /// Maximum permitted length.
        limit: usize,
    },
}
