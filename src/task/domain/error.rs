//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("Task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the maximum length.
    #[error("Task title cannot exceed {limit} characters")]
    TitleTooLong {
        /// Maximum permitted length.
        limit: usize,
    },
}

/// Error returned while parsing task statuses from caller input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid status. Must be one of: To-do, In Progress, Done")]
pub struct ParseTaskStatusError(pub String);
