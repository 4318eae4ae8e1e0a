//! Port contracts for the task aggregate.

pub mod repository;

pub use repository::{TaskListFilter, TaskRepository, TaskRepositoryError, TaskRepositoryResult};
