//! Repository port for task persistence, lookup, and hierarchy queries.

use crate::developer::domain::DeveloperId;
use crate::skill::domain::SkillId;
use crate::task::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Filter criteria for task listings. All present criteria are combined
/// with AND; the skill filter matches tasks holding at least one of the
/// given skills.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListFilter {
    /// Restrict to tasks with this exact status.
    pub status: Option<TaskStatus>,
    /// Restrict to tasks assigned to this developer.
    pub developer_id: Option<DeveloperId>,
    /// Restrict to tasks requiring at least one of these skills. Empty
    /// means no skill restriction.
    pub skill_ids: Vec<SkillId>,
    /// Restrict to tasks with no parent.
    pub parent_only: bool,
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists or [`TaskRepositoryError::DuplicateTitle`] when the
    /// title is already used. The store holds the authoritative uniqueness
    /// guarantee; service-level pre-checks only improve error reporting.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task (status, assignee, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Reports whether a task with the given identifier exists.
    async fn exists(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Reports whether any task already uses the given title.
    async fn title_exists(&self, title: &str) -> TaskRepositoryResult<bool>;

    /// Returns every stored task in unspecified order. Used as the corpus
    /// for title similarity search.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the direct subtasks of the given task, ordered by creation
    /// time ascending.
    async fn find_subtasks(&self, parent_id: TaskId) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts the direct subtasks of the given task.
    async fn count_subtasks(&self, parent_id: TaskId) -> TaskRepositoryResult<usize>;

    /// Counts the direct subtasks of the given task whose status is not
    /// `Done`.
    async fn count_incomplete_subtasks(&self, parent_id: TaskId) -> TaskRepositoryResult<usize>;

    /// Returns one page of tasks matching the filter, ordered by creation
    /// time descending, skipping `skip` items and returning at most `take`.
    async fn find_page(
        &self,
        filter: &TaskListFilter,
        skip: usize,
        take: usize,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts all tasks matching the filter.
    async fn count(&self, filter: &TaskListFilter) -> TaskRepositoryResult<usize>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A task with the same title already exists.
    #[error("duplicate task title: {0}")]
    DuplicateTitle(String),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
