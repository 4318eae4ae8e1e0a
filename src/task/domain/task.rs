//! Task aggregate root and validated title type.

use super::{TaskDomainError, TaskId, TaskStatus};
use crate::developer::domain::DeveloperId;
use crate::skill::domain::SkillId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a task title, matching the stored column width.
const MAX_TITLE_LENGTH: usize = 100;

/// Validated task title. Titles are globally unique; uniqueness is
/// enforced by the repository, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty after
    /// trimming or [`TaskDomainError::TitleTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        if normalized.chars().count() > MAX_TITLE_LENGTH {
            return Err(TaskDomainError::TitleTooLong {
                limit: MAX_TITLE_LENGTH,
            });
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task aggregate root.
///
/// Skills and the owning developer are stored as identifiers; names are
/// resolved through the respective catalogs when views are produced. The
/// parent link models the subtask tree by convention; the aggregate does
/// not guard against cycles in the parent chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    status: TaskStatus,
    developer_id: Option<DeveloperId>,
    parent_task_id: Option<TaskId>,
    skill_ids: Vec<SkillId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the `To-do` status.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        skill_ids: Vec<SkillId>,
        developer_id: Option<DeveloperId>,
        parent_task_id: Option<TaskId>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title,
            status: TaskStatus::ToDo,
            developer_id,
            parent_task_id,
            skill_ids,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the owning developer, if any.
    #[must_use]
    pub const fn developer_id(&self) -> Option<DeveloperId> {
        self.developer_id
    }

    /// Returns the parent task, if any.
    #[must_use]
    pub const fn parent_task_id(&self) -> Option<TaskId> {
        self.parent_task_id
    }

    /// Returns the required skill identifiers.
    #[must_use]
    pub fn skill_ids(&self) -> &[SkillId] {
        &self.skill_ids
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Sets the lifecycle status.
    ///
    /// Admission-level rules (subtask completion before `Done`) live in the
    /// service layer; the aggregate records the transition.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Assigns or unassigns the owning developer.
    pub fn assign_developer(&mut self, developer_id: Option<DeveloperId>, clock: &impl Clock) {
        self.developer_id = developer_id;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
