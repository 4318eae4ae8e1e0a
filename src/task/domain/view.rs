//! Produced views of tasks: detail hierarchy and list rows.

use super::{TaskId, TaskStatus};
use crate::developer::domain::DeveloperRef;
use crate::skill::domain::SkillRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of a task's immediate parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentTaskSummary {
    /// Parent task identifier.
    pub id: TaskId,
    /// Parent task title.
    pub title: String,
    /// Parent task status.
    pub status: TaskStatus,
}

/// Full detail view of a task, recursive through its subtasks.
///
/// Subtasks are bounded to depth 2 from the root query; the deepest level
/// carries an empty subtask list. Only the root of a detail query carries
/// a parent summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Resolved required skills.
    pub skills: Vec<SkillRef>,
    /// Resolved owning developer, if assigned.
    pub developer: Option<DeveloperRef>,
    /// Immediate parent summary, if any.
    pub parent_task: Option<ParentTaskSummary>,
    /// Nested subtask details.
    pub subtasks: Vec<TaskDetail>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Row view of a task in a paginated listing.
///
/// Carries a computed subtask count rather than nested subtask payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListItem {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Resolved required skills.
    pub skills: Vec<SkillRef>,
    /// Resolved owning developer, if assigned.
    pub developer: Option<DeveloperRef>,
    /// Parent task identifier, if any.
    pub parent_task_id: Option<TaskId>,
    /// Number of direct subtasks.
    pub subtask_count: usize,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}
