//! Detail and listing queries for the admission engine.

use super::admission::{TaskAdmissionResult, TaskAdmissionService};
use crate::developer::{domain::DeveloperRef, ports::DeveloperRepository};
use crate::inference::ports::SkillPredictor;
use crate::skill::ports::SkillRepository;
use crate::task::{
    domain::{
        Page, PageInfo, PageRequest, ParentTaskSummary, Task, TaskDetail, TaskId, TaskListItem,
    },
    ports::{TaskListFilter, TaskRepository},
};
use mockable::Clock;
use std::future::Future;
use std::pin::Pin;

/// Depth of nested subtasks resolved in detail views. The deepest level
/// carries an empty subtask list even when further descendants exist.
pub(super) const SUBTASK_DEPTH: usize = 2;

impl<TR, DR, SR, P, C> TaskAdmissionService<TR, DR, SR, P, C>
where
    TR: TaskRepository,
    DR: DeveloperRepository,
    SR: SkillRepository,
    P: SkillPredictor,
    C: Clock + Send + Sync,
{
    /// Retrieves a task's full detail view: skills, developer, immediate
    /// parent summary, and subtasks nested two levels deep.
    ///
    /// Returns `Ok(None)` when the task does not exist; callers map that to
    /// their own not-found representation.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskAdmissionError`] when a store lookup fails.
    pub async fn get_task(&self, id: TaskId) -> TaskAdmissionResult<Option<TaskDetail>> {
        let Some(task) = self.tasks.find_by_id(id).await? else {
            return Ok(None);
        };
        let detail = self.build_detail(task, SUBTASK_DEPTH, true).await?;
        Ok(Some(detail))
    }

    /// Lists tasks matching the filter, newest first, one page at a time.
    ///
    /// Each row carries a computed direct-subtask count instead of nested
    /// subtask payloads.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskAdmissionError`] when a store lookup fails.
    pub async fn list_tasks(
        &self,
        filter: &TaskListFilter,
        page: PageRequest,
    ) -> TaskAdmissionResult<Page<TaskListItem>> {
        let total_items = self.tasks.count(filter).await?;
        let rows = self
            .tasks
            .find_page(filter, page.skip(), page.page_size())
            .await?;

        let mut data = Vec::with_capacity(rows.len());
        for task in rows {
            data.push(self.build_list_item(task).await?);
        }

        Ok(Page {
            data,
            pagination: PageInfo::compute(page, total_items),
        })
    }

    async fn build_list_item(&self, task: Task) -> TaskAdmissionResult<TaskListItem> {
        let skills = self.skills.find_by_ids(task.skill_ids()).await?;
        let developer = self.resolve_developer_ref(&task).await?;
        let subtask_count = self.tasks.count_subtasks(task.id()).await?;

        Ok(TaskListItem {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            status: task.status(),
            skills: skills.iter().map(|skill| skill.to_ref()).collect(),
            developer,
            parent_task_id: task.parent_task_id(),
            subtask_count,
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        })
    }

    async fn resolve_developer_ref(
        &self,
        task: &Task,
    ) -> TaskAdmissionResult<Option<DeveloperRef>> {
        // A dangling assignee reference reads as unassigned (set-null
        // semantics on developer deletion).
        match task.developer_id() {
            Some(developer_id) => Ok(self
                .developers
                .find_by_id(developer_id)
                .await?
                .map(|developer| developer.to_ref())),
            None => Ok(None),
        }
    }

    /// Builds a detail view, recursing through subtasks down to `depth`
    /// further levels. Only the root of a detail query resolves its parent
    /// summary.
    pub(super) fn build_detail(
        &self,
        task: Task,
        depth: usize,
        include_parent: bool,
    ) -> Pin<Box<dyn Future<Output = TaskAdmissionResult<TaskDetail>> + Send + '_>> {
        Box::pin(async move {
            let skills = self.skills.find_by_ids(task.skill_ids()).await?;
            let developer = self.resolve_developer_ref(&task).await?;

            let parent_task = if include_parent {
                self.resolve_parent_summary(&task).await?
            } else {
                None
            };

            let mut subtasks = Vec::new();
            if depth > 0 {
                for subtask in self.tasks.find_subtasks(task.id()).await? {
                    subtasks.push(self.build_detail(subtask, depth - 1, false).await?);
                }
            }

            Ok(TaskDetail {
                id: task.id(),
                title: task.title().as_str().to_owned(),
                status: task.status(),
                skills: skills.iter().map(|skill| skill.to_ref()).collect(),
                developer,
                parent_task,
                subtasks,
                created_at: task.created_at(),
                updated_at: task.updated_at(),
            })
        })
    }

    async fn resolve_parent_summary(
        &self,
        task: &Task,
    ) -> TaskAdmissionResult<Option<ParentTaskSummary>> {
        let Some(parent_task_id) = task.parent_task_id() else {
            return Ok(None);
        };
        Ok(self
            .tasks
            .find_by_id(parent_task_id)
            .await?
            .map(|parent| ParentTaskSummary {
                id: parent.id(),
                title: parent.title().as_str().to_owned(),
                status: parent.status(),
            }))
    }
}
