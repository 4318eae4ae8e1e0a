//! In-memory repository for task admission tests and embedders.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskListFilter, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    // Insertion sequence breaks creation-time ties deterministically.
    insertion_order: HashMap<TaskId, u64>,
    next_sequence: u64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(filter: &TaskListFilter, task: &Task) -> bool {
    if filter.parent_only && task.parent_task_id().is_some() {
        return false;
    }
    if filter
        .status
        .is_some_and(|status| task.status() != status)
    {
        return false;
    }
    if filter
        .developer_id
        .is_some_and(|developer_id| task.developer_id() != Some(developer_id))
    {
        return false;
    }
    if !filter.skill_ids.is_empty()
        && !filter
            .skill_ids
            .iter()
            .any(|skill_id| task.skill_ids().contains(skill_id))
    {
        return false;
    }
    true
}

fn collect_subtasks(state: &InMemoryTaskState, parent_id: TaskId) -> Vec<Task> {
    let mut subtasks: Vec<Task> = state
        .tasks
        .values()
        .filter(|task| task.parent_task_id() == Some(parent_id))
        .cloned()
        .collect();
    subtasks.sort_by_key(|task| {
        (
            task.created_at(),
            state.insertion_order.get(&task.id()).copied(),
        )
    });
    subtasks
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        if state
            .tasks
            .values()
            .any(|existing| existing.title() == task.title())
        {
            return Err(TaskRepositoryError::DuplicateTitle(
                task.title().as_str().to_owned(),
            ));
        }

        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.insertion_order.insert(task.id(), sequence);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn exists(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.contains_key(&id))
    }

    async fn title_exists(&self, title: &str) -> TaskRepositoryResult<bool> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .tasks
            .values()
            .any(|task| task.title().as_str() == title))
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        tasks.sort_by_key(|task| state.insertion_order.get(&task.id()).copied());
        Ok(tasks)
    }

    async fn find_subtasks(&self, parent_id: TaskId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(collect_subtasks(&state, parent_id))
    }

    async fn count_subtasks(&self, parent_id: TaskId) -> TaskRepositoryResult<usize> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.parent_task_id() == Some(parent_id))
            .count())
    }

    async fn count_incomplete_subtasks(&self, parent_id: TaskId) -> TaskRepositoryResult<usize> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .tasks
            .values()
            .filter(|task| {
                task.parent_task_id() == Some(parent_id) && task.status() != TaskStatus::Done
            })
            .count())
    }

    async fn find_page(
        &self,
        filter: &TaskListFilter,
        skip: usize,
        take: usize,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut matching: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| matches(filter, task))
            .cloned()
            .collect();
        // Creation time descending, newest insertion first on ties.
        matching.sort_by_key(|task| {
            (
                std::cmp::Reverse(task.created_at()),
                std::cmp::Reverse(state.insertion_order.get(&task.id()).copied()),
            )
        });
        Ok(matching.into_iter().skip(skip).take(take).collect())
    }

    async fn count(&self, filter: &TaskListFilter) -> TaskRepositoryResult<usize> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .tasks
            .values()
            .filter(|task| matches(filter, task))
            .count())
    }
}
