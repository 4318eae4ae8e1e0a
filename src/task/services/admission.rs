//! Task admission and mutation engine.
//!
//! The admission service is the validate-then-persist path for tasks. It
//! enforces title uniqueness, skill-set integrity, hierarchy integrity,
//! and developer-skill compatibility, and fills in missing skill
//! requirements through the skill predictor port. Validation is fail-fast:
//! the first violated rule aborts the operation with no partial
//! persistence.

use crate::developer::{domain::DeveloperId, ports::{DeveloperRepository, DeveloperRepositoryError}};
use crate::inference::ports::{PredictionError, SkillPredictor};
use crate::skill::{
    domain::{Skill, SkillId},
    ports::{SkillRepository, SkillRepositoryError},
};
use crate::task::{
    domain::{ParseTaskStatusError, Task, TaskDetail, TaskDomainError, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// When `skill_ids` is omitted or empty the admission service invokes the
/// skill predictor to infer the requirement from the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(crate) title: String,
    pub(crate) skill_ids: Option<Vec<SkillId>>,
    pub(crate) developer_id: Option<DeveloperId>,
    pub(crate) parent_task_id: Option<TaskId>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            skill_ids: None,
            developer_id: None,
            parent_task_id: None,
        }
    }

    /// Sets the required skill identifiers explicitly.
    #[must_use]
    pub fn with_skills(mut self, skill_ids: impl IntoIterator<Item = SkillId>) -> Self {
        self.skill_ids = Some(skill_ids.into_iter().collect());
        self
    }

    /// Assigns an owning developer.
    #[must_use]
    pub const fn with_developer(mut self, developer_id: DeveloperId) -> Self {
        self.developer_id = Some(developer_id);
        self
    }

    /// Attaches the task under a parent.
    #[must_use]
    pub const fn with_parent(mut self, parent_task_id: TaskId) -> Self {
        self.parent_task_id = Some(parent_task_id);
        self
    }
}

/// Requested change to a task's owning developer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeveloperChange {
    /// Assign the given developer; their skills must cover the task's.
    Assign(DeveloperId),
    /// Remove the current assignee. Always succeeds.
    Unassign,
}

/// Request payload for updating a task. At least one field must be
/// present; an omitted field leaves the corresponding value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    pub(crate) status: Option<String>,
    pub(crate) developer: Option<DeveloperChange>,
}

impl UpdateTaskRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a status change. The raw string is validated by the
    /// admission service.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Requests a developer assignment change.
    #[must_use]
    pub const fn with_developer(mut self, change: DeveloperChange) -> Self {
        self.developer = Some(change);
        self
    }
}

/// Stable machine-checkable classification of admission errors, used by
/// callers to select a response category without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionErrorKind {
    /// Malformed or contradictory caller input.
    InvalidRequest,
    /// A referenced entity is absent.
    NotFound,
    /// A system-level precondition is unmet.
    Configuration,
    /// Store or oracle-evidence failure; reported generically.
    Internal,
}

/// Service-level errors for task admission and mutation.
#[derive(Debug, Error)]
pub enum TaskAdmissionError {
    /// Title validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The title is already used by another task.
    #[error("Task with title \"{0}\" already exists")]
    DuplicateTitle(String),

    /// The requested skill list contains the same identifier twice.
    #[error("Duplicate skill IDs are not allowed")]
    DuplicateSkillIds,

    /// A referenced entity is absent. The entity label names everything
    /// missing; `id` is the first missing identifier.
    #[error("{entity} with ID {id} not found")]
    EntityNotFound {
        /// Label describing the missing entity or entities.
        entity: String,
        /// Identifying ID of the (first) missing entity.
        id: String,
    },

    /// The developer lacks skills required by the task.
    #[error("Developer {name} does not have required skill(s) with ID(s): {}", join_skill_ids(.missing))]
    MissingDeveloperSkills {
        /// Developer display name.
        name: String,
        /// Required skills the developer lacks, in request order.
        missing: Vec<SkillId>,
    },

    /// An update request carried no fields.
    #[error("At least one field (developerId or status) must be provided for update")]
    EmptyUpdate,

    /// The requested status string is not a valid task status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// A task cannot become `Done` while direct subtasks are incomplete.
    #[error("Cannot mark task as Done. {count} subtask(s) are not complete.")]
    IncompleteSubtasks {
        /// Number of direct subtasks not yet `Done`.
        count: usize,
    },

    /// The predictor produced no usable skills for the title.
    #[error("LLM could not determine valid skills. Please specify skills manually.")]
    UndeterminedSkills,

    /// Prediction was requested but the catalog holds no skills at all.
    #[error("No skills configured in the system. Please add skills first.")]
    NoSkillsConfigured,

    /// Task store failure.
    #[error(transparent)]
    TaskStore(#[from] TaskRepositoryError),

    /// Skill store failure.
    #[error(transparent)]
    SkillStore(#[from] SkillRepositoryError),

    /// Developer store failure.
    #[error(transparent)]
    DeveloperStore(#[from] DeveloperRepositoryError),

    /// Similarity-evidence failure during skill prediction.
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

impl TaskAdmissionError {
    /// Returns the stable classification of this error.
    #[must_use]
    pub const fn kind(&self) -> AdmissionErrorKind {
        match self {
            Self::Domain(_)
            | Self::DuplicateTitle(_)
            | Self::DuplicateSkillIds
            | Self::MissingDeveloperSkills { .. }
            | Self::EmptyUpdate
            | Self::InvalidStatus(_)
            | Self::IncompleteSubtasks { .. }
            | Self::UndeterminedSkills => AdmissionErrorKind::InvalidRequest,
            Self::EntityNotFound { .. } => AdmissionErrorKind::NotFound,
            Self::NoSkillsConfigured => AdmissionErrorKind::Configuration,
            Self::TaskStore(_)
            | Self::SkillStore(_)
            | Self::DeveloperStore(_)
            | Self::Prediction(_) => AdmissionErrorKind::Internal,
        }
    }
}

/// Result type for task admission service operations.
pub type TaskAdmissionResult<T> = Result<T, TaskAdmissionError>;

/// Joins skill identifiers for error display.
fn join_skill_ids(ids: &[SkillId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}

/// Builds the not-found error for missing skills: the entity label names
/// every missing identifier, the identifying ID is the first one.
fn missing_skills_error(missing: &[SkillId]) -> TaskAdmissionError {
    TaskAdmissionError::EntityNotFound {
        entity: format!("Skill(s) with ID(s) [{}]", join_skill_ids(missing)),
        id: missing
            .first()
            .map(ToString::to_string)
            .unwrap_or_default(),
    }
}

/// Task admission and mutation engine.
///
/// Owns no state beyond its injected ports; every operation is
/// request-scoped and issues no explicit locks.
#[derive(Clone)]
pub struct TaskAdmissionService<TR, DR, SR, P, C>
where
    TR: TaskRepository,
    DR: DeveloperRepository,
    SR: SkillRepository,
    P: SkillPredictor,
    C: Clock + Send + Sync,
{
    pub(crate) tasks: Arc<TR>,
    pub(crate) developers: Arc<DR>,
    pub(crate) skills: Arc<SR>,
    predictor: Arc<P>,
    clock: Arc<C>,
}

impl<TR, DR, SR, P, C> TaskAdmissionService<TR, DR, SR, P, C>
where
    TR: TaskRepository,
    DR: DeveloperRepository,
    SR: SkillRepository,
    P: SkillPredictor,
    C: Clock + Send + Sync,
{
    /// Creates a new admission service over the given ports.
    #[must_use]
    pub const fn new(
        tasks: Arc<TR>,
        developers: Arc<DR>,
        skills: Arc<SR>,
        predictor: Arc<P>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            developers,
            skills,
            predictor,
            clock,
        }
    }

    /// Admits a new task.
    ///
    /// Validation is fail-fast, in order: title (non-empty, at most 100
    /// characters, unused); skill prediction when no skills were requested;
    /// duplicate skill identifiers; skill existence; parent existence;
    /// developer existence and skill coverage. The persisted task starts in
    /// `To-do`. The returned detail carries no parent summary and an empty
    /// subtask list; the parent is not re-fetched at creation time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAdmissionError`] with kind `InvalidRequest`,
    /// `NotFound`, or `Configuration` for violated rules, or `Internal`
    /// for store failures.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskAdmissionResult<TaskDetail> {
        let title = TaskTitle::new(request.title.clone())?;
        if self.tasks.title_exists(title.as_str()).await? {
            return Err(TaskAdmissionError::DuplicateTitle(
                title.as_str().to_owned(),
            ));
        }

        let skill_ids = match request.skill_ids {
            Some(ref ids) if !ids.is_empty() => ids.clone(),
            _ => self.predict_skill_ids(title.as_str()).await?,
        };

        let unique: HashSet<SkillId> = skill_ids.iter().copied().collect();
        if unique.len() != skill_ids.len() {
            return Err(TaskAdmissionError::DuplicateSkillIds);
        }

        let catalogued = self.skills.find_by_ids(&skill_ids).await?;
        if catalogued.len() != skill_ids.len() {
            let found: HashSet<SkillId> = catalogued.iter().map(Skill::id).collect();
            let missing: Vec<SkillId> = skill_ids
                .iter()
                .copied()
                .filter(|id| !found.contains(id))
                .collect();
            return Err(missing_skills_error(&missing));
        }

        if let Some(parent_task_id) = request.parent_task_id {
            if !self.tasks.exists(parent_task_id).await? {
                return Err(TaskAdmissionError::EntityNotFound {
                    entity: "Parent Task".to_owned(),
                    id: parent_task_id.to_string(),
                });
            }
        }

        if let Some(developer_id) = request.developer_id {
            let developer = self
                .developers
                .find_by_id(developer_id)
                .await?
                .ok_or_else(|| TaskAdmissionError::EntityNotFound {
                    entity: "Developer".to_owned(),
                    id: developer_id.to_string(),
                })?;
            let missing = developer.missing_skills(&skill_ids);
            if !missing.is_empty() {
                return Err(TaskAdmissionError::MissingDeveloperSkills {
                    name: developer.name().as_str().to_owned(),
                    missing,
                });
            }
        }

        // Two independent store reads; resolved concurrently before
        // persistence.
        let (skills_result, developer_result) = tokio::join!(
            self.skills.find_by_ids(&skill_ids),
            async {
                match request.developer_id {
                    Some(developer_id) => self.developers.find_by_id(developer_id).await,
                    None => Ok(None),
                }
            }
        );
        let resolved_skills = skills_result?;
        let developer = developer_result?;

        let task = Task::new(
            title,
            skill_ids,
            request.developer_id,
            request.parent_task_id,
            &*self.clock,
        );
        self.tasks.store(&task).await?;

        Ok(TaskDetail {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            status: task.status(),
            skills: resolved_skills.iter().map(Skill::to_ref).collect(),
            developer: developer.map(|found| found.to_ref()),
            parent_task: None,
            subtasks: Vec::new(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        })
    }

    /// Updates a task's status and/or developer assignment.
    ///
    /// Validation is fail-fast, in order: task existence; non-empty
    /// request; developer existence and coverage of the task's existing
    /// skills (unassignment always succeeds); status validity, with `Done`
    /// requiring every direct subtask to already be `Done`. The returned
    /// detail is re-fetched with relations.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAdmissionError`] with kind `InvalidRequest` or
    /// `NotFound` for violated rules, or `Internal` for store failures.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskAdmissionResult<TaskDetail> {
        let mut task = self.tasks.find_by_id(id).await?.ok_or_else(|| {
            TaskAdmissionError::EntityNotFound {
                entity: "Task".to_owned(),
                id: id.to_string(),
            }
        })?;

        if request.status.is_none() && request.developer.is_none() {
            return Err(TaskAdmissionError::EmptyUpdate);
        }

        if let Some(DeveloperChange::Assign(developer_id)) = request.developer {
            let developer = self
                .developers
                .find_by_id(developer_id)
                .await?
                .ok_or_else(|| TaskAdmissionError::EntityNotFound {
                    entity: "Developer".to_owned(),
                    id: developer_id.to_string(),
                })?;
            let missing = developer.missing_skills(task.skill_ids());
            if !missing.is_empty() {
                return Err(TaskAdmissionError::MissingDeveloperSkills {
                    name: developer.name().as_str().to_owned(),
                    missing,
                });
            }
        }

        let new_status = match request.status.as_deref() {
            Some(raw) => Some(TaskStatus::try_from(raw)?),
            None => None,
        };
        if new_status == Some(TaskStatus::Done) {
            let count = self.tasks.count_incomplete_subtasks(id).await?;
            if count > 0 {
                return Err(TaskAdmissionError::IncompleteSubtasks { count });
            }
        }

        if let Some(change) = request.developer {
            let developer_id = match change {
                DeveloperChange::Assign(developer_id) => Some(developer_id),
                DeveloperChange::Unassign => None,
            };
            task.assign_developer(developer_id, &*self.clock);
        }
        if let Some(status) = new_status {
            task.set_status(status, &*self.clock);
        }
        self.tasks.update(&task).await?;

        self.build_detail(task, super::query::SUBTASK_DEPTH, true)
            .await
    }

    /// Resolves the skill identifiers for a title through the predictor.
    async fn predict_skill_ids(&self, title: &str) -> TaskAdmissionResult<Vec<SkillId>> {
        let available = self.skills.find_all().await?;
        if available.is_empty() {
            return Err(TaskAdmissionError::NoSkillsConfigured);
        }

        let prediction = self.predictor.predict(title, &available).await?;
        let name_to_id: HashMap<&str, SkillId> = available
            .iter()
            .map(|skill| (skill.name().as_str(), skill.id()))
            .collect();
        let skill_ids: Vec<SkillId> = prediction
            .skill_names
            .iter()
            .filter_map(|name| name_to_id.get(name.as_str()).copied())
            .collect();

        if skill_ids.is_empty() {
            return Err(TaskAdmissionError::UndeterminedSkills);
        }
        Ok(skill_ids)
    }
}
