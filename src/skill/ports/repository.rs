//! Repository port for skill catalog persistence and lookup.

use crate::skill::domain::{Skill, SkillId, SkillName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for skill repository operations.
pub type SkillRepositoryResult<T> = Result<T, SkillRepositoryError>;

/// Skill catalog persistence contract.
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Stores a new skill. This is the seed path; the core never creates
    /// skills while serving requests.
    ///
    /// # Errors
    ///
    /// Returns [`SkillRepositoryError::DuplicateSkill`] when the skill ID
    /// already exists or [`SkillRepositoryError::DuplicateName`] when the
    /// name is already catalogued.
    async fn store(&self, skill: &Skill) -> SkillRepositoryResult<()>;

    /// Finds a skill by identifier.
    ///
    /// Returns `None` when the skill does not exist.
    async fn find_by_id(&self, id: SkillId) -> SkillRepositoryResult<Option<Skill>>;

    /// Returns the subset of the given skills that exist, in catalog
    /// iteration order. Missing identifiers are silently absent from the
    /// result; callers compare lengths to detect them.
    async fn find_by_ids(&self, ids: &[SkillId]) -> SkillRepositoryResult<Vec<Skill>>;

    /// Returns every catalogued skill ordered by name ascending.
    async fn find_all(&self) -> SkillRepositoryResult<Vec<Skill>>;

    /// Reports whether a skill with the given identifier exists.
    async fn exists(&self, id: SkillId) -> SkillRepositoryResult<bool>;
}

/// Errors returned by skill repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SkillRepositoryError {
    /// A skill with the same identifier already exists.
    #[error("duplicate skill identifier: {0}")]
    DuplicateSkill(SkillId),

    /// A skill with the same name already exists.
    #[error("duplicate skill name: {0}")]
    DuplicateName(SkillName),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SkillRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
