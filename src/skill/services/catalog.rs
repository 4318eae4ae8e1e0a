//! Read-only catalog service exposing skills to callers.

use crate::skill::{
    domain::{SkillId, SkillRef},
    ports::{SkillRepository, SkillRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for skill catalog queries.
#[derive(Debug, Error)]
pub enum SkillCatalogError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] SkillRepositoryError),
}

/// Read-only skill catalog service.
#[derive(Clone)]
pub struct SkillCatalogService<R>
where
    R: SkillRepository,
{
    repository: Arc<R>,
}

impl<R> SkillCatalogService<R>
where
    R: SkillRepository,
{
    /// Creates a new catalog service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every catalogued skill ordered by name ascending.
    ///
    /// # Errors
    ///
    /// Returns [`SkillCatalogError::Repository`] when the catalog lookup
    /// fails.
    pub async fn list_skills(&self) -> Result<Vec<SkillRef>, SkillCatalogError> {
        let skills = self.repository.find_all().await?;
        Ok(skills.iter().map(|skill| skill.to_ref()).collect())
    }

    /// Returns a single skill, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`SkillCatalogError::Repository`] when the catalog lookup
    /// fails.
    pub async fn get_skill(&self, id: SkillId) -> Result<Option<SkillRef>, SkillCatalogError> {
        let skill = self.repository.find_by_id(id).await?;
        Ok(skill.map(|found| found.to_ref()))
    }
}
