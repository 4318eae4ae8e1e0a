//! Read-only directory service exposing developers with resolved skills.

use crate::developer::{
    domain::{Developer, DeveloperId},
    ports::{DeveloperRepository, DeveloperRepositoryError},
};
use crate::skill::{
    domain::SkillRef,
    ports::{SkillRepository, SkillRepositoryError},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Directory view of a developer with resolved skill references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeveloperView {
    /// Developer identifier.
    pub id: DeveloperId,
    /// Developer display name.
    pub name: String,
    /// Resolved skill references.
    pub skills: Vec<SkillRef>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Service-level errors for developer directory queries.
#[derive(Debug, Error)]
pub enum DeveloperDirectoryError {
    /// The requested developer does not exist.
    #[error("Developer with ID {0} not found")]
    NotFound(DeveloperId),

    /// Developer repository operation failed.
    #[error(transparent)]
    Repository(#[from] DeveloperRepositoryError),

    /// Skill catalog lookup failed while resolving skill references.
    #[error(transparent)]
    Skills(#[from] SkillRepositoryError),
}

/// Read-only developer directory service.
#[derive(Clone)]
pub struct DeveloperDirectoryService<DR, SR>
where
    DR: DeveloperRepository,
    SR: SkillRepository,
{
    developers: Arc<DR>,
    skills: Arc<SR>,
}

impl<DR, SR> DeveloperDirectoryService<DR, SR>
where
    DR: DeveloperRepository,
    SR: SkillRepository,
{
    /// Creates a new directory service.
    #[must_use]
    pub const fn new(developers: Arc<DR>, skills: Arc<SR>) -> Self {
        Self { developers, skills }
    }

    /// Returns every developer ordered by name ascending, each with
    /// resolved skill references.
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperDirectoryError`] when a store lookup fails.
    pub async fn list_developers(&self) -> Result<Vec<DeveloperView>, DeveloperDirectoryError> {
        let developers = self.developers.find_all().await?;
        let mut views = Vec::with_capacity(developers.len());
        for developer in &developers {
            views.push(self.build_view(developer).await?);
        }
        Ok(views)
    }

    /// Returns a single developer with resolved skill references.
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperDirectoryError::NotFound`] when the developer is
    /// absent, or another [`DeveloperDirectoryError`] when a store lookup
    /// fails.
    pub async fn get_developer(
        &self,
        id: DeveloperId,
    ) -> Result<DeveloperView, DeveloperDirectoryError> {
        let developer = self
            .developers
            .find_by_id(id)
            .await?
            .ok_or(DeveloperDirectoryError::NotFound(id))?;
        self.build_view(&developer).await
    }

    async fn build_view(
        &self,
        developer: &Developer,
    ) -> Result<DeveloperView, DeveloperDirectoryError> {
        let skills = self.skills.find_by_ids(developer.skill_ids()).await?;
        Ok(DeveloperView {
            id: developer.id(),
            name: developer.name().as_str().to_owned(),
            skills: skills.iter().map(|skill| skill.to_ref()).collect(),
            created_at: developer.created_at(),
            updated_at: developer.updated_at(),
        })
    }
}
