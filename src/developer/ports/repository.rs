//! Repository port for developer directory persistence and lookup.

use crate::developer::domain::{Developer, DeveloperId, DeveloperName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for developer repository operations.
pub type DeveloperRepositoryResult<T> = Result<T, DeveloperRepositoryError>;

/// Developer directory persistence contract.
#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    /// Stores a new developer. This is the seed path; the core never
    /// creates developers while serving requests.
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperRepositoryError::DuplicateDeveloper`] when the
    /// developer ID already exists or
    /// [`DeveloperRepositoryError::DuplicateName`] when the name is taken.
    async fn store(&self, developer: &Developer) -> DeveloperRepositoryResult<()>;

    /// Finds a developer (with their skill identifiers) by identifier.
    ///
    /// Returns `None` when the developer does not exist.
    async fn find_by_id(&self, id: DeveloperId) -> DeveloperRepositoryResult<Option<Developer>>;

    /// Returns every developer ordered by name ascending.
    async fn find_all(&self) -> DeveloperRepositoryResult<Vec<Developer>>;

    /// Reports whether a developer with the given identifier exists.
    async fn exists(&self, id: DeveloperId) -> DeveloperRepositoryResult<bool>;
}

/// Errors returned by developer repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DeveloperRepositoryError {
    /// A developer with the same identifier already exists.
    #[error("duplicate developer identifier: {0}")]
    DuplicateDeveloper(DeveloperId),

    /// A developer with the same name already exists.
    #[error("duplicate developer name: {0}")]
    DuplicateName(DeveloperName),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DeveloperRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
