//! In-memory developer directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::developer::{
    domain::{Developer, DeveloperId},
    ports::{DeveloperRepository, DeveloperRepositoryError, DeveloperRepositoryResult},
};

/// Thread-safe in-memory developer repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeveloperRepository {
    state: Arc<RwLock<HashMap<DeveloperId, Developer>>>,
}

impl InMemoryDeveloperRepository {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeveloperRepository for InMemoryDeveloperRepository {
    async fn store(&self, developer: &Developer) -> DeveloperRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            DeveloperRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&developer.id()) {
            return Err(DeveloperRepositoryError::DuplicateDeveloper(developer.id()));
        }
        if state
            .values()
            .any(|existing| existing.name() == developer.name())
        {
            return Err(DeveloperRepositoryError::DuplicateName(
                developer.name().clone(),
            ));
        }
        state.insert(developer.id(), developer.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: DeveloperId) -> DeveloperRepositoryResult<Option<Developer>> {
        let state = self.state.read().map_err(|err| {
            DeveloperRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn find_all(&self) -> DeveloperRepositoryResult<Vec<Developer>> {
        let state = self.state.read().map_err(|err| {
            DeveloperRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut developers: Vec<Developer> = state.values().cloned().collect();
        developers.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        Ok(developers)
    }

    async fn exists(&self, id: DeveloperId) -> DeveloperRepositoryResult<bool> {
        let state = self.state.read().map_err(|err| {
            DeveloperRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.contains_key(&id))
    }
}
