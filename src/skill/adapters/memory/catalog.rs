//! In-memory skill catalog.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::skill::{
    domain::{Skill, SkillId},
    ports::{SkillRepository, SkillRepositoryError, SkillRepositoryResult},
};

/// Thread-safe in-memory skill repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySkillRepository {
    state: Arc<RwLock<HashMap<SkillId, Skill>>>,
}

impl InMemorySkillRepository {
    /// Creates an empty in-memory catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SkillRepository for InMemorySkillRepository {
    async fn store(&self, skill: &Skill) -> SkillRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            SkillRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&skill.id()) {
            return Err(SkillRepositoryError::DuplicateSkill(skill.id()));
        }
        if state.values().any(|existing| existing.name() == skill.name()) {
            return Err(SkillRepositoryError::DuplicateName(skill.name().clone()));
        }
        state.insert(skill.id(), skill.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: SkillId) -> SkillRepositoryResult<Option<Skill>> {
        let state = self.state.read().map_err(|err| {
            SkillRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[SkillId]) -> SkillRepositoryResult<Vec<Skill>> {
        let state = self.state.read().map_err(|err| {
            SkillRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(ids
            .iter()
            .filter_map(|id| state.get(id).cloned())
            .collect())
    }

    async fn find_all(&self) -> SkillRepositoryResult<Vec<Skill>> {
        let state = self.state.read().map_err(|err| {
            SkillRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut skills: Vec<Skill> = state.values().cloned().collect();
        skills.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        Ok(skills)
    }

    async fn exists(&self, id: SkillId) -> SkillRepositoryResult<bool> {
        let state = self.state.read().map_err(|err| {
            SkillRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.contains_key(&id))
    }
}
