//! Developer aggregate root.

use super::{DeveloperDomainError, DeveloperId};
use crate::skill::domain::SkillId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Maximum length for a developer name, matching the directory column width.
const MAX_NAME_LENGTH: usize = 100;

/// Validated developer name. Names are unique within the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeveloperName(String);

impl DeveloperName {
    /// Creates a validated developer name.
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperDomainError::EmptyName`] when the value is empty
    /// after trimming or [`DeveloperDomainError::NameTooLong`] when it
    /// exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, DeveloperDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(DeveloperDomainError::EmptyName);
        }

        if normalized.chars().count() > MAX_NAME_LENGTH {
            return Err(DeveloperDomainError::NameTooLong {
                limit: MAX_NAME_LENGTH,
            });
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the developer name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DeveloperName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DeveloperName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Developer aggregate root.
///
/// Skills are stored as identifiers; names are resolved through the skill
/// catalog when a view is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    id: DeveloperId,
    name: DeveloperName,
    skill_ids: Vec<SkillId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Developer {
    /// Creates a new developer with the given skill set.
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperDomainError::DuplicateSkill`] when the skill set
    /// contains the same identifier twice.
    pub fn new(
        name: DeveloperName,
        skill_ids: Vec<SkillId>,
        clock: &impl Clock,
    ) -> Result<Self, DeveloperDomainError> {
        let unique: HashSet<SkillId> = skill_ids.iter().copied().collect();
        if unique.len() != skill_ids.len() {
            return Err(DeveloperDomainError::DuplicateSkill);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: DeveloperId::new(),
            name,
            skill_ids,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the developer identifier.
    #[must_use]
    pub const fn id(&self) -> DeveloperId {
        self.id
    }

    /// Returns the developer name.
    #[must_use]
    pub const fn name(&self) -> &DeveloperName {
        &self.name
    }

    /// Returns the developer's skill identifiers.
    #[must_use]
    pub fn skill_ids(&self) -> &[SkillId] {
        &self.skill_ids
    }

    /// Reports whether the developer holds every skill in `required`.
    #[must_use]
    pub fn has_all_skills(&self, required: &[SkillId]) -> bool {
        let held: HashSet<SkillId> = self.skill_ids.iter().copied().collect();
        required.iter().all(|skill_id| held.contains(skill_id))
    }

    /// Returns the skills in `required` that the developer lacks, in the
    /// order they were requested.
    #[must_use]
    pub fn missing_skills(&self, required: &[SkillId]) -> Vec<SkillId> {
        let held: HashSet<SkillId> = self.skill_ids.iter().copied().collect();
        required
            .iter()
            .copied()
            .filter(|skill_id| !held.contains(skill_id))
            .collect()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the lightweight reference view of this developer.
    #[must_use]
    pub fn to_ref(&self) -> DeveloperRef {
        DeveloperRef {
            id: self.id,
            name: self.name.as_str().to_owned(),
        }
    }
}

/// Lightweight `{id, name}` projection of a developer, used in task views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperRef {
    /// Developer identifier.
    pub id: DeveloperId,
    /// Developer display name.
    pub name: String,
}
