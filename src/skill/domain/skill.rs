//! Skill aggregate root and reference view.

use super::{SkillDomainError, SkillId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a skill name, matching the catalog column width.
const MAX_NAME_LENGTH: usize = 100;

/// Validated skill name.
///
/// Names are unique within the catalog (e.g. `Frontend`, `Backend`). The
/// input is trimmed; case is preserved because names are displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillName(String);

impl SkillName {
    /// Creates a validated skill name.
    ///
    /// # Errors
    ///
    /// Returns [`SkillDomainError::EmptyName`] when the value is empty after
    /// trimming or [`SkillDomainError::NameTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, SkillDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(SkillDomainError::EmptyName);
        }

        if normalized.chars().count() > MAX_NAME_LENGTH {
            return Err(SkillDomainError::NameTooLong {
                limit: MAX_NAME_LENGTH,
            });
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the skill name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SkillName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Skill aggregate root.
///
/// Skills are immutable after creation and seeded out-of-band; the core
/// only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    id: SkillId,
    name: SkillName,
}

impl Skill {
    /// Creates a new skill with a fresh identifier.
    #[must_use]
    pub fn new(name: SkillName) -> Self {
        Self {
            id: SkillId::new(),
            name,
        }
    }

    /// Reconstructs a skill with a known identifier.
    #[must_use]
    pub const fn with_id(id: SkillId, name: SkillName) -> Self {
        Self { id, name }
    }

    /// Returns the skill identifier.
    #[must_use]
    pub const fn id(&self) -> SkillId {
        self.id
    }

    /// Returns the skill name.
    #[must_use]
    pub const fn name(&self) -> &SkillName {
        &self.name
    }

    /// Returns the lightweight reference view of this skill.
    #[must_use]
    pub fn to_ref(&self) -> SkillRef {
        SkillRef {
            id: self.id,
            name: self.name.as_str().to_owned(),
        }
    }
}

/// Lightweight `{id, name}` projection of a skill, used in task and
/// developer views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRef {
    /// Skill identifier.
    pub id: SkillId,
    /// Skill display name.
    pub name: String,
}
