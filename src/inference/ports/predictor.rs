//! Skill predictor port consumed by the task admission engine.

use super::SimilarityError;
use crate::inference::domain::SkillPrediction;
use crate::skill::domain::Skill;
use async_trait::async_trait;
use thiserror::Error;

/// Skill prediction contract.
///
/// Implementations absorb oracle transport and parse failures internally
/// (falling back to deterministic heuristics); only failures of the
/// similarity evidence source propagate.
#[async_trait]
pub trait SkillPredictor: Send + Sync {
    /// Predicts the skills required by a task with the given title,
    /// choosing only from `available_skills`.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError::Similarity`] when the historical-evidence
    /// lookup fails.
    async fn predict(
        &self,
        title: &str,
        available_skills: &[Skill],
    ) -> Result<SkillPrediction, PredictionError>;
}

/// Errors returned by skill predictor implementations.
#[derive(Debug, Clone, Error)]
pub enum PredictionError {
    /// The similar-task evidence lookup failed.
    #[error(transparent)]
    Similarity(#[from] SimilarityError),
}
