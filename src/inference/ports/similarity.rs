//! Similar-task lookup port.

use crate::skill::domain::SkillRef;
use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// A historical task surfaced as similar to a query title, with its
/// resolved skills as behavioral evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarTask {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Resolved required skills of the task.
    pub skills: Vec<SkillRef>,
}

/// Fuzzy title similarity contract.
#[async_trait]
pub trait SimilarTaskFinder: Send + Sync {
    /// Returns up to `limit` stored tasks most similar to `title`, ordered
    /// descending by relevance. Candidates below the similarity thresholds
    /// are excluded entirely; no match yields an empty vector. Each call
    /// runs a fresh query.
    ///
    /// # Errors
    ///
    /// Returns [`SimilarityError`] when the underlying stores fail.
    async fn find_similar(
        &self,
        title: &str,
        limit: usize,
    ) -> Result<Vec<SimilarTask>, SimilarityError>;
}

/// Errors returned by similar-task finder implementations.
#[derive(Debug, Clone, Error)]
pub enum SimilarityError {
    /// The underlying task or skill store failed.
    #[error("similarity source error: {0}")]
    Source(Arc<dyn std::error::Error + Send + Sync>),
}

impl SimilarityError {
    /// Wraps a source-store error.
    pub fn source(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Source(Arc::new(err))
    }
}
