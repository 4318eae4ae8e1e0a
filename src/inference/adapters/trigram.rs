//! Similarity finder backed by the task repository and trigram scoring.

use crate::inference::domain::title_score;
use crate::inference::ports::{SimilarTask, SimilarTaskFinder, SimilarityError};
use crate::skill::ports::SkillRepository;
use crate::task::{domain::Task, ports::TaskRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Similar-task finder that scans the stored task corpus with
/// pg_trgm-style trigram scoring and resolves each match's skills through
/// the skill catalog.
#[derive(Clone)]
pub struct TrigramTaskFinder<TR, SR>
where
    TR: TaskRepository,
    SR: SkillRepository,
{
    tasks: Arc<TR>,
    skills: Arc<SR>,
}

impl<TR, SR> TrigramTaskFinder<TR, SR>
where
    TR: TaskRepository,
    SR: SkillRepository,
{
    /// Creates a new trigram-backed finder.
    #[must_use]
    pub const fn new(tasks: Arc<TR>, skills: Arc<SR>) -> Self {
        Self { tasks, skills }
    }

    async fn resolve(&self, task: &Task) -> Result<SimilarTask, SimilarityError> {
        let skills = self
            .skills
            .find_by_ids(task.skill_ids())
            .await
            .map_err(SimilarityError::source)?;
        Ok(SimilarTask {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            skills: skills.iter().map(|skill| skill.to_ref()).collect(),
        })
    }
}

#[async_trait]
impl<TR, SR> SimilarTaskFinder for TrigramTaskFinder<TR, SR>
where
    TR: TaskRepository,
    SR: SkillRepository,
{
    async fn find_similar(
        &self,
        title: &str,
        limit: usize,
    ) -> Result<Vec<SimilarTask>, SimilarityError> {
        let corpus = self
            .tasks
            .find_all()
            .await
            .map_err(SimilarityError::source)?;

        let mut scored: Vec<(f64, Task)> = corpus
            .into_iter()
            .filter_map(|task| {
                title_score(title, task.title().as_str()).map(|score| (score, task))
            })
            .collect();
        // Stable sort keeps corpus iteration order on score ties.
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(limit);

        let mut matches = Vec::with_capacity(scored.len());
        for (_, task) in &scored {
            matches.push(self.resolve(task).await?);
        }
        Ok(matches)
    }
}
