//! Shared test helpers for end-to-end engine tests.

use std::sync::Arc;

use foreman::developer::{
    adapters::memory::InMemoryDeveloperRepository,
    domain::{Developer, DeveloperName},
    ports::DeveloperRepository,
};
use foreman::inference::{
    adapters::{memory::ScriptedCompletionClient, trigram::TrigramTaskFinder},
    services::SkillPredictorService,
};
use foreman::skill::{
    adapters::memory::InMemorySkillRepository,
    domain::{Skill, SkillName},
    ports::SkillRepository,
};
use foreman::task::{adapters::memory::InMemoryTaskRepository, services::TaskAdmissionService};
use mockable::DefaultClock;

/// Fully wired admission engine type used by the end-to-end tests.
pub type Engine = TaskAdmissionService<
    InMemoryTaskRepository,
    InMemoryDeveloperRepository,
    InMemorySkillRepository,
    SkillPredictorService<
        TrigramTaskFinder<InMemoryTaskRepository, InMemorySkillRepository>,
        ScriptedCompletionClient,
    >,
    DefaultClock,
>;

/// Engine plus the seams the tests drive directly.
pub struct World {
    pub skills: Arc<InMemorySkillRepository>,
    pub developers: Arc<InMemoryDeveloperRepository>,
    pub oracle: ScriptedCompletionClient,
    pub engine: Engine,
}

impl World {
    /// Wires the engine over fresh in-memory stores and an oracle with no
    /// scripted responses (every completion fails until a response is
    /// pushed).
    #[must_use]
    pub fn new() -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let developers = Arc::new(InMemoryDeveloperRepository::new());
        let skills = Arc::new(InMemorySkillRepository::new());
        let oracle = ScriptedCompletionClient::unavailable();
        let finder = TrigramTaskFinder::new(Arc::clone(&tasks), Arc::clone(&skills));
        let predictor = SkillPredictorService::new(Arc::new(finder), Arc::new(oracle.clone()));
        let engine = TaskAdmissionService::new(
            tasks,
            Arc::clone(&developers),
            Arc::clone(&skills),
            Arc::new(predictor),
            Arc::new(DefaultClock),
        );
        Self {
            skills,
            developers,
            oracle,
            engine,
        }
    }

    /// Seeds a catalogued skill.
    pub async fn seed_skill(&self, name: &str) -> Skill {
        let skill = Skill::new(SkillName::new(name).expect("valid skill name"));
        self.skills
            .store(&skill)
            .await
            .expect("skill seed should succeed");
        skill
    }

    /// Seeds a developer holding the given skills.
    pub async fn seed_developer(&self, name: &str, skills: &[Skill]) -> Developer {
        let developer = Developer::new(
            DeveloperName::new(name).expect("valid developer name"),
            skills.iter().map(Skill::id).collect(),
            &DefaultClock,
        )
        .expect("valid developer");
        self.developers
            .store(&developer)
            .await
            .expect("developer seed should succeed");
        developer
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
