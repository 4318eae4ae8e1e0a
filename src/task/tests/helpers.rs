//! Shared fixtures for task admission and query tests.

use std::sync::Arc;

use crate::developer::{
    adapters::memory::InMemoryDeveloperRepository,
    domain::{Developer, DeveloperName},
    ports::DeveloperRepository,
};
use crate::inference::{
    adapters::{memory::ScriptedCompletionClient, trigram::TrigramTaskFinder},
    services::SkillPredictorService,
};
use crate::skill::{
    adapters::memory::InMemorySkillRepository,
    domain::{Skill, SkillName},
    ports::SkillRepository,
};
use crate::task::{adapters::memory::InMemoryTaskRepository, services::TaskAdmissionService};
use mockable::DefaultClock;

pub(crate) type TestFinder = TrigramTaskFinder<InMemoryTaskRepository, InMemorySkillRepository>;
pub(crate) type TestPredictor = SkillPredictorService<TestFinder, ScriptedCompletionClient>;
pub(crate) type TestEngine = TaskAdmissionService<
    InMemoryTaskRepository,
    InMemoryDeveloperRepository,
    InMemorySkillRepository,
    TestPredictor,
    DefaultClock,
>;

/// Full engine wiring over in-memory adapters and a scripted oracle.
pub(crate) struct Harness {
    pub(crate) developers: Arc<InMemoryDeveloperRepository>,
    pub(crate) skills: Arc<InMemorySkillRepository>,
    pub(crate) oracle: ScriptedCompletionClient,
    pub(crate) engine: TestEngine,
}

impl Harness {
    /// Builds an engine whose oracle starts with no scripted responses, so
    /// unprompted predictions exercise the fallback path.
    pub(crate) fn new() -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let developers = Arc::new(InMemoryDeveloperRepository::new());
        let skills = Arc::new(InMemorySkillRepository::new());
        let oracle = ScriptedCompletionClient::unavailable();
        let finder = TestFinder::new(Arc::clone(&tasks), Arc::clone(&skills));
        let predictor = TestPredictor::new(Arc::new(finder), Arc::new(oracle.clone()));
        let engine = TestEngine::new(
            Arc::clone(&tasks),
            Arc::clone(&developers),
            Arc::clone(&skills),
            Arc::new(predictor),
            Arc::new(DefaultClock),
        );
        Self {
            developers,
            skills,
            oracle,
            engine,
        }
    }

    /// Seeds a catalogued skill.
    pub(crate) async fn seed_skill(&self, name: &str) -> Skill {
        let skill = Skill::new(SkillName::new(name).expect("valid skill name"));
        self.skills
            .store(&skill)
            .await
            .expect("skill seed should succeed");
        skill
    }

    /// Seeds a developer holding the given skills.
    pub(crate) async fn seed_developer(&self, name: &str, skills: &[Skill]) -> Developer {
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
