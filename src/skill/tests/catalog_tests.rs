//! Service tests for skill catalog queries.

use std::sync::Arc;

use crate::skill::{
    adapters::memory::InMemorySkillRepository,
    domain::{Skill, SkillId, SkillName},
    ports::{SkillRepository, SkillRepositoryError},
    services::SkillCatalogService,
};
use rstest::{fixture, rstest};

type TestService = SkillCatalogService<InMemorySkillRepository>;

#[fixture]
fn repository() -> Arc<InMemorySkillRepository> {
    Arc::new(InMemorySkillRepository::new())
}

fn skill(name: &str) -> Skill {
    Skill::new(SkillName::new(name).expect("valid skill name"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_skills_orders_by_name_ascending(repository: Arc<InMemorySkillRepository>) {
    for name in ["Frontend", "Backend", "Data"] {
        repository
            .store(&skill(name))
            .await
            .expect("seed should succeed");
    }
    let service = TestService::new(Arc::clone(&repository));

    let listed = service.list_skills().await.expect("listing should succeed");
    let names: Vec<&str> = listed.iter().map(|entry| entry.name.as_str()).collect();

    assert_eq!(names, vec!["Backend", "Data", "Frontend"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_skill_returns_none_when_missing(repository: Arc<InMemorySkillRepository>) {
    let service = TestService::new(repository);
    let fetched = service
        .get_skill(SkillId::new())
        .await
        .expect("lookup should succeed");
    assert!(fetched.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_rejects_duplicate_names(repository: Arc<InMemorySkillRepository>) {
    repository
        .store(&skill("Frontend"))
        .await
        .expect("first seed should succeed");

    let result = repository.store(&skill("Frontend")).await;

    assert!(matches!(
        result,
        Err(SkillRepositoryError::DuplicateName(_))
    ));
}
