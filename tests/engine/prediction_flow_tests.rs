//! Oracle-driven and fallback skill inference through the public API.

use super::helpers::World;
use foreman::task::domain::TaskStatus;
use foreman::task::services::{AdmissionErrorKind, CreateTaskRequest};
use rstest::{fixture, rstest};

#[fixture]
fn world() -> World {
    World::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unavailable_oracle_resolves_build_login_page_to_frontend(world: World) {
    world.seed_skill("Frontend").await;
    world.seed_skill("Backend").await;

    let detail = world
        .engine
        .create_task(CreateTaskRequest::new("Build login page"))
        .await
        .expect("fallback admission should succeed");

    assert_eq!(detail.status, TaskStatus::ToDo);
    let names: Vec<&str> = detail
        .skills
        .iter()
        .map(|skill| skill.name.as_str())
        .collect();
    assert_eq!(names, vec!["Frontend"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn oracle_prediction_draws_on_similar_historical_tasks(world: World) {
    let frontend = world.seed_skill("Frontend").await;
    world.seed_skill("Backend").await;
    // History: two similar frontend tasks the finder should surface.
    for title in ["Build signup page", "Build profile page"] {
        world
            .engine
            .create_task(CreateTaskRequest::new(title).with_skills([frontend.id()]))
            .await
            .expect("history creation should succeed");
    }
    world.oracle.push_response(
        r#"{"skills": ["Frontend"], "confidence": {"Frontend": 0.92}, "reasoning": "matches history"}"#,
    );
    world.oracle.push_response(
        r#"{"skills": ["Frontend"], "confidence": {"Frontend": 0.97}, "reasoning": "history confirms"}"#,
    );

    let detail = world
        .engine
        .create_task(CreateTaskRequest::new("Build login page"))
        .await
        .expect("predicted admission should succeed");

    let names: Vec<&str> = detail
        .skills
        .iter()
        .map(|skill| skill.name.as_str())
        .collect();
    assert_eq!(names, vec!["Frontend"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_catalog_fails_prediction_fatally(world: World) {
    let result = world
        .engine
        .create_task(CreateTaskRequest::new("Anything"))
        .await;

    let error = result.expect_err("prediction without a catalog must fail");
    assert_eq!(error.kind(), AdmissionErrorKind::Configuration);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn prediction_outside_the_catalog_is_an_invalid_request(world: World) {
    world.seed_skill("Frontend").await;
    world
        .oracle
        .push_response(r#"{"skills": ["Alchemy"], "confidence": {}, "reasoning": "?"}"#);
    world
        .oracle
        .push_response(r#"{"skills": ["Alchemy"], "confidence": {}, "reasoning": "?"}"#);

    let result = world
        .engine
        .create_task(CreateTaskRequest::new("Transmute the monolith"))
        .await;

    let error = result.expect_err("unusable prediction must be rejected");
    assert_eq!(error.kind(), AdmissionErrorKind::InvalidRequest);
    assert!(error.to_string().contains("specify skills manually"));
}
