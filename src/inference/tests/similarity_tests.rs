//! Tests for trigram similarity scoring and the repository-backed finder.

use std::sync::Arc;

use crate::inference::{
    adapters::trigram::TrigramTaskFinder,
    domain::{similarity, title_score, word_similarity},
    ports::SimilarTaskFinder,
};
use crate::skill::{
    adapters::memory::InMemorySkillRepository,
    domain::{Skill, SkillName},
    ports::SkillRepository,
};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskTitle},
    ports::TaskRepository,
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
fn identical_titles_score_one() {
    let score = similarity("Build login page", "Build login page");
    assert!((score - 1.0).abs() < f64::EPSILON);
}

#[rstest]
fn similarity_is_case_insensitive() {
    let score = similarity("BUILD LOGIN PAGE", "build login page");
    assert!((score - 1.0).abs() < f64::EPSILON);
}

#[rstest]
fn word_similarity_tolerates_word_order() {
    let score = word_similarity("login page", "page login");
    assert!((score - 1.0).abs() < f64::EPSILON);
}

#[rstest]
fn word_similarity_finds_query_inside_longer_title() {
    let score = word_similarity("login page", "Build the new login page for mobile");
    assert!(score > 0.9);
}

#[rstest]
fn unrelated_titles_fall_below_both_thresholds() {
    assert_eq!(title_score("Build login page", "Rotate signing keys"), None);
}

#[rstest]
fn disjoint_characters_score_zero() {
    let score = similarity("abc", "xyz");
    assert!(score.abs() < f64::EPSILON);
}

async fn seed_task(
    tasks: &InMemoryTaskRepository,
    skills: &[Skill],
    title: &str,
) {
    let task = Task::new(
        TaskTitle::new(title).expect("valid title"),
        skills.iter().map(Skill::id).collect(),
        None,
        None,
        &DefaultClock,
    );
    tasks.store(&task).await.expect("task seed should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finder_ranks_closest_titles_first_and_honours_limit() {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let skills = Arc::new(InMemorySkillRepository::new());
    let frontend = Skill::new(SkillName::new("Frontend").expect("valid skill name"));
    skills
        .store(&frontend)
        .await
        .expect("skill seed should succeed");

    let catalog = vec![frontend.clone()];
    seed_task(&tasks, &catalog, "Build login page").await;
    seed_task(&tasks, &catalog, "Build logout page").await;
    seed_task(&tasks, &catalog, "Rotate signing keys").await;
    seed_task(&tasks, &catalog, "Build login page for admins").await;

    let finder = TrigramTaskFinder::new(Arc::clone(&tasks), Arc::clone(&skills));
    let matches = finder
        .find_similar("Build login page", 2)
        .await
        .expect("search should succeed");

    assert_eq!(matches.len(), 2);
    let best = matches.first().expect("best match");
    assert_eq!(best.title, "Build login page");
    assert_eq!(best.skills.len(), 1);
    assert_eq!(
        best.skills.first().expect("one skill").name,
        "Frontend"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finder_returns_empty_when_nothing_clears_threshold() {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let skills = Arc::new(InMemorySkillRepository::new());
    seed_task(&tasks, &[], "Rotate signing keys").await;

    let finder = TrigramTaskFinder::new(Arc::clone(&tasks), Arc::clone(&skills));
    let matches = finder
        .find_similar("Polish onboarding visuals", 5)
        .await
        .expect("search should succeed");

    assert!(matches.is_empty());
}
