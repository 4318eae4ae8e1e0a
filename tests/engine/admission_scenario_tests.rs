//! Cross-operation admission scenarios driven through the public API.

use super::helpers::World;
use foreman::task::domain::TaskStatus;
use foreman::task::services::{
    AdmissionErrorKind, CreateTaskRequest, DeveloperChange, TaskAdmissionError, UpdateTaskRequest,
};
use rstest::{fixture, rstest};

#[fixture]
fn world() -> World {
    World::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parent_completes_only_after_its_subtask(world: World) {
    let backend = world.seed_skill("Backend").await;
    let parent = world
        .engine
        .create_task(CreateTaskRequest::new("Upgrade payment rails").with_skills([backend.id()]))
        .await
        .expect("parent creation should succeed");
    let child = world
        .engine
        .create_task(
            CreateTaskRequest::new("Switch card vault")
                .with_skills([backend.id()])
                .with_parent(parent.id),
        )
        .await
        .expect("child creation should succeed");
    world
        .engine
        .update_task(child.id, UpdateTaskRequest::new().with_status("In Progress"))
        .await
        .expect("child update should succeed");

    let blocked = world
        .engine
        .update_task(parent.id, UpdateTaskRequest::new().with_status("Done"))
        .await
        .expect_err("parent must not complete while the child is open");
    assert_eq!(blocked.kind(), AdmissionErrorKind::InvalidRequest);
    assert!(blocked.to_string().contains("1 subtask(s) are not complete"));

    world
        .engine
        .update_task(child.id, UpdateTaskRequest::new().with_status("Done"))
        .await
        .expect("child completion should succeed");
    let completed = world
        .engine
        .update_task(parent.id, UpdateTaskRequest::new().with_status("Done"))
        .await
        .expect("parent completion should now succeed");
    assert_eq!(completed.status, TaskStatus::Done);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignment_requires_skill_coverage(world: World) {
    let frontend = world.seed_skill("Frontend").await;
    let backend = world.seed_skill("Backend").await;
    let developer = world.seed_developer("Dana", &[frontend.clone()]).await;

    let rejected = world
        .engine
        .create_task(
            CreateTaskRequest::new("Full-stack search revamp")
                .with_skills([frontend.id(), backend.id()])
                .with_developer(developer.id()),
        )
        .await
        .expect_err("assignment must require coverage");
    assert_eq!(rejected.kind(), AdmissionErrorKind::InvalidRequest);
    assert!(rejected.to_string().contains(&backend.id().to_string()));

    // The same task without an assignee admits fine, and a covered
    // developer can pick it up later.
    let task = world
        .engine
        .create_task(
            CreateTaskRequest::new("Search revamp groundwork")
                .with_skills([frontend.id()]),
        )
        .await
        .expect("creation should succeed");
    let updated = world
        .engine
        .update_task(
            task.id,
            UpdateTaskRequest::new().with_developer(DeveloperChange::Assign(developer.id())),
        )
        .await
        .expect("covered assignment should succeed");
    assert_eq!(
        updated.developer.map(|dev| dev.name),
        Some("Dana".to_owned())
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_titles_are_rejected_across_requests(world: World) {
    let frontend = world.seed_skill("Frontend").await;
    world
        .engine
        .create_task(CreateTaskRequest::new("Refresh brand colors").with_skills([frontend.id()]))
        .await
        .expect("first creation should succeed");

    let duplicate = world
        .engine
        .create_task(CreateTaskRequest::new("Refresh brand colors").with_skills([frontend.id()]))
        .await
        .expect_err("duplicate title must be rejected");

    assert!(matches!(duplicate, TaskAdmissionError::DuplicateTitle(_)));
    assert_eq!(duplicate.kind(), AdmissionErrorKind::InvalidRequest);
}
