//! Filtering and pagination behavior through the public API.

use super::helpers::World;
use foreman::task::domain::PageRequest;
use foreman::task::ports::TaskListFilter;
use foreman::task::services::CreateTaskRequest;
use rstest::{fixture, rstest};

#[fixture]
fn world() -> World {
    World::new()
}

#[rstest]
#[case(1, 4)]
#[case(2, 4)]
#[case(3, 4)]
#[case(1, 10)]
#[case(2, 10)]
#[tokio::test(flavor = "multi_thread")]
async fn pagination_invariants_hold_for_any_page(
    world: World,
    #[case] page: usize,
    #[case] page_size: usize,
) {
    let backend = world.seed_skill("Backend").await;
    for index in 0..9 {
        world
            .engine
            .create_task(
                CreateTaskRequest::new(format!("Queue worker task {index}"))
                    .with_skills([backend.id()]),
            )
            .await
            .expect("creation should succeed");
    }

    let result = world
        .engine
        .list_tasks(&TaskListFilter::default(), PageRequest::new(page, page_size))
        .await
        .expect("listing should succeed");

    let pagination = result.pagination;
    assert!(result.data.len() <= page_size);
    assert_eq!(pagination.total_items, 9);
    assert_eq!(pagination.has_next, page * page_size < pagination.total_items);
    assert_eq!(pagination.has_previous, page > 1);
    assert_eq!(
        pagination.total_pages,
        pagination.total_items.div_ceil(page_size)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_rows_count_their_subtasks(world: World) {
    let backend = world.seed_skill("Backend").await;
    let parent = world
        .engine
        .create_task(CreateTaskRequest::new("Shard the ledger").with_skills([backend.id()]))
        .await
        .expect("parent creation should succeed");
    for index in 0..3 {
        world
            .engine
            .create_task(
                CreateTaskRequest::new(format!("Shard the ledger part {index}"))
                    .with_skills([backend.id()])
                    .with_parent(parent.id),
            )
            .await
            .expect("child creation should succeed");
    }

    let page = world
        .engine
        .list_tasks(
            &TaskListFilter {
                parent_only: true,
                ..TaskListFilter::default()
            },
            PageRequest::default(),
        )
        .await
        .expect("listing should succeed");

    assert_eq!(page.data.len(), 1);
    let row = page.data.first().expect("one row");
    assert_eq!(row.subtask_count, 3);
}
