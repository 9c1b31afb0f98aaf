//! Repository service tests: domain assembly, timestamp policy, and
//! narrowed persistence.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryGateway,
    domain::{Priority, Status, TaskDraft, TaskPatch},
    services::TaskRepository,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestRepository = TaskRepository<InMemoryGateway<DefaultClock>, DefaultClock>;

#[fixture]
fn repository() -> TestRepository {
    let clock = Arc::new(DefaultClock);
    let gateway = Arc::new(InMemoryGateway::new(Arc::clone(&clock)));
    TaskRepository::new(gateway, clock)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_returns_todo_task_without_comments(repository: TestRepository) {
    let draft = TaskDraft::new("Write spec", "outline the sync contract")
        .expect("valid draft")
        .with_priority(Priority::Medium);

    let task = repository
        .create(&draft)
        .await
        .expect("create should succeed");

    assert_eq!(task.title(), "Write spec");
    assert_eq!(task.status(), Status::Todo);
    assert_eq!(task.priority(), Some(Priority::Medium));
    assert!(task.comments().is_empty());
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn load_all_assembles_tasks_with_their_comments(repository: TestRepository) {
    let draft = TaskDraft::new("Discussion", "").expect("valid draft");
    let task = repository
        .create(&draft)
        .await
        .expect("create should succeed");
    repository
        .create_comment(task.id(), "hello")
        .await
        .expect("comment should persist");
    repository
        .create_comment(task.id(), "world")
        .await
        .expect("comment should persist");

    let loaded = repository.load_all().await.expect("load should succeed");

    let reloaded = loaded.first().expect("task should be loaded");
    assert_eq!(reloaded.id(), task.id());
    let contents: Vec<&str> = reloaded.comments().iter().map(|c| c.content()).collect();
    assert_eq!(contents, vec!["world", "hello"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_returns_the_stamped_timestamp(repository: TestRepository) {
    let draft = TaskDraft::new("Move me", "").expect("valid draft");
    let task = repository
        .create(&draft)
        .await
        .expect("create should succeed");

    let stamped = repository
        .update(task.id(), &TaskPatch::new().with_status(Status::Done))
        .await
        .expect("update should succeed");

    let loaded = repository.load_all().await.expect("load should succeed");
    let reloaded = loaded.first().expect("task should be loaded");
    assert_eq!(reloaded.status(), Status::Done);
    assert_eq!(reloaded.updated_at(), stamped);
    assert!(stamped >= task.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_erases_task_and_comments(repository: TestRepository) {
    let draft = TaskDraft::new("Doomed", "").expect("valid draft");
    let task = repository
        .create(&draft)
        .await
        .expect("create should succeed");
    repository
        .create_comment(task.id(), "gone soon")
        .await
        .expect("comment should persist");

    repository
        .remove(task.id())
        .await
        .expect("remove should succeed");

    assert!(repository
        .load_all()
        .await
        .expect("load should succeed")
        .is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_comment_references_owning_task(repository: TestRepository) {
    let draft = TaskDraft::new("Owner", "").expect("valid draft");
    let task = repository
        .create(&draft)
        .await
        .expect("create should succeed");

    let comment = repository
        .create_comment(task.id(), "note")
        .await
        .expect("comment should persist");

    assert_eq!(comment.task_id(), task.id());
    assert_eq!(comment.content(), "note");
    assert_eq!(comment.created_at(), comment.updated_at());
}
