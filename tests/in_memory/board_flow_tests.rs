//! End-to-end board flows over the in-memory store: create, reload, move,
//! edit, and delete across client sessions.

use std::sync::Arc;

use super::helpers::{TestGateway, assert_only_in_column, gateway, session};
use rstest::rstest;
use taskboard::task::domain::{Priority, Status, TaskDraft, TaskPatch};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_visible_to_a_later_session(
    gateway: Arc<TestGateway>,
) -> Result<(), eyre::Report> {
    let mut writer = session(&gateway);
    let draft = TaskDraft::new("Write spec", "")?;
    let id = writer.create_task(&draft).await?;

    let mut reader = session(&gateway);
    reader.load().await?;

    let task = reader.task(id).ok_or_else(|| eyre::eyre!("task missing"))?;
    eyre::ensure!(task.title() == "Write spec", "title mismatch");
    eyre::ensure!(task.status() == Status::Todo, "new task should be in todo");
    assert_only_in_column(&reader, id, Status::Todo)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moved_task_changes_column_durably(
    gateway: Arc<TestGateway>,
) -> Result<(), eyre::Report> {
    let mut writer = session(&gateway);
    let draft = TaskDraft::new("Write spec", "")?;
    let id = writer.create_task(&draft).await?;
    writer.move_task(id, Status::InProgress).await?;

    assert_only_in_column(&writer, id, Status::InProgress)?;

    let mut reader = session(&gateway);
    reader.load().await?;
    assert_only_in_column(&reader, id, Status::InProgress)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edits_survive_reload(gateway: Arc<TestGateway>) -> Result<(), eyre::Report> {
    let mut writer = session(&gateway);
    let draft = TaskDraft::new("Draft title", "original")?.with_priority(Priority::Low);
    let id = writer.create_task(&draft).await?;

    let patch = TaskPatch::new()
        .with_title("Final title")?
        .with_priority(Priority::High);
    writer.edit_task(id, &patch).await?;

    let mut reader = session(&gateway);
    reader.load().await?;
    let task = reader.task(id).ok_or_else(|| eyre::eyre!("task missing"))?;
    eyre::ensure!(task.title() == "Final title", "title not persisted");
    eyre::ensure!(
        task.priority() == Some(Priority::High),
        "priority not persisted"
    );
    eyre::ensure!(
        task.description() == "original",
        "description should be untouched"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_iterates_newest_task_first_after_reload(
    gateway: Arc<TestGateway>,
) -> Result<(), eyre::Report> {
    let mut writer = session(&gateway);
    writer.create_task(&TaskDraft::new("First", "")?).await?;
    writer.create_task(&TaskDraft::new("Second", "")?).await?;

    let mut reader = session(&gateway);
    reader.load().await?;

    let titles: Vec<&str> = reader.tasks().map(|t| t.title()).collect();
    eyre::ensure!(titles == vec!["Second", "First"], "unexpected order: {titles:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removed_task_and_comments_are_gone_for_later_sessions(
    gateway: Arc<TestGateway>,
) -> Result<(), eyre::Report> {
    let mut writer = session(&gateway);
    let id = writer.create_task(&TaskDraft::new("Doomed", "")?).await?;
    writer.add_comment(id, "attached note").await?;
    writer.remove_task(id).await?;

    let mut reader = session(&gateway);
    reader.load().await?;
    eyre::ensure!(reader.is_empty(), "board should be empty after removal");
    Ok(())
}
