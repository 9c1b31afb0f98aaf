//! Comment lifecycle flows over the in-memory store.

use std::sync::Arc;

use super::helpers::{TestGateway, gateway, session};
use rstest::rstest;
use taskboard::task::domain::{Comment, TaskDraft};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comments_reload_newest_first(gateway: Arc<TestGateway>) -> Result<(), eyre::Report> {
    let mut writer = session(&gateway);
    let id = writer.create_task(&TaskDraft::new("Discussion", "")?).await?;
    writer.add_comment(id, "hello").await?;
    writer.add_comment(id, "world").await?;

    let mut reader = session(&gateway);
    reader.load().await?;

    let task = reader.task(id).ok_or_else(|| eyre::eyre!("task missing"))?;
    let contents: Vec<&str> = task.comments().iter().map(Comment::content).collect();
    eyre::ensure!(
        contents == vec!["world", "hello"],
        "unexpected order: {contents:?}"
    );
    for comment in task.comments() {
        eyre::ensure!(comment.task_id() == id, "comment back-reference mismatch");
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comment_content_is_stored_trimmed(
    gateway: Arc<TestGateway>,
) -> Result<(), eyre::Report> {
    let mut writer = session(&gateway);
    let id = writer.create_task(&TaskDraft::new("Tidy", "")?).await?;
    writer.add_comment(id, "  padded note  ").await?;

    let task = writer.task(id).ok_or_else(|| eyre::eyre!("task missing"))?;
    let comment = task
        .comments()
        .first()
        .ok_or_else(|| eyre::eyre!("comment missing"))?;
    eyre::ensure!(comment.content() == "padded note", "content not trimmed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comment_edits_persist_across_sessions(
    gateway: Arc<TestGateway>,
) -> Result<(), eyre::Report> {
    let mut writer = session(&gateway);
    let id = writer.create_task(&TaskDraft::new("Discussion", "")?).await?;
    writer.add_comment(id, "draft wording").await?;
    let comment_id = writer
        .task(id)
        .and_then(|task| task.comments().first().map(Comment::id))
        .ok_or_else(|| eyre::eyre!("comment missing"))?;

    writer.edit_comment(id, comment_id, "final wording").await?;

    let mut reader = session(&gateway);
    reader.load().await?;
    let task = reader.task(id).ok_or_else(|| eyre::eyre!("task missing"))?;
    let comment = task
        .comment(comment_id)
        .ok_or_else(|| eyre::eyre!("comment missing after reload"))?;
    eyre::ensure!(comment.content() == "final wording", "edit not persisted");
    eyre::ensure!(
        comment.updated_at() >= comment.created_at(),
        "updated_at should not precede created_at"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_comment_stays_deleted(gateway: Arc<TestGateway>) -> Result<(), eyre::Report> {
    let mut writer = session(&gateway);
    let id = writer.create_task(&TaskDraft::new("Discussion", "")?).await?;
    writer.add_comment(id, "temporary").await?;
    let comment_id = writer
        .task(id)
        .and_then(|task| task.comments().first().map(Comment::id))
        .ok_or_else(|| eyre::eyre!("comment missing"))?;

    writer.delete_comment(id, comment_id).await?;

    let mut reader = session(&gateway);
    reader.load().await?;
    let task = reader.task(id).ok_or_else(|| eyre::eyre!("task missing"))?;
    eyre::ensure!(task.comments().is_empty(), "comment should be gone");
    Ok(())
}
