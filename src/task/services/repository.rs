//! Repository service translating domain operations into gateway calls.

use crate::task::{
    domain::{Comment, CommentId, Status, Task, TaskDraft, TaskId, TaskPatch},
    ports::{GatewayError, NewTaskRecord, PersistenceGateway, TaskMutationRecord},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Repository-level persistence failure with the gateway cause attached.
#[derive(Debug, Clone, Error)]
#[error("persistence failure during {operation}")]
pub struct PersistenceError {
    operation: &'static str,
    #[source]
    cause: GatewayError,
}

impl PersistenceError {
    const fn new(operation: &'static str, cause: GatewayError) -> Self {
        Self { operation, cause }
    }

    /// Names the repository operation that failed.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// Returns the underlying gateway failure.
    #[must_use]
    pub const fn cause(&self) -> &GatewayError {
        &self.cause
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, PersistenceError>;

/// Maps domain tasks and comments onto persistence gateway calls.
///
/// The repository owns the timestamp policy for updates: it stamps a
/// refreshed `updated_at` from the injected clock and returns it so callers
/// can reconcile their in-memory copies. On first writes the gateway stamps
/// instead; sharing one clock between repository and gateway keeps the two
/// comparable within a session. The repository never retries — retry policy
/// belongs to the gateway or to callers.
#[derive(Clone)]
pub struct TaskRepository<G, C>
where
    G: PersistenceGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
}

impl<G, C> TaskRepository<G, C>
where
    G: PersistenceGateway,
    C: Clock + Send + Sync,
{
    /// Creates a repository over the given gateway and clock.
    #[must_use]
    pub const fn new(gateway: Arc<G>, clock: Arc<C>) -> Self {
        Self { gateway, clock }
    }

    /// Fetches all tasks with their comments, newest task first.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the gateway rejects a read; no
    /// partial result is produced.
    pub async fn load_all(&self) -> RepositoryResult<Vec<Task>> {
        let records = self
            .gateway
            .list_tasks()
            .await
            .map_err(|cause| PersistenceError::new("list tasks", cause))?;

        let mut tasks = Vec::with_capacity(records.len());
        for record in records {
            let comments = self
                .gateway
                .list_comments(record.id)
                .await
                .map_err(|cause| PersistenceError::new("list comments", cause))?
                .into_iter()
                .map(Comment::from_persisted)
                .collect();
            tasks.push(Task::from_persisted(record, comments));
        }
        Ok(tasks)
    }

    /// Persists a new task from a validated draft.
    ///
    /// Sends the draft fields without an identifier; the returned task
    /// carries the gateway-assigned identifier and timestamps, starts in
    /// [`Status::Todo`], and has no comments.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the gateway rejects the write.
    pub async fn create(&self, draft: &TaskDraft) -> RepositoryResult<Task> {
        let fields = NewTaskRecord {
            title: draft.title().to_owned(),
            description: draft.description().to_owned(),
            status: Status::Todo,
            priority: draft.priority(),
            due_date: draft.due_date(),
        };
        let record = self
            .gateway
            .create_task(fields)
            .await
            .map_err(|cause| PersistenceError::new("create task", cause))?;
        Ok(Task::from_persisted(record, Vec::new()))
    }

    /// Persists a narrowed task mutation and returns the stamped
    /// `updated_at`.
    ///
    /// Only the fields present in `patch` are sent, plus the refreshed
    /// timestamp; unrelated fields are never resent.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the gateway rejects the write.
    pub async fn update(&self, id: TaskId, patch: &TaskPatch) -> RepositoryResult<DateTime<Utc>> {
        let updated_at = self.clock.utc();
        let mutation = TaskMutationRecord {
            patch: patch.clone(),
            updated_at,
        };
        self.gateway
            .update_task(id, mutation)
            .await
            .map_err(|cause| PersistenceError::new("update task", cause))?;
        Ok(updated_at)
    }

    /// Deletes a task and, transitively, all of its comments.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the gateway rejects the delete.
    pub async fn remove(&self, id: TaskId) -> RepositoryResult<()> {
        self.gateway
            .delete_task(id)
            .await
            .map_err(|cause| PersistenceError::new("delete task", cause))
    }

    /// Persists a new comment under `task_id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the gateway rejects the write.
    pub async fn create_comment(
        &self,
        task_id: TaskId,
        content: &str,
    ) -> RepositoryResult<Comment> {
        let record = self
            .gateway
            .create_comment(task_id, content.to_owned())
            .await
            .map_err(|cause| PersistenceError::new("create comment", cause))?;
        Ok(Comment::from_persisted(record))
    }

    /// Persists replacement text for one comment and returns the stamped
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the gateway rejects the write.
    pub async fn update_comment(
        &self,
        task_id: TaskId,
        comment_id: CommentId,
        content: &str,
    ) -> RepositoryResult<DateTime<Utc>> {
        let updated_at = self.clock.utc();
        self.gateway
            .update_comment(task_id, comment_id, content.to_owned(), updated_at)
            .await
            .map_err(|cause| PersistenceError::new("update comment", cause))?;
        Ok(updated_at)
    }

    /// Deletes one comment.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the gateway rejects the delete.
    pub async fn delete_comment(
        &self,
        task_id: TaskId,
        comment_id: CommentId,
    ) -> RepositoryResult<()> {
        self.gateway
            .delete_comment(task_id, comment_id)
            .await
            .map_err(|cause| PersistenceError::new("delete comment", cause))
    }
}
