//! Persistence gateway port for the remote document store.
//!
//! The gateway is the sole authority for identifier assignment and for
//! `created_at`/`updated_at` stamping on first write. Every operation either
//! succeeds or fails as a whole; there is no partial application.

use crate::task::domain::{
    CommentId, PersistedCommentData, PersistedTaskData, Priority, Status, TaskId, TaskPatch,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Field set sent to the gateway when creating a task.
///
/// Deliberately carries no identifier and no timestamps; both are assigned
/// by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaskRecord {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Initial column membership.
    pub status: Status,
    /// Initial priority, if any.
    pub priority: Option<Priority>,
    /// Due date, if any.
    pub due_date: Option<NaiveDate>,
}

/// Narrowed field set sent to the gateway when updating a task.
///
/// Only the fields present in `patch` are written, which keeps unrelated
/// server-side fields from being overwritten by a stale client copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMutationRecord {
    /// Fields to change.
    pub patch: TaskPatch,
    /// Refreshed mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Durable keyed storage contract for tasks and per-task comments.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Lists all task records, ordered by creation time descending.
    async fn list_tasks(&self) -> GatewayResult<Vec<PersistedTaskData>>;

    /// Stores a new task and returns the record with its assigned
    /// identifier and server timestamps.
    async fn create_task(&self, fields: NewTaskRecord) -> GatewayResult<PersistedTaskData>;

    /// Applies a narrowed mutation to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::TaskNotFound`] when the task does not exist.
    async fn update_task(&self, id: TaskId, mutation: TaskMutationRecord) -> GatewayResult<()>;

    /// Deletes a task and, transitively, all of its comments.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::TaskNotFound`] when the task does not exist.
    async fn delete_task(&self, id: TaskId) -> GatewayResult<()>;

    /// Lists the comments of one task, ordered by creation time descending.
    async fn list_comments(&self, task_id: TaskId) -> GatewayResult<Vec<PersistedCommentData>>;

    /// Stores a new comment under the given task and returns the record with
    /// its assigned identifier and server timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::TaskNotFound`] when the owning task does not
    /// exist.
    async fn create_comment(
        &self,
        task_id: TaskId,
        content: String,
    ) -> GatewayResult<PersistedCommentData>;

    /// Replaces the text of one comment.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::CommentNotFound`] when the comment does not
    /// exist under the task.
    async fn update_comment(
        &self,
        task_id: TaskId,
        comment_id: CommentId,
        content: String,
        updated_at: DateTime<Utc>,
    ) -> GatewayResult<()>;

    /// Deletes one comment.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::CommentNotFound`] when the comment does not
    /// exist under the task.
    async fn delete_comment(&self, task_id: TaskId, comment_id: CommentId) -> GatewayResult<()>;
}

/// Errors returned by gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The comment was not found under the given task.
    #[error("comment not found: {0}")]
    CommentNotFound(CommentId),

    /// Storage-backend failure.
    #[error("backend failure: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl GatewayError {
    /// Wraps a backend error.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
