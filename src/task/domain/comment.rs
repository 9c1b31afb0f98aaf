//! Comment entity attached to a single task.

use super::{CommentId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamped text note owned by one task.
///
/// The `task_id` back-reference is a lookup aid only; ownership lives with
/// the task's comment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    task_id: TaskId,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedCommentData {
    /// Gateway-assigned comment identifier.
    pub id: CommentId,
    /// Identifier of the owning task.
    pub task_id: TaskId,
    /// Comment text.
    pub content: String,
    /// Gateway-stamped creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Reconstructs a comment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCommentData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            content: data.content,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the identifier of the owning task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the comment text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the comment text without touching timestamps.
    ///
    /// Timestamp reconciliation happens separately once the mutation is
    /// confirmed durable (see [`Comment::confirm_updated`]).
    pub(crate) fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Records the durably persisted `updated_at` for this comment.
    ///
    /// Timestamps never move backwards.
    pub(crate) fn confirm_updated(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(updated_at);
    }
}
