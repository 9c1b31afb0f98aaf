//! Task aggregate root and creation payload.

use super::{Comment, CommentId, Priority, Status, TaskDomainError, TaskId, TaskPatch};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Owns its comment list exclusively; comments are held most-recent-first to
/// match reverse-chronological display. All mutation goes through the board
/// controller, which is the single writer for board state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: Status,
    priority: Option<Priority>,
    due_date: Option<NaiveDate>,
    comments: Vec<Comment>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
///
/// Comments travel separately because the gateway stores them as sub-records
/// under the task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedTaskData {
    /// Gateway-assigned task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted column membership.
    pub status: Status,
    /// Persisted priority, if any.
    pub priority: Option<Priority>,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Gateway-stamped creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for creating a new task.
///
/// New tasks always start in [`Status::Todo`] with an empty comment list;
/// identifier and timestamps are assigned by the gateway on first write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    priority: Option<Priority>,
}

impl TaskDraft {
    /// Creates a draft with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        let title_value: String = title.into();
        if title_value.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            title: title_value,
            description: description.into(),
            due_date: None,
            priority: None,
        })
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData, comments: Vec<Comment>) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            comments,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the column the task currently belongs to.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the priority, if one was set.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the priority used for display, defaulting to [`Priority::Low`].
    #[must_use]
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the comments, most recent first.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Looks up a comment by identifier.
    #[must_use]
    pub fn comment(&self, comment_id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id() == comment_id)
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

    /// Merges the fields present in `patch` into this task.
    ///
    /// Fields absent from the patch are untouched; `updated_at` is
    /// reconciled separately once the mutation is confirmed durable (see
    /// [`Task::confirm_updated`]).
    pub(crate) fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = patch.title() {
            self.title = title.to_owned();
        }
        if let Some(description) = patch.description() {
            self.description = description.to_owned();
        }
        if let Some(status) = patch.status() {
            self.status = status;
        }
        if let Some(priority) = patch.priority() {
            self.priority = Some(priority);
        }
        if let Some(due_date) = patch.due_date() {
            self.due_date = Some(due_date);
        }
    }

    /// Records the durably persisted `updated_at` for this task.
    ///
    /// Timestamps never move backwards.
    pub(crate) fn confirm_updated(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(updated_at);
    }

    /// Inserts a newly created comment at the front of the list.
    pub(crate) fn prepend_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    /// Replaces the text of one comment, reporting whether it was found.
    pub(crate) fn set_comment_content(&mut self, comment_id: CommentId, content: &str) -> bool {
        let Some(comment) = self.comments.iter_mut().find(|c| c.id() == comment_id) else {
            return false;
        };
        comment.set_content(content);
        true
    }

    /// Records the durably persisted `updated_at` for one comment.
    pub(crate) fn confirm_comment_updated(
        &mut self,
        comment_id: CommentId,
        updated_at: DateTime<Utc>,
    ) {
        if let Some(comment) = self.comments.iter_mut().find(|c| c.id() == comment_id) {
            comment.confirm_updated(updated_at);
        }
    }

    /// Removes one comment, reporting whether it was present.
    pub(crate) fn remove_comment(&mut self, comment_id: CommentId) -> bool {
        let len_before = self.comments.len();
        self.comments.retain(|c| c.id() != comment_id);
        self.comments.len() != len_before
    }
}
