//! Partial task update payload.

use super::{Priority, Status, TaskDomainError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Set of task fields to change, leaving every absent field untouched.
///
/// A patch is a pure merge payload: applying it changes exactly the fields
/// that are present and nothing else. Persistence sends only the present
/// fields, so unrelated server-side fields are never overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<NaiveDate>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            description: None,
            status: None,
            priority: None,
            due_date: None,
        }
    }

    /// Sets a replacement title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming, keeping blank titles unrepresentable in a patch.
    pub fn with_title(mut self, title: impl Into<String>) -> Result<Self, TaskDomainError> {
        let value: String = title.into();
        if value.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        self.title = Some(value);
        Ok(self)
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets a replacement priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets a replacement due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the replacement title, if present.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the replacement description, if present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the replacement status, if present.
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        self.status
    }

    /// Returns the replacement priority, if present.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the replacement due date, if present.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns `true` when the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }
}
