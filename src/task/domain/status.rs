//! Board column membership for tasks.

use super::ParseStatusError;
use serde::{Deserialize, Serialize};

/// Column a task currently belongs to.
///
/// Every task carries exactly one status at all times; the status is the
/// sole partition key for column membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Work has not started.
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is blocked on something external.
    Pending,
    /// Work is finished.
    Done,
}

impl Status {
    /// All statuses in canonical board order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::Pending, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for Status {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "pending" => Ok(Self::Pending),
            "done" => Ok(Self::Done),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}
