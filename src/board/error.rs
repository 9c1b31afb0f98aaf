//! Error taxonomy for board controller operations.

use crate::task::domain::{TaskDomainError, TaskId};
use crate::task::services::PersistenceError;
use thiserror::Error;

/// Result type for board controller operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors reported by the board controller.
///
/// Every variant is recoverable at the controller boundary: callers surface
/// a notification and the board stays usable. Persistence-backed variants
/// carry the repository failure as their source.
#[derive(Debug, Clone, Error)]
pub enum BoardError {
    /// Loading the board failed; state was left empty.
    #[error("failed to load board state")]
    Load(#[source] PersistenceError),

    /// Creating a task failed; no task was inserted.
    #[error("failed to create task")]
    Create(#[source] PersistenceError),

    /// Moving or editing a task failed; the optimistic change was rolled
    /// back.
    #[error("failed to update task {id}")]
    Update {
        /// Task the rejected mutation targeted.
        id: TaskId,
        /// Repository failure that rejected the mutation.
        #[source]
        source: PersistenceError,
    },

    /// A comment operation failed; the comment list was left as it was
    /// before the call.
    #[error("comment operation failed on task {id}")]
    Comment {
        /// Task owning the affected comment list.
        id: TaskId,
        /// Repository failure that rejected the mutation.
        #[source]
        source: PersistenceError,
    },

    /// Input validation failed before any state change.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}
