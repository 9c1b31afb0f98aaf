//! Domain model for board tasks and comments.
//!
//! The task domain models column membership, partial updates, and per-task
//! comment ownership while keeping all persistence concerns outside of the
//! domain boundary.

mod comment;
mod error;
mod ids;
mod patch;
mod priority;
mod status;
mod task;

pub use comment::{Comment, PersistedCommentData};
pub use error::{ParsePriorityError, ParseStatusError, TaskDomainError};
pub use ids::{CommentId, TaskId};
pub use patch::TaskPatch;
pub use priority::Priority;
pub use status::Status;
pub use task::{PersistedTaskData, Task, TaskDraft};
