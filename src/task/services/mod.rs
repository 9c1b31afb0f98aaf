//! Application services for task persistence.

mod repository;

pub use repository::{PersistenceError, RepositoryResult, TaskRepository};
