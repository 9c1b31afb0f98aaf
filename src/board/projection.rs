//! Pure per-column projection of board state.

use crate::task::domain::{Status, Task};

/// Selects the tasks belonging to one column.
///
/// Pure filter: preserves the iteration order of the input, applies no
/// additional sort, and has no side effects, so repeated calls over
/// unchanged state yield identical output. Projecting every status
/// partitions the task set — each task appears in exactly one column.
#[must_use]
pub fn project<'a, I>(tasks: I, status: Status) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .filter(|task| task.status() == status)
        .collect()
}
