//! Board state controller: the single writer for in-memory board state.

use super::error::{BoardError, BoardResult};
use super::projection::project;
use crate::task::domain::{CommentId, Status, Task, TaskDomainError, TaskDraft, TaskId, TaskPatch};
use crate::task::ports::PersistenceGateway;
use crate::task::services::TaskRepository;
use indexmap::IndexMap;
use mockable::Clock;

/// In-memory authority over all tasks on the board.
///
/// Mutations are applied optimistically, persisted through the repository,
/// and reconciled when the gateway responds: a confirmed mutation keeps the
/// optimistic value (with the durable `updated_at`), a rejected one restores
/// the pre-call snapshot and surfaces the error. All mutation goes through
/// `&mut self`, so operations complete in invocation order and readers only
/// ever observe projected `&Task` views.
///
/// Operations targeting a task or comment that is not in state are silent
/// no-ops with no persistence call: the identifier is treated as a stale
/// reference from a view that has since re-rendered.
pub struct BoardController<G, C>
where
    G: PersistenceGateway,
    C: Clock + Send + Sync,
{
    repository: TaskRepository<G, C>,
    tasks: IndexMap<TaskId, Task>,
}

impl<G, C> BoardController<G, C>
where
    G: PersistenceGateway,
    C: Clock + Send + Sync,
{
    /// Creates a controller with empty state over the given repository.
    #[must_use]
    pub fn new(repository: TaskRepository<G, C>) -> Self {
        Self {
            repository,
            tasks: IndexMap::new(),
        }
    }

    /// Fetches all tasks and their comments from persistence.
    ///
    /// State is replaced wholesale; listing order (newest task first) is
    /// preserved as the board's iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Load`] when the fetch fails, leaving state
    /// empty rather than partially populated.
    pub async fn load(&mut self) -> BoardResult<()> {
        self.tasks.clear();
        let loaded = self.repository.load_all().await.map_err(|source| {
            tracing::warn!(error = %source, "board load failed");
            BoardError::Load(source)
        })?;
        self.tasks = loaded.into_iter().map(|task| (task.id(), task)).collect();
        tracing::debug!(count = self.tasks.len(), "board loaded");
        Ok(())
    }

    /// Creates a task from a validated draft and returns its assigned
    /// identifier.
    ///
    /// The task is persisted first and inserted only from the
    /// repository-returned value, so a failed create leaves no trace in
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Create`] when persistence rejects the task.
    pub async fn create_task(&mut self, draft: &TaskDraft) -> BoardResult<TaskId> {
        let task = self.repository.create(draft).await.map_err(|source| {
            tracing::warn!(error = %source, "task creation failed");
            BoardError::Create(source)
        })?;
        let id = task.id();
        self.tasks.insert(id, task);
        Ok(id)
    }

    /// Moves a task to another column.
    ///
    /// The status change is applied optimistically and persisted as a
    /// status-only patch.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Update`] when persistence rejects the move; the
    /// task is restored to its pre-call status.
    pub async fn move_task(&mut self, id: TaskId, new_status: Status) -> BoardResult<()> {
        self.patch_task(id, &TaskPatch::new().with_status(new_status))
            .await
    }

    /// Merges the fields present in `patch` into a task.
    ///
    /// A pure patch: absent fields are untouched, never overwritten. An
    /// empty patch is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Update`] when persistence rejects the edit; the
    /// task is restored to its pre-call value.
    pub async fn edit_task(&mut self, id: TaskId, patch: &TaskPatch) -> BoardResult<()> {
        self.patch_task(id, patch).await
    }

    /// Deletes a task, dropping it and its comments from the board.
    ///
    /// The delete is persisted first; state changes only once the gateway
    /// confirms.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Update`] when persistence rejects the delete.
    pub async fn remove_task(&mut self, id: TaskId) -> BoardResult<()> {
        if !self.tasks.contains_key(&id) {
            tracing::debug!(task_id = %id, "remove ignored for unknown task");
            return Ok(());
        }
        self.repository.remove(id).await.map_err(|source| {
            tracing::warn!(task_id = %id, error = %source, "task deletion failed");
            BoardError::Update { id, source }
        })?;
        self.tasks.shift_remove(&id);
        Ok(())
    }

    /// Adds a comment to a task, prepending the repository-returned comment
    /// so the newest comment displays first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyComment`] when the content is blank
    /// after trimming, or [`BoardError::Comment`] when persistence rejects
    /// the comment; either way the comment list is unchanged.
    pub async fn add_comment(&mut self, id: TaskId, content: &str) -> BoardResult<()> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyComment.into());
        }
        if !self.tasks.contains_key(&id) {
            tracing::debug!(task_id = %id, "comment ignored for unknown task");
            return Ok(());
        }
        let comment = self
            .repository
            .create_comment(id, trimmed)
            .await
            .map_err(|source| {
                tracing::warn!(task_id = %id, error = %source, "comment creation failed");
                BoardError::Comment { id, source }
            })?;
        if let Some(task) = self.tasks.get_mut(&id) {
            task.prepend_comment(comment);
        }
        Ok(())
    }

    /// Replaces the text of one comment.
    ///
    /// A missing comment is a no-op with no persistence call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyComment`] when the content is blank
    /// after trimming, or [`BoardError::Comment`] when persistence rejects
    /// the edit; the optimistic text change is rolled back.
    pub async fn edit_comment(
        &mut self,
        id: TaskId,
        comment_id: CommentId,
        content: &str,
    ) -> BoardResult<()> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyComment.into());
        }
        let Some(task) = self.tasks.get_mut(&id) else {
            tracing::debug!(task_id = %id, "comment edit ignored for unknown task");
            return Ok(());
        };
        let Some(snapshot) = task.comment(comment_id).cloned() else {
            tracing::debug!(task_id = %id, comment_id = %comment_id, "edit ignored for unknown comment");
            return Ok(());
        };

        task.set_comment_content(comment_id, trimmed);
        match self.repository.update_comment(id, comment_id, trimmed).await {
            Ok(updated_at) => {
                task.confirm_comment_updated(comment_id, updated_at);
                Ok(())
            }
            Err(source) => {
                task.set_comment_content(comment_id, snapshot.content());
                tracing::warn!(task_id = %id, comment_id = %comment_id, error = %source,
                    "rolled back optimistic comment edit");
                Err(BoardError::Comment { id, source })
            }
        }
    }

    /// Deletes one comment from a task.
    ///
    /// A missing comment is a no-op with no persistence call.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Comment`] when persistence rejects the delete;
    /// the optimistic removal is rolled back.
    pub async fn delete_comment(&mut self, id: TaskId, comment_id: CommentId) -> BoardResult<()> {
        let Some(task) = self.tasks.get_mut(&id) else {
            tracing::debug!(task_id = %id, "comment delete ignored for unknown task");
            return Ok(());
        };
        if task.comment(comment_id).is_none() {
            tracing::debug!(task_id = %id, comment_id = %comment_id, "delete ignored for unknown comment");
            return Ok(());
        }

        let snapshot = task.clone();
        task.remove_comment(comment_id);
        match self.repository.delete_comment(id, comment_id).await {
            Ok(()) => Ok(()),
            Err(source) => {
                *task = snapshot;
                tracing::warn!(task_id = %id, comment_id = %comment_id, error = %source,
                    "rolled back optimistic comment deletion");
                Err(BoardError::Comment { id, source })
            }
        }
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Iterates over all tasks in the board's stable insertion order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Projects the tasks of one column, in board iteration order.
    #[must_use]
    pub fn column(&self, status: Status) -> Vec<&Task> {
        project(self.tasks.values(), status)
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Shared optimistic-then-persist path for task mutations.
    ///
    /// Applies the patch in memory, persists the narrowed mutation, then
    /// either reconciles the durable `updated_at` or restores the pre-call
    /// snapshot.
    async fn patch_task(&mut self, id: TaskId, patch: &TaskPatch) -> BoardResult<()> {
        let Some(task) = self.tasks.get_mut(&id) else {
            tracing::debug!(task_id = %id, "update ignored for unknown task");
            return Ok(());
        };
        if patch.is_empty() {
            return Ok(());
        }

        let snapshot = task.clone();
        task.apply(patch);
        match self.repository.update(id, patch).await {
            Ok(updated_at) => {
                task.confirm_updated(updated_at);
                Ok(())
            }
            Err(source) => {
                *task = snapshot;
                tracing::warn!(task_id = %id, error = %source, "rolled back optimistic task update");
                Err(BoardError::Update { id, source })
            }
        }
    }
}
