//! In-memory persistence gateway.
//!
//! Faithful stand-in for the remote document store: it assigns identifiers,
//! stamps server timestamps on first write, lists by creation time
//! descending, and cascades task deletion to comments. Used by tests and as
//! the default wiring for sessions without a remote backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{CommentId, PersistedCommentData, PersistedTaskData, TaskId},
    ports::{GatewayError, GatewayResult, NewTaskRecord, PersistenceGateway, TaskMutationRecord},
};

/// Thread-safe in-memory document store.
#[derive(Debug, Clone)]
pub struct InMemoryGateway<C> {
    state: Arc<RwLock<GatewayState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct GatewayState {
    tasks: HashMap<TaskId, PersistedTaskData>,
    /// Task identifiers in creation order; listing reverses this.
    creation_order: Vec<TaskId>,
    /// Per-task comment records, newest first.
    comments: HashMap<TaskId, Vec<PersistedCommentData>>,
}

impl<C> InMemoryGateway<C> {
    /// Creates an empty gateway stamping timestamps from `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(GatewayState::default())),
            clock,
        }
    }

    fn read(&self) -> GatewayResult<RwLockReadGuard<'_, GatewayState>> {
        self.state
            .read()
            .map_err(|err| GatewayError::backend(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> GatewayResult<RwLockWriteGuard<'_, GatewayState>> {
        self.state
            .write()
            .map_err(|err| GatewayError::backend(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl<C> PersistenceGateway for InMemoryGateway<C>
where
    C: Clock + Send + Sync,
{
    async fn list_tasks(&self) -> GatewayResult<Vec<PersistedTaskData>> {
        let state = self.read()?;
        Ok(state
            .creation_order
            .iter()
            .rev()
            .filter_map(|id| state.tasks.get(id).cloned())
            .collect())
    }

    async fn create_task(&self, fields: NewTaskRecord) -> GatewayResult<PersistedTaskData> {
        let timestamp = self.clock.utc();
        let record = PersistedTaskData {
            id: TaskId::new(),
            title: fields.title,
            description: fields.description,
            status: fields.status,
            priority: fields.priority,
            due_date: fields.due_date,
            created_at: timestamp,
            updated_at: timestamp,
        };

        let mut state = self.write()?;
        state.creation_order.push(record.id);
        state.tasks.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_task(&self, id: TaskId, mutation: TaskMutationRecord) -> GatewayResult<()> {
        let mut state = self.write()?;
        let record = state
            .tasks
            .get_mut(&id)
            .ok_or(GatewayError::TaskNotFound(id))?;

        if let Some(title) = mutation.patch.title() {
            record.title = title.to_owned();
        }
        if let Some(description) = mutation.patch.description() {
            record.description = description.to_owned();
        }
        if let Some(status) = mutation.patch.status() {
            record.status = status;
        }
        if let Some(priority) = mutation.patch.priority() {
            record.priority = Some(priority);
        }
        if let Some(due_date) = mutation.patch.due_date() {
            record.due_date = Some(due_date);
        }
        record.updated_at = mutation.updated_at;
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> GatewayResult<()> {
        let mut state = self.write()?;
        if state.tasks.remove(&id).is_none() {
            return Err(GatewayError::TaskNotFound(id));
        }
        state.creation_order.retain(|task_id| *task_id != id);
        // Comments are sub-records with no independent lifecycle.
        state.comments.remove(&id);
        Ok(())
    }

    async fn list_comments(&self, task_id: TaskId) -> GatewayResult<Vec<PersistedCommentData>> {
        let state = self.read()?;
        Ok(state.comments.get(&task_id).cloned().unwrap_or_default())
    }

    async fn create_comment(
        &self,
        task_id: TaskId,
        content: String,
    ) -> GatewayResult<PersistedCommentData> {
        let timestamp = self.clock.utc();
        let mut state = self.write()?;
        if !state.tasks.contains_key(&task_id) {
            return Err(GatewayError::TaskNotFound(task_id));
        }

        let record = PersistedCommentData {
            id: CommentId::new(),
            task_id,
            content,
            created_at: timestamp,
            updated_at: timestamp,
        };
        state
            .comments
            .entry(task_id)
            .or_default()
            .insert(0, record.clone());
        Ok(record)
    }

    async fn update_comment(
        &self,
        task_id: TaskId,
        comment_id: CommentId,
        content: String,
        updated_at: DateTime<Utc>,
    ) -> GatewayResult<()> {
        let mut state = self.write()?;
        let record = state
            .comments
            .get_mut(&task_id)
            .and_then(|list| list.iter_mut().find(|c| c.id == comment_id))
            .ok_or(GatewayError::CommentNotFound(comment_id))?;
        record.content = content;
        record.updated_at = updated_at;
        Ok(())
    }

    async fn delete_comment(&self, task_id: TaskId, comment_id: CommentId) -> GatewayResult<()> {
        let mut state = self.write()?;
        let list = state
            .comments
            .get_mut(&task_id)
            .ok_or(GatewayError::CommentNotFound(comment_id))?;
        let len_before = list.len();
        list.retain(|c| c.id != comment_id);
        if list.len() == len_before {
            return Err(GatewayError::CommentNotFound(comment_id));
        }
        Ok(())
    }
}
