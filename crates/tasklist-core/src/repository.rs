//! The four collection calls the orchestrator is allowed to make.
//!
//! Implementations perform exactly one round trip per call. They do not
//! retry, cache, or batch; deciding when to re-read the collection is the
//! orchestrator's job.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::error::{RepositoryError, RepositoryResult};
use crate::task::{NewTask, Task, TaskId};

pub trait TaskRepository {
    /// Fetch the full collection.
    fn list(&self) -> impl Future<Output = RepositoryResult<Vec<Task>>>;

    /// Persist a new task and return the record with its generated id.
    fn create(&self, draft: &NewTask) -> impl Future<Output = RepositoryResult<Task>>;

    /// Replace the record identified by `task.id`.
    fn update(&self, task: &Task) -> impl Future<Output = RepositoryResult<Task>>;

    fn delete(&self, id: &TaskId) -> impl Future<Output = RepositoryResult<()>>;
}

/// One call observed by [`MemoryTaskRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    List,
    Create,
    Update(TaskId),
    Delete(TaskId),
}

#[derive(Debug, Default)]
struct MemoryInner {
    tasks: Vec<Task>,
    next_id: u64,
    calls: Vec<RepositoryCall>,
    failing_deletes: HashSet<TaskId>,
    fail_list: bool,
}

/// Collection held in process memory, with the same not-found semantics as
/// the REST backend. Clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryTaskRepository {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .filter_map(|task| match task.id {
                TaskId::Int(id) => Some(id),
                TaskId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            inner: Arc::new(Mutex::new(MemoryInner {
                tasks,
                next_id,
                ..MemoryInner::default()
            })),
        }
    }

    /// Make every later delete of `id` fail with a network error, even if
    /// the task exists.
    pub fn fail_delete_of(&self, id: TaskId) {
        self.inner.lock().failing_deletes.insert(id);
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.inner.lock().fail_list = fail;
    }

    pub fn snapshot(&self) -> Vec<Task> {
        self.inner.lock().tasks.clone()
    }

    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.inner.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }
}

impl TaskRepository for MemoryTaskRepository {
    async fn list(&self) -> RepositoryResult<Vec<Task>> {
        let mut inner = self.inner.lock();
        inner.calls.push(RepositoryCall::List);
        if inner.fail_list {
            return Err(RepositoryError::Network("connection refused".to_string()));
        }
        Ok(inner.tasks.clone())
    }

    async fn create(&self, draft: &NewTask) -> RepositoryResult<Task> {
        let mut inner = self.inner.lock();
        inner.calls.push(RepositoryCall::Create);
        if draft.assigned_to.trim().is_empty() {
            return Err(RepositoryError::Validation(
                "assignedTo is required".to_string(),
            ));
        }

        let id = TaskId::Int(inner.next_id.max(1));
        inner.next_id = inner.next_id.max(1) + 1;
        let task = draft.clone().with_id(id);
        debug!(id = %task.id, "memory repository created task");
        inner.tasks.push(task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> RepositoryResult<Task> {
        let mut inner = self.inner.lock();
        inner.calls.push(RepositoryCall::Update(task.id.clone()));
        let slot = inner
            .tasks
            .iter_mut()
            .find(|existing| existing.id == task.id)
            .ok_or_else(|| RepositoryError::NotFound(task.id.clone()))?;
        *slot = task.clone();
        Ok(task.clone())
    }

    async fn delete(&self, id: &TaskId) -> RepositoryResult<()> {
        let mut inner = self.inner.lock();
        inner.calls.push(RepositoryCall::Delete(id.clone()));
        if inner.failing_deletes.contains(id) {
            return Err(RepositoryError::Network(format!(
                "delete of {id} was interrupted"
            )));
        }

        let before = inner.tasks.len();
        inner.tasks.retain(|task| &task.id != id);
        if inner.tasks.len() == before {
            return Err(RepositoryError::NotFound(id.clone()));
        }
        Ok(())
    }
}
