use thiserror::Error;

use crate::task::TaskId;

/// Failures surfaced by a [`TaskRepository`](crate::repository::TaskRepository).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("network error: {0}")]
    Network(String),

    #[error("task {0} not found")]
    NotFound(TaskId),

    #[error("backend rejected task: {0}")]
    Validation(String),

    #[error("failed to decode backend response: {0}")]
    Decode(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
