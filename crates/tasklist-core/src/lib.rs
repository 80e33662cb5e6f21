//! Task list state, editing, and REST plumbing.
//!
//! The browser frontend renders [`state::AppState`] and feeds user events
//! back as [`state::Action`]s; [`orchestrator`] runs the backend calls and
//! refetches the collection after every successful mutation.

pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod list_view;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod modal;
pub mod orchestrator;
pub mod repository;
pub mod selection;
pub mod state;
pub mod task;

pub use error::{RepositoryError, RepositoryResult};
pub use http::HttpTaskRepository;
pub use orchestrator::Orchestrator;
pub use repository::{MemoryTaskRepository, TaskRepository};
pub use state::{Action, AppState};
pub use task::{NewTask, Task, TaskId, TaskPriority, TaskStatus};
