use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned task identity. The backend decides whether ids are
/// numbers or strings, so both are accepted and compared as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(untagged)]
pub enum TaskId {
    Int(u64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Int(id) => write!(f, "{id}"),
            TaskId::Text(id) => f.write_str(id),
        }
    }
}

impl TaskId {
    /// Stable per-variant key, so `1` and `"1"` never collide in a keyed list.
    pub fn key(&self) -> String {
        match self {
            TaskId::Int(id) => format!("int:{id}"),
            TaskId::Text(id) => format!("text:{id}"),
        }
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        TaskId::Int(id)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        TaskId::Text(id.to_string())
    }
}

/// Backend statuses outside the known set are kept verbatim in `Other`
/// so one odd record does not fail the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(untagged)]
    Other(String),
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::NotStarted,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub fn label(&self) -> &str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TaskPriority {
    Low,
    #[default]
    Normal,
    High,
    #[serde(untagged)]
    Other(String),
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::Low, TaskPriority::Normal, TaskPriority::High];

    pub fn label(&self) -> &str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Normal => "Normal",
            TaskPriority::High => "High",
            TaskPriority::Other(raw) => raw,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct ParseLabelError {
    kind: &'static str,
    value: String,
}

impl FromStr for TaskStatus {
    type Err = ParseLabelError;

    /// Only the known labels parse; `Other` comes from the backend alone.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.label() == s.trim())
            .ok_or_else(|| ParseLabelError {
                kind: "status",
                value: s.to_string(),
            })
    }
}

impl FromStr for TaskPriority {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskPriority::ALL
            .into_iter()
            .find(|priority| priority.label() == s.trim())
            .ok_or_else(|| ParseLabelError {
                kind: "priority",
                value: s.to_string(),
            })
    }
}

/// A task that has not been persisted yet. This is the body of a create
/// call, and the editable part of every persisted task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub assigned_to: String,
    pub status: TaskStatus,
    /// ISO calendar date (`YYYY-MM-DD`), empty while unset in a draft.
    pub due_date: String,
    pub priority: TaskPriority,
    #[serde(default)]
    pub description: String,
}

impl NewTask {
    pub fn for_user(user: impl Into<String>) -> Self {
        Self {
            assigned_to: user.into(),
            ..Self::default()
        }
    }

    pub fn with_id(self, id: TaskId) -> Task {
        Task {
            id,
            assigned_to: Some(self.assigned_to),
            status: self.status,
            due_date: self.due_date,
            priority: self.priority,
            description: self.description,
        }
    }
}

/// A task as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: String,
    pub priority: TaskPriority,
    #[serde(default)]
    pub description: String,
}

impl Task {
    pub fn to_draft(&self) -> NewTask {
        NewTask {
            assigned_to: self.assigned_to.clone().unwrap_or_default(),
            status: self.status.clone(),
            due_date: self.due_date.clone(),
            priority: self.priority.clone(),
            description: self.description.clone(),
        }
    }

    pub fn assignee(&self) -> &str {
        self.assigned_to.as_deref().unwrap_or_default()
    }
}

pub fn find_task<'a>(tasks: &'a [Task], id: &TaskId) -> Option<&'a Task> {
    tasks.iter().find(|task| &task.id == id)
}
