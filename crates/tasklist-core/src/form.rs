use chrono::NaiveDate;
use thiserror::Error;

use crate::task::{NewTask, Task, TaskId};

pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    AssignedTo,
    Status,
    DueDate,
    Priority,
    Description,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::AssignedTo => "Assigned To",
            FormField::Status => "Status",
            FormField::DueDate => "Due Date",
            FormField::Priority => "Priority",
            FormField::Description => "Description",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FormField::Description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    MissingField(FormField),

    #[error("{} is not a valid {}", .value, .field.label())]
    InvalidValue { field: FormField, value: String },
}

/// What a valid form turns into: a create body, or a full replacement of an
/// existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    Create(NewTask),
    Update(Task),
}

/// Local draft for the task editor. Performs no persistence; the owner
/// decides what to do with a [`FormSubmission`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    editing: Option<TaskId>,
    draft: NewTask,
}

impl TaskForm {
    /// Blank draft assigned to the first known user.
    pub fn new_task(users: &[String]) -> Self {
        Self {
            editing: None,
            draft: NewTask::for_user(users.first().cloned().unwrap_or_default()),
        }
    }

    pub fn edit(task: &Task) -> Self {
        Self {
            editing: Some(task.id.clone()),
            draft: task.to_draft(),
        }
    }

    pub fn for_target(target: Option<&Task>, users: &[String]) -> Self {
        match target {
            Some(task) => Self::edit(task),
            None => Self::new_task(users),
        }
    }

    pub fn editing(&self) -> Option<&TaskId> {
        self.editing.as_ref()
    }

    pub fn is_new(&self) -> bool {
        self.editing.is_none()
    }

    pub fn title(&self) -> &'static str {
        if self.is_new() { "New Task" } else { "Edit Task" }
    }

    pub fn draft(&self) -> &NewTask {
        &self.draft
    }

    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::AssignedTo => self.draft.assigned_to.clone(),
            FormField::Status => self.draft.status.label().to_string(),
            FormField::DueDate => self.draft.due_date.clone(),
            FormField::Priority => self.draft.priority.label().to_string(),
            FormField::Description => self.draft.description.clone(),
        }
    }

    /// Apply raw input from a control. Select values must name a known
    /// status or priority; text fields are stored verbatim.
    pub fn set(&mut self, field: FormField, value: &str) -> Result<(), FormError> {
        match field {
            FormField::AssignedTo => self.draft.assigned_to = value.to_string(),
            FormField::Status => {
                self.draft.status = parse_select(field, value)?;
            }
            FormField::DueDate => self.draft.due_date = value.trim().to_string(),
            FormField::Priority => {
                self.draft.priority = parse_select(field, value)?;
            }
            FormField::Description => self.draft.description = value.to_string(),
        }
        Ok(())
    }

    /// Check required fields and produce the payload for the save callback.
    pub fn submit(&self) -> Result<FormSubmission, FormError> {
        if self.draft.assigned_to.trim().is_empty() {
            return Err(FormError::MissingField(FormField::AssignedTo));
        }
        if self.draft.due_date.is_empty() {
            return Err(FormError::MissingField(FormField::DueDate));
        }
        if NaiveDate::parse_from_str(&self.draft.due_date, DUE_DATE_FORMAT).is_err() {
            return Err(FormError::InvalidValue {
                field: FormField::DueDate,
                value: self.draft.due_date.clone(),
            });
        }

        let draft = self.draft.clone();
        Ok(match &self.editing {
            Some(id) => FormSubmission::Update(draft.with_id(id.clone())),
            None => FormSubmission::Create(draft),
        })
    }
}

fn parse_select<T: std::str::FromStr>(field: FormField, value: &str) -> Result<T, FormError> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    value.parse().map_err(|_| FormError::InvalidValue {
        field,
        value: value.to_string(),
    })
}
