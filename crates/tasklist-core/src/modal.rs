use crate::form::TaskForm;
use crate::task::TaskId;

/// What the delete confirmation will remove when confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    /// Opened from a row menu. `assigned_to` is only used for the prompt.
    Single { id: TaskId, assigned_to: String },
    /// Opened from the bulk action; resolves to the selection at confirm
    /// time.
    Selection,
}

impl DeleteTarget {
    pub fn prompt(&self, selected_count: usize) -> String {
        match self {
            DeleteTarget::Single { assigned_to, .. } => {
                format!("Do you want to delete task: {assigned_to}?")
            }
            DeleteTarget::Selection if selected_count == 1 => {
                "Do you want to delete 1 selected task?".to_string()
            }
            DeleteTarget::Selection => {
                format!("Do you want to delete {selected_count} selected tasks?")
            }
        }
    }
}

/// Concrete backend work for a confirmed delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteRequest {
    Single(TaskId),
    Bulk(Vec<TaskId>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub form: TaskForm,
    pub error: Option<String>,
}

impl EditorState {
    pub fn new(form: TaskForm) -> Self {
        Self { form, error: None }
    }
}

/// At most one modal is open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    Editor(EditorState),
    ConfirmDelete(DeleteTarget),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::None)
    }

    pub fn editor(&self) -> Option<&EditorState> {
        match self {
            Modal::Editor(editor) => Some(editor),
            _ => None,
        }
    }

    pub fn delete_target(&self) -> Option<&DeleteTarget> {
        match self {
            Modal::ConfirmDelete(target) => Some(target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_name_the_target() {
        let single = DeleteTarget::Single {
            id: TaskId::Int(3),
            assigned_to: "User 3".to_string(),
        };
        assert_eq!(single.prompt(5), "Do you want to delete task: User 3?");
        assert_eq!(
            DeleteTarget::Selection.prompt(2),
            "Do you want to delete 2 selected tasks?"
        );
        assert_eq!(
            DeleteTarget::Selection.prompt(1),
            "Do you want to delete 1 selected task?"
        );
    }
}
