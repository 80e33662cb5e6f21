//! Application state and the actions that mutate it.
//!
//! [`AppState`] is the single writer-owned store: views read it, and every
//! change goes through [`AppState::apply`]. Backend calls live in
//! [`crate::orchestrator`]; they turn results back into [`Action`]s.

use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::form::{FormError, FormField, FormSubmission, TaskForm};
use crate::list_view::{ListPage, ListView};
use crate::modal::{DeleteRequest, DeleteTarget, EditorState, Modal};
use crate::selection::SelectionSet;
use crate::task::{Task, TaskId, find_task};

pub const DELETE_FAILED_MESSAGE: &str = "Task not found or already deleted.";
pub const BULK_DELETE_FAILED_MESSAGE: &str = "Failed to delete selected tasks.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load tasks.";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save task.";

/// User-visible error notification. A new notice replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A fresh collection snapshot arrived.
    Loaded(Vec<Task>),
    LoadFailed(String),

    SetSearch(String),
    SetPageSize(String),
    PrevPage,
    NextPage,
    ToggleMenu(TaskId),
    CloseMenu,

    ToggleSelected(TaskId),
    SelectAll(bool),

    OpenNew,
    OpenEdit(TaskId),
    EditField(FormField, String),
    SubmitRejected(FormError),
    CloseEditor,
    SaveFailed(String),

    OpenDelete { id: TaskId, assigned_to: String },
    OpenBulkDelete,
    CancelDelete,
    /// A single delete went through.
    DeleteCompleted,
    DeleteFailed(String),
    /// Every id of a bulk delete was attempted; `failed` lists the ones the
    /// backend refused.
    BulkDeleteFinished { failed: Vec<TaskId> },

    DismissNotice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub tasks: Vec<Task>,
    pub users: Vec<String>,
    pub view: ListView,
    pub selection: SelectionSet,
    pub modal: Modal,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(users: Vec<String>, page_size: usize) -> Self {
        Self {
            tasks: Vec::new(),
            users,
            view: ListView::new(page_size),
            selection: SelectionSet::new(),
            modal: Modal::None,
            notice: None,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.users.names.clone(), cfg.view.page_size)
    }

    pub fn page(&self) -> ListPage<'_> {
        self.view.render(&self.tasks)
    }

    pub fn filtered_count(&self) -> usize {
        self.view.filtered(&self.tasks).len()
    }

    /// `true` when every loaded task is selected, which is what the header
    /// checkbox reflects.
    pub fn all_selected(&self) -> bool {
        !self.tasks.is_empty() && self.selection.len() == self.tasks.len()
    }

    /// Validate the open editor's draft. `None` when no editor is open.
    pub fn submission(&self) -> Option<Result<FormSubmission, FormError>> {
        self.modal.editor().map(|editor| editor.form.submit())
    }

    /// Resolve the open confirmation into concrete ids. `None` when nothing
    /// is pending or a bulk delete has nothing selected.
    pub fn delete_request(&self) -> Option<DeleteRequest> {
        match self.modal.delete_target()? {
            DeleteTarget::Single { id, .. } => Some(DeleteRequest::Single(id.clone())),
            DeleteTarget::Selection if self.selection.is_empty() => None,
            DeleteTarget::Selection => Some(DeleteRequest::Bulk(self.selection.ids().to_vec())),
        }
    }

    pub fn delete_prompt(&self) -> Option<String> {
        self.modal
            .delete_target()
            .map(|target| target.prompt(self.selection.len()))
    }

    pub fn apply(&mut self, action: Action) {
        debug!(?action, "applying action");
        match action {
            Action::Loaded(tasks) => {
                self.tasks = tasks;
                let dropped = self.selection.retain_existing(&self.tasks);
                if dropped > 0 {
                    debug!(dropped, "pruned selection to loaded tasks");
                }
                if self
                    .view
                    .open_menu()
                    .is_some_and(|id| find_task(&self.tasks, id).is_none())
                {
                    self.view.close_menu();
                }
            }
            Action::LoadFailed(reason) => {
                error!(%reason, "failed to load tasks");
                self.notice = Some(Notice::error(LOAD_FAILED_MESSAGE));
            }

            Action::SetSearch(search) => self.view.set_search(search),
            Action::SetPageSize(raw) => {
                if let Err(err) = self.view.set_page_size_input(&raw) {
                    debug!(%err, "ignored page size input");
                }
            }
            Action::PrevPage => self.view.prev_page(),
            Action::NextPage => {
                let count = self.filtered_count();
                self.view.next_page(count);
            }
            Action::ToggleMenu(id) => self.view.toggle_menu(&id),
            Action::CloseMenu => self.view.close_menu(),

            Action::ToggleSelected(id) => self.selection.toggle(&id),
            Action::SelectAll(select) => self.selection.select_all(select, &self.tasks),

            Action::OpenNew => {
                self.view.close_menu();
                self.modal = Modal::Editor(EditorState::new(TaskForm::new_task(&self.users)));
            }
            Action::OpenEdit(id) => {
                self.view.close_menu();
                let target = find_task(&self.tasks, &id);
                if target.is_none() {
                    warn!(%id, "edit requested for a task that is not loaded; opening a blank draft");
                }
                self.modal = Modal::Editor(EditorState::new(TaskForm::for_target(
                    target,
                    &self.users,
                )));
            }
            Action::EditField(field, value) => {
                if let Modal::Editor(editor) = &mut self.modal {
                    editor.error = editor.form.set(field, &value).err().map(|err| err.to_string());
                }
            }
            Action::SubmitRejected(err) => {
                if let Modal::Editor(editor) = &mut self.modal {
                    editor.error = Some(err.to_string());
                }
            }
            Action::CloseEditor => {
                if self.modal.editor().is_some() {
                    self.modal = Modal::None;
                }
            }
            Action::SaveFailed(reason) => {
                error!(%reason, "failed to save task");
                if let Modal::Editor(editor) = &mut self.modal {
                    editor.error = Some(SAVE_FAILED_MESSAGE.to_string());
                }
                self.notice = Some(Notice::error(SAVE_FAILED_MESSAGE));
            }

            Action::OpenDelete { id, assigned_to } => {
                self.view.close_menu();
                self.modal = Modal::ConfirmDelete(DeleteTarget::Single { id, assigned_to });
            }
            Action::OpenBulkDelete => {
                if self.selection.is_empty() {
                    debug!("bulk delete requested with empty selection");
                    return;
                }
                self.modal = Modal::ConfirmDelete(DeleteTarget::Selection);
            }
            Action::CancelDelete => {
                if self.modal.delete_target().is_some() {
                    self.modal = Modal::None;
                }
            }
            Action::DeleteCompleted => {
                info!("task deleted");
                self.selection.clear();
                self.modal = Modal::None;
            }
            Action::DeleteFailed(reason) => {
                error!(%reason, "error deleting task");
                self.notice = Some(Notice::error(DELETE_FAILED_MESSAGE));
            }
            Action::BulkDeleteFinished { failed } => {
                self.selection.clear();
                self.modal = Modal::None;
                if failed.is_empty() {
                    info!("selected tasks deleted");
                } else {
                    error!(?failed, "error deleting selected tasks");
                    self.notice = Some(Notice::error(BULK_DELETE_FAILED_MESSAGE));
                }
            }

            Action::DismissNotice => self.notice = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::NewTask;

    fn users() -> Vec<String> {
        vec!["User 1".to_string(), "User 2".to_string(), "User 3".to_string()]
    }

    fn loaded(ids: &[u64]) -> AppState {
        let mut state = AppState::new(users(), 4);
        state.apply(Action::Loaded(
            ids.iter()
                .map(|id| NewTask::for_user(format!("User {id}")).with_id(TaskId::Int(*id)))
                .collect(),
        ));
        state
    }

    #[test]
    fn select_all_then_none_survives_filtering() {
        let mut state = loaded(&[1, 2, 3]);
        state.apply(Action::SelectAll(true));
        state.apply(Action::SetSearch("user 2".to_string()));
        assert!(state.all_selected());
        assert_eq!(state.filtered_count(), 1);

        state.apply(Action::SelectAll(false));
        assert!(state.selection.is_empty());
    }

    #[test]
    fn selection_is_kept_when_filtered_out_of_view() {
        let mut state = loaded(&[1, 2]);
        state.apply(Action::ToggleSelected(TaskId::Int(1)));
        state.apply(Action::SetSearch("user 2".to_string()));

        assert!(state.selection.contains(&TaskId::Int(1)));
        assert_eq!(state.page().rows.len(), 1);
    }

    #[test]
    fn refetch_prunes_selection_and_stale_menu() {
        let mut state = loaded(&[1, 2]);
        state.apply(Action::ToggleSelected(TaskId::Int(2)));
        state.apply(Action::ToggleMenu(TaskId::Int(2)));

        state.apply(Action::Loaded(vec![
            NewTask::for_user("User 1").with_id(TaskId::Int(1)),
        ]));
        assert!(state.selection.is_empty());
        assert_eq!(state.view.open_menu(), None);
    }

    #[test]
    fn opening_edit_for_unknown_id_gives_blank_draft() {
        let mut state = loaded(&[1]);
        state.apply(Action::OpenEdit(TaskId::Int(2)));

        let editor = state.modal.editor().unwrap();
        assert!(editor.form.is_new());
        assert_eq!(editor.form.draft().assigned_to, "User 1");
    }

    #[test]
    fn row_actions_close_the_menu() {
        let mut state = loaded(&[1]);
        state.apply(Action::ToggleMenu(TaskId::Int(1)));
        state.apply(Action::OpenDelete {
            id: TaskId::Int(1),
            assigned_to: "User 1".to_string(),
        });

        assert_eq!(state.view.open_menu(), None);
        assert_eq!(
            state.delete_prompt().as_deref(),
            Some("Do you want to delete task: User 1?")
        );
        assert_eq!(
            state.delete_request(),
            Some(DeleteRequest::Single(TaskId::Int(1)))
        );
    }

    #[test]
    fn failed_single_delete_leaves_modal_and_selection() {
        let mut state = loaded(&[1, 2]);
        state.apply(Action::ToggleSelected(TaskId::Int(2)));
        state.apply(Action::OpenDelete {
            id: TaskId::Int(1),
            assigned_to: "User 1".to_string(),
        });
        let before_modal = state.modal.clone();

        state.apply(Action::DeleteFailed("404".to_string()));
        assert_eq!(state.modal, before_modal);
        assert_eq!(state.selection.ids(), &[TaskId::Int(2)]);
        assert_eq!(
            state.notice,
            Some(Notice::error("Task not found or already deleted."))
        );
    }

    #[test]
    fn cancel_delete_keeps_selection() {
        let mut state = loaded(&[1, 2]);
        state.apply(Action::SelectAll(true));
        state.apply(Action::OpenBulkDelete);
        assert_eq!(
            state.delete_request(),
            Some(DeleteRequest::Bulk(vec![TaskId::Int(1), TaskId::Int(2)]))
        );

        state.apply(Action::CancelDelete);
        assert_eq!(state.modal, Modal::None);
        assert_eq!(state.selection.len(), 2);
    }

    #[test]
    fn bulk_delete_needs_a_selection() {
        let mut state = loaded(&[1]);
        state.apply(Action::OpenBulkDelete);
        assert_eq!(state.modal, Modal::None);
    }

    #[test]
    fn editor_field_errors_are_shown_then_cleared() {
        let mut state = loaded(&[]);
        state.apply(Action::OpenNew);
        state.apply(Action::EditField(FormField::Priority, "Urgent".to_string()));
        assert!(state.modal.editor().unwrap().error.is_some());

        state.apply(Action::EditField(FormField::Priority, "High".to_string()));
        assert!(state.modal.editor().unwrap().error.is_none());

        let rejected = state.submission().unwrap().unwrap_err();
        state.apply(Action::SubmitRejected(rejected));
        assert_eq!(
            state.modal.editor().unwrap().error.as_deref(),
            Some("Due Date is required")
        );
    }
}
