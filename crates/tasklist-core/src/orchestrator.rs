//! Backend effects and the orchestrator that sequences them.
//!
//! The effect functions only talk to the repository and report what
//! happened as [`Action`]s, so a UI runtime can drive them from its own
//! event loop. [`Orchestrator`] is the owned variant used when the caller
//! can await in place. Neither merges results locally: every successful
//! mutation is followed by a full refetch.

use tracing::{info, instrument, warn};

use crate::form::{FormError, FormSubmission};
use crate::modal::DeleteRequest;
use crate::repository::TaskRepository;
use crate::state::{Action, AppState};

/// Re-read the collection.
#[instrument(skip_all)]
pub async fn refetch<R: TaskRepository>(repo: &R) -> Action {
    match repo.list().await {
        Ok(tasks) => Action::Loaded(tasks),
        Err(err) => Action::LoadFailed(err.to_string()),
    }
}

/// Create or replace a task, then refetch. The editor only closes once the
/// backend accepted the payload.
#[instrument(skip_all)]
pub async fn save_task<R: TaskRepository>(repo: &R, submission: FormSubmission) -> Vec<Action> {
    let result = match &submission {
        FormSubmission::Create(draft) => repo.create(draft).await,
        FormSubmission::Update(task) => repo.update(task).await,
    };

    match result {
        Ok(task) => {
            info!(id = %task.id, "saved task");
            vec![Action::CloseEditor, refetch(repo).await]
        }
        Err(err) => vec![Action::SaveFailed(err.to_string())],
    }
}

/// Carry out a confirmed delete. Bulk deletes go one id at a time in
/// selection order and keep going past failures.
#[instrument(skip_all)]
pub async fn delete_tasks<R: TaskRepository>(repo: &R, request: DeleteRequest) -> Vec<Action> {
    match request {
        DeleteRequest::Single(id) => match repo.delete(&id).await {
            Ok(()) => vec![Action::DeleteCompleted, refetch(repo).await],
            Err(err) => vec![Action::DeleteFailed(err.to_string())],
        },
        DeleteRequest::Bulk(ids) => {
            let mut failed = Vec::new();
            for id in ids {
                if let Err(err) = repo.delete(&id).await {
                    warn!(%id, error = %err, "bulk delete of task failed; continuing");
                    failed.push(id);
                }
            }
            vec![
                Action::BulkDeleteFinished { failed },
                refetch(repo).await,
            ]
        }
    }
}

/// Submit whatever the open editor produced. A draft that fails
/// validation never reaches the backend.
pub async fn submit_editor<R: TaskRepository>(
    repo: &R,
    submission: Option<Result<FormSubmission, FormError>>,
) -> Vec<Action> {
    match submission {
        Some(Ok(submission)) => save_task(repo, submission).await,
        Some(Err(err)) => vec![Action::SubmitRejected(err)],
        None => {
            warn!("save requested without an open editor");
            Vec::new()
        }
    }
}

/// Run the delete the confirm modal is holding, if any.
pub async fn confirm_pending_delete<R: TaskRepository>(
    repo: &R,
    request: Option<DeleteRequest>,
) -> Vec<Action> {
    match request {
        Some(request) => delete_tasks(repo, request).await,
        None => {
            warn!("delete confirmed with nothing pending");
            Vec::new()
        }
    }
}

/// Owns the repository and the application state. The only place that
/// calls the repository.
#[derive(Debug)]
pub struct Orchestrator<R> {
    repo: R,
    state: AppState,
}

impl<R: TaskRepository> Orchestrator<R> {
    pub fn new(repo: R, state: AppState) -> Self {
        Self { repo, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// View-only actions (filtering, paging, selection, opening modals).
    pub fn dispatch(&mut self, action: Action) {
        self.state.apply(action);
    }

    fn apply_all(&mut self, actions: Vec<Action>) {
        for action in actions {
            self.state.apply(action);
        }
    }

    /// Initial load.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// User-triggered refresh, independent of mutation refetches.
    pub async fn refresh(&mut self) {
        let action = refetch(&self.repo).await;
        self.state.apply(action);
    }

    pub async fn save(&mut self) {
        let actions = submit_editor(&self.repo, self.state.submission()).await;
        self.apply_all(actions);
    }

    pub async fn confirm_delete(&mut self) {
        let actions = confirm_pending_delete(&self.repo, self.state.delete_request()).await;
        self.apply_all(actions);
    }
}
