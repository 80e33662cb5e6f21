use tasklist_core::form::FormField;
use tasklist_core::modal::Modal;
use tasklist_core::repository::RepositoryCall;
use tasklist_core::state::Notice;
use tasklist_core::{
    Action, AppState, MemoryTaskRepository, NewTask, Orchestrator, Task, TaskId, TaskPriority,
    TaskRepository, TaskStatus,
};

fn seeded(count: u64) -> Vec<Task> {
    (1..=count)
        .map(|id| {
            NewTask {
                assigned_to: format!("User {id}"),
                status: TaskStatus::InProgress,
                due_date: "2024-05-01".to_string(),
                priority: TaskPriority::High,
                description: format!("Task {id}"),
            }
            .with_id(TaskId::Int(id))
        })
        .collect()
}

async fn mounted(tasks: Vec<Task>) -> (MemoryTaskRepository, Orchestrator<MemoryTaskRepository>) {
    tasklist_core::logging::init_tracing(0).expect("init tracing");
    let repo = MemoryTaskRepository::with_tasks(tasks);
    let state = AppState::new(
        vec!["User 1".to_string(), "User 2".to_string(), "User 3".to_string()],
        4,
    );
    let mut app = Orchestrator::new(repo.clone(), state);
    app.mount().await;
    (repo, app)
}

#[tokio::test]
async fn mount_fetches_once() {
    let (repo, app) = mounted(seeded(2)).await;

    assert_eq!(repo.calls(), vec![RepositoryCall::List]);
    assert_eq!(app.state().tasks.len(), 2);
    assert_eq!(app.state().page().record_count, 2);
}

#[tokio::test]
async fn create_refetches_and_renders_backend_snapshot() {
    let (repo, mut app) = mounted(seeded(3)).await;
    repo.clear_calls();

    app.dispatch(Action::OpenNew);
    app.dispatch(Action::EditField(FormField::AssignedTo, "User 2".to_string()));
    app.dispatch(Action::EditField(FormField::DueDate, "2024-07-04".to_string()));
    app.save().await;

    assert_eq!(repo.calls(), vec![RepositoryCall::Create, RepositoryCall::List]);
    assert_eq!(app.state().modal, Modal::None);
    assert_eq!(app.state().tasks, repo.snapshot());
    assert_eq!(app.state().tasks.len(), 4);
    assert_eq!(app.state().page().record_count, 4);

    let created = &app.state().tasks[3];
    assert_eq!(created.id, TaskId::Int(4));
    assert_eq!(created.assignee(), "User 2");
}

#[tokio::test]
async fn update_replaces_the_whole_record() {
    let (repo, mut app) = mounted(seeded(2)).await;
    repo.clear_calls();

    app.dispatch(Action::OpenEdit(TaskId::Int(2)));
    app.dispatch(Action::EditField(FormField::Status, "Completed".to_string()));
    app.dispatch(Action::EditField(FormField::Description, String::new()));
    app.save().await;

    assert_eq!(
        repo.calls(),
        vec![RepositoryCall::Update(TaskId::Int(2)), RepositoryCall::List]
    );
    let updated = &app.state().tasks[1];
    assert_eq!(updated.status, TaskStatus::Completed);
    assert!(updated.description.is_empty());
    assert_eq!(updated.due_date, "2024-05-01");
}

#[tokio::test]
async fn invalid_draft_never_reaches_backend() {
    let (repo, mut app) = mounted(seeded(1)).await;
    repo.clear_calls();

    app.dispatch(Action::OpenNew);
    app.save().await;

    assert!(repo.calls().is_empty());
    let editor = app.state().modal.editor().expect("editor stays open");
    assert_eq!(editor.error.as_deref(), Some("Due Date is required"));
}

#[tokio::test]
async fn failed_save_keeps_editor_open_with_draft() {
    let (repo, mut app) = mounted(seeded(2)).await;

    app.dispatch(Action::OpenEdit(TaskId::Int(1)));
    app.dispatch(Action::EditField(FormField::Description, "kept".to_string()));

    // Removed by another client while the editor was open.
    repo.delete(&TaskId::Int(1)).await.expect("out-of-band delete");
    repo.clear_calls();

    app.save().await;

    assert_eq!(repo.calls(), vec![RepositoryCall::Update(TaskId::Int(1))]);
    let editor = app.state().modal.editor().expect("editor stays open");
    assert_eq!(editor.form.editing(), Some(&TaskId::Int(1)));
    assert_eq!(editor.form.draft().description, "kept");
    assert_eq!(editor.error.as_deref(), Some("Failed to save task."));
    assert_eq!(
        app.state().notice,
        Some(Notice::error("Failed to save task."))
    );
    assert_eq!(app.state().tasks.len(), 2);
}

#[tokio::test]
async fn editing_a_missing_id_saves_as_new_task() {
    let (repo, mut app) = mounted(seeded(1)).await;
    repo.clear_calls();

    app.dispatch(Action::OpenEdit(TaskId::Int(2)));
    let editor = app.state().modal.editor().expect("editor opens");
    assert_eq!(editor.form.title(), "New Task");

    app.dispatch(Action::EditField(FormField::DueDate, "2024-02-02".to_string()));
    app.save().await;

    assert_eq!(repo.calls(), vec![RepositoryCall::Create, RepositoryCall::List]);
    assert_eq!(app.state().tasks.len(), 2);
}

#[tokio::test]
async fn single_delete_clears_selection_and_refetches() {
    let (repo, mut app) = mounted(seeded(3)).await;
    repo.clear_calls();

    app.dispatch(Action::ToggleSelected(TaskId::Int(3)));
    app.dispatch(Action::OpenDelete {
        id: TaskId::Int(1),
        assigned_to: "User 1".to_string(),
    });
    app.confirm_delete().await;

    assert_eq!(
        repo.calls(),
        vec![RepositoryCall::Delete(TaskId::Int(1)), RepositoryCall::List]
    );
    assert!(app.state().selection.is_empty());
    assert_eq!(app.state().modal, Modal::None);
    assert_eq!(app.state().tasks.len(), 2);
}

#[tokio::test]
async fn failed_single_delete_keeps_modal_and_selection() {
    let (repo, mut app) = mounted(seeded(2)).await;
    app.dispatch(Action::ToggleSelected(TaskId::Int(2)));

    // Deleted by another client since the last fetch.
    repo.delete(&TaskId::Int(1)).await.expect("out-of-band delete");
    app.dispatch(Action::OpenDelete {
        id: TaskId::Int(1),
        assigned_to: "User 1".to_string(),
    });
    let modal_before = app.state().modal.clone();
    repo.clear_calls();

    app.confirm_delete().await;

    assert_eq!(repo.calls(), vec![RepositoryCall::Delete(TaskId::Int(1))]);
    assert_eq!(app.state().modal, modal_before);
    assert_eq!(app.state().selection.ids(), &[TaskId::Int(2)]);
    assert_eq!(
        app.state().notice,
        Some(Notice::error("Task not found or already deleted."))
    );
}

#[tokio::test]
async fn bulk_delete_attempts_every_id_despite_a_failure() {
    let (repo, mut app) = mounted(seeded(4)).await;
    repo.fail_delete_of(TaskId::Int(2));

    for id in [1, 2, 3] {
        app.dispatch(Action::ToggleSelected(TaskId::Int(id)));
    }
    app.dispatch(Action::OpenBulkDelete);
    assert_eq!(
        app.state().delete_prompt().as_deref(),
        Some("Do you want to delete 3 selected tasks?")
    );
    repo.clear_calls();

    app.confirm_delete().await;

    assert_eq!(
        repo.calls(),
        vec![
            RepositoryCall::Delete(TaskId::Int(1)),
            RepositoryCall::Delete(TaskId::Int(2)),
            RepositoryCall::Delete(TaskId::Int(3)),
            RepositoryCall::List,
        ]
    );
    let remaining: Vec<_> = repo.snapshot().into_iter().map(|task| task.id).collect();
    assert_eq!(remaining, vec![TaskId::Int(2), TaskId::Int(4)]);
    assert_eq!(app.state().tasks.len(), 2);
    assert!(app.state().selection.is_empty());
    assert_eq!(app.state().modal, Modal::None);
    assert_eq!(
        app.state().notice,
        Some(Notice::error("Failed to delete selected tasks."))
    );
}

#[tokio::test]
async fn select_all_bulk_delete_empties_collection() {
    let (repo, mut app) = mounted(seeded(5)).await;

    app.dispatch(Action::SetSearch("user 1".to_string()));
    app.dispatch(Action::SelectAll(true));
    assert_eq!(app.state().selection.len(), 5);

    app.dispatch(Action::OpenBulkDelete);
    app.confirm_delete().await;

    assert!(repo.snapshot().is_empty());
    assert!(app.state().tasks.is_empty());
    assert_eq!(app.state().notice, None);
}

#[tokio::test]
async fn cancelled_delete_makes_no_calls() {
    let (repo, mut app) = mounted(seeded(2)).await;
    repo.clear_calls();

    app.dispatch(Action::SelectAll(true));
    app.dispatch(Action::OpenBulkDelete);
    assert!(app.state().modal.is_open());
    app.dispatch(Action::CancelDelete);
    assert!(!app.state().modal.is_open());
    app.confirm_delete().await;

    assert!(repo.calls().is_empty());
    assert_eq!(app.state().selection.len(), 2);
}

#[tokio::test]
async fn failed_refresh_keeps_last_snapshot() {
    let (repo, mut app) = mounted(seeded(2)).await;
    repo.set_fail_list(true);

    app.refresh().await;

    assert_eq!(app.state().tasks.len(), 2);
    assert_eq!(app.state().notice, Some(Notice::error("Failed to load tasks.")));

    repo.set_fail_list(false);
    app.dispatch(Action::DismissNotice);
    app.refresh().await;
    assert_eq!(app.state().notice, None);
}

#[tokio::test]
async fn refresh_picks_up_out_of_band_changes() {
    let (repo, mut app) = mounted(seeded(2)).await;
    let other_client = repo.clone();
    other_client
        .delete(&TaskId::Int(1))
        .await
        .expect("out-of-band delete");

    assert_eq!(app.state().tasks.len(), 2);
    app.refresh().await;
    assert_eq!(app.state().tasks.len(), 1);
}
