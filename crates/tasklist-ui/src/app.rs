use std::future::Future;
use std::rc::Rc;

use gloo::console::log;
use tasklist_core::form::FormField;
use tasklist_core::orchestrator::{
  confirm_pending_delete,
  refetch,
  submit_editor
};
use tasklist_core::state::AppState;
use tasklist_core::{
  Action,
  HttpTaskRepository,
  TaskId
};
use wasm_bindgen_futures::spawn_local;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Reducible,
  classes,
  UseReducerDispatcher,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_reducer
};

use crate::api;
use crate::components::{
  BulkActions,
  DeleteModal,
  ListHeader,
  NoticeBanner,
  Pagination,
  TaskModal,
  TaskTable
};

/// Yew wrapper around the core state
/// store; every change goes through
/// `AppState::apply`.
#[derive(Clone, PartialEq)]
struct Store(AppState);

impl Reducible for Store {
  type Action = Action;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    next.0.apply(action);
    Rc::new(next)
  }
}

/// Run a backend effect off the event
/// loop and feed its actions back in.
fn run_effect<F>(
  dispatcher: UseReducerDispatcher<Store>,
  effect: F
) where
  F: Future<Output = Vec<Action>>
    + 'static
{
  spawn_local(async move {
    for action in effect.await {
      dispatcher.dispatch(action);
    }
  });
}

fn spawn_refetch(
  dispatcher: UseReducerDispatcher<Store>,
  repo: HttpTaskRepository
) {
  run_effect(dispatcher, async move {
    vec![refetch(&repo).await]
  });
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

#[function_component(App)]
pub fn app() -> Html {
  let backend =
    use_memo((), |_| api::connect());

  match &*backend {
    | Ok(backend) => html! {
        <TaskApp backend={Rc::new(backend.clone())} />
    },
    | Err(err) => html! {
        <div class="fatal">
            <h2>{ "Task list unavailable" }</h2>
            <p>{ err.clone() }</p>
        </div>
    }
  }
}

#[derive(yew::Properties)]
struct TaskAppProps {
  backend: Rc<api::Backend>
}

impl PartialEq for TaskAppProps {
  fn eq(
    &self,
    other: &Self
  ) -> bool {
    Rc::ptr_eq(
      &self.backend,
      &other.backend
    )
  }
}

#[function_component(TaskApp)]
fn task_app(
  props: &TaskAppProps
) -> Html {
  let config =
    props.backend.config.clone();
  let store = use_reducer(move || {
    Store(AppState::from_config(
      &config
    ))
  });
  let repo = props.backend.repo.clone();

  {
    let dispatcher = store.dispatcher();
    let repo = repo.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "mount",
        "initial task fetch"
      );
      spawn_refetch(dispatcher, repo);
      || ()
    });
  }

  let dispatch = |make: fn() -> Action| {
    let dispatcher = store.dispatcher();
    Callback::from(move |_: MouseEvent| {
      dispatcher.dispatch(make())
    })
  };

  let on_add = dispatch(|| Action::OpenNew);
  let on_prev =
    dispatch(|| Action::PrevPage);
  let on_next =
    dispatch(|| Action::NextPage);
  let on_bulk_delete =
    dispatch(|| Action::OpenBulkDelete);
  let on_cancel_delete =
    dispatch(|| Action::CancelDelete);
  let on_close_editor =
    dispatch(|| Action::CloseEditor);
  let on_dismiss_notice =
    dispatch(|| Action::DismissNotice);

  let on_refresh = {
    let dispatcher = store.dispatcher();
    let repo = repo.clone();
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        "button.refresh.click",
        "refetching tasks"
      );
      spawn_refetch(
        dispatcher.clone(),
        repo.clone()
      );
    })
  };

  let on_search = {
    let dispatcher = store.dispatcher();
    Callback::from(move |value: String| {
      dispatcher
        .dispatch(Action::SetSearch(value))
    })
  };

  let on_page_size = {
    let dispatcher = store.dispatcher();
    Callback::from(move |raw: String| {
      dispatcher
        .dispatch(Action::SetPageSize(raw))
    })
  };

  let on_toggle_menu = {
    let dispatcher = store.dispatcher();
    Callback::from(move |id: TaskId| {
      dispatcher
        .dispatch(Action::ToggleMenu(id))
    })
  };

  let on_toggle_select = {
    let dispatcher = store.dispatcher();
    Callback::from(move |id: TaskId| {
      dispatcher.dispatch(
        Action::ToggleSelected(id)
      )
    })
  };

  let on_select_all = {
    let dispatcher = store.dispatcher();
    Callback::from(move |checked: bool| {
      dispatcher
        .dispatch(Action::SelectAll(checked))
    })
  };

  let on_edit = {
    let dispatcher = store.dispatcher();
    Callback::from(move |id: TaskId| {
      ui_debug(
        "menu.edit.click",
        &id.to_string()
      );
      dispatcher
        .dispatch(Action::OpenEdit(id))
    })
  };

  let on_delete = {
    let dispatcher = store.dispatcher();
    Callback::from(
      move |(id, assigned_to): (
        TaskId,
        String
      )| {
        dispatcher.dispatch(
          Action::OpenDelete {
            id,
            assigned_to
          }
        )
      }
    )
  };

  let on_field = {
    let dispatcher = store.dispatcher();
    Callback::from(
      move |(field, value): (
        FormField,
        String
      )| {
        dispatcher.dispatch(
          Action::EditField(field, value)
        )
      }
    )
  };

  let on_save = {
    let store = store.clone();
    let repo = repo.clone();
    Callback::from(move |()| {
      ui_debug(
        "form.submit",
        "saving task"
      );
      let submission =
        store.0.submission();
      let repo = repo.clone();
      run_effect(
        store.dispatcher(),
        async move {
          submit_editor(&repo, submission)
            .await
        }
      );
    })
  };

  let on_confirm_delete = {
    let store = store.clone();
    let repo = repo.clone();
    Callback::from(move |_: MouseEvent| {
      let request =
        store.0.delete_request();
      ui_debug(
        "button.delete.confirm",
        &format!("{request:?}")
      );
      let repo = repo.clone();
      run_effect(
        store.dispatcher(),
        async move {
          confirm_pending_delete(
            &repo, request
          )
          .await
        }
      );
    })
  };

  let state = &store.0;
  let page = state.page();

  html! {
      <div class={classes!("container", state.modal.is_open().then_some("modal-open"))}>
          {
              if let Some(notice) = state.notice.clone() {
                  html! {
                      <NoticeBanner
                          message={notice.message}
                          on_dismiss={on_dismiss_notice}
                      />
                  }
              } else {
                  html! {}
              }
          }
          <div class="panel list">
              <ListHeader
                  record_count={page.record_count}
                  search={state.view.search().to_string()}
                  on_add={on_add}
                  on_refresh={on_refresh}
                  on_search={on_search}
              >
                  <BulkActions
                      bulk_count={state.selection.len()}
                      on_bulk_delete={on_bulk_delete}
                  />
              </ListHeader>
              <TaskTable
                  rows={page.rows.iter().map(|task| (*task).clone()).collect::<Vec<_>>()}
                  selected_ids={state.selection.ids().to_vec()}
                  all_selected={state.all_selected()}
                  open_menu={state.view.open_menu().cloned()}
                  on_toggle_select={on_toggle_select}
                  on_select_all={on_select_all}
                  on_toggle_menu={on_toggle_menu}
                  on_edit={on_edit}
                  on_delete={on_delete}
              />
              <Pagination
                  page={page.page}
                  page_count={page.page_count}
                  page_size={state.view.page_size()}
                  can_prev={page.can_prev}
                  can_next={page.can_next}
                  on_prev={on_prev}
                  on_next={on_next}
                  on_page_size={on_page_size}
              />
          </div>
          {
              if let Some(editor) = state.modal.editor() {
                  html! {
                      <TaskModal
                          form={editor.form.clone()}
                          error={editor.error.clone()}
                          users={state.users.clone()}
                          on_field={on_field}
                          on_save={on_save}
                          on_close={on_close_editor}
                      />
                  }
              } else {
                  html! {}
              }
          }
          {
              if let Some(prompt) = state.delete_prompt() {
                  html! {
                      <DeleteModal
                          prompt={prompt}
                          on_confirm={on_confirm_delete}
                          on_cancel={on_cancel_delete}
                      />
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
