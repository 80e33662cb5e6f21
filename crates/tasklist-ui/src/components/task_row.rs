use tasklist_core::{
  Task,
  TaskId
};
use web_sys::Event;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::RowMenu;

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
  pub task:             Task,
  pub checked:          bool,
  pub menu_open:        bool,
  pub on_toggle_select: Callback<TaskId>,
  pub on_toggle_menu:   Callback<TaskId>,
  pub on_edit:          Callback<TaskId>,
  pub on_delete:
    Callback<(TaskId, String)>
}

#[function_component(TaskRow)]
pub fn task_row(
  props: &TaskRowProps
) -> Html {
  let id = props.task.id.clone();
  let on_toggle_select = {
    let on_toggle_select =
      props.on_toggle_select.clone();
    let id = id.clone();
    Callback::from(move |_: Event| {
      on_toggle_select.emit(id.clone())
    })
  };
  let on_edit = {
    let on_edit = props.on_edit.clone();
    let id = id.clone();
    Callback::from(move |()| {
      on_edit.emit(id.clone())
    })
  };
  let on_delete = {
    let on_delete =
      props.on_delete.clone();
    let id = id.clone();
    let assigned_to =
      props.task.assignee().to_string();
    Callback::from(move |()| {
      on_delete.emit((
        id.clone(),
        assigned_to.clone()
      ))
    })
  };
  let on_toggle_menu = {
    let on_toggle_menu =
      props.on_toggle_menu.clone();
    Callback::from(move |()| {
      on_toggle_menu.emit(id.clone())
    })
  };

  let task = &props.task;
  html! {
      <tr class={if props.checked { "row selected" } else { "row" }}>
          <td>
              <input
                  type="checkbox"
                  checked={props.checked}
                  onchange={on_toggle_select}
              />
          </td>
          <td>{ task.assignee() }</td>
          <td>{ task.status.label() }</td>
          <td>{ &task.due_date }</td>
          <td>{ task.priority.label() }</td>
          <td class="comments">
              <span>{ &task.description }</span>
              <RowMenu
                  open={props.menu_open}
                  on_toggle={on_toggle_menu}
                  on_edit={on_edit}
                  on_delete={on_delete}
              />
          </td>
      </tr>
  }
}
