use tasklist_core::{
  Task,
  TaskId
};
use web_sys::{
  Event,
  HtmlInputElement
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

use super::TaskRow;

#[derive(Properties, PartialEq)]
pub struct TaskTableProps {
  pub rows:             Vec<Task>,
  pub selected_ids:     Vec<TaskId>,
  pub all_selected:     bool,
  pub open_menu:        Option<TaskId>,
  pub on_toggle_select: Callback<TaskId>,
  pub on_select_all:    Callback<bool>,
  pub on_toggle_menu:   Callback<TaskId>,
  pub on_edit:          Callback<TaskId>,
  pub on_delete:
    Callback<(TaskId, String)>
}

#[function_component(TaskTable)]
pub fn task_table(
  props: &TaskTableProps
) -> Html {
  let on_select_all = {
    let on_select_all =
      props.on_select_all.clone();
    Callback::from(move |e: Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_select_all.emit(input.checked());
    })
  };

  html! {
      <table class="tasks">
          <thead>
              <tr>
                  <th>
                      <input
                          type="checkbox"
                          checked={props.all_selected}
                          onchange={on_select_all}
                      />
                  </th>
                  <th>{ "Assigned To" }</th>
                  <th>{ "Status" }</th>
                  <th>{ "Due Date" }</th>
                  <th>{ "Priority" }</th>
                  <th>{ "Comments" }</th>
              </tr>
          </thead>
          <tbody>
              {
                  for props.rows.iter().cloned().map(|task| {
                      let checked = props.selected_ids.contains(&task.id);
                      let menu_open = props.open_menu.as_ref() == Some(&task.id);
                      let key = task.id.key();
                      html! {
                          <TaskRow
                              key={key}
                              task={task}
                              checked={checked}
                              menu_open={menu_open}
                              on_toggle_select={props.on_toggle_select.clone()}
                              on_toggle_menu={props.on_toggle_menu.clone()}
                              on_edit={props.on_edit.clone()}
                              on_delete={props.on_delete.clone()}
                          />
                      }
                  })
              }
          </tbody>
      </table>
  }
}
