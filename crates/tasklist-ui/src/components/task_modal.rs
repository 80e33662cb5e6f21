use tasklist_core::form::{
  FormField,
  TaskForm
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::TaskFormFields;

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
  pub form:     TaskForm,
  pub error:    Option<String>,
  pub users:    Vec<String>,
  pub on_field:
    Callback<(FormField, String)>,
  pub on_save:  Callback<()>,
  pub on_close: Callback<MouseEvent>
}

#[function_component(TaskModal)]
pub fn task_modal(
  props: &TaskModalProps
) -> Html {
  html! {
      <div class="modal-backdrop">
          <div class="modal">
              <div class="modal-header">
                  <h2>{ props.form.title() }</h2>
                  <button class="close" onclick={props.on_close.clone()}>{ "×" }</button>
              </div>
              <div class="modal-body">
                  {
                      if let Some(error) = props.error.clone() {
                          html! { <div class="form-error">{ error }</div> }
                      } else {
                          html! {}
                      }
                  }
                  <TaskFormFields
                      form={props.form.clone()}
                      users={props.users.clone()}
                      on_field={props.on_field.clone()}
                      on_save={props.on_save.clone()}
                      on_cancel={props.on_close.clone()}
                  />
              </div>
          </div>
      </div>
  }
}
