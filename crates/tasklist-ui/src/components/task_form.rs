use tasklist_core::form::{
  FormField,
  TaskForm
};
use tasklist_core::{
  TaskPriority,
  TaskStatus
};
use web_sys::{
  Event,
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskFormFieldsProps {
  pub form:     TaskForm,
  pub users:    Vec<String>,
  pub on_field:
    Callback<(FormField, String)>,
  pub on_save:  Callback<()>,
  pub on_cancel: Callback<MouseEvent>
}

fn select_change(
  on_field: &Callback<(
    FormField,
    String
  )>,
  field: FormField
) -> Callback<Event> {
  let on_field = on_field.clone();
  Callback::from(move |e: Event| {
    let select: HtmlSelectElement =
      e.target_unchecked_into();
    on_field.emit((field, select.value()));
  })
}

fn required_label(
  field: FormField
) -> Html {
  html! {
      <label>
          { field.label() }
          {
              if field.is_required() {
                  html! { <span class="required">{ " *" }</span> }
              } else {
                  html! {}
              }
          }
      </label>
  }
}

/// A value the backend sent that is not
/// among the known choices stays listed.
fn options(
  values: impl IntoIterator<Item = String>,
  current: &str
) -> Html {
  let mut values: Vec<String> =
    values.into_iter().collect();
  if !current.is_empty()
    && !values.iter().any(|value| value == current)
  {
    values.push(current.to_string());
  }
  values
    .into_iter()
    .map(|value| {
      let selected = value == current;
      html! {
          <option value={value.clone()} selected={selected}>{ value }</option>
      }
    })
    .collect()
}

/// Controlled inputs for one draft. Holds
/// no state of its own: every keystroke
/// goes back up through `on_field`.
#[function_component(TaskFormFields)]
pub fn task_form_fields(
  props: &TaskFormFieldsProps
) -> Html {
  let draft = props.form.draft();

  let on_submit = {
    let on_save = props.on_save.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      on_save.emit(());
    })
  };
  let on_due_date = {
    let on_field = props.on_field.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_field.emit((
        FormField::DueDate,
        input.value()
      ));
    })
  };
  let on_description = {
    let on_field = props.on_field.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlTextAreaElement =
        e.target_unchecked_into();
      on_field.emit((
        FormField::Description,
        input.value()
      ));
    })
  };

  html! {
      <form onsubmit={on_submit}>
          <div class="form-grid">
              <div>
                  { required_label(FormField::AssignedTo) }
                  <select
                      required={true}
                      onchange={select_change(&props.on_field, FormField::AssignedTo)}
                  >
                      { options(props.users.iter().cloned(), &draft.assigned_to) }
                  </select>
              </div>
              <div>
                  { required_label(FormField::Status) }
                  <select
                      required={true}
                      onchange={select_change(&props.on_field, FormField::Status)}
                  >
                      {
                          options(
                              TaskStatus::ALL.iter().map(|status| status.label().to_string()),
                              draft.status.label()
                          )
                      }
                  </select>
              </div>
              <div>
                  { required_label(FormField::DueDate) }
                  <input
                      type="date"
                      required={true}
                      value={draft.due_date.clone()}
                      oninput={on_due_date}
                  />
              </div>
              <div>
                  { required_label(FormField::Priority) }
                  <select
                      required={true}
                      onchange={select_change(&props.on_field, FormField::Priority)}
                  >
                      {
                          options(
                              TaskPriority::ALL.iter().map(|priority| priority.label().to_string()),
                              draft.priority.label()
                          )
                      }
                  </select>
              </div>
              <div class="wide">
                  { required_label(FormField::Description) }
                  <textarea
                      rows="3"
                      value={draft.description.clone()}
                      oninput={on_description}
                  />
              </div>
          </div>
          <div class="form-actions">
              <button type="button" class="btn" onclick={props.on_cancel.clone()}>{ "Cancel" }</button>
              <button type="submit" class="btn primary">{ "Save" }</button>
          </div>
      </form>
  }
}
