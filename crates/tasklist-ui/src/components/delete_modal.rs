use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DeleteModalProps {
  pub prompt:     String,
  pub on_confirm: Callback<MouseEvent>,
  pub on_cancel:  Callback<MouseEvent>
}

#[function_component(DeleteModal)]
pub fn delete_modal(
  props: &DeleteModalProps
) -> Html {
  html! {
      <div class="modal-backdrop">
          <div class="modal">
              <div class="modal-header danger">
                  <h2>{ "Delete" }</h2>
              </div>
              <div class="modal-body center">
                  <p>{ &props.prompt }</p>
                  <div class="form-actions center">
                      <button class="btn" onclick={props.on_cancel.clone()}>{ "No" }</button>
                      <button class="btn primary" onclick={props.on_confirm.clone()}>{ "Yes" }</button>
                  </div>
              </div>
          </div>
      </div>
  }
}
