use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct RowMenuProps {
  pub open:      bool,
  pub on_toggle: Callback<()>,
  pub on_edit:   Callback<()>,
  pub on_delete: Callback<()>
}

/// Per-row dropdown. Whether it is open
/// is decided by the list view, which
/// keeps at most one row's menu open.
#[function_component(RowMenu)]
pub fn row_menu(
  props: &RowMenuProps
) -> Html {
  let on_toggle =
    props.on_toggle.reform(
      |_: MouseEvent| ()
    );
  let on_edit =
    props.on_edit.reform(|_: MouseEvent| ());
  let on_delete = props
    .on_delete
    .reform(|_: MouseEvent| ());

  html! {
      <div class="row-menu">
          <button class="menu-toggle" onclick={on_toggle}>{ "▼" }</button>
          {
              if props.open {
                  html! {
                      <div class="dropdown">
                          <button onclick={on_edit}>{ "Edit" }</button>
                          <button onclick={on_delete}>{ "Delete" }</button>
                      </div>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
