use web_sys::{
  HtmlInputElement,
  InputEvent
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
pub struct ListHeaderProps {
  pub record_count: usize,
  pub search:       String,
  pub on_add:       Callback<MouseEvent>,
  pub on_refresh:   Callback<MouseEvent>,
  pub on_search:    Callback<String>,
  #[prop_or_default]
  pub children:     Html
}

#[function_component(ListHeader)]
pub fn list_header(
  props: &ListHeaderProps
) -> Html {
  let on_input = {
    let on_search =
      props.on_search.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_search.emit(input.value());
    })
  };

  html! {
      <>
          <div class="header">
              <div>
                  <div class="title">{ "Tasks" }</div>
                  <div class="subtitle">{ "All Tasks" }</div>
              </div>
              <div class="actions">
                  { props.children.clone() }
                  <button class="btn" onclick={props.on_add.clone()}>{ "New Task" }</button>
                  <button class="btn" onclick={props.on_refresh.clone()}>{ "Refresh" }</button>
              </div>
          </div>
          <div class="toolbar">
              <div class="records">{ format!("{} records", props.record_count) }</div>
              <input
                  type="text"
                  placeholder="Search"
                  value={props.search.clone()}
                  oninput={on_input}
              />
          </div>
      </>
  }
}
