use web_sys::{
  Event,
  HtmlInputElement
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
pub struct PaginationProps {
  pub page:         usize,
  pub page_count:   usize,
  pub page_size:    usize,
  pub can_prev:     bool,
  pub can_next:     bool,
  pub on_prev:      Callback<MouseEvent>,
  pub on_next:      Callback<MouseEvent>,
  pub on_page_size: Callback<String>
}

#[function_component(Pagination)]
pub fn pagination(
  props: &PaginationProps
) -> Html {
  let on_change = {
    let on_page_size =
      props.on_page_size.clone();
    Callback::from(move |e: Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_page_size.emit(input.value());
    })
  };

  html! {
      <div class="pagination">
          <input
              type="number"
              min="1"
              value={props.page_size.to_string()}
              onchange={on_change}
          />
          <div class="pager">
              <button class="btn" disabled={!props.can_prev} onclick={props.on_prev.clone()}>
                  { "< Prev" }
              </button>
              <span>{ format!("Page {} of {}", props.page, props.page_count.max(1)) }</span>
              <button class="btn" disabled={!props.can_next} onclick={props.on_next.clone()}>
                  { "Next >" }
              </button>
          </div>
      </div>
  }
}
