use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
  pub message:    String,
  pub on_dismiss: Callback<MouseEvent>
}

#[function_component(NoticeBanner)]
pub fn notice_banner(
  props: &NoticeBannerProps
) -> Html {
  html! {
      <div class="notice error" role="alert">
          <span>{ &props.message }</span>
          <button class="btn" onclick={props.on_dismiss.clone()}>{ "×" }</button>
      </div>
  }
}
