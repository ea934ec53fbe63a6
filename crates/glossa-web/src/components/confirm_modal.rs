use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
  pub open:     bool,
  pub title:    String,
  pub message:  String,
  pub on_close: Callback<MouseEvent>
}

#[function_component(ConfirmModal)]
pub fn confirm_modal(
  props: &ConfirmModalProps
) -> Html {
  if !props.open {
    return html! {};
  }

  html! {
      <div class="modal-backdrop" onclick={props.on_close.clone()}>
          <div class="modal modal-sm" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="header">{ &props.title }</div>
              <div class="content">
                  <p>{ &props.message }</p>
                  <div class="footer">
                      <button type="button" class="btn" onclick={props.on_close.clone()}>{ "OK" }</button>
                  </div>
              </div>
          </div>
      </div>
  }
}
