use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
  pub page:       usize,
  pub page_count: usize,
  pub total:      usize,
  pub on_prev:    Callback<MouseEvent>,
  pub on_next:    Callback<MouseEvent>
}

#[function_component(PaginationBar)]
pub fn pagination_bar(
  props: &PaginationBarProps
) -> Html {
  html! {
      <div class="pagination">
          <button
              type="button"
              class="btn"
              onclick={props.on_prev.clone()}
              disabled={props.page <= 1}
          >
              { "Previous" }
          </button>
          <span class="meta">
              { format!("Page {} of {} ({} terms)", props.page, props.page_count, props.total) }
          </span>
          <button
              type="button"
              class="btn"
              onclick={props.on_next.clone()}
              disabled={props.page >= props.page_count}
          >
              { "Next" }
          </button>
      </div>
  }
}
