use glossa_core::listing::FacetCounts;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
  pub title:     String,
  pub counts:    FacetCounts,
  pub selected:  Option<String>,
  /// Emits the clicked value; the listing clears a dimension when its
  /// current value is clicked again. "All" emits an empty string.
  pub on_select: Callback<String>
}

fn facet_row(
  label: &str,
  count: usize,
  active: bool,
  on_click: Callback<String>,
  value: String
) -> Html {
  // "All" and the current selection are always clickable.
  let empty = count == 0
    && !active
    && !value.is_empty();
  html! {
      <li>
          <button
              type="button"
              class={classes!("facet", active.then_some("active"), empty.then_some("empty"))}
              disabled={empty}
              onclick={move |_| on_click.emit(value.clone())}
          >
              <span class="facet-label">{ label }</span>
              <span class="badge">{ count }</span>
          </button>
      </li>
  }
}

#[function_component(FilterPanel)]
pub fn filter_panel(
  props: &FilterPanelProps
) -> Html {
  let any_selected = props.selected.is_some();

  html! {
      <section class="panel filter">
          <h3 class="header">{ &props.title }</h3>
          <ul class="facets">
              { facet_row("All", props.counts.all, !any_selected, props.on_select.clone(), String::new()) }
              {
                  for props.counts.options.iter().map(|(name, count)| {
                      let active = props.selected.as_deref() == Some(name.as_str());
                      facet_row(name, *count, active, props.on_select.clone(), name.clone())
                  })
              }
          </ul>
      </section>
  }
}
