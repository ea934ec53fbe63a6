use std::rc::Rc;

use glossa_core::config::Config;
use glossa_core::endpoints::Endpoint;
use glossa_core::error::ApiError;
use glossa_core::listing::{
  ListingEffect,
  ListingEvent,
  ListingState
};
use glossa_core::taxonomy::Dimension;
use glossa_shared::{
  CategoryDto,
  LanguageDto,
  TermDto,
  ThemeDto
};
use serde::de::DeserializeOwned;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Reducible,
  TargetCast,
  UseReducerHandle,
  function_component,
  html,
  use_context,
  use_effect_with,
  use_memo,
  use_reducer
};
use yew_router::prelude::use_navigator;

use crate::api::ApiClient;
use crate::app::go_to_login;
use crate::components::{
  FilterPanel,
  PaginationBar,
  TermTable
};

#[derive(Clone, PartialEq)]
struct ListingStore {
  state:          ListingState,
  login_required: bool
}

impl Reducible for ListingStore {
  type Action = ListingEvent;

  fn reduce(
    self: Rc<Self>,
    action: ListingEvent
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    if next.state.apply(action)
      == ListingEffect::RedirectToLogin
    {
      next.login_required = true;
    }
    Rc::new(next)
  }
}

/// Fetches one collection and feeds the result back as its own event.
fn spawn_load<T>(
  store: UseReducerHandle<ListingStore>,
  api: ApiClient,
  endpoint: Endpoint,
  into_event: fn(
    Result<Vec<T>, ApiError>
  ) -> ListingEvent
) where
  T: DeserializeOwned + 'static
{
  wasm_bindgen_futures::spawn_local(
    async move {
      let label = endpoint.label();
      let result =
        api.collection::<T>(endpoint).await;
      tracing::debug!(
        endpoint = label,
        ok = result.is_ok(),
        "collection fetched"
      );
      store.dispatch(into_event(result));
    }
  );
}

fn filter_panel(
  store: &UseReducerHandle<ListingStore>,
  dimension: Dimension
) -> Html {
  let on_select = {
    let store = store.clone();
    Callback::from(move |value: String| {
      store.dispatch(ListingEvent::Toggle(
        dimension, value
      ));
    })
  };
  let selected = store
    .state
    .filter()
    .selected(dimension)
    .map(str::to_string);

  html! {
      <FilterPanel
          title={dimension.label().to_string()}
          counts={store.state.facet_counts(dimension)}
          selected={selected}
          on_select={on_select}
      />
  }
}

#[function_component(TermListPage)]
pub fn term_list_page() -> Html {
  let cfg = use_context::<Rc<Config>>()
    .unwrap_or_default();
  let store = {
    let listing = cfg.listing.clone();
    use_reducer(move || ListingStore {
      state:          ListingState::new(
        &listing
      ),
      login_required: false
    })
  };
  let navigator = use_navigator();
  let api = {
    let cfg = cfg.clone();
    use_memo((), move |_| {
      ApiClient::new(&cfg)
    })
  };

  {
    let store = store.clone();
    let api = (*api).clone();
    use_effect_with((), move |_| {
      tracing::info!(
        "loading glossary listing"
      );
      spawn_load::<TermDto>(
        store.clone(),
        api.clone(),
        Endpoint::ApprovedTerms,
        ListingEvent::TermsLoaded
      );
      spawn_load::<CategoryDto>(
        store.clone(),
        api.clone(),
        Endpoint::Categories,
        ListingEvent::CategoriesLoaded
      );
      spawn_load::<ThemeDto>(
        store.clone(),
        api.clone(),
        Endpoint::Themes,
        ListingEvent::ThemesLoaded
      );
      spawn_load::<LanguageDto>(
        store,
        api,
        Endpoint::Languages,
        ListingEvent::LanguagesLoaded
      );
      || ()
    });
  }

  {
    let cfg = cfg.clone();
    let navigator = navigator.clone();
    use_effect_with(
      store.login_required,
      move |required| {
        if *required {
          go_to_login(
            &cfg,
            navigator.as_ref()
          );
        }
        || ()
      }
    );
  }

  let on_search = {
    let store = store.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        store.dispatch(
          ListingEvent::Search(
            input.value()
          )
        );
      }
    )
  };
  let on_prev = {
    let store = store.clone();
    Callback::from(move |_: MouseEvent| {
      store.dispatch(ListingEvent::PrevPage);
    })
  };
  let on_next = {
    let store = store.clone();
    Callback::from(move |_: MouseEvent| {
      store.dispatch(ListingEvent::NextPage);
    })
  };

  let view = store.state.page_view();

  html! {
      <div class="layout listing">
          <aside class="filters">
              { filter_panel(&store, Dimension::Category) }
              { filter_panel(&store, Dimension::Theme) }
              { filter_panel(&store, Dimension::Language) }
          </aside>
          <section class="results">
              <div class="field search">
                  <input
                      type="search"
                      placeholder="Search terms and definitions"
                      value={store.state.filter().search().to_string()}
                      oninput={on_search}
                  />
              </div>
              if let Some(message) = store.state.load_error() {
                  <div class="error">{ message }</div>
              }
              <TermTable terms={view.items.clone()} />
              <PaginationBar
                  page={view.page}
                  page_count={view.page_count}
                  total={view.total}
                  on_prev={on_prev}
                  on_next={on_next}
              />
          </section>
      </div>
  }
}
