use std::rc::Rc;

use glossa_core::config::Config;
use glossa_core::endpoints::Endpoint;
use glossa_core::error::ApiError;
use glossa_core::form::{
  FormEffect,
  FormEvent,
  FormMode,
  SubmitRequest,
  TermForm,
  TextField
};
use glossa_core::taxonomy::Dimension;
use glossa_shared::{
  CategoryDto,
  LanguageDto,
  ThemeDto
};
use serde::de::DeserializeOwned;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
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
use crate::app::{
  Route,
  go_to_login
};
use crate::components::{
  ConfirmModal,
  SelectWithOther
};

#[derive(Properties, PartialEq)]
pub struct TermFormPageProps {
  /// Present when editing an existing term.
  #[prop_or_default]
  pub id: Option<String>
}

enum FormAction {
  Event(FormEvent),
  Submit,
  /// Rebuilds the form for a different route id.
  Reset(FormMode)
}

#[derive(Clone, PartialEq)]
struct FormStore {
  form:       TermForm,
  submit_seq: u64,
  outgoing:   Option<SubmitRequest>,
  effect:     FormEffect
}

impl FormStore {
  fn new(mode: FormMode) -> Self {
    Self {
      form:       TermForm::new(mode),
      submit_seq: 0,
      outgoing:   None,
      effect:     FormEffect::None
    }
  }
}

impl Reducible for FormStore {
  type Action = FormAction;

  fn reduce(
    self: Rc<Self>,
    action: FormAction
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    match action {
      | FormAction::Event(event) => {
        let effect = next.form.apply(event);
        if effect != FormEffect::None {
          next.effect = effect;
        }
      }
      | FormAction::Submit => {
        // A rejected submit leaves its message on the form.
        if let Ok(request) =
          next.form.begin_submit()
        {
          next.outgoing = Some(request);
          next.submit_seq += 1;
        }
      }
      | FormAction::Reset(mode) => {
        if next.form.mode() != &mode {
          tracing::debug!(?mode, "rebuilding form");
          next = FormStore {
            submit_seq: self.submit_seq,
            ..FormStore::new(mode)
          };
        }
      }
    }
    Rc::new(next)
  }
}

fn spawn_taxonomy<T>(
  store: UseReducerHandle<FormStore>,
  api: ApiClient,
  endpoint: Endpoint,
  into_event: fn(
    Result<Vec<T>, ApiError>
  ) -> FormEvent
) where
  T: DeserializeOwned + 'static
{
  wasm_bindgen_futures::spawn_local(
    async move {
      let result =
        api.collection::<T>(endpoint).await;
      store.dispatch(FormAction::Event(
        into_event(result)
      ));
    }
  );
}

fn text_callback(
  store: &UseReducerHandle<FormStore>,
  field: TextField
) -> Callback<web_sys::InputEvent> {
  let store = store.clone();
  Callback::from(
    move |e: web_sys::InputEvent| {
      let value = match field {
        | TextField::Definition => {
          let area: web_sys::HtmlTextAreaElement =
            e.target_unchecked_into();
          area.value()
        }
        | TextField::Term
        | TextField::Translation => {
          let input: web_sys::HtmlInputElement =
            e.target_unchecked_into();
          input.value()
        }
      };
      store.dispatch(FormAction::Event(
        FormEvent::TextChanged(field, value)
      ));
    }
  )
}

fn choice_field(
  store: &UseReducerHandle<FormStore>,
  dimension: Dimension
) -> Html {
  let choice = store.form.choice(dimension);
  let on_select = {
    let store = store.clone();
    Callback::from(move |value: String| {
      store.dispatch(FormAction::Event(
        FormEvent::ChoiceSelected(
          dimension, value
        )
      ));
    })
  };
  let on_free_text = {
    let store = store.clone();
    Callback::from(move |value: String| {
      store.dispatch(FormAction::Event(
        FormEvent::FreeTextChanged(
          dimension, value
        )
      ));
    })
  };

  html! {
      <SelectWithOther
          label={dimension.label().to_string()}
          name={dimension.key().to_string()}
          options={choice.options()}
          selected={choice.selected().to_string()}
          free_text={choice.free_text().to_string()}
          disabled={store.form.is_submitting()}
          on_select={on_select}
          on_free_text={on_free_text}
      />
  }
}

#[function_component(TermFormPage)]
pub fn term_form_page(
  props: &TermFormPageProps
) -> Html {
  let cfg = use_context::<Rc<Config>>()
    .unwrap_or_default();
  let navigator = use_navigator();
  let store = {
    let mode =
      FormMode::from_id(props.id.clone());
    use_reducer(move || FormStore::new(mode))
  };
  let api = {
    let cfg = cfg.clone();
    use_memo((), move |_| {
      ApiClient::new(&cfg)
    })
  };

  {
    let store = store.clone();
    let api = (*api).clone();
    use_effect_with(
      props.id.clone(),
      move |id| {
        store.dispatch(FormAction::Reset(
          FormMode::from_id(id.clone())
        ));
        spawn_taxonomy::<CategoryDto>(
          store.clone(),
          api.clone(),
          Endpoint::Categories,
          FormEvent::CategoriesLoaded
        );
        spawn_taxonomy::<ThemeDto>(
          store.clone(),
          api.clone(),
          Endpoint::Themes,
          FormEvent::ThemesLoaded
        );
        spawn_taxonomy::<LanguageDto>(
          store.clone(),
          api.clone(),
          Endpoint::Languages,
          FormEvent::LanguagesLoaded
        );
        if let Some(id) = id.clone() {
          tracing::info!(%id, "loading term for edit");
          wasm_bindgen_futures::spawn_local(
            async move {
              let result = api.term(&id).await;
              store.dispatch(
                FormAction::Event(
                  FormEvent::TermLoaded(
                    result
                  )
                )
              );
            }
          );
        }
        || ()
      }
    );
  }

  {
    let store = store.clone();
    let api = (*api).clone();
    use_effect_with(
      store.submit_seq,
      move |seq| {
        if *seq > 0
          && let Some(request) =
            store.outgoing.clone()
        {
          wasm_bindgen_futures::spawn_local(
            async move {
              let result =
                api.submit(&request).await;
              store.dispatch(
                FormAction::Event(
                  FormEvent::SubmitFinished(
                    result
                  )
                )
              );
            }
          );
        }
        || ()
      }
    );
  }

  {
    let cfg = cfg.clone();
    let navigator = navigator.clone();
    use_effect_with(
      store.effect,
      move |effect| {
        match effect {
          | FormEffect::NavigateToListing => {
            if let Some(navigator) =
              navigator.as_ref()
            {
              navigator.push(&Route::Terms);
            }
          }
          | FormEffect::RedirectToLogin => {
            go_to_login(
              &cfg,
              navigator.as_ref()
            );
          }
          | FormEffect::None => {}
        }
        || ()
      }
    );
  }

  let on_submit = {
    let store = store.clone();
    Callback::from(
      move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        store.dispatch(FormAction::Submit);
      }
    )
  };
  let on_close = {
    let store = store.clone();
    Callback::from(move |_: MouseEvent| {
      store.dispatch(FormAction::Event(
        FormEvent::DismissConfirmation
      ));
    })
  };

  let form = &store.form;
  let busy = form.is_submitting();
  let editing = form.mode().is_edit();
  let heading = if editing {
    "Edit term"
  } else {
    "Propose a term"
  };
  let confirmation = if editing {
    "Your changes were saved."
  } else {
    "Your term was submitted for review."
  };

  html! {
      <div class="panel term-form">
          <div class="header">{ heading }</div>
          <form onsubmit={on_submit}>
              <div class="field">
                  <label for="term">{ TextField::Term.label() }</label>
                  <input
                      id="term"
                      value={form.text(TextField::Term).to_string()}
                      oninput={text_callback(&store, TextField::Term)}
                      disabled={busy}
                  />
              </div>
              <div class="field">
                  <label for="definition">{ TextField::Definition.label() }</label>
                  <textarea
                      id="definition"
                      rows="4"
                      value={form.text(TextField::Definition).to_string()}
                      oninput={text_callback(&store, TextField::Definition)}
                      disabled={busy}
                  />
              </div>
              <div class="field">
                  <label for="translation">{ TextField::Translation.label() }</label>
                  <input
                      id="translation"
                      value={form.text(TextField::Translation).to_string()}
                      oninput={text_callback(&store, TextField::Translation)}
                      disabled={busy}
                  />
              </div>
              { choice_field(&store, Dimension::Category) }
              { choice_field(&store, Dimension::Theme) }
              { choice_field(&store, Dimension::Language) }
              if let Some(message) = form.error() {
                  <div class="error">{ message }</div>
              }
              <div class="actions">
                  <button class="btn primary" type="submit" disabled={busy}>
                      { if busy { "Submitting…" } else { "Submit" } }
                  </button>
              </div>
          </form>
          <ConfirmModal
              open={form.show_confirmation()}
              title={"Thank you".to_string()}
              message={confirmation.to_string()}
              on_close={on_close}
          />
      </div>
  }
}
