use std::rc::Rc;

use glossa_core::config::Config;
use yew::{
  ContextProvider,
  Html,
  classes,
  function_component,
  html,
  use_state
};
use yew_router::prelude::{
  BrowserRouter,
  Link,
  Navigator,
  Routable,
  Switch
};

use crate::pages::{
  LoginPage,
  TermFormPage,
  TermListPage
};
use crate::storage::load_config;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
  #[at("/")]
  Terms,
  #[at("/terms/new")]
  NewTerm,
  #[at("/terms/:id/edit")]
  EditTerm { id: String },
  #[at("/login")]
  Login,
  #[not_found]
  #[at("/404")]
  NotFound
}

fn switch(route: Route) -> Html {
  tracing::debug!(?route, "routing");
  match route {
    | Route::Terms => {
      html! { <TermListPage /> }
    }
    | Route::NewTerm => {
      html! { <TermFormPage key={form_key(None)} /> }
    }
    | Route::EditTerm {
      id
    } => {
      let key = form_key(Some(&id));
      html! { <TermFormPage key={key} id={Some(id)} /> }
    }
    | Route::Login => {
      html! { <LoginPage /> }
    }
    | Route::NotFound => html! {
        <div class="panel">
            <div class="header">{ "Page not found" }</div>
            <Link<Route> to={Route::Terms}>{ "Back to the glossary" }</Link<Route>>
        </div>
    }
  }
}

/// Create and edit routes render the same page; a distinct key per id makes
/// the router mount a fresh form instead of reusing the previous one.
fn form_key(id: Option<&str>) -> String {
  match id {
    | Some(id) => format!("edit:{id}"),
    | None => "new".to_string()
  }
}

/// Sends the user to the configured sign-in flow: an in-app route when the
/// router knows the path, a full page load otherwise.
pub fn go_to_login(
  cfg: &Config,
  navigator: Option<&Navigator>
) {
  let target = cfg.routes.login.as_str();
  match (Route::recognize(target), navigator)
  {
    | (Some(route), Some(navigator))
      if route != Route::NotFound =>
    {
      navigator.push(&route);
    }
    | _ => {
      tracing::info!(target, "leaving app for login");
      if let Some(window) = web_sys::window()
        && let Err(err) =
          window.location().set_href(target)
      {
        tracing::error!(?err, "failed to redirect to login");
      }
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(|| Rc::new(load_config()));

  html! {
      <ContextProvider<Rc<Config>> context={(*config).clone()}>
          <BrowserRouter>
              <header class="topbar">
                  <Link<Route> to={Route::Terms} classes={classes!("brand")}>{ "Glossa" }</Link<Route>>
                  <Link<Route> to={Route::NewTerm} classes={classes!("btn")}>{ "Propose a term" }</Link<Route>>
              </header>
              <main class="content">
                  <Switch<Route> render={switch} />
              </main>
          </BrowserRouter>
      </ContextProvider<Rc<Config>>>
  }
}

#[cfg(test)]
mod app_tests {
  use super::*;

  #[test]
  fn create_and_edit_forms_never_share_a_key()
  {
    assert_ne!(
      form_key(None),
      form_key(Some("42"))
    );
    assert_ne!(
      form_key(Some("42")),
      form_key(Some("43"))
    );
    assert_ne!(
      form_key(Some("new")),
      form_key(None)
    );
  }

  #[test]
  fn edit_route_carries_its_id() {
    assert_eq!(
      Route::recognize("/terms/42/edit"),
      Some(Route::EditTerm {
        id: "42".to_string()
      })
    );
    assert_eq!(
      Route::recognize("/terms/new"),
      Some(Route::NewTerm)
    );
  }
}
