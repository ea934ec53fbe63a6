use yew::{
  Html,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;

/// Landing spot after a session expires. Signing in happens outside this
/// app; the token it stores in local storage is picked up on the next load.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
  html! {
      <div class="panel">
          <div class="header">{ "Sign in required" }</div>
          <div class="details">
              <p>{ "Your session has expired or you are not signed in. Sign in and come back to continue." }</p>
              <Link<Route> to={Route::Terms}>{ "Back to the glossary" }</Link<Route>>
          </div>
      </div>
  }
}
