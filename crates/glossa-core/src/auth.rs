use tracing::{
  error,
  warn
};

use crate::error::ApiError;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum AuthDisposition {
  /// The session is gone; the front end must route to the login flow.
  RedirectToLogin,
  Continue
}

/// Inspects a failed fetch of protected data and decides whether the user
/// has to sign in again. Every failure is logged.
pub fn handle_fetch_error(
  context: &str,
  err: &ApiError
) -> AuthDisposition {
  if err.is_auth_failure() {
    warn!(
      context,
      status = ?err.status(),
      "authentication required; \
       redirecting to login"
    );
    AuthDisposition::RedirectToLogin
  } else {
    error!(context, error = %err, "fetch failed");
    AuthDisposition::Continue
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn auth_failures_redirect() {
    let err = ApiError::Http {
      status: 401,
      body:   None
    };
    assert_eq!(
      handle_fetch_error("terms", &err),
      AuthDisposition::RedirectToLogin
    );
  }

  #[test]
  fn other_failures_continue() {
    let err = ApiError::Network(
      "connection refused".to_string()
    );
    assert_eq!(
      handle_fetch_error("terms", &err),
      AuthDisposition::Continue
    );
  }
}
