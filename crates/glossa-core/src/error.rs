use glossa_shared::ApiErrorBody;
use thiserror::Error;

/// Error codes the API uses to signal a missing or stale session.
const AUTH_FAILURE_CODES: &[&str] = &[
  "TOKEN_EXPIRED",
  "INVALID_TOKEN",
  "UNAUTHORIZED"
];

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum ApiError {
  #[error(
    "request failed with status {status}: {}",
    .body.as_ref().and_then(ApiErrorBody::summary).unwrap_or("no details")
  )]
  Http {
    status: u16,
    body:   Option<ApiErrorBody>
  },

  #[error("network error: {0}")]
  Network(String),

  #[error("failed to decode response: {0}")]
  Decode(String),

  #[error(
    "{endpoint} returned {found}, expected an array"
  )]
  UnexpectedShape {
    endpoint: String,
    found:    &'static str
  }
}

impl ApiError {
  pub fn status(&self) -> Option<u16> {
    match self {
      | ApiError::Http {
        status,
        ..
      } => Some(*status),
      | _ => None
    }
  }

  /// True when the failure means the caller has to sign in again.
  pub fn is_auth_failure(&self) -> bool {
    let ApiError::Http {
      status,
      body
    } = self
    else {
      return false;
    };

    if matches!(status, 401 | 403) {
      return true;
    }

    body
      .as_ref()
      .and_then(|body| body.code.as_deref())
      .is_some_and(|code| {
        AUTH_FAILURE_CODES.iter().any(
          |known| {
            known
              .eq_ignore_ascii_case(code)
          }
        )
      })
  }
}
