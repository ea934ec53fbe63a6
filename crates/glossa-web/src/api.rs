use gloo::net::http::{
  Request,
  RequestBuilder,
  Response
};
use glossa_core::config::Config;
use glossa_core::endpoints::{
  Endpoint,
  Method
};
use glossa_core::error::ApiError;
use glossa_core::form::SubmitRequest;
use glossa_core::taxonomy::decode_collection;
use glossa_shared::{
  ApiErrorBody,
  TermDto
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::storage::load_token;

/// Browser client for the glossary API.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
  base_url: String,
  token:    Option<String>
}

impl ApiClient {
  pub fn new(cfg: &Config) -> Self {
    Self {
      base_url: cfg.api.base_url.clone(),
      token:    load_token()
    }
  }

  pub async fn collection<
    T: DeserializeOwned
  >(
    &self,
    endpoint: Endpoint
  ) -> Result<Vec<T>, ApiError> {
    let value =
      self.fetch_json(&endpoint).await?;
    decode_collection(
      endpoint.label(),
      value
    )
  }

  pub async fn term(
    &self,
    id: &str
  ) -> Result<TermDto, ApiError> {
    let value = self
      .fetch_json(&Endpoint::Term(
        id.to_string()
      ))
      .await?;
    serde_json::from_value(value).map_err(
      |err| ApiError::Decode(err.to_string())
    )
  }

  pub async fn submit(
    &self,
    request: &SubmitRequest
  ) -> Result<(), ApiError> {
    let endpoint = request.endpoint();
    let outgoing = self
      .builder(&endpoint)
      .json(request.payload())
      .map_err(|err| {
        ApiError::Decode(format!(
          "failed to encode payload: {err}"
        ))
      })?;
    let response = outgoing
      .send()
      .await
      .map_err(|err| {
        ApiError::Network(err.to_string())
      })?;
    check_status(response).await?;
    tracing::debug!(
      endpoint = endpoint.label(),
      "submission accepted"
    );
    Ok(())
  }

  async fn fetch_json(
    &self,
    endpoint: &Endpoint
  ) -> Result<Value, ApiError> {
    let response = self
      .builder(endpoint)
      .send()
      .await
      .map_err(|err| {
        ApiError::Network(err.to_string())
      })?;
    let response =
      check_status(response).await?;
    response
      .json::<Value>()
      .await
      .map_err(|err| {
        ApiError::Decode(err.to_string())
      })
  }

  fn builder(
    &self,
    endpoint: &Endpoint
  ) -> RequestBuilder {
    let url = endpoint.url(&self.base_url);
    tracing::debug!(
      method = endpoint.method().as_str(),
      url = %url,
      "sending request"
    );

    let builder = match endpoint.method() {
      | Method::Get => Request::get(&url),
      | Method::Post => Request::post(&url),
      | Method::Put => Request::put(&url)
    };
    match &self.token {
      | Some(token) => builder.header(
        "Authorization",
        &format!("Bearer {token}")
      ),
      | None => builder
    }
  }
}

async fn check_status(
  response: Response
) -> Result<Response, ApiError> {
  if response.ok() {
    return Ok(response);
  }

  let status = response.status();
  let body = response
    .json::<ApiErrorBody>()
    .await
    .ok();
  Err(ApiError::Http {
    status,
    body
  })
}
