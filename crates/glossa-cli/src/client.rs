use anyhow::Context;
use glossa_core::endpoints::{Endpoint, Method};
use glossa_core::error::ApiError;
use glossa_core::form::SubmitRequest;
use glossa_core::taxonomy::decode_collection;
use glossa_shared::{ApiErrorBody, TermDto};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

/// Glossary API client backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(base_url: &str, token: Option<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("glossa/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
            token: token.filter(|token| !token.trim().is_empty()),
        })
    }

    pub async fn collection<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<Vec<T>, ApiError> {
        let value = self.fetch_json(&endpoint).await?;
        decode_collection(endpoint.label(), value)
    }

    pub async fn term(&self, id: &str) -> Result<TermDto, ApiError> {
        let value = self.fetch_json(&Endpoint::Term(id.to_string())).await?;
        serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
    }

    #[instrument(skip_all, fields(endpoint = request.endpoint().label()))]
    pub async fn submit(&self, request: &SubmitRequest) -> Result<(), ApiError> {
        let endpoint = request.endpoint();
        let response = self
            .request(&endpoint)
            .json(request.payload())
            .send()
            .await
            .map_err(network_error)?;
        check_status(response).await?;
        Ok(())
    }

    #[instrument(skip_all, fields(endpoint = endpoint.label()))]
    async fn fetch_json(&self, endpoint: &Endpoint) -> Result<Value, ApiError> {
        let response = self
            .request(endpoint)
            .send()
            .await
            .map_err(network_error)?;
        let response = check_status(response).await?;
        response
            .json::<Value>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    fn request(&self, endpoint: &Endpoint) -> reqwest::RequestBuilder {
        let url = endpoint.url(&self.base_url);
        debug!(method = endpoint.method().as_str(), url = %url, "sending request");

        let method = match endpoint.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        };
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .bytes()
        .await
        .ok()
        .and_then(|bytes| serde_json::from_slice::<ApiErrorBody>(&bytes).ok());
    Err(ApiError::Http {
        status: status.as_u16(),
        body,
    })
}

fn network_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}
