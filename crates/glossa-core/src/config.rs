use std::fs;
use std::path::Path;

use anyhow::{
  Context,
  anyhow,
  bail
};
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  error,
  info
};

use crate::pagination::DEFAULT_PAGE_SIZE;

const DEFAULT_BASE_URL: &str =
  "http://localhost:5000/api";

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Default,
)]
#[serde(default)]
pub struct Config {
  pub api:     ApiConfig,
  pub listing: ListingConfig,
  pub routes:  RoutesConfig
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct ApiConfig {
  pub base_url: String
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL
        .to_string()
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct ListingConfig {
  pub page_size:            usize,
  /// Go back to page 1 whenever a filter or the search changes.
  pub reset_page_on_filter: bool
}

impl Default for ListingConfig {
  fn default() -> Self {
    Self {
      page_size:            DEFAULT_PAGE_SIZE,
      reset_page_on_filter: false
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct RoutesConfig {
  /// In-app path or absolute URL of the sign-in flow.
  pub login: String
}

impl Default for RoutesConfig {
  fn default() -> Self {
    Self {
      login: "/login".to_string()
    }
  }
}

impl Config {
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let cfg: Config = toml::from_str(text)
      .context("invalid glossa config")?;
    cfg.validate()?;
    Ok(cfg)
  }

  /// Parses a bundled config, falling back to defaults when it is broken.
  pub fn from_toml_or_default(
    text: &str
  ) -> Self {
    match Self::from_toml_str(text) {
      | Ok(cfg) => {
        info!(
          base_url = %cfg.api.base_url,
          page_size = cfg.listing.page_size,
          "loaded glossa config"
        );
        cfg
      }
      | Err(err) => {
        error!(error = %format!("{err:#}"), "failed to parse config; using defaults");
        Self::default()
      }
    }
  }

  #[tracing::instrument]
  pub fn load_file(
    path: &Path
  ) -> anyhow::Result<Self> {
    let text = fs::read_to_string(path)
      .with_context(|| {
        format!(
          "failed to read config {}",
          path.display()
        )
      })?;
    Self::from_toml_str(&text)
      .with_context(|| {
        format!(
          "failed to load config {}",
          path.display()
        )
      })
  }

  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) -> anyhow::Result<()>
  where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (key, value) in overrides {
      debug!(key = %key, value = %value, "applying override");
      match key.as_str() {
        | "api.base_url" => {
          self.api.base_url = value;
        }
        | "listing.page_size" => {
          self.listing.page_size = value
            .parse()
            .with_context(|| {
              format!(
                "invalid page size: \
                 {value}"
              )
            })?;
        }
        | "listing.reset_page_on_filter" => {
          self
            .listing
            .reset_page_on_filter =
            parse_bool(&value)
              .ok_or_else(|| {
                anyhow!(
                  "invalid boolean for \
                   {key}: {value}"
                )
              })?;
        }
        | "routes.login" => {
          self.routes.login = value;
        }
        | other => {
          bail!(
            "unknown config key: {other}"
          )
        }
      }
    }

    self.validate()
  }

  pub fn validate(
    &self
  ) -> anyhow::Result<()> {
    if self.api.base_url.trim().is_empty()
    {
      bail!("api.base_url must not be empty");
    }
    if self.listing.page_size == 0 {
      bail!(
        "listing.page_size must be at \
         least 1"
      );
    }
    Ok(())
  }
}

fn parse_bool(raw: &str) -> Option<bool> {
  match raw
    .trim()
    .to_ascii_lowercase()
    .as_str()
  {
    | "on" | "yes" | "true" | "1" => {
      Some(true)
    }
    | "off" | "no" | "false" | "0" => {
      Some(false)
    }
    | _ => None
  }
}
