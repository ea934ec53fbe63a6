use glossa_shared::{
  CategoryDto,
  LanguageDto,
  TermDto,
  ThemeDto
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;

/// The three classification axes a term carries.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
)]
pub enum Dimension {
  Category,
  Theme,
  Language
}

impl Dimension {
  pub const ALL: [Dimension; 3] = [
    Dimension::Category,
    Dimension::Theme,
    Dimension::Language
  ];

  pub fn label(self) -> &'static str {
    match self {
      | Dimension::Category => {
        "Grammatical category"
      }
      | Dimension::Theme => "Theme",
      | Dimension::Language => "Language"
    }
  }

  pub fn key(self) -> &'static str {
    match self {
      | Dimension::Category => {
        "category"
      }
      | Dimension::Theme => "theme",
      | Dimension::Language => "language"
    }
  }

  /// The value of this dimension on a term.
  pub fn value_of(
    self,
    term: &TermDto
  ) -> &str {
    match self {
      | Dimension::Category => {
        &term.grammatical_category
      }
      | Dimension::Theme => &term.theme,
      | Dimension::Language => {
        &term.language
      }
    }
  }
}

pub trait TaxonomyEntry {
  fn name(&self) -> &str;
  fn is_approved(&self) -> bool;
}

impl TaxonomyEntry for CategoryDto {
  fn name(&self) -> &str {
    &self.name
  }

  fn is_approved(&self) -> bool {
    self.is_approved
  }
}

impl TaxonomyEntry for ThemeDto {
  fn name(&self) -> &str {
    &self.name
  }

  fn is_approved(&self) -> bool {
    self.is_approved
  }
}

impl TaxonomyEntry for LanguageDto {
  fn name(&self) -> &str {
    &self.name
  }

  fn is_approved(&self) -> bool {
    self.is_approved
  }
}

/// Names of the approved entries, in fetch order.
pub fn approved_names<T: TaxonomyEntry>(
  entries: &[T]
) -> Vec<String> {
  entries
    .iter()
    .filter(|entry| entry.is_approved())
    .map(|entry| entry.name().to_string())
    .collect()
}

/// Decodes a collection response, rejecting anything that is not a JSON
/// array instead of failing deep inside serde.
pub fn decode_collection<
  T: DeserializeOwned
>(
  endpoint: &str,
  value: Value
) -> Result<Vec<T>, ApiError> {
  let found = json_kind(&value);
  if !value.is_array() {
    debug!(
      endpoint,
      found, "collection response was not an array"
    );
    return Err(
      ApiError::UnexpectedShape {
        endpoint: endpoint.to_string(),
        found
      }
    );
  }

  serde_json::from_value(value).map_err(
    |err| ApiError::Decode(err.to_string())
  )
}

fn json_kind(
  value: &Value
) -> &'static str {
  match value {
    | Value::Null => "null",
    | Value::Bool(_) => "a boolean",
    | Value::Number(_) => "a number",
    | Value::String(_) => "a string",
    | Value::Array(_) => "an array",
    | Value::Object(_) => "an object"
  }
}
