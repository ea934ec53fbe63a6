use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TermStatus {
  #[default]
  #[serde(alias = "Pending")]
  Pending,
  #[serde(alias = "Approved")]
  Approved,
  #[serde(alias = "Rejected")]
  Rejected,
  /// Any status this client does not know; it never reads one.
  #[serde(other)]
  Unknown
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct TermDto {
  #[serde(alias = "_id")]
  pub id:                   String,
  #[serde(default)]
  pub term:                 String,
  #[serde(default)]
  pub definition:           String,
  #[serde(default)]
  pub translation:          String,
  #[serde(default, alias = "category")]
  pub grammatical_category: String,
  #[serde(default)]
  pub theme:                String,
  #[serde(default)]
  pub language:             String,
  #[serde(default)]
  pub status:               TermStatus
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
  #[serde(alias = "_id")]
  pub id:          String,
  pub name:        String,
  #[serde(default, alias = "approved")]
  pub is_approved: bool
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDto {
  #[serde(alias = "_id")]
  pub id:          String,
  pub name:        String,
  #[serde(default, alias = "approved")]
  pub is_approved: bool
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDto {
  #[serde(alias = "_id")]
  pub id:          String,
  pub name:        String,
  #[serde(default)]
  pub code:        String,
  #[serde(default, alias = "approved")]
  pub is_approved: bool
}

/// Body of a create or update request.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "camelCase")]
pub struct TermPayload {
  pub term:                 String,
  pub definition:           String,
  pub translation:          String,
  pub grammatical_category: String,
  pub theme:                String,
  pub language:             String
}

/// Structured error body returned by the glossary API.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct ApiErrorBody {
  #[serde(default)]
  pub message: Option<String>,
  #[serde(default)]
  pub error:   Option<String>,
  #[serde(default)]
  pub code:    Option<String>
}

impl ApiErrorBody {
  pub fn summary(&self) -> Option<&str> {
    self
      .message
      .as_deref()
      .or(self.error.as_deref())
      .or(self.code.as_deref())
  }
}
