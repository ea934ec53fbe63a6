use percent_encoding::{
  NON_ALPHANUMERIC,
  utf8_percent_encode
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Method {
  Get,
  Post,
  Put
}

impl Method {
  pub fn as_str(self) -> &'static str {
    match self {
      | Method::Get => "GET",
      | Method::Post => "POST",
      | Method::Put => "PUT"
    }
  }
}

/// Every call the clients make against the glossary API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
  ApprovedTerms,
  Term(String),
  Categories,
  Themes,
  Languages,
  CreateTerm,
  UpdateTerm(String)
}

impl Endpoint {
  pub fn method(&self) -> Method {
    match self {
      | Endpoint::CreateTerm => {
        Method::Post
      }
      | Endpoint::UpdateTerm(_) => {
        Method::Put
      }
      | _ => Method::Get
    }
  }

  pub fn path(&self) -> String {
    match self {
      | Endpoint::ApprovedTerms => {
        "/terms/approved".to_string()
      }
      | Endpoint::Term(id)
      | Endpoint::UpdateTerm(id) => {
        format!(
          "/terms/{}",
          encode_segment(id)
        )
      }
      | Endpoint::Categories => {
        "/categories".to_string()
      }
      | Endpoint::Themes => {
        "/themes".to_string()
      }
      | Endpoint::Languages => {
        "/languages".to_string()
      }
      | Endpoint::CreateTerm => {
        "/terms".to_string()
      }
    }
  }

  pub fn url(
    &self,
    base_url: &str
  ) -> String {
    format!(
      "{}{}",
      base_url.trim_end_matches('/'),
      self.path()
    )
  }

  /// Short name used in log fields.
  pub fn label(&self) -> &'static str {
    match self {
      | Endpoint::ApprovedTerms => {
        "approved_terms"
      }
      | Endpoint::Term(_) => "term",
      | Endpoint::Categories => {
        "categories"
      }
      | Endpoint::Themes => "themes",
      | Endpoint::Languages => {
        "languages"
      }
      | Endpoint::CreateTerm => {
        "create_term"
      }
      | Endpoint::UpdateTerm(_) => {
        "update_term"
      }
    }
  }
}

fn encode_segment(value: &str) -> String {
  utf8_percent_encode(
    value,
    NON_ALPHANUMERIC
  )
  .to_string()
}
