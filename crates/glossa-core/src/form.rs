use glossa_shared::{
  CategoryDto,
  LanguageDto,
  TermDto,
  TermPayload,
  ThemeDto
};
use thiserror::Error;
use tracing::{
  debug,
  error,
  info
};

use crate::auth::{
  AuthDisposition,
  handle_fetch_error
};
use crate::choice::OtherChoice;
use crate::endpoints::Endpoint;
use crate::error::ApiError;
use crate::listing::narrow;
use crate::taxonomy::Dimension;
use crate::text::capitalize;

pub const SUBMIT_FAILED: &str =
  "Failed to submit the term. Please \
   try again.";
pub const TERM_LOAD_FAILED: &str =
  "Failed to load the term.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
  Create,
  Edit(String)
}

impl FormMode {
  pub fn from_id(
    id: Option<String>
  ) -> Self {
    match id {
      | Some(id) if !id.is_empty() => {
        FormMode::Edit(id)
      }
      | _ => FormMode::Create
    }
  }

  pub fn is_edit(&self) -> bool {
    matches!(self, FormMode::Edit(_))
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum TextField {
  Term,
  Definition,
  Translation
}

impl TextField {
  pub fn label(self) -> &'static str {
    match self {
      | TextField::Term => "Term",
      | TextField::Definition => {
        "Definition"
      }
      | TextField::Translation => {
        "Translation"
      }
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum FormError {
  #[error(
    "a submission is already in progress"
  )]
  AlreadySubmitting
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub enum SubmitStatus {
  #[default]
  Idle,
  Submitting,
  /// The confirmation dialog is showing.
  Succeeded,
  Failed
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
  Create(TermPayload),
  Update {
    id:      String,
    payload: TermPayload
  }
}

impl SubmitRequest {
  pub fn endpoint(&self) -> Endpoint {
    match self {
      | SubmitRequest::Create(_) => {
        Endpoint::CreateTerm
      }
      | SubmitRequest::Update {
        id,
        ..
      } => Endpoint::UpdateTerm(id.clone())
    }
  }

  pub fn payload(&self) -> &TermPayload {
    match self {
      | SubmitRequest::Create(payload)
      | SubmitRequest::Update {
        payload,
        ..
      } => payload
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
  TermLoaded(Result<TermDto, ApiError>),
  CategoriesLoaded(
    Result<Vec<CategoryDto>, ApiError>
  ),
  ThemesLoaded(
    Result<Vec<ThemeDto>, ApiError>
  ),
  LanguagesLoaded(
    Result<Vec<LanguageDto>, ApiError>
  ),
  TextChanged(TextField, String),
  ChoiceSelected(Dimension, String),
  FreeTextChanged(Dimension, String),
  SubmitFinished(Result<(), ApiError>),
  DismissConfirmation
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum FormEffect {
  None,
  NavigateToListing,
  RedirectToLogin
}

/// State of the create/edit term form.
#[derive(Debug, Clone, PartialEq)]
pub struct TermForm {
  mode:        FormMode,
  term:        String,
  definition:  String,
  translation: String,
  category:    OtherChoice,
  theme:       OtherChoice,
  language:    OtherChoice,
  status:      SubmitStatus,
  error:       Option<String>
}

impl TermForm {
  pub fn new(mode: FormMode) -> Self {
    Self {
      mode,
      term: String::new(),
      definition: String::new(),
      translation: String::new(),
      category: OtherChoice::default(),
      theme: OtherChoice::default(),
      language: OtherChoice::default(),
      status: SubmitStatus::Idle,
      error: None
    }
  }

  pub fn mode(&self) -> &FormMode {
    &self.mode
  }

  pub fn text(
    &self,
    field: TextField
  ) -> &str {
    match field {
      | TextField::Term => &self.term,
      | TextField::Definition => {
        &self.definition
      }
      | TextField::Translation => {
        &self.translation
      }
    }
  }

  pub fn choice(
    &self,
    dimension: Dimension
  ) -> &OtherChoice {
    match dimension {
      | Dimension::Category => {
        &self.category
      }
      | Dimension::Theme => &self.theme,
      | Dimension::Language => {
        &self.language
      }
    }
  }

  pub fn status(&self) -> &SubmitStatus {
    &self.status
  }

  pub fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }

  pub fn is_submitting(&self) -> bool {
    self.status == SubmitStatus::Submitting
  }

  pub fn show_confirmation(&self) -> bool {
    self.status == SubmitStatus::Succeeded
  }

  pub fn apply(
    &mut self,
    event: FormEvent
  ) -> FormEffect {
    match event {
      | FormEvent::TermLoaded(result) => {
        return self.apply_term(result);
      }
      | FormEvent::CategoriesLoaded(
        result
      ) => {
        let names = narrow(
          Dimension::Category,
          result
        );
        self.category.set_names(names);
      }
      | FormEvent::ThemesLoaded(result) => {
        let names =
          narrow(Dimension::Theme, result);
        self.theme.set_names(names);
      }
      | FormEvent::LanguagesLoaded(
        result
      ) => {
        let names = narrow(
          Dimension::Language,
          result
        );
        self.language.set_names(names);
      }
      | FormEvent::TextChanged(
        field,
        raw
      ) => {
        self.set_text(field, &raw);
      }
      | FormEvent::ChoiceSelected(
        dimension,
        value
      ) => {
        self
          .choice_mut(dimension)
          .select(&value);
      }
      | FormEvent::FreeTextChanged(
        dimension,
        raw
      ) => {
        self
          .choice_mut(dimension)
          .set_free_text(&raw);
      }
      | FormEvent::SubmitFinished(
        result
      ) => {
        self.finish_submit(result);
      }
      | FormEvent::DismissConfirmation => {
        if self.show_confirmation() {
          self.status = SubmitStatus::Idle;
          return FormEffect::NavigateToListing;
        }
      }
    }

    FormEffect::None
  }

  /// The payload with every "Other" resolved to its free text. Blank
  /// fields are sent as-is; the service owns validation.
  pub fn build_payload(&self) -> TermPayload {
    TermPayload {
      term:                 self.term.clone(),
      definition:           self
        .definition
        .clone(),
      translation:          self
        .translation
        .clone(),
      grammatical_category: self
        .category
        .effective(),
      theme:                self
        .theme
        .effective(),
      language:             self
        .language
        .effective()
    }
  }

  /// Starts a submission. Only one request may be in flight.
  pub fn begin_submit(
    &mut self
  ) -> Result<SubmitRequest, FormError> {
    if self.is_submitting() {
      return Err(
        FormError::AlreadySubmitting
      );
    }

    let payload = self.build_payload();
    debug!(
      edit = self.mode.is_edit(),
      "submission started"
    );

    self.status = SubmitStatus::Submitting;
    self.error = None;

    Ok(match &self.mode {
      | FormMode::Create => {
        SubmitRequest::Create(payload)
      }
      | FormMode::Edit(id) => {
        SubmitRequest::Update {
          id: id.clone(),
          payload
        }
      }
    })
  }

  fn finish_submit(
    &mut self,
    result: Result<(), ApiError>
  ) {
    match result {
      | Ok(()) => {
        info!(
          edit = self.mode.is_edit(),
          term = %self.term,
          "term submitted"
        );
        self.status =
          SubmitStatus::Succeeded;
        self.error = None;
      }
      | Err(err) => {
        error!(error = %err, "term submission failed");
        self.status = SubmitStatus::Failed;
        self.error =
          Some(SUBMIT_FAILED.to_string());
      }
    }
  }

  fn apply_term(
    &mut self,
    result: Result<TermDto, ApiError>
  ) -> FormEffect {
    match result {
      | Ok(existing) => {
        debug!(id = %existing.id, "prefilling form");
        self.term = existing.term;
        self.definition =
          existing.definition;
        self.translation =
          existing.translation;
        self.category.set_initial(
          &existing.grammatical_category
        );
        self
          .theme
          .set_initial(&existing.theme);
        self
          .language
          .set_initial(&existing.language);
        FormEffect::None
      }
      | Err(err) => {
        match handle_fetch_error(
          "term", &err
        ) {
          | AuthDisposition::RedirectToLogin => {
            FormEffect::RedirectToLogin
          }
          | AuthDisposition::Continue => {
            self.error = Some(
              TERM_LOAD_FAILED.to_string()
            );
            FormEffect::None
          }
        }
      }
    }
  }

  fn set_text(
    &mut self,
    field: TextField,
    raw: &str
  ) {
    match field {
      | TextField::Term => {
        self.term = capitalize(raw);
      }
      | TextField::Definition => {
        self.definition = raw.to_string();
      }
      | TextField::Translation => {
        self.translation = capitalize(raw);
      }
    }
  }

  fn choice_mut(
    &mut self,
    dimension: Dimension
  ) -> &mut OtherChoice {
    match dimension {
      | Dimension::Category => {
        &mut self.category
      }
      | Dimension::Theme => {
        &mut self.theme
      }
      | Dimension::Language => {
        &mut self.language
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use glossa_shared::TermStatus;

  use super::*;
  use crate::choice::OTHER_OPTION;

  fn category(name: &str) -> CategoryDto {
    CategoryDto {
      id:          name.to_lowercase(),
      name:        name.to_string(),
      is_approved: true
    }
  }

  fn filled_form() -> TermForm {
    let mut form =
      TermForm::new(FormMode::Create);
    form.apply(
      FormEvent::CategoriesLoaded(Ok(
        vec![category("Noun")]
      ))
    );
    form.apply(FormEvent::ThemesLoaded(
      Ok(vec![ThemeDto {
        id:          "t".to_string(),
        name:        "Animals".to_string(),
        is_approved: true
      }])
    ));
    form.apply(
      FormEvent::LanguagesLoaded(Ok(
        vec![LanguageDto {
          id:          "l".to_string(),
          name:        "French".to_string(),
          code:        "fr".to_string(),
          is_approved: true
        }]
      ))
    );
    form.apply(FormEvent::TextChanged(
      TextField::Term,
      "cHAT".to_string()
    ));
    form.apply(FormEvent::TextChanged(
      TextField::Definition,
      "animal domestique".to_string()
    ));
    form.apply(FormEvent::TextChanged(
      TextField::Translation,
      "cat".to_string()
    ));
    form
  }

  #[test]
  fn text_fields_capitalize_except_definition()
  {
    let form = filled_form();
    assert_eq!(
      form.text(TextField::Term),
      "Chat"
    );
    assert_eq!(
      form.text(TextField::Translation),
      "Cat"
    );
    assert_eq!(
      form.text(TextField::Definition),
      "animal domestique"
    );
  }

  #[test]
  fn other_category_submits_capitalized_free_text()
  {
    let mut form = filled_form();
    form.apply(FormEvent::ChoiceSelected(
      Dimension::Category,
      OTHER_OPTION.to_string()
    ));
    form.apply(
      FormEvent::FreeTextChanged(
        Dimension::Category,
        "verb".to_string()
      )
    );

    let request = form
      .begin_submit()
      .expect("form is complete");
    assert_eq!(
      request.payload().grammatical_category,
      "Verb"
    );
    assert_eq!(
      request.endpoint(),
      Endpoint::CreateTerm
    );
  }

  #[test]
  fn second_submit_is_gated_while_in_flight()
  {
    let mut form = filled_form();
    form
      .begin_submit()
      .expect("first submit starts");
    assert!(form.is_submitting());
    assert_eq!(
      form.begin_submit(),
      Err(FormError::AlreadySubmitting)
    );
  }

  #[test]
  fn failed_submit_keeps_fields_and_shows_error()
  {
    let mut form = filled_form();
    form
      .begin_submit()
      .expect("submit starts");
    form.apply(FormEvent::SubmitFinished(
      Err(ApiError::Http {
        status: 500,
        body:   None
      })
    ));
    assert_eq!(
      form.error(),
      Some(SUBMIT_FAILED)
    );
    assert_eq!(
      form.text(TextField::Term),
      "Chat"
    );
    assert!(!form.is_submitting());
    assert!(form.begin_submit().is_ok());
  }

  #[test]
  fn dismissing_confirmation_navigates_home()
  {
    let mut form = filled_form();
    form
      .begin_submit()
      .expect("submit starts");
    form.apply(FormEvent::SubmitFinished(
      Ok(())
    ));
    assert!(form.show_confirmation());
    assert_eq!(
      form.apply(
        FormEvent::DismissConfirmation
      ),
      FormEffect::NavigateToListing
    );
    assert_eq!(
      form.apply(
        FormEvent::DismissConfirmation
      ),
      FormEffect::None
    );
  }

  #[test]
  fn blank_fields_do_not_block_submission()
  {
    let mut form =
      TermForm::new(FormMode::Create);
    let request = form
      .begin_submit()
      .expect("nothing is required locally");
    assert_eq!(
      request,
      SubmitRequest::Create(
        TermPayload::default()
      )
    );
    assert_eq!(form.error(), None);
    assert!(form.is_submitting());
  }

  #[test]
  fn edit_mode_prefills_and_updates_by_id()
  {
    let mut form = TermForm::new(
      FormMode::from_id(Some(
        "42".to_string()
      ))
    );
    form.apply(FormEvent::TermLoaded(Ok(
      TermDto {
        id:                   "42"
          .to_string(),
        term:                 "Chien"
          .to_string(),
        definition:           "Animal"
          .to_string(),
        translation:          "Dog"
          .to_string(),
        grammatical_category: "Noun"
          .to_string(),
        theme:                "Animals"
          .to_string(),
        language:             "French"
          .to_string(),
        status:
          TermStatus::Approved
      }
    )));
    form.apply(
      FormEvent::CategoriesLoaded(Ok(
        vec![
          category("Verb"),
          category("Noun"),
        ]
      ))
    );

    assert_eq!(
      form
        .choice(Dimension::Category)
        .selected(),
      "Noun"
    );
    let request = form
      .begin_submit()
      .expect("prefilled form is complete");
    assert_eq!(
      request.endpoint(),
      Endpoint::UpdateTerm(
        "42".to_string()
      )
    );
  }

  #[test]
  fn term_load_auth_failure_redirects() {
    let mut form = TermForm::new(
      FormMode::Edit("1".to_string())
    );
    let effect = form.apply(
      FormEvent::TermLoaded(Err(
        ApiError::Http {
          status: 403,
          body:   None
        }
      ))
    );
    assert_eq!(
      effect,
      FormEffect::RedirectToLogin
    );

    let effect = form.apply(
      FormEvent::TermLoaded(Err(
        ApiError::Network(
          "reset".to_string()
        )
      ))
    );
    assert_eq!(effect, FormEffect::None);
    assert_eq!(
      form.error(),
      Some(TERM_LOAD_FAILED)
    );
  }
}
