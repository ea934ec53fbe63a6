use glossa_shared::{
  CategoryDto,
  LanguageDto,
  TermDto,
  ThemeDto
};
use tracing::{
  debug,
  info,
  warn
};

use crate::auth::{
  AuthDisposition,
  handle_fetch_error
};
use crate::config::ListingConfig;
use crate::error::ApiError;
use crate::filter::TermFilter;
use crate::pagination::{
  Pager,
  page_count
};
use crate::taxonomy::{
  Dimension,
  TaxonomyEntry,
  approved_names
};

pub const TERMS_LOAD_FAILED: &str =
  "Failed to load terms.";

/// Everything that can happen to the listing view. Fetch results arrive
/// independently and in any order.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingEvent {
  TermsLoaded(
    Result<Vec<TermDto>, ApiError>
  ),
  CategoriesLoaded(
    Result<Vec<CategoryDto>, ApiError>
  ),
  ThemesLoaded(
    Result<Vec<ThemeDto>, ApiError>
  ),
  LanguagesLoaded(
    Result<Vec<LanguageDto>, ApiError>
  ),
  Toggle(Dimension, String),
  Search(String),
  GoToPage(usize),
  NextPage,
  PrevPage
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ListingEffect {
  None,
  RedirectToLogin
}

/// One rendered page of the filtered list.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
  pub items:      Vec<TermDto>,
  pub page:       usize,
  pub page_count: usize,
  pub total:      usize
}

/// How many terms each option of one dimension would show, given the
/// search and the selections on the other dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCounts {
  pub all:     usize,
  pub options: Vec<(String, usize)>
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
  terms:                Vec<TermDto>,
  categories:           Vec<String>,
  themes:               Vec<String>,
  languages:            Vec<String>,
  filter:               TermFilter,
  pager:                Pager,
  reset_page_on_filter: bool,
  load_error:           Option<String>
}

impl Default for ListingState {
  fn default() -> Self {
    Self::new(&ListingConfig::default())
  }
}

impl ListingState {
  pub fn new(
    cfg: &ListingConfig
  ) -> Self {
    Self {
      terms:                Vec::new(),
      categories:           Vec::new(),
      themes:               Vec::new(),
      languages:            Vec::new(),
      filter:               TermFilter::default(),
      pager:                Pager::new(cfg.page_size),
      reset_page_on_filter: cfg
        .reset_page_on_filter,
      load_error:           None
    }
  }

  pub fn apply(
    &mut self,
    event: ListingEvent
  ) -> ListingEffect {
    match event {
      | ListingEvent::TermsLoaded(
        result
      ) => {
        return self.apply_terms(result);
      }
      | ListingEvent::CategoriesLoaded(
        result
      ) => {
        self.categories = narrow(
          Dimension::Category,
          result
        );
      }
      | ListingEvent::ThemesLoaded(
        result
      ) => {
        self.themes =
          narrow(Dimension::Theme, result);
      }
      | ListingEvent::LanguagesLoaded(
        result
      ) => {
        self.languages = narrow(
          Dimension::Language,
          result
        );
      }
      | ListingEvent::Toggle(
        dimension,
        value
      ) => {
        self.filter.toggle(dimension, &value);
        self.after_filter_change();
      }
      | ListingEvent::Search(raw) => {
        self.filter.set_search(raw);
        self.after_filter_change();
      }
      | ListingEvent::GoToPage(page) => {
        self.pager.go_to(page);
      }
      | ListingEvent::NextPage => {
        let total = self.filtered().len();
        self.pager.next(total);
      }
      | ListingEvent::PrevPage => {
        self.pager.prev();
      }
    }

    ListingEffect::None
  }

  pub fn terms(&self) -> &[TermDto] {
    &self.terms
  }

  pub fn filter(&self) -> &TermFilter {
    &self.filter
  }

  pub fn page(&self) -> usize {
    self.pager.page()
  }

  pub fn load_error(
    &self
  ) -> Option<&str> {
    self.load_error.as_deref()
  }

  /// Approved option names offered for `dimension`.
  pub fn options(
    &self,
    dimension: Dimension
  ) -> &[String] {
    match dimension {
      | Dimension::Category => {
        &self.categories
      }
      | Dimension::Theme => &self.themes,
      | Dimension::Language => {
        &self.languages
      }
    }
  }

  pub fn facet_counts(
    &self,
    dimension: Dimension
  ) -> FacetCounts {
    let mut others = self.filter.clone();
    others.clear(dimension);
    let candidates: Vec<&TermDto> = self
      .terms
      .iter()
      .filter(|term| others.matches(term))
      .collect();

    let options = self
      .options(dimension)
      .iter()
      .map(|name| {
        let count = candidates
          .iter()
          .filter(|term| {
            dimension.value_of(term) == name.as_str()
          })
          .count();
        (name.clone(), count)
      })
      .collect();

    FacetCounts {
      all: candidates.len(),
      options
    }
  }

  /// Recomputed from scratch on every call.
  pub fn filtered(&self) -> Vec<TermDto> {
    self.filter.apply(&self.terms)
  }

  pub fn page_view(&self) -> PageView {
    let filtered = self.filtered();
    PageView {
      items:      self
        .pager
        .slice(&filtered)
        .to_vec(),
      page:       self.pager.page(),
      page_count: page_count(
        filtered.len(),
        self.pager.page_size()
      ),
      total:      filtered.len()
    }
  }

  fn apply_terms(
    &mut self,
    result: Result<Vec<TermDto>, ApiError>
  ) -> ListingEffect {
    match result {
      | Ok(terms) => {
        info!(
          count = terms.len(),
          "loaded approved terms"
        );
        self.terms = terms;
        self.load_error = None;
        ListingEffect::None
      }
      | Err(err) => {
        match handle_fetch_error(
          "approved_terms",
          &err
        ) {
          | AuthDisposition::RedirectToLogin => {
            ListingEffect::RedirectToLogin
          }
          | AuthDisposition::Continue => {
            self.load_error = Some(
              TERMS_LOAD_FAILED.to_string()
            );
            ListingEffect::None
          }
        }
      }
    }
  }

  fn after_filter_change(&mut self) {
    if self.reset_page_on_filter {
      self.pager.reset();
    }
    debug!(
      page = self.pager.page(),
      "filter changed"
    );
  }
}

/// Approved names of a taxonomy fetch; a failed fetch degrades to no
/// options for that dimension.
pub(crate) fn narrow<T: TaxonomyEntry>(
  dimension: Dimension,
  result: Result<Vec<T>, ApiError>
) -> Vec<String> {
  match result {
    | Ok(entries) => {
      let names = approved_names(&entries);
      debug!(
        dimension = dimension.key(),
        fetched = entries.len(),
        approved = names.len(),
        "loaded taxonomy"
      );
      names
    }
    | Err(err) => {
      warn!(
        dimension = dimension.key(),
        error = %err,
        "taxonomy fetch failed; leaving \
         options empty"
      );
      Vec::new()
    }
  }
}

#[cfg(test)]
mod tests {
  use glossa_shared::TermStatus;

  use super::*;

  fn numbered_terms(
    count: usize
  ) -> Vec<TermDto> {
    (0..count)
      .map(|n| TermDto {
        id:                   n.to_string(),
        term:                 format!(
          "Term {n}"
        ),
        definition:           String::new(),
        translation:          String::new(),
        grammatical_category: if n % 2
          == 0
        {
          "Noun".to_string()
        } else {
          "Verb".to_string()
        },
        theme:                String::new(),
        language:             String::new(),
        status:
          TermStatus::Approved
      })
      .collect()
  }

  #[test]
  fn auth_failure_on_terms_requests_login()
  {
    let mut state =
      ListingState::default();
    let effect = state.apply(
      ListingEvent::TermsLoaded(Err(
        ApiError::Http {
          status: 401,
          body:   None
        }
      ))
    );
    assert_eq!(
      effect,
      ListingEffect::RedirectToLogin
    );
  }

  #[test]
  fn other_term_failure_sets_load_error()
  {
    let mut state =
      ListingState::default();
    let effect = state.apply(
      ListingEvent::TermsLoaded(Err(
        ApiError::Network(
          "offline".to_string()
        )
      ))
    );
    assert_eq!(effect, ListingEffect::None);
    assert_eq!(
      state.load_error(),
      Some(TERMS_LOAD_FAILED)
    );
    assert!(state.terms().is_empty());
  }

  #[test]
  fn taxonomy_failure_leaves_dimension_empty()
  {
    let mut state =
      ListingState::default();
    state.apply(
      ListingEvent::ThemesLoaded(Err(
        ApiError::Http {
          status: 500,
          body:   None
        }
      ))
    );
    assert!(
      state
        .options(Dimension::Theme)
        .is_empty()
    );
  }

  #[test]
  fn filter_change_keeps_page_by_default()
  {
    let mut state =
      ListingState::default();
    state.apply(ListingEvent::TermsLoaded(
      Ok(numbered_terms(30))
    ));
    state.apply(ListingEvent::NextPage);
    state.apply(ListingEvent::NextPage);
    assert_eq!(state.page(), 3);

    state.apply(ListingEvent::Toggle(
      Dimension::Category,
      "Noun".to_string()
    ));
    let view = state.page_view();
    assert_eq!(view.page, 3);
    assert_eq!(view.total, 15);
    assert!(view.items.is_empty());
  }

  #[test]
  fn reset_page_on_filter_goes_back_to_first_page()
  {
    let mut state =
      ListingState::new(&ListingConfig {
        page_size:            10,
        reset_page_on_filter: true
      });
    state.apply(ListingEvent::TermsLoaded(
      Ok(numbered_terms(30))
    ));
    state.apply(ListingEvent::GoToPage(3));
    state.apply(ListingEvent::Search(
      "term 1".to_string()
    ));
    assert_eq!(state.page(), 1);
  }

  #[test]
  fn next_page_is_bounded_by_filtered_count()
  {
    let mut state =
      ListingState::default();
    state.apply(ListingEvent::TermsLoaded(
      Ok(numbered_terms(12))
    ));
    for _ in 0..5 {
      state.apply(ListingEvent::NextPage);
    }
    let view = state.page_view();
    assert_eq!(view.page, 2);
    assert_eq!(view.page_count, 2);
    assert_eq!(view.items.len(), 2);
  }

  #[test]
  fn facet_counts_ignore_own_selection()
  {
    let mut state =
      ListingState::default();
    state.apply(ListingEvent::TermsLoaded(
      Ok(numbered_terms(5))
    ));
    state.apply(
      ListingEvent::CategoriesLoaded(Ok(
        ["Noun", "Verb", "Adjective"]
          .into_iter()
          .map(|name| CategoryDto {
            id:          name.to_lowercase(),
            name:        name.to_string(),
            is_approved: true
          })
          .collect()
      ))
    );
    state.apply(ListingEvent::Toggle(
      Dimension::Category,
      "Noun".to_string()
    ));

    let counts = state
      .facet_counts(Dimension::Category);
    assert_eq!(counts.all, 5);
    assert_eq!(
      counts.options,
      vec![
        ("Noun".to_string(), 3),
        ("Verb".to_string(), 2),
        ("Adjective".to_string(), 0)
      ]
    );

    state.apply(ListingEvent::Search(
      "term 4".to_string()
    ));
    let counts = state
      .facet_counts(Dimension::Category);
    assert_eq!(counts.all, 1);
    assert_eq!(counts.options[0].1, 1);
    assert_eq!(counts.options[1].1, 0);
  }
}
