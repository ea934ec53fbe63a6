use glossa_shared::TermDto;
use tracing::trace;

use crate::taxonomy::Dimension;
use crate::text::contains_folded;

/// Selected filter values plus the free-text search. `None` on a dimension
/// means every value passes.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct TermFilter {
  category: Option<String>,
  theme:    Option<String>,
  language: Option<String>,
  search:   String
}

impl TermFilter {
  pub fn selected(
    &self,
    dimension: Dimension
  ) -> Option<&str> {
    self.slot(dimension).as_deref()
  }

  pub fn search(&self) -> &str {
    &self.search
  }

  /// Selects `value` on `dimension`, or clears the dimension when `value`
  /// is already the selection. An empty value clears as well.
  pub fn toggle(
    &mut self,
    dimension: Dimension,
    value: &str
  ) {
    let slot = self.slot_mut(dimension);
    let next = if value.is_empty()
      || slot.as_deref() == Some(value)
    {
      None
    } else {
      Some(value.to_string())
    };
    trace!(
      dimension = dimension.key(),
      ?next,
      "filter toggled"
    );
    *slot = next;
  }

  pub fn clear(
    &mut self,
    dimension: Dimension
  ) {
    *self.slot_mut(dimension) = None;
  }

  pub fn set_search(
    &mut self,
    raw: impl Into<String>
  ) {
    self.search = raw.into();
  }

  pub fn is_empty(&self) -> bool {
    self.search.is_empty()
      && Dimension::ALL
        .iter()
        .all(|dim| self.slot(*dim).is_none())
  }

  pub fn matches(
    &self,
    term: &TermDto
  ) -> bool {
    let folded =
      self.search.to_lowercase();
    self.matches_folded(term, &folded)
  }

  /// The subset of `terms` passing every condition, in source order.
  pub fn apply(
    &self,
    terms: &[TermDto]
  ) -> Vec<TermDto> {
    let folded =
      self.search.to_lowercase();
    terms
      .iter()
      .filter(|term| {
        self.matches_folded(term, &folded)
      })
      .cloned()
      .collect()
  }

  fn matches_folded(
    &self,
    term: &TermDto,
    folded_search: &str
  ) -> bool {
    let dimensions_match =
      Dimension::ALL.iter().all(|dim| {
        match self.slot(*dim) {
          | Some(selected) => {
            dim.value_of(term) == selected
          }
          | None => true
        }
      });
    if !dimensions_match {
      return false;
    }

    folded_search.is_empty()
      || contains_folded(
        &term.term,
        folded_search
      )
      || contains_folded(
        &term.definition,
        folded_search
      )
  }

  fn slot(
    &self,
    dimension: Dimension
  ) -> &Option<String> {
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

  fn slot_mut(
    &mut self,
    dimension: Dimension
  ) -> &mut Option<String> {
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
