use tracing::debug;

use crate::text::capitalize;

/// Synthetic option that swaps a dropdown for a free-text input.
pub const OTHER_OPTION: &str = "Other";

/// A dropdown backed by a fetched taxonomy with an "Other" escape hatch.
///
/// The first fetched name becomes the default only while nothing is
/// selected, so an initial value supplied in edit mode always wins. An
/// initial value the taxonomy does not know is kept as free text behind
/// "Other".
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct OtherChoice {
  names:     Vec<String>,
  selected:  String,
  free_text: String,
  loaded:    bool
}

impl OtherChoice {
  /// Fetched names followed by the synthetic "Other".
  pub fn options(&self) -> Vec<String> {
    self
      .names
      .iter()
      .cloned()
      .chain(std::iter::once(
        OTHER_OPTION.to_string()
      ))
      .collect()
  }

  pub fn selected(&self) -> &str {
    &self.selected
  }

  pub fn free_text(&self) -> &str {
    &self.free_text
  }

  pub fn is_other(&self) -> bool {
    self.selected == OTHER_OPTION
  }

  pub fn set_names(
    &mut self,
    names: Vec<String>
  ) {
    self.names = names
      .into_iter()
      .filter(|name| name != OTHER_OPTION)
      .collect();
    self.loaded = true;

    if self.selected.is_empty() {
      if let Some(first) =
        self.names.first()
      {
        debug!(default = %first, "defaulting to first option");
        self.selected = first.clone();
      }
    } else {
      self.reconcile();
    }
  }

  pub fn set_initial(
    &mut self,
    value: &str
  ) {
    self.selected = value.to_string();
    self.free_text.clear();
    self.reconcile();
  }

  pub fn select(&mut self, value: &str) {
    self.selected = value.to_string();
  }

  /// Stores the free-text value, capitalized.
  pub fn set_free_text(
    &mut self,
    raw: &str
  ) {
    self.free_text = capitalize(raw);
  }

  /// The value submitted for this field.
  pub fn effective(&self) -> String {
    if self.is_other() {
      self.free_text.clone()
    } else {
      self.selected.clone()
    }
  }

  fn reconcile(&mut self) {
    if !self.loaded
      || self.selected.is_empty()
      || self.is_other()
      || self.names.contains(&self.selected)
    {
      return;
    }

    debug!(
      value = %self.selected,
      "initial value not offered; \
       switching to free text"
    );
    self.free_text =
      std::mem::take(&mut self.selected);
    self.selected =
      OTHER_OPTION.to_string();
  }
}
