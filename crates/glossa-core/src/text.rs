/// Uppercases the first character and lowercases the rest.
pub fn capitalize(raw: &str) -> String {
  let mut chars = raw.chars();
  let Some(first) = chars.next() else {
    return String::new();
  };

  first
    .to_uppercase()
    .chain(chars.flat_map(char::to_lowercase))
    .collect()
}

/// Case-insensitive substring test.
pub fn contains_folded(
  haystack: &str,
  folded_needle: &str
) -> bool {
  haystack
    .to_lowercase()
    .contains(folded_needle)
}
