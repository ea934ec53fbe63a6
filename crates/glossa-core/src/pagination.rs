pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Client-side pager over an already filtered list. Pages are 1-indexed.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct Pager {
  page:      usize,
  page_size: usize
}

impl Default for Pager {
  fn default() -> Self {
    Self::new(DEFAULT_PAGE_SIZE)
  }
}

impl Pager {
  /// A zero page size is bumped to one.
  pub fn new(page_size: usize) -> Self {
    Self {
      page:      1,
      page_size: page_size.max(1)
    }
  }

  pub fn page(&self) -> usize {
    self.page
  }

  pub fn page_size(&self) -> usize {
    self.page_size
  }

  /// Jumps to `page` without clamping; an out-of-range page simply shows
  /// nothing. Page 0 is treated as page 1.
  pub fn go_to(&mut self, page: usize) {
    self.page = page.max(1);
  }

  pub fn reset(&mut self) {
    self.page = 1;
  }

  pub fn next(&mut self, total: usize) {
    let last =
      page_count(total, self.page_size);
    if self.page < last {
      self.page += 1;
    }
  }

  pub fn prev(&mut self) {
    self.page =
      self.page.saturating_sub(1).max(1);
  }

  pub fn slice<'a, T>(
    &self,
    items: &'a [T]
  ) -> &'a [T] {
    page_slice(
      items,
      self.page,
      self.page_size
    )
  }
}

/// Items `[size * (page - 1), size * page)` of `items`, empty when the page
/// lies past the end.
pub fn page_slice<T>(
  items: &[T],
  page: usize,
  page_size: usize
) -> &[T] {
  if page == 0 || page_size == 0 {
    return &[];
  }

  let start = (page - 1)
    .saturating_mul(page_size);
  if start >= items.len() {
    return &[];
  }
  let end = start
    .saturating_add(page_size)
    .min(items.len());
  &items[start..end]
}

/// Number of pages needed for `total` items; never less than one.
pub fn page_count(
  total: usize,
  page_size: usize
) -> usize {
  if page_size == 0 {
    return 1;
  }
  total.div_ceil(page_size).max(1)
}
