//! Pagination state over top-level rows

/// Default rows-per-page when none is chosen.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page-size choices offered by the pagination controls.
pub const PAGE_SIZE_CHOICES: [usize; 5] = [5, 10, 20, 50, 100];

/// Current page index and size.
///
/// Pagination counts and slices top-level rows only; expanded descendants
/// ride along with their top-level ancestor, so the number of rendered rows
/// per page varies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    /// Zero-based page index.
    pub page_index: usize,
    page_size: usize,
}

impl PaginationState {
    /// Creates pagination at the first page with the given size.
    ///
    /// A zero size is bumped to one to keep the slicing arithmetic total.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Returns the rows-per-page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Changes the rows-per-page and returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
    }

    /// Number of pages for `top_level_count` rows; zero when empty.
    pub fn page_count(&self, top_level_count: usize) -> usize {
        top_level_count.div_ceil(self.page_size)
    }

    /// Index of the first top-level row on the current page.
    pub fn offset(&self) -> usize {
        self.page_index * self.page_size
    }

    /// Returns `true` if a previous page exists.
    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    /// Returns `true` if a next page exists for `top_level_count` rows.
    pub fn can_next(&self, top_level_count: usize) -> bool {
        self.page_index + 1 < self.page_count(top_level_count)
    }

    /// Moves to the previous page, saturating at the first.
    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Moves to the next page, saturating at the last for
    /// `top_level_count` rows.
    pub fn next_page(&mut self, top_level_count: usize) {
        if self.can_next(top_level_count) {
            self.page_index += 1;
        }
    }

    /// Jumps to the first page.
    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    /// Jumps to the last page for `top_level_count` rows.
    pub fn last_page(&mut self, top_level_count: usize) {
        self.page_index = self.page_count(top_level_count).saturating_sub(1);
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
