//! Page windows over query results

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected rows-per-page value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid page size {0}: expected one of 5, 10, 25")]
pub struct InvalidPageSize(pub usize);

/// Rows per page. Only the sizes offered by the table are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    TwentyFive,
}

impl PageSize {
    /// Every selectable size, smallest first
    pub const OPTIONS: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::TwentyFive];

    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::OPTIONS
            .into_iter()
            .find(|size| size.get() == n)
            .ok_or(InvalidPageSize(n))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Current page index plus page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageWindow {
    pub page: usize,
    pub size: PageSize,
}

impl PageWindow {
    pub fn new(page: usize, size: PageSize) -> Self {
        Self { page, size }
    }

    /// First page at the given size
    pub fn first(size: PageSize) -> Self {
        Self::new(0, size)
    }

    /// Index of the first row on this page
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size.get())
    }

    /// Rows visible on this page; empty past the end
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = self.offset().min(rows.len());
        let end = start.saturating_add(self.size.get()).min(rows.len());
        &rows[start..end]
    }

    /// Number of pages needed for `total` rows (zero rows need zero pages)
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.size.get())
    }

    /// Placeholder rows for this page, see [`empty_rows`]
    pub fn empty_rows(&self, total: usize) -> usize {
        empty_rows(self.page, self.size.get(), total)
    }
}

/// Number of placeholder rows that keep the final page visually full.
///
/// Zero for every full page and for pages past the end. On the final,
/// partially filled page: `page_size - items_on_page`.
pub fn empty_rows(page_index: usize, page_size: usize, total_count: usize) -> usize {
    let start = page_index.saturating_mul(page_size);
    if page_size == 0 || start >= total_count {
        return 0;
    }

    let on_page = (total_count - start).min(page_size);
    page_size - on_page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rows_partial_last_page() {
        assert_eq!(empty_rows(0, 5, 7), 0);
        assert_eq!(empty_rows(1, 5, 7), 3);
    }

    #[test]
    fn test_empty_rows_exact_fit() {
        assert_eq!(empty_rows(1, 5, 10), 0);
    }

    #[test]
    fn test_empty_rows_empty_collection() {
        assert_eq!(empty_rows(0, 5, 0), 0);
    }

    #[test]
    fn test_empty_rows_past_end() {
        assert_eq!(empty_rows(4, 5, 7), 0);
        assert_eq!(empty_rows(usize::MAX, 25, 3), 0);
    }

    #[test]
    fn test_empty_rows_bounded() {
        for total in 0..40 {
            for page in 0..10 {
                for size in [5, 10, 25] {
                    assert!(empty_rows(page, size, total) < size);
                }
            }
        }
    }

    #[test]
    fn test_page_size_parse() {
        assert_eq!(PageSize::try_from(10), Ok(PageSize::Ten));
        assert_eq!(PageSize::try_from(7), Err(InvalidPageSize(7)));
    }

    #[test]
    fn test_page_size_serde() {
        let size: PageSize = serde_json::from_str("25").unwrap();
        assert_eq!(size, PageSize::TwentyFive);
        assert!(serde_json::from_str::<PageSize>("3").is_err());
        assert_eq!(serde_json::to_string(&PageSize::Ten).unwrap(), "10");
    }

    #[test]
    fn test_slice() {
        let rows: Vec<u32> = (0..7).collect();

        assert_eq!(PageWindow::new(0, PageSize::Five).slice(&rows), &[0, 1, 2, 3, 4]);
        assert_eq!(PageWindow::new(1, PageSize::Five).slice(&rows), &[5, 6]);
        assert!(PageWindow::new(2, PageSize::Five).slice(&rows).is_empty());
    }

    #[test]
    fn test_page_count() {
        let window = PageWindow::first(PageSize::Five);
        assert_eq!(window.page_count(0), 0);
        assert_eq!(window.page_count(5), 1);
        assert_eq!(window.page_count(6), 2);
    }
}
