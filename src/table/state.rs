//! Table controller state
//!
//! Owned by the view. The query engine never holds any of this; the view
//! passes it in on every rebuild.

use crate::config::RosterConfig;
use crate::query::{NameFilter, PageSize, PageWindow, SortSpec, DEFAULT_FILTER_FIELD};
use crate::record::RecordId;

/// Sort, filter, page window and row selection for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    sort: SortSpec,
    window: PageWindow,
    filter: NameFilter,
    selected: Vec<RecordId>,
    observed_len: Option<usize>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sort: SortSpec::default(),
            window: PageWindow::default(),
            filter: NameFilter::on_field(DEFAULT_FILTER_FIELD, ""),
            selected: Vec::new(),
            observed_len: None,
        }
    }
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state seeded from configuration
    pub fn from_config(config: &RosterConfig) -> Self {
        Self {
            sort: config.sort_spec(),
            window: PageWindow::first(config.default_page_size),
            filter: NameFilter::on_field(config.filter_field.clone(), ""),
            ..Self::default()
        }
    }

    /// Replaces the sort spec (builder style)
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    /// Replaces the page window (builder style)
    pub fn with_window(mut self, window: PageWindow) -> Self {
        self.window = window;
        self
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn filter(&self) -> &NameFilter {
        &self.filter
    }

    /// Header click on `field`: ascending, or descending if it already was
    pub fn on_sort(&mut self, field: &str) {
        self.sort = self.sort.toggled(field);
    }

    /// New filter text; always returns to the first page
    pub fn set_filter(&mut self, text: impl Into<String>) {
        let field = self.filter.field().to_string();
        self.filter = NameFilter::on_field(field, text);
        self.reset_page();
    }

    pub fn on_change_page(&mut self, page: usize) {
        self.window.page = page;
    }

    /// New rows-per-page; always returns to the first page
    pub fn on_change_rows_per_page(&mut self, size: PageSize) {
        self.window = PageWindow::first(size);
    }

    pub fn reset_page(&mut self) {
        self.window.page = 0;
    }

    /// Records the collection size, returning to the first page when it
    /// differs from the last observed size. Returns true on reset.
    pub fn sync_collection_len(&mut self, len: usize) -> bool {
        let changed = matches!(self.observed_len, Some(prev) if prev != len);
        self.observed_len = Some(len);
        if changed {
            self.reset_page();
        }
        changed
    }

    /// Toggles one row in the selection
    pub fn on_select_row(&mut self, id: &RecordId) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.clone());
        }
    }

    /// Select-all checkbox: `checked` selects exactly `ids`, else clears
    pub fn on_select_all_rows(&mut self, checked: bool, ids: impl IntoIterator<Item = RecordId>) {
        if checked {
            self.selected = ids.into_iter().collect();
        } else {
            self.selected.clear();
        }
    }

    pub fn selected(&self) -> &[RecordId] {
        &self.selected
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selected.contains(id)
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}
