//! Rendered table view
//!
//! Everything a renderer needs for one frame of the table: the visible
//! rows plus the counts that drive pagination and the "no match" row.

use serde::Serialize;

use crate::query::{ListQueryEngine, PageSize, SortSpec};
use crate::record::FieldSource;

use super::state::TableState;

/// One page of a sorted, filtered table
#[derive(Debug, Clone, Serialize)]
pub struct TableView<'a, T> {
    /// Rows on the current page, in display order
    pub rows: Vec<&'a T>,
    /// Rows in the collection before filtering
    pub total_count: usize,
    /// Rows that passed the filter
    pub filtered_count: usize,
    pub page: usize,
    pub page_size: PageSize,
    pub page_count: usize,
    /// Placeholder rows that pad the final page
    pub empty_rows: usize,
    /// Filter is set and nothing matched
    pub not_found: bool,
    pub sort: SortSpec,
    pub filter: String,
}

impl<'a, T: FieldSource> TableView<'a, T> {
    /// Runs the query for `state` over `records` and cuts its page
    pub fn build(records: &'a [T], state: &TableState) -> Self {
        let filtered =
            ListQueryEngine::filter_and_sort_by(records, state.filter(), state.sort().comparator());
        let window = state.window();
        let filtered_count = filtered.len();

        Self {
            rows: window.slice(&filtered).to_vec(),
            total_count: records.len(),
            filtered_count,
            page: window.page,
            page_size: window.size,
            page_count: window.page_count(filtered_count),
            empty_rows: window.empty_rows(filtered_count),
            not_found: filtered_count == 0 && !state.filter().is_empty(),
            sort: state.sort().clone(),
            filter: state.filter().pattern().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
