//! List query subsystem for roster
//!
//! Turns an unordered collection into the ordered, filtered view a table
//! shows, plus the page window over it.
//!
//! # Execution Flow (strict order)
//!
//! 1. Stable sort by the active `SortSpec`
//! 2. Keep rows whose display-name field contains the filter text
//! 3. Slice the page window
//! 4. Pad the final page with placeholder rows
//!
//! # Guarantees
//!
//! - Deterministic: ties keep input order
//! - Total: no error conditions, missing fields compare as ""
//! - Pure: input rows are only borrowed

mod engine;
mod filters;
mod pagination;
mod sorter;

pub use engine::ListQueryEngine;
pub use filters::{NameFilter, DEFAULT_FILTER_FIELD};
pub use pagination::{empty_rows, InvalidPageSize, PageSize, PageWindow};
pub use sorter::{compare_fields, get_comparator, SortDirection, SortSpec, DEFAULT_ORDER_BY};
