//! Filter-then-page query engine
//!
//! Execution order:
//! 1. Collect references to every input row (input is never mutated)
//! 2. Stable sort by the comparator
//! 3. Retain rows matching the name filter, keeping sorted order
//!
//! The engine is stateless and total: every (rows, filter, comparator)
//! triple produces a result, including empty rows and an empty filter.

use std::cmp::Ordering;

use super::filters::NameFilter;
use crate::record::FieldSource;

/// Stateless filter and sort over in-memory rows
pub struct ListQueryEngine;

impl ListQueryEngine {
    /// Sorts `records` by `comparator`, then keeps rows whose `name` field
    /// contains `filter_name` (case-insensitive).
    pub fn filter_and_sort<'a, T, C>(
        records: &'a [T],
        filter_name: &str,
        comparator: C,
    ) -> Vec<&'a T>
    where
        T: FieldSource,
        C: Fn(&T, &T) -> Ordering,
    {
        Self::filter_and_sort_by(records, &NameFilter::new(filter_name), comparator)
    }

    /// Same as [`filter_and_sort`](Self::filter_and_sort) with an explicit
    /// filter, which may target a field other than `name`.
    pub fn filter_and_sort_by<'a, T, C>(
        records: &'a [T],
        filter: &NameFilter,
        comparator: C,
    ) -> Vec<&'a T>
    where
        T: FieldSource,
        C: Fn(&T, &T) -> Ordering,
    {
        let mut rows: Vec<&'a T> = records.iter().collect();

        // slice::sort_by is stable; ties keep input order
        rows.sort_by(|a, b| comparator(*a, *b));

        if !filter.is_empty() {
            rows.retain(|row| filter.matches(*row));
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{get_comparator, SortDirection};
    use serde_json::{json, Value};

    fn names(rows: &[&Value]) -> Vec<String> {
        rows.iter()
            .map(|r| r["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<Value> = Vec::new();
        let out = ListQueryEngine::filter_and_sort(
            &rows,
            "abc",
            get_comparator::<Value>(SortDirection::Asc, "name"),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_filter_sorts_everything() {
        let rows = vec![json!({"name": "Zoe"}), json!({"name": "Amy"}), json!({"name": "Bob"})];
        let out = ListQueryEngine::filter_and_sort(
            &rows,
            "",
            get_comparator::<Value>(SortDirection::Asc, "name"),
        );
        assert_eq!(names(&out), vec!["Amy", "Bob", "Zoe"]);
    }

    #[test]
    fn test_filter_keeps_sorted_order() {
        let rows = vec![
            json!({"name": "Jonas"}),
            json!({"name": "Ann"}),
            json!({"name": "Bob"}),
            json!({"name": "Dana"}),
        ];
        let out = ListQueryEngine::filter_and_sort(
            &rows,
            "N",
            get_comparator::<Value>(SortDirection::Desc, "name"),
        );
        assert_eq!(names(&out), vec!["Jonas", "Dana", "Ann"]);
    }

    #[test]
    fn test_input_untouched() {
        let rows = vec![json!({"name": "b"}), json!({"name": "a"})];
        let before = rows.clone();

        let _ = ListQueryEngine::filter_and_sort(
            &rows,
            "",
            get_comparator::<Value>(SortDirection::Asc, "name"),
        );

        assert_eq!(rows, before);
    }

    #[test]
    fn test_filter_on_other_field() {
        let rows = vec![
            json!({"name": "Amy", "company": "Globex"}),
            json!({"name": "Bob", "company": "Acme"}),
        ];
        let filter = NameFilter::on_field("company", "ACM");
        let out = ListQueryEngine::filter_and_sort_by(
            &rows,
            &filter,
            get_comparator::<Value>(SortDirection::Asc, "name"),
        );
        assert_eq!(names(&out), vec!["Bob"]);
    }
}
