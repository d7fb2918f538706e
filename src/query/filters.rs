//! Name filtering for table queries
//!
//! One case-insensitive substring pattern against one display field.
//! An empty pattern matches every row.

use crate::record::FieldSource;

/// Field searched when no other is configured
pub const DEFAULT_FILTER_FIELD: &str = "name";

/// Case-insensitive substring filter over a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    field: String,
    pattern: String,
    folded: String,
}

impl NameFilter {
    /// Filter on the default display-name field
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::on_field(DEFAULT_FILTER_FIELD, pattern)
    }

    /// Filter on an explicit field
    pub fn on_field(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        Self {
            field: field.into(),
            folded: pattern.to_lowercase(),
            pattern,
        }
    }

    /// The pattern as entered
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Checks if a row's display field contains the pattern, ignoring case
    pub fn matches<T: FieldSource + ?Sized>(&self, row: &T) -> bool {
        if self.folded.is_empty() {
            return true;
        }

        row.field(&self.field)
            .as_text()
            .to_lowercase()
            .contains(&self.folded)
    }
}
