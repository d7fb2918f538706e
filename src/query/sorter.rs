//! Sort specifications and comparators
//!
//! Comparators are total and deterministic. Equal keys compare `Equal`;
//! callers rely on a stable sort to keep input order for ties.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::{FieldRef, FieldSource};

/// Field used for ordering when nothing else is chosen
pub const DEFAULT_ORDER_BY: &str = "name";

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Applies this direction to an ascending ordering
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Sort specification: field plus direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to sort by
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Returns the spec after the user picks `field` as the sort column.
    ///
    /// Descending only when `field` was already sorted ascending; any other
    /// choice starts ascending on `field`.
    pub fn toggled(&self, field: &str) -> Self {
        if self.field == field && self.direction == SortDirection::Asc {
            Self::desc(field)
        } else {
            Self::asc(field)
        }
    }

    /// Comparator for this spec
    pub fn comparator<T: FieldSource + ?Sized>(&self) -> impl Fn(&T, &T) -> Ordering {
        get_comparator(self.direction, self.field.clone())
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::asc(DEFAULT_ORDER_BY)
    }
}

/// Builds a comparator over the named field.
///
/// Strings compare lexicographically, numbers numerically, flags with
/// `false < true`. Missing and null fields compare as the empty string.
/// Descending reverses the ascending result.
pub fn get_comparator<T: FieldSource + ?Sized>(
    order: SortDirection,
    order_by: impl Into<String>,
) -> impl Fn(&T, &T) -> Ordering {
    let field = order_by.into();
    move |a: &T, b: &T| order.apply(compare_fields(a.field(&field), b.field(&field)))
}

/// Compares two field values in ascending order.
///
/// Ordering rules:
/// - flag < number < text across kinds
/// - missing is treated as `Text("")`
/// - for the same kind, natural ordering; numbers use IEEE total order, so
///   NaN sorts after every other number
pub fn compare_fields(a: FieldRef<'_>, b: FieldRef<'_>) -> Ordering {
    let a = normalize(a);
    let b = normalize(b);

    let kind = |v: &FieldRef<'_>| -> u8 {
        match v {
            FieldRef::Flag(_) => 0,
            FieldRef::Number(_) => 1,
            FieldRef::Text(_) | FieldRef::Missing => 2,
        }
    };

    let (a_kind, b_kind) = (kind(&a), kind(&b));
    if a_kind != b_kind {
        return a_kind.cmp(&b_kind);
    }

    match (a, b) {
        (FieldRef::Flag(x), FieldRef::Flag(y)) => x.cmp(&y),
        (FieldRef::Number(x), FieldRef::Number(y)) => x.total_cmp(&y),
        (FieldRef::Text(x), FieldRef::Text(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

fn normalize(v: FieldRef<'_>) -> FieldRef<'_> {
    match v {
        FieldRef::Missing => FieldRef::Text(""),
        other => other,
    }
}
