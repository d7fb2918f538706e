//! Record model for roster
//!
//! A record is one row of a managed table: an immutable identity plus a flat
//! map of primitive display fields.
//!
//! Sorting and filtering never touch record internals directly. They go
//! through [`FieldSource`], so any type that can project a named field to a
//! [`FieldRef`] can be queried, not just [`Record`].

mod draft;
mod record;
mod value;

pub use draft::RecordDraft;
pub use record::{Record, RecordId};
pub use value::{FieldRef, FieldValue};

/// Projects named fields out of a row.
///
/// Absent fields must come back as [`FieldRef::Missing`], never panic.
pub trait FieldSource {
    /// Returns the named field, or `FieldRef::Missing`
    fn field(&self, name: &str) -> FieldRef<'_>;
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, name: &str) -> FieldRef<'_> {
        (**self).field(name)
    }
}

impl FieldSource for Record {
    fn field(&self, name: &str) -> FieldRef<'_> {
        if name == record::ID_FIELD {
            return FieldRef::Text(self.id.as_str());
        }
        self.get(name)
            .map(FieldValue::as_field_ref)
            .unwrap_or(FieldRef::Missing)
    }
}

impl FieldSource for serde_json::Value {
    fn field(&self, name: &str) -> FieldRef<'_> {
        match self.get(name) {
            Some(v) => FieldRef::from_json(v),
            None => FieldRef::Missing,
        }
    }
}
