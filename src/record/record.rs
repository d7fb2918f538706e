//! Records and record identity

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::draft::RecordDraft;
use super::value::FieldValue;

/// Name of the identity field in serialized records
pub(crate) const ID_FIELD: &str = "id";

/// Unique, immutable record identity
///
/// Accepts either a JSON string or an integer on input; integers keep their
/// decimal text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identity
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => RecordId(s),
            RawId::Unsigned(n) => RecordId(n.to_string()),
            RawId::Signed(n) => RecordId(n.to_string()),
        })
    }
}

/// One row of a managed collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identity, fixed at creation
    pub id: RecordId,
    /// Display fields, serialized flat next to `id`
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Creates a record with no display fields
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builds a record from a draft under the given identity
    pub fn from_draft(id: RecordId, draft: RecordDraft) -> Self {
        Self {
            id,
            fields: draft.into_fields(),
        }
    }

    /// Adds a field (builder style)
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Merges draft fields into this record; the draft wins on conflicts
    pub(crate) fn merge(&mut self, draft: RecordDraft) {
        self.fields.extend(draft.into_fields());
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_numeric_id_accepted() {
        let record: Record = serde_json::from_value(json!({"id": 1, "name": "Zoe"})).unwrap();
        assert_eq!(record.id.as_str(), "1");
        assert_eq!(record.get("name"), Some(&FieldValue::text("Zoe")));
    }

    #[test]
    fn test_serializes_flat() {
        let record = Record::new("u1")
            .with_field("name", "Amy")
            .with_field("isVerified", true);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"id": "u1", "name": "Amy", "isVerified": true}));
    }

    #[test]
    fn test_merge_overwrites_and_keeps_others() {
        let mut record = Record::new("u1")
            .with_field("name", "Amy")
            .with_field("role", "Admin");

        record.merge(RecordDraft::new().with("role", "Designer"));

        assert_eq!(record.get("name"), Some(&FieldValue::text("Amy")));
        assert_eq!(record.get("role"), Some(&FieldValue::text("Designer")));
        assert_eq!(record.id.as_str(), "u1");
    }
}
