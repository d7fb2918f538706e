//! Form drafts for creating and editing records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::record::ID_FIELD;
use super::value::FieldValue;

/// Field assignments submitted by a create or edit form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordDraft {
    fields: BTreeMap<String, FieldValue>,
}

impl RecordDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field (builder style)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// True if the draft tries to assign the identity field
    pub fn touches_identity(&self) -> bool {
        self.fields.contains_key(ID_FIELD)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub(crate) fn into_fields(self) -> BTreeMap<String, FieldValue> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_touches_identity() {
        assert!(!RecordDraft::new().with("name", "Bob").touches_identity());
        assert!(RecordDraft::new().with("id", "42").touches_identity());
    }

    #[test]
    fn test_deserialize_from_object() {
        let draft: RecordDraft =
            serde_json::from_value(json!({"name": "Bob", "isVerified": false})).unwrap();

        assert_eq!(draft.len(), 2);
        assert_eq!(draft.get("isVerified"), Some(&FieldValue::flag(false)));
    }
}
