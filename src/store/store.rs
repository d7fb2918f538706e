//! Owned record collection with an explicit mutation API

use std::fmt;

use crate::observability::{log_event_at, Event, Severity};
use crate::record::{Record, RecordDraft, RecordId};

use super::errors::{StoreError, StoreResult};

/// A committed change, delivered to listeners after the mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    Added(RecordId),
    Updated(RecordId),
    Removed(RecordId),
}

impl StoreChange {
    pub fn id(&self) -> &RecordId {
        match self {
            StoreChange::Added(id) | StoreChange::Updated(id) | StoreChange::Removed(id) => id,
        }
    }
}

type Listener = Box<dyn FnMut(&StoreChange)>;

/// Ordered, process-local record collection.
///
/// Records keep insertion order. Identities are unique. Every successful
/// mutation bumps `version` and notifies listeners synchronously.
#[derive(Default)]
pub struct RecordStore {
    records: Vec<Record>,
    version: u64,
    listeners: Vec<Listener>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing records, rejecting duplicate ids
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> StoreResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.check_unique(&record.id)?;
            store.records.push(record);
        }
        Ok(store)
    }

    /// Creates a record from a draft under a fresh random identity
    pub fn add(&mut self, draft: RecordDraft) -> StoreResult<RecordId> {
        if draft.touches_identity() {
            return Err(StoreError::IdentityImmutable);
        }

        let mut id = RecordId::generate();
        while self.position(&id).is_some() {
            id = RecordId::generate();
        }

        self.records.push(Record::from_draft(id.clone(), draft));
        log_event_at(Severity::Trace, Event::RecordAdded, &[("id", id.as_str())]);
        self.notify(StoreChange::Added(id.clone()));

        Ok(id)
    }

    /// Inserts a record that already has an identity
    pub fn insert(&mut self, record: Record) -> StoreResult<()> {
        self.check_unique(&record.id)?;

        let id = record.id.clone();
        self.records.push(record);
        log_event_at(Severity::Trace, Event::RecordAdded, &[("id", id.as_str())]);
        self.notify(StoreChange::Added(id));

        Ok(())
    }

    /// Merges draft fields into an existing record; identity is unchanged
    pub fn update(&mut self, id: &RecordId, draft: RecordDraft) -> StoreResult<&Record> {
        if draft.touches_identity() {
            return Err(StoreError::IdentityImmutable);
        }
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        self.records[index].merge(draft);
        log_event_at(Severity::Trace, Event::RecordUpdated, &[("id", id.as_str())]);
        self.notify(StoreChange::Updated(id.clone()));

        Ok(&self.records[index])
    }

    /// Removes a record by identity and returns it
    pub fn remove(&mut self, id: &RecordId) -> StoreResult<Record> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        let record = self.records.remove(index);
        log_event_at(Severity::Trace, Event::RecordRemoved, &[("id", id.as_str())]);
        self.notify(StoreChange::Removed(id.clone()));

        Ok(record)
    }

    /// Registers a listener called after every committed change
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// All records in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Monotonic change counter
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    fn check_unique(&self, id: &RecordId) -> StoreResult<()> {
        if self.position(id).is_some() {
            return Err(StoreError::DuplicateId(id.clone()));
        }
        Ok(())
    }

    fn notify(&mut self, change: StoreChange) {
        self.version += 1;
        for listener in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.records)
            .field("version", &self.version)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn user(id: &str, name: &str) -> Record {
        Record::new(id).with_field("name", name)
    }

    #[test]
    fn test_add_assigns_fresh_ids() {
        let mut store = RecordStore::new();

        let a = store.add(RecordDraft::new().with("name", "Amy")).unwrap();
        let b = store.add(RecordDraft::new().with("name", "Amy")).unwrap();

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&a).unwrap().get("name"), Some(&FieldValue::text("Amy")));
    }

    #[test]
    fn test_add_rejects_identity() {
        let mut store = RecordStore::new();
        let err = store.add(RecordDraft::new().with("id", "7")).unwrap_err();
        assert_eq!(err, StoreError::IdentityImmutable);
        assert!(store.is_empty());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let err = RecordStore::from_records(vec![user("1", "Zoe"), user("1", "Amy")]).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(RecordId::new("1")));
    }

    #[test]
    fn test_update_merges() {
        let mut store = RecordStore::from_records(vec![
            user("1", "Zoe").with_field("role", "Admin"),
        ])
        .unwrap();

        let updated = store
            .update(&RecordId::new("1"), RecordDraft::new().with("name", "Zoey"))
            .unwrap();

        assert_eq!(updated.id.as_str(), "1");
        assert_eq!(updated.get("name"), Some(&FieldValue::text("Zoey")));
        assert_eq!(updated.get("role"), Some(&FieldValue::text("Admin")));
    }

    #[test]
    fn test_update_unknown() {
        let mut store = RecordStore::new();
        let err = store
            .update(&RecordId::new("nope"), RecordDraft::new())
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound(RecordId::new("nope")));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut store =
            RecordStore::from_records(vec![user("1", "a"), user("2", "b"), user("3", "c")])
                .unwrap();

        let removed = store.remove(&RecordId::new("2")).unwrap();

        assert_eq!(removed.id.as_str(), "2");
        assert_eq!(store.ids(), vec![RecordId::new("1"), RecordId::new("3")]);
        assert!(store.remove(&RecordId::new("2")).is_err());
    }

    #[test]
    fn test_listeners_and_version() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = RecordStore::new();
        store.subscribe(move |change| sink.borrow_mut().push(change.clone()));

        let id = store.add(RecordDraft::new().with("name", "Amy")).unwrap();
        store.update(&id, RecordDraft::new().with("status", "active")).unwrap();
        store.remove(&id).unwrap();
        let _ = store.remove(&id);

        assert_eq!(store.version(), 3);
        assert_eq!(
            *seen.borrow(),
            vec![
                StoreChange::Added(id.clone()),
                StoreChange::Updated(id.clone()),
                StoreChange::Removed(id),
            ]
        );
    }
}
