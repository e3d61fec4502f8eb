use std::sync::Arc;

use shared::domain::Record;

/// The full, unfiltered listing from the last successful fetch.
///
/// Contents never change after construction; a new fetch builds a new store.
/// Clones share the same allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Arc<[Record]>,
}

impl RecordStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::RecordId;

    use super::*;

    fn record(id: i64) -> Record {
        Record {
            id: RecordId(id),
            name: format!("user {id}"),
            username: format!("u{id}"),
            email: format!("u{id}@x.com"),
            phone: String::new(),
        }
    }

    #[test]
    fn starts_empty() {
        let store = RecordStore::empty();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn keeps_fetch_order() {
        let store = RecordStore::from_records(vec![record(3), record(1)]);
        let ids: Vec<_> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RecordId(3), RecordId(1)]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clones_share_contents() {
        let store = RecordStore::from_records(vec![record(1)]);
        let clone = store.clone();
        assert!(std::ptr::eq(store.records(), clone.records()));
    }
}
