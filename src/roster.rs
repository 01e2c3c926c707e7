use tracing::debug;

use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterState {
    Empty,
    NonEmpty,
}

/// The session's students, in insertion order, keyed by roll number.
#[derive(Debug, Default)]
pub struct Roster {
    records: Vec<Record>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` unless its roll number is already taken.
    /// Returns false and leaves the roster untouched on a duplicate.
    pub fn insert(&mut self, record: Record) -> bool {
        if self.find_by_id(record.id()).is_some() {
            debug!(id = record.id(), "rejected duplicate roll number");
            return false;
        }
        debug!(id = record.id(), name = record.name(), "student added");
        self.records.push(record);
        true
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn list_all(&self) -> &[Record] {
        &self.records
    }

    pub fn clear(&mut self) {
        debug!(discarded = self.records.len(), "roster cleared");
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn state(&self) -> RosterState {
        if self.is_empty() {
            RosterState::Empty
        } else {
            RosterState::NonEmpty
        }
    }
}
