//! Record Store - append-only, session-scoped race entries
//!
//! The store owns every entry submitted during one session, in submission
//! order. There is no removal or update; dropping the store is the only
//! way entries go away.

use tracing::debug;

use crate::entry::RaceEntry;

/// In-memory store for race entries.
///
/// ## Design
///
/// Entries live in a single vector. Views are always derived from a full
/// scan of [`RecordStore::all`], so no indexes are kept.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    entries: Vec<RaceEntry>,
}

impl RecordStore {
    /// Create a new empty record store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the store has no entries yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of entries in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Append an entry to the end of the store.
    pub fn append(&mut self, entry: RaceEntry) {
        self.entries.push(entry);
        debug!(entries = self.entries.len(), "race entry appended");
    }

    /// Every entry, in insertion order.
    #[must_use]
    pub fn all(&self) -> &[RaceEntry] {
        &self.entries
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, RaceEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a RaceEntry;
    type IntoIter = std::slice::Iter<'a, RaceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<RaceEntry> for RecordStore {
    fn extend<T: IntoIterator<Item = RaceEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.append(entry);
        }
    }
}
