//! In-memory contact store.

use crate::Result;
use crate::models::ContactRecord;

use super::ContactStore;

/// Contact store over a fixed in-memory snapshot.
///
/// Used by tests and by embedding callers that already hold the records
/// (e.g. received across a method-call bridge) and only need the
/// capability shape.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactStore {
    contacts: Vec<ContactRecord>,
}

impl InMemoryContactStore {
    /// Creates a store over the given records.
    #[must_use]
    pub const fn new(contacts: Vec<ContactRecord>) -> Self {
        Self { contacts }
    }

    /// Returns the number of records held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl ContactStore for InMemoryContactStore {
    fn snapshot(&self, limit: Option<usize>) -> Result<Vec<ContactRecord>> {
        let take = limit.unwrap_or(self.contacts.len());
        Ok(self.contacts.iter().take(take).cloned().collect())
    }
}
