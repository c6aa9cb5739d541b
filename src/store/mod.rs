//! Contact store boundary.
//!
//! The platform address books that snapshots come from (a content
//! resolver, a contacts framework, anything else) live behind the
//! [`ContactStore`] capability rather than as process-wide state. The
//! detection service only ever asks a store for one thing: a bounded,
//! point-in-time snapshot.

mod file;
mod memory;

pub use file::SnapshotFileStore;
pub use memory::InMemoryContactStore;

use crate::Result;
use crate::models::ContactRecord;

/// Capability for producing contact snapshots.
///
/// A snapshot is immutable and ordered; live changes in the underlying
/// store are not reflected in a snapshot already produced. Ids must be
/// unique within one snapshot.
pub trait ContactStore: Send + Sync {
    /// Produces a snapshot of at most `limit` contacts, in store order.
    ///
    /// `None` means unbounded; stores should still stream rather than
    /// buffer twice where they can.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read.
    fn snapshot(&self, limit: Option<usize>) -> Result<Vec<ContactRecord>>;
}
