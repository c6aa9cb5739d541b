//! Scan engine contract.

use crate::models::ContactRecord;

use super::matcher::MatchPredicate;
use super::types::ScanSummary;

/// A scan engine: consumes a snapshot and a predicate, produces the
/// accumulated duplicate pairs.
///
/// Implementations must be pure transforms: no input mutation, no I/O,
/// deterministic output order for a fixed input, and at most one pair per
/// canonical pair key no matter how often or in which order two contacts
/// are compared.
pub trait DuplicateScanner: Send + Sync {
    /// Scans the snapshot with the given predicate.
    fn scan(&self, contacts: &[ContactRecord], predicate: &dyn MatchPredicate) -> ScanSummary;
}
