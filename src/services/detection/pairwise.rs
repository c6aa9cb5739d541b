//! Full pairwise scan engine.
//!
//! The faithful O(n²·k) algorithm: every unordered pair of distinct
//! contacts is evaluated exactly once, matches are accumulated into a set
//! keyed by the canonical pair key, and the accumulated pairs come back in
//! discovery order. Quadratic cost is the central engineering concern
//! here; callers needing bounded latency must cap the snapshot before
//! scanning (see `DetectionConfig::snapshot_limit`).

use std::collections::HashSet;
use std::num::NonZeroUsize;

use crate::models::{ContactRecord, DuplicatePair, PairKey};

use super::matcher::MatchPredicate;
use super::scanner::DuplicateScanner;
use super::types::ScanSummary;

/// Scan engine comparing every unordered pair of contacts.
///
/// With more than one worker the row space is split into contiguous
/// ranges, each owned by one thread with its own accumulator; partial
/// results are merged in range order with duplicate pair keys collapsed,
/// so the observable result is identical to the serial scan.
///
/// # Example
///
/// ```rust
/// use contact_dedup::{ContactRecord, DuplicateScanner, ExactMatcher, PairwiseScanner};
///
/// let contacts = vec![
///     ContactRecord::new("1", "Jane Doe", Vec::<String>::new()),
///     ContactRecord::new("2", "Jane Doe", Vec::<String>::new()),
/// ];
/// let summary = PairwiseScanner::new().scan(&contacts, &ExactMatcher::new());
/// assert_eq!(summary.pairs.len(), 1);
/// assert_eq!(summary.compared, 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PairwiseScanner {
    workers: NonZeroUsize,
}

impl PairwiseScanner {
    /// Creates a serial pairwise scanner.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            workers: NonZeroUsize::MIN,
        }
    }

    /// Creates a scanner that partitions rows across `workers` threads.
    #[must_use]
    pub const fn with_workers(workers: NonZeroUsize) -> Self {
        Self { workers }
    }

    /// Scans rows `rows` of the comparison matrix, comparing each row
    /// contact against every later contact.
    fn scan_rows(
        contacts: &[ContactRecord],
        rows: std::ops::Range<usize>,
        predicate: &dyn MatchPredicate,
    ) -> ScanSummary {
        let mut pairs = Vec::new();
        let mut seen: HashSet<PairKey> = HashSet::new();
        let mut compared: u64 = 0;

        for i in rows {
            let ci = &contacts[i];
            for cj in &contacts[i + 1..] {
                compared += 1;
                let Some(axis) = predicate.evaluate(ci, cj) else {
                    continue;
                };
                // Snapshot ids are unique, but the seen-set keeps the
                // single-pair invariant even when they are not.
                let Some(pair) = DuplicatePair::new(ci.id.clone(), cj.id.clone(), axis) else {
                    continue;
                };
                if seen.insert(pair.key()) {
                    pairs.push(pair);
                }
            }
        }

        ScanSummary { pairs, compared }
    }

    /// Merges partial summaries in range order, collapsing duplicate keys.
    fn merge(partials: Vec<ScanSummary>) -> ScanSummary {
        let mut merged = ScanSummary::default();
        let mut seen: HashSet<PairKey> = HashSet::new();
        for partial in partials {
            merged.compared += partial.compared;
            for pair in partial.pairs {
                if seen.insert(pair.key()) {
                    merged.pairs.push(pair);
                }
            }
        }
        merged
    }
}

impl Default for PairwiseScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl DuplicateScanner for PairwiseScanner {
    fn scan(&self, contacts: &[ContactRecord], predicate: &dyn MatchPredicate) -> ScanSummary {
        let n = contacts.len();
        let workers = self.workers.get().min(n.max(1));
        if workers <= 1 {
            return Self::scan_rows(contacts, 0..n, predicate);
        }

        // Contiguous row ranges; each worker owns a disjoint slice of the
        // pair space and its own accumulator, so the merge step is the
        // only point where results meet.
        let chunk = n.div_ceil(workers);
        let partials = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|w| {
                    let start = w * chunk;
                    let end = ((w + 1) * chunk).min(n);
                    scope.spawn(move || Self::scan_rows(contacts, start..end, predicate))
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(summary) => summary,
                    // A predicate panic must surface exactly as it would in
                    // the serial scan, not as a quietly incomplete result.
                    Err(payload) => std::panic::resume_unwind(payload),
                })
                .collect::<Vec<_>>()
        });

        Self::merge(partials)
    }
}
