//! Detection service orchestrator.
//!
//! Wires a match predicate and a scan engine together behind one call:
//! gate on the enabled flag, cut the snapshot down to the configured cap,
//! run the scan, record tracing and metrics, and hand back the pair list
//! with its bookkeeping. The merge-suggestion flow layers the contact
//! store capability on top.

use std::time::Instant;
use tracing::instrument;

use crate::Result;
use crate::models::{ContactRecord, DuplicatePair};
use crate::store::ContactStore;

use super::bucket::BucketScanner;
use super::config::{DetectionConfig, EngineKind, StrategyKind};
use super::matcher::{ExactMatcher, MatchPredicate, NormalizedMatcher};
use super::pairwise::PairwiseScanner;
use super::scanner::DuplicateScanner;
use super::types::DetectionOutcome;

/// Trait for duplicate detection.
///
/// Allows for different implementations (e.g., mock for testing).
pub trait DuplicateDetector: Send + Sync {
    /// Runs detection over a snapshot.
    fn detect(&self, contacts: &[ContactRecord]) -> DetectionOutcome;
}

/// Service for duplicate-contact detection.
///
/// A pure, stateless transform over the snapshot it is given: no I/O, no
/// shared mutable state, no suspension points. The only failure source is
/// the [`ContactStore`] used by [`suggest`](Self::suggest); detection
/// itself degrades gracefully on missing fields instead of erroring.
///
/// # Example
///
/// ```rust
/// use contact_dedup::{ContactRecord, DetectionConfig, DetectionService};
///
/// let contacts = vec![
///     ContactRecord::new("1", "A", ["555-1111"]),
///     ContactRecord::new("2", "B", ["555-1111", "555-2222"]),
/// ];
///
/// let service = DetectionService::new(DetectionConfig::default());
/// let outcome = service.detect(&contacts);
/// assert_eq!(outcome.pairs[0].key().as_str(), "1-2");
/// ```
pub struct DetectionService {
    /// Configuration.
    config: DetectionConfig,
    /// Match predicate deciding candidate pairs.
    predicate: Box<dyn MatchPredicate>,
    /// Scan engine walking the pair space.
    scanner: Box<dyn DuplicateScanner>,
}

impl DetectionService {
    /// Creates a service with the predicate and engine named by the
    /// configuration.
    #[must_use]
    pub fn new(config: DetectionConfig) -> Self {
        let predicate: Box<dyn MatchPredicate> = match config.strategy {
            StrategyKind::Exact => Box::new(ExactMatcher::new()),
            StrategyKind::Normalized => Box::new(NormalizedMatcher::new(config.min_phone_digits)),
        };
        let scanner: Box<dyn DuplicateScanner> = match config.engine {
            EngineKind::Pairwise => Box::new(PairwiseScanner::with_workers(config.workers)),
            EngineKind::Bucketed => Box::new(BucketScanner::new()),
        };
        Self {
            config,
            predicate,
            scanner,
        }
    }

    /// Replaces the match predicate, keeping the configured engine.
    ///
    /// This is the substitution seam for stronger matchers. The bucketed
    /// engine is only sound for predicates whose matches imply a shared
    /// name or phone bucket; pair a custom predicate with the pairwise
    /// engine unless that holds.
    #[must_use]
    pub fn with_predicate(mut self, predicate: Box<dyn MatchPredicate>) -> Self {
        self.predicate = predicate;
        self
    }

    /// Replaces the scan engine.
    #[must_use]
    pub fn with_scanner(mut self, scanner: Box<dyn DuplicateScanner>) -> Self {
        self.scanner = scanner;
        self
    }

    /// Returns true if detection is enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Returns the configured snapshot cap.
    #[must_use]
    pub const fn snapshot_limit(&self) -> Option<usize> {
        self.config.snapshot_limit
    }

    /// Runs detection over the given snapshot.
    ///
    /// Applies the enabled gate and the snapshot cap, then walks the pair
    /// space with the configured engine. Never fails: records with
    /// missing names or phones simply cannot match on that axis.
    #[allow(clippy::cast_possible_truncation)] // Duration in ms won't exceed u64::MAX
    #[instrument(
        skip(self, contacts),
        fields(
            operation = "detect",
            strategy = self.config.strategy.as_str(),
            engine = self.config.engine.as_str(),
            snapshot_len = contacts.len()
        )
    )]
    pub fn detect(&self, contacts: &[ContactRecord]) -> DetectionOutcome {
        if !self.config.enabled {
            tracing::debug!("Detection disabled, skipping scan");
            return DetectionOutcome::empty();
        }

        let start = Instant::now();
        let (window, truncated) = Self::apply_cap(contacts, self.config.snapshot_limit);
        if truncated {
            tracing::debug!(
                snapshot_len = contacts.len(),
                scanned = window.len(),
                "Snapshot cut down to configured cap"
            );
        }

        let summary = self.scanner.scan(window, self.predicate.as_ref());
        let scan_duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            pairs = summary.pairs.len(),
            compared = summary.compared,
            truncated = truncated,
            duration_ms = scan_duration_ms,
            "Detection scan complete"
        );
        metrics::counter!(
            "detection_scans_total",
            "engine" => self.config.engine.as_str(),
            "strategy" => self.config.strategy.as_str()
        )
        .increment(1);
        for pair in &summary.pairs {
            metrics::counter!(
                "detection_pairs_total",
                "axis" => pair.axis.to_string()
            )
            .increment(1);
        }
        metrics::histogram!(
            "detection_scan_duration_ms",
            "engine" => self.config.engine.as_str()
        )
        .record(scan_duration_ms as f64);

        DetectionOutcome {
            scanned: window.len(),
            compared: summary.compared,
            pairs: summary.pairs,
            truncated,
            scan_duration_ms,
        }
    }

    /// Produces merge suggestions from a contact store.
    ///
    /// Pulls a snapshot (bounded by the configured cap so the store can
    /// avoid materializing more than will be scanned), runs detection,
    /// and returns the pair list for the caller's manual merge flow. The
    /// service never merges, deletes, or mutates contacts.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to produce a snapshot.
    #[instrument(skip(self, store), fields(operation = "suggest"))]
    pub fn suggest(&self, store: &dyn ContactStore) -> Result<Vec<DuplicatePair>> {
        let contacts = store.snapshot(self.config.snapshot_limit)?;
        Ok(self.detect(&contacts).pairs)
    }

    /// Cuts the snapshot down to the cap, reporting whether it was cut.
    fn apply_cap(contacts: &[ContactRecord], limit: Option<usize>) -> (&[ContactRecord], bool) {
        match limit {
            Some(cap) if contacts.len() > cap => (&contacts[..cap], true),
            _ => (contacts, false),
        }
    }
}

impl DuplicateDetector for DetectionService {
    fn detect(&self, contacts: &[ContactRecord]) -> DetectionOutcome {
        Self::detect(self, contacts)
    }
}
