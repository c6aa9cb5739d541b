//! Detection result types.

use serde::{Deserialize, Serialize};

use crate::models::DuplicatePair;

/// Raw output of a scan engine: the accumulated pairs plus how many
/// predicate evaluations it took to find them.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Candidate duplicate pairs in discovery order, unique by pair key.
    pub pairs: Vec<DuplicatePair>,

    /// Number of predicate evaluations performed. For the full pairwise
    /// scan this is exactly `n * (n - 1) / 2`; the bucketed scan reports
    /// how much of that space the pre-filter actually touched.
    pub compared: u64,
}

/// Result of a detection run.
///
/// # Example
///
/// ```rust
/// use contact_dedup::{DetectionConfig, DetectionService};
///
/// let service = DetectionService::new(DetectionConfig::default());
/// let outcome = service.detect(&[]);
/// assert!(outcome.pairs.is_empty());
/// assert!(!outcome.truncated);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionOutcome {
    /// Candidate duplicate pairs in discovery order, unique by pair key.
    /// Callers must not depend on ordering beyond pair-key uniqueness.
    pub pairs: Vec<DuplicatePair>,

    /// Number of contact records actually scanned, after the snapshot cap.
    pub scanned: usize,

    /// Number of predicate evaluations performed.
    pub compared: u64,

    /// Whether the input snapshot was cut down to the configured cap.
    pub truncated: bool,

    /// Duration of the scan in milliseconds.
    pub scan_duration_ms: u64,
}

impl DetectionOutcome {
    /// Creates an empty outcome, used when detection is disabled or the
    /// snapshot is empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            pairs: Vec::new(),
            scanned: 0,
            compared: 0,
            truncated: false,
            scan_duration_ms: 0,
        }
    }
}

impl Default for DetectionOutcome {
    fn default() -> Self {
        Self::empty()
    }
}
