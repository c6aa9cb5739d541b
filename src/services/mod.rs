//! Service layer.
//!
//! Detection is the only service with independent design complexity; the
//! surrounding application supplies snapshots and consumes pair lists.

pub mod detection;

pub use detection::{DetectionConfig, DetectionOutcome, DetectionService, DuplicateDetector};
