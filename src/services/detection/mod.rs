//! Duplicate-contact detection.
//!
//! The engine is split along two seams:
//!
//! 1. **Match predicate**: the rule deciding whether two records are
//!    candidate duplicates (exact baseline or normalized comparison).
//! 2. **Scan engine**: the walk over the pair space (full pairwise scan,
//!    optionally partitioned across threads, or a bucketed pre-filter).
//!
//! The [`DetectionService`] wires both together behind one call and adds
//! the enabled gate, the snapshot cap, tracing, and metrics.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      DetectionService                      │
//! │  ┌────────────────────┐      ┌───────────────────────────┐ │
//! │  │ MatchPredicate     │      │ DuplicateScanner          │ │
//! │  │                    │      │                           │ │
//! │  │ ExactMatcher       │◄─────│ PairwiseScanner  (O(n²))  │ │
//! │  │ NormalizedMatcher  │      │ BucketScanner (pre-filter)│ │
//! │  └────────────────────┘      └───────────────────────────┘ │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use contact_dedup::{ContactRecord, DetectionConfig, DetectionService};
//!
//! let service = DetectionService::new(DetectionConfig::default());
//! let outcome = service.detect(&[
//!     ContactRecord::new("1", "Jane Doe", Vec::<String>::new()),
//!     ContactRecord::new("2", "Jane Doe", Vec::<String>::new()),
//! ]);
//! assert_eq!(outcome.pairs.len(), 1);
//! ```

mod bucket;
mod config;
mod matcher;
mod normalize;
mod pairwise;
mod scanner;
mod service;
mod types;

pub use bucket::BucketScanner;
pub use config::{DetectionConfig, EngineKind, StrategyKind};
pub use matcher::{ExactMatcher, MatchPredicate, NormalizedMatcher};
pub use normalize::{digit_count, normalize_name, normalize_phone};
pub use pairwise::PairwiseScanner;
pub use scanner::DuplicateScanner;
pub use service::{DetectionService, DuplicateDetector};
pub use types::{DetectionOutcome, ScanSummary};
