//! # contact-dedup
//!
//! Duplicate-contact detection and merge-suggestion engine.
//!
//! Given an immutable snapshot of contact records (id, display name, phone
//! numbers), the engine produces an unordered set of candidate duplicate
//! pairs, each identified by a canonical, order-independent pair key. It is
//! the algorithmic core behind a "merge suggestions" feature: the caller
//! fetches a snapshot from whatever address-book store it talks to, hands it
//! to the engine, and drives a manual merge-confirmation flow from the
//! resulting pair list. The engine itself never merges, deletes, or mutates
//! contacts.
//!
//! ## Features
//!
//! - Pluggable match predicates (exact baseline, normalized name/phone)
//! - Two scan engines behind one contract: a faithful O(n²) pairwise scan
//!   and a bucketed pre-filter with the same observable result set
//! - Optional partitioned execution of the pairwise scan across threads
//! - Configurable snapshot cap with explicit truncation reporting
//!
//! ## Example
//!
//! ```rust
//! use contact_dedup::{ContactRecord, DetectionConfig, DetectionService};
//!
//! let contacts = vec![
//!     ContactRecord::new("1", "Jane Doe", ["555-1111"]),
//!     ContactRecord::new("2", "Jane Doe", Vec::<String>::new()),
//! ];
//!
//! let service = DetectionService::new(DetectionConfig::default());
//! let outcome = service.detect(&contacts);
//! assert_eq!(outcome.pairs.len(), 1);
//! assert_eq!(outcome.pairs[0].key().as_str(), "1-2");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod cli;
pub mod models;
pub mod observability;
pub mod services;
pub mod store;

// Re-exports for convenience
pub use models::{ContactId, ContactRecord, DuplicatePair, MatchAxis, PairKey};
pub use services::detection::{
    BucketScanner, DetectionConfig, DetectionOutcome, DetectionService, DuplicateScanner,
    ExactMatcher, MatchPredicate, NormalizedMatcher, PairwiseScanner,
};
pub use store::{ContactStore, InMemoryContactStore, SnapshotFileStore};

/// Error type for contact-dedup operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// Detection itself is failure-free by construction: malformed records
/// degrade to "cannot match on that axis" rather than erroring. Errors only
/// arise at the snapshot boundary (reading a store or a snapshot file) and
/// from invalid caller input.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A snapshot file has an unrecognized extension or malformed rows
    /// - A CLI argument cannot be parsed into a strategy or engine name
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Filesystem I/O errors occur while reading a snapshot
    /// - JSON or CSV deserialization of a snapshot fails
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for contact-dedup operations.
pub type Result<T> = std::result::Result<T, Error>;
