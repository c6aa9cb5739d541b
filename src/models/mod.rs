//! Data models for contact-dedup.
//!
//! This module contains the core data structures: contact records as they
//! arrive in a snapshot, and the canonical duplicate-pair types produced by
//! detection.

mod contact;
mod pair;

pub use contact::{ContactId, ContactRecord};
pub use pair::{DuplicatePair, MatchAxis, PairKey};
