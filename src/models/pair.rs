//! Duplicate pair types.
//!
//! A candidate duplicate is identified by a canonical pair key: the two
//! contact ids sorted lexicographically and joined with `-`. Comparing
//! `(A, B)` or `(B, A)` therefore yields the same identity, and the
//! accumulating scan can collapse equivalent pairs with a plain set lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ContactId;

/// Canonical, order-independent identifier for a contact pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairKey(String);

impl PairKey {
    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The axis on which a pair of contacts matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchAxis {
    /// Display names were considered equal by the active predicate.
    Name,

    /// At least one phone number was shared between the two records.
    Phone,
}

impl fmt::Display for MatchAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Phone => write!(f, "phone"),
        }
    }
}

/// A candidate duplicate pair.
///
/// `id_a` always sorts lexicographically before `id_b`, so the pair's
/// identity does not depend on the order in which the two contacts were
/// compared. Serialized across the caller boundary as `{"idA", "idB"}`
/// maps plus the matched axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicatePair {
    /// The lexicographically smaller contact id.
    #[serde(rename = "idA")]
    pub id_a: ContactId,

    /// The lexicographically larger contact id.
    #[serde(rename = "idB")]
    pub id_b: ContactId,

    /// The axis that produced the match.
    pub axis: MatchAxis,
}

impl DuplicatePair {
    /// Creates a canonical pair from two ids in either order.
    ///
    /// Returns `None` when both ids are equal: a contact never pairs with
    /// itself.
    #[must_use]
    pub fn new(first: ContactId, second: ContactId, axis: MatchAxis) -> Option<Self> {
        match first.cmp(&second) {
            std::cmp::Ordering::Less => Some(Self {
                id_a: first,
                id_b: second,
                axis,
            }),
            std::cmp::Ordering::Greater => Some(Self {
                id_a: second,
                id_b: first,
                axis,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns the canonical pair key for this pair.
    #[must_use]
    pub fn key(&self) -> PairKey {
        PairKey(format!("{}-{}", self.id_a, self.id_b))
    }
}
