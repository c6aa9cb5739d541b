//! Match predicates.
//!
//! A predicate decides whether two contact records are candidate
//! duplicates and on which axis (name or phone). The pairing and
//! accumulation logic never inspects records itself, so stronger matchers
//! (edit distance on names, E.164-aware phone comparison) can be dropped
//! in without touching the scanners.

use crate::models::{ContactRecord, MatchAxis};

use super::normalize::{digit_count, normalize_name, normalize_phone};

/// Verdict rule deciding whether two contacts are candidate duplicates.
///
/// Implementations must be pure: no interior state, no I/O, and the same
/// verdict for the same pair of records on every call. Symmetry is also
/// required (`evaluate(a, b) == evaluate(b, a)`) so the result set does
/// not depend on comparison order.
pub trait MatchPredicate: Send + Sync {
    /// Evaluates two records, returning the matched axis or `None`.
    ///
    /// When both axes would match, the name axis wins; callers only need
    /// one reason per pair.
    fn evaluate(&self, a: &ContactRecord, b: &ContactRecord) -> Option<MatchAxis>;
}

/// The baseline predicate: exact, unnormalized comparison.
///
/// - Name match: case-sensitive string equality of display names. Records
///   with an empty (or all-whitespace) name never match on the name axis.
/// - Phone match: at least one raw phone string present in both lists,
///   exact equality, no normalization of formatting, country code, or
///   whitespace. Blank entries are missing data, not matchable values.
///
/// This is a documented policy choice, not a law: it is the simplest
/// viable rule. Use [`NormalizedMatcher`] when formatting noise should be
/// tolerated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl ExactMatcher {
    /// Creates the baseline matcher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MatchPredicate for ExactMatcher {
    fn evaluate(&self, a: &ContactRecord, b: &ContactRecord) -> Option<MatchAxis> {
        if a.has_display_name() && b.has_display_name() && a.display_name == b.display_name {
            return Some(MatchAxis::Name);
        }
        if a.phone_numbers
            .iter()
            .filter(|phone| !phone.trim().is_empty())
            .any(|phone| b.phone_numbers.contains(phone))
        {
            return Some(MatchAxis::Phone);
        }
        None
    }
}

/// Normalizing predicate: tolerant of case, whitespace, and phone
/// formatting noise.
///
/// - Name match: equality after trimming, lowercasing, and whitespace
///   collapse.
/// - Phone match: intersection after stripping everything but digits and a
///   leading `+`. Numbers that normalize to fewer than `min_phone_digits`
///   digits are ignored, so stray short fragments ("911", "0") do not
///   chain unrelated contacts together.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedMatcher {
    min_phone_digits: usize,
}

impl NormalizedMatcher {
    /// Default minimum digit count for a phone number to participate.
    pub const DEFAULT_MIN_PHONE_DIGITS: usize = 4;

    /// Creates a normalizing matcher with the given phone-digit floor.
    #[must_use]
    pub const fn new(min_phone_digits: usize) -> Self {
        Self { min_phone_digits }
    }

    /// Returns the normalized phone numbers of a record that clear the
    /// digit floor.
    fn usable_phones(&self, record: &ContactRecord) -> Vec<String> {
        record
            .phone_numbers
            .iter()
            .map(|phone| normalize_phone(phone))
            .filter(|normalized| digit_count(normalized) >= self.min_phone_digits)
            .collect()
    }
}

impl Default for NormalizedMatcher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_PHONE_DIGITS)
    }
}

impl MatchPredicate for NormalizedMatcher {
    fn evaluate(&self, a: &ContactRecord, b: &ContactRecord) -> Option<MatchAxis> {
        if a.has_display_name() && b.has_display_name() {
            let name_a = normalize_name(&a.display_name);
            if !name_a.is_empty() && name_a == normalize_name(&b.display_name) {
                return Some(MatchAxis::Name);
            }
        }
        let phones_b = self.usable_phones(b);
        if !phones_b.is_empty()
            && self
                .usable_phones(a)
                .iter()
                .any(|phone| phones_b.contains(phone))
        {
            return Some(MatchAxis::Phone);
        }
        None
    }
}
