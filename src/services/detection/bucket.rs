//! Bucketed pre-filter scan engine.
//!
//! Instead of touching all `n * (n - 1) / 2` pairs, contacts are first
//! grouped into buckets by raw and normalized display name and by raw and
//! normalized phone number. Only pairs sharing a bucket are handed to the
//! predicate, which still has the final word; the accumulation step is the
//! same keyed set as the pairwise scan. For the predicates shipped in this
//! crate a match always implies a shared bucket key, so the observable
//! result set is identical to the full scan; only the cost changes.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::models::{ContactRecord, DuplicatePair, PairKey};

use super::matcher::MatchPredicate;
use super::normalize::{normalize_name, normalize_phone};
use super::scanner::DuplicateScanner;
use super::types::ScanSummary;

/// Scan engine that only compares contacts sharing a name or phone bucket.
///
/// The candidate set is a superset of the true matches for both
/// [`ExactMatcher`](super::ExactMatcher) (raw buckets cover raw equality)
/// and [`NormalizedMatcher`](super::NormalizedMatcher) (normalized buckets
/// cover normalized equality). A custom predicate is only safe with this
/// engine if any pair it matches shares at least one raw or normalized
/// name/phone key; otherwise use [`PairwiseScanner`](super::PairwiseScanner).
#[derive(Debug, Clone, Copy, Default)]
pub struct BucketScanner;

impl BucketScanner {
    /// Creates a bucketed scanner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Inserts `index` into the bucket for `key`, skipping blank keys.
    fn bucket_insert(buckets: &mut HashMap<String, Vec<usize>>, key: String, index: usize) {
        if key.trim().is_empty() {
            return;
        }
        buckets.entry(key).or_default().push(index);
    }

    /// Builds the candidate index pairs from bucket co-membership.
    ///
    /// A `BTreeSet` keeps candidates sorted by `(i, j)`, which makes the
    /// discovery order deterministic and independent of hash iteration.
    fn candidates(contacts: &[ContactRecord]) -> BTreeSet<(usize, usize)> {
        let mut buckets: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, record) in contacts.iter().enumerate() {
            Self::bucket_insert(&mut buckets, record.display_name.clone(), index);
            Self::bucket_insert(&mut buckets, normalize_name(&record.display_name), index);
            for phone in &record.phone_numbers {
                Self::bucket_insert(&mut buckets, phone.clone(), index);
                Self::bucket_insert(&mut buckets, normalize_phone(phone), index);
            }
        }

        let mut candidates = BTreeSet::new();
        for members in buckets.values() {
            for (pos, &i) in members.iter().enumerate() {
                for &j in &members[pos + 1..] {
                    if i == j {
                        // Same record can land twice in one phone bucket
                        // when raw and normalized forms coincide.
                        continue;
                    }
                    candidates.insert((i.min(j), i.max(j)));
                }
            }
        }
        candidates
    }
}

impl DuplicateScanner for BucketScanner {
    fn scan(&self, contacts: &[ContactRecord], predicate: &dyn MatchPredicate) -> ScanSummary {
        let mut pairs = Vec::new();
        let mut seen: HashSet<PairKey> = HashSet::new();
        let mut compared: u64 = 0;

        for (i, j) in Self::candidates(contacts) {
            compared += 1;
            let Some(axis) = predicate.evaluate(&contacts[i], &contacts[j]) else {
                continue;
            };
            let Some(pair) =
                DuplicatePair::new(contacts[i].id.clone(), contacts[j].id.clone(), axis)
            else {
                continue;
            };
            if seen.insert(pair.key()) {
                pairs.push(pair);
            }
        }

        ScanSummary { pairs, compared }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::detection::matcher::{ExactMatcher, NormalizedMatcher};
    use crate::services::detection::pairwise::PairwiseScanner;

    fn contact(id: &str, name: &str, phones: &[&str]) -> ContactRecord {
        ContactRecord::new(id, name, phones.iter().copied())
    }

    fn key_set(summary: &ScanSummary) -> BTreeSet<String> {
        summary
            .pairs
            .iter()
            .map(|pair| pair.key().as_str().to_string())
            .collect()
    }

    #[test]
    fn test_prunes_comparison_space() {
        // Ten contacts with unique names and phones: zero candidates.
        let contacts: Vec<_> = (0..10)
            .map(|i| contact(&i.to_string(), &format!("n{i}"), &[&format!("p{i}")]))
            .collect();
        let summary = BucketScanner::new().scan(&contacts, &ExactMatcher::new());
        assert_eq!(summary.compared, 0);
        assert!(summary.pairs.is_empty());
    }

    #[test]
    fn test_agrees_with_pairwise_on_exact_matcher() {
        let contacts = vec![
            contact("1", "Jane Doe", &["555-1111"]),
            contact("2", "Jane Doe", &[]),
            contact("3", "Mary", &["555-1111", "555-2222"]),
            contact("4", "", &[]),
            contact("5", "jane doe", &["555-2222"]),
        ];
        let predicate = ExactMatcher::new();
        let full = PairwiseScanner::new().scan(&contacts, &predicate);
        let bucketed = BucketScanner::new().scan(&contacts, &predicate);
        assert_eq!(key_set(&full), key_set(&bucketed));
        assert!(bucketed.compared <= full.compared);
    }

    #[test]
    fn test_agrees_with_pairwise_on_normalized_matcher() {
        let contacts = vec![
            contact("1", "  JANE doe ", &["(555) 1111"]),
            contact("2", "jane doe", &[]),
            contact("3", "Mary", &["555-1111"]),
        ];
        let predicate = NormalizedMatcher::default();
        let full = PairwiseScanner::new().scan(&contacts, &predicate);
        let bucketed = BucketScanner::new().scan(&contacts, &predicate);
        assert_eq!(key_set(&full), key_set(&bucketed));
    }

    #[test]
    fn test_raw_bucket_covers_digitless_phone_strings() {
        // "ext. office" normalizes to an empty phone, but the raw bucket
        // still pairs the two records for the exact matcher.
        let contacts = vec![
            contact("1", "A", &["ext. office"]),
            contact("2", "B", &["ext. office"]),
        ];
        let summary = BucketScanner::new().scan(&contacts, &ExactMatcher::new());
        assert_eq!(key_set(&summary).len(), 1);
    }

    #[test]
    fn test_blank_keys_never_bucket() {
        let contacts = vec![contact("1", "", &[""]), contact("2", "", &["  "])];
        let summary = BucketScanner::new().scan(&contacts, &ExactMatcher::new());
        assert_eq!(summary.compared, 0);
        assert!(summary.pairs.is_empty());
    }
}
