//! Detection configuration.
//!
//! This module defines configuration for the detection service: the
//! matching strategy, the scan engine, worker count for the partitioned
//! scan, and the snapshot cap.

use std::num::NonZeroUsize;

use super::matcher::NormalizedMatcher;

/// Matching strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Exact, unnormalized comparison. The documented baseline.
    #[default]
    Exact,
    /// Case-, whitespace-, and phone-formatting-tolerant comparison.
    Normalized,
}

impl StrategyKind {
    /// Parses a strategy name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "exact" => Some(Self::Exact),
            "normalized" => Some(Self::Normalized),
            _ => None,
        }
    }

    /// Returns the canonical strategy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Normalized => "normalized",
        }
    }
}

/// Scan engine selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineKind {
    /// Full O(n²) pairwise scan.
    #[default]
    Pairwise,
    /// Bucketed pre-filter with identical observable results for the
    /// built-in strategies.
    Bucketed,
}

impl EngineKind {
    /// Parses an engine name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pairwise" => Some(Self::Pairwise),
            "bucketed" => Some(Self::Bucketed),
            _ => None,
        }
    }

    /// Returns the canonical engine name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pairwise => "pairwise",
            Self::Bucketed => "bucketed",
        }
    }
}

/// Configuration for the detection service.
///
/// # Environment Variables
///
/// | Variable | Type | Default | Description |
/// |----------|------|---------|-------------|
/// | `CONTACT_DEDUP_ENABLED` | bool | `true` | Enable detection |
/// | `CONTACT_DEDUP_SNAPSHOT_LIMIT` | usize or `none` | `1000` | Max contacts scanned |
/// | `CONTACT_DEDUP_STRATEGY` | string | `exact` | `exact` or `normalized` |
/// | `CONTACT_DEDUP_ENGINE` | string | `pairwise` | `pairwise` or `bucketed` |
/// | `CONTACT_DEDUP_WORKERS` | usize | `1` | Threads for the pairwise scan |
/// | `CONTACT_DEDUP_MIN_PHONE_DIGITS` | usize | `4` | Digit floor for normalized phones |
///
/// # Snapshot cap
///
/// The quadratic scan is unbounded in input size, so the service cuts the
/// snapshot down to `snapshot_limit` records before scanning and reports
/// the cut via `DetectionOutcome::truncated`. The default of 1000 mirrors
/// the page size the source address-book fetches used; set it to `None`
/// (env value `none`) to scan everything and accept the cost.
///
/// # Example
///
/// ```rust
/// use contact_dedup::DetectionConfig;
///
/// let config = DetectionConfig::default();
/// assert!(config.enabled);
/// assert_eq!(config.snapshot_limit, Some(1000));
/// ```
#[derive(Debug, Clone)]
pub struct DetectionConfig {
    /// Enable/disable detection entirely.
    pub enabled: bool,

    /// Maximum number of snapshot records scanned; `None` removes the cap.
    pub snapshot_limit: Option<usize>,

    /// Which match predicate to build.
    pub strategy: StrategyKind,

    /// Which scan engine to build.
    pub engine: EngineKind,

    /// Worker threads for the pairwise scan. `1` keeps it serial.
    pub workers: NonZeroUsize,

    /// Minimum digit count for a phone number to participate in
    /// normalized matching.
    pub min_phone_digits: usize,
}

impl DetectionConfig {
    /// Default snapshot cap, matching the source page size.
    pub const DEFAULT_SNAPSHOT_LIMIT: usize = 1000;

    /// Creates a new configuration from environment variables.
    ///
    /// Falls back to defaults for any unset or unparsable variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let enabled = std::env::var("CONTACT_DEDUP_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(defaults.enabled);

        let snapshot_limit = std::env::var("CONTACT_DEDUP_SNAPSHOT_LIMIT").map_or(
            defaults.snapshot_limit,
            |v| {
                if v.eq_ignore_ascii_case("none") {
                    None
                } else {
                    v.parse().ok().or(defaults.snapshot_limit)
                }
            },
        );

        let strategy = std::env::var("CONTACT_DEDUP_STRATEGY")
            .ok()
            .and_then(|v| StrategyKind::parse(&v))
            .unwrap_or(defaults.strategy);

        let engine = std::env::var("CONTACT_DEDUP_ENGINE")
            .ok()
            .and_then(|v| EngineKind::parse(&v))
            .unwrap_or(defaults.engine);

        let workers = std::env::var("CONTACT_DEDUP_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroUsize::new)
            .unwrap_or(defaults.workers);

        let min_phone_digits = std::env::var("CONTACT_DEDUP_MIN_PHONE_DIGITS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.min_phone_digits);

        Self {
            enabled,
            snapshot_limit,
            strategy,
            engine,
            workers,
            min_phone_digits,
        }
    }

    /// Builder method to set enabled state.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder method to set the snapshot cap.
    #[must_use]
    pub const fn with_snapshot_limit(mut self, limit: Option<usize>) -> Self {
        self.snapshot_limit = limit;
        self
    }

    /// Builder method to set the matching strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder method to set the scan engine.
    #[must_use]
    pub const fn with_engine(mut self, engine: EngineKind) -> Self {
        self.engine = engine;
        self
    }

    /// Builder method to set the worker count.
    #[must_use]
    pub const fn with_workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = workers;
        self
    }

    /// Builder method to set the phone digit floor.
    #[must_use]
    pub const fn with_min_phone_digits(mut self, digits: usize) -> Self {
        self.min_phone_digits = digits;
        self
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            snapshot_limit: Some(Self::DEFAULT_SNAPSHOT_LIMIT),
            strategy: StrategyKind::Exact,
            engine: EngineKind::Pairwise,
            workers: NonZeroUsize::MIN,
            min_phone_digits: NormalizedMatcher::DEFAULT_MIN_PHONE_DIGITS,
        }
    }
}
