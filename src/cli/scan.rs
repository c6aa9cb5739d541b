//! Scan command: detection over a snapshot file.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Args;

use crate::services::detection::{
    DetectionConfig, DetectionService, EngineKind, StrategyKind,
};
use crate::store::{ContactStore, SnapshotFileStore};
use crate::{Error, Result};

/// Arguments for the scan command.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Snapshot file to scan (.json or .csv).
    pub input: PathBuf,

    /// Matching strategy: exact or normalized.
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Scan engine: pairwise or bucketed.
    #[arg(short, long)]
    pub engine: Option<String>,

    /// Maximum number of contacts to scan ("none" removes the cap).
    #[arg(short, long)]
    pub limit: Option<String>,

    /// Worker threads for the pairwise scan.
    #[arg(short, long)]
    pub workers: Option<NonZeroUsize>,

    /// Emit the full outcome (scan stats) instead of just the pair list.
    #[arg(long)]
    pub stats: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

impl ScanArgs {
    /// Applies CLI overrides on top of the environment configuration.
    fn resolve_config(&self) -> Result<DetectionConfig> {
        let mut config = DetectionConfig::from_env();

        if let Some(strategy) = &self.strategy {
            config = config.with_strategy(StrategyKind::parse(strategy).ok_or_else(|| {
                Error::InvalidInput(format!("unknown strategy '{strategy}'"))
            })?);
        }
        if let Some(engine) = &self.engine {
            config = config.with_engine(EngineKind::parse(engine).ok_or_else(|| {
                Error::InvalidInput(format!("unknown engine '{engine}'"))
            })?);
        }
        if let Some(limit) = &self.limit {
            let parsed = if limit.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(limit.parse().map_err(|_| {
                    Error::InvalidInput(format!("invalid limit '{limit}'"))
                })?)
            };
            config = config.with_snapshot_limit(parsed);
        }
        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }

        Ok(config)
    }
}

/// Runs detection over the snapshot file and renders the result as JSON.
///
/// The store fetch is bounded by the configured snapshot cap, matching
/// [`DetectionService::suggest`]. With `--stats` the full file is read
/// instead, so the `truncated` flag reflects the actual snapshot size.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read or an argument cannot
/// be parsed.
pub fn cmd_scan(args: &ScanArgs) -> Result<String> {
    let config = args.resolve_config()?;
    let store = SnapshotFileStore::new(&args.input);
    let service = DetectionService::new(config.clone());

    let fetch_limit = if args.stats {
        None
    } else {
        config.snapshot_limit
    };
    let contacts = store.snapshot(fetch_limit)?;
    let outcome = service.detect(&contacts);

    let rendered = if args.stats {
        if args.pretty {
            serde_json::to_string_pretty(&outcome)
        } else {
            serde_json::to_string(&outcome)
        }
    } else if args.pretty {
        serde_json::to_string_pretty(&outcome.pairs)
    } else {
        serde_json::to_string(&outcome.pairs)
    };

    rendered.map_err(|e| Error::OperationFailed {
        operation: "render_outcome".to_string(),
        cause: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn scan_args(input: PathBuf) -> ScanArgs {
        ScanArgs {
            input,
            strategy: None,
            engine: None,
            limit: None,
            workers: None,
            stats: false,
            pretty: false,
        }
    }

    fn snapshot_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(
            br#"[
                {"id":"1","displayName":"Jane Doe","phones":[]},
                {"id":"2","displayName":"Jane Doe","phones":[]}
            ]"#,
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_scan_outputs_pairs() {
        let file = snapshot_file();
        let output = cmd_scan(&scan_args(file.path().to_path_buf())).unwrap();
        assert!(output.contains(r#""idA":"1""#));
        assert!(output.contains(r#""idB":"2""#));
    }

    #[test]
    fn test_scan_stats_includes_bookkeeping() {
        let file = snapshot_file();
        let mut args = scan_args(file.path().to_path_buf());
        args.stats = true;
        let output = cmd_scan(&args).unwrap();
        assert!(output.contains(r#""scanned":2"#));
        assert!(output.contains(r#""truncated":false"#));
    }

    #[test]
    fn test_scan_rejects_unknown_strategy() {
        let file = snapshot_file();
        let mut args = scan_args(file.path().to_path_buf());
        args.strategy = Some("fuzzy".to_string());
        let err = cmd_scan(&args).unwrap_err();
        assert!(err.to_string().contains("unknown strategy"));
    }

    #[test]
    fn test_scan_limit_none_removes_cap() {
        let file = snapshot_file();
        let mut args = scan_args(file.path().to_path_buf());
        args.limit = Some("none".to_string());
        assert!(args.resolve_config().unwrap().snapshot_limit.is_none());
    }

    #[test]
    fn test_scan_fetch_is_bounded_by_limit() {
        // The malformed third row is past the cap; a bounded CSV fetch
        // never reads it.
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"id,displayName,phones\n1,Jane Doe,\n2,Jane Doe,\nbroken\n")
            .unwrap();
        file.flush().unwrap();

        let mut args = scan_args(file.path().to_path_buf());
        args.limit = Some("2".to_string());
        let output = cmd_scan(&args).unwrap();
        assert!(output.contains(r#""idA":"1""#));

        args.stats = true;
        assert!(cmd_scan(&args).unwrap_err().to_string().contains("snapshot_csv_parse"));
    }

    #[test]
    fn test_scan_stats_reports_truncation() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"id,displayName,phones\n1,A,\n2,B,\n3,C,\n")
            .unwrap();
        file.flush().unwrap();

        let mut args = scan_args(file.path().to_path_buf());
        args.limit = Some("2".to_string());
        args.stats = true;
        let output = cmd_scan(&args).unwrap();
        assert!(output.contains(r#""scanned":2"#));
        assert!(output.contains(r#""truncated":true"#));
    }

    #[test]
    fn test_scan_rejects_bad_limit() {
        let file = snapshot_file();
        let mut args = scan_args(file.path().to_path_buf());
        args.limit = Some("lots".to_string());
        assert!(args.resolve_config().is_err());
    }
}
