//! CLI command implementations.
//!
//! This module provides the command-line interface for contact-dedup.
//! Each submodule implements a specific CLI command and returns its
//! rendered output; the binary owns the actual printing.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `scan` | Run duplicate detection over a snapshot file |
//! | `config` | Show the effective detection configuration |
//!
//! # Example Usage
//!
//! ```bash
//! # Suggest merges from an exported snapshot
//! contact-dedup scan contacts.json
//!
//! # Normalized matching with the bucketed engine, full outcome included
//! contact-dedup scan contacts.csv --strategy normalized --engine bucketed --stats
//! ```

mod config;
mod scan;

pub use config::cmd_config;
pub use scan::{ScanArgs, cmd_scan};
