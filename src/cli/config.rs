//! Config command: show the effective detection configuration.

use serde_json::json;

use crate::services::detection::DetectionConfig;
use crate::{Error, Result};

/// Renders the effective configuration (defaults plus environment) as
/// pretty JSON.
///
/// # Errors
///
/// Returns an error if the configuration cannot be rendered.
pub fn cmd_config() -> Result<String> {
    let config = DetectionConfig::from_env();
    let value = json!({
        "enabled": config.enabled,
        "snapshot_limit": config.snapshot_limit,
        "strategy": config.strategy.as_str(),
        "engine": config.engine.as_str(),
        "workers": config.workers.get(),
        "min_phone_digits": config.min_phone_digits,
    });
    serde_json::to_string_pretty(&value).map_err(|e| Error::OperationFailed {
        operation: "render_config".to_string(),
        cause: e.to_string(),
    })
}
