//! Init command - write a default project config

use std::path::Path;

use content_bridge::config::BridgeConfig;
use content_bridge::output::{OperationResult, OutputMode};
use content_bridge::paths;

/// Write `.content-bridge.toml` with default settings into `dir`
pub fn init(dir: &Path, force: bool, output_mode: OutputMode) -> anyhow::Result<()> {
    let path = paths::project_config(dir);
    BridgeConfig::default().save(&path, force)?;

    OperationResult {
        success: true,
        message: format!("Created {}", paths::PROJECT_CONFIG),
    }
    .render(output_mode);
    Ok(())
}
