//! Limit command - show how a raw limit is sanitized

use content_bridge::config::BridgeConfig;
use content_bridge::core::models::LimitBounds;
use content_bridge::output::{LimitReport, OutputMode};

use crate::cli::LimitArgs;

/// Sanitize a raw limit against the configured (or overridden) bounds
pub fn limit(
    args: &LimitArgs,
    config: &BridgeConfig,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let bounds = LimitBounds::new(
        args.min.unwrap_or_else(|| config.limit.min()),
        args.max.unwrap_or_else(|| config.limit.max()),
        args.default.unwrap_or_else(|| config.limit.default_limit()),
    )?;

    let report = LimitReport {
        raw: args.raw.clone(),
        limit: bounds.sanitize(args.raw.as_deref()),
        min: bounds.min(),
        max: bounds.max(),
        default: bounds.default_limit(),
    };
    report.render(output_mode);
    Ok(())
}
