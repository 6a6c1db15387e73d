//! Resolve command - run one query through the resolution pipeline

use content_bridge::adapters::{JsonDataset, StaticSource};
use content_bridge::config::BridgeConfig;
use content_bridge::core::ports::ItemSource;
use content_bridge::core::services::{MatchCase, Query, run_query};
use content_bridge::output::{OutputMode, ResolveReport};

use crate::cli::ResolveArgs;

/// Resolve the items to render for a taxonomy/term query
pub fn resolve(
    args: &ResolveArgs,
    config: &BridgeConfig,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let source: Box<dyn ItemSource> = match args.dataset.as_ref().or(config.dataset.as_ref()) {
        Some(path) => Box::new(JsonDataset::new(path)),
        None => Box::new(StaticSource::sample()),
    };

    let query = Query {
        tax: args.tax.clone(),
        term: args.term.clone(),
        limit: args.limit.clone(),
        fallback: args.fallback.unwrap_or(config.resolve.fallback),
    };
    let case = if args.case_insensitive {
        MatchCase::Insensitive
    } else {
        config.match_case()
    };

    let resolution = run_query(source.as_ref(), &query, &config.limit, case)?;
    ResolveReport::from(&resolution).render(output_mode);
    Ok(())
}
