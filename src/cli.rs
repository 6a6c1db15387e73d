//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use content_bridge::config::BridgeConfig;
use content_bridge::core::models::FallbackMode;
use content_bridge::output::OutputMode;

/// content-bridge - Taxonomy-matched content with a latest-items fallback
#[derive(Parser, Debug)]
#[command(
    name = "content-bridge",
    version,
    about = "Resolve taxonomy-matched content with a latest-items fallback",
    long_about = "Resolve which content items to render for a taxonomy/term query.\n\n\
                  Items matching the query are shown when there are any.\n\
                  Otherwise the fallback mode decides: the latest items, or nothing."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of the discovered one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the items to render for a taxonomy/term query
    Resolve(ResolveArgs),

    /// Sanitize a raw limit value
    Limit(LimitArgs),

    /// Write a default .content-bridge.toml in the current directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Arguments for `resolve`
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Taxonomy key
    #[arg(long, default_value = "category")]
    pub tax: String,

    /// Term key within the taxonomy
    #[arg(long, default_value = "")]
    pub term: String,

    /// Maximum number of items (raw; sanitized into the configured bounds)
    #[arg(short, long, allow_hyphen_values = true)]
    pub limit: Option<String>,

    /// Fallback when nothing matches: latest, none
    #[arg(short, long)]
    pub fallback: Option<FallbackMode>,

    /// JSON dataset file (defaults to config, then the built-in sample)
    #[arg(short, long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Compare taxonomy and term keys case-insensitively
    #[arg(long)]
    pub case_insensitive: bool,
}

/// Arguments for `limit`
#[derive(Args, Debug, Clone)]
pub struct LimitArgs {
    /// Raw limit text
    #[arg(allow_hyphen_values = true)]
    pub raw: Option<String>,

    /// Lower bound (defaults to config)
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<i64>,

    /// Upper bound (defaults to config)
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<i64>,

    /// Value for unparseable input (defaults to config)
    #[arg(long, allow_hyphen_values = true)]
    pub default: Option<i64>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let cwd = std::env::current_dir()?;
    let config = BridgeConfig::load(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Some(Command::Resolve(args)) => commands::resolve(&args, &config, output_mode),
        Some(Command::Limit(args)) => commands::limit(&args, &config, output_mode),
        Some(Command::Init { force }) => commands::init(&cwd, force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("content-bridge v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("content-bridge v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'content-bridge --help' for usage");
                println!("Run 'content-bridge resolve --term <term>' to resolve items");
            }
            Ok(())
        },
    }
}
