//! Command-line grammar for the `catalog` binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "catalog", version)]
#[command(about = "Savvy AI Catalog - a neutral reference for AI tools and terms")]
#[command(after_help = "Examples:
  catalog add \"Claude\" \"An AI assistant made by Anthropic\"
  catalog add \"TypeScript\" \"A typed superset of JavaScript\" --in-stack --pressure-tested
  catalog update \"Claude\" --website https://claude.ai
  catalog what \"Claude\"
  catalog list

Description words starting with '-' must follow a '--' separator:
  catalog add \"GPT\" costs -- -5% per month")]
pub struct Cli {
    /// Catalog file (defaults to ./data/catalog.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Absolute directory for rolling log files (logging is off without it)
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true, value_name = "LEVEL", requires = "log_dir")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Optional link fields shared by `add` and `update`.
#[derive(Debug, Clone, Default, Args)]
pub struct LinkArgs {
    /// Primary website URL
    #[arg(long, value_name = "URL")]
    pub website: Option<String>,

    /// Pricing page URL
    #[arg(long, value_name = "URL")]
    pub pricing: Option<String>,

    /// Affiliate program URL
    #[arg(long, value_name = "URL")]
    pub affiliate: Option<String>,

    /// API documentation URL
    #[arg(long, value_name = "URL")]
    pub api: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all entries
    List,

    /// Add a new entry
    Add {
        /// Entry name
        name: String,

        /// Plain-language description (remaining words are joined)
        #[arg(required = true)]
        description: Vec<String>,

        /// Mark as part of the current working setup
        #[arg(long)]
        in_stack: bool,

        /// Mark as used in real work with real stakes
        #[arg(long)]
        pressure_tested: bool,

        #[command(flatten)]
        links: LinkArgs,
    },

    /// Update fields of an existing entry
    Update {
        /// Entry name (case-insensitive)
        name: String,

        /// Replace the description
        #[arg(long, value_name = "TEXT")]
        description: Option<String>,

        /// Mark as part of the current working setup
        #[arg(long, conflicts_with = "not_in_stack")]
        in_stack: bool,

        /// Mark as no longer part of the current working setup
        #[arg(long)]
        not_in_stack: bool,

        /// Mark as used in real work with real stakes
        #[arg(long, conflicts_with = "not_pressure_tested")]
        pressure_tested: bool,

        /// Clear the pressure-tested mark
        #[arg(long)]
        not_pressure_tested: bool,

        #[command(flatten)]
        links: LinkArgs,
    },

    /// Look up an entry by name (case-insensitive)
    What {
        /// Entry name
        name: String,
    },
}
