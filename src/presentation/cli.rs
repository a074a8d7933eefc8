//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Plain `--rule` values always run before `--package-rule` values

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Scaffold - create projects from templates by token substitution
#[derive(Parser, Debug)]
#[command(name = "scaffold")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ./scaffold.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project from the template repository
    New {
        /// Name of the project (capitalized in code, lower-cased for the directory)
        #[arg(long = "project-name", value_name = "NAME")]
        project_name: String,

        /// Package for the generated code (default: <prefix>.<directory>)
        #[arg(long, value_name = "PKG")]
        package: Option<String>,

        /// Template repository URL or local directory
        #[arg(long, value_name = "URL")]
        repo: Option<String>,

        /// Directory to create the project in
        #[arg(long, default_value = ".", value_name = "PARENT")]
        dir: PathBuf,

        /// Keep the template's version-control history
        #[arg(long)]
        keep_history: bool,
    },

    /// Apply substitution rules to an existing tree
    Apply {
        /// Root of the tree to rewrite
        root: PathBuf,

        /// Plain token rule (repeatable)
        #[arg(long = "rule", value_name = "OLD=NEW")]
        rules: Vec<String>,

        /// Package rule that also relocates source directories (repeatable)
        #[arg(long = "package-rule", value_name = "OLD=NEW")]
        package_rules: Vec<String>,

        /// Comma-separated file suffixes whose content is rewritten
        #[arg(long, value_name = "LIST")]
        extensions: Option<String>,

        /// Comma-separated source root directory names
        #[arg(long, value_name = "LIST")]
        source_roots: Option<String>,
    },

    /// Print the resolved configuration
    Config,
}
