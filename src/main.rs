//! Scaffold CLI - create projects from templates by token substitution
//!
//! Usage: scaffold [--json] [-v...] [--color WHEN] [--config PATH] <COMMAND>
//!
//! Commands:
//!   new     Create a new project from the template repository
//!   apply   Apply substitution rules to an existing tree
//!   config  Print the resolved configuration

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scaffold::config::Config;
use scaffold::presentation::{Cli, Commands};
use scaffold::ui::context::UiContext;

fn init_tracing(ui: &UiContext) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_env("SCAFFOLD_LOG")
        .unwrap_or_else(|_| format!("scaffold={}", ui.verbosity.log_filter()).into());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(ui.color)
        .with_writer(std::io::stderr);

    // Ignore a second init (tests driving main twice)
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let loaded = Config::discover(cli.config.as_deref(), &cwd)?;
    for warning in &loaded.warnings {
        eprintln!("Warning: {}", warning);
    }

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);
    init_tracing(&ui);

    match cli.command {
        Commands::New {
            project_name,
            package,
            repo,
            dir,
            keep_history,
        } => commands::cmd_new(
            &project_name,
            package.as_deref(),
            repo.as_deref(),
            &dir,
            keep_history,
            &loaded.config,
            &ui,
        ),
        Commands::Apply {
            root,
            rules,
            package_rules,
            extensions,
            source_roots,
        } => commands::cmd_apply(
            &root,
            &rules,
            &package_rules,
            extensions.as_deref(),
            source_roots.as_deref(),
            &loaded.config,
            &ui,
        ),
        Commands::Config => commands::cmd_config(&loaded, &ui),
    }
}
