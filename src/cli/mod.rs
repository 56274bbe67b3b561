//! Command-line interface for 3xd
//!
//! Provides `man`, `import` and `sync` subcommands plus a global `--verbose` flag.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::DirSource;
use crate::domain::RunConfig;

pub mod import;
pub mod man;

/// Import 100 rows, optionally configured from config.json or config.yaml
#[derive(Parser, Debug)]
#[command(name = "3xd")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Display verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory searched for config.json / config.yaml (defaults to the working directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show man
    Man,

    /// Import 100 rows
    Import,

    /// Import 100 rows with an optional sync
    Sync(import::SyncArgs),
}

impl Cli {
    /// Settings derived from the command line alone, or `None` when no import
    /// should run.
    pub fn run_config(&self) -> Option<RunConfig> {
        match &self.command {
            Some(Commands::Import) => Some(RunConfig::new(false, self.verbose)),
            Some(Commands::Sync(args)) => Some(RunConfig::new(args.all, self.verbose)),
            Some(Commands::Man) | None => None,
        }
    }

    fn config_source(&self) -> Result<DirSource> {
        match &self.config_dir {
            Some(dir) => Ok(DirSource::new(dir)),
            None => DirSource::current_dir().context("Failed to determine working directory"),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to INFO.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if let Some(cli_config) = cli.run_config() {
        let source = cli.config_source()?;
        return import::run(cli_config, &source);
    }

    if matches!(cli.command, Some(Commands::Man)) {
        man::run();
    } else {
        println!("{}", Cli::command().render_help());
    }
    Ok(())
}
