//! `import` and `sync` command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io;

use crate::config::{self, ConfigSource};
use crate::domain::RunConfig;
use crate::runner::run_import;

#[derive(Args, Debug, Clone, Default)]
pub struct SyncArgs {
    /// Display the [All] prefix
    #[arg(short, long)]
    pub all: bool,
}

/// Pick the effective config: a config file, when present, replaces the CLI values.
pub fn effective_config(cli_config: RunConfig, source: &dyn ConfigSource) -> Result<RunConfig> {
    let from_file = config::resolve(source).context("Failed to load configuration")?;
    Ok(from_file.unwrap_or(cli_config))
}

pub fn run(cli_config: RunConfig, source: &dyn ConfigSource) -> Result<()> {
    let run_config = effective_config(cli_config, source)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_import(&mut out, &run_config).context("Failed writing import output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DirSource;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_values_used_without_config() {
        let tmp = TempDir::new().expect("tmp");
        let cli = RunConfig::new(true, true);
        assert_eq!(effective_config(cli, &DirSource::new(tmp.path())).expect("config"), cli);
    }

    #[test]
    fn test_config_file_replaces_cli_values() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("config.yaml"), "verbose: true\n").expect("write");

        let resolved =
            effective_config(RunConfig::new(true, false), &DirSource::new(tmp.path())).expect("config");
        assert_eq!(resolved, RunConfig::new(false, true));
    }

    #[test]
    fn test_broken_config_is_reported_with_context() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("config.json"), "not json").expect("write");

        let err = effective_config(RunConfig::default(), &DirSource::new(tmp.path()))
            .expect_err("broken config");
        assert_eq!(err.to_string(), "Failed to load configuration");
        assert!(format!("{err:#}").contains("config.json"));
    }
}
