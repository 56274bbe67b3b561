//! threexd: a row-import simulator
//!
//! The binary is a thin wrapper over [`cli::run`]. Config resolution and the
//! import runner are usable on their own.

pub mod cli;
pub mod config;
pub mod domain;
pub mod runner;

pub use config::{resolve, ConfigError, ConfigSource, DirSource};
pub use domain::{ConfigFormat, RunConfig};
pub use runner::run_import;
