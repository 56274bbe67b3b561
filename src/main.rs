//! 3xd: simulate importing rows
//!
//! Parses the command line, lets a `config.json` / `config.yaml` override the
//! flags, then runs the import.

use anyhow::Result;

fn main() -> Result<()> {
    threexd::cli::run()
}
