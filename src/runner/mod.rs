//! Import runner
//!
//! Simulates importing a fixed number of rows, writing a start banner,
//! optional progress lines and a completion banner.

use crate::domain::RunConfig;
use std::io::{self, Write};

/// Rows imported by every run.
pub const ROW_COUNT: u32 = 100;

/// A progress line is printed for every row index divisible by this.
pub const PROGRESS_INTERVAL: u32 = 10;

const ALL_PREFIX: &str = "[All]";

pub fn prefix(config: &RunConfig) -> &'static str {
    if config.all {
        ALL_PREFIX
    } else {
        ""
    }
}

/// Run the import, writing every line to `out`.
///
/// The prefix is always followed by a space, so lines start with a space when
/// `all` is off.
pub fn run_import<W: Write>(out: &mut W, config: &RunConfig) -> io::Result<()> {
    let prefix = prefix(config);
    tracing::debug!(all = config.all, verbose = config.verbose, "Starting import");

    writeln!(out, "{} Import begins...", prefix)?;
    for row in 1..ROW_COUNT {
        if config.verbose && row % PROGRESS_INTERVAL == 0 {
            writeln!(out, "{} Outputting {} row..", prefix, row)?;
        }
    }
    writeln!(out, "{} {} rows have been imported", prefix, ROW_COUNT)?;

    out.flush()
}
