use std::fs;
use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::error::{ExtractError, Result};
use crate::model::{OutputRow, StatLine};

/// Name of the file read from every run directory.
pub const STATS_FILE_NAME: &str = "stats.txt";

/// Builds `{prefix}{count}/stats.txt`. The prefix is concatenated as a plain
/// string, so `runs/r` with count `3` resolves to `runs/r3/stats.txt`.
pub fn stats_path(prefix: &str, count: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}{count}/{STATS_FILE_NAME}"))
}

/// Reads the stats file for `count` and collects every value recorded under
/// `stat`, in line order. The file is closed before this returns.
#[instrument(level = "debug", skip(prefix), fields(path = tracing::field::Empty))]
pub fn read_row(prefix: &str, stat: &str, count: &str) -> Result<OutputRow> {
    let path = stats_path(prefix, count);
    tracing::Span::current().record("path", tracing::field::display(path.display()));

    let content = fs::read_to_string(&path).map_err(|source| ExtractError::StatsFile {
        path: path.clone(),
        source,
    })?;

    let mut row = OutputRow::new(count);
    row.values = collect_values(&content, stat);
    debug!(matches = row.values.len(), "scanned stats file");
    Ok(row)
}

/// Pulls the values for `stat` out of a whole stats file.
pub fn collect_values(content: &str, stat: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(StatLine::parse)
        .filter_map(|line| line.value_for(stat))
        .map(str::to_owned)
        .collect()
}
