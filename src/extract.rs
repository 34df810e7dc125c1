use std::iter::FusedIterator;

use tracing::{info, warn};

use crate::error::{ExtractError, Result};
use crate::io::stats_file;
use crate::model::{Invocation, MissingFilePolicy, OutputRow};

/// Starts extracting rows for `invocation`.
///
/// Nothing is read until the returned iterator is advanced; each call to
/// `next` reads exactly one stats file.
pub fn run(invocation: &Invocation) -> Rows<'_> {
    info!(
        prefix = %invocation.prefix,
        stat = %invocation.stat,
        count_total = invocation.counts.len(),
        policy = ?invocation.on_missing,
        "extracting statistic"
    );
    Rows {
        invocation,
        next_index: 0,
        failed: false,
    }
}

/// Lazy sequence of rows, one per count, in the order the counts were given.
///
/// Under [`MissingFilePolicy::Abort`] the first read failure is yielded as an
/// error and the sequence ends there. Under [`MissingFilePolicy::Skip`]
/// unreadable files are logged and produce no row.
#[derive(Debug)]
pub struct Rows<'a> {
    invocation: &'a Invocation,
    next_index: usize,
    failed: bool,
}

impl Iterator for Rows<'_> {
    type Item = Result<OutputRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let invocation = self.invocation;
        let Invocation {
            prefix,
            stat,
            counts,
            on_missing,
        } = invocation;

        while let Some(count) = counts.get(self.next_index) {
            self.next_index += 1;
            match stats_file::read_row(prefix, stat, count) {
                Ok(row) => return Some(Ok(row)),
                Err(ExtractError::StatsFile { path, source })
                    if *on_missing == MissingFilePolicy::Skip =>
                {
                    warn!(path = %path.display(), error = %source, "skipping unreadable stats file");
                }
                Err(error) => {
                    self.failed = true;
                    return Some(Err(error));
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.invocation.counts.len() - self.next_index;
        (0, Some(remaining))
    }
}

impl FusedIterator for Rows<'_> {}
