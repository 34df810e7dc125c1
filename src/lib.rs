//! Core library for the `extract` command line application.
//!
//! The library pulls a single statistic out of a series of per-run
//! `stats.txt` files and turns it into comma separated rows. File access lives
//! under [`io`], the plain data types in [`model`], and the row producing
//! iterator in [`extract`]. The binary only parses arguments and prints.

pub mod error;
pub mod extract;
pub mod io;
pub mod logging;
pub mod model;

pub use error::{ExtractError, Result, UsageError};
pub use extract::{Rows, run};
pub use model::{Invocation, MissingFilePolicy, OutputRow, StatLine};
