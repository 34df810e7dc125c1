use std::fmt;

use crate::error::UsageError;

/// A validated request: where the run directories live, which statistic to
/// pull out, and which runs to visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub prefix: String,
    pub stat: String,
    /// Run identifiers in the order rows are emitted. Never empty.
    pub counts: Vec<String>,
    pub on_missing: MissingFilePolicy,
}

impl Invocation {
    /// Builds an invocation from possibly absent positionals, reporting the
    /// first missing one.
    pub fn from_parts(
        prefix: Option<String>,
        stat: Option<String>,
        counts: Vec<String>,
    ) -> Result<Self, UsageError> {
        let prefix = prefix.ok_or(UsageError::MissingPrefix)?;
        let stat = stat.ok_or(UsageError::MissingStat)?;
        if counts.is_empty() {
            return Err(UsageError::MissingCounts);
        }
        Ok(Self {
            prefix,
            stat,
            counts,
            on_missing: MissingFilePolicy::default(),
        })
    }

    /// Replaces the policy applied to unreadable stats files.
    pub fn with_policy(mut self, on_missing: MissingFilePolicy) -> Self {
        self.on_missing = on_missing;
        self
    }
}

/// What to do when a run's stats file cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingFilePolicy {
    /// Stop at the first unreadable file.
    #[default]
    Abort,
    /// Log a warning, emit nothing for that run, and keep going.
    Skip,
}

/// One line of a stats file, split on ASCII whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatLine<'a> {
    pub key: &'a str,
    /// `None` when the line holds a key only.
    pub value: Option<&'a str>,
}

impl<'a> StatLine<'a> {
    /// Tokenises a line on ASCII whitespace runs. Blank lines have no key and
    /// yield `None`; tokens past the second are ignored.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_ascii_whitespace();
        let key = tokens.next()?;
        Some(Self {
            key,
            value: tokens.next(),
        })
    }

    /// Value to record when this line matches `stat`. A key-only line
    /// records an empty field so later columns stay aligned.
    pub fn value_for(&self, stat: &str) -> Option<&'a str> {
        (self.key == stat).then(|| self.value.unwrap_or(""))
    }
}

/// A count identifier followed by every value matched in its stats file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub count: String,
    pub values: Vec<String>,
}

impl OutputRow {
    /// Starts a row for `count` with no values yet.
    pub fn new(count: impl Into<String>) -> Self {
        Self {
            count: count.into(),
            values: Vec::new(),
        }
    }
}

impl fmt::Display for OutputRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.count)?;
        for value in &self.values {
            write!(f, ",{value}")?;
        }
        Ok(())
    }
}
