use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{MineError, Result};
use crate::observer::MiningSummary;
use crate::storage::FrequentLevel;
use crate::support::Counted;

/// Receives the surviving candidates of each completed level, in order.
pub trait LevelSink {
    fn write_level(&mut self, level: usize, entries: &[(&str, usize)]) -> Result<()>;
}

/// Collects levels in memory; empty levels are not kept.
impl LevelSink for Vec<FrequentLevel> {
    fn write_level(&mut self, level: usize, entries: &[(&str, usize)]) -> Result<()> {
        if !entries.is_empty() {
            self.push(FrequentLevel::from_entries(level, entries));
        }
        Ok(())
    }
}

/// Hands one filtered level to `sink` and folds it into `summary`.
pub(crate) fn emit_level<S, V>(
    sink: &mut S,
    level: usize,
    frequent: &BTreeMap<String, V>,
    summary: &mut MiningSummary,
) -> Result<()>
where
    S: LevelSink + ?Sized,
    V: Counted,
{
    let entries: Vec<(&str, usize)> = frequent
        .iter()
        .map(|(key, value)| (key.as_str(), value.count()))
        .collect();
    sink.write_level(level, &entries)?;

    if !entries.is_empty() {
        summary.levels = level;
        summary.patterns += entries.len();
    }
    Ok(())
}

/// Writes `<count>:<pattern>` lines, flushing after every level.
pub struct ResultWriter<W: Write> {
    writer: W,
    path: PathBuf,
    lines_written: usize,
}

impl ResultWriter<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| MineError::Output {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> ResultWriter<W> {
    /// `path` only labels errors; the writer may be anything.
    pub fn new(writer: W, path: impl Into<PathBuf>) -> Self {
        Self { writer, path: path.into(), lines_written: 0 }
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_entries(&mut self, entries: &[(&str, usize)]) -> std::io::Result<()> {
        for (pattern, count) in entries {
            writeln!(self.writer, "{}:{}", count, pattern)?;
        }
        self.writer.flush()
    }
}

impl<W: Write> LevelSink for ResultWriter<W> {
    fn write_level(&mut self, _level: usize, entries: &[(&str, usize)]) -> Result<()> {
        self.write_entries(entries).map_err(|source| MineError::Output {
            path: self.path.clone(),
            source,
        })?;
        self.lines_written += entries.len();
        Ok(())
    }
}

/// Forwards every level to `all`, and level 1 additionally to `first`.
pub struct LevelOneReport<A, B> {
    pub all: A,
    pub first: B,
}

impl<A: LevelSink, B: LevelSink> LevelSink for LevelOneReport<A, B> {
    fn write_level(&mut self, level: usize, entries: &[(&str, usize)]) -> Result<()> {
        if level == 1 {
            self.first.write_level(level, entries)?;
        }
        self.all.write_level(level, entries)
    }
}
