use std::path::PathBuf;

use crate::error::{MineError, Result};

/// How itemset candidates are counted against the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountStrategy {
    /// Subset test of every candidate against every transaction, once per level.
    #[default]
    Rescan,
    /// Intersect per-token transaction-id lists built once at load time.
    TidList,
}

#[derive(Debug, Clone)]
pub struct MineConfig {
    pub min_support: f64,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Extra report holding only the level-1 survivors (itemset mining).
    pub level_one_path: Option<PathBuf>,
    pub count_strategy: CountStrategy,
}

impl Default for MineConfig {
    fn default() -> Self {
        Self {
            min_support: 0.01,
            input_path: PathBuf::from("transactions.txt"),
            output_path: PathBuf::from("patterns.txt"),
            level_one_path: None,
            count_strategy: CountStrategy::Rescan,
        }
    }
}

impl MineConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_level_one_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.level_one_path = Some(path.into());
        self
    }

    pub fn with_count_strategy(mut self, strategy: CountStrategy) -> Self {
        self.count_strategy = strategy;
        self
    }

    /// Rejects thresholds outside `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(MineError::InvalidConfig(format!(
                "min_support must be in (0, 1], got {}",
                self.min_support
            )));
        }
        Ok(())
    }
}
