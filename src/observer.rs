use tracing::{debug, info};

/// Progress hook for the mining loops. Every method defaults to a no-op.
pub trait MiningObserver {
    fn corpus_loaded(&mut self, _transactions: usize) {}

    /// `level` candidates were produced, before any support filtering.
    fn candidates_generated(&mut self, _level: usize, _candidates: usize) {}

    fn level_filtered(&mut self, _level: usize, _before: usize, _after: usize) {}

    fn finished(&mut self, _summary: &MiningSummary) {}
}

/// Totals reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MiningSummary {
    pub transactions: usize,
    /// Deepest level with at least one frequent pattern.
    pub levels: usize,
    pub patterns: usize,
}

#[derive(Debug, Default)]
pub struct NoopObserver;

impl MiningObserver for NoopObserver {}

/// Reports progress as `tracing` events.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl MiningObserver for TracingObserver {
    fn corpus_loaded(&mut self, transactions: usize) {
        info!(transactions, "corpus loaded");
    }

    fn candidates_generated(&mut self, level: usize, candidates: usize) {
        debug!(level, candidates, "generated candidates");
    }

    fn level_filtered(&mut self, level: usize, before: usize, after: usize) {
        info!(level, before, after, "applied minimum support");
    }

    fn finished(&mut self, summary: &MiningSummary) {
        info!(
            transactions = summary.transactions,
            levels = summary.levels,
            patterns = summary.patterns,
            "mining completed"
        );
    }
}
