use super::projection::{extend_candidates, project_level_one};
use crate::config::MineConfig;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::observer::{MiningObserver, MiningSummary, NoopObserver};
use crate::output::{emit_level, LevelSink};
use crate::storage::FrequentLevel;
use crate::support::into_frequent;

/// Sequential pattern mining over space-separated word transactions. Only
/// contiguous word runs are discovered; each pass extends the survivors of
/// the previous one by exactly one word.
pub fn mine_sequences<S, O>(
    corpus: &Corpus,
    config: &MineConfig,
    sink: &mut S,
    observer: &mut O,
) -> Result<MiningSummary>
where
    S: LevelSink + ?Sized,
    O: MiningObserver + ?Sized,
{
    config.validate()?;

    let total = corpus.len();
    let min_support = config.min_support;
    observer.corpus_loaded(total);
    let mut summary = MiningSummary { transactions: total, ..MiningSummary::default() };

    let mut level = 1;
    let candidates = project_level_one(corpus);
    observer.candidates_generated(level, candidates.len());
    let before = candidates.len();
    let mut frequent = into_frequent(candidates, total, min_support);
    observer.level_filtered(level, before, frequent.len());
    emit_level(sink, level, &frequent, &mut summary)?;

    loop {
        let candidates = extend_candidates(&frequent, corpus);
        level += 1;
        observer.candidates_generated(level, candidates.len());
        if candidates.is_empty() {
            break;
        }

        let before = candidates.len();
        frequent = into_frequent(candidates, total, min_support);
        observer.level_filtered(level, before, frequent.len());
        emit_level(sink, level, &frequent, &mut summary)?;
    }

    observer.finished(&summary);
    Ok(summary)
}

pub fn prefix_span(corpus: &Corpus, min_support: f64) -> Result<Vec<FrequentLevel>> {
    let config = MineConfig::default().with_min_support(min_support);
    let mut levels = Vec::new();
    mine_sequences(corpus, &config, &mut levels, &mut NoopObserver)?;
    Ok(levels)
}
