use super::builder::{count_level_one, itemset_transactions, TidIndex};
use super::itemset::Itemset;
use super::join::generate_candidates;
use super::Candidates;
use crate::config::{CountStrategy, MineConfig};
use crate::corpus::Corpus;
use crate::error::Result;
use crate::observer::{MiningObserver, MiningSummary, NoopObserver};
use crate::output::{emit_level, LevelSink};
use crate::storage::FrequentLevel;
use crate::support::into_frequent;

/// Adds 1 to a candidate for every transaction containing all of its items.
pub fn count_support(candidates: &mut Candidates, transactions: &[Itemset]) {
    let mut parsed: Vec<(Itemset, &mut usize)> = candidates
        .iter_mut()
        .map(|(key, count)| (Itemset::parse(key), count))
        .collect();

    for transaction in transactions {
        for (itemset, count) in parsed.iter_mut() {
            if itemset.is_subset_of(transaction) {
                **count += 1;
            }
        }
    }
}

/// Same counts as [`count_support`], answered from the tid-list index.
pub fn count_support_indexed(candidates: &mut Candidates, index: &TidIndex) {
    for (key, count) in candidates.iter_mut() {
        *count += index.support_count(&Itemset::parse(key));
    }
}

/// Level-wise itemset mining. Every level's survivors go to `sink` before the
/// next level is generated; the loop stops once no candidates can be joined.
pub fn mine_itemsets<S, O>(
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

    let transactions = itemset_transactions(corpus);
    let index = match config.count_strategy {
        CountStrategy::TidList => Some(TidIndex::build(&transactions)),
        CountStrategy::Rescan => None,
    };
    let mut summary = MiningSummary { transactions: total, ..MiningSummary::default() };

    let mut level = 1;
    let candidates = count_level_one(&transactions);
    observer.candidates_generated(level, candidates.len());
    let before = candidates.len();
    let mut frequent = into_frequent(candidates, total, min_support);
    observer.level_filtered(level, before, frequent.len());
    emit_level(sink, level, &frequent, &mut summary)?;

    loop {
        let mut candidates = generate_candidates(&frequent);
        level += 1;
        observer.candidates_generated(level, candidates.len());
        if candidates.is_empty() {
            break;
        }

        match &index {
            Some(index) => count_support_indexed(&mut candidates, index),
            None => count_support(&mut candidates, &transactions),
        }

        let before = candidates.len();
        frequent = into_frequent(candidates, total, min_support);
        observer.level_filtered(level, before, frequent.len());
        emit_level(sink, level, &frequent, &mut summary)?;
    }

    observer.finished(&summary);
    Ok(summary)
}

/// Mines every frequent itemset into memory, one [`FrequentLevel`] per
/// non-empty level.
pub fn apriori(corpus: &Corpus, min_support: f64) -> Result<Vec<FrequentLevel>> {
    let config = MineConfig::default().with_min_support(min_support);
    let mut levels = Vec::new();
    mine_itemsets(corpus, &config, &mut levels, &mut NoopObserver)?;
    Ok(levels)
}
