use std::collections::{BTreeMap, HashMap, HashSet};

use crate::corpus::{Corpus, WordRef, ITEM_DELIMITER};
use crate::support::Counted;

/// A word sequence with its support and projected database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceCandidate {
    /// Distinct transactions containing the sequence as a contiguous run.
    pub count: usize,
    /// For each match, the word right after it. Kept in transaction order.
    pub projection: Vec<WordRef>,
}

impl Counted for SequenceCandidate {
    fn count(&self) -> usize {
        self.count
    }
}

/// Sequence key (`w1;w2;...`) -> candidate.
pub type SequenceCandidates = BTreeMap<String, SequenceCandidate>;

/// Single-word candidates. A word counts once per transaction, but every
/// occurrence contributes the following word to its projection.
pub fn project_level_one(corpus: &Corpus) -> SequenceCandidates {
    let mut candidates = SequenceCandidates::new();

    for (tx, _) in corpus.transactions() {
        let words = corpus.words(tx);
        let mut counted: HashSet<&str> = HashSet::new();

        for (idx, word) in words.iter().enumerate() {
            let Some(text) = corpus.resolve(word) else {
                continue;
            };
            let candidate = candidates.entry(text.to_owned()).or_default();
            if let Some(next) = words.get(idx + 1) {
                candidate.projection.push(*next);
            }
            if counted.insert(text) {
                candidate.count += 1;
            }
        }
    }

    candidates
}

/// Grows every candidate by the word recorded in its projection. Support of
/// the extended sequence counts transactions, not matches: the map of the
/// last transaction that incremented each sequence lives only for this call.
pub fn extend_candidates(candidates: &SequenceCandidates, corpus: &Corpus) -> SequenceCandidates {
    let mut extended = SequenceCandidates::new();
    let mut last_counted: HashMap<String, usize> = HashMap::new();

    for (key, candidate) in candidates {
        for word in &candidate.projection {
            let Some(next) = corpus.resolve(word).filter(|text| !text.is_empty()) else {
                continue;
            };

            let sequence = format!("{key}{ITEM_DELIMITER}{next}");
            let entry = extended.entry(sequence.clone()).or_default();
            if last_counted.get(&sequence) != Some(&word.tx) {
                entry.count += 1;
                last_counted.insert(sequence, word.tx);
            }

            if let Some(following) = corpus.word_after(word) {
                entry.projection.push(following);
            }
        }
    }

    extended
}
