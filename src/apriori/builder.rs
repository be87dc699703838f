use std::collections::{BTreeMap, HashMap};

use super::itemset::Itemset;
use super::Candidates;
use crate::corpus::Corpus;

/// Parses every transaction into its item set. Position `i` holds
/// transaction `i + 1`.
pub fn itemset_transactions(corpus: &Corpus) -> Vec<Itemset> {
    corpus
        .transactions()
        .map(|(_, line)| Itemset::parse(line))
        .collect()
}

/// Single-item candidates; each item counts once per transaction.
pub fn count_level_one(transactions: &[Itemset]) -> Candidates {
    let mut candidates: Candidates = BTreeMap::new();

    for transaction in transactions {
        for item in transaction.items() {
            *candidates.entry(item.clone()).or_insert(0) += 1;
        }
    }

    candidates
}

/// Item -> ascending list of 1-based transaction ids containing it.
#[derive(Debug, Clone, Default)]
pub struct TidIndex {
    tids: HashMap<String, Vec<usize>>,
}

impl TidIndex {
    pub fn build(transactions: &[Itemset]) -> Self {
        let mut tids: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, transaction) in transactions.iter().enumerate() {
            for item in transaction.items() {
                tids.entry(item.clone()).or_default().push(idx + 1);
            }
        }

        Self { tids }
    }

    pub fn tids(&self, item: &str) -> &[usize] {
        self.tids.get(item).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of transactions containing every item of `itemset`.
    pub fn support_count(&self, itemset: &Itemset) -> usize {
        let mut lists: Vec<&[usize]> =
            itemset.items().iter().map(|item| self.tids(item)).collect();
        if lists.is_empty() {
            return 0;
        }
        lists.sort_unstable_by_key(|list| list.len());

        let mut common = lists[0].to_vec();
        for list in &lists[1..] {
            if common.is_empty() {
                break;
            }
            common = intersect_sorted(&common, list);
        }
        common.len()
    }
}

fn intersect_sorted(left: &[usize], right: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(left.len().min(right.len()));
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] < right[j] {
            i += 1;
        } else if left[i] > right[j] {
            j += 1;
        } else {
            out.push(left[i]);
            i += 1;
            j += 1;
        }
    }
    out
}
