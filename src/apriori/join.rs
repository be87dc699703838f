use std::collections::BTreeMap;

use super::itemset::Itemset;
use super::Candidates;

/// Joins every pair of level-k keys sharing exactly k - 1 items into a
/// level-(k + 1) candidate with count 0. Different pairs producing the same
/// set collapse onto one canonical key.
pub fn generate_candidates(frequent: &Candidates) -> Candidates {
    let itemsets: Vec<Itemset> = frequent.keys().map(|key| Itemset::parse(key)).collect();
    let mut candidates: Candidates = BTreeMap::new();

    for (i, left) in itemsets.iter().enumerate() {
        let Some(shared) = left.len().checked_sub(1) else {
            continue;
        };

        for right in &itemsets[i + 1..] {
            if right.len() != left.len() || left.intersection_len(right) != shared {
                continue;
            }
            candidates.entry(left.union(right).key()).or_insert(0);
        }
    }

    candidates
}
