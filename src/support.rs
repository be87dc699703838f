use std::collections::BTreeMap;

/// Anything carrying an occurrence count (number of distinct transactions).
pub trait Counted {
    fn count(&self) -> usize;
}

impl Counted for usize {
    fn count(&self) -> usize {
        *self
    }
}

pub fn support(count: usize, total_transactions: usize) -> f64 {
    if total_transactions == 0 {
        return 0.0;
    }
    count as f64 / total_transactions as f64
}

pub fn meets_min_support(count: usize, total_transactions: usize, min_support: f64) -> bool {
    total_transactions > 0 && support(count, total_transactions) >= min_support
}

/// Returns the candidates whose support reaches `min_support`, leaving the
/// input untouched.
pub fn filter_candidates<V>(
    candidates: &BTreeMap<String, V>,
    total_transactions: usize,
    min_support: f64,
) -> BTreeMap<String, V>
where
    V: Counted + Clone,
{
    candidates
        .iter()
        .filter(|(_, value)| meets_min_support(value.count(), total_transactions, min_support))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Owning variant of [`filter_candidates`]; survivors are moved, not cloned.
pub fn into_frequent<V: Counted>(
    candidates: BTreeMap<String, V>,
    total_transactions: usize,
    min_support: f64,
) -> BTreeMap<String, V> {
    candidates
        .into_iter()
        .filter(|(_, value)| meets_min_support(value.count(), total_transactions, min_support))
        .collect()
}
