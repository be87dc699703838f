//! Frequent itemset mining over unordered `;`-delimited transactions.

pub mod builder;
pub mod itemset;
pub mod join;
pub mod mining;


use std::collections::BTreeMap;

/// Canonical itemset key -> number of transactions containing it.
pub type Candidates = BTreeMap<String, usize>;

pub use builder::{count_level_one, itemset_transactions, TidIndex};
pub use itemset::Itemset;
pub use join::generate_candidates;
pub use mining::{apriori, count_support, count_support_indexed, mine_itemsets};
