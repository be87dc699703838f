use std::cmp::Ordering;

use crate::corpus::{split_items, ITEM_DELIMITER};

/// A set of items kept sorted and de-duplicated, so equal sets always have
/// equal keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Itemset {
    items: Vec<String>,
}

impl Itemset {
    pub fn new(mut items: Vec<String>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(items.into_iter().map(str::to_owned).collect())
    }

    /// Parses a transaction line or a candidate key.
    pub fn parse(line: &str) -> Self {
        Self::from_items(split_items(line))
    }

    /// Canonical `;`-joined form.
    pub fn key(&self) -> String {
        self.items.join(ITEM_DELIMITER)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn intersection_len(&self, other: &Itemset) -> usize {
        let (mut i, mut j, mut common) = (0, 0, 0);
        while i < self.items.len() && j < other.items.len() {
            match self.items[i].cmp(&other.items[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    common += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        common
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        let mut items = Vec::with_capacity(self.items.len() + other.items.len());
        let (mut i, mut j) = (0, 0);
        while i < self.items.len() && j < other.items.len() {
            match self.items[i].cmp(&other.items[j]) {
                Ordering::Less => {
                    items.push(self.items[i].clone());
                    i += 1;
                }
                Ordering::Greater => {
                    items.push(other.items[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    items.push(self.items[i].clone());
                    i += 1;
                    j += 1;
                }
            }
        }
        items.extend_from_slice(&self.items[i..]);
        items.extend_from_slice(&other.items[j..]);
        Itemset { items }
    }

    /// True when every item of `self` appears in `other`.
    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        if self.items.len() > other.items.len() {
            return false;
        }
        let mut rest = other.items.iter();
        self.items
            .iter()
            .all(|item| rest.by_ref().any(|candidate| candidate == item))
    }
}
