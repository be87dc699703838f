/// Flat storage for mined pattern keys: all keys live in one buffer, addressed
/// by `(start, len)` offsets, with the occurrence count alongside.
#[derive(Debug, Clone, Default)]
pub struct PatternStorage {
    keys: String,
    offsets: Vec<(usize, usize)>,
    counts: Vec<usize>,
}

/// Every frequent pattern of one level (all patterns share `pattern_size`).
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    pub storage: PatternStorage,
    pub pattern_size: usize,
}

impl PatternStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(estimated_bytes: usize, estimated_patterns: usize) -> Self {
        Self {
            keys: String::with_capacity(estimated_bytes),
            offsets: Vec::with_capacity(estimated_patterns),
            counts: Vec::with_capacity(estimated_patterns),
        }
    }

    pub(crate) fn add_pattern(&mut self, key: &str, count: usize) {
        let start = self.keys.len();
        self.keys.push_str(key);
        self.offsets.push((start, key.len()));
        self.counts.push(count);
    }

    pub(crate) fn get_pattern(&self, idx: usize) -> (&str, usize) {
        let (start, len) = self.offsets[idx];
        (&self.keys[start..start + len], self.counts[idx])
    }

    pub(crate) fn len(&self) -> usize {
        self.offsets.len()
    }
}

impl FrequentLevel {
    pub fn new(pattern_size: usize) -> Self {
        Self { storage: PatternStorage::new(), pattern_size }
    }

    pub fn from_entries(pattern_size: usize, entries: &[(&str, usize)]) -> Self {
        let bytes = entries.iter().map(|(key, _)| key.len()).sum();
        let mut storage = PatternStorage::with_capacity(bytes, entries.len());
        for &(key, count) in entries {
            storage.add_pattern(key, count);
        }
        Self { storage, pattern_size }
    }

    pub fn add_pattern(&mut self, key: &str, count: usize) -> usize {
        self.storage.add_pattern(key, count);
        self.storage.len() - 1
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    pub fn get_pattern(&self, idx: usize) -> (&str, usize) {
        self.storage.get_pattern(idx)
    }

    pub fn iter_patterns(&self) -> impl Iterator<Item = (&str, usize)> {
        (0..self.storage.len()).map(move |idx| self.get_pattern(idx))
    }

    pub fn count_of(&self, key: &str) -> Option<usize> {
        self.iter_patterns()
            .find(|&(pattern, _)| pattern == key)
            .map(|(_, count)| count)
    }
}

/// Looks `key` up across all levels.
pub fn find_pattern(levels: &[FrequentLevel], key: &str) -> Option<usize> {
    levels.iter().find_map(|level| level.count_of(key))
}
