use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{MineError, Result};

/// Separator between items of one itemset transaction, and between the
/// tokens of a pattern key.
pub const ITEM_DELIMITER: &str = ";";

/// Separator between words of one sequence transaction.
pub const WORD_SEPARATOR: u8 = b' ';

/// One word occurrence inside the owned text of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordRef {
    /// 1-based transaction id.
    pub tx: usize,
    pub offset: usize,
    pub len: usize,
}

impl WordRef {
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Raw transaction text, one entry per input line, owned for the whole run.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    lines: Vec<String>,
}

impl Corpus {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = lines
            .into_iter()
            .map(|line| {
                let mut line = line.into();
                if line.ends_with('\r') {
                    line.pop();
                }
                line
            })
            .collect();
        Self { lines }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let unavailable = |source| MineError::CorpusUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        let mut reader = BufReader::new(file);
        let mut lines = Vec::new();
        let mut buf = Vec::new();

        // Bytes that are not valid UTF-8 become U+FFFD instead of failing the run.
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).map_err(unavailable)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            lines.push(String::from_utf8_lossy(&buf).into_owned());
        }

        Ok(Self::from_lines(lines))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of transaction `tx` (1-based).
    pub fn transaction(&self, tx: usize) -> Option<&str> {
        tx.checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    /// All transactions paired with their 1-based ids.
    pub fn transactions(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.as_str()))
    }

    /// Non-empty space-separated words of transaction `tx`, in order.
    pub fn words(&self, tx: usize) -> Vec<WordRef> {
        let Some(text) = self.transaction(tx) else {
            return Vec::new();
        };

        let mut words = Vec::new();
        let mut start = 0;
        for (pos, byte) in text.bytes().enumerate() {
            if byte == WORD_SEPARATOR {
                if pos > start {
                    words.push(WordRef { tx, offset: start, len: pos - start });
                }
                start = pos + 1;
            }
        }
        if start < text.len() {
            words.push(WordRef { tx, offset: start, len: text.len() - start });
        }
        words
    }

    pub fn resolve(&self, word: &WordRef) -> Option<&str> {
        self.transaction(word.tx)?.get(word.offset..word.end())
    }

    /// The word following `word` in the same transaction, skipping any run of
    /// separators. `None` once the transaction is exhausted.
    pub fn word_after(&self, word: &WordRef) -> Option<WordRef> {
        let bytes = self.transaction(word.tx)?.as_bytes();

        let mut start = word.end();
        while start < bytes.len() && bytes[start] == WORD_SEPARATOR {
            start += 1;
        }
        if start >= bytes.len() {
            return None;
        }

        let end = bytes[start..]
            .iter()
            .position(|&b| b == WORD_SEPARATOR)
            .map_or(bytes.len(), |pos| start + pos);

        Some(WordRef { tx: word.tx, offset: start, len: end - start })
    }
}

/// Non-empty items of one itemset transaction line.
pub fn split_items(line: &str) -> impl Iterator<Item = &str> {
    line.split(ITEM_DELIMITER).filter(|item| !item.is_empty())
}
