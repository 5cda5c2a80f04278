// src/models/word_counts.rs
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::io::{self, Write};

/// Returns `true` for characters that separate tokens.
///
/// This is Unicode `White_Space` plus the ASCII information separators
/// U+001C..=U+001F, which `str.split()`-style tokenizers also treat as blanks.
#[inline]
#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Splits text into tokens on runs of separators, dropping empty tokens.
#[inline]
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

/// Occurrence counts keyed by token, always iterated in ascending token order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCounts {
    counts: BTreeMap<String, u64>,
}

impl WordCounts {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Counts one occurrence of `token`.
    #[inline]
    pub fn add_token(&mut self, token: &str) {
        if let Some(count) = self.counts.get_mut(token) {
            *count = count.saturating_add(1);
        } else {
            self.counts.insert(token.to_owned(), 1);
        }
    }

    /// Tokenizes `text` and counts every token. Returns the number of tokens seen.
    #[inline]
    pub fn add_text(&mut self, text: &str) -> u64 {
        let mut seen: u64 = 0;
        for token in tokens(text) {
            self.add_token(token);
            seen = seen.saturating_add(1);
        }
        seen
    }

    #[inline]
    #[must_use]
    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Number of distinct tokens.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0_u64, |acc, count| acc.saturating_add(*count))
    }

    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, String, u64> {
        self.counts.iter()
    }

    /// Writes one `<token> <count>` line per token, sorted by token.
    ///
    /// # Errors
    ///
    /// Returns any error produced by the underlying writer.
    #[inline]
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for (token, count) in &self.counts {
            writeln!(writer, "{token} {count}")?;
        }
        writer.flush()
    }
}

impl<'a> IntoIterator for &'a WordCounts {
    type Item = (&'a String, &'a u64);
    type IntoIter = btree_map::Iter<'a, String, u64>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
