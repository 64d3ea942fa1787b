//! Word membership index
//!
//! Exact lookups hit a hash set directly. Patterns carrying wildcards are
//! expanded one position at a time, returning as soon as any concrete
//! spelling is found.

use crate::core::WILDCARD;
use rustc_hash::FxHashSet;

/// Anything that can answer "is this pattern a word?"
///
/// Shared read-only across search threads.
pub trait Lexicon: Sync {
    /// True if `pattern`, with each `*` standing for any letter, spells a word
    fn contains(&self, pattern: &str) -> bool;
}

/// Set of valid words, lowercase `a`-`z` only
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any word source, silently dropping invalid entries
    ///
    /// # Examples
    /// ```
    /// use scrabble_solver::dictionary::{Dictionary, Lexicon};
    ///
    /// let dictionary = Dictionary::from_words(["cat", "CATS", "c4t"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("cats"));
    /// assert!(dictionary.contains("c*t"));
    /// assert!(!dictionary.contains("c4t"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        dictionary.extend(words);
        dictionary
    }

    /// Add words, silently dropping invalid entries
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Add a single word
    ///
    /// Returns false if the word has characters outside `a`-`z` after
    /// lowercasing, is empty, or was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_ascii_lowercase();
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return false;
        }
        self.words.insert(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// First dictionary spelling matching `pattern`, if any
    #[must_use]
    pub fn resolve(&self, pattern: &str) -> Option<String> {
        let mut buffer = canonical_pattern(pattern)?;
        let wildcards: Vec<usize> = buffer
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| (b == WILDCARD as u8).then_some(i))
            .collect();
        self.expand(&mut buffer, &wildcards)
    }

    /// Fill wildcard slots one at a time, depth first
    fn expand(&self, buffer: &mut [u8], wildcards: &[usize]) -> Option<String> {
        let Some((&slot, rest)) = wildcards.split_first() else {
            let word = std::str::from_utf8(buffer).ok()?;
            return self.words.contains(word).then(|| word.to_string());
        };
        for letter in b'a'..=b'z' {
            buffer[slot] = letter;
            if let Some(found) = self.expand(buffer, rest) {
                buffer[slot] = WILDCARD as u8;
                return Some(found);
            }
        }
        buffer[slot] = WILDCARD as u8;
        None
    }
}

impl Lexicon for Dictionary {
    fn contains(&self, pattern: &str) -> bool {
        let Some(buffer) = canonical_pattern(pattern) else {
            return false;
        };
        if !buffer.contains(&(WILDCARD as u8)) {
            return std::str::from_utf8(&buffer).is_ok_and(|word| self.words.contains(word));
        }
        self.resolve(pattern).is_some()
    }
}

/// Lowercase a pattern, rejecting anything but `a`-`z` and the wildcard
fn canonical_pattern(pattern: &str) -> Option<Vec<u8>> {
    if pattern.is_empty() || !pattern.is_ascii() {
        return None;
    }
    let buffer = pattern.to_ascii_lowercase().into_bytes();
    buffer
        .iter()
        .all(|&b| b.is_ascii_lowercase() || b == WILDCARD as u8)
        .then_some(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_words(["cat", "cats", "dog", "zebra", "ax"])
    }

    #[test]
    fn exact_lookup() {
        let dictionary = sample();
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("zebra"));
        assert!(!dictionary.contains("ca"));
        assert!(!dictionary.contains("catss"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dictionary = sample();
        assert!(dictionary.contains("CAT"));
        assert!(dictionary.contains("DoG"));
    }

    #[test]
    fn insert_canonicalizes_and_validates() {
        let mut dictionary = Dictionary::new();
        assert!(dictionary.insert("Hello"));
        assert!(!dictionary.insert("hello"));
        assert!(!dictionary.insert("it's"));
        assert!(!dictionary.insert("naïve"));
        assert!(!dictionary.insert(""));
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.contains("hello"));
    }

    #[test]
    fn invalid_patterns_rejected() {
        let dictionary = sample();
        assert!(!dictionary.contains("c-t"));
        assert!(!dictionary.contains("ca t"));
        assert!(!dictionary.contains("cät"));
        assert!(!dictionary.contains(""));
    }

    #[test]
    fn single_wildcard_matches_any_letter() {
        let dictionary = sample();
        assert!(dictionary.contains("c*t"));
        assert!(dictionary.contains("*at"));
        assert!(dictionary.contains("ca*s"));
        assert!(!dictionary.contains("c*x"));
    }

    #[test]
    fn multiple_wildcards_expand_independently() {
        let dictionary = sample();
        assert!(dictionary.contains("*e*r*"));
        assert!(dictionary.contains("**"));
        assert!(dictionary.contains("***"));
        assert!(!dictionary.contains("******"));
    }

    #[test]
    fn wildcard_matches_iff_some_expansion_is_a_word() {
        let dictionary = sample();
        for pattern in ["*og", "d*g", "do*", "*", "z*bra", "q**"] {
            let brute = expansions(pattern).iter().any(|w| dictionary.contains(w));
            assert_eq!(dictionary.contains(pattern), brute, "pattern {pattern}");
        }
    }

    #[test]
    fn resolve_returns_concrete_spelling() {
        let dictionary = sample();
        assert_eq!(dictionary.resolve("c*ts"), Some("cats".to_string()));
        assert_eq!(dictionary.resolve("a*"), Some("ax".to_string()));
        assert_eq!(dictionary.resolve("q*"), None);
    }

    fn expansions(pattern: &str) -> Vec<String> {
        let mut results = vec![String::new()];
        for ch in pattern.chars() {
            let options: Vec<char> = if ch == WILDCARD {
                ('a'..='z').collect()
            } else {
                vec![ch]
            };
            results = results
                .iter()
                .flat_map(|prefix| options.iter().map(move |&c| format!("{prefix}{c}")))
                .collect();
        }
        results
    }
}
