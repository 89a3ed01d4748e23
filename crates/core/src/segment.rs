//! Corpus cleaning and pre-segmentation.
//!
//! Cleaning normalizes raw corpus text before any symbol is produced;
//! segmentation expands each whitespace-delimited word into its decomposed
//! symbol sequence terminated by the end-of-word marker.

use crate::fidel::FidelCodec;
use crate::symbol::{Symbol, EOW};
use ahash::AHashMap;
use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// How aggressively cleaning strips non-target-script characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Strip Latin letters, digits and everything outside the Ethiopic
    /// block, then normalize whitespace. The convention used for training
    /// corpora.
    #[default]
    Strict,
    /// Only normalize whitespace; all characters are kept.
    Lenient,
}

fn latin_digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z0-9]").expect("valid regex"))
}

fn non_ethiopic_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\u{1200}-\u{137F}\s]").expect("valid regex"))
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Normalize corpus text: NFC, optional script filtering, and whitespace
/// collapse. Idempotent for either strictness.
pub fn clean(text: &str, strictness: Strictness) -> String {
    let normalized: String = text.nfc().collect();

    let filtered = match strictness {
        Strictness::Strict => {
            let without_latin = latin_digits_re().replace_all(&normalized, "");
            non_ethiopic_re().replace_all(&without_latin, "").into_owned()
        }
        Strictness::Lenient => normalized,
    };

    whitespace_re()
        .replace_all(&filtered, " ")
        .trim()
        .to_string()
}

/// Expand one word into its decomposed symbol sequence plus the end-of-word
/// marker. Every symbol is a single decomposed character except the marker.
pub fn segment_word(word: &str, codec: &FidelCodec) -> Vec<Symbol> {
    let decomposed = codec.decompose(word);
    let mut symbols: Vec<Symbol> = Vec::with_capacity(decomposed.chars().count() + 1);

    for ch in decomposed.chars() {
        let mut symbol = Symbol::new("");
        symbol.push(ch);
        symbols.push(symbol);
    }

    symbols.push(Symbol::new(EOW));
    symbols
}

/// Build the initial word-frequency vocabulary from cleaned text.
///
/// Identical symbol sequences are aggregated with summed counts.
pub fn build_word_counts(text: &str, codec: &FidelCodec) -> Vec<(Vec<Symbol>, u64)> {
    let mut counts: AHashMap<Vec<Symbol>, u64> = AHashMap::new();

    for word in text.split_whitespace() {
        let symbols = segment_word(word, codec);
        *counts.entry(symbols).or_insert(0) += 1;
    }

    counts.into_iter().collect()
}

/// Space-join a symbol sequence, the representation used for the persisted
/// word-frequency vocabulary.
pub fn join_symbols(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_latin_and_digits() {
        let cleaned = clean("ሰላም abc123 ለዓለም", Strictness::Strict);
        assert_eq!(cleaned, "ሰላም ለዓለም");
    }

    #[test]
    fn test_clean_collapses_whitespace() {
        let cleaned = clean("  ሰላም \t\n ለዓለም  ", Strictness::Strict);
        assert_eq!(cleaned, "ሰላም ለዓለም");
    }

    #[test]
    fn test_clean_idempotent() {
        for strictness in [Strictness::Strict, Strictness::Lenient] {
            let once = clean("  ሰላም!  hello ለዓለም 42 ", strictness);
            assert_eq!(clean(&once, strictness), once);
        }
    }

    #[test]
    fn test_lenient_keeps_everything() {
        let cleaned = clean("ሰላም  abc", Strictness::Lenient);
        assert_eq!(cleaned, "ሰላም abc");
    }

    #[test]
    fn test_segment_word_ends_with_marker() {
        let codec = FidelCodec::ethiopic();
        let symbols = segment_word("ሀሁ", &codec);

        assert_eq!(symbols.last().map(|s| s.as_str()), Some(EOW));
        // ሀ -> ህ e, ሁ -> ህ u, plus the marker.
        assert_eq!(symbols.len(), 5);
        assert!(symbols[..4].iter().all(|s| s.chars().count() == 1));
    }

    #[test]
    fn test_word_counts_aggregate() {
        let codec = FidelCodec::ethiopic();
        let counts = build_word_counts("ሰላም ሰላም ለዓለም", &codec);

        assert_eq!(counts.len(), 2);
        let total: u64 = counts.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 3);
        assert!(counts
            .iter()
            .any(|(w, c)| *c == 2 && w == &segment_word("ሰላም", &codec)));
    }
}
