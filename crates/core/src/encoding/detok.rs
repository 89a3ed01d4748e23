//! Token-sequence to text reconstruction.
//!
//! The detokenizer is the exact inverse of merge application for any
//! sequence the applier can produce: it strips structural markers, re-joins
//! each word's decomposed symbols, and recomposes glyphs through the codec.

use crate::fidel::FidelCodec;
use crate::symbol::{BOS, EOS, EOW, PAD, UNK};

/// Reconstructs text from token sequences.
pub struct Detokenizer<'a> {
    codec: &'a FidelCodec,
}

impl<'a> Detokenizer<'a> {
    pub fn new(codec: &'a FidelCodec) -> Self {
        Self { codec }
    }

    /// Rebuild text from tokens. End-of-word markers terminate words without
    /// appearing in the output; unknown and sequence-framing tokens are
    /// dropped; words are joined by single spaces.
    pub fn detokenize<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let mut words: Vec<String> = Vec::new();
        let mut buffer = String::new();

        let flush = |buffer: &mut String, words: &mut Vec<String>| {
            if !buffer.is_empty() {
                words.push(self.codec.compose(buffer));
                buffer.clear();
            }
        };

        for token in tokens {
            let token = token.as_ref();

            match token {
                EOW => flush(&mut buffer, &mut words),
                UNK | PAD | BOS | EOS => {}
                _ => {
                    // The marker can be merged into a preceding symbol; it
                    // then terminates the word as an embedded suffix.
                    if let Some(stripped) = token.strip_suffix(EOW) {
                        buffer.push_str(stripped);
                        flush(&mut buffer, &mut words);
                    } else {
                        buffer.push_str(token);
                    }
                }
            }
        }

        flush(&mut buffer, &mut words);
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_terminates_word() {
        let codec = FidelCodec::ethiopic();
        let detok = Detokenizer::new(&codec);

        let tokens = ["ህ", "e", "<eow>", "ል", "<eow>"];
        assert_eq!(detok.detokenize(&tokens), "ሀ ል");
    }

    #[test]
    fn test_embedded_marker_suffix() {
        let codec = FidelCodec::ethiopic();
        let detok = Detokenizer::new(&codec);

        let tokens = ["ህ", "e<eow>"];
        assert_eq!(detok.detokenize(&tokens), "ሀ");
    }

    #[test]
    fn test_specials_are_dropped() {
        let codec = FidelCodec::ethiopic();
        let detok = Detokenizer::new(&codec);

        let tokens = ["<bos>", "ህe<eow>", "<unk>", "<eos>"];
        assert_eq!(detok.detokenize(&tokens), "ሀ");
    }

    #[test]
    fn test_trailing_word_without_marker_is_kept() {
        let codec = FidelCodec::ethiopic();
        let detok = Detokenizer::new(&codec);

        assert_eq!(detok.detokenize(&["ህ", "e"]), "ሀ");
    }

    #[test]
    fn test_empty_input() {
        let codec = FidelCodec::ethiopic();
        let detok = Detokenizer::new(&codec);

        assert_eq!(detok.detokenize::<&str>(&[]), "");
    }
}
