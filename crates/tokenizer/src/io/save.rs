//! Save functionality for trained tokenizers.

use super::format::SerializedTokenizer;
use amtok_core::fidel::FidelCodec;
use amtok_core::merges::MergeTable;
use amtok_core::registry::TokenRegistry;
use amtok_core::segment::join_symbols;
use amtok_core::symbol::Symbol;
use amtok_core::{Result, TokenizerError};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Tokenizer saver - writes the trained state to a JSON artifact.
pub struct TokenizerSaver<'a> {
    codec: &'a FidelCodec,
    merges: &'a MergeTable,
    words: &'a [(Vec<Symbol>, u64)],
    registry: &'a TokenRegistry,
    num_merges: usize,
}

impl<'a> TokenizerSaver<'a> {
    pub fn new(
        codec: &'a FidelCodec,
        merges: &'a MergeTable,
        words: &'a [(Vec<Symbol>, u64)],
        registry: &'a TokenRegistry,
        num_merges: usize,
    ) -> Self {
        Self {
            codec,
            merges,
            words,
            registry,
            num_merges,
        }
    }

    /// Write the artifact to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|err| TokenizerError::Io {
                    path: parent.to_path_buf(),
                    err,
                })?;
            }
        }

        let file = File::create(path).map_err(|err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.serialize())
            .map_err(|e| TokenizerError::Save(format!("Failed to serialize tokenizer: {}", e)))?;

        Ok(())
    }

    /// Convert the in-memory state to the on-disk structure.
    pub(crate) fn serialize(&self) -> SerializedTokenizer {
        let merges: Vec<(String, String)> = self
            .merges
            .iter()
            .map(|(left, right)| (left.to_string(), right.to_string()))
            .collect();

        let vocab: HashMap<String, u64> = self
            .words
            .iter()
            .map(|(word, count)| (join_symbols(word), *count))
            .collect();

        let fidel_map: HashMap<String, String> = self
            .codec
            .entries()
            .map(|(decomposed, composed)| (decomposed.to_string(), composed.to_string()))
            .collect();

        let token_to_id: HashMap<String, u32> = self
            .registry
            .iter()
            .map(|(token, id)| (token.to_string(), id))
            .collect();

        let id_to_token: HashMap<u32, String> = self
            .registry
            .iter()
            .map(|(token, id)| (id, token.to_string()))
            .collect();

        SerializedTokenizer {
            version: env!("CARGO_PKG_VERSION").to_string(),
            num_merges: self.num_merges,
            max_vocab_size: self.registry.max_size(),
            merges,
            vocab,
            fidel_map,
            token_to_id,
            id_to_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_carries_all_fields() {
        let codec = FidelCodec::ethiopic();
        let mut merges = MergeTable::new();
        merges.push((Symbol::new("ህ"), Symbol::new("e")));

        let words = vec![(vec![Symbol::new("ህe"), Symbol::new("<eow>")], 2u64)];
        let registry = TokenRegistry::rebuild(&words, &merges, Some(100));

        let saver = TokenizerSaver::new(&codec, &merges, &words, &registry, 10);
        let artifact = saver.serialize();

        assert_eq!(artifact.merges, vec![("ህ".to_string(), "e".to_string())]);
        assert_eq!(artifact.vocab.get("ህe <eow>"), Some(&2));
        assert_eq!(artifact.fidel_map.get("ህe"), Some(&"ሀ".to_string()));
        assert_eq!(artifact.max_vocab_size, Some(100));
        assert_eq!(artifact.num_merges, 10);
        assert_eq!(artifact.token_to_id.len(), artifact.id_to_token.len());
    }
}
