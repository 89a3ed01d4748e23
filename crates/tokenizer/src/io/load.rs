//! Load functionality for persisted tokenizers.
//!
//! Loading fails fast: a document with missing fields, malformed entries,
//! or inconsistent id maps never partially populates an engine.

use super::format::SerializedTokenizer;
use amtok_core::fidel::FidelCodec;
use amtok_core::merges::MergeTable;
use amtok_core::registry::TokenRegistry;
use amtok_core::symbol::Symbol;
use amtok_core::{Result, TokenizerError};
use ahash::AHashMap;
use compact_str::CompactString;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Fully validated state reconstructed from an artifact.
pub struct LoadedState {
    pub codec: FidelCodec,
    pub merges: MergeTable,
    pub words: Vec<(Vec<Symbol>, u64)>,
    pub registry: TokenRegistry,
    pub num_merges: usize,
    pub max_vocab_size: Option<usize>,
}

/// Tokenizer loader - reads and validates a JSON artifact.
pub struct TokenizerLoader;

impl TokenizerLoader {
    /// Load and validate the artifact at `path`.
    pub fn load(path: &Path) -> Result<LoadedState> {
        let file = File::open(path).map_err(|err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        let reader = BufReader::new(file);
        let artifact: SerializedTokenizer = serde_json::from_reader(reader)?;

        Self::deserialize(artifact)
    }

    /// Rebuild engine state from the on-disk structure.
    pub(crate) fn deserialize(artifact: SerializedTokenizer) -> Result<LoadedState> {
        // Merge rank is re-derived from list order; a separately persisted
        // rank table, if any existed, would not be trusted.
        let merges = MergeTable::from_pairs(
            artifact
                .merges
                .into_iter()
                .map(|(left, right)| (Symbol::new(&left), Symbol::new(&right))),
        );

        let words: Vec<(Vec<Symbol>, u64)> = artifact
            .vocab
            .into_iter()
            .map(|(joined, count)| {
                let symbols: Vec<Symbol> =
                    joined.split_whitespace().map(Symbol::new).collect();
                (symbols, count)
            })
            .collect();

        let mut codec_entries = Vec::with_capacity(artifact.fidel_map.len());
        for (decomposed, composed) in artifact.fidel_map {
            let mut chars = composed.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(TokenizerError::Load(format!(
                    "fidel map value {composed:?} is not a single character"
                )));
            };
            codec_entries.push((CompactString::new(&decomposed), ch));
        }
        let codec = FidelCodec::from_entries(codec_entries);

        let token_to_id: AHashMap<Symbol, u32> = artifact
            .token_to_id
            .into_iter()
            .map(|(token, id)| (Symbol::new(&token), id))
            .collect();
        let id_to_token: AHashMap<u32, Symbol> = artifact
            .id_to_token
            .into_iter()
            .map(|(id, token)| (id, Symbol::new(&token)))
            .collect();

        let registry = TokenRegistry::from_maps(token_to_id, id_to_token, artifact.max_vocab_size)?;

        Ok(LoadedState {
            codec,
            merges,
            words,
            registry,
            num_merges: artifact.num_merges,
            max_vocab_size: artifact.max_vocab_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::save::TokenizerSaver;

    fn trained_state() -> (FidelCodec, MergeTable, Vec<(Vec<Symbol>, u64)>, TokenRegistry) {
        let codec = FidelCodec::ethiopic();
        let mut merges = MergeTable::new();
        merges.push((Symbol::new("ህ"), Symbol::new("e")));
        merges.push((Symbol::new("ህe"), Symbol::new("<eow>")));

        let words = vec![(vec![Symbol::new("ህe<eow>")], 3u64)];
        let registry = TokenRegistry::rebuild(&words, &merges, None);
        (codec, merges, words, registry)
    }

    #[test]
    fn test_deserialize_rederives_ranks_from_order() {
        let (codec, merges, words, registry) = trained_state();
        let artifact = TokenizerSaver::new(&codec, &merges, &words, &registry, 2).serialize();

        let state = TokenizerLoader::deserialize(artifact).unwrap();

        assert_eq!(
            state.merges.rank(&Symbol::new("ህ"), &Symbol::new("e")),
            Some(0)
        );
        assert_eq!(
            state
                .merges
                .rank(&Symbol::new("ህe"), &Symbol::new("<eow>")),
            Some(1)
        );
    }

    #[test]
    fn test_roundtrip_through_disk() {
        let (codec, merges, words, registry) = trained_state();
        let dir = std::env::temp_dir().join("amtok_test_io_roundtrip");
        let path = dir.join("tokenizer.json");

        TokenizerSaver::new(&codec, &merges, &words, &registry, 2)
            .save(&path)
            .unwrap();
        let state = TokenizerLoader::load(&path).unwrap();

        assert_eq!(state.merges.len(), merges.len());
        assert_eq!(state.words.len(), words.len());
        assert_eq!(state.registry.len(), registry.len());
        assert_eq!(state.codec.len(), codec.len());
        assert_eq!(state.num_merges, 2);

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_file_reports_io_error() {
        let path = std::env::temp_dir()
            .join("amtok_test_missing_dir")
            .join("nothing.json");

        assert!(matches!(
            TokenizerLoader::load(&path),
            Err(TokenizerError::Io { .. })
        ));
    }

    #[test]
    fn test_bad_fidel_value_rejected() {
        let (codec, merges, words, registry) = trained_state();
        let mut artifact = TokenizerSaver::new(&codec, &merges, &words, &registry, 2).serialize();
        artifact
            .fidel_map
            .insert("xy".to_string(), "two chars".to_string());

        assert!(matches!(
            TokenizerLoader::deserialize(artifact),
            Err(TokenizerError::Load(_))
        ));
    }

    #[test]
    fn test_inconsistent_id_maps_rejected() {
        let (codec, merges, words, registry) = trained_state();
        let mut artifact = TokenizerSaver::new(&codec, &merges, &words, &registry, 2).serialize();
        artifact.id_to_token.insert(0, "<corrupted>".to_string());

        assert!(TokenizerLoader::deserialize(artifact).is_err());
    }
}
