//! High-level Amharic tokenizer engine.
//!
//! `AmharicTokenizer` ties the codec, segmenter, learner, applier, registry
//! and detokenizer together behind the public train/tokenize/encode/decode
//! surface, and owns persistence of the trained state.

use crate::io::{load::TokenizerLoader, save::TokenizerSaver};
use amtok_core::encoding::{Detokenizer, MergeApplier};
use amtok_core::fidel::FidelCodec;
use amtok_core::merges::MergeTable;
use amtok_core::registry::TokenRegistry;
use amtok_core::segment::{build_word_counts, clean, segment_word, Strictness};
use amtok_core::symbol::Symbol;
use amtok_core::{Result, TokenizerError};
use amtok_training::{MergeLearner, TrainingConfig};
use std::path::Path;

/// Configuration for building a tokenizer.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Maximum number of merges to learn during training.
    pub num_merges: usize,
    /// Ceiling on distinct tokens (training and registry admission).
    pub max_vocab_size: Option<usize>,
    /// Frequency floor for merges.
    pub min_pair_frequency: u64,
    /// Corpus cleaning strictness.
    pub strictness: Strictness,
    /// Training progress log cadence (merges per log line, 0 disables).
    pub log_every: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            num_merges: 50_000,
            max_vocab_size: Some(10_000),
            min_pair_frequency: 2,
            strictness: Strictness::Strict,
            log_every: 1_000,
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the merge-count target.
    pub fn num_merges(mut self, n: usize) -> Self {
        self.config.num_merges = n;
        self
    }

    /// Set (or disable) the vocabulary-size ceiling.
    pub fn max_vocab_size(mut self, ceiling: Option<usize>) -> Self {
        self.config.max_vocab_size = ceiling;
        self
    }

    /// Set the frequency floor for merges.
    pub fn min_pair_frequency(mut self, floor: u64) -> Self {
        self.config.min_pair_frequency = floor;
        self
    }

    /// Set the cleaning strictness.
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.config.strictness = strictness;
        self
    }

    /// Set the training progress log cadence.
    pub fn log_every(mut self, cadence: usize) -> Self {
        self.config.log_every = cadence;
        self
    }

    /// Build the (untrained) tokenizer.
    pub fn build(self) -> AmharicTokenizer {
        AmharicTokenizer::new(self.config)
    }
}

/// BPE tokenizer for Amharic fidel text.
pub struct AmharicTokenizer {
    codec: FidelCodec,
    merges: MergeTable,
    /// Collapsed word-frequency vocabulary from the last train/load.
    words: Vec<(Vec<Symbol>, u64)>,
    registry: TokenRegistry,
    config: TokenizerConfig,
    trained: bool,
}

impl AmharicTokenizer {
    /// Create an untrained tokenizer with the given configuration.
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            codec: FidelCodec::ethiopic(),
            merges: MergeTable::new(),
            words: Vec::new(),
            registry: TokenRegistry::new(config.max_vocab_size),
            config,
            trained: false,
        }
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Whether a successful train or load has populated the engine.
    #[inline]
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    /// Train on a raw corpus, replacing any previous state wholesale.
    ///
    /// Returns the number of merges learned.
    pub fn train(&mut self, corpus: &str) -> Result<usize> {
        let cleaned = clean(corpus, self.config.strictness);
        let mut words = build_word_counts(&cleaned, &self.codec);

        let learner = MergeLearner::new(TrainingConfig {
            num_merges: self.config.num_merges,
            max_vocab_size: self.config.max_vocab_size,
            min_pair_frequency: self.config.min_pair_frequency,
            log_every: self.config.log_every,
        });
        let merges = learner.learn(&mut words);

        self.registry = TokenRegistry::rebuild(&words, &merges, self.config.max_vocab_size);
        self.words = words;
        self.merges = merges;
        self.trained = true;

        Ok(self.merges.len())
    }

    /// Tokenize text into subword symbols.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        if !self.trained {
            return Err(TokenizerError::NotTrained);
        }

        let cleaned = clean(text, self.config.strictness);
        let applier = MergeApplier::new(&self.merges);

        let mut tokens = Vec::new();
        for word in cleaned.split_whitespace() {
            let symbols = applier.apply(segment_word(word, &self.codec));
            tokens.extend(symbols.into_iter().map(|s| s.to_string()));
        }

        Ok(tokens)
    }

    /// Reconstruct text from subword symbols.
    pub fn detokenize<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        Detokenizer::new(&self.codec).detokenize(tokens)
    }

    /// Convert text to token ids without touching the registry. Tokens the
    /// registry has never seen map to the unknown id. Takes `&self`, so a
    /// trained engine can be shared by any number of concurrent encoders.
    pub fn encode(&self, text: &str) -> Result<Vec<u32>> {
        let tokens = self.tokenize(text)?;
        Ok(tokens.iter().map(|token| self.registry.id_of(token)).collect())
    }

    /// Convert text to token ids, admitting unseen tokens with freshly
    /// allocated ids. This is the only encode path that takes the engine
    /// exclusively; the registry growth is not persisted unless the engine
    /// is re-saved. Tokens rejected by the size ceiling still map to the
    /// unknown id.
    pub fn encode_extending(&mut self, text: &str) -> Result<Vec<u32>> {
        let tokens = self.tokenize(text)?;

        let ids = tokens
            .iter()
            .map(|token| {
                let symbol = Symbol::new(token);
                self.registry
                    .admit(&symbol)
                    .unwrap_or(self.registry.special().unk)
            })
            .collect();

        Ok(ids)
    }

    /// Convert token ids back to text. Unknown ids resolve to the unknown
    /// marker, which the detokenizer drops from the reconstruction.
    pub fn decode(&self, ids: &[u32]) -> String {
        let tokens: Vec<&str> = ids.iter().map(|&id| self.registry.token_of(id)).collect();
        self.detokenize(&tokens)
    }

    /// Number of registered tokens.
    pub fn vocab_size(&self) -> usize {
        self.registry.len()
    }

    /// Number of learned merges.
    pub fn merge_count(&self) -> usize {
        self.merges.len()
    }

    /// Engine configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Save the trained state to a JSON artifact at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        TokenizerSaver::new(
            &self.codec,
            &self.merges,
            &self.words,
            &self.registry,
            self.config.num_merges,
        )
        .save(path)
    }

    /// Load a tokenizer from an artifact, replacing state wholesale.
    pub fn load(path: &Path) -> Result<Self> {
        let state = TokenizerLoader::load(path)?;

        let config = TokenizerConfig {
            num_merges: state.num_merges,
            max_vocab_size: state.max_vocab_size,
            ..Default::default()
        };

        Ok(Self {
            codec: state.codec,
            merges: state.merges,
            words: state.words,
            registry: state.registry,
            config,
            trained: true,
        })
    }
}
