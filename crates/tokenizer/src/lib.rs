//! amtok-tokenizer - High-level Amharic BPE tokenizer API
//!
//! This crate ties the core components and the merge learner together
//! behind a single engine type, and persists trained state as a JSON
//! artifact.
//!
//! # Example
//!
//! ```rust,no_run
//! use amtok_tokenizer::AmharicTokenizer;
//!
//! let mut tokenizer = AmharicTokenizer::builder()
//!     .num_merges(1_000)
//!     .build();
//!
//! let corpus = std::fs::read_to_string("corpus.txt").unwrap();
//! let learned = tokenizer.train(&corpus).unwrap();
//! println!("learned {learned} merges");
//!
//! let tokens = tokenizer.tokenize("ሰላም ለዓለም").unwrap();
//! assert_eq!(tokenizer.detokenize(&tokens), "ሰላም ለዓለም");
//! ```

// Re-export core types
pub use amtok_core::{Result, Strictness, TokenizerError, BOS, EOS, EOW, PAD, UNK};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{AmharicTokenizer, TokenizerBuilder, TokenizerConfig};

// IO/Serialization
pub mod io;
pub use io::{SerializedTokenizer, TokenizerLoader, TokenizerSaver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
