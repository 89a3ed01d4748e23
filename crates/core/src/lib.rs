//! amtok-core - Core engine for the Amharic BPE tokenizer
//!
//! This crate provides the fundamental pieces the tokenizer is built from:
//!
//! - Fidel codec: lossless decomposition/composition of Ethiopic glyphs
//! - Corpus cleaning and pre-segmentation into symbol sequences
//! - The learned merge table with its derived rank lookup
//! - The dense token/id registry with reserved special tokens
//! - Deterministic merge application and detokenization
//!
//! # Example
//!
//! ```rust
//! use amtok_core::fidel::FidelCodec;
//!
//! let codec = FidelCodec::ethiopic();
//! let decomposed = codec.decompose("ሰላም");
//! assert_eq!(codec.compose(&decomposed), "ሰላም");
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

pub mod symbol;
pub use symbol::{Symbol, BOS, EOS, EOW, PAD, SPECIAL_TOKENS, UNK};

pub mod fidel;
pub use fidel::FidelCodec;

pub mod segment;
pub use segment::Strictness;

pub mod merges;
pub use merges::{MergePair, MergeTable};

pub mod registry;
pub use registry::{SpecialIds, TokenRegistry};

pub mod encoding;
pub use encoding::{Detokenizer, MergeApplier};
