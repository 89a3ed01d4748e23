//! amtok-training - Merge learning for the Amharic BPE tokenizer
//!
//! This crate learns the ordered merge list from a pre-segmented corpus:
//! frequency-weighted pair counting, deterministic best-pair selection, and
//! the iterative merge loop with its stop conditions.

pub use amtok_core::{Result, TokenizerError};

pub mod training;
pub use training::{MergeLearner, PairCounter, TrainingConfig};
