//! Merge application and detokenization.

pub mod applier;
pub mod detok;

pub use applier::MergeApplier;
pub use detok::Detokenizer;
