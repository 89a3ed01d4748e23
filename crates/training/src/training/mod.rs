//! Training infrastructure: pair counting and the merge learner.

pub mod counter;
pub mod learner;

pub use counter::PairCounter;
pub use learner::{MergeLearner, TrainingConfig};
