//! Persistence of trained tokenizer state.

pub mod format;
pub mod load;
pub mod save;

pub use format::SerializedTokenizer;
pub use load::{LoadedState, TokenizerLoader};
pub use save::TokenizerSaver;
