//! Error types for the Amharic BPE tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Tokenize/encode was called before any successful train or load.
    #[error("Tokenizer is not trained: call train() or load() first")]
    NotTrained,

    /// Error loading a persisted tokenizer artifact
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving a tokenizer artifact
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
