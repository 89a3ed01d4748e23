//! On-disk format of the tokenizer artifact.
//!
//! A single JSON document carries everything needed to reproduce the
//! trained engine: the ordered merge list, the collapsed word-frequency
//! vocabulary, the fidel composition map, both id maps, and the training
//! configuration. Merge rank is not persisted separately; it is re-derived
//! from merge-list order on load, which is authoritative.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete tokenizer serialization format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedTokenizer {
    /// Format/library version that wrote the artifact.
    pub version: String,
    /// Configured merge-count target.
    pub num_merges: usize,
    /// Configured vocabulary-size ceiling.
    pub max_vocab_size: Option<usize>,
    /// Ordered merge list; index is rank.
    pub merges: Vec<(String, String)>,
    /// Collapsed vocabulary: space-joined symbol sequence -> frequency.
    pub vocab: HashMap<String, u64>,
    /// Composition map: decomposed expansion -> composed character.
    pub fidel_map: HashMap<String, String>,
    /// Token -> id.
    pub token_to_id: HashMap<String, u32>,
    /// Id -> token.
    pub id_to_token: HashMap<u32, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_roundtrip() {
        let artifact = SerializedTokenizer {
            version: "0.1.0".to_string(),
            num_merges: 100,
            max_vocab_size: Some(500),
            merges: vec![("ህ".to_string(), "e".to_string())],
            vocab: HashMap::from([("ህ e <eow>".to_string(), 3)]),
            fidel_map: HashMap::from([("ህe".to_string(), "ሀ".to_string())]),
            token_to_id: HashMap::from([("<pad>".to_string(), 0)]),
            id_to_token: HashMap::from([(0, "<pad>".to_string())]),
        };

        let json = serde_json::to_string(&artifact).unwrap();
        let parsed: SerializedTokenizer = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.num_merges, artifact.num_merges);
        assert_eq!(parsed.merges, artifact.merges);
        assert_eq!(parsed.vocab, artifact.vocab);
        assert_eq!(parsed.id_to_token, artifact.id_to_token);
    }

    #[test]
    fn test_malformed_merge_entry_rejected() {
        // A merge that is not a two-element pair fails deserialization.
        let json = r#"{
            "version": "0.1.0",
            "num_merges": 1,
            "max_vocab_size": null,
            "merges": [["a", "b", "c"]],
            "vocab": {},
            "fidel_map": {},
            "token_to_id": {},
            "id_to_token": {}
        }"#;

        assert!(serde_json::from_str::<SerializedTokenizer>(json).is_err());
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{"version": "0.1.0"}"#;
        assert!(serde_json::from_str::<SerializedTokenizer>(json).is_err());
    }
}
