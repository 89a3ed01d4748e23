//! Token/id registry: dense, injective token <-> id mappings.
//!
//! Special tokens always occupy the lowest ids in a fixed canonical order
//! and are admitted regardless of the configured size ceiling. Learned
//! tokens are admitted until the ceiling is reached; lookups never fail.

use crate::error::{Result, TokenizerError};
use crate::merges::MergeTable;
use crate::symbol::{Symbol, SPECIAL_TOKENS, UNK};
use ahash::{AHashMap, AHashSet};

/// Cached ids of the reserved special tokens.
#[derive(Debug, Clone, Copy)]
pub struct SpecialIds {
    pub pad: u32,
    pub unk: u32,
    pub bos: u32,
    pub eos: u32,
    pub eow: u32,
}

/// Dense token <-> id registry.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    token_to_id: AHashMap<Symbol, u32>,
    id_to_token: AHashMap<u32, Symbol>,
    special: SpecialIds,
    max_size: Option<usize>,
}

impl TokenRegistry {
    /// Create a registry holding only the special tokens.
    pub fn new(max_size: Option<usize>) -> Self {
        let mut token_to_id = AHashMap::new();
        let mut id_to_token = AHashMap::new();

        for (id, token) in SPECIAL_TOKENS.iter().enumerate() {
            let id = id as u32;
            token_to_id.insert(Symbol::new(token), id);
            id_to_token.insert(id, Symbol::new(token));
        }

        let special = SpecialIds {
            pad: 0,
            unk: 1,
            bos: 2,
            eos: 3,
            eow: 4,
        };

        Self {
            token_to_id,
            id_to_token,
            special,
            max_size,
        }
    }

    /// Build the registry from the trained state, in the fixed admission
    /// order: special tokens, then the distinct symbols of the collapsed
    /// vocabulary (sorted for run-to-run stability), then merged symbols in
    /// learned order. Admission stops at the ceiling; specials are exempt.
    pub fn rebuild(
        words: &[(Vec<Symbol>, u64)],
        merges: &MergeTable,
        max_size: Option<usize>,
    ) -> Self {
        let mut registry = Self::new(max_size);

        let mut base_symbols: Vec<&Symbol> = {
            let mut seen = AHashSet::new();
            for (word, _) in words {
                for symbol in word {
                    seen.insert(symbol);
                }
            }
            seen.into_iter().collect()
        };
        base_symbols.sort_unstable();

        for symbol in base_symbols {
            registry.admit(symbol);
        }

        for (left, right) in merges.iter() {
            let fused = MergeTable::fused(left, right);
            registry.admit(&fused);
        }

        registry
    }

    /// Reconstruct a registry from persisted maps, verifying that the two
    /// maps are mutual inverses with ids dense from 0 and that every
    /// special token is present.
    pub fn from_maps(
        token_to_id: AHashMap<Symbol, u32>,
        id_to_token: AHashMap<u32, Symbol>,
        max_size: Option<usize>,
    ) -> Result<Self> {
        if token_to_id.len() != id_to_token.len() {
            return Err(TokenizerError::Load(format!(
                "id maps disagree: {} tokens vs {} ids",
                token_to_id.len(),
                id_to_token.len()
            )));
        }

        let len = token_to_id.len() as u32;
        for (token, &id) in &token_to_id {
            if id >= len {
                return Err(TokenizerError::Load(format!(
                    "token ids are not dense: id {id} with only {len} tokens"
                )));
            }
            match id_to_token.get(&id) {
                Some(reverse) if reverse == token => {}
                _ => {
                    return Err(TokenizerError::Load(format!(
                        "id maps are not mutual inverses at token {token:?} (id {id})"
                    )));
                }
            }
        }

        let mut special_ids = [0u32; SPECIAL_TOKENS.len()];
        for (slot, token) in special_ids.iter_mut().zip(SPECIAL_TOKENS) {
            *slot = *token_to_id.get(token).ok_or_else(|| {
                TokenizerError::Load(format!("special token {token} missing from artifact"))
            })?;
        }
        let special = SpecialIds {
            pad: special_ids[0],
            unk: special_ids[1],
            bos: special_ids[2],
            eos: special_ids[3],
            eow: special_ids[4],
        };

        Ok(Self {
            token_to_id,
            id_to_token,
            special,
            max_size,
        })
    }

    /// Admit a token, honoring the size ceiling. Returns the token's id, or
    /// None if the ceiling is reached and the token is not yet registered.
    pub fn admit(&mut self, token: &Symbol) -> Option<u32> {
        if let Some(&id) = self.token_to_id.get(token) {
            return Some(id);
        }

        if let Some(max) = self.max_size {
            if self.token_to_id.len() >= max {
                return None;
            }
        }

        let id = self.token_to_id.len() as u32;
        self.token_to_id.insert(token.clone(), id);
        self.id_to_token.insert(id, token.clone());
        Some(id)
    }

    /// Look up a token's id; unseen tokens resolve to the unknown id.
    #[inline]
    pub fn id_of(&self, token: &str) -> u32 {
        self.token_to_id
            .get(token)
            .copied()
            .unwrap_or(self.special.unk)
    }

    /// Look up an id's token; unknown ids resolve to the unknown marker.
    #[inline]
    pub fn token_of(&self, id: u32) -> &str {
        self.id_to_token.get(&id).map(|s| s.as_str()).unwrap_or(UNK)
    }

    /// Cached special-token ids.
    #[inline]
    pub fn special(&self) -> SpecialIds {
        self.special
    }

    /// Configured size ceiling, if any.
    #[inline]
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Number of registered tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.token_to_id.len()
    }

    /// Whether the registry is empty (never true: specials are always in).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token_to_id.is_empty()
    }

    /// Iterate (token, id) entries, for persistence.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, u32)> {
        self.token_to_id.iter().map(|(token, &id)| (token, id))
    }
}
