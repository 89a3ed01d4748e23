//! Fidel codec: bidirectional mapping between composed Ethiopic characters
//! and their decomposed consonant+vowel expansions.
//!
//! Decomposition replaces each fidel glyph with its sadis (bare consonant)
//! form followed by a vowel marker; composition is the greedy longest-match
//! inverse. Both directions are total: characters without a mapping pass
//! through unchanged.

use ahash::AHashMap;
use compact_str::CompactString;

/// First Ethiopic syllable codepoint.
const SYLLABLE_FIRST: u32 = 0x1200;
/// Last Ethiopic syllable codepoint (punctuation and digits excluded).
const SYLLABLE_LAST: u32 = 0x135A;

/// Vowel markers per syllable order. Order 6 (index 5) is the sadis form
/// itself and has no marker.
const VOWEL_MARKERS: [Option<char>; 8] = [
    Some('e'),
    Some('u'),
    Some('i'),
    Some('a'),
    Some('E'),
    None,
    Some('o'),
    Some('w'),
];

/// Trie node for longest-match composition lookup.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: AHashMap<char, TrieNode>,
    /// Composed character if the path to this node is a complete key.
    composed: Option<char>,
}

/// Bidirectional fidel codec.
///
/// The composition trie is built once at construction, so `compose` never
/// re-sorts or re-scans the key set.
#[derive(Debug, Clone)]
pub struct FidelCodec {
    /// Composed character -> decomposed expansion.
    decompositions: AHashMap<char, CompactString>,
    /// Decomposed expansion -> composed character.
    compositions: AHashMap<CompactString, char>,
    /// Prefix trie over decomposed keys.
    trie: TrieNode,
}

impl FidelCodec {
    /// Build the codec for the Ethiopic syllabary.
    ///
    /// Each family of eight syllable orders decomposes to the family's
    /// sadis character plus a vowel marker; the sadis itself is left as-is.
    pub fn ethiopic() -> Self {
        let mut entries = Vec::new();

        for cp in SYLLABLE_FIRST..=SYLLABLE_LAST {
            let order = ((cp - SYLLABLE_FIRST) % 8) as usize;
            let Some(marker) = VOWEL_MARKERS[order] else {
                continue;
            };

            let base_cp = cp - order as u32 + 5;
            let (Some(composed), Some(base)) = (char::from_u32(cp), char::from_u32(base_cp))
            else {
                continue;
            };

            let mut decomposed = CompactString::new("");
            decomposed.push(base);
            decomposed.push(marker);
            entries.push((decomposed, composed));
        }

        Self::from_entries(entries)
    }

    /// Build a codec from explicit (decomposed, composed) entries.
    ///
    /// Used when reconstructing a codec from a persisted artifact.
    pub fn from_entries(entries: impl IntoIterator<Item = (CompactString, char)>) -> Self {
        let mut decompositions = AHashMap::new();
        let mut compositions = AHashMap::new();
        let mut trie = TrieNode::default();

        for (decomposed, composed) in entries {
            let mut node = &mut trie;
            for ch in decomposed.chars() {
                node = node.children.entry(ch).or_default();
            }
            node.composed = Some(composed);

            decompositions.insert(composed, decomposed.clone());
            compositions.insert(decomposed, composed);
        }

        Self {
            decompositions,
            compositions,
            trie,
        }
    }

    /// Decompose every mapped character in `text`; unmapped characters pass
    /// through unchanged.
    pub fn decompose(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match self.decompositions.get(&ch) {
                Some(expansion) => out.push_str(expansion),
                None => out.push(ch),
            }
        }
        out
    }

    /// Recompose decomposed text using greedy longest-match over the known
    /// expansions. Positions where no key matches emit the character as-is.
    pub fn compose(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut pos = 0;

        while pos < chars.len() {
            match self.longest_match(&chars, pos) {
                Some((composed, len)) => {
                    out.push(composed);
                    pos += len;
                }
                None => {
                    out.push(chars[pos]);
                    pos += 1;
                }
            }
        }

        out
    }

    /// Walk the trie from `pos`, remembering the deepest complete key.
    fn longest_match(&self, chars: &[char], pos: usize) -> Option<(char, usize)> {
        let mut node = &self.trie;
        let mut best: Option<(char, usize)> = None;

        for (i, &ch) in chars.iter().enumerate().skip(pos) {
            match node.children.get(&ch) {
                Some(child) => {
                    node = child;
                    if let Some(composed) = node.composed {
                        best = Some((composed, i - pos + 1));
                    }
                }
                None => break,
            }
        }

        best
    }

    /// Number of mapped characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.decompositions.len()
    }

    /// Whether the codec has no mappings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.decompositions.is_empty()
    }

    /// Iterate (decomposed, composed) entries, for persistence.
    pub fn entries(&self) -> impl Iterator<Item = (&CompactString, char)> {
        self.compositions.iter().map(|(k, &v)| (k, v))
    }
}

impl Default for FidelCodec {
    fn default() -> Self {
        Self::ethiopic()
    }
}
