//! Symbol type and reserved marker strings.
//!
//! A symbol is the unit the BPE engine operates on: a single decomposed
//! fidel character, a structural marker, or a merged subword. Symbols are
//! immutable values compared by exact string equality.

use compact_str::CompactString;

/// A single subword unit.
pub type Symbol = CompactString;

/// End-of-word marker appended to every word's symbol sequence.
pub const EOW: &str = "<eow>";
/// Unknown-token marker.
pub const UNK: &str = "<unk>";
/// Padding token.
pub const PAD: &str = "<pad>";
/// Begin-of-sequence token.
pub const BOS: &str = "<bos>";
/// End-of-sequence token.
pub const EOS: &str = "<eos>";

/// Special tokens in canonical admission order. These always occupy the
/// lowest ids in the registry, before any learned token.
pub const SPECIAL_TOKENS: [&str; 5] = [PAD, UNK, BOS, EOS, EOW];
