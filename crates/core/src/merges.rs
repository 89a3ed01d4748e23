//! Learned merge list and derived rank table.
//!
//! The ordered merge list is the trained vocabulary; a merge's position in
//! the list is its rank, and lower rank means higher priority at encode
//! time. The rank map is derived from list order and rebuilt whenever a
//! table is reconstructed, so the list is always authoritative.

use crate::symbol::Symbol;
use ahash::AHashMap;

/// An ordered pair of symbols the learner decided to fuse.
pub type MergePair = (Symbol, Symbol);

/// Ordered merge list with a derived pair -> rank lookup.
#[derive(Debug, Clone, Default)]
pub struct MergeTable {
    merges: Vec<MergePair>,
    ranks: AHashMap<MergePair, u32>,
}

impl MergeTable {
    /// Create an empty merge table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a table from an ordered pair list, assigning rank by
    /// position. Later duplicates of an already-ranked pair are dropped.
    pub fn from_pairs(pairs: impl IntoIterator<Item = MergePair>) -> Self {
        let mut table = Self::new();
        for pair in pairs {
            table.push(pair);
        }
        table
    }

    /// Record a merge at the next rank. Returns false if the pair was
    /// already recorded (a merge is recorded at most once).
    pub fn push(&mut self, pair: MergePair) -> bool {
        if self.ranks.contains_key(&pair) {
            return false;
        }

        let rank = self.merges.len() as u32;
        self.ranks.insert(pair.clone(), rank);
        self.merges.push(pair);
        true
    }

    /// Rank of a pair, if it was learned.
    #[inline]
    pub fn rank(&self, left: &Symbol, right: &Symbol) -> Option<u32> {
        self.ranks.get(&(left.clone(), right.clone())).copied()
    }

    /// The fused symbol a pair merges into.
    pub fn fused(left: &Symbol, right: &Symbol) -> Symbol {
        let mut fused = Symbol::with_capacity(left.len() + right.len());
        fused.push_str(left);
        fused.push_str(right);
        fused
    }

    /// Number of learned merges.
    #[inline]
    pub fn len(&self) -> usize {
        self.merges.len()
    }

    /// Whether no merges have been learned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty()
    }

    /// Iterate merges in learned (rank) order.
    pub fn iter(&self) -> impl Iterator<Item = &MergePair> {
        self.merges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(s: &str) -> Symbol {
        Symbol::new(s)
    }

    #[test]
    fn test_push_assigns_ranks_in_order() {
        let mut table = MergeTable::new();
        assert!(table.push((sym("a"), sym("b"))));
        assert!(table.push((sym("ab"), sym("c"))));

        assert_eq!(table.rank(&sym("a"), &sym("b")), Some(0));
        assert_eq!(table.rank(&sym("ab"), &sym("c")), Some(1));
        assert_eq!(table.rank(&sym("b"), &sym("c")), None);
    }

    #[test]
    fn test_duplicate_merge_rejected() {
        let mut table = MergeTable::new();
        assert!(table.push((sym("a"), sym("b"))));
        assert!(!table.push((sym("a"), sym("b"))));

        assert_eq!(table.len(), 1);
        assert_eq!(table.rank(&sym("a"), &sym("b")), Some(0));
    }

    #[test]
    fn test_from_pairs_rederives_ranks() {
        let table = MergeTable::from_pairs([
            (sym("x"), sym("y")),
            (sym("xy"), sym("z")),
            (sym("x"), sym("y")), // duplicate keeps its first rank
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.rank(&sym("x"), &sym("y")), Some(0));
        assert_eq!(table.rank(&sym("xy"), &sym("z")), Some(1));
    }

    #[test]
    fn test_fused() {
        assert_eq!(MergeTable::fused(&sym("ህ"), &sym("e")), sym("ህe"));
    }
}
