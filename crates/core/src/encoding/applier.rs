//! Deterministic merge application for a single word.
//!
//! Encoding applies the already-learned priority order to one word at a
//! time: among the adjacent pairs present in the rank table, the one with
//! the lowest rank wins, and all its occurrences are fused in one
//! left-to-right non-overlapping pass. This is deliberately not the
//! training rule (globally most frequent pair); it is the standard BPE
//! encode-side asymmetry.

use crate::merges::MergeTable;
use crate::symbol::Symbol;

/// Applies learned merges to word symbol sequences.
pub struct MergeApplier<'a> {
    merges: &'a MergeTable,
}

impl<'a> MergeApplier<'a> {
    pub fn new(merges: &'a MergeTable) -> Self {
        Self { merges }
    }

    /// Collapse a word's symbol sequence until no ranked pair remains.
    pub fn apply(&self, mut symbols: Vec<Symbol>) -> Vec<Symbol> {
        loop {
            let Some(pos) = self.lowest_ranked_pair(&symbols) else {
                break;
            };

            let left = symbols[pos].clone();
            let right = symbols[pos + 1].clone();
            let fused = MergeTable::fused(&left, &right);

            symbols = Self::fuse_all(symbols, &left, &right, &fused);
        }

        symbols
    }

    /// Position of the first occurrence of the lowest-ranked adjacent pair,
    /// or None when no adjacent pair is in the rank table.
    fn lowest_ranked_pair(&self, symbols: &[Symbol]) -> Option<usize> {
        let mut best: Option<(u32, usize)> = None;

        for (i, window) in symbols.windows(2).enumerate() {
            if let Some(rank) = self.merges.rank(&window[0], &window[1]) {
                if best.map_or(true, |(best_rank, _)| rank < best_rank) {
                    best = Some((rank, i));
                }
            }
        }

        best.map(|(_, pos)| pos)
    }

    /// Replace every non-overlapping occurrence of (left, right) with the
    /// fused symbol in a single left-to-right pass. A merge consumes both
    /// positions and never re-triggers at the boundary it creates.
    fn fuse_all(symbols: Vec<Symbol>, left: &Symbol, right: &Symbol, fused: &Symbol) -> Vec<Symbol> {
        let mut out = Vec::with_capacity(symbols.len());
        let mut iter = symbols.into_iter().peekable();

        while let Some(symbol) = iter.next() {
            if &symbol == left && iter.peek() == Some(right) {
                iter.next();
                out.push(fused.clone());
            } else {
                out.push(symbol);
            }
        }

        out
    }
}
