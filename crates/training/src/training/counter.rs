//! Frequency-weighted adjacent pair counting.
//!
//! Counts are accumulated over the whole word-frequency vocabulary: every
//! adjacent pair inside a word contributes that word's occurrence count.
//! After a merge, counts are updated incrementally from the local deltas
//! around each fused position rather than recounted from scratch.

use amtok_core::merges::MergePair;
use amtok_core::symbol::Symbol;
use ahash::AHashMap;

/// Pair -> accumulated frequency table.
#[derive(Debug, Clone, Default)]
pub struct PairCounter {
    counts: AHashMap<MergePair, u64>,
}

impl PairCounter {
    /// Count every adjacent pair across the word vocabulary.
    pub fn count_words(words: &[(Vec<Symbol>, u64)]) -> Self {
        let mut counter = Self::default();

        for (word, count) in words {
            for window in word.windows(2) {
                counter.add((window[0].clone(), window[1].clone()), *count);
            }
        }

        counter
    }

    /// Increase a pair's count.
    pub fn add(&mut self, pair: MergePair, n: u64) {
        *self.counts.entry(pair).or_insert(0) += n;
    }

    /// Decrease a pair's count, dropping the entry when it reaches zero.
    pub fn sub(&mut self, pair: &MergePair, n: u64) {
        if let Some(count) = self.counts.get_mut(pair) {
            *count = count.saturating_sub(n);
            if *count == 0 {
                self.counts.remove(pair);
            }
        }
    }

    /// Remove a pair entirely (used for the pair that was just merged
    /// everywhere: no occurrence of it survives the fuse pass).
    pub fn remove(&mut self, pair: &MergePair) {
        self.counts.remove(pair);
    }

    /// Current count for a pair.
    #[inline]
    pub fn get(&self, pair: &MergePair) -> u64 {
        self.counts.get(pair).copied().unwrap_or(0)
    }

    /// The most frequent pair. Ties break to the lexicographically smallest
    /// pair so selection is deterministic regardless of map iteration order.
    pub fn best(&self) -> Option<(&MergePair, u64)> {
        let mut best: Option<(&MergePair, u64)> = None;

        for (pair, &count) in &self.counts {
            let better = match best {
                None => true,
                Some((best_pair, best_count)) => {
                    count > best_count || (count == best_count && pair < best_pair)
                }
            };
            if better {
                best = Some((pair, count));
            }
        }

        best
    }

    /// Number of distinct pairs with a nonzero count.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no adjacent pairs remain anywhere in the vocabulary.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(s: &str) -> Symbol {
        Symbol::new(s)
    }

    fn word(parts: &[&str], count: u64) -> (Vec<Symbol>, u64) {
        (parts.iter().map(|s| sym(s)).collect(), count)
    }

    #[test]
    fn test_counts_weighted_by_word_frequency() {
        let words = vec![word(&["a", "b", "c"], 3), word(&["b", "c"], 2)];
        let counter = PairCounter::count_words(&words);

        assert_eq!(counter.get(&(sym("a"), sym("b"))), 3);
        assert_eq!(counter.get(&(sym("b"), sym("c"))), 5);
    }

    #[test]
    fn test_best_picks_max_count() {
        let words = vec![word(&["a", "b"], 3), word(&["a", "c"], 1)];
        let counter = PairCounter::count_words(&words);

        let (pair, count) = counter.best().unwrap();
        assert_eq!(pair, &(sym("a"), sym("b")));
        assert_eq!(count, 3);
    }

    #[test]
    fn test_best_tie_breaks_lexicographically() {
        let words = vec![word(&["b", "a"], 2), word(&["a", "b"], 2)];
        let counter = PairCounter::count_words(&words);

        let (pair, _) = counter.best().unwrap();
        assert_eq!(pair, &(sym("a"), sym("b")));
    }

    #[test]
    fn test_sub_drops_zero_entries() {
        let mut counter = PairCounter::default();
        let pair = (sym("x"), sym("y"));

        counter.add(pair.clone(), 2);
        counter.sub(&pair, 2);
        assert!(counter.is_empty());
    }
}
