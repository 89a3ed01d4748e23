//! Iterative BPE merge learning.
//!
//! The learner repeatedly selects the most frequent adjacent pair across
//! the word vocabulary, fuses it everywhere, and records the merge. The
//! resulting ordered merge list is the trained vocabulary; its index order
//! is the rank used at encode time.

use super::counter::PairCounter;
use amtok_core::merges::{MergePair, MergeTable};
use amtok_core::symbol::Symbol;
use ahash::AHashSet;
use log::info;

/// Configuration for merge learning.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Maximum number of merges to learn.
    pub num_merges: usize,
    /// Ceiling on the number of distinct tokens (base symbols + merged
    /// subwords). None disables the ceiling.
    pub max_vocab_size: Option<usize>,
    /// Merges supported by fewer occurrences than this are rejected.
    pub min_pair_frequency: u64,
    /// Emit a progress log line every this many merges. 0 disables.
    pub log_every: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_merges: 50_000,
            max_vocab_size: Some(10_000),
            min_pair_frequency: 2,
            log_every: 1_000,
        }
    }
}

/// BPE merge learner.
pub struct MergeLearner {
    config: TrainingConfig,
}

impl MergeLearner {
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Learn merges from the pre-segmented word vocabulary, collapsing it
    /// in place. Returns the ordered merge table.
    ///
    /// Stop conditions: merge budget reached, no adjacent pairs remain,
    /// best pair below the frequency floor, or distinct-token ceiling hit.
    pub fn learn(&self, words: &mut Vec<(Vec<Symbol>, u64)>) -> MergeTable {
        let mut counter = PairCounter::count_words(words);
        let mut merges = MergeTable::new();

        let mut tokens: AHashSet<Symbol> = AHashSet::new();
        for (word, _) in words.iter() {
            tokens.extend(word.iter().cloned());
        }

        for step in 0..self.config.num_merges {
            if let Some(max) = self.config.max_vocab_size {
                if tokens.len() >= max {
                    info!("vocabulary ceiling {max} reached after {step} merges");
                    break;
                }
            }

            let Some((pair, count)) = counter.best() else {
                info!("pair table exhausted after {step} merges");
                break;
            };
            if count < self.config.min_pair_frequency {
                break;
            }

            let pair = pair.clone();
            let fused = MergeTable::fused(&pair.0, &pair.1);

            merges.push(pair.clone());
            tokens.insert(fused.clone());
            Self::fuse_everywhere(words, &pair, &fused, &mut counter);

            if self.config.log_every > 0 && (step + 1) % self.config.log_every == 0 {
                info!(
                    "merge {}/{}: {:?}+{:?} (count {count}), {} distinct tokens",
                    step + 1,
                    self.config.num_merges,
                    pair.0,
                    pair.1,
                    tokens.len()
                );
            }
        }

        merges
    }

    /// Fuse every occurrence of `pair` in every word with a single linear
    /// left-to-right pass per word, updating the pair counts from the local
    /// deltas around each fused position.
    fn fuse_everywhere(
        words: &mut [(Vec<Symbol>, u64)],
        pair: &MergePair,
        fused: &Symbol,
        counter: &mut PairCounter,
    ) {
        for (word, count) in words.iter_mut() {
            let count = *count;
            let mut i = 0;

            while i + 1 < word.len() {
                if word[i] == pair.0 && word[i + 1] == pair.1 {
                    if i > 0 {
                        counter.sub(&(word[i - 1].clone(), word[i].clone()), count);
                        counter.add((word[i - 1].clone(), fused.clone()), count);
                    }
                    if i + 2 < word.len() {
                        counter.sub(&(word[i + 1].clone(), word[i + 2].clone()), count);
                        counter.add((fused.clone(), word[i + 2].clone()), count);
                    }

                    word[i] = fused.clone();
                    word.remove(i + 1);
                } else {
                    i += 1;
                }
            }
        }

        counter.remove(pair);
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

    fn config(num_merges: usize) -> TrainingConfig {
        TrainingConfig {
            num_merges,
            max_vocab_size: None,
            min_pair_frequency: 2,
            log_every: 0,
        }
    }

    #[test]
    fn test_most_frequent_pair_wins() {
        // "ab ab ab ac": (a,b) count 3 beats (a,c) count 1.
        let mut words = vec![
            word(&["a", "b", "<eow>"], 3),
            word(&["a", "c", "<eow>"], 1),
        ];

        let learner = MergeLearner::new(config(1));
        let merges = learner.learn(&mut words);

        assert_eq!(merges.len(), 1);
        assert_eq!(merges.rank(&sym("a"), &sym("b")), Some(0));
    }

    #[test]
    fn test_merge_collapses_words_in_place() {
        let mut words = vec![word(&["a", "b", "<eow>"], 3)];

        let learner = MergeLearner::new(config(1));
        learner.learn(&mut words);

        assert_eq!(words[0].0, vec![sym("ab"), sym("<eow>")]);
    }

    #[test]
    fn test_frequency_floor_stops_training() {
        let mut words = vec![word(&["a", "b", "<eow>"], 1)];

        let learner = MergeLearner::new(config(10));
        let merges = learner.learn(&mut words);

        assert!(merges.is_empty());
    }

    #[test]
    fn test_merge_budget_respected() {
        let mut words = vec![word(&["a", "b", "c", "d", "<eow>"], 5)];

        let learner = MergeLearner::new(config(2));
        let merges = learner.learn(&mut words);

        assert_eq!(merges.len(), 2);
    }

    #[test]
    fn test_prefix_stability() {
        // Training with a larger budget extends, never rewrites, the list.
        let corpus = [
            word(&["a", "b", "c", "<eow>"], 4),
            word(&["a", "b", "d", "<eow>"], 3),
            word(&["b", "c", "d", "<eow>"], 2),
        ];

        let short = MergeLearner::new(config(2)).learn(&mut corpus.to_vec());
        let long = MergeLearner::new(config(4)).learn(&mut corpus.to_vec());

        let short_pairs: Vec<_> = short.iter().cloned().collect();
        let long_pairs: Vec<_> = long.iter().cloned().collect();
        assert!(long_pairs.len() >= short_pairs.len());
        assert_eq!(&long_pairs[..short_pairs.len()], short_pairs.as_slice());
    }

    #[test]
    fn test_vocab_ceiling_stops_training() {
        let mut words = vec![word(&["a", "b", "c", "d", "<eow>"], 5)];
        // 5 distinct base tokens already meet the ceiling.
        let learner = MergeLearner::new(TrainingConfig {
            num_merges: 10,
            max_vocab_size: Some(5),
            min_pair_frequency: 2,
            log_every: 0,
        });

        let merges = learner.learn(&mut words);
        assert!(merges.is_empty());
    }

    #[test]
    fn test_alternating_pattern_single_pass() {
        // "a a a" merges positions 0-1 only; the freshly created boundary
        // does not re-trigger within the same pass.
        let mut words = vec![word(&["a", "a", "a", "<eow>"], 2)];

        let learner = MergeLearner::new(config(1));
        learner.learn(&mut words);

        assert_eq!(words[0].0, vec![sym("aa"), sym("a"), sym("<eow>")]);
    }
}
