//! Load-time index statistics.

use serde::{Deserialize, Serialize};

use crate::dictionary::word::Word;

/// Totals computed once when the index is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of distinct dictionary words.
    pub total_words: usize,
    /// Number of distinct final-syllable signatures.
    pub total_rhyme_groups: usize,
    /// Phoneme fragments across all words.
    pub total_fragments: usize,
    /// Syllables across all words.
    pub total_syllables: usize,
}

impl Stats {
    /// Compute totals over `words`, which form `rhyme_groups` groups.
    pub fn from_words(words: &[Word], rhyme_groups: usize) -> Self {
        Stats {
            total_words: words.len(),
            total_rhyme_groups: rhyme_groups,
            total_fragments: words.iter().map(Word::fragment_count).sum(),
            total_syllables: words.iter().map(|w| w.syllable_count).sum(),
        }
    }

    /// Mean syllables per word, 0.0 for an empty index.
    pub fn average_syllables(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.total_syllables as f64 / self.total_words as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words() {
        let words = vec![
            Word::from_pronunciation("CAT", "K AE1 T"),
            Word::from_pronunciation("ABOUT", "AH0 B AW1 T"),
        ];
        let stats = Stats::from_words(&words, 2);

        assert_eq!(stats.total_words, 2);
        assert_eq!(stats.total_rhyme_groups, 2);
        assert_eq!(stats.total_fragments, 7);
        assert_eq!(stats.total_syllables, 3);
        assert_eq!(stats.average_syllables(), 1.5);
    }

    #[test]
    fn test_empty() {
        let stats = Stats::from_words(&[], 0);
        assert_eq!(stats, Stats::default());
        assert_eq!(stats.average_syllables(), 0.0);
    }
}
