//! Dictionary word entries.
//!
//! A [`Word`] is derived entirely from one dictionary line: the canonical
//! name and the whitespace separated phoneme remainder.
//!
//! # Examples
//!
//! ```
//! use cadence::dictionary::word::Word;
//!
//! let word = Word::from_pronunciation("CAT", "K AE1 T");
//! assert_eq!(word.syllable_count, 1);
//! assert_eq!(word.stress_signature, "*");
//! assert_eq!(word.final_syllable, "AE1T");
//! assert_eq!(word.final_syllable_letters, "AET");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Stress signature of a word with no stress-bearing fragments.
pub const UNKNOWN_STRESS: &str = "X";

/// Stress signature of a single-syllable word. It satisfies any meter slot.
pub const WILDCARD_STRESS: &str = "*";

/// A phoneme carrying a stress level, e.g. `AE1`.
static STRESS_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+(\d+)$").expect("stress fragment pattern is valid"));

/// The last stressed phoneme and everything after it.
static FINAL_SYLLABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+\d+[^\d]*)$").expect("final syllable pattern is valid"));

/// One pronunciation dictionary entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Canonical surface form, in the dictionary's case (uppercase).
    pub name: String,

    /// The phoneme remainder exactly as written on the dictionary line.
    pub pronunciation: String,

    /// Phoneme tokens in order.
    pub phoneme_fragments: Vec<String>,

    /// Stress marker of every stress-bearing fragment, in order.
    pub stress_digits: Vec<String>,

    /// Number of stress-bearing fragments.
    pub syllable_count: usize,

    /// Rhyme key: last stressed phoneme to end of line, digits kept.
    /// Empty when the pronunciation has no stressed phoneme.
    pub final_syllable: String,

    /// `final_syllable` with the stress digits removed.
    pub final_syllable_letters: String,

    /// Concatenated stress digits, or one of the sentinels
    /// [`UNKNOWN_STRESS`] (no syllables) and [`WILDCARD_STRESS`] (one syllable).
    pub stress_signature: String,
}

impl Word {
    /// Build a word from its name and its phoneme remainder.
    pub fn from_pronunciation(name: &str, pronunciation: &str) -> Self {
        let phoneme_fragments: Vec<String> =
            pronunciation.split(' ').map(|f| f.to_string()).collect();

        let stress_digits: Vec<String> = phoneme_fragments
            .iter()
            .filter_map(|fragment| STRESS_FRAGMENT.captures(fragment))
            .map(|caps| caps[1].to_string())
            .collect();
        let syllable_count = stress_digits.len();

        let final_syllable = extract_final_syllable(pronunciation).unwrap_or_default();
        let final_syllable_letters = strip_digits(&final_syllable);

        let stress_signature = match syllable_count {
            0 => UNKNOWN_STRESS.to_string(),
            1 => WILDCARD_STRESS.to_string(),
            _ => stress_digits.concat(),
        };

        Word {
            name: name.to_string(),
            pronunciation: pronunciation.to_string(),
            phoneme_fragments,
            stress_digits,
            syllable_count,
            final_syllable,
            final_syllable_letters,
            stress_signature,
        }
    }

    /// Number of phoneme fragments on the dictionary line.
    pub fn fragment_count(&self) -> usize {
        self.phoneme_fragments.len()
    }

    /// Whether this word shares a rhyme key with `other`.
    pub fn rhymes_with(&self, other: &Word) -> bool {
        !self.final_syllable.is_empty() && self.final_syllable == other.final_syllable
    }
}

/// Find the rhyme key of a pronunciation, with the separating spaces removed.
pub fn extract_final_syllable(pronunciation: &str) -> Option<String> {
    FINAL_SYLLABLE
        .captures(pronunciation)
        .map(|caps| caps[1].split_whitespace().collect::<String>())
}

/// Remove every ASCII digit from `s`.
pub fn strip_digits(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_syllable_word() {
        let word = Word::from_pronunciation("CAT", "K AE1 T");

        assert_eq!(word.name, "CAT");
        assert_eq!(word.phoneme_fragments, vec!["K", "AE1", "T"]);
        assert_eq!(word.stress_digits, vec!["1"]);
        assert_eq!(word.syllable_count, 1);
        assert_eq!(word.stress_signature, WILDCARD_STRESS);
        assert!(word.final_syllable.contains("AE1T"));
        assert_eq!(word.final_syllable_letters, "AET");
        assert_eq!(word.fragment_count(), 3);
    }

    #[test]
    fn test_multi_syllable_word() {
        let word = Word::from_pronunciation(
            "HYPERACTIVITY",
            "HH AY2 P ER0 AE0 K T IH1 V AH0 T IY0",
        );

        assert_eq!(word.syllable_count, 6);
        assert_eq!(word.stress_digits.len(), word.syllable_count);
        assert_eq!(word.stress_signature, "200100");
        assert_eq!(word.final_syllable, "IY0");
        assert_eq!(word.final_syllable_letters, "IY");
    }

    #[test]
    fn test_final_syllable_keeps_trailing_consonants() {
        let word = Word::from_pronunciation("ABOUT", "AH0 B AW1 T");

        assert_eq!(word.stress_signature, "01");
        assert_eq!(word.final_syllable, "AW1T");
    }

    #[test]
    fn test_word_without_syllables() {
        let word = Word::from_pronunciation("HMM", "HH M");

        assert_eq!(word.syllable_count, 0);
        assert!(word.stress_digits.is_empty());
        assert_eq!(word.stress_signature, UNKNOWN_STRESS);
        assert_eq!(word.final_syllable, "");
        assert_eq!(word.final_syllable_letters, "");
    }

    #[test]
    fn test_rhymes_with() {
        let cat = Word::from_pronunciation("CAT", "K AE1 T");
        let hat = Word::from_pronunciation("HAT", "HH AE1 T");
        let dog = Word::from_pronunciation("DOG", "D AO1 G");
        let hmm = Word::from_pronunciation("HMM", "HH M");

        assert!(cat.rhymes_with(&hat));
        assert!(!cat.rhymes_with(&dog));
        assert!(!hmm.rhymes_with(&hmm));
    }

    #[test]
    fn test_strip_digits() {
        assert_eq!(strip_digits("AE1T"), "AET");
        assert_eq!(strip_digits("IY0"), "IY");
        assert_eq!(strip_digits(""), "");
    }
}
