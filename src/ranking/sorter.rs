//! Sorting phrases by rhyme.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::index::syllabi::Syllabi;

/// A phrase and the letters of its final syllable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymingPhrase {
    /// The phrase as given.
    pub phrase: String,
    /// Final syllable of the phrase's last word, digits removed. Empty when
    /// that word is not in the dictionary.
    pub rhyme_key: String,
}

impl RhymingPhrase {
    /// Create a new rhyming phrase.
    pub fn new<P: Into<String>, K: Into<String>>(phrase: P, rhyme_key: K) -> Self {
        RhymingPhrase {
            phrase: phrase.into(),
            rhyme_key: rhyme_key.into(),
        }
    }
}

/// Descending order of rhyme keys.
fn by_rhyme_key_descending(a: &RhymingPhrase, b: &RhymingPhrase) -> Ordering {
    b.rhyme_key.cmp(&a.rhyme_key)
}

/// Key every phrase by its final syllable letters and sort descending, so
/// phrases with identical endings end up next to each other. The sort is
/// stable: phrases with equal keys keep their input order.
pub fn sort_by_rhyme<S: AsRef<str>>(syllabi: &Syllabi, phrases: &[S]) -> Vec<RhymingPhrase> {
    let mut keyed: Vec<RhymingPhrase> = phrases
        .iter()
        .map(|phrase| {
            let phrase = phrase.as_ref();
            RhymingPhrase::new(phrase, syllabi.final_syllable_letters_of_phrase(phrase))
        })
        .collect();
    keyed.sort_by(by_rhyme_key_descending);
    keyed
}

/// Group consecutive phrases of a sorted batch by rhyme key.
pub fn group_by_rhyme(sorted: &[RhymingPhrase]) -> Vec<(&str, Vec<&str>)> {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for item in sorted {
        if let Some((key, phrases)) = groups.last_mut()
            && *key == item.rhyme_key
        {
            phrases.push(item.phrase.as_str());
            continue;
        }
        groups.push((item.rhyme_key.as_str(), vec![item.phrase.as_str()]));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::source::DictionarySource;

    fn syllabi() -> Syllabi {
        Syllabi::from_sources(&[DictionarySource::new(
            "test",
            "CAT  K AE1 T\nHAT  HH AE1 T\nDOG  D AO1 G\nFOG  F AA1 G\nTHE  DH AH0\n",
        )])
        .unwrap()
    }

    #[test]
    fn test_sort_descending() {
        let syllabi = syllabi();
        let phrases = vec!["the cat", "the dog", "a zorp", "the fog", "my hat"];

        let sorted = sort_by_rhyme(&syllabi, &phrases);
        let keys: Vec<&str> = sorted.iter().map(|p| p.rhyme_key.as_str()).collect();
        let order: Vec<&str> = sorted.iter().map(|p| p.phrase.as_str()).collect();

        assert_eq!(keys, vec!["AOG", "AET", "AET", "AAG", ""]);
        assert_eq!(order, vec!["the dog", "the cat", "my hat", "the fog", "a zorp"]);
    }

    #[test]
    fn test_sort_is_repeatable() {
        let syllabi = syllabi();
        let phrases = vec!["my hat", "the cat", "the dog", "hat", "cat"];

        let first = sort_by_rhyme(&syllabi, &phrases);
        let second = sort_by_rhyme(&syllabi, &phrases);
        assert_eq!(first, second);
    }

    #[test]
    fn test_group_by_rhyme() {
        let syllabi = syllabi();
        let sorted = sort_by_rhyme(&syllabi, &["the cat", "the dog", "my hat"]);

        let groups = group_by_rhyme(&sorted);
        assert_eq!(
            groups,
            vec![
                ("AOG", vec!["the dog"]),
                ("AET", vec!["the cat", "my hat"]),
            ]
        );
    }

    #[test]
    fn test_empty_batch() {
        let syllabi = syllabi();
        let phrases: Vec<String> = Vec::new();
        assert!(sort_by_rhyme(&syllabi, &phrases).is_empty());
        assert!(group_by_rhyme(&[]).is_empty());
    }
}
