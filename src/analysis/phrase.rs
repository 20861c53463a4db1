//! Rhyme and meter analysis of a single phrase.
//!
//! Every word of a phrase contributes its stress signature to a combined
//! stress string, `" "` + signatures joined by `" "` + `" "`. A word missing
//! from the dictionary contributes [`UNKNOWN_STRESS`], which no meter slot
//! accepts. The phrase's rhyme key is that of its last word.

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;
use crate::dictionary::word::{UNKNOWN_STRESS, Word};
use crate::index::resolver::WordResolver;
use crate::meter::matcher::MeterMatcher;

/// The analysis of one phrase. Holds copies, never references into the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeAndMeter {
    /// The phrase as given.
    pub phrase: String,
    /// Word tokens, in order.
    pub words: Vec<String>,
    /// Dictionary entry of each token, `None` where unresolved.
    pub resolved_words: Vec<Option<Word>>,
    /// Stress signature of each token.
    pub stress_strings: Vec<String>,
    /// Space-bounded, space-joined stress signatures. Empty for a phrase
    /// without words.
    pub combined_stress: String,
    /// Rhyme key of the last word, digits kept.
    pub final_syllable: String,
    /// Rhyme key of the last word, digits removed.
    pub final_syllable_letters: String,
    /// Whether any token failed to resolve.
    pub has_unresolved_word: bool,
    /// The stress run matched by the meter, empty if it did not match.
    pub meter_match: String,
}

impl RhymeAndMeter {
    /// Whether the meter matched somewhere in the phrase.
    pub fn matches_meter(&self) -> bool {
        !self.meter_match.is_empty()
    }

    /// Tokens that did not resolve, in phrase order.
    pub fn unresolved_words(&self) -> Vec<&str> {
        self.words
            .iter()
            .zip(&self.resolved_words)
            .filter(|(_, resolved)| resolved.is_none())
            .map(|(word, _)| word.as_str())
            .collect()
    }

    /// Total syllables of the resolved words.
    pub fn syllable_count(&self) -> usize {
        self.resolved_words
            .iter()
            .flatten()
            .map(|word| word.syllable_count)
            .sum()
    }
}

/// Analyses phrases against a resolver and tokenizer.
pub struct PhraseAnalyzer<'a> {
    resolver: &'a dyn WordResolver,
    tokenizer: &'a dyn Tokenizer,
}

impl<'a> PhraseAnalyzer<'a> {
    /// Create an analyzer over the given resolver and tokenizer.
    pub fn new(resolver: &'a dyn WordResolver, tokenizer: &'a dyn Tokenizer) -> Self {
        PhraseAnalyzer {
            resolver,
            tokenizer,
        }
    }

    /// Analyse `phrase` and match it against `meter`.
    pub fn analyze(&self, phrase: &str, meter: &MeterMatcher) -> RhymeAndMeter {
        let words: Vec<String> = self
            .tokenizer
            .tokenize(phrase)
            .map(|token| token.text)
            .collect();

        let resolved_words: Vec<Option<Word>> = words
            .iter()
            .map(|word| self.resolver.resolve(word).cloned())
            .collect();

        let stress_strings: Vec<String> = resolved_words
            .iter()
            .map(|resolved| match resolved {
                Some(word) => word.stress_signature.clone(),
                None => UNKNOWN_STRESS.to_string(),
            })
            .collect();
        let has_unresolved_word = resolved_words.iter().any(Option::is_none);

        let combined_stress = if stress_strings.is_empty() {
            String::new()
        } else {
            format!(" {} ", stress_strings.join(" "))
        };

        let (final_syllable, final_syllable_letters) = match resolved_words.last() {
            Some(Some(word)) => (
                word.final_syllable.clone(),
                word.final_syllable_letters.clone(),
            ),
            _ => (String::new(), String::new()),
        };

        let meter_match = meter.find(&combined_stress).unwrap_or_default();

        RhymeAndMeter {
            phrase: phrase.to_string(),
            words,
            resolved_words,
            stress_strings,
            combined_stress,
            final_syllable,
            final_syllable_letters,
            has_unresolved_word,
            meter_match,
        }
    }
}
