//! The Syllabi index.
//!
//! Built once from dictionary sources, then shared read-only between
//! queries. The only state mutated after construction is the miss registry,
//! which is internally synchronized, so a `Syllabi` can be shared across
//! threads behind an `Arc` or a plain reference.
//!
//! # Examples
//!
//! ```
//! use cadence::dictionary::source::DictionarySource;
//! use cadence::index::syllabi::Syllabi;
//! use cadence::meter::matcher::MeterMatcher;
//!
//! let syllabi = Syllabi::from_sources(&[DictionarySource::new(
//!     "inline",
//!     "CAT  K AE1 T\nHAT  HH AE1 T\nTHE  DH AH0\n",
//! )])
//! .unwrap();
//!
//! assert_eq!(syllabi.rhymes_of("cat"), vec!["CAT", "HAT"]);
//!
//! let analysis = syllabi.analyze("the cat", &MeterMatcher::compile("01$"));
//! assert!(analysis.matches_meter());
//! ```

use std::path::Path;

use ahash::AHashMap;
use rayon::prelude::*;

use crate::analysis::phrase::{PhraseAnalyzer, RhymeAndMeter};
use crate::analysis::tokenizer::{PhraseTokenizer, last_default_word};
use crate::dictionary::parser::parse_sources;
use crate::dictionary::source::DictionarySource;
use crate::dictionary::word::{Word, strip_digits};
use crate::error::Result;
use crate::index::resolver::{MissRegistry, WordResolver, lookup_key};
use crate::index::stats::Stats;
use crate::meter::matcher::MeterMatcher;

/// Pronunciation index: words, rhyme groups and registries.
#[derive(Debug)]
pub struct Syllabi {
    /// Words in dictionary order.
    words: Vec<Word>,
    /// Word name to position in `words`.
    words_by_name: AHashMap<String, usize>,
    /// Final syllable to positions of the words sharing it, in dictionary order.
    rhyme_groups: AHashMap<String, Vec<usize>>,
    /// Lookup string to dictionary key, from `MAP:` directives.
    aliases: AHashMap<String, String>,
    /// Patterns from `REGEXP:` directives, in load order.
    extra_patterns: Vec<String>,
    /// Tokenizer built from the default and extra patterns.
    tokenizer: PhraseTokenizer,
    misses: MissRegistry,
    stats: Stats,
    source_names: Vec<String>,
}

impl Syllabi {
    /// Build the index from `sources`, applied in order.
    pub fn from_sources(sources: &[DictionarySource]) -> Result<Self> {
        let parsed = parse_sources(sources)?;
        let tokenizer = PhraseTokenizer::with_patterns(&parsed.extra_patterns)?;

        let mut rhyme_groups: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (position, word) in parsed.words.iter().enumerate() {
            rhyme_groups
                .entry(word.final_syllable.clone())
                .or_default()
                .push(position);
        }

        let stats = Stats::from_words(&parsed.words, rhyme_groups.len());
        log::info!(
            "loaded {} words, {} rhyme groups, {} fragments, {} syllables from {} source(s)",
            stats.total_words,
            stats.total_rhyme_groups,
            stats.total_fragments,
            stats.total_syllables,
            sources.len()
        );
        log::info!(
            "{} aliases, {} extra word patterns",
            parsed.aliases.len(),
            parsed.extra_patterns.len()
        );

        Ok(Syllabi {
            words: parsed.words,
            words_by_name: parsed.positions,
            rhyme_groups,
            aliases: parsed.aliases,
            extra_patterns: parsed.extra_patterns,
            tokenizer,
            misses: MissRegistry::new(),
            stats,
            source_names: sources.iter().map(|s| s.name.clone()).collect(),
        })
    }

    /// Build the index from dictionary files, applied in order.
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let sources = paths
            .iter()
            .map(DictionarySource::from_file)
            .collect::<Result<Vec<_>>>()?;
        Syllabi::from_sources(&sources)
    }

    /// Look up a word by its exact dictionary key, without normalization.
    pub fn word(&self, name: &str) -> Option<&Word> {
        self.words_by_name.get(name).map(|&position| &self.words[position])
    }

    /// Number of words in the index.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words sharing the final syllable `signature`, in dictionary order.
    pub fn rhyme_group(&self, signature: &str) -> Vec<&Word> {
        self.rhyme_groups
            .get(signature)
            .map(|positions| positions.iter().map(|&p| &self.words[p]).collect())
            .unwrap_or_default()
    }

    /// Names of every word rhyming with `token`, including its own entry.
    /// Empty when `token` does not resolve.
    pub fn rhymes_of(&self, token: &str) -> Vec<String> {
        match self.resolve(token) {
            Some(word) => self
                .rhyme_group(&word.final_syllable)
                .into_iter()
                .map(|w| w.name.clone())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Syllables in `token`, 0 when unresolved.
    pub fn syllable_count_of(&self, token: &str) -> usize {
        self.resolve(token).map(|w| w.syllable_count).unwrap_or(0)
    }

    /// Stress signature of `token`, empty when unresolved.
    pub fn stress_signature_of(&self, token: &str) -> String {
        self.resolve(token)
            .map(|w| w.stress_signature.clone())
            .unwrap_or_default()
    }

    /// Stress digit of every syllable of `token`, empty when unresolved.
    pub fn stress_digits_of(&self, token: &str) -> Vec<String> {
        self.resolve(token)
            .map(|w| w.stress_digits.clone())
            .unwrap_or_default()
    }

    /// Final syllable of `token`, empty when unresolved.
    pub fn final_syllable_of(&self, token: &str) -> String {
        self.resolve(token)
            .map(|w| w.final_syllable.clone())
            .unwrap_or_default()
    }

    /// Final syllable of the last word of `phrase`. Only the default word
    /// pattern is used to find that word.
    pub fn final_syllable_of_phrase(&self, phrase: &str) -> String {
        match last_default_word(phrase) {
            Some(word) => self.final_syllable_of(word),
            None => String::new(),
        }
    }

    /// [`Syllabi::final_syllable_of_phrase`] with the stress digits removed.
    pub fn final_syllable_letters_of_phrase(&self, phrase: &str) -> String {
        strip_digits(&self.final_syllable_of_phrase(phrase))
    }

    /// Analyse `phrase` against `meter`.
    pub fn analyze(&self, phrase: &str, meter: &MeterMatcher) -> RhymeAndMeter {
        PhraseAnalyzer::new(self, &self.tokenizer).analyze(phrase, meter)
    }

    /// Analyse many phrases in parallel. Results keep the input order.
    pub fn analyze_all<S: AsRef<str> + Sync>(
        &self,
        phrases: &[S],
        meter: &MeterMatcher,
    ) -> Vec<RhymeAndMeter> {
        phrases
            .par_iter()
            .map(|phrase| self.analyze(phrase.as_ref(), meter))
            .collect()
    }

    /// Totals computed at load time.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Lookup keys that have failed to resolve so far, sorted.
    pub fn unresolved_tokens(&self) -> Vec<String> {
        self.misses.keys()
    }

    /// Like [`Syllabi::unresolved_tokens`], but also clears the registry.
    pub fn drain_unresolved_tokens(&self) -> Vec<String> {
        self.misses.drain()
    }

    /// Number of failed resolutions of the normalized lookup key `key`.
    pub fn miss_count(&self, key: &str) -> usize {
        self.misses.count(key)
    }

    /// Dictionary key that `alias` is mapped to.
    pub fn alias_target(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Tokenizer patterns declared by the dictionaries.
    pub fn extra_patterns(&self) -> &[String] {
        &self.extra_patterns
    }

    /// Names of the sources the index was built from.
    pub fn source_names(&self) -> &[String] {
        &self.source_names
    }
}

impl WordResolver for Syllabi {
    fn resolve(&self, token: &str) -> Option<&Word> {
        let key = lookup_key(&self.aliases, token);
        match self.word(&key) {
            Some(word) => Some(word),
            None => {
                self.misses.record(&key);
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "syllabi"
    }
}
