//! Regex-based phrase tokenizer.
//!
//! Words are runs of word characters by default. Dictionaries may add
//! patterns through `REGEXP:` directives (for example `\w+'\w+` so that
//! contractions stay whole); those are tried before the default pattern at
//! every position.
//!
//! # Examples
//!
//! ```
//! use cadence::analysis::tokenizer::{PhraseTokenizer, Tokenizer};
//!
//! let tokenizer = PhraseTokenizer::with_patterns(&[r"\w+'\w+".to_string()]).unwrap();
//! let words: Vec<String> = tokenizer.tokenize("don't stop").map(|t| t.text).collect();
//! assert_eq!(words, vec!["don't", "stop"]);
//! ```

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{CadenceError, Result};

/// Pattern matching a run of word characters.
pub const DEFAULT_WORD_PATTERN: &str = r"\w+";

static DEFAULT_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_WORD_PATTERN).expect("Default word pattern should be valid")
});

/// Trait for tokenizers that split a phrase into words.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Tokenizer built from the default word pattern plus any extra patterns.
#[derive(Clone, Debug)]
pub struct PhraseTokenizer {
    /// Alternation of all word patterns
    pattern: Arc<Regex>,
    /// Number of patterns ahead of the default one
    extra_patterns: usize,
}

impl PhraseTokenizer {
    /// Create a tokenizer using only the default word pattern.
    pub fn new() -> Self {
        PhraseTokenizer {
            pattern: Arc::new(DEFAULT_WORD_REGEX.clone()),
            extra_patterns: 0,
        }
    }

    /// Create a tokenizer that tries `extra` patterns, in order, before the
    /// default word pattern.
    pub fn with_patterns(extra: &[String]) -> Result<Self> {
        if extra.is_empty() {
            return Ok(PhraseTokenizer::new());
        }

        for pattern in extra {
            Regex::new(pattern).map_err(|e| {
                CadenceError::analysis(format!("Invalid word pattern {pattern:?}: {e}"))
            })?;
        }

        let combined = extra
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(DEFAULT_WORD_PATTERN))
            .map(|p| format!("(?:{p})"))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&combined)
            .map_err(|e| CadenceError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(PhraseTokenizer {
            pattern: Arc::new(regex),
            extra_patterns: extra.len(),
        })
    }

    /// Get the combined regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Number of dictionary supplied patterns in use.
    pub fn extra_pattern_count(&self) -> usize {
        self.extra_patterns
    }
}

impl Default for PhraseTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for PhraseTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "phrase"
    }
}

/// The last run of word characters in `text`, ignoring any extra patterns.
pub fn last_default_word(text: &str) -> Option<&str> {
    DEFAULT_WORD_REGEX.find_iter(text).last().map(|mat| mat.as_str())
}
