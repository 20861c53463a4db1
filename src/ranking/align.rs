//! Aligning phrases on a shared piece of text.
//!
//! Each phrase containing the text is split around its first occurrence so
//! a presenter can indent every phrase to put the shared text in one column.
//!
//! # Examples
//!
//! ```
//! use cadence::ranking::align::align_phrases;
//!
//! let alignment = align_phrases("its own", &["it has its own", "on its own terms"]);
//! assert_eq!(alignment.max_indent, 7);
//! assert_eq!(alignment.phrases[0].before, "it has ");
//! assert_eq!(alignment.phrases[1].after, " terms");
//! ```

use serde::{Deserialize, Serialize};

/// A phrase split around the aligned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedPhrase {
    /// Text before the first occurrence.
    pub before: String,
    /// The aligned text itself.
    pub common: String,
    /// Text after the first occurrence.
    pub after: String,
}

impl AlignedPhrase {
    /// Byte offset of the aligned text in the original phrase.
    pub fn indent(&self) -> usize {
        self.before.len()
    }

    /// The original phrase.
    pub fn phrase(&self) -> String {
        format!("{}{}{}", self.before, self.common, self.after)
    }
}

/// Phrases aligned on `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    /// The text phrases were aligned on.
    pub text: String,
    /// Largest indent among the aligned phrases.
    pub max_indent: usize,
    /// Matching phrases, longest `before` first.
    pub phrases: Vec<AlignedPhrase>,
}

/// Align every phrase that contains `text`. Phrases without it are dropped.
/// An empty `text` aligns nothing.
pub fn align_phrases<S: AsRef<str>>(text: &str, phrases: &[S]) -> Alignment {
    let mut aligned: Vec<AlignedPhrase> = if text.is_empty() {
        Vec::new()
    } else {
        phrases
            .iter()
            .filter_map(|phrase| {
                let phrase = phrase.as_ref();
                phrase.find(text).map(|indent| AlignedPhrase {
                    before: phrase[..indent].to_string(),
                    common: text.to_string(),
                    after: phrase[indent + text.len()..].to_string(),
                })
            })
            .collect()
    };

    let max_indent = aligned.iter().map(AlignedPhrase::indent).max().unwrap_or(0);
    aligned.sort_by(|a, b| b.indent().cmp(&a.indent()));

    Alignment {
        text: text.to_string(),
        max_indent,
        phrases: aligned,
    }
}
