//! Line grammar of pronunciation dictionary sources.
//!
//! ```text
//! ;;; comment                      -> ignored
//! MAP:<key>  <aliasTargetKey>      -> alias directive
//! REGEXP:  <pattern>               -> extra tokenizer pattern
//! <NAME>  <phoneme> <phoneme> ...  -> dictionary entry
//! ```
//!
//! Sources are applied in order, so an entry in a later source replaces an
//! entry with the same name from an earlier one.
//!
//! # Examples
//!
//! ```
//! use cadence::dictionary::parser::DictionaryParser;
//! use cadence::dictionary::source::DictionarySource;
//!
//! let mut parser = DictionaryParser::new();
//! parser
//!     .parse(&DictionarySource::new("inline", ";;; words\nCAT  K AE1 T\nMAP:kitty  CAT"))
//!     .unwrap();
//! let parsed = parser.finish();
//!
//! assert_eq!(parsed.words.len(), 1);
//! assert_eq!(parsed.aliases.get("kitty").map(String::as_str), Some("CAT"));
//! ```

use ahash::AHashMap;

use crate::dictionary::source::DictionarySource;
use crate::dictionary::word::Word;
use crate::error::{CadenceError, Result};

/// Prefix of comment lines.
pub const COMMENT_PREFIX: &str = ";;;";

/// Prefix of alias directives (`MAP:key  TARGET`).
pub const ALIAS_PREFIX: &str = "MAP:";

/// Prefix of tokenizer pattern directives (`REGEXP:  pattern`).
pub const PATTERN_PREFIX: &str = "REGEXP:";

/// Separator between the name and the phonemes of an entry.
pub const FIELD_SEPARATOR: &str = "  ";

/// A classified dictionary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryLine<'a> {
    Comment,
    Alias { key: &'a str, target: &'a str },
    Pattern(&'a str),
    Entry { name: &'a str, pronunciation: &'a str },
}

impl<'a> DictionaryLine<'a> {
    /// Classify one line. Fails when an entry or alias line does not split
    /// into exactly two fields on the double space separator, or has no name.
    /// Blank lines are entry lines too, so they fail.
    pub fn parse(line: &'a str) -> std::result::Result<Self, String> {
        if line.starts_with(COMMENT_PREFIX) {
            return Ok(DictionaryLine::Comment);
        }
        if let Some(pattern) = line.strip_prefix(PATTERN_PREFIX) {
            return Ok(DictionaryLine::Pattern(pattern.trim_start()));
        }

        let (head, tail) = split_fields(line)?;
        match head.strip_prefix(ALIAS_PREFIX) {
            Some(key) => Ok(DictionaryLine::Alias {
                key,
                target: tail.trim(),
            }),
            None => Ok(DictionaryLine::Entry {
                name: head,
                pronunciation: tail,
            }),
        }
    }
}

fn split_fields(line: &str) -> std::result::Result<(&str, &str), String> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    match fields.as_slice() {
        [head, _] if head.trim().is_empty() => Err(format!("missing name: {line:?}")),
        [head, tail] => Ok((*head, *tail)),
        _ => Err(format!(
            "expected 2 fields separated by a double space, found {}: {line:?}",
            fields.len()
        )),
    }
}

/// Everything read from a sequence of dictionary sources.
#[derive(Debug, Clone, Default)]
pub struct ParsedDictionary {
    /// Words in first-seen order. A later duplicate replaces the earlier
    /// entry in place.
    pub words: Vec<Word>,
    /// Word name to position in `words`.
    pub positions: AHashMap<String, usize>,
    /// Lookup string to dictionary key.
    pub aliases: AHashMap<String, String>,
    /// Extra tokenizer patterns, in load order.
    pub extra_patterns: Vec<String>,
}

/// Incremental parser over one or more dictionary sources.
#[derive(Debug, Default)]
pub struct DictionaryParser {
    parsed: ParsedDictionary,
    lines_read: usize,
    replaced: usize,
}

impl DictionaryParser {
    /// Create a new parser with nothing loaded.
    pub fn new() -> Self {
        DictionaryParser::default()
    }

    /// Apply one source on top of everything parsed so far.
    pub fn parse(&mut self, source: &DictionarySource) -> Result<()> {
        for (line_index, line) in source.text.lines().enumerate() {
            self.lines_read += 1;

            let classified = DictionaryLine::parse(line).map_err(|msg| {
                CadenceError::dictionary(format!("{}:{}: {msg}", source.name, line_index + 1))
            })?;

            match classified {
                DictionaryLine::Comment => {}
                DictionaryLine::Alias { key, target } => {
                    self.parsed
                        .aliases
                        .insert(key.to_string(), target.to_string());
                }
                DictionaryLine::Pattern(pattern) => {
                    self.parsed.extra_patterns.push(pattern.to_string());
                }
                DictionaryLine::Entry {
                    name,
                    pronunciation,
                } => {
                    let word = Word::from_pronunciation(name, pronunciation);
                    if word.syllable_count == 0 {
                        log::warn!("no syllables found for name={name} ({})", source.name);
                    }
                    if word.final_syllable.is_empty() {
                        log::warn!("no final syllable found for name={name} ({})", source.name);
                    }
                    self.insert(word);
                }
            }
        }

        log::debug!(
            "parsed {} ({} lines): {} words, {} aliases, {} patterns so far",
            source.name,
            source.line_count(),
            self.parsed.words.len(),
            self.parsed.aliases.len(),
            self.parsed.extra_patterns.len()
        );

        Ok(())
    }

    fn insert(&mut self, word: Word) {
        let existing = self.parsed.positions.get(&word.name).copied();
        match existing {
            Some(position) => {
                self.parsed.words[position] = word;
                self.replaced += 1;
            }
            None => {
                self.parsed
                    .positions
                    .insert(word.name.clone(), self.parsed.words.len());
                self.parsed.words.push(word);
            }
        }
    }

    /// Total lines consumed across all sources.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Number of entries that replaced an earlier entry with the same name.
    pub fn replaced(&self) -> usize {
        self.replaced
    }

    /// Consume the parser and return what it read.
    pub fn finish(self) -> ParsedDictionary {
        self.parsed
    }
}

/// Parse `sources` in order.
pub fn parse_sources(sources: &[DictionarySource]) -> Result<ParsedDictionary> {
    let mut parser = DictionaryParser::new();
    for source in sources {
        parser.parse(source)?;
    }
    if parser.replaced() > 0 {
        log::info!("{} entries overridden by later sources", parser.replaced());
    }
    Ok(parser.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_text(text: &str) -> Result<ParsedDictionary> {
        parse_sources(&[DictionarySource::new("test", text)])
    }

    #[test]
    fn test_classify_lines() {
        assert_eq!(
            DictionaryLine::parse(";;; a comment  with spaces"),
            Ok(DictionaryLine::Comment)
        );
        assert_eq!(
            DictionaryLine::parse("MAP:slang  ACTUALWORD"),
            Ok(DictionaryLine::Alias {
                key: "slang",
                target: "ACTUALWORD"
            })
        );
        assert_eq!(
            DictionaryLine::parse(r"REGEXP:  \w+'\w+"),
            Ok(DictionaryLine::Pattern(r"\w+'\w+"))
        );
        assert_eq!(
            DictionaryLine::parse("CAT  K AE1 T"),
            Ok(DictionaryLine::Entry {
                name: "CAT",
                pronunciation: "K AE1 T"
            })
        );
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        assert!(DictionaryLine::parse("CAT K AE1 T").is_err());
        assert!(DictionaryLine::parse("CAT  K AE1  T").is_err());
        assert!(DictionaryLine::parse("MAP:slang ACTUALWORD").is_err());

        let err = parse_text("CAT  K AE1 T\nDOG D AO1 G\n").unwrap_err();
        match err {
            CadenceError::Dictionary(msg) => assert!(msg.starts_with("test:2:")),
            other => panic!("Expected dictionary error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_line_is_fatal() {
        assert!(DictionaryLine::parse("").is_err());
        assert!(DictionaryLine::parse("   ").is_err());
        assert!(DictionaryLine::parse("  K AE1 T").is_err());

        let err = parse_text("CAT  K AE1 T\n\nHAT  HH AE1 T\n").unwrap_err();
        match err {
            CadenceError::Dictionary(msg) => assert!(msg.starts_with("test:2:")),
            other => panic!("Expected dictionary error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_entries_and_directives() {
        let parsed = parse_text(
            ";;; header\nCAT  K AE1 T\nMAP:kitty  CAT\nREGEXP:  \\w+'\\w+\nHAT  HH AE1 T\n",
        )
        .unwrap();

        assert_eq!(parsed.words.len(), 2);
        assert_eq!(parsed.words[0].name, "CAT");
        assert_eq!(parsed.words[1].name, "HAT");
        assert_eq!(parsed.positions.get("HAT"), Some(&1));
        assert_eq!(parsed.aliases.get("kitty").map(String::as_str), Some("CAT"));
        assert_eq!(parsed.extra_patterns, vec![r"\w+'\w+".to_string()]);
    }

    #[test]
    fn test_zero_syllable_entry_is_kept() {
        let parsed = parse_text("HMM  HH M\n").unwrap();

        assert_eq!(parsed.words.len(), 1);
        assert_eq!(parsed.words[0].syllable_count, 0);
        assert_eq!(parsed.words[0].final_syllable, "");
    }

    #[test]
    fn test_later_source_overrides() {
        let sources = vec![
            DictionarySource::new("base", "CAT  K AE1 T\nDOG  D AO1 G\n"),
            DictionarySource::new("override", "CAT  K AA1 T\n"),
        ];

        let mut parser = DictionaryParser::new();
        for source in &sources {
            parser.parse(source).unwrap();
        }
        assert_eq!(parser.replaced(), 1);
        assert_eq!(parser.lines_read(), 3);

        let parsed = parser.finish();
        assert_eq!(parsed.words.len(), 2);
        assert_eq!(parsed.words[0].name, "CAT");
        assert_eq!(parsed.words[0].final_syllable, "AA1T");
    }
}
