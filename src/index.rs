//! The rhyme and stress index.
//!
//! [`syllabi::Syllabi`] owns every dictionary word, the rhyme groups keyed by
//! final syllable, and the alias, tokenizer-pattern and miss registries.

pub mod resolver;
pub mod stats;
pub mod syllabi;
