//! # Cadence
//!
//! A rhyme and meter engine driven by a pronunciation dictionary.
//!
//! ## Features
//!
//! - CMU-style dictionary loading with alias and tokenizer directives
//! - Rhyme groups keyed by final stressed syllable
//! - Meter specifications (`^0101`, `01$`, ...) compiled once and matched
//!   against whole phrases on word boundaries
//! - Phrase ordering by rhyme and alignment on shared text

pub mod analysis;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod index;
pub mod meter;
pub mod ranking;

pub mod prelude {
    pub use crate::analysis::phrase::RhymeAndMeter;
    pub use crate::dictionary::source::DictionarySource;
    pub use crate::dictionary::word::Word;
    pub use crate::error::{CadenceError, Result};
    pub use crate::index::resolver::WordResolver;
    pub use crate::index::stats::Stats;
    pub use crate::index::syllabi::Syllabi;
    pub use crate::meter::cache::MeterCache;
    pub use crate::meter::matcher::MeterMatcher;
    pub use crate::ranking::sorter::{RhymingPhrase, sort_by_rhyme};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
