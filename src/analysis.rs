//! Phrase analysis for Cadence.
//!
//! This module splits phrases into word tokens and derives each phrase's
//! rhyme key and combined stress string, which compiled meters match against.

pub mod phrase;
pub mod token;
pub mod tokenizer;
