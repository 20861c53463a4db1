//! Pronunciation dictionary loading for Cadence.
//!
//! This module turns plain-text pronunciation dictionaries (CMU style, one
//! `NAME  PH1 PH2 ...` entry per line) into [`word::Word`] entries plus the
//! alias and tokenizer-pattern registries declared by directive lines.

pub mod parser;
pub mod source;
pub mod word;
