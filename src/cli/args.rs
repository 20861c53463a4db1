//! Command line argument parsing for the Cadence CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::meter::spec::DEFAULT_METER;

/// Cadence - rhymes and meter from a pronunciation dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "cadence")]
#[command(about = "Rhymes and meter from a pronunciation dictionary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CadenceArgs {
    /// Dictionary files, applied in order (later files override earlier ones)
    #[arg(
        short,
        long = "dict",
        value_name = "PATH",
        env = "CADENCE_DICT",
        value_delimiter = ',',
        required = true
    )]
    pub dictionaries: Vec<PathBuf>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CadenceArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show dictionary statistics
    Stats,

    /// List the words rhyming with a word
    Rhymes(RhymesArgs),

    /// Show the pronunciation details of a word
    Word(WordArgs),

    /// Match phrases against a meter
    Meter(MeterArgs),

    /// Sort phrases so that matching endings are adjacent
    Sort(PhraseInput),

    /// Align phrases on a shared piece of text
    Align(AlignArgs),
}

/// Arguments for listing rhymes
#[derive(Parser, Debug, Clone)]
pub struct RhymesArgs {
    /// Word to find rhymes for
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of rhymes to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for word details
#[derive(Parser, Debug, Clone)]
pub struct WordArgs {
    /// Word to describe
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Phrases given inline or read from a file, one per line
#[derive(Parser, Debug, Clone)]
pub struct PhraseInput {
    /// Phrases to process
    #[arg(value_name = "PHRASE")]
    pub phrases: Vec<String>,

    /// File with one phrase per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Arguments for meter matching
#[derive(Parser, Debug, Clone)]
pub struct MeterArgs {
    /// Meter specification, e.g. "^0101" or "01$"
    #[arg(short, long, default_value = DEFAULT_METER)]
    pub meter: String,

    /// Only report phrases matching the meter
    #[arg(long)]
    pub matching_only: bool,

    #[command(flatten)]
    pub input: PhraseInput,
}

/// Arguments for alignment
#[derive(Parser, Debug, Clone)]
pub struct AlignArgs {
    /// Text to align the phrases on
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub input: PhraseInput,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
