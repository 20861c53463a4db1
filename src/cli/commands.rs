//! Command implementations for the Cadence CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{CadenceError, Result};
use crate::index::syllabi::Syllabi;
use crate::meter::cache::MeterCache;
use crate::ranking::align::align_phrases;
use crate::ranking::sorter::sort_by_rhyme;

/// Execute a CLI command.
pub fn execute_command(args: CadenceArgs) -> Result<()> {
    let start_time = Instant::now();
    let syllabi = Syllabi::from_files(&args.dictionaries)?;
    log::info!(
        "dictionary ready in {}ms",
        start_time.elapsed().as_millis()
    );

    match &args.command {
        Command::Stats => show_stats(&syllabi, &args),
        Command::Rhymes(rhymes_args) => show_rhymes(&syllabi, rhymes_args, &args),
        Command::Word(word_args) => show_word(&syllabi, word_args, &args),
        Command::Meter(meter_args) => match_meter(&syllabi, meter_args, &args),
        Command::Sort(input) => sort_phrases(&syllabi, input, &args),
        Command::Align(align_args) => align(align_args, &args),
    }
}

/// Show dictionary statistics.
fn show_stats(syllabi: &Syllabi, cli_args: &CadenceArgs) -> Result<()> {
    output_result("Dictionary statistics", &StatsReport::new(syllabi), cli_args)
}

/// List rhymes of a word, sorted for display.
fn show_rhymes(syllabi: &Syllabi, args: &RhymesArgs, cli_args: &CadenceArgs) -> Result<()> {
    let mut rhymes = syllabi.rhymes_of(&args.word);
    rhymes.sort();
    let total_rhymes = rhymes.len();
    if let Some(limit) = args.limit {
        rhymes.truncate(limit);
    }

    output_result(
        &format!("Rhymes for {}", args.word),
        &RhymesResult {
            word: args.word.clone(),
            final_syllable: syllabi.final_syllable_of(&args.word),
            total_rhymes,
            rhymes,
        },
        cli_args,
    )
}

/// Describe a single word.
fn show_word(syllabi: &Syllabi, args: &WordArgs, cli_args: &CadenceArgs) -> Result<()> {
    use crate::index::resolver::WordResolver;

    let report = match syllabi.resolve(&args.word) {
        Some(word) => WordReport {
            word: word.name.clone(),
            found: true,
            syllable_count: word.syllable_count,
            stress_digits: word.stress_digits.clone(),
            stress_signature: word.stress_signature.clone(),
            final_syllable: word.final_syllable.clone(),
            final_syllable_letters: word.final_syllable_letters.clone(),
        },
        None => WordReport {
            word: args.word.clone(),
            found: false,
            syllable_count: 0,
            stress_digits: Vec::new(),
            stress_signature: String::new(),
            final_syllable: String::new(),
            final_syllable_letters: String::new(),
        },
    };

    output_result(&format!("Word {}", args.word), &report, cli_args)
}

/// Match phrases against a meter.
fn match_meter(syllabi: &Syllabi, args: &MeterArgs, cli_args: &CadenceArgs) -> Result<()> {
    let phrases = read_phrases(&args.input)?;
    let meters = MeterCache::new();
    let meter = meters.get(&args.meter);
    if meter.spec().to_string() != args.meter.trim() {
        log::warn!("meter {:?} is not valid, using {}", args.meter, meter.spec());
    }

    let mut results = syllabi.analyze_all(&phrases, &meter);
    let matching_phrases = results.iter().filter(|r| r.matches_meter()).count();
    if args.matching_only {
        results.retain(|r| r.matches_meter());
    }

    output_result(
        "Meter analysis",
        &MeterResults {
            meter: meter.spec().to_string(),
            total_phrases: phrases.len(),
            matching_phrases,
            results,
            unresolved: syllabi.unresolved_tokens(),
        },
        cli_args,
    )
}

/// Sort phrases by rhyme.
fn sort_phrases(syllabi: &Syllabi, input: &PhraseInput, cli_args: &CadenceArgs) -> Result<()> {
    let phrases = read_phrases(input)?;
    output_result(
        "Phrases by rhyme",
        &sort_by_rhyme(syllabi, &phrases),
        cli_args,
    )
}

/// Align phrases on a shared text.
fn align(args: &AlignArgs, cli_args: &CadenceArgs) -> Result<()> {
    let phrases = read_phrases(&args.input)?;
    output_result(
        &format!("Aligned on {:?}", args.text),
        &align_phrases(&args.text, &phrases),
        cli_args,
    )
}

/// Collect phrases from the command line, then from the input file.
fn read_phrases(input: &PhraseInput) -> Result<Vec<String>> {
    let mut phrases = input.phrases.clone();

    if let Some(path) = &input.input {
        let reader = BufReader::new(File::open(path)?);
        for line in reader.lines() {
            let line = line?;
            let phrase = line.trim();
            if !phrase.is_empty() {
                phrases.push(phrase.to_string());
            }
        }
    }

    if phrases.is_empty() {
        return Err(CadenceError::invalid_argument(
            "no phrases given; pass them as arguments or with --input",
        ));
    }

    Ok(phrases)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_read_phrases() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "the cat sat").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  on the mat  ").unwrap();

        let input = PhraseInput {
            phrases: vec!["first".to_string()],
            input: Some(file.path().to_path_buf()),
        };

        assert_eq!(
            read_phrases(&input).unwrap(),
            vec!["first", "the cat sat", "on the mat"]
        );
    }

    #[test]
    fn test_read_phrases_requires_input() {
        let input = PhraseInput {
            phrases: Vec::new(),
            input: None,
        };
        assert!(matches!(
            read_phrases(&input),
            Err(CadenceError::InvalidArgument(_))
        ));

        let input = PhraseInput {
            phrases: Vec::new(),
            input: Some(PathBuf::from("/nonexistent/cadence/phrases.txt")),
        };
        assert!(matches!(read_phrases(&input), Err(CadenceError::Io(_))));
    }
}
