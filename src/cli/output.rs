//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::phrase::RhymeAndMeter;
use crate::cli::args::{CadenceArgs, OutputFormat};
use crate::error::Result;
use crate::index::stats::Stats;
use crate::index::syllabi::Syllabi;

/// Dictionary statistics with derived figures.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsReport {
    pub sources: Vec<String>,
    #[serde(flatten)]
    pub stats: Stats,
    pub average_syllables: f64,
    pub extra_patterns: Vec<String>,
}

impl StatsReport {
    /// Summarize `syllabi`.
    pub fn new(syllabi: &Syllabi) -> Self {
        let stats = syllabi.stats();
        StatsReport {
            sources: syllabi.source_names().to_vec(),
            stats,
            average_syllables: stats.average_syllables(),
            extra_patterns: syllabi.extra_patterns().to_vec(),
        }
    }
}

/// Result structure for rhyme listings.
#[derive(Debug, Serialize, Deserialize)]
pub struct RhymesResult {
    pub word: String,
    pub final_syllable: String,
    pub total_rhymes: usize,
    pub rhymes: Vec<String>,
}

/// Pronunciation details of one word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordReport {
    pub word: String,
    pub found: bool,
    pub syllable_count: usize,
    pub stress_digits: Vec<String>,
    pub stress_signature: String,
    pub final_syllable: String,
    pub final_syllable_letters: String,
}

/// Result structure for meter matching.
#[derive(Debug, Serialize, Deserialize)]
pub struct MeterResults {
    pub meter: String,
    pub total_phrases: usize,
    pub matching_phrases: usize,
    pub results: Vec<RhymeAndMeter>,
    pub unresolved: Vec<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &CadenceArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &CadenceArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("MeterResults") => {
            output_meter_results_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("Alignment") => {
            for line in alignment_lines(&value) {
                println!("{line}");
            }
            Ok(())
        }
        _ => output_generic_human(&value, args),
    }
}

/// Output meter results in human format.
fn output_meter_results_human(value: &serde_json::Value, args: &CadenceArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        let meter = obj.get("meter").and_then(|m| m.as_str()).unwrap_or("");
        println!("Meter: {meter}");
        println!("══════════════");

        if let Some(results) = obj.get("results").and_then(|r| r.as_array()) {
            for result in results {
                let phrase = result.get("phrase").and_then(|p| p.as_str()).unwrap_or("");
                let stress = result
                    .get("combined_stress")
                    .and_then(|s| s.as_str())
                    .unwrap_or("");
                let matched = result
                    .get("meter_match")
                    .and_then(|m| m.as_str())
                    .unwrap_or("");
                let rhyme = result
                    .get("final_syllable_letters")
                    .and_then(|r| r.as_str())
                    .unwrap_or("");

                let marker = if matched.is_empty() { " " } else { "✓" };
                println!("{marker} {phrase}");
                if args.verbosity() > 0 {
                    println!("    stress: [{stress}]  match: [{matched}]  rhyme: {rhyme}");
                }
            }
        }

        println!();
        if let (Some(total), Some(matching)) = (
            obj.get("total_phrases").and_then(|t| t.as_u64()),
            obj.get("matching_phrases").and_then(|m| m.as_u64()),
        ) {
            println!("Matching phrases: {matching} of {total}");
        }

        if let Some(unresolved) = obj.get("unresolved").and_then(|u| u.as_array())
            && !unresolved.is_empty()
        {
            let words: Vec<&str> = unresolved.iter().filter_map(|u| u.as_str()).collect();
            println!("Not in dictionary: {}", words.join(", "));
        }
    }
    Ok(())
}

/// Render aligned phrases with the shared text in one column.
fn alignment_lines(value: &serde_json::Value) -> Vec<String> {
    let max_indent = value
        .get("max_indent")
        .and_then(|m| m.as_u64())
        .unwrap_or(0) as usize;

    value
        .get("phrases")
        .and_then(|p| p.as_array())
        .map(|phrases| {
            phrases
                .iter()
                .map(|phrase| {
                    let before = str_field(phrase, "before");
                    // Indents are byte offsets.
                    let padding = " ".repeat(max_indent.saturating_sub(before.len()));
                    format!(
                        "{padding}{before}{}{}",
                        str_field(phrase, "common"),
                        str_field(phrase, "after")
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

fn str_field<'a>(value: &'a serde_json::Value, key: &str) -> &'a str {
    value.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value, _args: &CadenceArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                println!("{}", format_value(item));
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &CadenceArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        serde_json::Value::Object(obj) => {
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| format!("{k}={}", format_value(v)))
                .collect();
            format!("{{{}}}", items.join(", "))
        }
    }
}
