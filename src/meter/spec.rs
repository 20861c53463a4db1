//! Meter specification grammar.
//!
//! ```text
//! spec := "^"? [012]+ "$"?
//! ```
//!
//! Anything else falls back to [`DEFAULT_METER`], a trailing iamb.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Meter used when a specification does not parse: an unstressed syllable
/// followed by a stressed one at the very end of the phrase.
pub const DEFAULT_METER: &str = "01$";

/// Marker pinning a meter to the first word of the phrase.
pub const START_ANCHOR: char = '^';

/// Marker pinning a meter to the last word of the phrase.
pub const END_ANCHOR: char = '$';

static METER_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\^)?([012]+)(\$)?$").expect("meter grammar is valid"));

/// A validated meter specification.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeterSpec {
    /// Whether the meter must begin at the first word.
    pub start_anchored: bool,
    /// Stress digits, each one of `0`, `1`, `2`.
    pub core: String,
    /// Whether the meter must end at the last word.
    pub end_anchored: bool,
}

impl MeterSpec {
    /// Parse a specification, returning `None` if it does not follow the grammar.
    pub fn parse(spec: &str) -> Option<Self> {
        let caps = METER_GRAMMAR.captures(spec.trim())?;
        Some(MeterSpec {
            start_anchored: caps.get(1).is_some(),
            core: caps[2].to_string(),
            end_anchored: caps.get(3).is_some(),
        })
    }

    /// Parse a specification, substituting [`DEFAULT_METER`] when it is malformed.
    pub fn parse_or_default(spec: &str) -> Self {
        match MeterSpec::parse(spec) {
            Some(parsed) => parsed,
            None => {
                log::debug!("malformed meter {spec:?}, using {DEFAULT_METER}");
                MeterSpec::default()
            }
        }
    }

    /// Number of syllable slots in the meter.
    pub fn slot_count(&self) -> usize {
        self.core.len()
    }
}

impl Default for MeterSpec {
    fn default() -> Self {
        MeterSpec {
            start_anchored: false,
            core: "01".to_string(),
            end_anchored: true,
        }
    }
}

impl fmt::Display for MeterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_anchored {
            write!(f, "{START_ANCHOR}")?;
        }
        write!(f, "{}", self.core)?;
        if self.end_anchored {
            write!(f, "{END_ANCHOR}")?;
        }
        Ok(())
    }
}
