//! Compiled meter matchers.
//!
//! A matcher is a regex with three zones applied to a combined stress string
//! such as `" 01 * 1 "`:
//!
//! 1. a greedy prefix, omitted when the meter is start-anchored;
//! 2. the core, one character class per stress digit with optional
//!    whitespace between slots, bounded by a literal space on each side so it
//!    only starts and ends on word boundaries;
//! 3. a greedy suffix, omitted when the meter is end-anchored.
//!
//! # Examples
//!
//! ```
//! use cadence::meter::matcher::MeterMatcher;
//!
//! let meter = MeterMatcher::compile("01$");
//! assert_eq!(meter.find(" * 1 "), Some("* 1".to_string()));
//! assert_eq!(meter.find(" X 1 "), None);
//! ```

use regex::Regex;

use crate::dictionary::word::WILDCARD_STRESS;
use crate::error::{CadenceError, Result};
use crate::meter::spec::MeterSpec;

/// A meter specification compiled into a regex over combined stress strings.
#[derive(Clone, Debug)]
pub struct MeterMatcher {
    spec: MeterSpec,
    regex: Regex,
}

impl MeterMatcher {
    /// Compile a meter specification string. Malformed specifications
    /// compile to the default meter.
    pub fn compile(spec: &str) -> Self {
        match MeterMatcher::from_spec(MeterSpec::parse_or_default(spec)) {
            Ok(matcher) => matcher,
            Err(e) => {
                log::error!("{e}, using default meter");
                MeterMatcher::default()
            }
        }
    }

    /// Compile an already validated specification.
    pub fn from_spec(spec: MeterSpec) -> Result<Self> {
        let pattern = build_pattern(&spec);
        log::trace!("compiled meter {spec} ({} slots) as {pattern}", spec.slot_count());

        let regex = Regex::new(&pattern)
            .map_err(|e| CadenceError::meter(format!("meter {spec} did not compile: {e}")))?;

        Ok(MeterMatcher { spec, regex })
    }

    /// The specification this matcher was compiled from.
    pub fn spec(&self) -> &MeterSpec {
        &self.spec
    }

    /// The generated regex pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Find the stress run matching the meter, without its bounding spaces.
    pub fn find(&self, combined_stress: &str) -> Option<String> {
        self.regex
            .captures(combined_stress)
            .and_then(|caps| caps.get(1))
            .map(|core| core.as_str().to_string())
            .filter(|core| !core.is_empty())
    }

    /// Whether the meter occurs anywhere it is allowed to.
    pub fn is_match(&self, combined_stress: &str) -> bool {
        self.regex.is_match(combined_stress)
    }
}

impl Default for MeterMatcher {
    fn default() -> Self {
        MeterMatcher::from_spec(MeterSpec::default()).expect("Default meter should compile")
    }
}

/// Character class accepted for one stress digit of a meter.
fn slot_class(digit: char) -> String {
    let wildcard = regex::escape(WILDCARD_STRESS);
    match digit {
        '0' => format!("(?:0|{wildcard})"),
        _ => format!("(?:[12]|{wildcard})"),
    }
}

fn build_pattern(spec: &MeterSpec) -> String {
    let core = spec
        .core
        .chars()
        .map(slot_class)
        .collect::<Vec<_>>()
        .join(r"\s*");

    let prefix = if spec.start_anchored { "" } else { ".*" };
    let suffix = if spec.end_anchored { "" } else { ".*" };

    format!("^{prefix} ({core}) {suffix}$")
}
