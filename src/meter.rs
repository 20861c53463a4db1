//! Meter specifications and compiled meter matchers.
//!
//! A meter specification such as `^0101` or `01$` describes a run of
//! unstressed (`0`) and stressed (`1`, `2`) syllables, optionally pinned to
//! the start (`^`) or end (`$`) of a phrase. Specifications compile into a
//! [`matcher::MeterMatcher`] that is applied to a phrase's combined stress
//! string; [`cache::MeterCache`] compiles each distinct specification once.

pub mod cache;
pub mod matcher;
pub mod spec;
