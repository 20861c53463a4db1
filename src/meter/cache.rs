//! Compile-once cache of meter matchers.
//!
//! Compilation is a pure function of the specification string, so matchers
//! are shared between every phrase analysed with the same meter.

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::meter::matcher::MeterMatcher;

/// Thread-safe map from specification string to its compiled matcher.
#[derive(Debug, Default)]
pub struct MeterCache {
    compiled: RwLock<AHashMap<String, Arc<MeterMatcher>>>,
}

impl MeterCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        MeterCache::default()
    }

    /// Get the matcher for `spec`, compiling it on first use.
    pub fn get(&self, spec: &str) -> Arc<MeterMatcher> {
        if let Some(matcher) = self.compiled.read().get(spec) {
            log::trace!("meter cache hit: {spec:?}");
            return Arc::clone(matcher);
        }

        let mut compiled = self.compiled.write();
        let matcher = compiled
            .entry(spec.to_string())
            .or_insert_with(|| Arc::new(MeterMatcher::compile(spec)));
        Arc::clone(matcher)
    }

    /// Number of distinct specifications compiled so far.
    pub fn len(&self) -> usize {
        self.compiled.read().len()
    }

    /// Whether nothing has been compiled yet.
    pub fn is_empty(&self) -> bool {
        self.compiled.read().is_empty()
    }

    /// Drop every compiled matcher.
    pub fn clear(&self) {
        self.compiled.write().clear();
    }
}
