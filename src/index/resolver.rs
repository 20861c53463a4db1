//! Word resolution and the miss registry.
//!
//! Resolution maps an arbitrary token to a dictionary key: an alias entry
//! for the token as given wins, otherwise the token is uppercased. Keys that
//! are not in the dictionary are counted in a [`MissRegistry`].

use std::borrow::Cow;

use ahash::AHashMap;
use parking_lot::Mutex;

use crate::dictionary::word::Word;

/// Resolves tokens to dictionary words.
///
/// A miss is an ordinary outcome, reported as `None`.
pub trait WordResolver: Send + Sync {
    /// Resolve `token` to its dictionary entry.
    fn resolve(&self, token: &str) -> Option<&Word>;

    /// Get the name of this resolver (for debugging).
    fn name(&self) -> &'static str;
}

/// The dictionary key `token` is looked up under.
pub fn lookup_key<'a>(aliases: &'a AHashMap<String, String>, token: &str) -> Cow<'a, str> {
    match aliases.get(token) {
        Some(target) => Cow::Borrowed(target.as_str()),
        None => Cow::Owned(token.to_uppercase()),
    }
}

/// Counts of lookup keys that failed to resolve.
///
/// Shared between concurrent analyses, so every update goes through a mutex.
#[derive(Debug, Default)]
pub struct MissRegistry {
    counts: Mutex<AHashMap<String, usize>>,
}

impl MissRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        MissRegistry::default()
    }

    /// Count a miss for `key` and return its new count. The first miss of a
    /// key is logged.
    pub fn record(&self, key: &str) -> usize {
        let mut counts = self.counts.lock();
        match counts.get_mut(key) {
            Some(count) => {
                *count += 1;
                *count
            }
            None => {
                log::debug!("no dictionary entry for {key:?}");
                counts.insert(key.to_string(), 1);
                1
            }
        }
    }

    /// Number of misses recorded for `key`.
    pub fn count(&self, key: &str) -> usize {
        self.counts.lock().get(key).copied().unwrap_or(0)
    }

    /// Distinct keys that have missed.
    pub fn len(&self) -> usize {
        self.counts.lock().len()
    }

    /// Whether nothing has missed.
    pub fn is_empty(&self) -> bool {
        self.counts.lock().is_empty()
    }

    /// Keys that have missed, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.counts.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Empty the registry and return its keys, sorted.
    pub fn drain(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.counts.lock().drain().map(|(key, _)| key).collect();
        keys.sort();
        keys
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_lookup_key() {
        let mut aliases = AHashMap::new();
        aliases.insert("slang".to_string(), "ACTUALWORD".to_string());

        assert_eq!(lookup_key(&aliases, "slang"), "ACTUALWORD");
        assert_eq!(lookup_key(&aliases, "Slang"), "SLANG");
        assert_eq!(lookup_key(&aliases, "cat"), "CAT");
    }

    #[test]
    fn test_record_counts() {
        let registry = MissRegistry::new();
        assert!(registry.is_empty());

        assert_eq!(registry.record("ZORP"), 1);
        assert_eq!(registry.record("ZORP"), 2);
        assert_eq!(registry.record("BLIX"), 1);

        assert_eq!(registry.count("ZORP"), 2);
        assert_eq!(registry.count("NEVER"), 0);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.keys(), vec!["BLIX", "ZORP"]);
    }

    #[test]
    fn test_drain() {
        let registry = MissRegistry::new();
        registry.record("B");
        registry.record("A");

        assert_eq!(registry.drain(), vec!["A", "B"]);
        assert!(registry.is_empty());
        assert_eq!(registry.record("A"), 1);
    }

    #[test]
    fn test_concurrent_records() {
        let registry = Arc::new(MissRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..100 {
                        registry.record("ZORP");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.count("ZORP"), 800);
    }
}
