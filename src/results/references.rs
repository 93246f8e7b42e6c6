//! Deduplicated collections of referenced entities

use indexmap::IndexMap;
use std::collections::HashSet;

/// Entities referenced by a page of issues, keyed and kept in first-seen order.
///
/// Each key is resolved at most once per request. Keys that do not resolve
/// are remembered as missing and never emitted.
#[derive(Debug, Clone)]
pub struct ReferenceSet<T> {
    found: IndexMap<String, T>,
    missing: HashSet<String>,
}

impl<T> Default for ReferenceSet<T> {
    fn default() -> Self {
        Self {
            found: IndexMap::new(),
            missing: HashSet::new(),
        }
    }
}

impl<T> ReferenceSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reference, resolving it on first sight
    pub fn register<F>(&mut self, key: &str, resolve: F) -> Option<&T>
    where
        F: FnOnce(&str) -> Option<T>,
    {
        if !self.found.contains_key(key) && !self.missing.contains(key) {
            match resolve(key) {
                Some(entity) => {
                    self.found.insert(key.to_string(), entity);
                }
                None => {
                    self.missing.insert(key.to_string());
                }
            }
        }
        self.found.get(key)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.found.get(key)
    }

    /// Keys that could not be resolved
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.missing.iter().map(String::as_str)
    }

    /// Resolved entities in first-seen order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.found.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_first_seen_order_and_dedup() {
        let mut set = ReferenceSet::new();
        for key in ["b", "a", "b", "c", "a"] {
            set.register(key, |k| Some(k.to_uppercase()));
        }
        assert_eq!(set.values().cloned().collect::<Vec<_>>(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_resolves_each_key_once() {
        let calls = Cell::new(0);
        let mut set: ReferenceSet<String> = ReferenceSet::new();
        for key in ["gone", "gone", "here", "here"] {
            set.register(key, |k| {
                calls.set(calls.get() + 1);
                (k == "here").then(|| k.to_string())
            });
        }
        assert_eq!(calls.get(), 2);
        assert_eq!(set.values().collect::<Vec<_>>(), vec!["here"]);
        assert!(set.get("gone").is_none());
        assert_eq!(set.missing().collect::<Vec<_>>(), vec!["gone"]);
    }
}
