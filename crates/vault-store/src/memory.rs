// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory storage adapter.

use std::collections::BTreeMap;

use crate::KeyValueStore;

/// BTreeMap-backed store. The test double for everything that talks to the
/// storage port, and the live store inside the WASM engine (the host script
/// moves snapshots between it and `localStorage`).
///
/// Iteration order is key-sorted, so snapshots are deterministic.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in key order, for host persistence.
    pub fn snapshot(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace the whole store from host-provided entries (hydration from
    /// `localStorage` at page load). Later duplicates win.
    pub fn restore<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ── 1. set + get round-trip ─────────────────────────────────────────
    #[test]
    fn set_get() {
        let mut store = MemoryStore::new();
        store.set("a", "1");
        assert_eq!(store.get("a").as_deref(), Some("1"));
    }

    // ── 2. last write wins ──────────────────────────────────────────────
    #[test]
    fn last_write_wins() {
        let mut store = MemoryStore::new();
        store.set("a", "1");
        store.set("a", "2");
        assert_eq!(store.get("a").as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }

    // ── 3. remove on missing key is a no-op ─────────────────────────────
    #[test]
    fn remove_missing() {
        let mut store = MemoryStore::new();
        store.remove("ghost");
        assert!(store.is_empty());
    }

    // ── 4. snapshot is key-ordered ──────────────────────────────────────
    #[test]
    fn snapshot_order() {
        let mut store = MemoryStore::new();
        store.set("zebra", "z");
        store.set("apple", "a");
        let keys: Vec<&str> = store.snapshot().map(|(k, _)| k).collect();
        assert_eq!(keys, ["apple", "zebra"]);
    }

    // ── 5. restore replaces existing contents ───────────────────────────
    #[test]
    fn restore_replaces() {
        let mut store = MemoryStore::new();
        store.set("old", "1");
        store.restore([("new", "2")]);
        assert_eq!(store.get("old"), None);
        assert_eq!(store.get("new").as_deref(), Some("2"));
    }
}
