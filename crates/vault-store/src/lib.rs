// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Injected key/value storage port for vault page state.
//!
//! Community mocks (auth, forum, reviews) and the CTA overlay persist
//! through [`KeyValueStore`] instead of reaching for a browser global, so
//! every consumer tests against [`MemoryStore`] natively. In the page the
//! host script hydrates a `MemoryStore` from `localStorage` at load and
//! writes the snapshot back after mutations.
//!
//! # Semantics
//!
//! Last-write-wins, single origin, single tab. Values are opaque strings;
//! [`RecordService`] layers typed JSON records on top. An absent key is
//! `None`, never an error.

mod memory;
pub use memory::MemoryStore;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Storage port for string values keyed by logical name.
pub trait KeyValueStore {
    /// Read a value. `None` when the key has never been written (or was
    /// removed).
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str);
    /// Delete a key. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str);
}

/// Error type for typed record operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A stored payload failed to serialize or deserialize.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Thin service that serializes records as JSON and delegates storage to a
/// [`KeyValueStore`].
pub struct RecordService<S> {
    store: S,
}

impl<S> RecordService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the inner store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S> RecordService<S>
where
    S: KeyValueStore,
{
    /// Load and deserialize the record under `key`. Returns `Ok(None)` when
    /// the key is absent or holds an empty string; a corrupt payload is an
    /// error (callers decide whether to fall back to defaults).
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        match self.store.get(key) {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    /// Serialize and persist a record under `key`.
    pub fn save<T>(&mut self, key: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw);
        Ok(())
    }

    /// Delete the record under `key`.
    pub fn delete(&mut self, key: &str) {
        self.store.remove(key);
    }
}

/// Well-known storage keys. Reviews and CTA dismissals are keyed per game
/// slug via the builder functions.
pub mod keys {
    /// Registered users (list of `User` records).
    pub const USERS: &str = "vault.users";
    /// Active session marker (username of the signed-in user).
    pub const SESSION: &str = "vault.session";
    /// Forum posts (newest first).
    pub const POSTS: &str = "vault.posts";

    /// Review list key for one game.
    #[must_use]
    pub fn reviews(game_slug: &str) -> String {
        format!("vault.reviews.{game_slug}")
    }

    /// CTA dismissal marker key for one game.
    #[must_use]
    pub fn cta_dismissed(game_slug: &str) -> String {
        format!("vault.cta.{game_slug}")
    }
}
