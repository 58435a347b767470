// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Community mocks for the vault site: forum posts, per-game reviews, a
//! demo sign-in flow, and profile views.
//!
//! Everything here is a browser-local mock over the storage port — there
//! is no server, no moderation, and deliberately no credentials of any
//! kind (see [`auth`]). Records follow one pattern: read list, prepend
//! record, write list back; read user record, patch counters, write back.
//!
//! A corrupt stored list is logged and treated as empty rather than
//! surfaced; the next successful write replaces it. Validation failures
//! are typed [`CommunityError`] values, never panics.

pub mod auth;
pub mod forum;
pub mod record;
pub mod review;

pub use record::{Post, ProfileView, Review, User};

use thiserror::Error;
use vault_store::{KeyValueStore, RecordService, StoreError};

/// Minimum username length (after trimming).
pub const MIN_USERNAME: usize = 3;
/// Minimum post title length.
pub const MIN_TITLE: usize = 4;
/// Minimum post/review body length.
pub const MIN_BODY: usize = 10;

/// Error type for community operations.
#[derive(Debug, Error)]
pub enum CommunityError {
    /// Username shorter than [`MIN_USERNAME`] or containing whitespace.
    #[error("username must be at least {MIN_USERNAME} characters with no spaces")]
    InvalidUsername,
    /// Username already registered.
    #[error("username already taken")]
    UsernameTaken,
    /// No registered user under that name.
    #[error("unknown user")]
    UnknownUser,
    /// Operation needs a signed-in user.
    #[error("not signed in")]
    SignedOut,
    /// Post title shorter than [`MIN_TITLE`].
    #[error("title must be at least {MIN_TITLE} characters")]
    TitleTooShort,
    /// Post or review body shorter than [`MIN_BODY`].
    #[error("body must be at least {MIN_BODY} characters")]
    BodyTooShort,
    /// Review rating outside `1..=5`.
    #[error("rating must be between 1 and 5")]
    RatingOutOfRange,
    /// Underlying storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Community service over one storage port.
///
/// Owns the [`RecordService`] wrapping the injected store; the WASM host
/// keeps exactly one of these per page and snapshots the store around it.
pub struct Community<S> {
    records: RecordService<S>,
}

impl<S> Community<S> {
    /// Service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            records: RecordService::new(store),
        }
    }

    /// Consume the service and return the inner store.
    pub fn into_store(self) -> S {
        self.records.into_inner()
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        self.records.store()
    }

    /// Mutably borrow the inner store (host snapshot/restore, CTA markers).
    pub fn store_mut(&mut self) -> &mut S {
        self.records.store_mut()
    }
}

impl<S> Community<S>
where
    S: KeyValueStore,
{
    /// Load a stored list, degrading a corrupt payload to empty with a log
    /// line instead of failing the caller.
    pub(crate) fn list_or_empty<T>(&self, key: &str) -> Vec<T>
    where
        T: serde::de::DeserializeOwned,
    {
        match self.records.load::<Vec<T>>(key) {
            Ok(Some(list)) => list,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(key, %err, "stored list unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    pub(crate) fn records(&self) -> &RecordService<S> {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut RecordService<S> {
        &mut self.records
    }
}
