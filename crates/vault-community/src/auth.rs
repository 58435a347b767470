// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Demo sign-in flow, deliberately credential-free.
//!
//! This is a mock, not an authentication design: registering stores a
//! [`User`] record, signing in checks that the record exists and writes the
//! username as the session marker. There is no password, no token, and no
//! secret — anyone at the keyboard can sign in as any registered name,
//! which is exactly the contract of a client-only demo. Nothing here may
//! grow credential storage.

use tracing::info;
use vault_store::{keys, KeyValueStore};

use crate::record::{ProfileView, User, POINTS_REGISTER};
use crate::{Community, CommunityError, MIN_USERNAME};

/// Recent posts shown on a profile.
const PROFILE_POSTS: usize = 5;

impl<S> Community<S>
where
    S: KeyValueStore,
{
    /// Register a new user and sign them in. Awards
    /// [`POINTS_REGISTER`] points. An empty display name falls back to the
    /// username.
    pub fn register(
        &mut self,
        username: &str,
        display_name: &str,
        now_ms: i64,
    ) -> Result<User, CommunityError> {
        let username = username.trim();
        if username.len() < MIN_USERNAME || username.contains(char::is_whitespace) {
            return Err(CommunityError::InvalidUsername);
        }
        let mut users = self.users();
        if users.iter().any(|user| user.username == username) {
            return Err(CommunityError::UsernameTaken);
        }
        let display_name = display_name.trim();
        let user = User {
            username: username.to_owned(),
            display_name: if display_name.is_empty() {
                username.to_owned()
            } else {
                display_name.to_owned()
            },
            joined_at_ms: now_ms,
            points: POINTS_REGISTER,
            posts_count: 0,
            reviews_count: 0,
        };
        users.insert(0, user.clone());
        self.save_users(&users)?;
        self.records_mut().store_mut().set(keys::SESSION, username);
        info!(username, "registered");
        Ok(user)
    }

    /// Sign in an existing user by writing the session marker. No
    /// credential check — existence is the whole bar.
    pub fn login(&mut self, username: &str) -> Result<User, CommunityError> {
        let username = username.trim();
        let user = self
            .users()
            .into_iter()
            .find(|user| user.username == username)
            .ok_or(CommunityError::UnknownUser)?;
        self.records_mut().store_mut().set(keys::SESSION, username);
        Ok(user)
    }

    /// Clear the session marker. Signing out twice is fine.
    pub fn logout(&mut self) {
        self.records_mut().store_mut().remove(keys::SESSION);
    }

    /// The signed-in user, if the session marker points at a registered
    /// name.
    pub fn current_user(&self) -> Option<User> {
        let username = self.records().store().get(keys::SESSION)?;
        self.users()
            .into_iter()
            .find(|user| user.username == username)
    }

    /// Profile projection for any registered user.
    pub fn profile(&self, username: &str) -> Option<ProfileView> {
        let user = self
            .users()
            .into_iter()
            .find(|user| user.username == username)?;
        let recent_posts = self
            .posts()
            .into_iter()
            .filter(|post| post.author == user.username)
            .take(PROFILE_POSTS)
            .collect();
        Some(ProfileView { user, recent_posts })
    }

    pub(crate) fn users(&self) -> Vec<User> {
        self.list_or_empty(keys::USERS)
    }

    pub(crate) fn save_users(&mut self, users: &[User]) -> Result<(), CommunityError> {
        self.records_mut().save(keys::USERS, &users)?;
        Ok(())
    }

    /// Load the signed-in user or fail with [`CommunityError::SignedOut`].
    pub(crate) fn require_user(&self) -> Result<User, CommunityError> {
        self.current_user().ok_or(CommunityError::SignedOut)
    }

    /// Replace a user record in place (counter patching).
    pub(crate) fn patch_user(&mut self, updated: &User) -> Result<(), CommunityError> {
        let mut users = self.users();
        if let Some(slot) = users
            .iter_mut()
            .find(|user| user.username == updated.username)
        {
            *slot = updated.clone();
        }
        self.save_users(&users)
    }
}
