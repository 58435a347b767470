// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stored community record shapes.
//!
//! All timestamps are host-supplied epoch milliseconds (`Date.now()` in the
//! page, the system clock in native callers); the records never read a
//! clock themselves. Identifiers are client-generated and only unique
//! enough for a single-tab mock.

use serde::{Deserialize, Serialize};

/// Points awarded for registering.
pub const POINTS_REGISTER: u32 = 25;
/// Points awarded per forum post.
pub const POINTS_POST: u32 = 5;
/// Points awarded per review.
pub const POINTS_REVIEW: u32 = 10;

/// A registered (mock) user. No credential of any kind is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique handle, also the session marker value.
    pub username: String,
    /// Display name shown on posts and the profile.
    pub display_name: String,
    /// Registration time, epoch milliseconds.
    pub joined_at_ms: i64,
    /// Engagement points (register/post/review awards).
    pub points: u32,
    /// Number of forum posts authored.
    pub posts_count: u32,
    /// Number of reviews submitted.
    pub reviews_count: u32,
}

/// A forum post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Client-generated identifier (`post-<ms>-<n>`).
    pub id: String,
    /// Author username.
    pub author: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub body: String,
    /// Creation time, epoch milliseconds.
    pub created_at_ms: i64,
}

/// A per-game review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Client-generated identifier (`review-<ms>-<n>`).
    pub id: String,
    /// Slug of the reviewed game.
    pub game_slug: String,
    /// Author username.
    pub author: String,
    /// Star rating, `1..=5`.
    pub rating: u8,
    /// Review text.
    pub body: String,
    /// Creation time, epoch milliseconds.
    pub created_at_ms: i64,
}

/// Profile projection: the user record plus their latest forum posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    /// The user record.
    pub user: User,
    /// The user's most recent posts, newest first.
    pub recent_posts: Vec<Post>,
}
