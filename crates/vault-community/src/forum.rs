// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Forum thread list backed by browser-local records.
//!
//! Posts live as one newest-first list under [`keys::POSTS`]. Submitting
//! requires a signed-in session; the stored author is always the session
//! user, never a caller-supplied name.

use tracing::info;
use vault_store::{keys, KeyValueStore};

use crate::record::{Post, POINTS_POST};
use crate::{Community, CommunityError, MIN_BODY, MIN_TITLE};

impl<S> Community<S>
where
    S: KeyValueStore,
{
    /// Submit a forum post as the signed-in user. Awards [`POINTS_POST`]
    /// points and bumps the author's post counter.
    pub fn submit_post(
        &mut self,
        title: &str,
        body: &str,
        now_ms: i64,
    ) -> Result<Post, CommunityError> {
        let mut author = self.require_user()?;
        let title = title.trim();
        if title.len() < MIN_TITLE {
            return Err(CommunityError::TitleTooShort);
        }
        let body = body.trim();
        if body.len() < MIN_BODY {
            return Err(CommunityError::BodyTooShort);
        }
        let mut posts = self.posts();
        let post = Post {
            id: format!("post-{now_ms}-{}", posts.len()),
            author: author.username.clone(),
            title: title.to_owned(),
            body: body.to_owned(),
            created_at_ms: now_ms,
        };
        posts.insert(0, post.clone());
        self.records_mut().save(keys::POSTS, &posts)?;
        author.posts_count += 1;
        author.points += POINTS_POST;
        self.patch_user(&author)?;
        info!(author = %post.author, id = %post.id, "post submitted");
        Ok(post)
    }

    /// Every stored post, newest first.
    pub fn posts(&self) -> Vec<Post> {
        self.list_or_empty(keys::POSTS)
    }
}
