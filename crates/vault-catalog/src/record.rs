// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Record shapes for `games.json` and `guides.json`.
//!
//! Field names mirror the JSON emitted by the data pipeline. Anything the
//! pipeline may omit carries a serde default so partial records still load;
//! `rating` in particular defaults to `0.0` and sorts last under the
//! most-rated ordering.

use serde::{Deserialize, Serialize};

// Trending weights baked into the analytics export. The normalised inputs
// live on the record; the blend must match what the pipeline reports.
const W_PAGEVIEWS: f64 = 0.7;
const W_GUIDE_CLICKS: f64 = 0.2;
const W_RECENCY: f64 = 0.1;

/// A single playable game in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Stable URL identifier (`/games/<slug>/`).
    pub slug: String,
    /// Display title.
    pub title: String,
    /// One-paragraph teaser shown on cards.
    #[serde(default)]
    pub summary: String,
    /// Studio or author credit.
    #[serde(default)]
    pub author: String,
    /// Cover image URL.
    #[serde(default)]
    pub thumbnail: String,
    /// External play link.
    #[serde(default)]
    pub play_url: String,
    /// Slug of the companion walkthrough guide, empty when none exists.
    #[serde(default)]
    pub guide_slug: String,
    /// Difficulty label. Opaque to the engine: compared for equality,
    /// never ordered.
    #[serde(default)]
    pub difficulty: String,
    /// Genre/category tags.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Puzzle mechanism tags.
    #[serde(default)]
    pub mechanisms: Vec<String>,
    /// Supported language codes.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Minimum supported player count.
    #[serde(default)]
    pub players_min: u32,
    /// Maximum supported player count.
    #[serde(default)]
    pub players_max: u32,
    /// Typical session length in minutes.
    #[serde(default)]
    pub time_minutes: u32,
    /// ISO-8601 creation date; lexicographic order is chronological.
    /// Older exports used `created_date`, accepted as an alias.
    #[serde(default, alias = "created_date")]
    pub created_at: String,
    /// ISO-8601 date of the last content update.
    #[serde(default)]
    pub last_updated_at: String,
    /// Normalised 7-day page-view signal in `[0, 1]`.
    #[serde(default)]
    pub pv7_norm: f64,
    /// Normalised 7-day guide-click signal in `[0, 1]`.
    #[serde(default)]
    pub guide_clicks7_norm: f64,
    /// Normalised recency signal in `[0, 1]` (newest game = 1.0).
    #[serde(default)]
    pub recency: f64,
    /// Community star rating, absent in the export until first review.
    #[serde(default)]
    pub rating: f64,
    /// Editorial selection flag for the home-page tab.
    #[serde(default)]
    pub editor_pick: bool,
    /// Walkthrough video id for the embedded player.
    #[serde(default)]
    pub youtube_video_id: String,
}

impl Game {
    /// Weighted engagement score driving the default sort and the trending
    /// home tab: `0.7·pv7 + 0.2·guide_clicks7 + 0.1·recency`.
    #[must_use]
    pub fn trending_score(&self) -> f64 {
        W_PAGEVIEWS * self.pv7_norm
            + W_GUIDE_CLICKS * self.guide_clicks7_norm
            + W_RECENCY * self.recency
    }
}

/// A walkthrough guide accompanying a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    /// Stable URL identifier (`/guides/<slug>/`).
    pub slug: String,
    /// Display title.
    pub title: String,
    /// One-paragraph teaser shown on cards.
    #[serde(default)]
    pub summary: String,
    /// Author credit.
    #[serde(default)]
    pub author: String,
    /// Difficulty label of the covered game.
    #[serde(default)]
    pub difficulty: String,
    /// Slug of the game this guide covers.
    #[serde(default)]
    pub game_slug: String,
    /// Cover image URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Walkthrough video id for the embedded player.
    #[serde(default)]
    pub youtube_video_id: String,
    /// Community star rating.
    #[serde(default)]
    pub rating: f64,
    /// Estimated completion time, free-form ("45 min").
    #[serde(default)]
    pub estimated_time: String,
}
