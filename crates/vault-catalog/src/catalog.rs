// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Catalog containers and selection rules.
//!
//! A [`Catalog`] is constructed once per page session from `games.json` and
//! treated as immutable from then on. Derived views (filtering, sorting,
//! pagination) always start from the full collection; nothing here caches.
//!
//! # Determinism
//!
//! All selection rules use stable sorts and `f64::total_cmp`, so two runs
//! over the same JSON produce identical orderings.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::facet::Facet;
use crate::record::{Game, Guide};

/// Entry cap for each home-page featured tab.
pub const FEATURED_LEN: usize = 12;

/// Errors raised while loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The JSON payload failed to deserialize into records.
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Home-page featured tab identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeaturedTab {
    /// Highest trending score first.
    Trending,
    /// Most recently added first.
    Newest,
    /// Editorially flagged games, padded when fewer than twelve exist.
    EditorsPicks,
}

/// Immutable game collection with slug lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<Game>,
    by_slug: BTreeMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-parsed records. Later records win slug
    /// collisions for lookup purposes; iteration keeps the input order.
    #[must_use]
    pub fn new(games: Vec<Game>) -> Self {
        let by_slug = games
            .iter()
            .enumerate()
            .map(|(idx, game)| (game.slug.clone(), idx))
            .collect();
        Self { games, by_slug }
    }

    /// Parse a `games.json` payload.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let games: Vec<Game> = serde_json::from_str(json)?;
        Ok(Self::new(games))
    }

    /// Number of games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// True when no catalog has been loaded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// All games in catalog order.
    #[must_use]
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Look up a game by slug.
    #[must_use]
    pub fn game(&self, slug: &str) -> Option<&Game> {
        self.by_slug.get(slug).map(|&idx| &self.games[idx])
    }

    /// The sorted universe of values observed for a facet, used to build
    /// facet panels and to validate exports.
    #[must_use]
    pub fn facet_values(&self, facet: Facet) -> BTreeSet<String> {
        self.games
            .iter()
            .flat_map(|game| facet.values_of(game))
            .map(str::to_owned)
            .collect()
    }

    /// Games related to `slug`: any shared mechanism or the same difficulty
    /// qualifies, strongest trending first. When fewer than `limit` qualify
    /// the list is padded from the remaining catalog in catalog order. The
    /// subject game never appears.
    #[must_use]
    pub fn related(&self, slug: &str, limit: usize) -> Vec<&Game> {
        let Some(subject) = self.game(slug) else {
            return Vec::new();
        };
        let mechanisms: BTreeSet<&str> =
            subject.mechanisms.iter().map(String::as_str).collect();
        let mut picked: Vec<&Game> = self
            .games
            .iter()
            .filter(|game| game.slug != subject.slug)
            .filter(|game| {
                game.mechanisms
                    .iter()
                    .any(|mech| mechanisms.contains(mech.as_str()))
                    || game.difficulty == subject.difficulty
            })
            .collect();
        picked.sort_by(|a, b| b.trending_score().total_cmp(&a.trending_score()));
        if picked.len() < limit {
            for fallback in &self.games {
                if picked.len() >= limit {
                    break;
                }
                if fallback.slug != subject.slug
                    && !picked.iter().any(|game| game.slug == fallback.slug)
                {
                    picked.push(fallback);
                }
            }
        }
        picked.truncate(limit);
        picked
    }

    /// The twelve-entry list backing a home-page tab.
    ///
    /// Editors' picks keep catalog order (editorial order is the export
    /// order) and pad with non-picked games when short.
    #[must_use]
    pub fn featured(&self, tab: FeaturedTab) -> Vec<&Game> {
        let mut list: Vec<&Game> = match tab {
            FeaturedTab::Trending => {
                let mut all: Vec<&Game> = self.games.iter().collect();
                all.sort_by(|a, b| b.trending_score().total_cmp(&a.trending_score()));
                all
            }
            FeaturedTab::Newest => {
                let mut all: Vec<&Game> = self.games.iter().collect();
                all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                all
            }
            FeaturedTab::EditorsPicks => {
                let mut picks: Vec<&Game> =
                    self.games.iter().filter(|game| game.editor_pick).collect();
                if picks.len() < FEATURED_LEN {
                    for game in &self.games {
                        if picks.len() >= FEATURED_LEN {
                            break;
                        }
                        if !game.editor_pick {
                            picks.push(game);
                        }
                    }
                }
                picks
            }
        };
        list.truncate(FEATURED_LEN);
        list
    }
}

/// Immutable guide collection with slug lookup.
#[derive(Debug, Clone, Default)]
pub struct GuideSet {
    guides: Vec<Guide>,
    by_slug: BTreeMap<String, usize>,
}

impl GuideSet {
    /// Build a guide set from already-parsed records.
    #[must_use]
    pub fn new(guides: Vec<Guide>) -> Self {
        let by_slug = guides
            .iter()
            .enumerate()
            .map(|(idx, guide)| (guide.slug.clone(), idx))
            .collect();
        Self { guides, by_slug }
    }

    /// Parse a `guides.json` payload.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let guides: Vec<Guide> = serde_json::from_str(json)?;
        Ok(Self::new(guides))
    }

    /// Number of guides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guides.len()
    }

    /// True when no guides have been loaded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }

    /// All guides in export order.
    #[must_use]
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    /// Look up a guide by slug.
    #[must_use]
    pub fn guide(&self, slug: &str) -> Option<&Guide> {
        self.by_slug.get(slug).map(|&idx| &self.guides[idx])
    }
}
