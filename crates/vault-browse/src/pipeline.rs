// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame derivation: the filter → search → sort → clamp → slice pipeline.
//!
//! One entry point, [`derive_frame`], re-runs the full pipeline from the
//! untouched catalog and returns an owned, render-ready [`BrowseFrame`].
//! Sorting uses stable `sort_by`, so equal keys keep catalog order and the
//! same inputs always produce the same frame.

use serde::{Deserialize, Serialize};
use vault_catalog::{Catalog, Game};

use crate::filter::{matches_filters, matches_search};
use crate::query;
use crate::state::{SortKey, ViewState};

/// Mechanism pills shown per card.
const CARD_MECHANISMS: usize = 3;

/// Render-ready projection of one game, detached from the catalog borrow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCard {
    /// Stable URL identifier.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Card teaser text.
    pub summary: String,
    /// Difficulty badge label.
    pub difficulty: String,
    /// Cover image URL.
    pub thumbnail: String,
    /// External play link.
    pub play_url: String,
    /// First few mechanism pills.
    pub mechanisms: Vec<String>,
}

impl GameCard {
    /// Project a catalog record into card form.
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        Self {
            slug: game.slug.clone(),
            title: game.title.clone(),
            summary: game.summary.clone(),
            difficulty: game.difficulty.clone(),
            thumbnail: game.thumbnail.clone(),
            play_url: game.play_url.clone(),
            mechanisms: game
                .mechanisms
                .iter()
                .take(CARD_MECHANISMS)
                .cloned()
                .collect(),
        }
    }
}

/// Role of a pagination link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLinkKind {
    /// Step back one page; present only when `page > 1`.
    Previous,
    /// Direct page number.
    Number,
    /// Step forward one page; present only when `page < total_pages`.
    Next,
}

/// One entry in the pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// Link role.
    pub kind: PageLinkKind,
    /// Visible label ("Previous", "2", "Next").
    pub label: String,
    /// Full would-be query string for the target page (no leading `?`;
    /// empty for the default state).
    pub query: String,
    /// True for the current page's number entry, rendered non-interactive.
    pub current: bool,
}

/// Everything a host needs to render one browse state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseFrame {
    /// Visible slice of the filtered, sorted results.
    pub cards: Vec<GameCard>,
    /// Filtered result count before slicing.
    pub total: usize,
    /// Page actually shown, after clamping.
    pub page: u32,
    /// `max(1, ceil(total / page_size))`.
    pub total_pages: u32,
    /// Pagination entries; empty when a single page holds everything.
    pub pagination: Vec<PageLink>,
    /// Canonical query string for this frame (no leading `?`). Hosts write
    /// it to the address bar with a history replace.
    pub query: String,
}

/// Run the full pipeline for `state` over `catalog`.
///
/// The returned frame's `page` is the clamped page; callers that keep state
/// across events should copy it back so the address bar and the state agree.
#[must_use]
pub fn derive_frame(catalog: &Catalog, state: &ViewState, page_size: usize) -> BrowseFrame {
    let size = page_size.max(1);
    let mut hits: Vec<&Game> = catalog
        .games()
        .iter()
        .filter(|game| matches_filters(game, &state.filters))
        .filter(|game| matches_search(game, &state.search))
        .collect();
    sort_games(&mut hits, state.sort);

    let total = hits.len();
    let total_pages = u32::try_from(total.div_ceil(size).max(1)).unwrap_or(u32::MAX);
    let page = state.page.clamp(1, total_pages);
    let start = usize::try_from(page - 1).map_or(usize::MAX, |p| p.saturating_mul(size));
    let cards: Vec<GameCard> = hits
        .into_iter()
        .skip(start)
        .take(size)
        .map(GameCard::from_game)
        .collect();

    let landed = ViewState {
        page,
        ..state.clone()
    };
    let query = query::serialize(&landed);
    let pagination = build_pagination(&landed, total_pages);

    BrowseFrame {
        cards,
        total,
        page,
        total_pages,
        pagination,
        query,
    }
}

/// Stable in-place sort of the filtered set.
fn sort_games(games: &mut [&Game], key: SortKey) {
    match key {
        SortKey::Trending => {
            games.sort_by(|a, b| b.trending_score().total_cmp(&a.trending_score()));
        }
        SortKey::Newest => games.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::MostRated => games.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Alphabetical => games.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title))
        }),
    }
}

/// Pagination entries for a clamped state. Empty when everything fits on
/// one page.
fn build_pagination(state: &ViewState, total_pages: u32) -> Vec<PageLink> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let mut links = Vec::new();
    if state.page > 1 {
        links.push(page_link(
            state,
            state.page - 1,
            PageLinkKind::Previous,
            "Previous".to_owned(),
        ));
    }
    for number in 1..=total_pages {
        let mut link = page_link(state, number, PageLinkKind::Number, number.to_string());
        link.current = number == state.page;
        links.push(link);
    }
    if state.page < total_pages {
        links.push(page_link(
            state,
            state.page + 1,
            PageLinkKind::Next,
            "Next".to_owned(),
        ));
    }
    links
}

fn page_link(state: &ViewState, target: u32, kind: PageLinkKind, label: String) -> PageLink {
    let landed = ViewState {
        page: target,
        ..state.clone()
    };
    PageLink {
        kind,
        label,
        query: query::serialize(&landed),
        current: false,
    }
}
