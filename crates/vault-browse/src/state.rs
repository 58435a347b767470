// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! View state and pure event transitions.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use vault_catalog::Facet;

/// Sort order for the results grid.
///
/// Tokens are the `sort` query-parameter values; [`SortKey::parse`] maps
/// anything unrecognized to the default so stale or hand-edited URLs still
/// resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Weighted engagement score, strongest first. The site default.
    #[default]
    Trending,
    /// Most recently added first.
    Newest,
    /// Highest community rating first; unrated games sort last.
    MostRated,
    /// Title ascending, case-insensitive.
    Alphabetical,
}

impl SortKey {
    /// The `sort` query-parameter token.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::Newest => "newest",
            Self::MostRated => "mostRated",
            Self::Alphabetical => "alphabetical",
        }
    }

    /// Parse a `sort` token; unknown tokens fall back to [`SortKey::Trending`].
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token {
            "newest" => Self::Newest,
            "mostRated" => Self::MostRated,
            "alphabetical" => Self::Alphabetical,
            _ => Self::Trending,
        }
    }
}

/// Selected filter values, grouped per facet.
///
/// Values inside a facet are kept in a `BTreeSet`, so two selections of the
/// same values always serialize to the same URL regardless of click order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    selected: BTreeMap<Facet, BTreeSet<String>>,
}

impl FacetSelection {
    /// Empty selection (no facet imposes a constraint).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or deselect one value. Empty value strings are ignored; a
    /// facet whose last value is deselected drops out entirely.
    pub fn toggle(&mut self, facet: Facet, value: &str, selected: bool) {
        if value.is_empty() {
            return;
        }
        if selected {
            self.selected
                .entry(facet)
                .or_default()
                .insert(value.to_owned());
        } else if let Some(set) = self.selected.get_mut(&facet) {
            set.remove(value);
            if set.is_empty() {
                self.selected.remove(&facet);
            }
        }
    }

    /// Selected values for one facet, in sorted order.
    pub fn values(&self, facet: Facet) -> impl Iterator<Item = &str> {
        self.selected
            .get(&facet)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// True when the facet has at least one selected value.
    #[must_use]
    pub fn is_active(&self, facet: Facet) -> bool {
        self.selected.contains_key(&facet)
    }

    /// True when `value` is selected for `facet`.
    #[must_use]
    pub fn contains(&self, facet: Facet, value: &str) -> bool {
        self.selected
            .get(&facet)
            .is_some_and(|set| set.contains(value))
    }

    /// True when no facet has any selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Complete browse state for one catalog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Free-text search, already trimmed. Empty means "match everything".
    pub search: String,
    /// Active sort order.
    pub sort: SortKey,
    /// Active facet selections.
    pub filters: FacetSelection,
    /// 1-based results page. Always `>= 1`; clamped against the filtered
    /// total during derive, not here.
    pub page: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortKey::Trending,
            filters: FacetSelection::new(),
            page: 1,
        }
    }
}

/// A user interaction the engine reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BrowseEvent {
    /// Search input changed (raw input text; leading/trailing whitespace is
    /// dropped during the transition).
    SearchChanged(String),
    /// Sort selector changed.
    SortChanged(SortKey),
    /// A facet checkbox flipped.
    FacetToggled {
        /// Which facet panel the input belongs to.
        facet: Facet,
        /// The input's value attribute.
        value: String,
        /// New checked state.
        selected: bool,
    },
    /// A pagination link was activated. Zero normalizes to page 1.
    PageRequested(u32),
}

/// Pure transition: current state + event → next state.
///
/// No I/O, no clamping, no rendering. Filter, search, and sort changes keep
/// the current page; the derive step clamps it against the new filtered
/// total.
#[must_use]
pub fn apply_event(state: &ViewState, event: &BrowseEvent) -> ViewState {
    let mut next = state.clone();
    match event {
        BrowseEvent::SearchChanged(query) => next.search = query.trim().to_owned(),
        BrowseEvent::SortChanged(sort) => next.sort = *sort,
        BrowseEvent::FacetToggled {
            facet,
            value,
            selected,
        } => next.filters.toggle(*facet, value, *selected),
        BrowseEvent::PageRequested(page) => next.page = (*page).max(1),
    }
    next
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ── 1. transitions never mutate their input ─────────────────────────
    #[test]
    fn transitions_are_pure() {
        let state = ViewState::default();
        let next = apply_event(&state, &BrowseEvent::SearchChanged("dice".into()));
        assert_eq!(state, ViewState::default());
        assert_eq!(next.search, "dice");
    }

    // ── 2. search input is trimmed, page untouched ──────────────────────
    #[test]
    fn search_trims_and_keeps_page() {
        let state = ViewState {
            page: 3,
            ..ViewState::default()
        };
        let next = apply_event(&state, &BrowseEvent::SearchChanged("  cipher  ".into()));
        assert_eq!(next.search, "cipher");
        assert_eq!(next.page, 3);
    }

    // ── 3. facet toggle on/off round-trip ───────────────────────────────
    #[test]
    fn facet_toggle_round_trip() {
        let state = ViewState::default();
        let on = apply_event(
            &state,
            &BrowseEvent::FacetToggled {
                facet: Facet::Mechanisms,
                value: "dice".into(),
                selected: true,
            },
        );
        assert!(on.filters.contains(Facet::Mechanisms, "dice"));
        let off = apply_event(
            &on,
            &BrowseEvent::FacetToggled {
                facet: Facet::Mechanisms,
                value: "dice".into(),
                selected: false,
            },
        );
        assert!(off.filters.is_empty());
    }

    // ── 4. deselecting the last value drops the facet ───────────────────
    #[test]
    fn facet_drops_when_emptied() {
        let mut filters = FacetSelection::new();
        filters.toggle(Facet::Difficulty, "Hard", true);
        assert!(filters.is_active(Facet::Difficulty));
        filters.toggle(Facet::Difficulty, "Hard", false);
        assert!(!filters.is_active(Facet::Difficulty));
    }

    // ── 5. empty facet values are ignored ───────────────────────────────
    #[test]
    fn empty_facet_value_ignored() {
        let mut filters = FacetSelection::new();
        filters.toggle(Facet::Categories, "", true);
        assert!(filters.is_empty());
    }

    // ── 6. page zero normalizes to one ──────────────────────────────────
    #[test]
    fn page_zero_normalizes() {
        let next = apply_event(&ViewState::default(), &BrowseEvent::PageRequested(0));
        assert_eq!(next.page, 1);
    }

    // ── 7. facet values iterate in sorted order ─────────────────────────
    #[test]
    fn facet_values_sorted() {
        let mut filters = FacetSelection::new();
        filters.toggle(Facet::Categories, "sci-fi", true);
        filters.toggle(Facet::Categories, "horror", true);
        let values: Vec<&str> = filters.values(Facet::Categories).collect();
        assert_eq!(values, ["horror", "sci-fi"]);
    }

    // ── 8. unknown sort tokens fall back to trending ────────────────────
    #[test]
    fn sort_token_fallback() {
        assert_eq!(SortKey::parse("mostRated"), SortKey::MostRated);
        assert_eq!(SortKey::parse("bogus"), SortKey::Trending);
        assert_eq!(SortKey::parse(""), SortKey::Trending);
        for key in [
            SortKey::Trending,
            SortKey::Newest,
            SortKey::MostRated,
            SortKey::Alphabetical,
        ] {
            assert_eq!(SortKey::parse(key.token()), key);
        }
    }
}
