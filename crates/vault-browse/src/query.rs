// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bidirectional query-string codec for [`ViewState`].
//!
//! The address bar is the only carrier of browse state, so the codec is the
//! wire format: `search`, `sort`, one repeated parameter per selected facet
//! value (`category`, `mechanism`, `difficulty`, `language`), and `page`.
//! Defaults are omitted on the way out; anything unrecognized or malformed
//! degrades to a default on the way in. Parsing is total — there is no
//! error path, a garbage query string is simply the default view.

use url::form_urlencoded;
use vault_catalog::Facet;

use crate::state::{SortKey, ViewState};

/// `search` parameter name.
pub const PARAM_SEARCH: &str = "search";
/// `sort` parameter name.
pub const PARAM_SORT: &str = "sort";
/// `page` parameter name.
pub const PARAM_PAGE: &str = "page";

/// Query-parameter name for a facet (singular, unlike the `data-facet`
/// marker names).
#[must_use]
pub fn facet_param(facet: Facet) -> &'static str {
    match facet {
        Facet::Categories => "category",
        Facet::Mechanisms => "mechanism",
        Facet::Difficulty => "difficulty",
        Facet::Language => "language",
    }
}

fn facet_for_param(name: &str) -> Option<Facet> {
    Facet::ALL
        .into_iter()
        .find(|&facet| facet_param(facet) == name)
}

/// Parse a query string (with or without a leading `?`) into a view state.
///
/// Repeated scalar parameters keep the last occurrence; repeated facet
/// parameters accumulate. A malformed or non-positive `page` falls back to
/// 1; out-of-range pages are left for the derive step to clamp.
#[must_use]
pub fn parse(query: &str) -> ViewState {
    let raw = query.strip_prefix('?').unwrap_or(query);
    let mut state = ViewState::default();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            PARAM_SEARCH => state.search = value.trim().to_owned(),
            PARAM_SORT => state.sort = SortKey::parse(&value),
            PARAM_PAGE => {
                state.page = value
                    .parse::<u32>()
                    .ok()
                    .filter(|page| *page >= 1)
                    .unwrap_or(1);
            }
            other => {
                if let Some(facet) = facet_for_param(other) {
                    state.filters.toggle(facet, value.as_ref(), true);
                }
            }
        }
    }
    state
}

/// Serialize a view state to its canonical query string (no leading `?`).
///
/// Omission rules: empty `search`, default `sort`, and `page` 1 are left
/// out entirely, so the default state serializes to the empty string.
/// Facets emit in canonical facet order, values in sorted order.
#[must_use]
pub fn serialize(state: &ViewState) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    if !state.search.is_empty() {
        out.append_pair(PARAM_SEARCH, &state.search);
    }
    if state.sort != SortKey::default() {
        out.append_pair(PARAM_SORT, state.sort.token());
    }
    for facet in Facet::ALL {
        for value in state.filters.values(facet) {
            out.append_pair(facet_param(facet), value);
        }
    }
    if state.page > 1 {
        out.append_pair(PARAM_PAGE, &state.page.to_string());
    }
    out.finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ── 1. default state serializes to nothing ──────────────────────────
    #[test]
    fn default_is_empty() {
        assert_eq!(serialize(&ViewState::default()), "");
        assert_eq!(parse(""), ViewState::default());
        assert_eq!(parse("?"), ViewState::default());
    }

    // ── 2. full round-trip with every parameter kind ────────────────────
    #[test]
    fn full_round_trip() {
        let mut state = ViewState {
            search: "puzzle".to_owned(),
            sort: SortKey::Newest,
            page: 2,
            ..ViewState::default()
        };
        state.filters.toggle(Facet::Categories, "logic", true);
        let query = serialize(&state);
        assert_eq!(query, "search=puzzle&sort=newest&category=logic&page=2");
        assert_eq!(parse(&query), state);
    }

    // ── 3. leading question mark accepted ───────────────────────────────
    #[test]
    fn leading_question_mark() {
        assert_eq!(parse("?sort=newest").sort, SortKey::Newest);
    }

    // ── 4. unknown parameters and sort tokens are ignored ───────────────
    #[test]
    fn unknown_inputs_degrade() {
        let state = parse("utm_source=mail&sort=wat&players=4");
        assert_eq!(state, ViewState::default());
    }

    // ── 5. malformed page falls back to 1 ───────────────────────────────
    #[test]
    fn malformed_page() {
        assert_eq!(parse("page=abc").page, 1);
        assert_eq!(parse("page=0").page, 1);
        assert_eq!(parse("page=-2").page, 1);
        assert_eq!(parse("page=2abc").page, 1);
        assert_eq!(parse("page=7").page, 7);
    }

    // ── 6. repeated facet values accumulate, scalars keep the last ──────
    #[test]
    fn repetition_rules() {
        let state = parse("mechanism=dice&mechanism=logic&search=a&search=b");
        let mechanisms: Vec<&str> = state.filters.values(Facet::Mechanisms).collect();
        assert_eq!(mechanisms, ["dice", "logic"]);
        assert_eq!(state.search, "b");
    }

    // ── 7. facet order and in-facet value order are canonical ───────────
    #[test]
    fn canonical_ordering() {
        let mut state = ViewState::default();
        state.filters.toggle(Facet::Language, "en", true);
        state.filters.toggle(Facet::Mechanisms, "logic", true);
        state.filters.toggle(Facet::Mechanisms, "dice", true);
        state.filters.toggle(Facet::Difficulty, "Hard", true);
        assert_eq!(
            serialize(&state),
            "mechanism=dice&mechanism=logic&difficulty=Hard&language=en"
        );
    }

    // ── 8. percent-encoding survives the round-trip ─────────────────────
    #[test]
    fn encoding_round_trip() {
        let mut state = ViewState {
            search: "100% escape".to_owned(),
            ..ViewState::default()
        };
        state.filters.toggle(Facet::Categories, "sci-fi & horror", true);
        let query = serialize(&state);
        assert_eq!(parse(&query), state);
        assert!(!query.contains(' '));
    }

    // ── 9. empty facet values in the URL are dropped ────────────────────
    #[test]
    fn empty_facet_value_dropped() {
        let state = parse("category=&category=logic");
        let categories: Vec<&str> = state.filters.values(Facet::Categories).collect();
        assert_eq!(categories, ["logic"]);
    }

    // ── 10. search parameter is trimmed like live input ─────────────────
    #[test]
    fn search_param_trimmed() {
        assert_eq!(parse("search=+dice+").search, "dice");
    }
}
