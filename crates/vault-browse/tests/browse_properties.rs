// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Property tests for the browse pipeline and the query codec.

use proptest::prelude::*;
use vault_browse::{pipeline, query, SortKey, ViewState};
use vault_catalog::{Catalog, Facet, Game};

const MECHANISMS: [&str; 4] = ["dice", "logic", "ciphers", "co-op"];
const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

fn mk_game(idx: usize, mechanisms: &[String], difficulty: &str, pv7: f64) -> Game {
    serde_json::from_value(serde_json::json!({
        "slug": format!("game-{idx:02}"),
        "title": format!("Game {idx:02}"),
        "mechanisms": mechanisms,
        "difficulty": difficulty,
        "pv7_norm": pv7,
    }))
    .expect("game json")
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec((0u8..16, 0usize..3, 0.0f64..1.0), 0..40).prop_map(|specs| {
        let games = specs
            .into_iter()
            .enumerate()
            .map(|(idx, (mask, diff, pv7))| {
                let mechanisms: Vec<String> = MECHANISMS
                    .iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, name)| (*name).to_owned())
                    .collect();
                mk_game(idx, &mechanisms, DIFFICULTIES[diff], pv7)
            })
            .collect();
        Catalog::new(games)
    })
}

fn arb_sort() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Trending),
        Just(SortKey::Newest),
        Just(SortKey::MostRated),
        Just(SortKey::Alphabetical),
    ]
}

fn arb_state() -> impl Strategy<Value = ViewState> {
    (
        "[a-z0-9]{0,12}",
        arb_sort(),
        prop::collection::btree_set(prop::sample::select(&MECHANISMS[..]), 0..3),
        prop::collection::btree_set(prop::sample::select(&DIFFICULTIES[..]), 0..2),
        1u32..40,
    )
        .prop_map(|(search, sort, mechanisms, difficulties, page)| {
            let mut state = ViewState {
                search,
                sort,
                page,
                ..ViewState::default()
            };
            for value in mechanisms {
                state.filters.toggle(Facet::Mechanisms, value, true);
            }
            for value in difficulties {
                state.filters.toggle(Facet::Difficulty, value, true);
            }
            state
        })
}

proptest! {
    // Every reachable state survives serialize → parse unchanged.
    #[test]
    fn query_round_trip(state in arb_state()) {
        let encoded = query::serialize(&state);
        prop_assert_eq!(query::parse(&encoded), state);
    }

    // Zero selections yield the whole catalog; adding one never grows it.
    #[test]
    fn facet_selection_never_grows_results(
        catalog in arb_catalog(),
        value in prop::sample::select(&MECHANISMS[..]),
    ) {
        let base = pipeline::derive_frame(&catalog, &ViewState::default(), 24);
        prop_assert_eq!(base.total, catalog.len());
        let mut state = ViewState::default();
        state.filters.toggle(Facet::Mechanisms, value, true);
        let narrowed = pipeline::derive_frame(&catalog, &state, 24);
        prop_assert!(narrowed.total <= base.total);
    }

    // The derived page is always within [1, total_pages], whatever was
    // requested, and total_pages matches the ceiling formula.
    #[test]
    fn derived_page_always_in_range(
        catalog in arb_catalog(),
        page in 0u32..100,
        size in 1usize..30,
    ) {
        let state = ViewState { page, ..ViewState::default() };
        let frame = pipeline::derive_frame(&catalog, &state, size);
        prop_assert!(frame.page >= 1);
        prop_assert!(frame.page <= frame.total_pages);
        let expected = u32::try_from(frame.total.div_ceil(size).max(1)).expect("page count");
        prop_assert_eq!(frame.total_pages, expected);
        prop_assert!(frame.cards.len() <= size);
    }

    // Same state, same catalog: identical frames, run after run.
    #[test]
    fn derive_is_deterministic(catalog in arb_catalog(), sort in arb_sort()) {
        let state = ViewState { sort, ..ViewState::default() };
        let first = pipeline::derive_frame(&catalog, &state, 24);
        let second = pipeline::derive_frame(&catalog, &state, 24);
        prop_assert_eq!(first, second);
    }

    // Parsing never panics, whatever the address bar holds.
    #[test]
    fn parse_is_total(raw in "[ -~]{0,64}") {
        let state = query::parse(&raw);
        prop_assert!(state.page >= 1);
    }
}
