// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end browse flows over a realistic catalog.

use vault_browse::{BrowseEngine, BrowseEvent, SortKey};
use vault_catalog::{Catalog, Facet, Game};

/// Thirty games; every third one (ten total) carries the `dice` mechanism.
/// Trending signal decreases with the index, so trending order equals index
/// order.
fn thirty_games() -> Catalog {
    let games: Vec<Game> = (0u32..30)
        .map(|idx| {
            let mechanisms = if idx % 3 == 0 {
                vec!["dice", "logic"]
            } else {
                vec!["logic"]
            };
            serde_json::from_value(serde_json::json!({
                "slug": format!("game-{idx:02}"),
                "title": format!("Game {idx:02}"),
                "mechanisms": mechanisms,
                "difficulty": if idx % 2 == 0 { "Easy" } else { "Hard" },
                "pv7_norm": f64::from(30 - idx) / 30.0,
            }))
            .expect("game json")
        })
        .collect();
    Catalog::new(games)
}

#[test]
fn selecting_dice_collapses_to_one_trending_page() {
    let mut engine = BrowseEngine::new(thirty_games(), 24);

    let baseline = engine.frame();
    assert_eq!(baseline.total, 30);
    assert_eq!(baseline.total_pages, 2);
    assert_eq!(baseline.cards.len(), 24);

    let frame = engine.dispatch(&BrowseEvent::FacetToggled {
        facet: Facet::Mechanisms,
        value: "dice".into(),
        selected: true,
    });
    assert_eq!(frame.total, 10);
    assert_eq!(frame.total_pages, 1);
    assert_eq!(frame.cards.len(), 10);
    assert!(frame.pagination.is_empty());
    assert_eq!(frame.query, "mechanism=dice");

    // Trending order: decreasing pv7 signal means ascending index.
    let slugs: Vec<&str> = frame.cards.iter().map(|card| card.slug.as_str()).collect();
    let expected: Vec<String> = (0..30)
        .step_by(3)
        .map(|idx| format!("game-{idx:02}"))
        .collect();
    assert_eq!(slugs, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn narrowing_search_clamps_the_page() {
    let mut engine = BrowseEngine::new(thirty_games(), 24);
    let page_two = engine.dispatch(&BrowseEvent::PageRequested(2));
    assert_eq!(page_two.page, 2);
    assert_eq!(page_two.cards.len(), 6);

    // "game-0" matches only titles 00..09 via the title haystack.
    let narrowed = engine.dispatch(&BrowseEvent::SearchChanged("Game 0".into()));
    assert_eq!(narrowed.total, 10);
    assert_eq!(narrowed.page, 1, "page clamps, it is not reset");
    assert_eq!(narrowed.query, "search=Game+0");
}

#[test]
fn shared_url_reproduces_the_view() {
    let catalog = thirty_games();
    let mut seeded = BrowseEngine::from_query(
        catalog.clone(),
        24,
        "?difficulty=Easy&sort=alphabetical&page=9",
    );
    let frame = seeded.dispatch(&BrowseEvent::PageRequested(9));
    // Fifteen Easy games fit on one page; the shared out-of-range page
    // clamps on render.
    assert_eq!(frame.total, 15);
    assert_eq!(frame.page, 1);
    assert_eq!(frame.query, "sort=alphabetical&difficulty=Easy");

    let echo = seeded.control_echo();
    assert_eq!(echo.sort, "alphabetical");
    assert_eq!(echo.checked.len(), 1);
    assert_eq!(echo.checked[0].facet, "difficulty");
    assert_eq!(echo.checked[0].value, "Easy");
}

#[test]
fn late_catalog_arrival_rederives_cleanly() {
    let mut engine = BrowseEngine::from_query(Catalog::default(), 24, "mechanism=dice&page=3");
    let empty = engine.frame();
    assert_eq!(empty.total, 0);
    assert_eq!(empty.total_pages, 1);
    assert!(empty.cards.is_empty());

    engine.set_catalog(thirty_games());
    let frame = engine.dispatch(&BrowseEvent::SortChanged(SortKey::Trending));
    assert_eq!(frame.total, 10);
    assert_eq!(frame.page, 1);
}
