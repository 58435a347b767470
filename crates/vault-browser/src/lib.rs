// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Browser host bridge for the vault front end.
//!
//! This crate wraps the pure crates (`vault-browse`, `vault-pages`,
//! `vault-community`, `vault-store`) into one stateful [`VaultEngine`] with a
//! JavaScript-friendly surface. The host page stays a thin shim: it fetches
//! `games.json`, forwards DOM events, applies the returned [`PagePlan`]
//! fragments to the marker elements, and mirrors the engine's key-value
//! snapshot into `localStorage`.
//!
//! Values cross the boundary as JSON strings so the same surface works from
//! native tests and from JS. With `--features wasm` the type is exposed via
//! `wasm-bindgen` and a few camelCase helpers return plain JS objects
//! instead (see `currentPlan` / `panelHits`).
//!
//! # Usage (from JavaScript)
//!
//! ```js
//! import init, { VaultEngine } from 'vault-browser';
//!
//! await init();
//! const engine = new VaultEngine(24);
//! engine.store_restore(localStorage.getItem('vault') ?? '{}');
//!
//! const games = await fetch('/data/games.json');
//! engine.load_catalog(await games.text());
//!
//! let plan = JSON.parse(engine.init(location.search));
//! applyPlan(plan);
//!
//! searchInput.addEventListener('input', () => {
//!   applyPlan(JSON.parse(engine.search_changed(searchInput.value)));
//! });
//! ```
//!
//! Every plan-returning call also carries the canonical query string; the
//! host writes it to the address bar with `history.replaceState`, never
//! `pushState`, so Back always leaves the catalog page.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::cargo)]
#![allow(clippy::module_name_repetitions)]

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use vault_browse::{BrowseEngine, BrowseEvent, SortKey};
use vault_catalog::{Catalog, Facet, GuideSet};
use vault_community::{Community, CommunityError};
use vault_pages::{render_panel, CtaOverlay, PagePlan, SearchIndex};
use vault_store::{keys, KeyValueStore, MemoryStore};

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Cards per catalog page, matching the static markup's `data-page-size`.
pub const DEFAULT_PAGE_SIZE: usize = 24;

// ─── VaultEngine ─────────────────────────────────────────────────────────────

/// The main browser engine.
///
/// One instance per page load. It owns the view state, the once-fetched
/// catalog, the sitewide search index, the community records behind an
/// in-memory store, and the CTA overlay clock. All methods are synchronous;
/// fetching and timers stay on the host side.
///
/// # Thread Safety
///
/// `VaultEngine` is designed for single-threaded use within a JavaScript
/// context. For Web Worker scenarios, create separate engine instances per
/// worker.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub struct VaultEngine {
    /// Catalog view state and derive pipeline.
    browse: BrowseEngine,

    /// Guide collection, folded into the search index.
    guides: GuideSet,

    /// Mock auth, forum, and review records.
    community: Community<MemoryStore>,

    /// Sitewide search index over games and guides.
    search: SearchIndex,

    /// Timed CTA overlay state.
    cta: CtaOverlay,

    /// Page slug the CTA was armed for; dismissal is remembered per slug.
    cta_slug: Option<String>,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
impl VaultEngine {
    // ─── Construction ────────────────────────────────────────────────────────

    /// Creates an engine with an empty catalog and a fresh store.
    ///
    /// Call [`store_restore`](Self::store_restore) first when the host has a
    /// persisted snapshot, then [`load_catalog`](Self::load_catalog) once the
    /// fetch resolves.
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        #[cfg(feature = "console-panic")]
        console_error_panic_hook::set_once();

        let catalog = Catalog::default();
        let guides = GuideSet::default();
        let search = SearchIndex::build(&catalog, &guides);
        Self {
            browse: BrowseEngine::new(catalog, page_size),
            guides,
            community: Community::new(MemoryStore::new()),
            search,
            cta: CtaOverlay::default(),
            cta_slug: None,
        }
    }

    // ─── Data loading ────────────────────────────────────────────────────────

    /// Loads the `games.json` payload fetched by the host.
    ///
    /// Returns `false` and keeps the previous catalog when the payload does
    /// not parse; the host skips re-rendering in that case and the static
    /// markup stays up.
    pub fn load_catalog(&mut self, json: &str) -> bool {
        match Catalog::from_json(json) {
            Ok(catalog) => {
                self.search = SearchIndex::build(&catalog, &self.guides);
                self.browse.set_catalog(catalog);
                true
            }
            Err(err) => {
                warn!(%err, "games payload unreadable, keeping previous catalog");
                false
            }
        }
    }

    /// Loads the `guides.json` payload and folds it into the search index.
    ///
    /// Guides never enter the catalog grid; they only add search hits.
    pub fn load_guides(&mut self, json: &str) -> bool {
        match GuideSet::from_json(json) {
            Ok(guides) => {
                self.guides = guides;
                self.search = SearchIndex::build(self.browse.catalog(), &self.guides);
                true
            }
            Err(err) => {
                warn!(%err, "guides payload unreadable, keeping previous guides");
                false
            }
        }
    }

    // ─── Browse events ───────────────────────────────────────────────────────

    /// Seeds the view state from the address-bar query string and returns
    /// the first [`PagePlan`] as JSON.
    ///
    /// Also the re-entry point for history navigation: call it again from a
    /// `popstate` handler with the restored query.
    pub fn init(&mut self, query: &str) -> String {
        self.browse.reset(query);
        let frame = self.browse.settle();
        to_json(&PagePlan::from_frame(&frame, &self.browse.control_echo()), "{}")
    }

    /// Applies new search text and returns the next plan as JSON.
    pub fn search_changed(&mut self, text: &str) -> String {
        self.dispatch_json(&BrowseEvent::SearchChanged(text.to_owned()))
    }

    /// Applies a sort selector change and returns the next plan as JSON.
    /// Unknown tokens fall back to the trending sort.
    pub fn sort_changed(&mut self, token: &str) -> String {
        self.dispatch_json(&BrowseEvent::SortChanged(SortKey::parse(token)))
    }

    /// Applies a facet checkbox change and returns the next plan as JSON.
    ///
    /// `facet_key` is the panel's `data-facet` value. A key the engine does
    /// not know leaves the state untouched and returns the current plan.
    pub fn facet_toggled(&mut self, facet_key: &str, value: &str, selected: bool) -> String {
        let Some(facet) = Facet::from_key(facet_key) else {
            warn!(facet_key, "unknown facet marker, ignoring toggle");
            return self.current_plan_json();
        };
        self.dispatch_json(&BrowseEvent::FacetToggled {
            facet,
            value: value.to_owned(),
            selected,
        })
    }

    /// Applies a pagination click and returns the next plan as JSON. Out of
    /// range pages clamp.
    pub fn page_requested(&mut self, page: u32) -> String {
        self.dispatch_json(&BrowseEvent::PageRequested(page))
    }

    // ─── Sitewide search panel ───────────────────────────────────────────────

    /// Runs a header search and returns the panel render as JSON: inner
    /// HTML for the results marker plus the `aria-expanded` flag for the
    /// shell.
    #[must_use]
    pub fn panel_query(&self, text: &str) -> String {
        let hits = self.search.lookup(text, SearchIndex::DEFAULT_LIMIT);
        to_json(&render_panel(text, &hits), "{}")
    }

    // ─── CTA overlay ─────────────────────────────────────────────────────────

    /// Arms the CTA overlay for a page. A dismissal remembered for the same
    /// slug keeps the overlay down for good.
    pub fn cta_arm(&mut self, page_slug: &str, now_ms: i64) {
        let dismissed = self
            .community
            .store()
            .get(&keys::cta_dismissed(page_slug))
            .is_some();
        self.cta.arm(now_ms, dismissed);
        self.cta_slug = Some(page_slug.to_owned());
    }

    /// Advances the overlay clock. Returns `true` exactly once, on the tick
    /// the overlay becomes visible; the host then clears `aria-hidden`.
    pub fn cta_poll(&mut self, now_ms: i64) -> bool {
        self.cta.poll(now_ms)
    }

    /// Dismisses the overlay and remembers the dismissal for the armed
    /// slug.
    pub fn cta_dismiss(&mut self) {
        self.cta.dismiss();
        if let Some(slug) = self.cta_slug.clone() {
            self.community
                .store_mut()
                .set(&keys::cta_dismissed(&slug), "1");
        }
    }

    /// Current `aria-hidden` value for the overlay marker.
    #[must_use]
    pub fn cta_hidden(&self) -> String {
        self.cta.aria_hidden().to_owned()
    }

    // ─── Community ───────────────────────────────────────────────────────────

    /// Registers a user and signs them in. Returns an outcome envelope:
    /// `{"ok":true,"value":{user}}` or `{"ok":false,"error":"..."}`.
    pub fn register(&mut self, username: &str, display_name: &str, now_ms: i64) -> String {
        outcome(self.community.register(username, display_name, now_ms))
    }

    /// Signs in a registered user. Returns an outcome envelope.
    pub fn login(&mut self, username: &str) -> String {
        outcome(self.community.login(username))
    }

    /// Clears the session.
    pub fn logout(&mut self) {
        self.community.logout();
    }

    /// The signed-in user as JSON, or `None` when signed out.
    #[must_use]
    pub fn current_user_json(&self) -> Option<String> {
        self.community.current_user().map(|user| to_json(&user, "{}"))
    }

    /// Submits a forum post as the signed-in user. Returns an outcome
    /// envelope.
    pub fn submit_post(&mut self, title: &str, body: &str, now_ms: i64) -> String {
        outcome(self.community.submit_post(title, body, now_ms))
    }

    /// All forum posts, newest first, as a JSON array.
    #[must_use]
    pub fn posts_json(&self) -> String {
        to_json(&self.community.posts(), "[]")
    }

    /// Submits a review as the signed-in user. Returns an outcome envelope.
    pub fn submit_review(&mut self, game_slug: &str, rating: u8, body: &str, now_ms: i64) -> String {
        outcome(self.community.submit_review(game_slug, rating, body, now_ms))
    }

    /// Reviews for one game, newest first, as a JSON array.
    #[must_use]
    pub fn reviews_json(&self, game_slug: &str) -> String {
        to_json(&self.community.reviews(game_slug), "[]")
    }

    /// Mean stored rating for one game, or `None` without reviews.
    #[must_use]
    pub fn average_rating(&self, game_slug: &str) -> Option<f64> {
        self.community.average_rating(game_slug)
    }

    /// Profile view for a registered user as JSON, or `None` for unknown
    /// names.
    #[must_use]
    pub fn profile_json(&self, username: &str) -> Option<String> {
        self.community
            .profile(username)
            .map(|profile| to_json(&profile, "{}"))
    }

    // ─── Storage bridge ──────────────────────────────────────────────────────

    /// The whole key-value store as one JSON object, for the host to mirror
    /// into `localStorage` after each mutation.
    #[must_use]
    pub fn store_snapshot(&self) -> String {
        let entries: BTreeMap<&str, &str> = self.community.store().snapshot().collect();
        to_json(&entries, "{}")
    }

    /// Replaces the store from a persisted snapshot. Returns `false` and
    /// starts fresh when the snapshot does not parse.
    pub fn store_restore(&mut self, json: &str) -> bool {
        match serde_json::from_str::<BTreeMap<String, String>>(json) {
            Ok(entries) => {
                self.community.store_mut().restore(entries);
                true
            }
            Err(err) => {
                warn!(%err, "store snapshot unreadable, starting fresh");
                false
            }
        }
    }
}

impl Default for VaultEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl VaultEngine {
    fn dispatch_json(&mut self, event: &BrowseEvent) -> String {
        let frame = self.browse.dispatch(event);
        to_json(&PagePlan::from_frame(&frame, &self.browse.control_echo()), "{}")
    }

    fn current_plan_json(&self) -> String {
        let frame = self.browse.frame();
        to_json(&PagePlan::from_frame(&frame, &self.browse.control_echo()), "{}")
    }
}

// Plain-object variants for JS callers that prefer structured values over
// JSON strings.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl VaultEngine {
    /// Current page plan as a plain JS object (JS/WASM use).
    #[wasm_bindgen(js_name = currentPlan)]
    #[must_use]
    pub fn current_plan(&self) -> JsValue {
        let frame = self.browse.frame();
        let plan = PagePlan::from_frame(&frame, &self.browse.control_echo());
        serde_wasm_bindgen::to_value(&plan).unwrap_or(JsValue::NULL)
    }

    /// Header search hits as a plain JS array (JS/WASM use).
    #[wasm_bindgen(js_name = panelHits)]
    #[must_use]
    pub fn panel_hits(&self, text: &str) -> JsValue {
        let hits = self.search.lookup(text, SearchIndex::DEFAULT_LIMIT);
        serde_wasm_bindgen::to_value(&hits).unwrap_or(JsValue::NULL)
    }
}

// ─── Helper Functions ────────────────────────────────────────────────────────

/// JSON envelope for fallible community calls.
#[derive(Debug, Serialize)]
struct Outcome {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn outcome<T: Serialize>(result: Result<T, CommunityError>) -> String {
    let envelope = match result {
        Ok(value) => Outcome {
            ok: true,
            value: serde_json::to_value(&value).ok(),
            error: None,
        },
        Err(err) => Outcome {
            ok: false,
            value: None,
            error: Some(err.to_string()),
        },
    };
    to_json(&envelope, r#"{"ok":false,"error":"encode"}"#)
}

fn to_json<T: Serialize>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| fallback.to_owned())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn catalog_json() -> String {
        serde_json::json!([
            {
                "slug": "dark-manor",
                "title": "Dark Manor",
                "mechanisms": ["logic", "hidden-object"],
                "difficulty": "Hard",
                "pv7_norm": 0.9,
            },
            {
                "slug": "dice-tower",
                "title": "Dice Tower",
                "mechanisms": ["dice"],
                "difficulty": "Easy",
                "pv7_norm": 0.4,
            },
        ])
        .to_string()
    }

    fn loaded() -> VaultEngine {
        let mut engine = VaultEngine::new(24);
        assert!(engine.load_catalog(&catalog_json()));
        engine
    }

    // ── 1. bad payloads keep the previous catalog ───────────────────────
    #[test]
    fn bad_payload_keeps_catalog() {
        let mut engine = loaded();
        assert!(!engine.load_catalog("{not json"));
        let plan: PagePlan = serde_json::from_str(&engine.init("")).unwrap();
        assert!(plan.grid_html.contains("Dark Manor"));
    }

    // ── 2. init parses the query and reports the canonical form ─────────
    #[test]
    fn init_round_trips_query() {
        let mut engine = loaded();
        let plan: PagePlan =
            serde_json::from_str(&engine.init("?sort=alphabetical&page=9")).unwrap();
        assert_eq!(plan.sort, "alphabetical");
        // One page of two games, so the out of range page clamps away.
        assert_eq!(plan.query, "sort=alphabetical");
    }

    // ── 3. unknown facet key is a per-control no-op ─────────────────────
    #[test]
    fn unknown_facet_ignored() {
        let mut engine = loaded();
        engine.init("");
        let before: PagePlan = serde_json::from_str(&engine.current_plan_json()).unwrap();
        let after: PagePlan =
            serde_json::from_str(&engine.facet_toggled("publisher", "acme", true)).unwrap();
        assert_eq!(before, after);
    }

    // ── 4. facet toggle narrows the grid ────────────────────────────────
    #[test]
    fn facet_toggle_narrows() {
        let mut engine = loaded();
        engine.init("");
        let plan: PagePlan =
            serde_json::from_str(&engine.facet_toggled("mechanisms", "dice", true)).unwrap();
        assert_eq!(plan.results_count, "1 games found");
        assert_eq!(plan.query, "mechanism=dice");
        assert_eq!(plan.checked.len(), 1);
    }

    // ── 5. CTA dismissal lands in the store under the page slug ─────────
    #[test]
    fn cta_dismissal_persists() {
        let mut engine = loaded();
        engine.cta_arm("dark-manor", 0);
        assert!(!engine.cta_poll(1_000));
        assert!(engine.cta_poll(60_000));
        assert_eq!(engine.cta_hidden(), "false");
        engine.cta_dismiss();
        assert_eq!(engine.cta_hidden(), "true");

        let snapshot = engine.store_snapshot();
        assert!(snapshot.contains("vault.cta.dark-manor"));

        // A new engine restored from the snapshot never shows it again.
        let mut next = VaultEngine::new(24);
        assert!(next.store_restore(&snapshot));
        next.cta_arm("dark-manor", 0);
        assert!(!next.cta_poll(i64::MAX));
    }

    // ── 6. snapshot and restore carry community records ─────────────────
    #[test]
    fn snapshot_round_trip() {
        let mut engine = loaded();
        engine.register("frostbyte", "Frost Byte", 7);
        let snapshot = engine.store_snapshot();

        let mut next = VaultEngine::new(24);
        assert!(next.store_restore(&snapshot));
        assert!(next.current_user_json().unwrap().contains("frostbyte"));

        assert!(!next.store_restore("not a snapshot"));
    }

    // ── 7. outcome envelopes carry errors ───────────────────────────────
    #[test]
    fn outcome_envelope_shape() {
        let mut engine = loaded();
        let err = engine.submit_post("A solid title", "A body long enough.", 1);
        assert!(err.contains(r#""ok":false"#));
        assert!(err.contains("not signed in"));

        engine.register("frostbyte", "", 0);
        let ok = engine.submit_post("A solid title", "A body long enough.", 1);
        assert!(ok.contains(r#""ok":true"#));
        assert!(ok.contains("A solid title"));
    }
}
