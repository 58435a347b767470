// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! DOM contract and the render plan handed to hosts.
//!
//! The page template owns these `data-*` markers; the engine only ever
//! queries them. Every marker is optional — a page without a sort selector
//! simply never produces sort events, and a missing grid disables grid
//! injection without affecting anything else.

use serde::{Deserialize, Serialize};
use vault_browse::{BrowseFrame, ControlEcho, FacetCheck};

use crate::html;

/// Results grid container. Also carries [`PAGE_SIZE_ATTR`].
pub const GAMES_GRID: &str = "data-games-grid";
/// Page-size attribute on the grid marker.
pub const PAGE_SIZE_ATTR: &str = "data-page-size";
/// Pagination container.
pub const GAMES_PAGINATION: &str = "data-games-pagination";
/// Results-count text node.
pub const RESULTS_COUNT: &str = "data-results-count";
/// Catalog search input.
pub const GAMES_SEARCH: &str = "data-games-search";
/// Sort selector.
pub const GAMES_SORT: &str = "data-games-sort";
/// Facet checkbox marker; the attribute value names the facet, the input's
/// `value` names the facet value.
pub const FACET: &str = "data-facet";
/// Sitewide search shell.
pub const SEARCH_SHELL: &str = "data-search";
/// Sitewide search form inside the shell.
pub const SEARCH_FORM: &str = "data-search-form";
/// Sitewide search results panel (carries `aria-expanded`).
pub const SEARCH_RESULTS: &str = "data-search-results";
/// Call-to-action overlay (carries `aria-hidden`).
pub const CTA_OVERLAY: &str = "data-cta-overlay";
/// Dismiss control inside the overlay.
pub const CTA_DISMISS: &str = "data-cta-dismiss";
/// Review widget mount on game detail pages; carries [`GAME_SLUG_ATTR`].
pub const REVIEW_WIDGET: &str = "data-review-widget";
/// Game slug attribute on the review widget mount.
pub const GAME_SLUG_ATTR: &str = "data-game-slug";
/// Target page number on client-rendered pagination anchors.
pub const PAGE_LINK: &str = "data-page";

/// Catalog listing path used as the base for pagination hrefs.
pub const GAMES_BASE_PATH: &str = "/games/";

/// Everything a host applies to the page after one browse event: rendered
/// fragments for the grid/pagination/count markers, echoes for the visible
/// controls, and the query string for the address bar (written with a
/// history replace, never a push).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePlan {
    /// Inner HTML for the grid marker.
    pub grid_html: String,
    /// Inner HTML for the pagination marker; empty clears it.
    pub pagination_html: String,
    /// Text for the results-count marker.
    pub results_count: String,
    /// Canonical query string (no leading `?`; empty for the default view).
    pub query: String,
    /// Value for the search input.
    pub search: String,
    /// Value for the sort selector.
    pub sort: String,
    /// Facet inputs to check; all others are unchecked.
    pub checked: Vec<FacetCheck>,
}

impl PagePlan {
    /// Assemble a plan from a derived frame and its control echoes.
    #[must_use]
    pub fn from_frame(frame: &BrowseFrame, echo: &ControlEcho) -> Self {
        Self {
            grid_html: html::render_grid(&frame.cards),
            pagination_html: html::render_pagination(&frame.pagination, GAMES_BASE_PATH),
            results_count: html::results_count_text(frame.total),
            query: frame.query.clone(),
            search: echo.search.clone(),
            sort: echo.sort.clone(),
            checked: echo.checked.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use vault_browse::BrowseEngine;
    use vault_catalog::Catalog;

    // ── 1. plan mirrors frame and echo ──────────────────────────────────
    #[test]
    fn plan_from_frame() {
        let catalog = Catalog::from_json(
            r#"[
                {"slug":"a","title":"Alpha","mechanisms":["dice"]},
                {"slug":"b","title":"Beta","mechanisms":["logic"]}
            ]"#,
        )
        .unwrap();
        let engine = BrowseEngine::from_query(catalog, 24, "search=alpha");
        let plan = PagePlan::from_frame(&engine.frame(), &engine.control_echo());
        assert!(plan.grid_html.contains("<h3>Alpha</h3>"));
        assert!(!plan.grid_html.contains("Beta"));
        assert_eq!(plan.results_count, "1 games found");
        assert_eq!(plan.query, "search=alpha");
        assert_eq!(plan.search, "alpha");
        assert_eq!(plan.sort, "trending");
        assert!(plan.pagination_html.is_empty());
        assert!(plan.checked.is_empty());
    }
}
