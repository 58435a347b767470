// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sitewide search panel over games and guides.
//!
//! A small in-memory index built once per page load. Lookup is the same
//! substring predicate the catalog browser uses — no ranking beyond index
//! order (games before guides, each in export order).

use serde::{Deserialize, Serialize};
use vault_catalog::{Catalog, GuideSet};

use crate::html::escape_html;

/// What kind of content a hit points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// A playable game (`/games/<slug>/`).
    Game,
    /// A walkthrough guide (`/guides/<slug>/`).
    Guide,
}

impl SearchKind {
    fn badge(self) -> &'static str {
        match self {
            Self::Game => "Game",
            Self::Guide => "Guide",
        }
    }

    fn base(self) -> &'static str {
        match self {
            Self::Game => "/games/",
            Self::Guide => "/guides/",
        }
    }
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Content kind.
    pub kind: SearchKind,
    /// Record slug.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Difficulty label shown as a pill.
    pub difficulty: String,
    /// Site-relative link target.
    pub url: String,
}

struct Entry {
    kind: SearchKind,
    slug: String,
    title: String,
    difficulty: String,
    haystack: String,
}

/// Immutable sitewide search index.
pub struct SearchIndex {
    entries: Vec<Entry>,
}

impl SearchIndex {
    /// Hits returned per lookup unless the caller asks otherwise.
    pub const DEFAULT_LIMIT: usize = 8;

    /// Index every game and guide. Haystacks fold title, author,
    /// difficulty, and slug into one lowercase string.
    #[must_use]
    pub fn build(catalog: &Catalog, guides: &GuideSet) -> Self {
        let mut entries = Vec::with_capacity(catalog.len() + guides.len());
        for game in catalog.games() {
            entries.push(Entry {
                kind: SearchKind::Game,
                slug: game.slug.clone(),
                title: game.title.clone(),
                difficulty: game.difficulty.clone(),
                haystack: fold(&[
                    game.title.as_str(),
                    game.author.as_str(),
                    game.difficulty.as_str(),
                    game.slug.as_str(),
                ]),
            });
        }
        for guide in guides.guides() {
            entries.push(Entry {
                kind: SearchKind::Guide,
                slug: guide.slug.clone(),
                title: guide.title.clone(),
                difficulty: guide.difficulty.clone(),
                haystack: fold(&[
                    guide.title.as_str(),
                    guide.author.as_str(),
                    guide.difficulty.as_str(),
                    guide.slug.as_str(),
                ]),
            });
        }
        Self { entries }
    }

    /// Number of indexed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is indexed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring lookup. An empty (or whitespace) query
    /// returns nothing — the panel stays collapsed until the user types.
    #[must_use]
    pub fn lookup(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| entry.haystack.contains(&needle))
            .take(limit)
            .map(|entry| SearchHit {
                kind: entry.kind,
                slug: entry.slug.clone(),
                title: entry.title.clone(),
                difficulty: entry.difficulty.clone(),
                url: format!("{}{}/", entry.kind.base(), entry.slug),
            })
            .collect()
    }
}

fn fold(parts: &[&str]) -> String {
    let mut haystack = String::new();
    for part in parts {
        haystack.push_str(&part.to_lowercase());
        haystack.push(' ');
    }
    haystack
}

/// Rendered panel state for the `data-search-results` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelRender {
    /// Inner HTML for the panel; empty collapses it.
    pub html: String,
    /// Value for the shell's `aria-expanded` attribute.
    pub expanded: bool,
}

/// Render hits for a query. Empty query collapses the panel; a query with
/// no hits keeps it open with an empty-state message.
#[must_use]
pub fn render_panel(query: &str, hits: &[SearchHit]) -> PanelRender {
    if query.trim().is_empty() {
        return PanelRender {
            html: String::new(),
            expanded: false,
        };
    }
    if hits.is_empty() {
        return PanelRender {
            html: "<p class=\"search-empty\">No matches found.</p>".to_owned(),
            expanded: true,
        };
    }
    let items: String = hits
        .iter()
        .map(|hit| {
            format!(
                concat!(
                    "<li><a href=\"{url}\">",
                    "<span class=\"badge-soft\">{badge}</span> {title}",
                    " <span class=\"pill\">{difficulty}</span>",
                    "</a></li>"
                ),
                url = escape_html(&hit.url),
                badge = hit.kind.badge(),
                title = escape_html(&hit.title),
                difficulty = escape_html(&hit.difficulty),
            )
        })
        .collect();
    PanelRender {
        html: format!("<ul class=\"search-results-list\">{items}</ul>"),
        expanded: true,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn index() -> SearchIndex {
        let catalog = Catalog::from_json(
            r#"[
                {"slug":"night-vault","title":"Night Vault","author":"Ostrich Labs","difficulty":"Hard"},
                {"slug":"dice-den","title":"Dice Den","difficulty":"Easy"}
            ]"#,
        )
        .unwrap();
        let guides = GuideSet::from_json(
            r#"[{"slug":"night-vault-guide","title":"Night Vault Walkthrough","difficulty":"Hard","game_slug":"night-vault"}]"#,
        )
        .unwrap();
        SearchIndex::build(&catalog, &guides)
    }

    // ── 1. lookup spans games and guides ────────────────────────────────
    #[test]
    fn lookup_spans_kinds() {
        let hits = index().lookup("night", SearchIndex::DEFAULT_LIMIT);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].kind, SearchKind::Game);
        assert_eq!(hits[0].url, "/games/night-vault/");
        assert_eq!(hits[1].kind, SearchKind::Guide);
        assert_eq!(hits[1].url, "/guides/night-vault-guide/");
    }

    // ── 2. empty query returns nothing ──────────────────────────────────
    #[test]
    fn empty_query_collapses() {
        assert!(index().lookup("", 8).is_empty());
        assert!(index().lookup("   ", 8).is_empty());
    }

    // ── 3. lookup folds case and reaches author/difficulty ──────────────
    #[test]
    fn case_folded_haystack() {
        let idx = index();
        assert_eq!(idx.lookup("OSTRICH", 8).len(), 1);
        assert_eq!(idx.lookup("easy", 8).len(), 1);
    }

    // ── 4. limit truncates hits ─────────────────────────────────────────
    #[test]
    fn limit_applies() {
        assert_eq!(index().lookup("vault", 1).len(), 1);
    }

    // ── 5. panel renders list, empty state, or collapses ────────────────
    #[test]
    fn panel_states() {
        let idx = index();
        let open = render_panel("night", &idx.lookup("night", 8));
        assert!(open.expanded);
        assert!(open.html.contains("search-results-list"));
        assert!(open.html.contains("Night Vault Walkthrough"));

        let none = render_panel("zzz", &idx.lookup("zzz", 8));
        assert!(none.expanded);
        assert!(none.html.contains("No matches found."));

        let collapsed = render_panel("", &[]);
        assert!(!collapsed.expanded);
        assert!(collapsed.html.is_empty());
    }
}
