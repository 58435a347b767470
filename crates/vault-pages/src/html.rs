// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! HTML fragment rendering.
//!
//! Markup mirrors the generated site's card structure (`article.game-card`,
//! pill rows, button links). All interpolated record text passes through
//! [`escape_html`]; record data is trusted content but escaping keeps a
//! stray ampersand or quote in a title from breaking attributes.

use vault_browse::{GameCard, PageLink, PageLinkKind};
use vault_catalog::Guide;

/// Escape text for HTML element and double-quoted attribute positions.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// One game card, matching the static builder's markup.
#[must_use]
pub fn render_game_card(card: &GameCard) -> String {
    let pills: String = card
        .mechanisms
        .iter()
        .map(|mech| format!("<span class=\"pill\">{}</span>", escape_html(mech)))
        .collect();
    format!(
        concat!(
            "<article class=\"game-card\">\n",
            "  <img src=\"{thumb}\" alt=\"{title} cover\" loading=\"lazy\" width=\"320\" height=\"180\">\n",
            "  <div>\n",
            "    <span class=\"badge-soft\">{difficulty}</span>\n",
            "    <h3>{title}</h3>\n",
            "    <p>{summary}</p>\n",
            "  </div>\n",
            "  <div class=\"pill-row\">{pills}</div>\n",
            "  <div class=\"card-actions\">\n",
            "    <a class=\"button-link primary\" href=\"{play}\" target=\"_blank\" rel=\"noopener\">Play now</a>\n",
            "    <a class=\"button-link secondary\" href=\"/games/{slug}/\">Details</a>\n",
            "  </div>\n",
            "</article>"
        ),
        thumb = escape_html(&card.thumbnail),
        title = escape_html(&card.title),
        difficulty = escape_html(&card.difficulty),
        summary = escape_html(&card.summary),
        pills = pills,
        play = escape_html(&card.play_url),
        slug = escape_html(&card.slug),
    )
}

/// All cards of one results page, joined for grid injection.
#[must_use]
pub fn render_grid(cards: &[GameCard]) -> String {
    cards
        .iter()
        .map(render_game_card)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One guide card, matching the static builder's markup.
#[must_use]
pub fn render_guide_card(guide: &Guide) -> String {
    format!(
        concat!(
            "<article class=\"guide-card\">\n",
            "  <img src=\"{thumb}\" alt=\"{title} cover\" loading=\"lazy\" width=\"320\" height=\"180\">\n",
            "  <div>\n",
            "    <span class=\"badge-soft\">{difficulty} guide</span>\n",
            "    <h3>{title}</h3>\n",
            "    <p>{summary}</p>\n",
            "  </div>\n",
            "  <div class=\"card-actions\">\n",
            "    <a class=\"button-link primary\" href=\"/guides/{slug}/\">Watch &amp; learn</a>\n",
            "    <a class=\"button-link secondary\" href=\"/games/{game_slug}/\">Game details</a>\n",
            "  </div>\n",
            "</article>"
        ),
        thumb = escape_html(&guide.thumbnail),
        title = escape_html(&guide.title),
        difficulty = escape_html(&guide.difficulty),
        summary = escape_html(&guide.summary),
        slug = escape_html(&guide.slug),
        game_slug = escape_html(&guide.game_slug),
    )
}

/// Pagination entries as anchors under `base_path`. The current page
/// renders as a non-interactive `<span>`; every other entry carries its
/// target page in `data-page` so hosts can delegate clicks without parsing
/// the href.
#[must_use]
pub fn render_pagination(links: &[PageLink], base_path: &str) -> String {
    links
        .iter()
        .map(|link| {
            if link.current {
                return format!(
                    "<span class=\"current\" aria-current=\"page\">{}</span>",
                    escape_html(&link.label)
                );
            }
            let href = if link.query.is_empty() {
                base_path.to_owned()
            } else {
                format!("{base_path}?{}", link.query)
            };
            let class = match link.kind {
                PageLinkKind::Previous => " class=\"prev\"",
                PageLinkKind::Next => " class=\"next\"",
                PageLinkKind::Number => "",
            };
            format!(
                "<a href=\"{href}\"{class} data-page=\"{page}\">{label}</a>",
                href = escape_html(&href),
                class = class,
                page = target_page(link),
                label = escape_html(&link.label),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Results-count line for the toolbar.
#[must_use]
pub fn results_count_text(total: usize) -> String {
    format!("{total} games found")
}

fn target_page(link: &PageLink) -> u32 {
    // Number labels are their own target; prev/next links encode theirs in
    // the query (absent query means page 1).
    if link.kind == PageLinkKind::Number {
        return link.label.parse().unwrap_or(1);
    }
    link.query
        .split('&')
        .find_map(|pair| pair.strip_prefix("page="))
        .and_then(|page| page.parse().ok())
        .unwrap_or(1)
}
