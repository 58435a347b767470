// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Page templates for the generated site.
//!
//! The scaffold wraps the same fragment renderers the client engine uses
//! (`vault_pages::html`), so a page the builder wrote and a page the engine
//! re-hydrated are byte-compatible where they overlap. Engine-queried
//! markers are interpolated from `vault_pages::dom` rather than retyped.

use time::macros::format_description;
use time::Date;
use vault_browse::{pipeline, GameCard, ViewState};
use vault_catalog::{Catalog, Facet, FeaturedTab, Game, Guide, GuideSet};
use vault_pages::dom;
use vault_pages::html::{self, escape_html};

pub const SITE_NAME: &str = "Vault Games Hub";
pub const SITE_URL: &str = "https://www.vaultgameshub.com";

const PAGE_SIZE: usize = 24;
const RELATED_LEN: usize = 6;
const RELATED_GUIDES_LEN: usize = 3;
const DEFAULT_DESCRIPTION: &str = "Discover immersive escape room games and detailed \
     walkthroughs curated by the Vault Games Hub team.";

// Option values are the engine's sort tokens; labels are display copy.
const SORT_OPTIONS: [(&str, &str); 4] = [
    ("trending", "Trending formula"),
    ("newest", "Newest first"),
    ("mostRated", "Highest rated"),
    ("alphabetical", "Alphabetical"),
];

/// One file of the rendered site, path relative to the output root.
pub struct SitePage {
    pub path: String,
    pub html: String,
}

/// Render every page of the site.
pub fn render_site(catalog: &Catalog, guides: &GuideSet) -> Vec<SitePage> {
    let mut rendered = vec![homepage(catalog, guides), guides_listing(guides)];
    rendered.extend(listing_pages(catalog));
    for game in catalog.games() {
        rendered.push(game_detail(catalog, guides, game));
    }
    for guide in guides.guides() {
        rendered.push(guide_detail(catalog, guides, guide));
    }
    rendered.push(simple_page(
        "about",
        &format!("About {SITE_NAME}"),
        &format!("About {SITE_NAME}"),
        &[
            "Vault Games Hub curates escape room and puzzle experiences with a focus on \
             measurable performance metrics.",
            "Our editorial pipeline combines community data, rapid playtesting, and \
             narrative sensitivity to deliver actionable walkthroughs without spoiling \
             critical beats.",
            "The site ships as a static bundle with structured data and accessibility \
             baked in; all interactivity runs client-side against local storage.",
        ],
    ));
    rendered.push(simple_page(
        "privacy-policy",
        &format!("Privacy Policy | {SITE_NAME}"),
        "Privacy policy",
        &[
            "Vault Games Hub stores community records, sessions, and preferences in your \
             browser only. Nothing you write here leaves your device.",
            "The site fetches static catalog files and embeds third-party video players; \
             those embeds are governed by their providers' policies.",
        ],
    ));
    rendered
}

// ─────────────────────────────────────────────────────────────────────
// Scaffold
// ─────────────────────────────────────────────────────────────────────

fn render_head(title: &str, description: &str, canonical: &str, extra_head: &str) -> String {
    format!(
        concat!(
            "  <head>\n",
            "    <meta charset=\"utf-8\">\n",
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "    <title>{title}</title>\n",
            "    <meta name=\"description\" content=\"{description}\">\n",
            "    <link rel=\"canonical\" href=\"{canonical}\">\n",
            "    <link rel=\"stylesheet\" href=\"/assets/css/main.css\">\n",
            "    <link rel=\"preload\" href=\"/assets/js/global.js\" as=\"script\">\n",
            "{extra}\n",
            "  </head>"
        ),
        title = escape_html(title),
        description = escape_html(description),
        canonical = escape_html(canonical),
        extra = extra_head,
    )
}

fn render_nav(active: &str) -> String {
    let nav_link = |href: &str, label: &str| {
        let current = if active == href {
            " aria-current=\"page\""
        } else {
            ""
        };
        format!("<a href=\"{href}\"{current}>{label}</a>")
    };
    format!(
        concat!(
            "  <header class=\"site-header\">\n",
            "    <div class=\"container\">\n",
            "      <nav class=\"site-nav\" aria-label=\"Primary\">\n",
            "        <a class=\"site-brand\" href=\"/\">{name}</a>\n",
            "        <div class=\"site-nav-links\">\n",
            "          {home}\n",
            "          {games}\n",
            "          {guides}\n",
            "          {about}\n",
            "          {privacy}\n",
            "        </div>\n",
            "        <div class=\"search-shell\" {search_shell}>\n",
            "          <form {search_form} role=\"search\" aria-label=\"Site search\">\n",
            "            <label class=\"visually-hidden\" for=\"global-search\">Search site content</label>\n",
            "            <input id=\"global-search\" type=\"search\" name=\"q\" placeholder=\"Search guides or games\" autocomplete=\"off\">\n",
            "            <button type=\"submit\" aria-label=\"Search\">🔍</button>\n",
            "          </form>\n",
            "          <div class=\"search-results-panel\" {search_results} aria-expanded=\"false\"></div>\n",
            "        </div>\n",
            "      </nav>\n",
            "    </div>\n",
            "  </header>"
        ),
        name = SITE_NAME,
        home = nav_link("/", "Home"),
        games = nav_link("/games/", "Games"),
        guides = nav_link("/guides/", "Guides"),
        about = nav_link("/about/", "About"),
        privacy = nav_link("/privacy-policy/", "Privacy"),
        search_shell = dom::SEARCH_SHELL,
        search_form = dom::SEARCH_FORM,
        search_results = dom::SEARCH_RESULTS,
    )
}

fn render_footer() -> String {
    format!(
        concat!(
            "  <footer class=\"site-footer\">\n",
            "    <div class=\"container\">\n",
            "      <div class=\"footer-grid\">\n",
            "        <div>\n",
            "          <strong>{name}</strong><br>\n",
            "          Escape, puzzle, and strategy news for dedicated players.\n",
            "        </div>\n",
            "        <div>\n",
            "          <a href=\"/privacy-policy/\">Privacy policy</a> · <a href=\"/about/\">About</a>\n",
            "        </div>\n",
            "        <div>\n",
            "          © <span id=\"current-year\">2026</span> {name}. All rights reserved.\n",
            "        </div>\n",
            "      </div>\n",
            "    </div>\n",
            "  </footer>\n",
            "  <script src=\"/assets/js/global.js\" defer></script>"
        ),
        name = SITE_NAME,
    )
}

fn render_base(
    title: &str,
    description: &str,
    canonical_path: &str,
    body: &str,
    active: &str,
    extra_head: &str,
    scripts: &[&str],
) -> String {
    let canonical = format!("{SITE_URL}{canonical_path}");
    let script_tags: String = scripts
        .iter()
        .map(|src| format!("\n  <script src=\"{src}\" defer></script>"))
        .collect();
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "{head}\n",
            "<body>\n",
            "{nav}\n",
            "  <main>\n",
            "    <div class=\"container\">\n",
            "{body}\n",
            "    </div>\n",
            "  </main>\n",
            "{footer}{scripts}\n",
            "</body>\n",
            "</html>\n"
        ),
        head = render_head(title, description, &canonical, extra_head),
        nav = render_nav(active),
        body = body,
        footer = render_footer(),
        scripts = script_tags,
    )
}

fn ld_json(value: &serde_json::Value) -> String {
    format!("    <script type=\"application/ld+json\">{value}</script>")
}

fn breadcrumb(items: &[(&str, &str)]) -> serde_json::Value {
    let elements: Vec<serde_json::Value> = items
        .iter()
        .enumerate()
        .map(|(idx, (name, path))| {
            serde_json::json!({
                "@type": "ListItem",
                "position": idx + 1,
                "name": name,
                "item": format!("{SITE_URL}{path}"),
            })
        })
        .collect();
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// `2026-03-15` becomes `15 Mar 2026`; unparseable input passes through.
fn format_date(value: &str) -> String {
    let iso = format_description!("[year]-[month]-[day]");
    let display = format_description!("[day] [month repr:short] [year]");
    Date::parse(value, iso)
        .ok()
        .and_then(|date| date.format(display).ok())
        .unwrap_or_else(|| value.to_owned())
}

// ─────────────────────────────────────────────────────────────────────
// Home page
// ─────────────────────────────────────────────────────────────────────

fn featured_cards(catalog: &Catalog, tab: FeaturedTab) -> String {
    let cards: Vec<GameCard> = catalog
        .featured(tab)
        .into_iter()
        .map(GameCard::from_game)
        .collect();
    html::render_grid(&cards)
}

fn homepage(catalog: &Catalog, guides: &GuideSet) -> SitePage {
    let last_updated = catalog
        .games()
        .iter()
        .map(|game| game.last_updated_at.as_str())
        .max()
        .unwrap_or_default();
    let updated_pill = if last_updated.is_empty() {
        String::new()
    } else {
        format!(
            "\n            <span class=\"metric-pill\">Updated {}</span>",
            format_date(last_updated)
        )
    };

    let hero = format!(
        concat!(
            "      <section class=\"hero\">\n",
            "        <div class=\"hero-intro\">\n",
            "          <div class=\"badge-soft\">Premium escape room intelligence</div>\n",
            "          <h1>Escape room discovery and walkthroughs engineered for speed clears.</h1>\n",
            "          <p>Optimise your next run with curator-tested routes, ranked difficulty filters, and companion video guides. Every scenario is measured, tagged, and ready for instant deployment.</p>\n",
            "          <div class=\"hero-metrics\">\n",
            "            <span class=\"metric-pill\">{total_games} games indexed</span>\n",
            "            <span class=\"metric-pill\">{total_guides} video guides</span>{updated_pill}\n",
            "          </div>\n",
            "        </div>\n",
            "        <div class=\"hero-visual\">\n",
            "          <img src=\"/assets/images/games/placeholder-game.svg\" alt=\"Vault escape selection\" width=\"420\" height=\"280\" loading=\"lazy\">\n",
            "        </div>\n",
            "      </section>"
        ),
        total_games = catalog.len(),
        total_guides = guides.len(),
        updated_pill = updated_pill,
    );

    let tabs = format!(
        concat!(
            "      <section class=\"section\" id=\"featured-selection\">\n",
            "        <div class=\"section-header\">\n",
            "          <div>\n",
            "            <h2>Featured vaults</h2>\n",
            "            <p>Explore the most requested escape sessions from our community, refreshed daily with engagement metrics and editorial context.</p>\n",
            "          </div>\n",
            "          <a class=\"section-cta-link\" href=\"/games/\">Browse full library →</a>\n",
            "        </div>\n",
            "        <div class=\"tablist\" role=\"tablist\" data-tablist>\n",
            "          <button class=\"tab-button\" role=\"tab\" aria-selected=\"true\" data-tab-target=\"tab-trending\">Trending</button>\n",
            "          <button class=\"tab-button\" role=\"tab\" aria-selected=\"false\" data-tab-target=\"tab-new\" tabindex=\"-1\">New</button>\n",
            "          <button class=\"tab-button\" role=\"tab\" aria-selected=\"false\" data-tab-target=\"tab-editors\" tabindex=\"-1\">Editors&#39; picks</button>\n",
            "        </div>\n",
            "        <div id=\"tab-trending\" class=\"tab-panel\" role=\"tabpanel\" aria-hidden=\"false\">\n",
            "          <div class=\"card-grid\">\n",
            "{trending}\n",
            "          </div>\n",
            "        </div>\n",
            "        <div id=\"tab-new\" class=\"tab-panel\" role=\"tabpanel\" aria-hidden=\"true\">\n",
            "          <div class=\"card-grid\">\n",
            "{newest}\n",
            "          </div>\n",
            "        </div>\n",
            "        <div id=\"tab-editors\" class=\"tab-panel\" role=\"tabpanel\" aria-hidden=\"true\">\n",
            "          <div class=\"card-grid\">\n",
            "{editors}\n",
            "          </div>\n",
            "        </div>\n",
            "      </section>"
        ),
        trending = featured_cards(catalog, FeaturedTab::Trending),
        newest = featured_cards(catalog, FeaturedTab::Newest),
        editors = featured_cards(catalog, FeaturedTab::EditorsPicks),
    );

    let spotlight = catalog
        .featured(FeaturedTab::Trending)
        .first()
        .copied()
        .map(spotlight_section)
        .unwrap_or_default();

    let trust = concat!(
        "      <section class=\"section\">\n",
        "        <div class=\"section-header\">\n",
        "          <div>\n",
        "            <h2>Why teams trust Vault Games Hub</h2>\n",
        "            <p>Signals, tags, and analytics-driven curation help squads choose the right room, avoid traps, and onboard new players faster.</p>\n",
        "          </div>\n",
        "        </div>\n",
        "        <div class=\"trust-strip\">\n",
        "          <div class=\"trust-item\">⚡ Rapid content refresh every 48 hours</div>\n",
        "          <div class=\"trust-item\">🎯 Performance-focused rankings</div>\n",
        "          <div class=\"trust-item\">📹 100% guides include HD video</div>\n",
        "          <div class=\"trust-item\">🔒 Everything you write stays in your browser</div>\n",
        "        </div>\n",
        "      </section>"
    )
    .to_owned();

    let body = [hero, tabs, spotlight, trust]
        .iter()
        .filter(|section| !section.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");

    let website_json = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": SITE_NAME,
        "url": format!("{SITE_URL}/"),
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{SITE_URL}/?search={{search_term_string}}"),
            "query-input": "required name=search_term_string"
        }
    });
    let extra = format!(
        "{}\n{}",
        ld_json(&website_json),
        ld_json(&breadcrumb(&[("Home", "/")]))
    );

    SitePage {
        path: "index.html".to_owned(),
        html: render_base(
            &format!("{SITE_NAME} | Escape Room Walkthroughs & Strategy"),
            "Curated escape room discovery platform featuring data-backed rankings, instant filters, and long-form video walkthroughs.",
            "/",
            &body,
            "/",
            &extra,
            &["/assets/js/home.js"],
        ),
    }
}

fn spotlight_section(game: &Game) -> String {
    let guide_link = if game.guide_slug.is_empty() {
        String::new()
    } else {
        format!(
            "\n          <a class=\"section-cta-link\" href=\"/guides/{}/\">Open the guide →</a>",
            escape_html(&game.guide_slug)
        )
    };
    format!(
        concat!(
            "      <section class=\"section\">\n",
            "        <div class=\"section-header\">\n",
            "          <div>\n",
            "            <h2>Featured walkthrough</h2>\n",
            "            <p>Run the champion route for {title} with breakdowns for every pincer move and fallback option.</p>\n",
            "          </div>{guide_link}\n",
            "        </div>\n",
            "        <div class=\"featured-video\">\n",
            "          <div class=\"video-meta\">\n",
            "            <span class=\"badge-soft\">Spotlight strategy</span>\n",
            "            <h3>{title} speed clear tactics</h3>\n",
            "            <p>Watch the curated strat session recorded with developer permission. Key timestamps map to the written walkthrough for rapid rehearsal.</p>\n",
            "            <div class=\"pill-row\">\n",
            "              <span class=\"pill\">Difficulty: {difficulty}</span>\n",
            "              <span class=\"pill\">Players: {players_min}–{players_max}</span>\n",
            "            </div>\n",
            "          </div>\n",
            "          <iframe src=\"https://www.youtube.com/embed/{video_id}\" title=\"{title} walkthrough\" loading=\"lazy\" allowfullscreen></iframe>\n",
            "        </div>\n",
            "      </section>"
        ),
        title = escape_html(&game.title),
        guide_link = guide_link,
        difficulty = escape_html(&game.difficulty),
        players_min = game.players_min,
        players_max = game.players_max,
        video_id = escape_html(&game.youtube_video_id),
    )
}

// ─────────────────────────────────────────────────────────────────────
// Games listing
// ─────────────────────────────────────────────────────────────────────

fn facet_heading(facet: Facet) -> &'static str {
    match facet {
        Facet::Categories => "Categories",
        Facet::Mechanisms => "Mechanisms",
        Facet::Difficulty => "Difficulty",
        Facet::Language => "Language",
    }
}

/// Checkbox groups for every facet, values observed in the catalog.
/// Language labels display uppercased; input values stay raw so the engine
/// matches them against record data.
fn facet_panel(catalog: &Catalog) -> String {
    Facet::ALL
        .iter()
        .map(|&facet| {
            let options: String = catalog
                .facet_values(facet)
                .iter()
                .map(|value| {
                    let label = if facet == Facet::Language {
                        value.to_uppercase()
                    } else {
                        value.clone()
                    };
                    format!(
                        "                <label class=\"facet-checkbox\"><input type=\"checkbox\" value=\"{value}\" {marker}=\"{key}\"> {label}</label>\n",
                        value = escape_html(value),
                        marker = dom::FACET,
                        key = facet.key(),
                        label = escape_html(&label),
                    )
                })
                .collect();
            format!(
                concat!(
                    "            <div class=\"facet-group\">\n",
                    "              <h3>{heading}</h3>\n",
                    "              <div class=\"facet-options\">\n",
                    "{options}",
                    "              </div>\n",
                    "            </div>"
                ),
                heading = facet_heading(facet),
                options = options,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn listing_pages(catalog: &Catalog) -> Vec<SitePage> {
    let facets = facet_panel(catalog);
    let first = pipeline::derive_frame(catalog, &ViewState::default(), PAGE_SIZE);
    (1..=first.total_pages)
        .map(|page| listing_page(catalog, &facets, page))
        .collect()
}

fn listing_page(catalog: &Catalog, facets: &str, page: u32) -> SitePage {
    let state = ViewState {
        page,
        ..ViewState::default()
    };
    let frame = pipeline::derive_frame(catalog, &state, PAGE_SIZE);

    let sort_options: String = SORT_OPTIONS
        .iter()
        .map(|(token, label)| {
            format!("                  <option value=\"{token}\">{label}</option>\n")
        })
        .collect();

    let pagination = html::render_pagination(&frame.pagination, dom::GAMES_BASE_PATH);
    let nav_block = if pagination.is_empty() {
        String::new()
    } else {
        format!(
            "\n            <nav class=\"pagination\" {marker} aria-label=\"pagination\">\n{pagination}\n            </nav>",
            marker = dom::GAMES_PAGINATION,
            pagination = pagination,
        )
    };

    let body = format!(
        concat!(
            "      <section class=\"section\">\n",
            "        <div class=\"section-header\">\n",
            "          <div>\n",
            "            <h1>Games intelligence vault</h1>\n",
            "            <p>Filter by mechanics, difficulty, or languages to pinpoint the next escape room run for your squad.</p>\n",
            "          </div>\n",
            "        </div>\n",
            "        <div class=\"games-layout\">\n",
            "          <aside class=\"facet-panel\">\n",
            "{facets}\n",
            "          </aside>\n",
            "          <div>\n",
            "            <div class=\"games-toolbar\">\n",
            "              <div class=\"search-shell\" {search_shell}>\n",
            "                <form {search_form} role=\"search\" aria-label=\"Filter games\">\n",
            "                  <label for=\"games-search\" class=\"visually-hidden\">Search games</label>\n",
            "                  <input id=\"games-search\" type=\"search\" placeholder=\"Search by title or tag\" autocomplete=\"off\" {games_search}>\n",
            "                  <button type=\"submit\" aria-label=\"Search\">🔍</button>\n",
            "                </form>\n",
            "                <div class=\"search-results-panel\" {search_results} aria-expanded=\"false\"></div>\n",
            "              </div>\n",
            "              <div>\n",
            "                <label class=\"visually-hidden\" for=\"games-sort\">Sort games</label>\n",
            "                <select id=\"games-sort\" class=\"select-input\" {games_sort}>\n",
            "{sort_options}",
            "                </select>\n",
            "              </div>\n",
            "            </div>\n",
            "            <p {results_count}>{count}</p>\n",
            "            <div class=\"card-grid\" {grid} {page_size_attr}=\"{page_size}\">\n",
            "{cards}\n",
            "            </div>{nav_block}\n",
            "          </div>\n",
            "        </div>\n",
            "      </section>"
        ),
        facets = facets,
        search_shell = dom::SEARCH_SHELL,
        search_form = dom::SEARCH_FORM,
        games_search = dom::GAMES_SEARCH,
        search_results = dom::SEARCH_RESULTS,
        games_sort = dom::GAMES_SORT,
        sort_options = sort_options,
        results_count = dom::RESULTS_COUNT,
        count = html::results_count_text(frame.total),
        grid = dom::GAMES_GRID,
        page_size_attr = dom::PAGE_SIZE_ATTR,
        page_size = PAGE_SIZE,
        cards = html::render_grid(&frame.cards),
        nav_block = nav_block,
    );

    let canonical = if frame.page == 1 {
        "/games/".to_owned()
    } else {
        format!("/games/?page={}", frame.page)
    };
    let extra = ld_json(&breadcrumb(&[("Home", "/"), ("Games", "/games/")]));

    let path = if frame.page == 1 {
        "games/index.html".to_owned()
    } else {
        format!("games/page/{}/index.html", frame.page)
    };
    SitePage {
        path,
        html: render_base(
            &format!("Escape Room Games Library | {SITE_NAME}"),
            "Filter escape room games by mechanics, difficulty, team size, and recency. Ranked lists update with live engagement metrics.",
            &canonical,
            &body,
            "/games/",
            &extra,
            &["/assets/js/games.js"],
        ),
    }
}

// ─────────────────────────────────────────────────────────────────────
// Game detail
// ─────────────────────────────────────────────────────────────────────

fn game_detail(catalog: &Catalog, guides: &GuideSet, game: &Game) -> SitePage {
    let guide_link = guides
        .guide(&game.guide_slug)
        .map(|guide| {
            format!(
                "<a class=\"button-link primary\" href=\"/guides/{}/\">Open the guide</a>",
                escape_html(&guide.slug)
            )
        })
        .unwrap_or_default();

    let meta_entries = [
        ("Difficulty", game.difficulty.clone()),
        (
            "Team size",
            format!("{}–{}", game.players_min, game.players_max),
        ),
        ("Est. time", format!("{} min", game.time_minutes)),
        ("Languages", game.languages.join(", ")),
        ("Mechanisms", game.mechanisms.join(", ")),
        ("Categories", game.categories.join(", ")),
    ];
    let meta_grid: String = meta_entries
        .iter()
        .map(|(label, value)| {
            format!(
                "          <div class=\"meta-card\"><span>{label}</span><br><strong>{value}</strong></div>\n",
                label = label,
                value = escape_html(value),
            )
        })
        .collect();

    let related_markup: String = catalog
        .related(&game.slug, RELATED_LEN)
        .iter()
        .map(|item| {
            format!(
                concat!(
                    "          <div class=\"related-card\">\n",
                    "            <h4>{title}</h4>\n",
                    "            <p>{summary}</p>\n",
                    "            <a class=\"button-link secondary\" href=\"/games/{slug}/\">View</a>\n",
                    "          </div>"
                ),
                title = escape_html(&item.title),
                summary = escape_html(&item.summary),
                slug = escape_html(&item.slug),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        concat!(
            "      <article class=\"section\">\n",
            "        <div class=\"game-hero\">\n",
            "          <div>\n",
            "            <span class=\"badge-soft\">Escape room scenario</span>\n",
            "            <h1>{title}</h1>\n",
            "            <p>{summary}</p>\n",
            "            <div class=\"card-actions\">\n",
            "              <a class=\"button-link primary\" href=\"{play_url}\" target=\"_blank\" rel=\"noopener\">Launch experience</a>\n",
            "              {guide_link}\n",
            "            </div>\n",
            "          </div>\n",
            "          <img src=\"{thumbnail}\" alt=\"{title} hero artwork\" width=\"440\" height=\"260\" loading=\"lazy\">\n",
            "        </div>\n",
            "        <section>\n",
            "          <h2>Scenario overview</h2>\n",
            "          <div class=\"meta-grid\">\n",
            "{meta_grid}",
            "          </div>\n",
            "        </section>\n",
            "        <section>\n",
            "          <h2>In-room stream</h2>\n",
            "          <iframe class=\"game-embed\" src=\"{play_url}\" title=\"{title} live view\" loading=\"lazy\"></iframe>\n",
            "        </section>\n",
            "        <section class=\"recommendations\">\n",
            "          <h3>Recommended next runs</h3>\n",
            "          <div class=\"related-grid\">\n",
            "{related}\n",
            "          </div>\n",
            "        </section>\n",
            "        <section class=\"reviews\" {review_widget} {game_slug_attr}=\"{slug}\">\n",
            "          <h3>Player reviews</h3>\n",
            "        </section>\n",
            "      </article>\n",
            "      <div class=\"cta-overlay\" {cta_overlay} aria-hidden=\"true\">\n",
            "        <div class=\"cta-dialog\" role=\"dialog\" aria-modal=\"true\" aria-label=\"Need help\">\n",
            "          <h2>Need help cracking {title}?</h2>\n",
            "          <p>95% of teams open our companion guide before the finale. Jump in now and keep your clear streak intact.</p>\n",
            "          <div class=\"cta-actions\">\n",
            "            {guide_link}\n",
            "            <a class=\"button-link secondary\" href=\"#\" {cta_dismiss}>Not now</a>\n",
            "          </div>\n",
            "        </div>\n",
            "      </div>"
        ),
        title = escape_html(&game.title),
        summary = escape_html(&game.summary),
        play_url = escape_html(&game.play_url),
        guide_link = guide_link,
        thumbnail = escape_html(&game.thumbnail),
        meta_grid = meta_grid,
        related = related_markup,
        review_widget = dom::REVIEW_WIDGET,
        game_slug_attr = dom::GAME_SLUG_ATTR,
        slug = escape_html(&game.slug),
        cta_overlay = dom::CTA_OVERLAY,
        cta_dismiss = dom::CTA_DISMISS,
    );

    let video_game_json = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "VideoGame",
        "name": game.title,
        "genre": game.categories,
        "gamePlatform": "Escape room",
        "applicationSubCategory": "Escape room",
        "url": format!("{SITE_URL}/games/{}/", game.slug),
        "playMode": "CoOp",
        "numberOfPlayers": {
            "@type": "QuantitativeValue",
            "minValue": game.players_min,
            "maxValue": game.players_max
        },
        "inLanguage": game.languages,
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": game.rating,
            "ratingCount": 128
        }
    });
    let detail_path = format!("/games/{}/", game.slug);
    let extra = format!(
        "{}\n{}",
        ld_json(&video_game_json),
        ld_json(&breadcrumb(&[
            ("Home", "/"),
            ("Games", "/games/"),
            (game.title.as_str(), detail_path.as_str()),
        ]))
    );

    let description = format!(
        "{} escape room overview with difficulty {}, {}–{} players, and mechanics {}.",
        game.title,
        game.difficulty,
        game.players_min,
        game.players_max,
        game.mechanisms.join(", "),
    );

    SitePage {
        path: format!("games/{}/index.html", game.slug),
        html: render_base(
            &format!("{} Escape Room | {SITE_NAME}", game.title),
            &description,
            &detail_path,
            &body,
            "/games/",
            &extra,
            &["/assets/js/game-detail.js"],
        ),
    }
}

// ─────────────────────────────────────────────────────────────────────
// Guides
// ─────────────────────────────────────────────────────────────────────

fn guides_listing(guides: &GuideSet) -> SitePage {
    let cards: String = guides
        .guides()
        .iter()
        .map(html::render_guide_card)
        .collect::<Vec<_>>()
        .join("\n");
    let body = format!(
        concat!(
            "      <section class=\"section\">\n",
            "        <div class=\"section-header\">\n",
            "          <div>\n",
            "            <h1>Video strategy guides</h1>\n",
            "            <p>Every guide blends HD recordings with narrative-safe notes so you can practise routes without breaking immersion.</p>\n",
            "          </div>\n",
            "        </div>\n",
            "        <div class=\"card-grid\">\n",
            "{cards}\n",
            "        </div>\n",
            "      </section>"
        ),
        cards = cards,
    );
    let extra = ld_json(&breadcrumb(&[("Home", "/"), ("Guides", "/guides/")]));
    SitePage {
        path: "guides/index.html".to_owned(),
        html: render_base(
            &format!("Escape Room Video Guides | {SITE_NAME}"),
            "Watch escape room walkthroughs paired with tactical notes for rapid clears and team onboarding.",
            "/guides/",
            &body,
            "/guides/",
            &extra,
            &[],
        ),
    }
}

fn guide_detail(catalog: &Catalog, guides: &GuideSet, guide: &Guide) -> SitePage {
    let game = catalog.game(&guide.game_slug);
    let play_url = game.map_or("#", |game| game.play_url.as_str());

    let related_markup: String = guides
        .guides()
        .iter()
        .filter(|other| other.slug != guide.slug)
        .take(RELATED_GUIDES_LEN)
        .map(|other| {
            format!(
                concat!(
                    "            <article class=\"guide-card\">\n",
                    "              <h4>{title}</h4>\n",
                    "              <p>{summary}</p>\n",
                    "              <a class=\"button-link secondary\" href=\"/guides/{slug}/\">Open guide</a>\n",
                    "            </article>"
                ),
                title = escape_html(&other.title),
                summary = escape_html(&other.summary),
                slug = escape_html(&other.slug),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        concat!(
            "      <div class=\"guide-layout\">\n",
            "        <article class=\"guide-main\">\n",
            "          <span class=\"badge-soft\">Video-first walkthrough</span>\n",
            "          <h1>{title}</h1>\n",
            "          <p>{summary}</p>\n",
            "          <section>\n",
            "            <h2>Watch the strategy session</h2>\n",
            "            <iframe class=\"game-embed\" src=\"https://www.youtube.com/embed/{video_id}\" title=\"{title} video\" loading=\"lazy\" allowfullscreen></iframe>\n",
            "          </section>\n",
            "        </article>\n",
            "        <aside class=\"guide-meta-card\">\n",
            "          <img src=\"{thumbnail}\" alt=\"{title} guide artwork\" width=\"320\" height=\"200\" loading=\"lazy\">\n",
            "          <div class=\"pill-row\">\n",
            "            <span class=\"pill\">Difficulty: {difficulty}</span>\n",
            "            <span class=\"pill\">Runtime: {runtime}</span>\n",
            "          </div>\n",
            "          <a class=\"button-link primary\" href=\"{play_url}\" target=\"_blank\" rel=\"noopener\">Play the game</a>\n",
            "          <div>\n",
            "            <h3>Recommended next guides</h3>\n",
            "{related}\n",
            "          </div>\n",
            "        </aside>\n",
            "      </div>"
        ),
        title = escape_html(&guide.title),
        summary = escape_html(&guide.summary),
        video_id = escape_html(&guide.youtube_video_id),
        thumbnail = escape_html(&guide.thumbnail),
        difficulty = escape_html(&guide.difficulty),
        runtime = escape_html(&guide.estimated_time),
        play_url = escape_html(play_url),
        related = related_markup,
    );

    let video_json = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "VideoObject",
        "name": guide.title,
        "description": guide.summary,
        "thumbnailUrl": [guide.thumbnail],
        "contentUrl": format!("https://www.youtube.com/watch?v={}", guide.youtube_video_id),
        "embedUrl": format!("https://www.youtube.com/embed/{}", guide.youtube_video_id),
    });
    let detail_path = format!("/guides/{}/", guide.slug);
    let extra = format!(
        "{}\n{}",
        ld_json(&video_json),
        ld_json(&breadcrumb(&[
            ("Home", "/"),
            ("Guides", "/guides/"),
            (guide.title.as_str(), detail_path.as_str()),
        ]))
    );

    let description = if guide.summary.is_empty() {
        DEFAULT_DESCRIPTION.to_owned()
    } else {
        guide.summary.clone()
    };

    SitePage {
        path: format!("guides/{}/index.html", guide.slug),
        html: render_base(
            &format!("{} | Escape Room Guide", guide.title),
            &description,
            &detail_path,
            &body,
            "/guides/",
            &extra,
            &[],
        ),
    }
}

// ─────────────────────────────────────────────────────────────────────
// Simple pages
// ─────────────────────────────────────────────────────────────────────

fn simple_page(slug: &str, title: &str, heading: &str, paragraphs: &[&str]) -> SitePage {
    let content: String = paragraphs
        .iter()
        .map(|paragraph| format!("        <p>{}</p>", escape_html(paragraph)))
        .collect::<Vec<_>>()
        .join("\n");
    let body = format!(
        concat!(
            "      <section class=\"section\">\n",
            "        <h1>{heading}</h1>\n",
            "{content}\n",
            "      </section>"
        ),
        heading = escape_html(heading),
        content = content,
    );
    let page_path = format!("/{slug}/");
    let extra = ld_json(&breadcrumb(&[("Home", "/"), (heading, page_path.as_str())]));
    let description = paragraphs.first().map_or(DEFAULT_DESCRIPTION, |p| *p);
    SitePage {
        path: format!("{slug}/index.html"),
        html: render_base(title, description, &page_path, &body, &page_path, &extra, &[]),
    }
}
