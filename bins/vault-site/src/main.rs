// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Static site builder (vault-site)
//!
//! Renders the deployable site from the data exports: every page the client
//! engine later re-hydrates, plus the enriched JSON payloads it fetches.
//! `build` writes the site tree; `check` validates the exports and writes
//! nothing.

mod pages;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use vault_catalog::{Catalog, Game, Guide, GuideSet};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Command to execute
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Render the full site from the data exports
    Build {
        /// Directory holding games.json and guides.json
        #[clap(long, default_value = "assets/data")]
        data_dir: PathBuf,

        /// Directory receiving the rendered site
        #[clap(long, default_value = "dist")]
        out_dir: PathBuf,
    },
    /// Validate the data exports without writing anything
    Check {
        /// Directory holding games.json and guides.json
        #[clap(long, default_value = "assets/data")]
        data_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let args = Args::parse();
    match args.cmd {
        Command::Build { data_dir, out_dir } => build(&data_dir, &out_dir),
        Command::Check { data_dir } => check(&data_dir),
    }
}

fn build(data_dir: &Path, out_dir: &Path) -> Result<()> {
    let mut games = load_games(data_dir)?;
    let guides = load_guides(data_dir)?;
    derive_recency(&mut games);
    info!(games = games.len(), guides = guides.len(), "data loaded");

    let catalog = Catalog::new(games);
    let guide_set = GuideSet::new(guides);

    let rendered = pages::render_site(&catalog, &guide_set);
    for page in &rendered {
        write_site_file(out_dir, &page.path, &page.html)?;
    }

    // Enriched payloads: the input records plus the derived recency signal,
    // exactly what the browser engine loads at runtime.
    let games_payload = serde_json::to_string_pretty(catalog.games())?;
    write_site_file(out_dir, "data/games.json", &games_payload)?;
    let guides_payload = serde_json::to_string_pretty(guide_set.guides())?;
    write_site_file(out_dir, "data/guides.json", &guides_payload)?;

    info!(pages = rendered.len(), out = %out_dir.display(), "site rendered");
    Ok(())
}

fn check(data_dir: &Path) -> Result<()> {
    let games = load_games(data_dir)?;
    let guides = load_guides(data_dir)?;

    let mut errors = 0_usize;

    let mut seen_games = BTreeSet::new();
    for game in &games {
        if !seen_games.insert(game.slug.as_str()) {
            warn!(slug = %game.slug, "duplicate game slug");
            errors += 1;
        }
    }
    let mut seen_guides = BTreeSet::new();
    for guide in &guides {
        if !seen_guides.insert(guide.slug.as_str()) {
            warn!(slug = %guide.slug, "duplicate guide slug");
            errors += 1;
        }
    }

    for game in &games {
        if !game.guide_slug.is_empty() && !seen_guides.contains(game.guide_slug.as_str()) {
            warn!(slug = %game.slug, guide = %game.guide_slug, "guide_slug does not resolve");
            errors += 1;
        }
        if !(0.0..=5.0).contains(&game.rating) {
            warn!(slug = %game.slug, rating = game.rating, "rating outside 0..=5");
            errors += 1;
        }
        for (signal, value) in [
            ("pv7_norm", game.pv7_norm),
            ("guide_clicks7_norm", game.guide_clicks7_norm),
            ("recency", game.recency),
        ] {
            if !(0.0..=1.0).contains(&value) {
                warn!(slug = %game.slug, signal, value, "signal outside 0..=1");
                errors += 1;
            }
        }
    }

    for guide in &guides {
        if !guide.game_slug.is_empty() && !seen_games.contains(guide.game_slug.as_str()) {
            warn!(slug = %guide.slug, game = %guide.game_slug, "game_slug does not resolve");
            errors += 1;
        }
        if !(0.0..=5.0).contains(&guide.rating) {
            warn!(slug = %guide.slug, rating = guide.rating, "rating outside 0..=5");
            errors += 1;
        }
    }

    if errors > 0 {
        bail!("{errors} data error(s) found");
    }
    info!(games = games.len(), guides = guides.len(), "data checks passed");
    Ok(())
}

fn load_games(data_dir: &Path) -> Result<Vec<Game>> {
    let path = data_dir.join("games.json");
    let raw =
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn load_guides(data_dir: &Path) -> Result<Vec<Guide>> {
    let path = data_dir.join("guides.json");
    let raw =
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Rank-based freshness: games sorted newest-first by `created_at` decay
/// linearly from 1.0 down to a 0.1 floor. A lone game scores 1.0. Whatever
/// recency the export carried is overwritten; this signal is derived at
/// build time, never authored.
fn derive_recency(games: &mut [Game]) {
    let mut order: Vec<usize> = (0..games.len()).collect();
    order.sort_by(|&a, &b| games[b].created_at.cmp(&games[a].created_at));

    let max_index = u32::try_from(order.len().saturating_sub(1)).unwrap_or(u32::MAX);
    for (rank, &idx) in order.iter().enumerate() {
        let rank = u32::try_from(rank).unwrap_or(u32::MAX);
        games[idx].recency = if max_index == 0 {
            1.0
        } else {
            1.0 - f64::from(rank) / f64::from(max_index) * 0.9
        };
    }
}

fn write_site_file(out_dir: &Path, rel: &str, content: &str) -> Result<()> {
    let path = out_dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(slug: &str, created_at: &str) -> Game {
        serde_json::from_value(serde_json::json!({
            "slug": slug,
            "title": slug.to_uppercase(),
            "created_at": created_at,
        }))
        .unwrap()
    }

    // ── 1. recency decays by creation rank, newest first ────────────────
    #[test]
    fn recency_decays_by_rank() {
        let mut games = vec![
            game("oldest", "2024-01-01"),
            game("newest", "2026-06-01"),
            game("middle", "2025-03-15"),
        ];
        derive_recency(&mut games);
        assert!((games[1].recency - 1.0).abs() < 1e-9);
        assert!((games[2].recency - 0.55).abs() < 1e-9);
        assert!((games[0].recency - 0.1).abs() < 1e-9);
    }

    // ── 2. a lone game scores full recency ──────────────────────────────
    #[test]
    fn single_game_scores_one() {
        let mut games = vec![game("only", "2020-01-01")];
        derive_recency(&mut games);
        assert!((games[0].recency - 1.0).abs() < 1e-9);
    }

    // ── 3. authored recency values are overwritten ──────────────────────
    #[test]
    fn authored_recency_is_overwritten() {
        let mut games = vec![game("a", "2024-01-01"), game("b", "2024-02-01")];
        games[0].recency = 42.0;
        derive_recency(&mut games);
        assert!((games[0].recency - 0.1).abs() < 1e-9);
        assert!((games[1].recency - 1.0).abs() < 1e-9);
    }
}
