// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filter and search predicates.
//!
//! Faceted filtering is OR within a facet, AND across facets. Search is a
//! plain case-insensitive substring test over a concatenated haystack; no
//! tokenization, no ranking.

use vault_catalog::{Facet, Game};

use crate::state::FacetSelection;

/// True when the game satisfies every active facet: at least one selected
/// value per active facet must match. A game exposing no values for an
/// active facet fails it.
#[must_use]
pub fn matches_filters(game: &Game, selection: &FacetSelection) -> bool {
    Facet::ALL.into_iter().all(|facet| {
        if !selection.is_active(facet) {
            return true;
        }
        facet
            .values_of(game)
            .iter()
            .any(|value| selection.contains(facet, value))
    })
}

/// True when the (trimmed, case-folded) query occurs within the
/// concatenation of title, summary, author, categories, and mechanisms.
/// An empty query matches everything.
#[must_use]
pub fn matches_search(game: &Game, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let mut haystack = String::with_capacity(
        game.title.len() + game.summary.len() + game.author.len() + 64,
    );
    for part in [&game.title, &game.summary, &game.author] {
        haystack.push_str(part);
        haystack.push(' ');
    }
    for tag in game.categories.iter().chain(game.mechanisms.iter()) {
        haystack.push_str(tag);
        haystack.push(' ');
    }
    haystack.to_lowercase().contains(&needle)
}
