// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filterable dimensions of the game catalog.

use serde::{Deserialize, Serialize};

use crate::record::Game;

/// A filterable dimension of the catalog.
///
/// The variant order is the canonical panel (and URL) order. `key` matches
/// the `data-facet` attribute values in page markup; note the markup uses
/// plural keys for the tag facets but singular `language`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Facet {
    /// Genre/category tags.
    Categories,
    /// Puzzle mechanism tags.
    Mechanisms,
    /// Single difficulty label.
    Difficulty,
    /// Supported language codes.
    Language,
}

impl Facet {
    /// All facets in canonical order.
    pub const ALL: [Self; 4] = [
        Self::Categories,
        Self::Mechanisms,
        Self::Difficulty,
        Self::Language,
    ];

    /// Marker name carried by `data-facet` attributes.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Mechanisms => "mechanisms",
            Self::Difficulty => "difficulty",
            Self::Language => "language",
        }
    }

    /// Parse a `data-facet` marker name.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "categories" => Some(Self::Categories),
            "mechanisms" => Some(Self::Mechanisms),
            "difficulty" => Some(Self::Difficulty),
            "language" => Some(Self::Language),
            _ => None,
        }
    }

    /// The values a game exposes for this facet. An empty difficulty label
    /// contributes nothing, so such games fail any active difficulty filter
    /// without polluting the facet universe.
    #[must_use]
    pub fn values_of(self, game: &Game) -> Vec<&str> {
        match self {
            Self::Categories => game.categories.iter().map(String::as_str).collect(),
            Self::Mechanisms => game.mechanisms.iter().map(String::as_str).collect(),
            Self::Difficulty => {
                if game.difficulty.is_empty() {
                    Vec::new()
                } else {
                    vec![game.difficulty.as_str()]
                }
            }
            Self::Language => game.languages.iter().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trip() {
        for facet in Facet::ALL {
            assert_eq!(Facet::from_key(facet.key()), Some(facet));
        }
        assert_eq!(Facet::from_key("players"), None);
    }

    #[test]
    fn empty_difficulty_exposes_no_value() {
        let game: Game = serde_json::from_str(r#"{"slug":"a","title":"A"}"#).unwrap();
        assert!(Facet::Difficulty.values_of(&game).is_empty());
    }
}
