// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Immutable game/guide catalog for the vault site.
//!
//! The catalog is fetched once per page session and never mutated afterwards;
//! every browse operation derives from it fresh. This crate owns the record
//! shapes (`games.json` / `guides.json` as emitted by the data pipeline),
//! trending scoring, facet universes, and the related/featured selection
//! rules shared by the client engine and the static site builder.

pub mod catalog;
pub mod facet;
pub mod record;

pub use catalog::{Catalog, CatalogError, FeaturedTab, GuideSet, FEATURED_LEN};
pub use facet::Facet;
pub use record::{Game, Guide};
