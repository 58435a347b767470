// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Browse engine for the game catalog: filter, search, sort, paginate, and
//! keep the address bar in sync.
//!
//! The engine is a pure state machine. Events produce a new [`ViewState`]
//! through [`apply_event`] with no I/O and no rendering; a separate derive
//! step ([`pipeline::derive_frame`]) re-runs the whole
//! filter → search → sort → clamp → slice pipeline from the untouched
//! catalog and emits a render-ready [`BrowseFrame`]. Hosts apply frames to
//! the page and write [`BrowseFrame::query`] back with a history *replace*.
//!
//! # Invariants
//!
//! - `page` is always `>= 1`; after a derive it is clamped to
//!   `[1, total_pages]` (never reset to 1 by a filter change).
//! - The pipeline always starts from the full catalog. No memoization, no
//!   incremental updates; correctness over cleverness at this scale.
//! - `query::parse` is total: every input string maps to a valid
//!   [`ViewState`]. Unknown parameters and sort tokens degrade to defaults.
//! - An empty catalog (fetch still in flight, or failed) flows through every
//!   operation without error.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::module_name_repetitions,
    clippy::use_self
)]

pub mod engine;
pub mod filter;
pub mod pipeline;
pub mod query;
pub mod state;

pub use engine::{BrowseEngine, ControlEcho, FacetCheck};
pub use pipeline::{BrowseFrame, GameCard, PageLink, PageLinkKind};
pub use state::{apply_event, BrowseEvent, FacetSelection, SortKey, ViewState};
