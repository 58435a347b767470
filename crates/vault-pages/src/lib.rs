// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rendering layer for vault pages.
//!
//! Pure string rendering: the same card and pagination markup the static
//! site builder emits, so client re-renders are indistinguishable from
//! generated pages. Hosts apply the returned fragments to the documented
//! [`dom`] markers; nothing here touches a real DOM.

pub mod cta;
pub mod dom;
pub mod html;
pub mod search_panel;

pub use cta::CtaOverlay;
pub use dom::PagePlan;
pub use search_panel::{render_panel, PanelRender, SearchHit, SearchIndex, SearchKind};
