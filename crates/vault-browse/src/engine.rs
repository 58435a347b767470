// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stateful wrapper tying catalog, view state, and pipeline together.

use serde::{Deserialize, Serialize};
use vault_catalog::{Catalog, Facet};

use crate::pipeline::{derive_frame, BrowseFrame};
use crate::query;
use crate::state::{apply_event, BrowseEvent, ViewState};

/// One checked facet input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCheck {
    /// `data-facet` marker name of the input's panel.
    pub facet: String,
    /// The input's value attribute.
    pub value: String,
}

/// Control values mirroring the current state, used to sync visible
/// controls after parsing a shared or reloaded URL. Inputs not listed in
/// `checked` are unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlEcho {
    /// Text for the search input.
    pub search: String,
    /// Token for the sort selector.
    pub sort: String,
    /// Facet inputs that should be checked.
    pub checked: Vec<FacetCheck>,
}

/// Browse engine for one catalog page.
///
/// Owns the catalog (immutable once loaded), the current [`ViewState`], and
/// the fixed page size. [`dispatch`](Self::dispatch) folds the derive-step
/// page clamp back into the state, so the state always matches the last
/// frame a host rendered.
#[derive(Debug, Clone)]
pub struct BrowseEngine {
    catalog: Catalog,
    state: ViewState,
    page_size: usize,
}

impl BrowseEngine {
    /// Engine over `catalog` with the default view state.
    #[must_use]
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        Self {
            catalog,
            state: ViewState::default(),
            page_size: page_size.max(1),
        }
    }

    /// Engine with initial state parsed from an address-bar query string.
    #[must_use]
    pub fn from_query(catalog: Catalog, page_size: usize, query_string: &str) -> Self {
        let mut engine = Self::new(catalog, page_size);
        engine.state = query::parse(query_string);
        engine
    }

    /// Swap in the once-fetched catalog, keeping the current view state.
    /// The next derive re-clamps the page against the new totals.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    /// Replace the view state with one parsed from an address-bar query
    /// string, keeping the catalog and page size. Used on initial load and
    /// on history navigation.
    pub fn reset(&mut self, query_string: &str) {
        self.state = query::parse(query_string);
    }

    /// The loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Fixed page size.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Apply one event and derive the next frame. The frame's clamped page
    /// is written back into the state.
    pub fn dispatch(&mut self, event: &BrowseEvent) -> BrowseFrame {
        self.state = apply_event(&self.state, event);
        self.settle()
    }

    /// Derive a frame for the current state and fold its clamped page back
    /// into the state. Called after [`reset`](Self::reset) or a catalog
    /// swap, where there is no event to dispatch.
    pub fn settle(&mut self) -> BrowseFrame {
        let frame = derive_frame(&self.catalog, &self.state, self.page_size);
        self.state.page = frame.page;
        frame
    }

    /// Derive a frame for the current state without mutating anything.
    #[must_use]
    pub fn frame(&self) -> BrowseFrame {
        derive_frame(&self.catalog, &self.state, self.page_size)
    }

    /// Control echoes for the current state.
    #[must_use]
    pub fn control_echo(&self) -> ControlEcho {
        let checked = Facet::ALL
            .into_iter()
            .flat_map(|facet| {
                self.state.filters.values(facet).map(move |value| FacetCheck {
                    facet: facet.key().to_owned(),
                    value: value.to_owned(),
                })
            })
            .collect();
        ControlEcho {
            search: self.state.search.clone(),
            sort: self.state.sort.token().to_owned(),
            checked,
        }
    }
}
