//! The faceted search component.
//!
//! [`FacetedSearch`] owns the Filter State Store, the catalog, and the
//! quick-view registry, and holds its three collaborators explicitly: the
//! address bar, durable storage, and the rendering surface. All event
//! handlers take `&mut self` and run the full pipeline to completion
//! (state → visibility → presentation → persistence), so within one
//! handler the pipeline is atomic with respect to other events.
//!
//! Mutation handlers (checkbox, tag removal, clear-all) write both the URL
//! and storage; the navigation handler only reloads and re-projects.

use crate::catalog::{Catalog, ProductId};
use crate::facet::Facet;
use crate::matcher;
use crate::quickview::QuickViewRegistry;
use crate::state::FilterState;
use crate::store::{KeyValueStorage, UrlBar};
use crate::surface::{tray_tags, RenderSurface};
use crate::sync;
use std::collections::BTreeSet;

pub struct FacetedSearch<U: UrlBar, K: KeyValueStorage, R: RenderSurface> {
    state: FilterState,
    catalog: Catalog,
    quick_view: QuickViewRegistry,
    visible: Vec<ProductId>,
    url: U,
    storage: K,
    surface: R,
}

impl<U: UrlBar, K: KeyValueStorage, R: RenderSurface> FacetedSearch<U, K, R> {
    /// Construct the component: reconcile initial state from the URL and
    /// storage, then project checkboxes, visibility, counter, and tray.
    /// No write occurs during construction.
    pub fn new(catalog: Catalog, url: U, storage: K, surface: R) -> Self {
        let state = sync::load_state(&url, &storage);
        let mut component = Self {
            state,
            catalog,
            quick_view: QuickViewRegistry::new(),
            visible: Vec::new(),
            url,
            storage,
            surface,
        };
        component.project_checkboxes(&FilterState::new());
        component.apply();
        component.refresh_tray();
        component
    }

    // --- Accessors ---

    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current Visible Set, in catalog order.
    pub fn visible(&self) -> &[ProductId] {
        &self.visible
    }

    // --- Filter events ---

    /// A filter checkbox changed. The checkbox itself already shows the
    /// new state; everything else is brought in line here.
    pub fn handle_checkbox(&mut self, facet: Facet, value: &str, checked: bool) {
        if checked {
            self.state.insert(facet, value);
        } else {
            self.state.remove(facet, value);
        }
        self.apply();
        self.refresh_tray();
        self.write_state();
    }

    /// A tray tag was clicked: drop that selection and uncheck its box.
    pub fn handle_tag_removed(&mut self, facet: Facet, value: &str) {
        self.state.remove(facet, value);
        self.surface.set_checkbox(facet, value, false);
        self.apply();
        self.refresh_tray();
        self.write_state();
    }

    /// The clear-all control: every selection dropped, every box
    /// unchecked, URL and storage rewritten to the empty state.
    pub fn handle_clear_all(&mut self) {
        let previous = std::mem::take(&mut self.state);
        self.project_checkboxes(&previous);
        self.apply();
        self.refresh_tray();
        self.write_state();
    }

    /// Browser back/forward: rebuild state per the load precedence rule
    /// and re-project. Navigation never writes.
    pub fn handle_navigation(&mut self) {
        let previous = std::mem::replace(
            &mut self.state,
            sync::load_state(&self.url, &self.storage),
        );
        self.project_checkboxes(&previous);
        self.apply();
        self.refresh_tray();
    }

    // --- Quick-view events ---

    /// Quick-view control activated on a product.
    pub fn handle_quick_view(&mut self, id: ProductId) {
        if !self.quick_view.expand(&self.catalog, id) {
            return;
        }
        if let Some(content) = self.catalog.get(id).and_then(|p| p.quick_view()) {
            self.surface.show_detail_face(id, content);
        }
    }

    /// Click anywhere on an expanded detail face closes it.
    pub fn handle_detail_click(&mut self, id: ProductId) {
        if self.quick_view.collapse(id) {
            self.surface.show_summary_face(id);
        }
    }

    /// Global cancel key: collapse every expanded card.
    pub fn handle_cancel_key(&mut self) {
        for id in self.quick_view.collapse_all() {
            self.surface.show_summary_face(id);
        }
    }

    // --- Pipeline stages ---

    /// Recompute the Visible Set and project visibility and the counter.
    fn apply(&mut self) {
        self.visible = matcher::visible_set(&self.catalog, &self.state);
        let visible: BTreeSet<ProductId> = self.visible.iter().copied().collect();
        for product in self.catalog.products() {
            self.surface
                .set_product_visible(product.id(), visible.contains(&product.id()));
        }
        self.surface.set_results_count(self.visible.len());
    }

    /// Rebuild the tray from scratch; clear-all shows iff any tag exists.
    fn refresh_tray(&self) {
        let tags = tray_tags(&self.state);
        let show_clear_all = !tags.is_empty();
        self.surface.render_active_filters(&tags, show_clear_all);
    }

    /// Bring checkboxes in line with the store: uncheck pairs that were
    /// selected before but are not anymore, check everything selected now.
    fn project_checkboxes(&self, previous: &FilterState) {
        for (facet, value) in previous.iter() {
            if !self.state.is_selected(facet, value) {
                self.surface.set_checkbox(facet, value, false);
            }
        }
        for (facet, value) in self.state.iter() {
            self.surface.set_checkbox(facet, value, true);
        }
    }

    fn write_state(&self) {
        sync::write_state(&self.state, &self.url, &self.storage);
    }
}
