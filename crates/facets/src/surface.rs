//! The rendering surface.
//!
//! [`RenderSurface`] is the one-way projection target: the component pushes
//! visibility, counter, tray, checkbox, and card-face updates through it
//! and never reads display state back. Implementations backed by a real
//! page may be missing optional targets (counter, tray); they skip those
//! calls silently.

use crate::catalog::{ProductId, QuickViewContent};
use crate::facet::{display_name, Facet};
use crate::state::FilterState;

/// One removable tag in the active-filters tray.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTag {
    pub facet: Facet,
    pub value: String,
    /// Human label from the display-name table, or the raw value.
    pub label: String,
}

impl FilterTag {
    pub fn new(facet: Facet, value: &str) -> Self {
        Self {
            facet,
            value: value.to_string(),
            label: display_name(value).to_string(),
        }
    }
}

/// Build the full tray model for a state: one tag per selected pair, and
/// the clear-all control shown iff at least one tag exists.
pub fn tray_tags(state: &FilterState) -> Vec<FilterTag> {
    state
        .iter()
        .map(|(facet, value)| FilterTag::new(facet, value))
        .collect()
}

/// Projection target for the Presentation Updater.
pub trait RenderSurface {
    /// Show or hide one product; hidden products also carry the
    /// filtered-out marker.
    fn set_product_visible(&self, id: ProductId, visible: bool);

    /// Update the results counter with the Visible Set size.
    fn set_results_count(&self, count: usize);

    /// Rebuild the active-filters tray from scratch. `show_clear_all` is
    /// true iff `tags` is non-empty.
    fn render_active_filters(&self, tags: &[FilterTag], show_clear_all: bool);

    /// Re-sync one checkbox with the store.
    fn set_checkbox(&self, facet: Facet, value: &str, checked: bool);

    /// Flip a card to its detail face, populated from the given content.
    fn show_detail_face(&self, id: ProductId, content: &QuickViewContent);

    /// Flip a card back to its summary face.
    fn show_summary_face(&self, id: ProductId);
}

impl<T: RenderSurface + ?Sized> RenderSurface for &T {
    fn set_product_visible(&self, id: ProductId, visible: bool) {
        (**self).set_product_visible(id, visible)
    }

    fn set_results_count(&self, count: usize) {
        (**self).set_results_count(count)
    }

    fn render_active_filters(&self, tags: &[FilterTag], show_clear_all: bool) {
        (**self).render_active_filters(tags, show_clear_all)
    }

    fn set_checkbox(&self, facet: Facet, value: &str, checked: bool) {
        (**self).set_checkbox(facet, value, checked)
    }

    fn show_detail_face(&self, id: ProductId, content: &QuickViewContent) {
        (**self).show_detail_face(id, content)
    }

    fn show_summary_face(&self, id: ProductId) {
        (**self).show_summary_face(id)
    }
}

/// A surface that renders nothing. Useful for headless runs of the
/// pipeline.
#[derive(Debug, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn set_product_visible(&self, _id: ProductId, _visible: bool) {}
    fn set_results_count(&self, _count: usize) {}
    fn render_active_filters(&self, _tags: &[FilterTag], _show_clear_all: bool) {}
    fn set_checkbox(&self, _facet: Facet, _value: &str, _checked: bool) {}
    fn show_detail_face(&self, _id: ProductId, _content: &QuickViewContent) {}
    fn show_summary_face(&self, _id: ProductId) {}
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};

    /// Records every projection call so tests can assert on what the page
    /// would show.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub visibility: RefCell<BTreeMap<ProductId, bool>>,
        pub results_count: RefCell<Option<usize>>,
        pub tray: RefCell<Vec<FilterTag>>,
        pub clear_all_shown: RefCell<bool>,
        pub checked: RefCell<BTreeSet<(Facet, String)>>,
        pub detail_faces: RefCell<BTreeMap<ProductId, QuickViewContent>>,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn visible_ids(&self) -> Vec<ProductId> {
            self.visibility
                .borrow()
                .iter()
                .filter(|(_, visible)| **visible)
                .map(|(id, _)| *id)
                .collect()
        }

        pub fn is_checked(&self, facet: Facet, value: &str) -> bool {
            self.checked
                .borrow()
                .contains(&(facet, value.to_string()))
        }
    }

    impl RenderSurface for RecordingSurface {
        fn set_product_visible(&self, id: ProductId, visible: bool) {
            self.visibility.borrow_mut().insert(id, visible);
        }

        fn set_results_count(&self, count: usize) {
            *self.results_count.borrow_mut() = Some(count);
        }

        fn render_active_filters(&self, tags: &[FilterTag], show_clear_all: bool) {
            *self.tray.borrow_mut() = tags.to_vec();
            *self.clear_all_shown.borrow_mut() = show_clear_all;
        }

        fn set_checkbox(&self, facet: Facet, value: &str, checked: bool) {
            let key = (facet, value.to_string());
            if checked {
                self.checked.borrow_mut().insert(key);
            } else {
                self.checked.borrow_mut().remove(&key);
            }
        }

        fn show_detail_face(&self, id: ProductId, content: &QuickViewContent) {
            self.detail_faces.borrow_mut().insert(id, content.clone());
        }

        fn show_summary_face(&self, id: ProductId) {
            self.detail_faces.borrow_mut().remove(&id);
        }
    }
}
