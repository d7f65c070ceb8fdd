//! Quick-view card-flip state machine.
//!
//! Each product is either `Collapsed` (front summary face) or `Expanded`
//! (back detail face). The only legal transitions:
//!
//! - Collapsed → Expanded on quick-view activation, and only when the
//!   product carries quick-view content; otherwise the activation is
//!   refused with a warning and nothing changes.
//! - Expanded → Collapsed on a click on the detail face, or on the global
//!   cancel key, which collapses every expanded card at once.
//!
//! Initial state is always Collapsed; a cancel with nothing expanded is a
//! no-op.

use crate::catalog::{Catalog, ProductId};
use std::collections::BTreeSet;
use tracing::warn;

/// Per-product quick-view display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickViewState {
    Collapsed,
    Expanded,
}

/// Tracks which products currently show their detail face.
#[derive(Debug, Clone, Default)]
pub struct QuickViewRegistry {
    expanded: BTreeSet<ProductId>,
}

impl QuickViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: ProductId) -> QuickViewState {
        if self.expanded.contains(&id) {
            QuickViewState::Expanded
        } else {
            QuickViewState::Collapsed
        }
    }

    /// Attempt the Collapsed → Expanded transition.
    ///
    /// Returns `true` when the card is now expanded by this call. Refused
    /// (with a warning) when the product has no quick-view content or does
    /// not exist; a no-op when already expanded.
    pub fn expand(&mut self, catalog: &Catalog, id: ProductId) -> bool {
        let Some(product) = catalog.get(id) else {
            warn!(product = id.0, "quick-view activation for unknown product");
            return false;
        };
        if product.quick_view().is_none() {
            warn!(product = id.0, "product card has no display data attributes");
            return false;
        }
        self.expanded.insert(id)
    }

    /// Expanded → Collapsed for one card. Returns `true` if it was
    /// expanded.
    pub fn collapse(&mut self, id: ProductId) -> bool {
        self.expanded.remove(&id)
    }

    /// Global cancel: collapse every expanded card, returning them in
    /// catalog order. Empty when nothing was expanded.
    pub fn collapse_all(&mut self) -> Vec<ProductId> {
        std::mem::take(&mut self.expanded).into_iter().collect()
    }

    pub fn expanded(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.expanded.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardAttributes;

    fn catalog_with_one_displayable() -> Catalog {
        let plain = CardAttributes::default();
        let displayable = CardAttributes {
            display_model: Some("CUE-099".to_string()),
            ..Default::default()
        };
        Catalog::from_cards(&[plain, displayable])
    }

    #[test]
    fn initial_state_is_collapsed() {
        let registry = QuickViewRegistry::new();
        assert_eq!(registry.state(ProductId(0)), QuickViewState::Collapsed);
    }

    #[test]
    fn expand_requires_display_data() {
        let catalog = catalog_with_one_displayable();
        let mut registry = QuickViewRegistry::new();

        assert!(!registry.expand(&catalog, ProductId(0)));
        assert_eq!(registry.state(ProductId(0)), QuickViewState::Collapsed);

        assert!(registry.expand(&catalog, ProductId(1)));
        assert_eq!(registry.state(ProductId(1)), QuickViewState::Expanded);
    }

    #[test]
    fn expand_unknown_product_is_refused() {
        let catalog = catalog_with_one_displayable();
        let mut registry = QuickViewRegistry::new();
        assert!(!registry.expand(&catalog, ProductId(9)));
    }

    #[test]
    fn collapse_reports_prior_state() {
        let catalog = catalog_with_one_displayable();
        let mut registry = QuickViewRegistry::new();
        registry.expand(&catalog, ProductId(1));
        assert!(registry.collapse(ProductId(1)));
        assert!(!registry.collapse(ProductId(1)));
    }

    #[test]
    fn collapse_all_empties_the_registry() {
        let displayable = CardAttributes {
            display_model: Some("m".to_string()),
            ..Default::default()
        };
        let catalog = Catalog::from_cards(&[displayable.clone(), displayable]);
        let mut registry = QuickViewRegistry::new();
        registry.expand(&catalog, ProductId(1));
        registry.expand(&catalog, ProductId(0));

        assert_eq!(registry.collapse_all(), vec![ProductId(0), ProductId(1)]);
        // Second cancel finds nothing expanded.
        assert!(registry.collapse_all().is_empty());
    }
}
