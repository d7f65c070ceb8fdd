//! Match Evaluator: conjunction of disjunctions.
//!
//! AND across facet groups, OR within a facet group. A facet with no
//! selection is vacuously satisfied; exact string membership only.

use crate::catalog::{Catalog, ProductId, ProductRecord};
use crate::facet::Facet;
use crate::state::FilterState;

/// Whether one product satisfies the whole Filter State.
pub fn matches(product: &ProductRecord, state: &FilterState) -> bool {
    Facet::ALL.into_iter().all(|facet| {
        let selection = state.selected(facet);
        if selection.is_empty() {
            return true;
        }
        product
            .values(facet)
            .iter()
            .any(|value| selection.contains(value))
    })
}

/// The Visible Set: matching products in original catalog order.
pub fn visible_set(catalog: &Catalog, state: &FilterState) -> Vec<ProductId> {
    catalog
        .products()
        .iter()
        .filter(|product| matches(product, state))
        .map(|product| product.id())
        .collect()
}
