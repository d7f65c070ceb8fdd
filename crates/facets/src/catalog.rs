//! The in-memory product catalog.
//!
//! Product cards are read once at initialization into [`ProductRecord`]s;
//! after that, filtering never re-reads the rendering surface. A record
//! carries its per-facet value sets (from space-separated `data-*`
//! attributes) and, when the card opts in, the parsed quick-view content.

use crate::facet::Facet;
use std::collections::HashMap;
use tracing::error;

/// Opaque handle to a displayable product: its position in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(pub usize);

/// Raw attribute payload of one product card, as exposed by the rendering
/// surface. This is the DOM attribute contract from the catalog side.
#[derive(Debug, Clone, Default)]
pub struct CardAttributes {
    /// Per-facet space-separated value strings (`data-drive="belt-drive"`).
    pub facet_values: HashMap<Facet, String>,
    /// Presence flag for quick-view data (`data-display-model`).
    pub display_model: Option<String>,
    /// Free-text description (`data-display-description`).
    pub display_description: Option<String>,
    /// JSON array of specification strings (`data-display-specifications`).
    pub display_specifications: Option<String>,
    /// JSON array of certification strings (`data-display-certifications`).
    pub display_certifications: Option<String>,
}

/// Parsed descriptive fields backing the quick-view detail face.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickViewContent {
    pub model: String,
    pub description: Option<String>,
    pub specifications: Vec<String>,
    pub certifications: Vec<String>,
}

/// One product as the filtering pipeline sees it.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    id: ProductId,
    facet_values: [Vec<String>; Facet::ALL.len()],
    quick_view: Option<QuickViewContent>,
}

impl ProductRecord {
    /// Build a record from raw card attributes.
    ///
    /// A malformed specification or certification payload is logged and
    /// leaves that list empty; it never invalidates the record or the
    /// quick-view content as a whole.
    pub fn from_attributes(id: ProductId, attrs: &CardAttributes) -> Self {
        let mut facet_values: [Vec<String>; Facet::ALL.len()] = Default::default();
        for (facet, raw) in &attrs.facet_values {
            facet_values[facet.index()] =
                raw.split_whitespace().map(str::to_string).collect();
        }

        let quick_view = attrs.display_model.as_ref().map(|model| QuickViewContent {
            model: model.clone(),
            description: attrs.display_description.clone(),
            specifications: parse_string_list(
                id,
                "specifications",
                attrs.display_specifications.as_deref(),
            ),
            certifications: parse_string_list(
                id,
                "certifications",
                attrs.display_certifications.as_deref(),
            ),
        });

        Self {
            id,
            facet_values,
            quick_view,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    /// This product's own values for one facet.
    pub fn values(&self, facet: Facet) -> &[String] {
        &self.facet_values[facet.index()]
    }

    /// Quick-view content, present iff the card carried the display
    /// presence flag.
    pub fn quick_view(&self) -> Option<&QuickViewContent> {
        self.quick_view.as_ref()
    }
}

fn parse_string_list(id: ProductId, field: &str, payload: Option<&str>) -> Vec<String> {
    let Some(payload) = payload else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<String>>(payload) {
        Ok(list) => list,
        Err(err) => {
            error!(product = id.0, field, %err, "failed to parse quick-view list payload");
            Vec::new()
        }
    }
}

/// The ordered product catalog, populated once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<ProductRecord>,
}

impl Catalog {
    /// Build the catalog from card attributes in display order. Ids are
    /// assigned ordinally, so catalog order and id order coincide.
    pub fn from_cards(cards: &[CardAttributes]) -> Self {
        let products = cards
            .iter()
            .enumerate()
            .map(|(i, attrs)| ProductRecord::from_attributes(ProductId(i), attrs))
            .collect();
        Self { products }
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&ProductRecord> {
        self.products.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(facet: Facet, values: &str) -> CardAttributes {
        let mut attrs = CardAttributes::default();
        attrs.facet_values.insert(facet, values.to_string());
        attrs
    }

    #[test]
    fn facet_attribute_splits_on_whitespace() {
        let record =
            ProductRecord::from_attributes(ProductId(0), &card(Facet::Drive, "belt-drive direct-drive"));
        assert_eq!(record.values(Facet::Drive), ["belt-drive", "direct-drive"]);
        assert!(record.values(Facet::Housing).is_empty());
    }

    #[test]
    fn missing_presence_flag_means_no_quick_view() {
        let record = ProductRecord::from_attributes(ProductId(0), &CardAttributes::default());
        assert!(record.quick_view().is_none());
    }

    #[test]
    fn quick_view_parses_payload_lists() {
        let attrs = CardAttributes {
            display_model: Some("CUE-099".to_string()),
            display_description: Some("Direct drive centrifugal exhaust fan".to_string()),
            display_specifications: Some(r#"["1/4 HP","120V"]"#.to_string()),
            display_certifications: Some(r#"["ul-705"]"#.to_string()),
            ..Default::default()
        };
        let record = ProductRecord::from_attributes(ProductId(3), &attrs);
        let view = record.quick_view().unwrap();
        assert_eq!(view.model, "CUE-099");
        assert_eq!(view.specifications, ["1/4 HP", "120V"]);
        assert_eq!(view.certifications, ["ul-705"]);
    }

    #[test]
    fn malformed_list_payload_degrades_to_empty() {
        let attrs = CardAttributes {
            display_model: Some("CUE-099".to_string()),
            display_specifications: Some("[not json".to_string()),
            display_certifications: Some(r#"["ul-705"]"#.to_string()),
            ..Default::default()
        };
        let record = ProductRecord::from_attributes(ProductId(0), &attrs);
        let view = record.quick_view().unwrap();
        // The bad list is empty; the good one still parses.
        assert!(view.specifications.is_empty());
        assert_eq!(view.certifications, ["ul-705"]);
    }

    #[test]
    fn catalog_assigns_ordinal_ids() {
        let catalog = Catalog::from_cards(&[
            card(Facet::Drive, "belt-drive"),
            card(Facet::Drive, "direct-drive"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[1].id(), ProductId(1));
        assert!(catalog.get(ProductId(2)).is_none());
    }
}
