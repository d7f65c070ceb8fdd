//! Filter State Store.
//!
//! [`FilterState`] is the single source of truth for the current selection
//! during a session. It holds exactly one selection set per facet at all
//! times; a facet with an empty set is simply inactive. Value strings are
//! accepted as-is (matching elsewhere is exact and case-sensitive).

use crate::facet::Facet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The Persistence Record: serialized Filter State as written to durable
/// storage, facet name → ordered list of selected values. The shape is
/// shared with the stored JSON verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterRecord(pub BTreeMap<String, Vec<String>>);

/// Mapping from every [`Facet`] to its current selection set.
///
/// Sets are ordered (`BTreeSet`) so the query string, the Persistence
/// Record, and the tag tray are all deterministic for a given state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selections: [BTreeSet<String>; Facet::ALL.len()],
}

impl FilterState {
    /// A fully empty state: every facet present, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value to a facet's selection. Duplicates are absorbed.
    pub fn insert(&mut self, facet: Facet, value: impl Into<String>) {
        self.selections[facet.index()].insert(value.into());
    }

    /// Remove a value from a facet's selection.
    /// Returns `true` if the value was present.
    pub fn remove(&mut self, facet: Facet, value: &str) -> bool {
        self.selections[facet.index()].remove(value)
    }

    /// Empty one facet's selection.
    pub fn clear_facet(&mut self, facet: Facet) {
        self.selections[facet.index()].clear();
    }

    /// Empty every facet's selection.
    pub fn clear_all(&mut self) {
        for set in &mut self.selections {
            set.clear();
        }
    }

    /// The selection set for one facet.
    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        &self.selections[facet.index()]
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selections[facet.index()].contains(value)
    }

    /// True when no facet has any selection.
    pub fn is_empty(&self) -> bool {
        self.selections.iter().all(|set| set.is_empty())
    }

    /// Total number of selected `(facet, value)` pairs.
    pub fn selection_count(&self) -> usize {
        self.selections.iter().map(|set| set.len()).sum()
    }

    /// All selected `(facet, value)` pairs, facets in canonical order,
    /// values in set order. This is the tray emission order.
    pub fn iter(&self) -> impl Iterator<Item = (Facet, &str)> {
        Facet::ALL.into_iter().flat_map(move |facet| {
            self.selected(facet)
                .iter()
                .map(move |value| (facet, value.as_str()))
        })
    }

    /// Serialize to the Persistence Record shape: facet name → ordered
    /// array of selected values. Facets with empty selections are included
    /// so a written record always carries the full shape.
    pub fn to_record(&self) -> FilterRecord {
        FilterRecord(
            Facet::ALL
                .into_iter()
                .map(|facet| {
                    (
                        facet.name().to_string(),
                        self.selected(facet).iter().cloned().collect(),
                    )
                })
                .collect(),
        )
    }

    /// Rebuild state from a Persistence Record, merged per-facet: facets
    /// missing from the record stay empty, unknown keys are ignored.
    pub fn from_record(record: &FilterRecord) -> Self {
        let mut state = Self::new();
        for (name, values) in &record.0 {
            if let Some(facet) = Facet::parse(name) {
                for value in values {
                    state.insert(facet, value.clone());
                }
            }
        }
        state
    }
}
