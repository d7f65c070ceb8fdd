//! State Synchronizer: reconciles the Filter State Store with the URL and
//! with durable storage, in both directions.
//!
//! ## Load precedence
//!
//! A URL carrying at least one recognized facet parameter is authoritative:
//! the state is rebuilt entirely from it and storage is ignored. Otherwise
//! the stored Persistence Record is merged per-facet; a corrupt record is
//! logged and treated as absent. With neither source present the state is
//! fully empty.
//!
//! ## Write
//!
//! Every mutation writes both surfaces: the query string is rewritten from
//! scratch (no navigation) and the record is serialized to storage. Either
//! write failing is logged and swallowed; a failed write never disturbs the
//! in-memory state.

use crate::query;
use crate::state::{FilterRecord, FilterState};
use crate::store::{KeyValueStorage, UrlBar};
use tracing::warn;

/// The single durable-storage key holding the Persistence Record.
pub const STORAGE_KEY: &str = "roof-products-filters";

/// Determine the current Filter State from the URL and storage per the
/// precedence rule. Never fails; degraded sources produce an empty state.
pub fn load_state(url: &impl UrlBar, storage: &impl KeyValueStorage) -> FilterState {
    let raw_query = url.query().unwrap_or_default();
    if query::has_recognized_params(&raw_query) {
        return query::decode(&raw_query);
    }
    load_from_storage(storage)
}

fn load_from_storage(storage: &impl KeyValueStorage) -> FilterState {
    let stored = match storage.get(STORAGE_KEY) {
        Ok(stored) => stored,
        Err(err) => {
            warn!(key = STORAGE_KEY, %err, "failed to read stored filters");
            return FilterState::new();
        }
    };
    let Some(payload) = stored else {
        return FilterState::new();
    };
    match serde_json::from_str::<FilterRecord>(&payload) {
        Ok(record) => FilterState::from_record(&record),
        Err(err) => {
            warn!(key = STORAGE_KEY, %err, "stored filters are malformed, ignoring");
            FilterState::new()
        }
    }
}

/// Mirror the state onto both surfaces. Failures are logged, never fatal.
pub fn write_state(state: &FilterState, url: &impl UrlBar, storage: &impl KeyValueStorage) {
    if let Err(err) = url.replace_query(&query::encode(state)) {
        warn!(%err, "failed to rewrite URL query string");
    }
    match serde_json::to_string(&state.to_record()) {
        Ok(payload) => {
            if let Err(err) = storage.set(STORAGE_KEY, &payload) {
                warn!(key = STORAGE_KEY, %err, "failed to persist filters");
            }
        }
        Err(err) => warn!(%err, "failed to serialize filters"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::Facet;
    use crate::store::{MemStorage, MemUrlBar};

    fn state_with(pairs: &[(Facet, &str)]) -> FilterState {
        let mut state = FilterState::new();
        for (facet, value) in pairs {
            state.insert(*facet, *value);
        }
        state
    }

    #[test]
    fn load_with_no_sources_is_empty() {
        let state = load_state(&MemUrlBar::new(), &MemStorage::new());
        assert!(state.is_empty());
    }

    #[test]
    fn url_with_recognized_params_is_authoritative() {
        let url = MemUrlBar::with_query("drive=belt-drive");
        let storage = MemStorage::new();
        storage.seed(STORAGE_KEY, r#"{"housing":["tubular"]}"#);

        let state = load_state(&url, &storage);
        assert!(state.is_selected(Facet::Drive, "belt-drive"));
        // Storage is ignored entirely, not merged.
        assert!(state.selected(Facet::Housing).is_empty());
        assert_eq!(state.selection_count(), 1);
    }

    #[test]
    fn url_without_recognized_params_falls_back_to_storage() {
        let url = MemUrlBar::with_query("utm_source=newsletter");
        let storage = MemStorage::new();
        storage.seed(STORAGE_KEY, r#"{"housing":["tubular"],"drive":[]}"#);

        let state = load_state(&url, &storage);
        assert!(state.is_selected(Facet::Housing, "tubular"));
        assert_eq!(state.selection_count(), 1);
    }

    #[test]
    fn malformed_stored_record_degrades_to_empty() {
        let storage = MemStorage::new();
        storage.seed(STORAGE_KEY, "{not json");
        let state = load_state(&MemUrlBar::new(), &storage);
        assert!(state.is_empty());
    }

    #[test]
    fn load_is_idempotent() {
        let url = MemUrlBar::with_query("drive=belt-drive&drive=direct-drive");
        let storage = MemStorage::new();
        let first = load_state(&url, &storage);
        let second = load_state(&url, &storage);
        assert_eq!(first, second);
    }

    #[test]
    fn write_then_load_round_trips() {
        let url = MemUrlBar::new();
        let storage = MemStorage::new();
        let state = state_with(&[
            (Facet::Drive, "belt-drive"),
            (Facet::Drive, "direct-drive"),
            (Facet::Certifications, "ul-705"),
        ]);

        write_state(&state, &url, &storage);
        assert_eq!(load_state(&url, &storage), state);

        // With the URL cleared, storage alone reproduces the state too.
        url.navigate_to(None);
        assert_eq!(load_state(&url, &storage), state);
    }

    #[test]
    fn write_empty_state_round_trips() {
        let url = MemUrlBar::with_query("drive=belt-drive");
        let storage = MemStorage::new();
        write_state(&FilterState::new(), &url, &storage);
        assert_eq!(url.query(), None);
        assert!(load_state(&url, &storage).is_empty());
    }

    #[test]
    fn write_failures_are_swallowed() {
        let url = MemUrlBar::new();
        let storage = MemStorage::new();
        url.set_simulate_write_error(true);
        storage.set_simulate_write_error(true);
        write_state(&state_with(&[(Facet::Drive, "belt-drive")]), &url, &storage);
        // Nothing persisted, nothing panicked.
        assert_eq!(storage.get(STORAGE_KEY).unwrap(), None);
    }
}
