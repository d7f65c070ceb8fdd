//! Query-string codec for the Filter State.
//!
//! One `facet=value` occurrence per selected value, grouped by facet in
//! canonical order. Values are percent-encoded so any selection string
//! survives the round trip; decoding also folds `+` to space for URLs
//! written by other tooling.

use crate::facet::Facet;
use crate::state::FilterState;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except unreserved characters gets escaped.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode the full state as a query string (no leading `?`).
/// An empty state encodes to the empty string.
pub fn encode(state: &FilterState) -> String {
    let mut out = String::new();
    for (facet, value) in state.iter() {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(facet.name());
        out.push('=');
        out.push_str(&utf8_percent_encode(value, QUERY_ESCAPE).to_string());
    }
    out
}

/// Decode a raw query string (with or without a leading `?`) into
/// key/value pairs. Empty segments are skipped; a key without `=` decodes
/// to an empty value. Invalid percent escapes pass through verbatim.
pub fn parse(raw: &str) -> Vec<(String, String)> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    raw.split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Whether the query string names at least one known facet. This is the
/// test for URL authority during load.
pub fn has_recognized_params(raw: &str) -> bool {
    parse(raw).iter().any(|(key, _)| Facet::parse(key).is_some())
}

/// Rebuild state entirely from a query string: every facet's selection
/// becomes exactly the URL's values for it, including empty when absent.
pub fn decode(raw: &str) -> FilterState {
    let mut state = FilterState::new();
    for (key, value) in parse(raw) {
        if let Some(facet) = Facet::parse(&key) {
            state.insert(facet, value);
        }
    }
    state
}

fn decode_component(component: &str) -> String {
    let unplussed = component.replace('+', " ");
    match percent_decode_str(&unplussed).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => unplussed.clone(),
    }
}
