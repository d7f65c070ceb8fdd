//! Development-only static file serving for the facets demo pages.
//!
//! This crate exists so the product card pages can be opened over HTTP
//! during development (local storage and history APIs behave differently
//! from `file://`). It is not part of the library API and has no
//! production role.

pub mod server;
