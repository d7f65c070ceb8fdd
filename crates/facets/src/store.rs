//! External state surfaces.
//!
//! The synchronizer talks to the browser through two narrow traits rather
//! than an ambient global document: [`UrlBar`] for the address bar query
//! string and [`KeyValueStorage`] for durable local storage. Both take
//! `&self`; the component is single-threaded and handlers run to
//! completion, so implementations use interior mutability where needed.
//!
//! [`MemUrlBar`] and [`MemStorage`] are the in-memory doubles used by the
//! test suite, with write-error switches for exercising the degraded
//! paths.

use crate::error::{FacetError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// The address bar: the visible URL's query string.
pub trait UrlBar {
    /// The current raw query string, without the leading `?`.
    /// `None` when the URL carries no query at all.
    fn query(&self) -> Option<String>;

    /// Replace the query string in place, without a navigation or reload.
    /// An empty string clears the query.
    fn replace_query(&self, query: &str) -> Result<()>;
}

impl<T: UrlBar + ?Sized> UrlBar for &T {
    fn query(&self) -> Option<String> {
        (**self).query()
    }

    fn replace_query(&self, query: &str) -> Result<()> {
        (**self).replace_query(query)
    }
}

/// Durable local storage keyed by string.
pub trait KeyValueStorage {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, creating or overwriting the key.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory [`UrlBar`] for tests and headless use.
#[derive(Default)]
pub struct MemUrlBar {
    query: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemUrlBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a query string already in the address bar.
    pub fn with_query(query: &str) -> Self {
        let bar = Self::new();
        *bar.query.borrow_mut() = Some(query.to_string());
        bar
    }

    /// Simulate navigation arriving at a different query string
    /// (back/forward), bypassing `replace_query`.
    pub fn navigate_to(&self, query: Option<&str>) {
        *self.query.borrow_mut() = query.map(str::to_string);
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl UrlBar for MemUrlBar {
    fn query(&self) -> Option<String> {
        self.query.borrow().clone()
    }

    fn replace_query(&self, query: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(FacetError::History("simulated history failure".into()));
        }
        *self.query.borrow_mut() = if query.is_empty() {
            None
        } else {
            Some(query.to_string())
        };
        Ok(())
    }
}

/// In-memory [`KeyValueStorage`] for tests and headless use.
#[derive(Default)]
pub struct MemStorage {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key before the component loads.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl KeyValueStorage for MemStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(FacetError::Storage("simulated storage failure".into()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
