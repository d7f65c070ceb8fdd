//! # Facets Architecture
//!
//! Facets is a **UI-agnostic faceted filtering library**: the state machine
//! behind a product-list filter widget, with the rendering surface and the
//! browser kept behind traits. The same core can sit under a real page
//! binding, a headless test, or any other host.
//!
//! ## The Pipeline
//!
//! Four responsibilities compose in one direction on every event:
//!
//! ```text
//! Filter State Store ──▶ Match Evaluator ──▶ Presentation ──▶ Persistence
//!      (state)            (visible set)       (surface)      (URL+storage)
//! ```
//!
//! - [`state`]: the Filter State Store — one selection set per [`facet::Facet`],
//!   the single source of truth during a session.
//! - [`sync`]: the State Synchronizer — load precedence (URL authoritative
//!   when it carries recognized parameters, else stored record, else empty)
//!   and the dual write on every mutation.
//! - [`matcher`]: the Match Evaluator — AND across facets, OR within a
//!   facet, exact string membership.
//! - [`search`]: the component tying it together; handlers take `&mut self`
//!   and run to completion, so the pipeline is atomic per event.
//!
//! Adjacent pieces:
//!
//! - [`catalog`]: the in-memory product model, populated once at startup
//!   from the card attributes — filtering never re-reads the page.
//! - [`quickview`]: the per-card Collapsed/Expanded detail-face machine.
//! - [`surface`]: the one-way projection trait plus test doubles.
//! - [`store`]: the [`store::UrlBar`] and [`store::KeyValueStorage`]
//!   collaborator traits with in-memory implementations.
//! - [`query`]: the query-string codec.
//! - [`error`]: error types.
//!
//! ## Error Philosophy
//!
//! Nothing in this crate is fatal to the host page. Malformed stored JSON
//! or quick-view payloads degrade to empty with a logged warning; failed
//! URL or storage writes are logged and swallowed; missing optional render
//! targets are the surface implementation's business. The pipeline always
//! leaves a consistent, if degraded, view.

pub mod catalog;
pub mod error;
pub mod facet;
pub mod matcher;
pub mod query;
pub mod quickview;
pub mod search;
pub mod state;
pub mod store;
pub mod surface;
pub mod sync;

pub use catalog::{CardAttributes, Catalog, ProductId, ProductRecord, QuickViewContent};
pub use error::{FacetError, Result};
pub use facet::{display_name, Facet};
pub use quickview::{QuickViewRegistry, QuickViewState};
pub use search::FacetedSearch;
pub use state::{FilterRecord, FilterState};
pub use store::{KeyValueStorage, MemStorage, MemUrlBar, UrlBar};
pub use surface::{FilterTag, NullSurface, RenderSurface};
