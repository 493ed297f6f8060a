//! animdex - browsable catalog of UI animation techniques
//!
//! A typed content catalog: a closed category registry, an immutable
//! example store, and a read-only query layer over both. The crate never
//! renders anything; each example carries an opaque `preview_key` that a
//! consuming UI maps to its own live effect.
//!
//! # Architecture
//!
//! The catalog is built once and only read afterwards:
//! - Built-in content is assembled eagerly from per-category definitions
//! - External JSON documents are validated fully before anything is admitted
//! - Every view (filters, counts, latest, search, spotlight) is derived
//!   per call from the same ordered collection
//!
//! # Modules
//!
//! - `catalog`: category registry, example store, queries, interchange records
//! - `content`: compiled-in example definitions, one module per category
//! - `config`: catalog source resolution (flag, environment, builtin)
//! - `cli`: command-line browser over the query layer
//!
//! # Usage
//!
//! ```bash
//! # Browse the category registry
//! animdex categories
//!
//! # List one category
//! animdex list spring
//!
//! # Pick a random example
//! animdex spotlight
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod content;

// Re-export main types at crate root for convenience
pub use catalog::{
    Catalog, CatalogDocument, CatalogError, Category, Concept, Example, ExampleId, ExampleRecord,
    Explanation,
};
pub use config::CatalogSource;
