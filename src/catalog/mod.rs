//! The animation catalog: category registry, example store, query layer,
//! and interchange records.
//!
//! Data flows one way:
//!
//! ```text
//! content::all() ──────────────┐
//!                              ├──> Catalog (immutable) ──> queries
//! CatalogDocument (JSON) ──────┘
//! ```
//!
//! The catalog is built once and only read afterwards. Categories are a
//! closed compile-time set; examples reference them by value and external
//! surfaces resolve string ids at the boundary.

pub mod category;
pub mod error;
pub mod example;
pub mod record;
pub mod store;

mod spotlight;

pub use category::Category;
pub use error::CatalogError;
pub use example::{Concept, Example, ExampleId, Explanation};
pub use record::{CatalogDocument, ConceptRecord, ExampleRecord, CATALOG_FORMAT_VERSION};
pub use store::Catalog;
