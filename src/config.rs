//! Catalog source configuration.
//!
//! Commands read the same catalog; where it comes from is resolved once
//! per invocation, with this precedence (highest first):
//!
//! 1. Explicit `--catalog <path>` flag
//! 2. `ANIMDEX_CATALOG` environment variable
//! 3. The compiled-in catalog
//!
//! External documents go through the same validation as built-in content,
//! so a bad file fails the command instead of producing a partial catalog.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::catalog::Catalog;

/// Environment variable naming an external catalog document.
pub const CATALOG_ENV: &str = "ANIMDEX_CATALOG";

/// Where catalog data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The compiled-in example definitions.
    Builtin,
    /// An external interchange document on disk.
    File(PathBuf),
}

impl CatalogSource {
    /// Resolve the source for this invocation.
    pub fn resolve(flag: Option<PathBuf>) -> Self {
        if let Some(path) = flag {
            debug!(path = %path.display(), "catalog source from flag");
            return Self::File(path);
        }

        match std::env::var(CATALOG_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                debug!(path = %value, "catalog source from environment");
                Self::File(PathBuf::from(value))
            }
            _ => Self::Builtin,
        }
    }

    /// Load the catalog this source names.
    pub async fn load(&self) -> Result<Catalog> {
        match self {
            Self::Builtin => Ok(Catalog::builtin()),
            Self::File(path) => load_file(path).await,
        }
    }
}

async fn load_file(path: &Path) -> Result<Catalog> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let catalog = Catalog::from_json_str(&json)
        .with_context(|| format!("Invalid catalog document: {}", path.display()))?;

    debug!(
        count = catalog.len(),
        path = %path.display(),
        "catalog loaded from file"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    // All environment mutations live in one test; cargo runs tests in
    // parallel and ANIMDEX_CATALOG is process-global.
    #[test]
    fn test_resolution_precedence() {
        std::env::remove_var(CATALOG_ENV);
        assert_eq!(CatalogSource::resolve(None), CatalogSource::Builtin);

        std::env::set_var(CATALOG_ENV, "/tmp/env-catalog.json");
        assert_eq!(
            CatalogSource::resolve(None),
            CatalogSource::File(PathBuf::from("/tmp/env-catalog.json"))
        );

        // The flag wins over the environment.
        assert_eq!(
            CatalogSource::resolve(Some(PathBuf::from("/tmp/flag-catalog.json"))),
            CatalogSource::File(PathBuf::from("/tmp/flag-catalog.json"))
        );

        // Blank environment values fall through to builtin.
        std::env::set_var(CATALOG_ENV, "   ");
        assert_eq!(CatalogSource::resolve(None), CatalogSource::Builtin);

        std::env::remove_var(CATALOG_ENV);
    }

    #[tokio::test]
    async fn test_builtin_source_loads() {
        let catalog = CatalogSource::Builtin.load().await.unwrap();
        assert!(!catalog.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_error() {
        let source = CatalogSource::File(PathBuf::from("/no/such/catalog.json"));
        let err = source.load().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }
}
