//! Typed failures for catalog construction and queries.

use thiserror::Error;

/// Errors surfaced by catalog construction and the query layer.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The string does not name any category in the registry.
    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),

    /// A selection query ran against a catalog with no examples.
    #[error("Catalog contains no examples")]
    EmptyCatalog,

    /// An example failed validation while the catalog was being built.
    #[error("Invalid example {title:?}: {reason}")]
    InvalidExample {
        /// Title of the offending example (may be empty, which is often the problem).
        title: String,
        /// What the validation rejected.
        reason: String,
    },

    /// The interchange document could not be parsed as JSON.
    #[error("Malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CatalogError {
    pub(crate) fn invalid(title: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidExample {
            title: title.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offender() {
        let err = CatalogError::UnknownCategory("noodle".to_string());
        assert_eq!(err.to_string(), "Unknown category: \"noodle\"");

        let err = CatalogError::invalid("", "title must not be empty");
        assert_eq!(err.to_string(), "Invalid example \"\": title must not be empty");
    }
}
