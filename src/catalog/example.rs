//! Example entries and their embedded teaching notes.

use std::fmt;

use uuid::Uuid;

use crate::catalog::category::Category;
use crate::catalog::error::CatalogError;

/// Unique identity of one example.
///
/// Generated fresh (v4) when an example is constructed, so ids are stable
/// for the lifetime of a catalog but differ between two builds of the
/// same content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExampleId(Uuid);

impl ExampleId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ExampleId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ExampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Route through `pad` so width specifiers in table layouts apply.
        f.pad(&self.0.to_string())
    }
}

/// One catalog entry describing a single animation technique.
///
/// Construct with [`Example::new`] and layer the optional text on with the
/// `with_*` builders. The store validates entries on admission; `new` itself
/// never fails.
#[derive(Debug, Clone)]
pub struct Example {
    /// Unique identity.
    pub id: ExampleId,
    /// Short display title, e.g. "Scale & Fade".
    pub title: String,
    /// One-line description shown on cards and list rows.
    pub description: String,
    /// The category this example belongs to.
    pub category: Category,
    /// Condensed snippet for the code viewer.
    pub code_preview: String,
    /// Fuller snippet showing the technique inside a working view.
    pub usage_example: String,
    /// Structured teaching notes.
    pub explanation: Explanation,
    /// Opaque token the rendering collaborator maps to a live preview.
    pub preview_key: String,
}

impl Example {
    /// Create an example with a fresh id and empty optional text.
    pub fn new(
        category: Category,
        title: impl Into<String>,
        description: impl Into<String>,
        preview_key: impl Into<String>,
    ) -> Self {
        Self {
            id: ExampleId::generate(),
            title: title.into(),
            description: description.into(),
            category,
            code_preview: String::new(),
            usage_example: String::new(),
            explanation: Explanation::default(),
            preview_key: preview_key.into(),
        }
    }

    /// Set the condensed code snippet.
    pub fn with_code_preview(mut self, code: impl Into<String>) -> Self {
        self.code_preview = code.into();
        self
    }

    /// Set the full usage snippet.
    pub fn with_usage_example(mut self, code: impl Into<String>) -> Self {
        self.usage_example = code.into();
        self
    }

    /// Attach teaching notes.
    pub fn with_explanation(mut self, explanation: Explanation) -> Self {
        self.explanation = explanation;
        self
    }

    /// Admission check applied by the store: display text must be present.
    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::invalid(&self.title, "title must not be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(CatalogError::invalid(
                &self.title,
                "description must not be empty",
            ));
        }
        Ok(())
    }
}

/// Teaching notes attached to an example: an overview, the concepts it
/// demonstrates, and practical tips.
#[derive(Debug, Clone, Default)]
pub struct Explanation {
    /// A short paragraph describing what the animation does.
    pub overview: String,
    /// Concepts the example demonstrates, in presentation order.
    pub key_concepts: Vec<Concept>,
    /// Practical advice, in presentation order.
    pub tips: Vec<String>,
}

impl Explanation {
    pub fn new(overview: impl Into<String>) -> Self {
        Self {
            overview: overview.into(),
            key_concepts: Vec::new(),
            tips: Vec::new(),
        }
    }

    pub fn with_concept(
        mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.key_concepts.push(Concept {
            title: title.into(),
            description: description.into(),
        });
        self
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tips.push(tip.into());
        self
    }
}

/// One named concept inside an explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_distinct_ids() {
        let a = Example::new(Category::Basic, "Pulse", "A pulsing circle", "pulse");
        let b = Example::new(Category::Basic, "Pulse", "A pulsing circle", "pulse");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_builders_layer_optional_text() {
        // Builders accept anything stringy: literals and owned strings alike.
        let example = Example::new(Category::Spring, "Bouncy Scale", "Spring scale", "bouncy_scale")
            .with_code_preview(String::from("spring_demo()"))
            .with_usage_example("fn demo() { spring_demo() }")
            .with_explanation(
                Explanation::new("Scales with a spring.")
                    .with_concept("Spring response", "How fast the spring settles.".to_string())
                    .with_tip("Lower damping for more bounce"),
            );

        assert_eq!(example.code_preview, "spring_demo()");
        assert_eq!(example.usage_example, "fn demo() { spring_demo() }");
        assert_eq!(example.explanation.overview, "Scales with a spring.");
        assert_eq!(example.explanation.key_concepts.len(), 1);
        assert_eq!(example.explanation.key_concepts[0].title, "Spring response");
        assert_eq!(example.explanation.tips, vec!["Lower damping for more bounce"]);
    }

    #[test]
    fn test_validate_rejects_blank_text() {
        let blank_title = Example::new(Category::Basic, "  ", "desc", "pulse");
        assert!(blank_title.validate().is_err());

        let blank_description = Example::new(Category::Basic, "Pulse", "", "pulse");
        assert!(blank_description.validate().is_err());

        let ok = Example::new(Category::Basic, "Pulse", "A pulsing circle", "pulse");
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_example_id_round_trip() {
        let example = Example::new(Category::Path, "Circle Path", "Orbit motion", "circle_path");
        let raw = example.id.as_uuid();
        assert_eq!(ExampleId::from(raw), example.id);
        assert_eq!(example.id.to_string(), raw.to_string());
    }

    #[test]
    fn test_example_id_display_honors_width() {
        let id = ExampleId::generate();
        // Hyphenated UUIDs are 36 characters; table layouts pad them wider.
        assert_eq!(format!("{}", id).len(), 36);
        assert_eq!(format!("{:<38}", id).len(), 38);
        assert!(format!("{:<38}", id).ends_with("  "));
    }
}
