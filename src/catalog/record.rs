//! Wire shapes for catalog interchange documents.
//!
//! The on-disk format is a single JSON document: a version, an optional
//! export timestamp, and a flat list of example records in display order.
//! Field names follow the snake_case names of the upstream data set
//! (`category_id`, `code_preview`, `preview_key`). Records are inert;
//! converting one into an [`Example`] performs the same validation the
//! store applies to compiled-in content, so a document either yields a
//! complete catalog or fails before anything is admitted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::category::Category;
use crate::catalog::error::CatalogError;
use crate::catalog::example::{Concept, Example, ExampleId, Explanation};

/// Version written into exported documents.
pub const CATALOG_FORMAT_VERSION: u32 = 1;

/// Top-level interchange document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Format version of the document.
    pub version: u32,
    /// When the document was exported, if the writer stamped it.
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
    /// Example records in display order.
    pub examples: Vec<ExampleRecord>,
}

/// Wire shape of one example.
///
/// Only `title`, `description`, `category_id`, and `preview_key` are
/// required; the optional text defaults to empty so hand-written documents
/// stay short.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleRecord {
    /// Original id, if the writer preserved one. Absent ids are regenerated.
    #[serde(default)]
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    /// Lowercase category id, e.g. "spring".
    pub category_id: String,
    #[serde(default)]
    pub code_preview: String,
    #[serde(default)]
    pub usage_example: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub key_concepts: Vec<ConceptRecord>,
    #[serde(default)]
    pub tips: Vec<String>,
    pub preview_key: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Wire shape of one key-concept entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptRecord {
    pub title: String,
    pub description: String,
}

impl From<&Example> for ExampleRecord {
    fn from(example: &Example) -> Self {
        Self {
            id: Some(example.id.as_uuid()),
            title: example.title.clone(),
            description: example.description.clone(),
            category_id: example.category.id().to_string(),
            code_preview: example.code_preview.clone(),
            usage_example: example.usage_example.clone(),
            overview: example.explanation.overview.clone(),
            key_concepts: example
                .explanation
                .key_concepts
                .iter()
                .map(ConceptRecord::from)
                .collect(),
            tips: example.explanation.tips.clone(),
            preview_key: example.preview_key.clone(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl From<&Concept> for ConceptRecord {
    fn from(concept: &Concept) -> Self {
        Self {
            title: concept.title.clone(),
            description: concept.description.clone(),
        }
    }
}

impl TryFrom<ExampleRecord> for Example {
    type Error = CatalogError;

    fn try_from(record: ExampleRecord) -> Result<Self, Self::Error> {
        if record.title.trim().is_empty() {
            return Err(CatalogError::invalid(&record.title, "title must not be empty"));
        }
        if record.description.trim().is_empty() {
            return Err(CatalogError::invalid(
                &record.title,
                "description must not be empty",
            ));
        }

        let category: Category = record.category_id.parse()?;

        let mut explanation = Explanation::new(record.overview);
        for concept in record.key_concepts {
            explanation = explanation.with_concept(concept.title, concept.description);
        }
        for tip in record.tips {
            explanation = explanation.with_tip(tip);
        }

        let mut example =
            Example::new(category, record.title, record.description, record.preview_key)
                .with_code_preview(record.code_preview)
                .with_usage_example(record.usage_example)
                .with_explanation(explanation);

        if let Some(id) = record.id {
            example.id = ExampleId::from(id);
        }

        Ok(example)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_record() -> ExampleRecord {
        ExampleRecord {
            id: None,
            title: "Pulse Effect".to_string(),
            description: "Pulsating circle animation".to_string(),
            category_id: "basic".to_string(),
            code_preview: String::new(),
            usage_example: String::new(),
            overview: String::new(),
            key_concepts: Vec::new(),
            tips: Vec::new(),
            preview_key: "pulse".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_record_round_trip() {
        let example = Example::new(Category::Spring, "Elastic Snap", "Snaps back", "elastic_snap")
            .with_code_preview("snap()")
            .with_explanation(
                Explanation::new("Snaps back with a stiff spring.")
                    .with_concept("Stiffness", "Controls snap speed.")
                    .with_tip("Use high stiffness for snappy motion"),
            );

        let record = ExampleRecord::from(&example);
        assert_eq!(record.category_id, "spring");
        assert_eq!(record.id, Some(example.id.as_uuid()));

        let restored = Example::try_from(record).unwrap();
        assert_eq!(restored.id, example.id);
        assert_eq!(restored.title, example.title);
        assert_eq!(restored.category, example.category);
        assert_eq!(restored.explanation.key_concepts, example.explanation.key_concepts);
        assert_eq!(restored.explanation.tips, example.explanation.tips);
    }

    #[test]
    fn test_missing_fields_default() {
        let json = r#"{
            "title": "Pulse Effect",
            "description": "Pulsating circle animation",
            "category_id": "basic",
            "preview_key": "pulse"
        }"#;
        let record: ExampleRecord = serde_json::from_str(json).unwrap();
        let example = Example::try_from(record).unwrap();
        assert!(example.code_preview.is_empty());
        assert!(example.explanation.key_concepts.is_empty());
        assert!(example.explanation.tips.is_empty());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut record = minimal_record();
        record.category_id = "holograms".to_string();
        match Example::try_from(record) {
            Err(CatalogError::UnknownCategory(name)) => assert_eq!(name, "holograms"),
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut record = minimal_record();
        record.title = "   ".to_string();
        assert!(matches!(
            Example::try_from(record),
            Err(CatalogError::InvalidExample { .. })
        ));
    }

    #[test]
    fn test_absent_id_generated() {
        let a = Example::try_from(minimal_record()).unwrap();
        let b = Example::try_from(minimal_record()).unwrap();
        assert_ne!(a.id, b.id);
    }
}
