//! The example store and its query layer.
//!
//! A [`Catalog`] is built exactly once, either from the compiled-in
//! definitions or from an interchange document, and is never mutated
//! afterwards. Every view (category filters, counts, the latest slice,
//! search hits, the spotlight pick) is derived per call from the same
//! ordered collection, so no view can drift out of sync with another.

use std::collections::HashSet;

use rand_chacha::rand_core::RngCore;
use tracing::debug;

use crate::catalog::category::Category;
use crate::catalog::error::CatalogError;
use crate::catalog::example::{Example, ExampleId};
use crate::catalog::record::{CatalogDocument, ExampleRecord, CATALOG_FORMAT_VERSION};
use crate::catalog::spotlight;
use crate::content;

/// Immutable, ordered collection of animation examples.
///
/// Insertion order is the display order: newest-first surfaces take the
/// head of the collection, category listings preserve relative order.
#[derive(Debug, Clone)]
pub struct Catalog {
    examples: Vec<Example>,
}

impl Catalog {
    /// Build the catalog from the compiled-in definitions.
    ///
    /// Infallible: the built-in content is validated by tests, not at
    /// runtime. Two calls yield equal content in equal order, though ids
    /// are regenerated each time.
    pub fn builtin() -> Self {
        let examples = content::all();
        debug!(count = examples.len(), "built-in catalog constructed");
        Self { examples }
    }

    /// Build a catalog from already-constructed examples.
    ///
    /// Validates every entry up front and fails fast on the first bad one:
    /// blank display text and repeated ids are both rejected, so no
    /// partially populated catalog is ever returned and [`Catalog::get`]
    /// has exactly one answer per id.
    pub fn from_examples(examples: Vec<Example>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(examples.len());
        for example in &examples {
            example.validate()?;
            if !seen.insert(example.id) {
                return Err(CatalogError::invalid(
                    &example.title,
                    format!("duplicate id {}", example.id),
                ));
            }
        }
        Ok(Self { examples })
    }

    /// Build a catalog from interchange records, in record order.
    pub fn from_records(records: Vec<ExampleRecord>) -> Result<Self, CatalogError> {
        let examples = records
            .into_iter()
            .map(Example::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_examples(examples)
    }

    /// Parse and validate a JSON interchange document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let catalog = Self::from_records(document.examples)?;
        debug!(
            count = catalog.len(),
            version = document.version,
            "catalog loaded from document"
        );
        Ok(catalog)
    }

    /// Snapshot the catalog as an interchange document.
    ///
    /// `exported_at` is left unset; writers that want a timestamp stamp
    /// it themselves.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            version: CATALOG_FORMAT_VERSION,
            exported_at: None,
            examples: self.examples.iter().map(ExampleRecord::from).collect(),
        }
    }

    /// Serialize the catalog as a pretty-printed interchange document.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    /// All examples, in display order.
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Look up one example by id.
    pub fn get(&self, id: ExampleId) -> Option<&Example> {
        self.examples.iter().find(|e| e.id == id)
    }

    /// Look up the first example whose title matches, ignoring ASCII case.
    ///
    /// Titles are not unique across categories; the earliest entry in
    /// display order wins.
    pub fn find_by_title(&self, title: &str) -> Option<&Example> {
        self.examples
            .iter()
            .find(|e| e.title.eq_ignore_ascii_case(title))
    }

    /// Case-insensitive substring search over titles, descriptions, and tips.
    pub fn search(&self, query: &str) -> Vec<&Example> {
        let query_lower = query.to_lowercase();
        self.examples
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&query_lower)
                    || e.description.to_lowercase().contains(&query_lower)
                    || e.explanation
                        .tips
                        .iter()
                        .any(|tip| tip.to_lowercase().contains(&query_lower))
            })
            .collect()
    }

    /// Examples in one category, preserving display order.
    ///
    /// An empty result is an answer, not an error: a valid category with
    /// no examples yields an empty list.
    pub fn filter_by_category(&self, category: Category) -> Vec<&Example> {
        self.examples
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Same as [`Catalog::filter_by_category`], resolving a string id first.
    ///
    /// Unlike an empty valid category, an unresolvable id is an error.
    pub fn filter_by_category_id(&self, id: &str) -> Result<Vec<&Example>, CatalogError> {
        let category: Category = id.parse()?;
        Ok(self.filter_by_category(category))
    }

    /// Number of examples in one category. Derived on every call, never
    /// cached, so it always agrees with [`Catalog::filter_by_category`].
    pub fn count_in(&self, category: Category) -> usize {
        self.examples.iter().filter(|e| e.category == category).count()
    }

    /// Same as [`Catalog::count_in`], resolving a string id first.
    pub fn count_by_category_id(&self, id: &str) -> Result<usize, CatalogError> {
        let category: Category = id.parse()?;
        Ok(self.count_in(category))
    }

    /// The newest `n` examples: the head of the display order.
    ///
    /// Clamped to the catalog size, so any `n` is safe.
    pub fn latest(&self, n: usize) -> &[Example] {
        &self.examples[..n.min(self.examples.len())]
    }

    /// Pick one example uniformly at random across all categories.
    pub fn spotlight(&self) -> Result<&Example, CatalogError> {
        if self.examples.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        let index = spotlight::pick_index_global(self.examples.len());
        Ok(&self.examples[index])
    }

    /// Spotlight with a caller-supplied generator, for reproducible picks.
    pub fn spotlight_with<R: RngCore>(&self, rng: &mut R) -> Result<&Example, CatalogError> {
        if self.examples.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        let index = spotlight::pick_index(rng, self.examples.len());
        Ok(&self.examples[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::example::Explanation;

    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    fn sample(category: Category, title: &str) -> Example {
        Example::new(category, title, "test description", "pulse")
    }

    fn small_catalog() -> Catalog {
        Catalog::from_examples(vec![
            sample(Category::Basic, "Scale & Fade"),
            sample(Category::Basic, "Pulse Effect"),
            sample(Category::Spring, "Bouncy Scale"),
            sample(Category::Path, "Circle Path"),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_examples_rejects_blank_entries() {
        let result = Catalog::from_examples(vec![
            sample(Category::Basic, "Scale & Fade"),
            sample(Category::Basic, ""),
        ]);
        assert!(matches!(result, Err(CatalogError::InvalidExample { .. })));
    }

    #[test]
    fn test_from_examples_rejects_duplicate_ids() {
        let original = sample(Category::Basic, "Scale & Fade");
        let mut copy = sample(Category::Spring, "Bouncy Scale");
        copy.id = original.id;

        let result = Catalog::from_examples(vec![original, copy]);
        match result {
            Err(CatalogError::InvalidExample { title, reason }) => {
                assert_eq!(title, "Bouncy Scale");
                assert!(reason.contains("duplicate id"));
            }
            other => panic!("Expected InvalidExample, got {:?}", other),
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = small_catalog();
        let id = catalog.examples()[2].id;
        assert_eq!(catalog.get(id).unwrap().title, "Bouncy Scale");

        let absent = ExampleId::from(uuid::Uuid::new_v4());
        assert!(catalog.get(absent).is_none());
    }

    #[test]
    fn test_find_by_title() {
        let catalog = Catalog::from_examples(vec![
            sample(Category::Keyframe, "Loading Sequence"),
            sample(Category::Sequence, "Loading Sequence"),
        ])
        .unwrap();

        let hit = catalog.find_by_title("loading sequence").unwrap();
        assert_eq!(hit.category, Category::Keyframe);
        assert!(catalog.find_by_title("no such title").is_none());
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = small_catalog();

        let basics = catalog.filter_by_category(Category::Basic);
        let titles: Vec<&str> = basics.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Scale & Fade", "Pulse Effect"]);

        // Valid category with no members: empty, not an error.
        assert!(catalog.filter_by_category(Category::Advanced).is_empty());
    }

    #[test]
    fn test_filter_by_category_id() {
        let catalog = small_catalog();
        assert_eq!(catalog.filter_by_category_id("spring").unwrap().len(), 1);
        assert!(matches!(
            catalog.filter_by_category_id("unknown"),
            Err(CatalogError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_counts_agree_with_filters() {
        let catalog = small_catalog();
        for category in Category::ALL {
            assert_eq!(
                catalog.count_in(category),
                catalog.filter_by_category(category).len()
            );
        }
        assert_eq!(catalog.count_by_category_id("basic").unwrap(), 2);
        assert!(catalog.count_by_category_id("nope").is_err());
    }

    #[test]
    fn test_latest_clamping() {
        let catalog = small_catalog();
        assert_eq!(catalog.latest(2).len(), 2);
        assert_eq!(catalog.latest(2)[0].title, "Scale & Fade");
        assert_eq!(catalog.latest(100).len(), 4);
        assert!(catalog.latest(0).is_empty());
    }

    #[test]
    fn test_search() {
        let tipped = sample(Category::Gesture, "Drag & Scale").with_explanation(
            Explanation::new("Drag to move.").with_tip("Velocity matters for natural feel"),
        );
        let catalog =
            Catalog::from_examples(vec![sample(Category::Basic, "Pulse Effect"), tipped]).unwrap();

        let hits = catalog.search("velocity");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Drag & Scale");

        assert_eq!(catalog.search("PULSE").len(), 1);
        assert!(catalog.search("zzzz").is_empty());
    }

    #[test]
    fn test_spotlight_empty_catalog() {
        let catalog = Catalog::from_examples(Vec::new()).unwrap();
        assert!(matches!(catalog.spotlight(), Err(CatalogError::EmptyCatalog)));

        let mut rng = ChaCha12Rng::seed_from_u64(1);
        assert!(matches!(
            catalog.spotlight_with(&mut rng),
            Err(CatalogError::EmptyCatalog)
        ));

        // Remaining queries degrade to empty answers.
        assert!(catalog.latest(4).is_empty());
        assert!(catalog.filter_by_category(Category::Basic).is_empty());
        assert_eq!(catalog.count_in(Category::Basic), 0);
    }

    #[test]
    fn test_seeded_spotlight_reproducible() {
        let catalog = small_catalog();
        let mut a = ChaCha12Rng::seed_from_u64(99);
        let mut b = ChaCha12Rng::seed_from_u64(99);
        for _ in 0..10 {
            let x = catalog.spotlight_with(&mut a).unwrap();
            let y = catalog.spotlight_with(&mut b).unwrap();
            assert_eq!(x.id, y.id);
        }
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = small_catalog();
        let json = catalog.to_json().unwrap();
        let restored = Catalog::from_json_str(&json).unwrap();

        assert_eq!(restored.len(), catalog.len());
        for (a, b) in restored.examples().iter().zip(catalog.examples()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.title, b.title);
            assert_eq!(a.category, b.category);
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Catalog::from_json_str("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
