//! Catalog Query Integration Tests
//!
//! Properties of the query layer over the built-in catalog: filter purity,
//! count consistency, ordering, latest clamping, and spotlight behavior.

use std::collections::HashSet;

use animdex::{Catalog, CatalogError, Category};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha12Rng;

#[test]
fn test_filter_returns_only_matching_examples() {
    let catalog = Catalog::builtin();

    for category in Category::ALL {
        let filtered = catalog.filter_by_category(category);
        assert!(
            filtered.iter().all(|e| e.category == category),
            "filter for {} returned a foreign example",
            category
        );

        // The string-id form agrees with the typed form
        let by_id = catalog.filter_by_category_id(category.id()).unwrap();
        assert_eq!(by_id.len(), filtered.len());
    }
}

#[test]
fn test_counts_agree_with_filters_for_every_category() {
    let catalog = Catalog::builtin();

    for category in Category::ALL {
        assert_eq!(
            catalog.count_in(category),
            catalog.filter_by_category(category).len()
        );
        assert_eq!(
            catalog.count_by_category_id(category.id()).unwrap(),
            catalog.filter_by_category_id(category.id()).unwrap().len()
        );
    }
}

#[test]
fn test_registry_is_deterministic() {
    let first: Vec<&str> = Category::ALL.iter().map(|c| c.id()).collect();
    let second: Vec<&str> = Category::ALL.iter().map(|c| c.id()).collect();
    assert_eq!(first, second);

    assert_eq!(
        first,
        vec![
            "basic",
            "spring",
            "transition",
            "keyframe",
            "path",
            "gesture",
            "physics",
            "morph",
            "particle",
            "sequence",
            "advanced",
        ]
    );
}

#[test]
fn test_builtin_load_is_idempotent() {
    let a = Catalog::builtin();
    let b = Catalog::builtin();

    assert_eq!(a.len(), b.len());

    // Equal content in equal order; ids are regenerated per build and are
    // allowed to differ.
    for (x, y) in a.examples().iter().zip(b.examples()) {
        assert_eq!(x.title, y.title);
        assert_eq!(x.category, y.category);
        assert_eq!(x.preview_key, y.preview_key);
    }
}

#[test]
fn test_per_category_counts() {
    let catalog = Catalog::builtin();

    let expected = [
        (Category::Basic, 8),
        (Category::Spring, 5),
        (Category::Transition, 6),
        (Category::Keyframe, 4),
        (Category::Path, 4),
        (Category::Gesture, 3),
        (Category::Physics, 4),
        (Category::Particle, 6),
        (Category::Morph, 4),
        (Category::Sequence, 4),
        (Category::Advanced, 6),
    ];

    for (category, count) in expected {
        assert_eq!(
            catalog.count_in(category),
            count,
            "unexpected count for {}",
            category
        );
    }

    assert_eq!(catalog.len(), 54);
}

#[test]
fn test_display_order_groups_categories() {
    let catalog = Catalog::builtin();

    // The store concatenates per-category groups in a fixed order. Deduping
    // consecutive categories must therefore reproduce that exact order.
    let mut block_order = Vec::new();
    for example in catalog.examples() {
        if block_order.last() != Some(&example.category) {
            block_order.push(example.category);
        }
    }

    assert_eq!(
        block_order,
        vec![
            Category::Basic,
            Category::Spring,
            Category::Transition,
            Category::Keyframe,
            Category::Path,
            Category::Gesture,
            Category::Physics,
            Category::Particle,
            Category::Morph,
            Category::Sequence,
            Category::Advanced,
        ]
    );
}

#[test]
fn test_spring_filter_contents() {
    let catalog = Catalog::builtin();

    let springs = catalog.filter_by_category_id("spring").unwrap();
    assert_eq!(springs.len(), 5);
    assert!(springs.iter().all(|e| e.category == Category::Spring));

    // Insertion order within the category is preserved
    let titles: Vec<&str> = springs.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Bouncy Scale",
            "Spring Movement",
            "Bouncy Rotation",
            "Spring Chain",
            "Elastic Snap",
        ]
    );

    assert_eq!(catalog.count_by_category_id("basic").unwrap(), 8);

    // Unknown ids are an error, unlike valid-but-empty categories
    match catalog.filter_by_category_id("unknown") {
        Err(CatalogError::UnknownCategory(id)) => assert_eq!(id, "unknown"),
        other => panic!("expected UnknownCategory, got {other:?}"),
    }
}

#[test]
fn test_latest_clamps_to_store_size() {
    let catalog = Catalog::builtin();
    let size = catalog.len();

    // n within range
    assert_eq!(catalog.latest(4).len(), 4);

    // n beyond range returns everything, not an error
    assert_eq!(catalog.latest(size + 100).len(), size);

    // length == min(n, size) across the board
    for n in [0, 1, 4, size, size + 1] {
        assert_eq!(catalog.latest(n).len(), n.min(size));
    }

    // latest is the head of the display order
    let head: Vec<&str> = catalog.latest(4).iter().map(|e| e.title.as_str()).collect();
    let store: Vec<&str> = catalog.examples()[..4].iter().map(|e| e.title.as_str()).collect();
    assert_eq!(head, store);
}

#[test]
fn test_spotlight_varies_across_draws() {
    let catalog = Catalog::builtin();

    let mut rng = ChaCha12Rng::seed_from_u64(2024);
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let pick = catalog.spotlight_with(&mut rng).unwrap();
        seen.insert(pick.id);
    }

    assert!(
        seen.len() > 1,
        "1000 draws over {} examples produced a single result",
        catalog.len()
    );
}

#[test]
fn test_spotlight_picks_from_the_store() {
    let catalog = Catalog::builtin();
    let ids: HashSet<_> = catalog.examples().iter().map(|e| e.id).collect();

    for _ in 0..50 {
        let pick = catalog.spotlight().unwrap();
        assert!(ids.contains(&pick.id));
    }
}

#[test]
fn test_empty_catalog_degrades_cleanly() {
    let catalog = Catalog::from_examples(Vec::new()).unwrap();

    // Selection against nothing is an error
    match catalog.spotlight() {
        Err(CatalogError::EmptyCatalog) => {}
        other => panic!("expected EmptyCatalog, got {other:?}"),
    }

    // Everything else degrades to empty answers without error
    assert!(catalog.latest(4).is_empty());
    assert!(catalog.filter_by_category(Category::Basic).is_empty());
    assert_eq!(catalog.count_in(Category::Basic), 0);
    assert!(catalog.filter_by_category_id("basic").unwrap().is_empty());
    assert!(catalog.search("anything").is_empty());
}

#[test]
fn test_search_over_builtin_content() {
    let catalog = Catalog::builtin();

    // Title hit, case-insensitive
    let hits = catalog.search("HEARTBEAT");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Heartbeat");

    // Description hit
    assert!(!catalog.search("confetti").is_empty());

    // Miss
    assert!(catalog.search("quaternion slerp").is_empty());
}
