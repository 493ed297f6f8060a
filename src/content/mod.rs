//! Compiled-in example definitions, one module per category.
//!
//! [`all`] concatenates the per-category lists into the store's display
//! order. That order is part of the observable behavior (the "latest"
//! slice is its head), so it is fixed here rather than derived from the
//! registry: note that particles precede morphing even though the
//! registry declares them the other way around.

use crate::catalog::Example;

pub mod advanced;
pub mod basic;
pub mod gesture;
pub mod keyframe;
pub mod morph;
pub mod particle;
pub mod path;
pub mod physics;
pub mod sequence;
pub mod spring;
pub mod transition;

/// Every built-in example, in display order.
pub fn all() -> Vec<Example> {
    let mut examples = Vec::new();
    examples.extend(basic::examples());
    examples.extend(spring::examples());
    examples.extend(transition::examples());
    examples.extend(keyframe::examples());
    examples.extend(path::examples());
    examples.extend(gesture::examples());
    examples.extend(physics::examples());
    examples.extend(particle::examples());
    examples.extend(morph::examples());
    examples.extend(sequence::examples());
    examples.extend(advanced::examples());
    examples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn test_every_category_contributes() {
        let examples = all();
        for category in Category::ALL {
            assert!(
                examples.iter().any(|e| e.category == category),
                "no examples for {category}"
            );
        }
    }

    #[test]
    fn test_display_order() {
        let examples = all();
        assert_eq!(examples.first().map(|e| e.category), Some(Category::Basic));
        assert_eq!(
            examples.last().map(|e| e.category),
            Some(Category::Advanced)
        );

        // Particles come before morphing in display order.
        let first_particle = examples
            .iter()
            .position(|e| e.category == Category::Particle)
            .unwrap();
        let first_morph = examples
            .iter()
            .position(|e| e.category == Category::Morph)
            .unwrap();
        assert!(first_particle < first_morph);
    }

    #[test]
    fn test_rebuild_consistency() {
        let a = all();
        let b = all();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.title, y.title);
            assert_eq!(x.category, y.category);
            assert_eq!(x.preview_key, y.preview_key);
        }
    }

    #[test]
    fn test_builtin_content_valid() {
        for example in all() {
            assert!(!example.title.trim().is_empty());
            assert!(!example.description.trim().is_empty());
            assert!(!example.preview_key.trim().is_empty());
            assert!(!example.explanation.overview.trim().is_empty());
        }
    }
}
