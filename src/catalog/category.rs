//! The closed registry of animation categories.
//!
//! Categories are fixed at compile time. Examples carry a [`Category`]
//! value, and external surfaces (interchange records, CLI arguments)
//! resolve lowercase string ids back through [`Category::from_id`] or
//! the [`FromStr`] impl. Display metadata lives here as constant tables
//! so every consumer sees the same titles, descriptions, and style
//! tokens without touching the example store.

use std::fmt;
use std::str::FromStr;

use crate::catalog::error::CatalogError;

/// A named grouping of animation examples.
///
/// Declaration order is the registry order: navigation surfaces iterate
/// [`Category::ALL`] and render categories exactly in this sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Fundamental scale, rotation, and opacity effects.
    Basic,
    /// Spring physics with bounce and damping.
    Spring,
    /// Enter/exit transitions between view states.
    Transition,
    /// Multi-step timelines with per-keyframe timing.
    Keyframe,
    /// Motion along geometric paths.
    Path,
    /// Animations driven by drag, pinch, and rotation input.
    Gesture,
    /// Gravity, collision, and pendulum simulations.
    Physics,
    /// Shape and color morphing.
    Morph,
    /// Particle systems and scattered small elements.
    Particle,
    /// Chained and staggered multi-element choreography.
    Sequence,
    /// Showcase pieces combining several techniques.
    Advanced,
}

impl Category {
    /// Every category, in registry order.
    pub const ALL: [Category; 11] = [
        Category::Basic,
        Category::Spring,
        Category::Transition,
        Category::Keyframe,
        Category::Path,
        Category::Gesture,
        Category::Physics,
        Category::Morph,
        Category::Particle,
        Category::Sequence,
        Category::Advanced,
    ];

    /// Stable lowercase id used by records, queries, and the CLI.
    pub fn id(self) -> &'static str {
        match self {
            Category::Basic => "basic",
            Category::Spring => "spring",
            Category::Transition => "transition",
            Category::Keyframe => "keyframe",
            Category::Path => "path",
            Category::Gesture => "gesture",
            Category::Physics => "physics",
            Category::Morph => "morph",
            Category::Particle => "particle",
            Category::Sequence => "sequence",
            Category::Advanced => "advanced",
        }
    }

    /// Human-readable title for navigation surfaces.
    pub fn title(self) -> &'static str {
        match self {
            Category::Basic => "Basic",
            Category::Spring => "Spring",
            Category::Transition => "Transition",
            Category::Keyframe => "Keyframe",
            Category::Path => "Path",
            Category::Gesture => "Gesture",
            Category::Physics => "Physics",
            Category::Morph => "Morphing",
            Category::Particle => "Particles",
            Category::Sequence => "Sequence",
            Category::Advanced => "Advanced",
        }
    }

    /// One-line description shown on category cards.
    pub fn description(self) -> &'static str {
        match self {
            Category::Basic => "Learn fundamental animations like scaling, rotating, and moving views",
            Category::Spring => "Explore spring physics with natural bounce and damping effects",
            Category::Transition => "Animate views entering and leaving the screen",
            Category::Keyframe => "Build multi-step animations with precise timing control",
            Category::Path => "Move elements along circles, spirals, and custom curves",
            Category::Gesture => "Drive animations from drag, pinch, and rotation gestures",
            Category::Physics => "Simulate gravity, collisions, and pendulum motion",
            Category::Morph => "Blend smoothly between shapes, colors, and gradients",
            Category::Particle => "Scatter, rain, and burst effects built from many small elements",
            Category::Sequence => "Chain and stagger animations across multiple elements",
            Category::Advanced => "Showcase pieces that combine several techniques at once",
        }
    }

    /// Opaque icon token; the rendering collaborator maps it to real artwork.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Basic => "square.stack",
            Category::Spring => "coil",
            Category::Transition => "arrow.left.arrow.right",
            Category::Keyframe => "timeline",
            Category::Path => "point.curve",
            Category::Gesture => "hand.tap",
            Category::Physics => "atom",
            Category::Morph => "drop.degrees",
            Category::Particle => "sparkles",
            Category::Sequence => "list.number",
            Category::Advanced => "star.circle",
        }
    }

    /// Opaque gradient color tokens (start, end) for category cards.
    pub fn gradient(self) -> (&'static str, &'static str) {
        match self {
            Category::Basic => ("blue", "purple"),
            Category::Spring => ("orange", "pink"),
            Category::Transition => ("green", "mint"),
            Category::Keyframe => ("purple", "indigo"),
            Category::Path => ("red", "orange"),
            Category::Gesture => ("blue", "cyan"),
            Category::Physics => ("yellow", "orange"),
            Category::Morph => ("purple", "pink"),
            Category::Particle => ("mint", "teal"),
            Category::Sequence => ("indigo", "blue"),
            Category::Advanced => ("purple", "red"),
        }
    }

    /// Resolve an exact lowercase id back to a category.
    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Case-insensitive parse. Accepts the registry id plus the display
    /// spellings "morphing" and "particles".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morphing" => Ok(Category::Morph),
            "particles" => Ok(Category::Particle),
            other => {
                Category::from_id(other).ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        assert_eq!(Category::ALL.len(), 11);
        assert_eq!(Category::ALL[0], Category::Basic);
        assert_eq!(Category::ALL[10], Category::Advanced);

        let ids: Vec<&str> = Category::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(
            ids,
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
    fn test_id_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
            assert_eq!(category.to_string(), category.id());
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Spring".parse::<Category>().unwrap(), Category::Spring);
        assert_eq!("KEYFRAME".parse::<Category>().unwrap(), Category::Keyframe);
        assert_eq!("basic".parse::<Category>().unwrap(), Category::Basic);
    }

    #[test]
    fn test_parse_display_spellings() {
        assert_eq!("morphing".parse::<Category>().unwrap(), Category::Morph);
        assert_eq!("Particles".parse::<Category>().unwrap(), Category::Particle);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "holographic".parse::<Category>().unwrap_err();
        match err {
            CatalogError::UnknownCategory(name) => assert_eq!(name, "holographic"),
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_metadata_present_for_every_category() {
        for category in Category::ALL {
            assert!(!category.title().is_empty());
            assert!(!category.description().is_empty());
            assert!(!category.icon().is_empty());
            let (start, end) = category.gradient();
            assert!(!start.is_empty());
            assert!(!end.is_empty());
        }
    }
}
