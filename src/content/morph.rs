//! Morphing examples: smooth blends between shapes, colors, and gradients.

use crate::catalog::{Category, Example, Explanation};

/// All morphing examples, in display order.
pub fn examples() -> Vec<Example> {
    vec![
        circle_to_square(),
        color_blend(),
        gradient_morph(),
        path_morph(),
    ]
}

fn circle_to_square() -> Example {
    Example::new(
        Category::Morph,
        "Circle to Square",
        "Shape morphing animation",
        "circle_to_square",
    )
    .with_code_preview(
        r#"let progress = animate_float_as_state(
    if squared { 1.0 } else { 0.0 },
    tween(500, Easing::EaseInOut),
);

rounded_rect(50.0 - progress.get() * 42.0)
    .size(100.0)
    .rotate(progress.get() * 90.0)"#,
    )
    .with_usage_example(
        r#"#[composable]
fn circle_to_square_demo() {
    let squared = use_state(|| false);
    let progress = animate_float_as_state(
        if squared.get() { 1.0 } else { 0.0 },
        tween(500, Easing::EaseInOut),
    );

    rounded_rect(50.0 - progress.get() * 42.0)
        .size(100.0)
        .fill(Color::PURPLE)
        .rotate(progress.get() * 90.0)
        .on_click(move || squared.set(!squared.get()));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Morphs a circle into a square by collapsing the corner radius, adding a quarter turn so the change of identity feels deliberate.",
        )
        .with_concept("Progress value", "One 0..1 value feeds every derived property of the morph.")
        .with_concept("Radius interpolation", "Half the side length means circle; near zero means square.")
        .with_tip("Derive all morph properties from one progress value to keep them synchronized")
        .with_tip("Leave a couple of points of radius at the square end; dead-sharp corners flicker"),
    )
}

fn color_blend() -> Example {
    Example::new(
        Category::Morph,
        "Color Blend",
        "Smooth color blending",
        "color_blend",
    )
    .with_code_preview(
        r#"let t = animate_float_as_state(
    1.0,
    infinite_repeat(tween(2500, Easing::EaseInOut), RepeatMode::Reverse),
);

circle().size(110.0).fill(Color::BLUE.mix(Color::PINK, t.get()))"#,
    )
    .with_usage_example(
        r#"#[composable]
fn color_blend_demo() {
    let t = animate_float_as_state(
        1.0,
        infinite_repeat(tween(2500, Easing::EaseInOut), RepeatMode::Reverse),
    );

    circle()
        .size(110.0)
        .fill(Color::BLUE.mix(Color::PINK, t.get()))
        .scale(1.0 + t.get() * 0.1);
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Breathes a fill back and forth between two hues by mixing them with an animated fraction rather than retargeting a color animation.",
        )
        .with_concept("Color mixing", "mix interpolates channels by a fraction the caller controls.")
        .with_concept("Progress reuse", "The same fraction nudges the scale, binding the effects together.")
        .with_tip("Owning the mix fraction lets several properties share one clock")
        .with_tip("Pick hue pairs that do not pass through gray when mixed"),
    )
}

fn gradient_morph() -> Example {
    Example::new(
        Category::Morph,
        "Gradient Morph",
        "Animated gradient transitions",
        "gradient_morph",
    )
    .with_code_preview(
        r#"let t = animate_float_as_state(
    1.0,
    infinite_repeat(tween(4000, Easing::EaseInOut), RepeatMode::Reverse),
);

rounded_rect(24.0).size(220.0, 140.0).fill(linear_gradient(
    Color::PURPLE.mix(Color::ORANGE, t.get()),
    Color::BLUE.mix(Color::PINK, t.get()),
    Angle::degrees(45.0 + t.get() * 90.0),
))"#,
    )
    .with_usage_example(
        r#"#[composable]
fn gradient_morph_demo() {
    let t = animate_float_as_state(
        1.0,
        infinite_repeat(tween(4000, Easing::EaseInOut), RepeatMode::Reverse),
    );

    rounded_rect(24.0)
        .size(220.0, 140.0)
        .fill(linear_gradient(
            Color::PURPLE.mix(Color::ORANGE, t.get()),
            Color::BLUE.mix(Color::PINK, t.get()),
            Angle::degrees(45.0 + t.get() * 90.0),
        ));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Drifts both gradient stops through different hue pairs while the gradient axis slowly rotates, so the surface never looks static.",
        )
        .with_concept("Stop interpolation", "Each gradient stop is mixed independently from its own pair.")
        .with_concept("Axis rotation", "Animating the angle moves highlights across the surface.")
        .with_tip("Rotate the axis slower than the colors change; together at full speed they churn")
        .with_tip("Long cycles, four seconds and up, suit ambient background motion"),
    )
}

fn path_morph() -> Example {
    Example::new(
        Category::Morph,
        "Path Morph",
        "Path shape transformation",
        "path_morph",
    )
    .with_code_preview(
        r#"let progress = animate_float_as_state(
    if star { 1.0 } else { 0.0 },
    spring(SpringSpec::new(0.6, 0.7)),
);

morph_path(&polygon(5), &star_points(5), progress.get())
    .fill(Color::PINK)"#,
    )
    .with_usage_example(
        r#"#[composable]
fn path_morph_demo() {
    let star = use_state(|| false);
    let progress = animate_float_as_state(
        if star.get() { 1.0 } else { 0.0 },
        spring(SpringSpec::new(0.6, 0.7)),
    );

    morph_path(&polygon(5), &star_points(5), progress.get())
        .size(140.0)
        .fill(Color::PINK)
        .on_click(move || star.set(!star.get()));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Morphs a pentagon into a five-pointed star by interpolating matched vertex lists with a softly sprung progress value.",
        )
        .with_concept("Point correspondence", "Both paths are sampled to the same vertex count before blending.")
        .with_concept("Vertex interpolation", "Each point travels a straight line to its partner.")
        .with_tip("Align the two paths' start points or the morph twists")
        .with_tip("Resample both shapes to identical point counts; mismatches tear the outline")
        .with_tip("A touch of spring makes geometry morphs feel alive without distorting them"),
    )
}
