//! Path examples: motion along circles, spirals, and curves.

use crate::catalog::{Category, Example, Explanation};

/// All path examples, in display order.
pub fn examples() -> Vec<Example> {
    vec![
        Example::new(
            Category::Path,
            "Circle Path",
            "Movement along a circular path",
            "circle_path",
        )
        .with_code_preview(
            r#"let angle = animate_float_as_state(
    std::f32::consts::TAU,
    infinite_repeat(tween(3000, Easing::Linear), RepeatMode::Restart),
);

circle()
    .size(24.0)
    .offset(angle.get().cos() * 80.0, angle.get().sin() * 80.0)"#,
        )
        .with_usage_example(
            r#"#[composable]
fn circle_path_demo() {
    let angle = animate_float_as_state(
        std::f32::consts::TAU,
        infinite_repeat(tween(3000, Easing::Linear), RepeatMode::Restart),
    );

    zstack().children((
        circle().size(160.0).stroke(Color::GRAY, 1.0),
        circle()
            .size(24.0)
            .fill(Color::RED)
            .offset(angle.get().cos() * 80.0, angle.get().sin() * 80.0),
    ));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Orbits a dot around a center by animating an angle and projecting it through cosine and sine each frame.",
            )
            .with_concept("Parametric position", "The path is a function of one animated parameter.")
            .with_concept("Angular velocity", "Linear easing on the angle gives constant orbital speed.")
            .with_tip("Animate the angle, never x and y separately, or the orbit warps")
            .with_tip("A full TAU sweep makes the loop restart invisible"),
        ),
        Example::new(
            Category::Path,
            "Figure Eight",
            "Figure-eight motion pattern",
            "figure_eight",
        )
        .with_code_preview(
            r#"let t = animate_float_as_state(
    std::f32::consts::TAU,
    infinite_repeat(tween(4000, Easing::Linear), RepeatMode::Restart),
);

circle()
    .size(24.0)
    .offset(t.get().sin() * 90.0, (t.get() * 2.0).sin() * 45.0)"#,
        )
        .with_usage_example(
            r#"#[composable]
fn figure_eight_demo() {
    let t = animate_float_as_state(
        std::f32::consts::TAU,
        infinite_repeat(tween(4000, Easing::Linear), RepeatMode::Restart),
    );

    circle()
        .size(24.0)
        .fill(Color::ORANGE)
        .offset(t.get().sin() * 90.0, (t.get() * 2.0).sin() * 45.0);
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Traces a Lissajous figure eight by running the vertical sine at twice the horizontal frequency.",
            )
            .with_concept("Lissajous curve", "Two sines with a frequency ratio draw closed figures.")
            .with_concept("Frequency ratio", "A 1:2 ratio produces the eight; other ratios give knots.")
            .with_tip("Keep the ratio an exact integer or the figure slowly precesses")
            .with_tip("Halve the vertical amplitude so the eight fits a wide layout"),
        ),
        Example::new(
            Category::Path,
            "Spiral Path",
            "Spiral movement animation",
            "spiral_path",
        )
        .with_code_preview(
            r#"let t = animate_float_as_state(
    1.0,
    infinite_repeat(tween(3600, Easing::EaseInOut), RepeatMode::Reverse),
);
let angle = t.get() * 3.0 * std::f32::consts::TAU;
let radius = t.get() * 90.0;

circle().size(18.0).offset(angle.cos() * radius, angle.sin() * radius)"#,
        )
        .with_usage_example(
            r#"#[composable]
fn spiral_path_demo() {
    let t = animate_float_as_state(
        1.0,
        infinite_repeat(tween(3600, Easing::EaseInOut), RepeatMode::Reverse),
    );
    let angle = t.get() * 3.0 * std::f32::consts::TAU;
    let radius = t.get() * 90.0;

    circle()
        .size(18.0)
        .fill(Color::PURPLE)
        .offset(angle.cos() * radius, angle.sin() * radius)
        .opacity(0.3 + t.get() * 0.7);
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Winds a dot outward along an Archimedean spiral and back in, by scaling the orbit radius with the same parameter that drives the angle.",
            )
            .with_concept("Coupled radius", "Radius grows with the parameter while the angle keeps turning.")
            .with_concept("Reverse repeat", "Playing the tween backwards retraces the spiral inward.")
            .with_tip("Three turns is enough; more makes the center a blur")
            .with_tip("Fade the dot near the center where the spiral gets dense"),
        ),
        Example::new(
            Category::Path,
            "Wave Path",
            "Wave-like path animation",
            "wave_path",
        )
        .with_code_preview(
            r#"let x = animate_float_as_state(
    160.0,
    infinite_repeat(tween(2400, Easing::Linear), RepeatMode::Reverse),
);

circle()
    .size(22.0)
    .offset(x.get() - 80.0, (x.get() * 0.05).sin() * 36.0)"#,
        )
        .with_usage_example(
            r#"#[composable]
fn wave_path_demo() {
    let x = animate_float_as_state(
        160.0,
        infinite_repeat(tween(2400, Easing::Linear), RepeatMode::Reverse),
    );

    zstack().children((
        wave_line(36.0, 0.05).stroke(Color::GRAY, 1.0),
        circle()
            .size(22.0)
            .fill(Color::CYAN)
            .offset(x.get() - 80.0, (x.get() * 0.05).sin() * 36.0),
    ));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Slides a dot left and right while its height follows a sine of its own x position, so it surfs a stationary wave.",
            )
            .with_concept("Derived coordinate", "Only x is animated; y is computed from it every frame.")
            .with_concept("Spatial frequency", "The 0.05 factor sets how many crests fit across the travel.")
            .with_tip("Deriving y from x keeps the dot glued to the drawn wave")
            .with_tip("Reverse repeat gives a back-and-forth patrol without a jump"),
        ),
    ]
}
