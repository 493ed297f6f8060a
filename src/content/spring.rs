//! Spring animation examples: bounce, damping, and motion that settles
//! like a real physical system.

use crate::catalog::{Category, Example, Explanation};

/// All spring examples, in display order.
pub fn examples() -> Vec<Example> {
    vec![
        Example::new(
            Category::Spring,
            "Bouncy Scale",
            "Spring-based scaling with bounce",
            "bouncy_scale",
        )
        .with_code_preview(
            r#"let scale = animate_float_as_state(
    if pressed { 1.4 } else { 1.0 },
    spring(SpringSpec::bouncy()),
);

circle().size(90.0).scale(scale.get())"#,
        )
        .with_usage_example(
            r#"#[composable]
fn bouncy_scale_demo() {
    let pressed = use_state(|| false);
    let scale = animate_float_as_state(
        if pressed.get() { 1.4 } else { 1.0 },
        spring(SpringSpec::bouncy()),
    );

    circle()
        .size(90.0)
        .fill(Color::ORANGE)
        .scale(scale.get())
        .on_click(move || pressed.set(!pressed.get()));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Scales with a spring instead of a clock, overshooting the target and settling back like a physical object.",
            )
            .with_concept("Spring target", "The spring chases a target value; no duration is given.")
            .with_concept("Bounce", "Low damping lets the value overshoot before settling.")
            .with_tip("Springs retarget gracefully mid-flight; tweens do not")
            .with_tip("Use bouncier springs for playful surfaces, stiffer ones for tools")
            .with_tip("Never wait on a bouncy spring to finish before enabling input"),
        ),
        Example::new(
            Category::Spring,
            "Spring Movement",
            "Natural movement with spring physics",
            "spring_move",
        )
        .with_code_preview(
            r#"let x = animate_float_as_state(
    if right { 120.0 } else { -120.0 },
    spring(SpringSpec::new(0.55, 0.65)),
);

circle().size(60.0).offset(x.get(), 0.0)"#,
        )
        .with_usage_example(
            r#"#[composable]
fn spring_move_demo() {
    let right = use_state(|| false);
    let x = animate_float_as_state(
        if right.get() { 120.0 } else { -120.0 },
        spring(SpringSpec::new(0.55, 0.65)),
    );

    circle()
        .size(60.0)
        .fill(Color::PINK)
        .offset(x.get(), 0.0)
        .on_click(move || right.set(!right.get()));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Slides an element between two anchors with spring physics, so the motion accelerates and settles rather than gliding at constant speed.",
            )
            .with_concept("Response", "Roughly how long the spring takes to reach the neighborhood of the target.")
            .with_concept("Damping fraction", "Below 1.0 oscillates, at 1.0 settles without overshoot.")
            .with_tip("Positional springs hide latency well because they absorb retargets")
            .with_tip("Start from response 0.5, damping 0.7 and adjust by feel"),
        ),
        Example::new(
            Category::Spring,
            "Bouncy Rotation",
            "Rotation with spring bounce effect",
            "bouncy_rotation",
        )
        .with_code_preview(
            r#"let angle = animate_float_as_state(
    if turned { 180.0 } else { 0.0 },
    spring(SpringSpec::new(0.4, 0.35)),
);

rounded_rect(14.0).size(90.0).rotate(angle.get())"#,
        )
        .with_usage_example(
            r#"#[composable]
fn bouncy_rotation_demo() {
    let turned = use_state(|| false);
    let angle = animate_float_as_state(
        if turned.get() { 180.0 } else { 0.0 },
        spring(SpringSpec::new(0.4, 0.35)),
    );

    rounded_rect(14.0)
        .size(90.0)
        .fill(Color::PURPLE)
        .rotate(angle.get())
        .on_click(move || turned.set(!turned.get()));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Rotates a half turn with heavy overshoot, wobbling past 180 degrees and back before settling.",
            )
            .with_concept("Angular spring", "Angles interpolate like any scalar; the spring does not know it is rotating.")
            .with_concept("Underdamping", "Damping well below 1.0 produces several visible oscillations.")
            .with_tip("Heavy wobble suits toggles and dials, not content layout")
            .with_tip("Keep underdamped rotations under a half turn or the wobble disorients"),
        ),
        Example::new(
            Category::Spring,
            "Spring Chain",
            "Chained spring animations",
            "spring_chain",
        )
        .with_code_preview(
            r#"column().spacing(10.0).children((0..4).map(|i| {
    let x = animate_float_as_state(
        if shifted { 100.0 } else { 0.0 },
        spring(SpringSpec::bouncy()).with_delay(i * 80),
    );
    circle().size(32.0).offset(x.get(), 0.0)
}))"#,
        )
        .with_usage_example(
            r#"#[composable]
fn spring_chain_demo() {
    let shifted = use_state(|| false);

    column().spacing(10.0).children((0..4).map(|i| {
        let x = animate_float_as_state(
            if shifted.get() { 100.0 } else { 0.0 },
            spring(SpringSpec::bouncy()).with_delay(i * 80),
        );
        circle()
            .size(32.0)
            .fill(Color::ORANGE)
            .offset(x.get(), 0.0)
    }))
    .on_click(move || shifted.set(!shifted.get()));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Moves a column of circles with the same spring but staggered start times, so the group trails like links in a chain.",
            )
            .with_concept("Stagger", "A fixed delay per element turns parallel motion into a wave.")
            .with_concept("Shared target", "Every element chases the same value; only timing differs.")
            .with_tip("Delays of 60-100ms per element read clearly without feeling slow")
            .with_tip("Keep the stagger shorter than the spring settle time so motion overlaps")
            .with_tip("Cap chains around six elements; longer tails feel sluggish"),
        ),
        Example::new(
            Category::Spring,
            "Elastic Snap",
            "Elastic snapping with spring physics",
            "elastic_snap",
        )
        .with_code_preview(
            r#"let offset = use_animatable((0.0, 0.0));

circle()
    .size(80.0)
    .offset(offset.get())
    .on_drag(|delta| offset.shift_by(delta))
    .on_release(|| offset.animate_to((0.0, 0.0), spring(SpringSpec::stiff())))"#,
        )
        .with_usage_example(
            r#"#[composable]
fn elastic_snap_demo() {
    let offset = use_animatable((0.0, 0.0));

    circle()
        .size(80.0)
        .fill(Color::RED)
        .offset(offset.get())
        .on_drag(move |delta| offset.shift_by(delta))
        .on_release(move || {
            offset.animate_to((0.0, 0.0), spring(SpringSpec::stiff()));
        });
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Lets the user drag an element freely, then snaps it home with a stiff spring the moment they let go.",
            )
            .with_concept("Animatable value", "Holds a value that can be both set directly and animated.")
            .with_concept("Release handoff", "The drag writes positions; the release starts a spring from the last one.")
            .with_tip("Seed the spring with the drag's release velocity when available")
            .with_tip("Stiff springs suit snap-home gestures; bouncy ones fight the user"),
        ),
    ]
}
