//! Gesture examples: animations driven by drag, rotation, and pinch input.

use crate::catalog::{Category, Example, Explanation};

/// All gesture examples, in display order.
pub fn examples() -> Vec<Example> {
    vec![
        Example::new(
            Category::Gesture,
            "Drag & Scale",
            "Interactive drag with scaling",
            "drag_scale",
        )
        .with_code_preview(
            r#"let offset = use_animatable((0.0, 0.0));
let dragging = use_state(|| false);

circle()
    .size(90.0)
    .offset(offset.get())
    .scale(if dragging.get() { 1.2 } else { 1.0 })
    .on_drag_start(|| dragging.set(true))
    .on_drag(|delta| offset.shift_by(delta))
    .on_release(|| {
        dragging.set(false);
        offset.animate_to((0.0, 0.0), spring(SpringSpec::bouncy()));
    })"#,
        )
        .with_usage_example(
            r#"#[composable]
fn drag_scale_demo() {
    let offset = use_animatable((0.0, 0.0));
    let dragging = use_state(|| false);
    let scale = animate_float_as_state(
        if dragging.get() { 1.2 } else { 1.0 },
        spring(SpringSpec::stiff()),
    );

    circle()
        .size(90.0)
        .fill(Color::BLUE)
        .offset(offset.get())
        .scale(scale.get())
        .on_drag_start(move || dragging.set(true))
        .on_drag(move |delta| offset.shift_by(delta))
        .on_release(move || {
            dragging.set(false);
            offset.animate_to((0.0, 0.0), spring(SpringSpec::bouncy()));
        });
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Tracks the finger directly during a drag, swells the element to acknowledge pickup, and springs everything home on release.",
            )
            .with_concept("Direct manipulation", "While the finger is down, position is written, not animated.")
            .with_concept("Pickup cue", "A small scale-up tells the user the element is grabbed.")
            .with_concept("Release animation", "Springs take over only when the gesture ends.")
            .with_tip("Never animate position while the finger is down; track it exactly")
            .with_tip("Feed release velocity into the spring for a natural throw"),
        ),
        Example::new(
            Category::Gesture,
            "Rotation Gesture",
            "Two-finger rotation with snap-back",
            "rotation_gesture",
        )
        .with_code_preview(
            r#"let angle = use_animatable(0.0);

rounded_rect(18.0)
    .size(140.0)
    .rotate(angle.get())
    .on_rotate(|delta| angle.shift_by(delta))
    .on_release(|| angle.animate_to(0.0, spring(SpringSpec::new(0.5, 0.5))))"#,
        )
        .with_usage_example(
            r#"#[composable]
fn rotation_gesture_demo() {
    let angle = use_animatable(0.0);

    rounded_rect(18.0)
        .size(140.0)
        .fill(Color::CYAN)
        .rotate(angle.get())
        .on_rotate(move |delta| angle.shift_by(delta))
        .on_release(move || {
            angle.animate_to(0.0, spring(SpringSpec::new(0.5, 0.5)));
        });
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Lets two fingers twist an element in place, then unwinds it back to level with a mildly bouncy spring.",
            )
            .with_concept("Gesture delta", "The handler receives angle changes, which accumulate in the animatable.")
            .with_concept("Snap-back", "Releasing retargets the accumulated angle to zero.")
            .with_tip("Accumulate deltas instead of storing absolute angles to survive regrips")
            .with_tip("Unwind via the shortest direction when the twist exceeds a half turn"),
        ),
        Example::new(
            Category::Gesture,
            "Multi-Touch Transform",
            "Pinch, rotate, and drag combined",
            "multi_touch",
        )
        .with_code_preview(
            r#"let transform = use_animatable(Transform::IDENTITY);

image("photo")
    .transform(transform.get())
    .on_pinch(|scale| transform.scale_by(scale))
    .on_rotate(|angle| transform.rotate_by(angle))
    .on_drag(|delta| transform.translate_by(delta))
    .on_release(|| transform.animate_to(Transform::IDENTITY, spring(SpringSpec::bouncy())))"#,
        )
        .with_usage_example(
            r#"#[composable]
fn multi_touch_demo() {
    let transform = use_animatable(Transform::IDENTITY);

    rounded_rect(20.0)
        .size(180.0, 120.0)
        .fill(Color::PURPLE)
        .transform(transform.get())
        .on_pinch(move |scale| transform.scale_by(scale))
        .on_rotate(move |angle| transform.rotate_by(angle))
        .on_drag(move |delta| transform.translate_by(delta))
        .on_release(move || {
            transform.animate_to(Transform::IDENTITY, spring(SpringSpec::bouncy()));
        });
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Combines pinch, twist, and drag into one accumulated transform, then springs the whole matrix back to identity at once.",
            )
            .with_concept("Composite transform", "Scale, rotation, and translation live in one animatable value.")
            .with_concept("Simultaneous gestures", "All three recognizers feed the same transform concurrently.")
            .with_tip("Animate the composed transform home as one unit, not per channel")
            .with_tip("Clamp scale during the gesture so elements cannot vanish or explode")
            .with_tip("Pivot scaling and rotation around the gesture centroid, not the view center"),
        ),
    ]
}
