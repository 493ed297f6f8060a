//! Basic animation examples: scale, rotation, opacity, and the simple
//! effects that introduce the animation system.

use crate::catalog::{Category, Example, Explanation};

/// All basic examples, in display order.
pub fn examples() -> Vec<Example> {
    vec![
        scale_and_fade(),
        rotate_and_scale(),
        color_morph(),
        flip_3d(),
        pulse_effect(),
        wave_motion(),
        shake_effect(),
        morphing_shape(),
    ]
}

fn scale_and_fade() -> Example {
    Example::new(
        Category::Basic,
        "Scale & Fade",
        "Simple scaling and opacity animation",
        "scale_fade",
    )
    .with_code_preview(
        r#"let scale = animate_float_as_state(if active { 1.5 } else { 1.0 }, tween(300, Easing::EaseInOut));
let alpha = animate_float_as_state(if active { 0.4 } else { 1.0 }, tween(300, Easing::EaseInOut));

circle().size(100.0).scale(scale.get()).opacity(alpha.get())"#,
    )
    .with_usage_example(
        r#"#[composable]
fn scale_fade_demo() {
    let active = use_state(|| false);
    let scale = animate_float_as_state(
        if active.get() { 1.5 } else { 1.0 },
        tween(300, Easing::EaseInOut),
    );
    let alpha = animate_float_as_state(
        if active.get() { 0.4 } else { 1.0 },
        tween(300, Easing::EaseInOut),
    );

    circle()
        .size(100.0)
        .fill(Color::BLUE)
        .scale(scale.get())
        .opacity(alpha.get())
        .on_click(move || active.set(!active.get()));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Grows and fades a circle at the same time, driving both properties from one timing curve so they stay in lockstep.",
        )
        .with_concept("Scale", "Resizes the element around its center without touching layout.")
        .with_concept("Opacity", "Fades the element in place; neighbors do not move.")
        .with_concept("Shared timing", "Both values animate over the same 300ms curve.")
        .with_tip("Drive related properties from the same spec so they never drift")
        .with_tip("Ease-in-out reads smoother than linear for emphasis effects")
        .with_tip("Keep scale factors modest; jumps past 2x feel abrupt"),
    )
}

fn rotate_and_scale() -> Example {
    Example::new(
        Category::Basic,
        "Rotate & Scale",
        "Combined rotation and scaling effect",
        "rotate_scale",
    )
    .with_code_preview(
        r#"let angle = animate_float_as_state(if spun { 360.0 } else { 0.0 }, tween(600, Easing::EaseOut));
let scale = animate_float_as_state(if spun { 1.3 } else { 1.0 }, tween(600, Easing::EaseOut));

rounded_rect(20.0).size(90.0).rotate(angle.get()).scale(scale.get())"#,
    )
    .with_usage_example(
        r#"#[composable]
fn rotate_scale_demo() {
    let spun = use_state(|| false);
    let angle = animate_float_as_state(
        if spun.get() { 360.0 } else { 0.0 },
        tween(600, Easing::EaseOut),
    );
    let scale = animate_float_as_state(
        if spun.get() { 1.3 } else { 1.0 },
        tween(600, Easing::EaseOut),
    );

    rounded_rect(20.0)
        .size(90.0)
        .fill(Color::PURPLE)
        .rotate(angle.get())
        .scale(scale.get())
        .on_click(move || spun.set(!spun.get()));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Spins an element through a full turn while it grows, showing how transforms compose when several run at once.",
        )
        .with_concept("Rotation", "Angle in degrees; 360 brings the element back to its start pose.")
        .with_concept("Transform order", "Rotation and scale apply around the same anchor point.")
        .with_tip("Animate to 360 and snap back to 0 off-screen to allow repeat spins")
        .with_tip("Ease-out keeps the end of a long spin from feeling mechanical"),
    )
}

fn color_morph() -> Example {
    Example::new(
        Category::Basic,
        "Color Morph",
        "Smooth color transition effect",
        "color_morph",
    )
    .with_code_preview(
        r#"let color = animate_color_as_state(
    if warm { Color::ORANGE } else { Color::TEAL },
    tween(500, Easing::EaseInOut),
);

circle().size(100.0).fill(color.get())"#,
    )
    .with_usage_example(
        r#"#[composable]
fn color_morph_demo() {
    let warm = use_state(|| false);
    let color = animate_color_as_state(
        if warm.get() { Color::ORANGE } else { Color::TEAL },
        tween(500, Easing::EaseInOut),
    );

    circle()
        .size(100.0)
        .fill(color.get())
        .on_click(move || warm.set(!warm.get()));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Blends a fill smoothly between two colors instead of swapping it, interpolating each channel over the duration.",
        )
        .with_concept("Color interpolation", "Each channel is animated separately and recombined per frame.")
        .with_concept("State-driven target", "The animation retargets whenever the state flips.")
        .with_tip("Interpolate in a perceptual color space when hues are far apart")
        .with_tip("Avoid blending between colors with very different brightness in one hop")
        .with_tip("500ms is a good ceiling for pure color changes"),
    )
}

fn flip_3d() -> Example {
    Example::new(
        Category::Basic,
        "3D Flip",
        "Three-dimensional rotation effect",
        "flip_3d",
    )
    .with_code_preview(
        r#"let angle = animate_float_as_state(if flipped { 180.0 } else { 0.0 }, tween(700, Easing::EaseInOut));

rounded_rect(16.0).size(120.0, 80.0).rotate_y(angle.get()).perspective(600.0)"#,
    )
    .with_usage_example(
        r#"#[composable]
fn flip_3d_demo() {
    let flipped = use_state(|| false);
    let angle = animate_float_as_state(
        if flipped.get() { 180.0 } else { 0.0 },
        tween(700, Easing::EaseInOut),
    );

    rounded_rect(16.0)
        .size(120.0, 80.0)
        .fill(Color::INDIGO)
        .rotate_y(angle.get())
        .perspective(600.0)
        .on_click(move || flipped.set(!flipped.get()));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Rotates a card around its vertical axis with a perspective projection, so the edges foreshorten like a real flip.",
        )
        .with_concept("Axis rotation", "rotate_y turns the element through depth rather than in the plane.")
        .with_concept("Perspective", "A smaller perspective distance exaggerates the 3D effect.")
        .with_tip("Swap the card face at 90 degrees, when the element is edge-on")
        .with_tip("Perspective values around 500-800 look natural for card-sized elements"),
    )
}

fn pulse_effect() -> Example {
    Example::new(
        Category::Basic,
        "Pulse Effect",
        "Pulsating animation with repeat",
        "pulse",
    )
    .with_code_preview(
        r#"let scale = animate_float_as_state(
    1.2,
    infinite_repeat(tween(800, Easing::EaseInOut), RepeatMode::Reverse),
);

circle().size(80.0).scale(scale.get())"#,
    )
    .with_usage_example(
        r#"#[composable]
fn pulse_demo() {
    let scale = animate_float_as_state(
        1.2,
        infinite_repeat(tween(800, Easing::EaseInOut), RepeatMode::Reverse),
    );
    let alpha = animate_float_as_state(
        0.6,
        infinite_repeat(tween(800, Easing::EaseInOut), RepeatMode::Reverse),
    );

    circle()
        .size(80.0)
        .fill(Color::RED)
        .scale(scale.get())
        .opacity(alpha.get());
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Breathes an element in and out forever by reversing a short tween each cycle, a staple for live indicators.",
        )
        .with_concept("Infinite repeat", "The spec replays automatically; no state toggles needed.")
        .with_concept("Reverse mode", "Each cycle plays backwards, avoiding a visible snap.")
        .with_tip("Keep pulse travel small; it signals liveness, not emphasis")
        .with_tip("Reverse repeat avoids the jump cut that restart repeat produces")
        .with_tip("Pause infinite animations when the element scrolls off-screen"),
    )
}

fn wave_motion() -> Example {
    Example::new(
        Category::Basic,
        "Wave Motion",
        "Smooth wave-like movement",
        "wave_motion",
    )
    .with_code_preview(
        r#"let phase = animate_float_as_state(
    std::f32::consts::TAU,
    infinite_repeat(tween(2000, Easing::Linear), RepeatMode::Restart),
);

circle().size(40.0).offset(0.0, (phase.get().sin()) * 30.0)"#,
    )
    .with_usage_example(
        r#"#[composable]
fn wave_motion_demo() {
    let phase = animate_float_as_state(
        std::f32::consts::TAU,
        infinite_repeat(tween(2000, Easing::Linear), RepeatMode::Restart),
    );

    row().spacing(12.0).children((0..5).map(|i| {
        let lag = i as f32 * 0.6;
        circle()
            .size(40.0)
            .fill(Color::CYAN)
            .offset(0.0, (phase.get() + lag).sin() * 30.0)
    }));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Drives vertical offsets from a sine of an animated phase, so a row of circles rolls like a standing wave.",
        )
        .with_concept("Phase animation", "Animate one angle linearly and derive positions from it.")
        .with_concept("Per-element lag", "Offsetting the phase per element turns a bounce into a wave.")
        .with_tip("Linear easing is correct here; the sine supplies the curve")
        .with_tip("Animate a full turn so the loop point is invisible"),
    )
}

fn shake_effect() -> Example {
    Example::new(
        Category::Basic,
        "Shake Effect",
        "Shaking animation for attention",
        "shake",
    )
    .with_code_preview(
        r#"let shift = animate_float_as_state(
    if shaking { 1.0 } else { 0.0 },
    keyframes(400, |k| {
        k.value_at(50, -1.0);
        k.value_at(150, 1.0);
        k.value_at(250, -0.6);
        k.value_at(350, 0.3);
    }),
);

rounded_rect(12.0).offset(shift.get() * 12.0, 0.0)"#,
    )
    .with_usage_example(
        r#"#[composable]
fn shake_demo() {
    let shaking = use_state(|| false);
    let shift = animate_float_as_state(
        if shaking.get() { 1.0 } else { 0.0 },
        keyframes(400, |k| {
            k.value_at(50, -1.0);
            k.value_at(150, 1.0);
            k.value_at(250, -0.6);
            k.value_at(350, 0.3);
        }),
    );

    rounded_rect(12.0)
        .size(140.0, 48.0)
        .fill(Color::ORANGE)
        .offset(shift.get() * 12.0, 0.0)
        .on_click(move || shaking.set(!shaking.get()));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Rattles an element side to side with decaying keyframe offsets, the classic cue for invalid input.",
        )
        .with_concept("Keyframed offsets", "Each keyframe pins the horizontal shift at a moment in time.")
        .with_concept("Decay", "Later keyframes shrink toward zero so the shake dies out naturally.")
        .with_tip("End exactly at zero or the element parks off-center")
        .with_tip("Three or four swings is plenty; longer shakes read as broken")
        .with_tip("Pair the shake with an error color change for accessibility"),
    )
}

fn morphing_shape() -> Example {
    Example::new(
        Category::Basic,
        "Morphing Shape",
        "Shape transformation animation",
        "morph_shape",
    )
    .with_code_preview(
        r#"let radius = animate_float_as_state(
    if round { 50.0 } else { 8.0 },
    tween(450, Easing::EaseInOut),
);

rounded_rect(radius.get()).size(100.0)"#,
    )
    .with_usage_example(
        r#"#[composable]
fn morphing_shape_demo() {
    let round = use_state(|| true);
    let radius = animate_float_as_state(
        if round.get() { 50.0 } else { 8.0 },
        tween(450, Easing::EaseInOut),
    );

    rounded_rect(radius.get())
        .size(100.0)
        .fill(Color::GREEN)
        .on_click(move || round.set(!round.get()));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Morphs a square into a circle by animating the corner radius, the cheapest shape morph there is.",
        )
        .with_concept("Corner radius", "At half the side length a rounded rect becomes a circle.")
        .with_concept("Parameter morphing", "Animating one shape parameter beats cross-fading two shapes.")
        .with_tip("Prefer a single animatable parameter over swapping shape types")
        .with_tip("Scale the radius with the element so the morph survives resizing"),
    )
}
