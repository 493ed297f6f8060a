//! Keyframe examples: multi-step timelines with explicit timing.

use crate::catalog::{Category, Example, Explanation};

/// All keyframe examples, in display order.
pub fn examples() -> Vec<Example> {
    vec![
        Example::new(
            Category::Keyframe,
            "Loading Sequence",
            "Multi-step loading animation",
            "loading_bounce",
        )
        .with_code_preview(
            r#"let y = animate_float_as_state(
    0.0,
    infinite_repeat(
        keyframes(1200, |k| {
            k.value_at(300, -26.0).easing(Easing::EaseOut);
            k.value_at(600, 0.0).easing(Easing::EaseIn);
            k.value_at(700, -8.0);
            k.value_at(800, 0.0);
        }),
        RepeatMode::Restart,
    ),
);

circle().size(48.0).offset(0.0, y.get())"#,
        )
        .with_usage_example(
            r#"#[composable]
fn loading_bounce_demo() {
    let y = animate_float_as_state(
        0.0,
        infinite_repeat(
            keyframes(1200, |k| {
                k.value_at(300, -26.0).easing(Easing::EaseOut);
                k.value_at(600, 0.0).easing(Easing::EaseIn);
                k.value_at(700, -8.0);
                k.value_at(800, 0.0);
            }),
            RepeatMode::Restart,
        ),
    );
    let squash = animate_float_as_state(
        1.0,
        infinite_repeat(
            keyframes(1200, |k| {
                k.value_at(600, 0.82);
                k.value_at(700, 1.0);
            }),
            RepeatMode::Restart,
        ),
    );

    circle()
        .size(48.0)
        .fill(Color::INDIGO)
        .offset(0.0, y.get())
        .scale_y(squash.get());
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Plays a bounce, a landing squash, and a small rebound on one looping timeline, with each beat pinned to a millisecond.",
            )
            .with_concept("Keyframe timeline", "Values are pinned at absolute times inside a fixed duration.")
            .with_concept("Per-segment easing", "Each leg between keyframes can use its own curve.")
            .with_concept("Parallel timelines", "Offset and squash run on separate tracks of equal length.")
            .with_tip("Keep parallel timelines the same total duration or loops drift apart")
            .with_tip("Ease-out going up and ease-in coming down mimics gravity")
            .with_tip("Leave dead time at the end of the loop so the cycle can breathe"),
        ),
        Example::new(
            Category::Keyframe,
            "Loading Dots",
            "Animated loading dots",
            "loading_dots",
        )
        .with_code_preview(
            r#"row().spacing(10.0).children((0..3).map(|i| {
    let scale = animate_float_as_state(
        1.0,
        infinite_repeat(
            keyframes(900, |k| {
                k.value_at(150, 1.5);
                k.value_at(300, 1.0);
            })
            .with_delay(i * 150),
            RepeatMode::Restart,
        ),
    );
    circle().size(16.0).scale(scale.get())
}))"#,
        )
        .with_usage_example(
            r#"#[composable]
fn loading_dots_demo() {
    row().spacing(10.0).children((0..3).map(|i| {
        let scale = animate_float_as_state(
            1.0,
            infinite_repeat(
                keyframes(900, |k| {
                    k.value_at(150, 1.5);
                    k.value_at(300, 1.0);
                })
                .with_delay(i * 150),
                RepeatMode::Restart,
            ),
        );
        circle()
            .size(16.0)
            .fill(Color::GRAY)
            .scale(scale.get())
    }));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Swells three dots one after another on a shared loop, the typing-indicator pattern seen in every chat app.",
            )
            .with_concept("Start delay", "Each dot runs the same timeline shifted by a fixed offset.")
            .with_concept("Quiet tail", "The timeline is mostly idle so only one dot is swollen at a time.")
            .with_tip("Make the delay a clean fraction of the cycle so the loop tiles seamlessly")
            .with_tip("Scale changes read better than opacity changes at dot sizes"),
        ),
        Example::new(
            Category::Keyframe,
            "Heartbeat",
            "Heartbeat with double pulse",
            "heartbeat",
        )
        .with_code_preview(
            r#"let scale = animate_float_as_state(
    1.0,
    infinite_repeat(
        keyframes(1000, |k| {
            k.value_at(120, 1.22);
            k.value_at(240, 1.0);
            k.value_at(360, 1.14);
            k.value_at(480, 1.0);
        }),
        RepeatMode::Restart,
    ),
);

heart_shape().size(72.0).scale(scale.get())"#,
        )
        .with_usage_example(
            r#"#[composable]
fn heartbeat_demo() {
    let scale = animate_float_as_state(
        1.0,
        infinite_repeat(
            keyframes(1000, |k| {
                k.value_at(120, 1.22);
                k.value_at(240, 1.0);
                k.value_at(360, 1.14);
                k.value_at(480, 1.0);
            }),
            RepeatMode::Restart,
        ),
    );

    heart_shape()
        .size(72.0)
        .fill(Color::RED)
        .scale(scale.get());
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Reproduces the lub-dub of a heartbeat with two unequal pulses and a long rest, impossible to phrase as a single tween.",
            )
            .with_concept("Double beat", "Two bumps of different heights inside one cycle.")
            .with_concept("Rest segment", "The back half of the timeline holds at 1.0, setting the rhythm.")
            .with_tip("The second pulse should be visibly smaller than the first")
            .with_tip("Tune the rest length, not the pulse speed, to change perceived heart rate"),
        ),
        Example::new(
            Category::Keyframe,
            "Typing Cursor",
            "Blinking cursor animation",
            "typing_cursor",
        )
        .with_code_preview(
            r#"let alpha = animate_float_as_state(
    1.0,
    infinite_repeat(
        keyframes(1000, |k| {
            k.value_at(450, 1.0);
            k.value_at(500, 0.0);
            k.value_at(950, 0.0);
        }),
        RepeatMode::Restart,
    ),
);

rect().size(3.0, 28.0).opacity(alpha.get())"#,
        )
        .with_usage_example(
            r#"#[composable]
fn typing_cursor_demo() {
    let alpha = animate_float_as_state(
        1.0,
        infinite_repeat(
            keyframes(1000, |k| {
                k.value_at(450, 1.0);
                k.value_at(500, 0.0);
                k.value_at(950, 0.0);
            }),
            RepeatMode::Restart,
        ),
    );

    row().spacing(2.0).children((
        text("animdex"),
        rect()
            .size(3.0, 28.0)
            .fill(Color::BLUE)
            .opacity(alpha.get()),
    ));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Blinks a caret by holding it solid, cutting it out quickly, and holding it off, rather than fading it sinusoidally.",
            )
            .with_concept("Hold segments", "Repeating a value across two keyframes holds it steady.")
            .with_concept("Sharp edges", "The fast 50ms drop is what makes it read as a blink, not a fade.")
            .with_tip("Real terminals blink near 1Hz; match that for familiarity")
            .with_tip("Holds plus sharp drops beat easing curves for mechanical effects"),
        ),
    ]
}
