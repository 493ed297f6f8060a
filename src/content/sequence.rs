//! Sequence examples: chained and staggered choreography across elements.

use crate::catalog::{Category, Example, Explanation};

/// All sequence examples, in display order.
pub fn examples() -> Vec<Example> {
    vec![
        chain_reaction(),
        loading_sequence(),
        domino_effect(),
        staggered_fade(),
    ]
}

fn chain_reaction() -> Example {
    Example::new(
        Category::Sequence,
        "Chain Reaction",
        "Connected animation sequence",
        "chain_reaction",
    )
    .with_code_preview(
        r#"row().spacing(14.0).children((0..5).map(|i| {
    let hit = animate_float_as_state(
        if fired { 1.0 } else { 0.0 },
        tween(250, Easing::EaseOut).with_delay(i * 180),
    );
    circle()
        .size(36.0)
        .scale(1.0 + hit.get() * 0.45)
        .fill(Color::GRAY.mix(Color::ORANGE, hit.get()))
}))"#,
    )
    .with_usage_example(
        r#"#[composable]
fn chain_reaction_demo() {
    let fired = use_state(|| false);

    row().spacing(14.0).children((0..5).map(|i| {
        let hit = animate_float_as_state(
            if fired.get() { 1.0 } else { 0.0 },
            tween(250, Easing::EaseOut).with_delay(i * 180),
        );
        circle()
            .size(36.0)
            .scale(1.0 + hit.get() * 0.45)
            .fill(Color::GRAY.mix(Color::ORANGE, hit.get()))
            .ring(hit.get())
    }))
    .on_click(move || fired.set(!fired.get()));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Knocks a pulse down a row of circles, each one swelling, recoloring, and ringing as the impulse arrives at its delay slot.",
        )
        .with_concept("Impulse delay", "Each element plays the identical animation shifted in time.")
        .with_concept("Multi-property hit", "One hit value drives scale, color, and the ripple ring together.")
        .with_tip("Make the per-element delay shorter than the effect duration so the wave overlaps")
        .with_tip("Deriving several properties from one value keeps the hit feeling unified"),
    )
}

fn loading_sequence() -> Example {
    Example::new(
        Category::Sequence,
        "Loading Sequence",
        "Multi-step loading animation",
        "loading_sequence",
    )
    .with_code_preview(
        r#"row().spacing(8.0).children((0..4).map(|i| {
    let lift = animate_float_as_state(
        1.0,
        infinite_repeat(
            keyframes(1100, |k| {
                k.value_at(200, 0.0).easing(Easing::EaseOut);
                k.value_at(400, 1.0).easing(Easing::EaseIn);
            })
            .with_delay(i * 120),
            RepeatMode::Restart,
        ),
    );
    circle().size(18.0).offset(0.0, -lift.get() * 22.0)
}))"#,
    )
    .with_usage_example(
        r#"#[composable]
fn loading_sequence_demo() {
    row().spacing(8.0).children((0..4).map(|i| {
        let lift = animate_float_as_state(
            1.0,
            infinite_repeat(
                keyframes(1100, |k| {
                    k.value_at(200, 0.0).easing(Easing::EaseOut);
                    k.value_at(400, 1.0).easing(Easing::EaseIn);
                })
                .with_delay(i * 120),
                RepeatMode::Restart,
            ),
        );
        circle()
            .size(18.0)
            .fill(Color::INDIGO)
            .offset(0.0, -lift.get() * 22.0)
    }));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Hops four dots in turn, each rising and landing inside its own delayed slice of a shared loop, like a tiny juggling act.",
        )
        .with_concept("Slot scheduling", "The delay spaces the dots so exactly one is airborne at a time.")
        .with_concept("Loop padding", "Idle time after the hop keeps the rhythm from racing.")
        .with_tip("Dot count times delay should not exceed the cycle or the rhythm stutters")
        .with_tip("Land with ease-in so the dot falls rather than floats down"),
    )
}

fn domino_effect() -> Example {
    Example::new(
        Category::Sequence,
        "Domino Effect",
        "Cascading animation sequence",
        "domino_effect",
    )
    .with_code_preview(
        r#"row().spacing(6.0).align(Align::Bottom).children((0..8).map(|i| {
    let height = animate_float_as_state(
        if raised { 1.0 } else { 0.3 },
        infinite_repeat(
            keyframes(1400, |k| {
                k.value_at(250, 1.0).easing(Easing::EaseOut);
                k.value_at(500, 0.3).easing(Easing::EaseIn);
            })
            .with_delay(i * 90),
            RepeatMode::Restart,
        ),
    );
    rounded_rect(3.0).size(10.0, height.get() * 64.0)
}))"#,
    )
    .with_usage_example(
        r#"#[composable]
fn domino_effect_demo() {
    row().spacing(6.0).align(Align::Bottom).children((0..8).map(|i| {
        let height = animate_float_as_state(
            0.3,
            infinite_repeat(
                keyframes(1400, |k| {
                    k.value_at(250, 1.0).easing(Easing::EaseOut);
                    k.value_at(500, 0.3).easing(Easing::EaseIn);
                })
                .with_delay(i * 90),
                RepeatMode::Restart,
            ),
        );
        rounded_rect(3.0)
            .size(10.0, height.get() * 64.0)
            .fill(Color::INDIGO.mix(Color::BLUE, i as f32 / 7.0))
    }));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Ripples a rise-and-fall down a row of bars, each stretching tall and collapsing a beat after its neighbor, like an equalizer sweep.",
        )
        .with_concept("Cascade", "A flat delay per bar turns one animation into a traveling wave.")
        .with_concept("Bottom alignment", "Bars grow upward from a shared baseline.")
        .with_tip("Anchor the bars at the bottom or they stretch from both ends")
        .with_tip("Tint bars along the row to make the travel direction legible"),
    )
}

fn staggered_fade() -> Example {
    Example::new(
        Category::Sequence,
        "Staggered Fade",
        "Sequential fade-in animation",
        "staggered_fade",
    )
    .with_code_preview(
        r#"column().spacing(10.0).children(items.iter().enumerate().map(|(i, item)| {
    let reveal = animate_float_as_state(
        if shown { 1.0 } else { 0.0 },
        tween(300, Easing::EaseOut).with_delay(i * 70),
    );
    list_row(item)
        .opacity(reveal.get())
        .offset(0.0, (1.0 - reveal.get()) * 16.0)
}))"#,
    )
    .with_usage_example(
        r#"#[composable]
fn staggered_fade_demo() {
    let shown = use_state(|| false);
    let items = ["Alpha", "Beta", "Gamma", "Delta"];

    column().spacing(10.0).children(items.iter().enumerate().map(|(i, item)| {
        let reveal = animate_float_as_state(
            if shown.get() { 1.0 } else { 0.0 },
            tween(300, Easing::EaseOut).with_delay(i as u32 * 70),
        );
        rounded_rect(10.0)
            .size(180.0, 36.0)
            .child(text(item))
            .opacity(reveal.get())
            .offset(0.0, (1.0 - reveal.get()) * 16.0)
    }))
    .on_appear(move || shown.set(true));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Reveals list rows one after another, each fading up while sliding a few points into place, so content appears to assemble itself.",
        )
        .with_concept("Reveal progress", "A single value drives both the fade and the slide per row.")
        .with_concept("Entrance offset", "Rows start slightly below their slot and settle upward.")
        .with_tip("Keep per-row delays near 70ms; slower staggering makes lists feel laggy")
        .with_tip("Trigger on first appearance only, not on every scroll pass")
        .with_tip("Cap the stagger at roughly ten rows and reveal the rest instantly"),
    )
}
