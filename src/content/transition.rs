//! Transition examples: elements entering and leaving the screen.

use crate::catalog::{Category, Example, Explanation};

/// All transition examples, in display order.
pub fn examples() -> Vec<Example> {
    vec![
        Example::new(
            Category::Transition,
            "Slide Transition",
            "Slide in and out from the edge",
            "slide_transition",
        )
        .with_code_preview(
            r#"animated_visibility(visible)
    .enter(slide_in(Edge::Leading))
    .exit(slide_out(Edge::Trailing))
    .content(|| rounded_rect(16.0).size(140.0, 60.0))"#,
        )
        .with_usage_example(
            r#"#[composable]
fn slide_transition_demo() {
    let visible = use_state(|| true);

    column().spacing(16.0).children((
        button("Toggle").on_click(move || visible.set(!visible.get())),
        animated_visibility(visible.get())
            .enter(slide_in(Edge::Leading))
            .exit(slide_out(Edge::Trailing))
            .content(|| rounded_rect(16.0).size(140.0, 60.0).fill(Color::GREEN)),
    ));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Slides a view in from one edge and out the other, giving removal a direction instead of a blink.",
            )
            .with_concept("Enter and exit", "Each direction of the visibility change gets its own effect.")
            .with_concept("Asymmetry", "Entering from leading and exiting trailing implies forward motion.")
            .with_tip("Match slide direction to the user's navigation direction")
            .with_tip("Keep enter and exit durations equal so toggling feels balanced"),
        ),
        Example::new(
            Category::Transition,
            "Scale Transition",
            "Grow and shrink on appearance",
            "scale_transition",
        )
        .with_code_preview(
            r#"animated_visibility(visible)
    .enter(scale_in(0.3).with(fade_in()))
    .exit(scale_out(0.3).with(fade_out()))
    .content(|| circle().size(100.0))"#,
        )
        .with_usage_example(
            r#"#[composable]
fn scale_transition_demo() {
    let visible = use_state(|| true);

    animated_visibility(visible.get())
        .enter(scale_in(0.3).with(fade_in()))
        .exit(scale_out(0.3).with(fade_out()))
        .content(|| circle().size(100.0).fill(Color::MINT))
        .on_click(move || visible.set(!visible.get()));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Pops a view in by growing it from a fraction of its size while fading, the standard treatment for dialogs and badges.",
            )
            .with_concept("Initial scale", "Entering from 0.3 reads as arrival; from 0.0 reads as materializing.")
            .with_concept("Combined effects", "Scale and fade compose into a single transition.")
            .with_tip("Always pair scale with fade; bare scale-from-zero looks rubbery")
            .with_tip("Exit slightly faster than enter; departures should not linger"),
        ),
        Example::new(
            Category::Transition,
            "Flip Card",
            "Card flip between two faces",
            "flip_card",
        )
        .with_code_preview(
            r#"let angle = animate_float_as_state(if showing_back { 180.0 } else { 0.0 }, tween(600, Easing::EaseInOut));

card_face(if angle.get() < 90.0 { front } else { back })
    .rotate_y(angle.get())
    .perspective(700.0)"#,
        )
        .with_usage_example(
            r#"#[composable]
fn flip_card_demo() {
    let showing_back = use_state(|| false);
    let angle = animate_float_as_state(
        if showing_back.get() { 180.0 } else { 0.0 },
        tween(600, Easing::EaseInOut),
    );

    let face = if angle.get() < 90.0 {
        text("FRONT").fill(Color::BLUE)
    } else {
        text("BACK").fill(Color::PURPLE).rotate_y(180.0)
    };

    rounded_rect(18.0)
        .size(160.0, 100.0)
        .child(face)
        .rotate_y(angle.get())
        .perspective(700.0)
        .on_click(move || showing_back.set(!showing_back.get()));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Treats two views as faces of one card and swaps them halfway through a perspective flip.",
            )
            .with_concept("Midpoint swap", "Content changes at 90 degrees, while the card is edge-on and invisible.")
            .with_concept("Counter-rotation", "The back face is pre-rotated 180 degrees so it reads correctly.")
            .with_tip("Swap content exactly at the edge-on angle or the back appears mirrored")
            .with_tip("Disable clicks while the flip is in flight to avoid mid-air retargets"),
        ),
        Example::new(
            Category::Transition,
            "Cross Fade",
            "Smooth swap between two views",
            "cross_fade",
        )
        .with_code_preview(
            r#"crossfade(selected_tab, tween(350, Easing::EaseInOut), |tab| match tab {
    Tab::Grid => grid_view(),
    Tab::List => list_view(),
})"#,
        )
        .with_usage_example(
            r#"#[composable]
fn cross_fade_demo() {
    let tab = use_state(|| Tab::Grid);

    column().spacing(16.0).children((
        button("Switch").on_click(move || tab.set(tab.get().other())),
        crossfade(tab.get(), tween(350, Easing::EaseInOut), |current| {
            match current {
                Tab::Grid => grid_view(),
                Tab::List => list_view(),
            }
        }),
    ));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Fades the outgoing view down while the incoming one fades up, overlapping them so the swap has no empty frame.",
            )
            .with_concept("Keyed content", "The target value decides which view is current; the old one animates out.")
            .with_concept("Overlap", "Both views exist during the transition, stacked in the same slot.")
            .with_tip("Crossfade works best between views of similar size and shape")
            .with_tip("Reach for a slide instead when the two views differ wildly"),
        ),
        Example::new(
            Category::Transition,
            "Move & Fade",
            "Combined movement and opacity",
            "move_fade",
        )
        .with_code_preview(
            r#"animated_visibility(visible)
    .enter(slide_in_vertically(-40.0).with(fade_in()))
    .exit(slide_out_vertically(40.0).with(fade_out()))
    .content(|| banner("Saved"))"#,
        )
        .with_usage_example(
            r#"#[composable]
fn move_fade_demo() {
    let visible = use_state(|| false);

    column().spacing(16.0).children((
        button("Notify").on_click(move || visible.set(true)),
        animated_visibility(visible.get())
            .enter(slide_in_vertically(-40.0).with(fade_in()))
            .exit(slide_out_vertically(40.0).with(fade_out()))
            .content(|| {
                rounded_rect(12.0)
                    .size(200.0, 44.0)
                    .fill(Color::GREEN)
                    .child(text("Saved"))
            }),
    ));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Drops a banner in from above while fading it up, then lets it fall away downward on dismissal.",
            )
            .with_concept("Vertical offsets", "Negative enter offset means the view starts above its final spot.")
            .with_concept("Directional exit", "Exiting downward, not back up, keeps the motion story consistent.")
            .with_tip("Short travel distances, around 40 points, keep banners calm")
            .with_tip("Fade should finish no later than the movement or ghosts appear"),
        ),
        Example::new(
            Category::Transition,
            "Custom Transition",
            "Hand-built enter and exit effect",
            "combined_transition",
        )
        .with_code_preview(
            r#"let pop = transition()
    .scale(0.2, 1.0)
    .rotate(-90.0, 0.0)
    .fade(0.0, 1.0)
    .spec(spring(SpringSpec::bouncy()));

animated_visibility(visible).enter(pop.enter()).exit(pop.exit()).content(|| badge())"#,
        )
        .with_usage_example(
            r#"#[composable]
fn custom_transition_demo() {
    let visible = use_state(|| false);
    let pop = transition()
        .scale(0.2, 1.0)
        .rotate(-90.0, 0.0)
        .fade(0.0, 1.0)
        .spec(spring(SpringSpec::bouncy()));

    animated_visibility(visible.get())
        .enter(pop.enter())
        .exit(pop.exit())
        .content(|| circle().size(72.0).fill(Color::PURPLE))
        .on_click(move || visible.set(!visible.get()));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Builds a reusable transition that scales, spins, and fades in one spring-driven package, then applies it symmetrically.",
            )
            .with_concept("Transition builder", "Property ranges are declared once and replayed forwards and backwards.")
            .with_concept("Spec override", "The whole bundle runs on a single spring instead of per-property clocks.")
            .with_tip("Name and reuse custom transitions so related surfaces move alike")
            .with_tip("Test the exit as carefully as the enter; reversed effects can look wrong")
            .with_tip("Two or three combined properties is the sweet spot; more turns to noise"),
        ),
    ]
}
