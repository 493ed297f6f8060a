//! Physics examples: gravity, collisions, and pendulum motion.

use crate::catalog::{Category, Example, Explanation};

/// All physics examples, in display order.
pub fn examples() -> Vec<Example> {
    vec![
        Example::new(
            Category::Physics,
            "Gravity Drop",
            "Falling with gravity and bounce",
            "gravity_drop",
        )
        .with_code_preview(
            r#"let y = animate_float_as_state(
    if dropped { 160.0 } else { -120.0 },
    keyframes(1400, |k| {
        k.value_at(500, 160.0).easing(Easing::EaseIn);
        k.value_at(750, 60.0).easing(Easing::EaseOut);
        k.value_at(1000, 160.0).easing(Easing::EaseIn);
        k.value_at(1150, 125.0).easing(Easing::EaseOut);
        k.value_at(1300, 160.0).easing(Easing::EaseIn);
    }),
);

circle().size(50.0).offset(0.0, y.get())"#,
        )
        .with_usage_example(
            r#"#[composable]
fn gravity_drop_demo() {
    let dropped = use_state(|| false);
    let y = animate_float_as_state(
        if dropped.get() { 160.0 } else { -120.0 },
        keyframes(1400, |k| {
            k.value_at(500, 160.0).easing(Easing::EaseIn);
            k.value_at(750, 60.0).easing(Easing::EaseOut);
            k.value_at(1000, 160.0).easing(Easing::EaseIn);
            k.value_at(1150, 125.0).easing(Easing::EaseOut);
            k.value_at(1300, 160.0).easing(Easing::EaseIn);
        }),
    );

    circle()
        .size(50.0)
        .fill(Color::ORANGE)
        .offset(0.0, y.get())
        .on_click(move || dropped.set(!dropped.get()));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Drops a ball onto a floor with two decaying rebounds, faking gravity with ease-in falls and ease-out rises.",
            )
            .with_concept("Acceleration", "Ease-in on the way down reads as gravity pulling.")
            .with_concept("Restitution", "Each bounce peak is roughly half the previous height.")
            .with_tip("Halving bounce height per rebound matches how real balls behave")
            .with_tip("Falls take less time than the rise that preceded them; keep segments asymmetric"),
        ),
        Example::new(
            Category::Physics,
            "Collision Bounce",
            "Elastic collision between elements",
            "collision_bounce",
        )
        .with_code_preview(
            r#"let t = animate_float_as_state(
    1.0,
    infinite_repeat(tween(1600, Easing::EaseInOut), RepeatMode::Reverse),
);
let gap = 70.0 * (1.0 - t.get());

row().children((
    circle().size(44.0).offset(-gap, 0.0).scale_x(1.0 - t.get() * 0.15),
    circle().size(44.0).offset(gap, 0.0).scale_x(1.0 - t.get() * 0.15),
))"#,
        )
        .with_usage_example(
            r#"#[composable]
fn collision_bounce_demo() {
    let t = animate_float_as_state(
        1.0,
        infinite_repeat(tween(1600, Easing::EaseInOut), RepeatMode::Reverse),
    );
    let gap = 70.0 * (1.0 - t.get());
    let squash = 1.0 - t.get() * 0.15;

    row().spacing(0.0).children((
        circle()
            .size(44.0)
            .fill(Color::YELLOW)
            .offset(-gap, 0.0)
            .scale_x(squash),
        circle()
            .size(44.0)
            .fill(Color::ORANGE)
            .offset(gap, 0.0)
            .scale_x(squash),
    ));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Slides two balls together until they touch, squashes them at contact, and lets the reversed tween carry them apart again.",
            )
            .with_concept("Mirrored motion", "Both balls share one parameter with opposite signs.")
            .with_concept("Contact squash", "Horizontal squash at the meeting point sells the impact.")
            .with_tip("Squash only along the collision axis; uniform scaling looks like shrinking")
            .with_tip("Time the maximum squash to the exact frame the edges meet"),
        ),
        Example::new(
            Category::Physics,
            "Pendulum Swing",
            "Pendulum motion with damping",
            "pendulum",
        )
        .with_code_preview(
            r#"let angle = animate_float_as_state(
    if released { 0.0 } else { 50.0 },
    spring(SpringSpec::new(1.1, 0.18)),
);

pendulum_arm(140.0)
    .rotate_around_top(angle.get())"#,
        )
        .with_usage_example(
            r#"#[composable]
fn pendulum_demo() {
    let released = use_state(|| false);
    let angle = animate_float_as_state(
        if released.get() { 0.0 } else { 50.0 },
        spring(SpringSpec::new(1.1, 0.18)),
    );

    column().children((
        rect().size(3.0, 140.0).fill(Color::GRAY),
        circle().size(40.0).fill(Color::YELLOW),
    ))
    .anchor(Anchor::Top)
    .rotate(angle.get())
    .on_click(move || released.set(!released.get()));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Releases a pendulum from 50 degrees and lets a barely damped spring swing it through shrinking arcs to rest.",
            )
            .with_concept("Top anchor", "Rotation happens around the pivot, not the bob's center.")
            .with_concept("Light damping", "A damping fraction near 0.2 yields many visible swings.")
            .with_tip("Anchor the rotation at the pivot or the motion looks like spinning")
            .with_tip("A slow response with light damping approximates a real period well"),
        ),
        Example::new(
            Category::Physics,
            "Spring Chain",
            "Linked elements with spring coupling",
            "spring_chain_physics",
        )
        .with_code_preview(
            r#"let head = use_animatable((0.0, 0.0));
let trail = use_spring_trail(head, 4, SpringSpec::new(0.45, 0.75));

zstack().children(trail.positions().map(|p| circle().size(26.0).offset(p)))
    .on_drag(|delta| head.shift_by(delta))"#,
        )
        .with_usage_example(
            r#"#[composable]
fn spring_chain_physics_demo() {
    let head = use_animatable((0.0, 0.0));
    let trail = use_spring_trail(head, 4, SpringSpec::new(0.45, 0.75));

    zstack()
        .children(trail.positions().enumerate().map(|(i, p)| {
            circle()
                .size(26.0)
                .fill(Color::YELLOW.darken(i as f32 * 0.12))
                .offset(p)
        }))
        .on_drag(move |delta| head.shift_by(delta))
        .on_release(move || head.animate_to((0.0, 0.0), spring(SpringSpec::bouncy())));
}"#,
        )
        .with_explanation(
            Explanation::new(
                "Drags a head element around while each follower springs toward the one ahead of it, forming an elastic tail.",
            )
            .with_concept("Coupling", "Every link targets its predecessor's position, not the pointer.")
            .with_concept("Propagation lag", "Motion ripples down the chain one spring delay at a time.")
            .with_tip("Stiffen the springs slightly toward the tail so it does not flail")
            .with_tip("Four to six links is the readable range for a trail"),
        ),
    ]
}
