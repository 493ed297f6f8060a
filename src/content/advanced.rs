//! Advanced examples: showcase pieces that combine several techniques.

use crate::catalog::{Category, Example, Explanation};

/// All advanced examples, in display order.
pub fn examples() -> Vec<Example> {
    vec![
        liquid_loader(),
        audio_visualizer(),
        particle_system(),
        morphing_loader(),
        interactive_wave(),
        galaxy(),
    ]
}

fn liquid_loader() -> Example {
    Example::new(
        Category::Advanced,
        "Liquid Loader",
        "Fluid loading animation",
        "liquid_loader",
    )
    .with_code_preview(
        r#"let t = use_frame_clock();
let fill = animate_float_as_state(progress, spring(SpringSpec::new(0.8, 0.9)));

canvas(|painter, size| {
    let level = size.height * (1.0 - fill.get());
    let wave = |x: f32| level + (x * 0.08 + t * 3.0).sin() * 6.0;
    painter.fill_below_curve(wave, Color::BLUE.alpha(0.8));
    painter.fill_below_curve(|x| wave(x + 40.0) + 3.0, Color::BLUE.alpha(0.4));
})"#,
    )
    .with_usage_example(
        r#"#[composable]
fn liquid_loader_demo() {
    let progress = use_state(|| 0.35_f32);
    let t = use_frame_clock();
    let fill = animate_float_as_state(progress.get(), spring(SpringSpec::new(0.8, 0.9)));

    circle_clip(140.0).child(canvas(move |painter, size| {
        let level = size.height * (1.0 - fill.get());
        let wave = |x: f32| level + (x * 0.08 + t * 3.0).sin() * 6.0;
        painter.fill_below_curve(wave, Color::BLUE.alpha(0.8));
        painter.fill_below_curve(|x| wave(x + 40.0) + 3.0, Color::BLUE.alpha(0.4));
    }))
    .on_click(move || progress.set((progress.get() + 0.25).min(1.0)));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Fills a circular gauge with sloshing liquid: the fill level springs toward the reported progress while two phase-shifted sine surfaces ripple on top of it.",
        )
        .with_concept("Level spring", "Progress changes arrive smoothly instead of stepping.")
        .with_concept("Layered waves", "A second, offset, translucent wave gives the liquid depth.")
        .with_concept("Clip mask", "The canvas is clipped to a circle so the liquid has a vessel.")
        .with_tip("Run the two waves at slightly different phases, never in sync")
        .with_tip("Keep wave amplitude small relative to the vessel or it reads as boiling"),
    )
}

fn audio_visualizer() -> Example {
    Example::new(
        Category::Advanced,
        "Audio Visualizer",
        "Music visualizer bars",
        "audio_visualizer",
    )
    .with_code_preview(
        r#"let t = use_frame_clock();

row().spacing(4.0).align(Align::Bottom).children((0..16).map(|i| {
    let f = i as f32;
    let level = ((t * (2.0 + f * 0.35)).sin() * 0.5 + 0.5)
        .max((t * 5.3 + f).sin() * 0.3 + 0.3);
    rounded_rect(2.0).size(8.0, 12.0 + level * 70.0)
}))"#,
    )
    .with_usage_example(
        r#"#[composable]
fn audio_visualizer_demo() {
    let t = use_frame_clock();

    row().spacing(4.0).align(Align::Bottom).children((0..16).map(|i| {
        let f = i as f32;
        let level = ((t * (2.0 + f * 0.35)).sin() * 0.5 + 0.5)
            .max((t * 5.3 + f).sin() * 0.3 + 0.3);
        rounded_rect(2.0)
            .size(8.0, 12.0 + level * 70.0)
            .fill(Color::GREEN.mix(Color::RED, level))
    }));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Fakes a spectrum display by summing sines at different rates per bar, taking the louder of two oscillators so peaks jump unpredictably.",
        )
        .with_concept("Pseudo-randomness", "Incommensurate sine frequencies never visibly repeat.")
        .with_concept("Level coloring", "Bar color tracks bar height, green through red.")
        .with_tip("Give every bar a floor height so silence still shows the bar row")
        .with_tip("Taking a max of two oscillators adds convincing transients")
        .with_tip("Swap the sines for real FFT bins later without touching layout"),
    )
}

fn particle_system() -> Example {
    Example::new(
        Category::Advanced,
        "Particle System",
        "Full particle system with emitter",
        "particle_system",
    )
    .with_code_preview(
        r#"let system = use_particle_system(Emitter {
    rate: 40.0,
    lifetime: 1.8,
    speed: 60.0..160.0,
    spread: Angle::degrees(30.0),
});

canvas(|painter, _| {
    for p in system.alive() {
        painter.circle(p.position, p.size * (1.0 - p.age_frac()), p.color.alpha(1.0 - p.age_frac()));
    }
})
.on_drag(|pos| system.move_emitter(pos))"#,
    )
    .with_usage_example(
        r#"#[composable]
fn particle_system_demo() {
    let system = use_particle_system(Emitter {
        rate: 40.0,
        lifetime: 1.8,
        speed: 60.0..160.0,
        spread: Angle::degrees(30.0),
    });

    canvas(move |painter, _| {
        for p in system.alive() {
            let fade = 1.0 - p.age_frac();
            painter.circle(p.position, p.size * fade, p.color.alpha(fade));
        }
    })
    .on_drag(move |pos| system.move_emitter(pos));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Runs a real emitter: particles spawn at a rate, inherit randomized velocity inside a cone, age out after a lifetime, and shrink and fade as they die, with the emitter following the pointer.",
        )
        .with_concept("Emitter", "Spawn rate, lifetime, speed range, and cone are the whole recipe.")
        .with_concept("Age fraction", "Normalized age drives every per-particle visual.")
        .with_concept("Pooling", "Dead particles are recycled rather than reallocated.")
        .with_tip("Cap the live particle count; rate times lifetime is your budget")
        .with_tip("Shrink and fade from the same age fraction for a clean dissolve")
        .with_tip("Move the emitter, not the particles, when following input"),
    )
}

fn morphing_loader() -> Example {
    Example::new(
        Category::Advanced,
        "Morphing Loader",
        "Shape-shifting loading indicator",
        "morphing_loader",
    )
    .with_code_preview(
        r#"let t = animate_float_as_state(
    3.0,
    infinite_repeat(tween(2400, Easing::EaseInOut), RepeatMode::Restart),
);
let shapes = [circle_points(), triangle_points(), square_points()];
let i = t.get() as usize % 3;

morph_path(&shapes[i], &shapes[(i + 1) % 3], t.get().fract())
    .rotate(t.get() * 120.0)"#,
    )
    .with_usage_example(
        r#"#[composable]
fn morphing_loader_demo() {
    let t = animate_float_as_state(
        3.0,
        infinite_repeat(tween(2400, Easing::EaseInOut), RepeatMode::Restart),
    );
    let shapes = [circle_points(), triangle_points(), square_points()];
    let i = t.get() as usize % 3;

    morph_path(&shapes[i], &shapes[(i + 1) % 3], t.get().fract())
        .size(90.0)
        .fill(Color::PURPLE.mix(Color::RED, t.get() / 3.0))
        .rotate(t.get() * 120.0);
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Cycles a loader through circle, triangle, and square by morphing between consecutive shapes, using the integer part of one clock to pick the pair and the fraction to blend it.",
        )
        .with_concept("Shape cycle", "Integer and fractional parts of one value select and blend shapes.")
        .with_concept("Continuous rotation", "A slow spin hides the morph seams at cycle boundaries.")
        .with_tip("Sample all shapes to the same vertex count up front")
        .with_tip("The rotation should complete a multiple of 360 per cycle or the loop jumps"),
    )
}

fn interactive_wave() -> Example {
    Example::new(
        Category::Advanced,
        "Interactive Wave",
        "Touch-responsive wave effect",
        "interactive_wave",
    )
    .with_code_preview(
        r#"let t = use_frame_clock();
let touch = use_animatable((0.0_f32, 0.0_f32));

canvas(|painter, size| {
    let curve = |x: f32| {
        let base = (x * 0.05 + t * 2.0).sin() * 14.0;
        let d = (x - touch.get().0).abs();
        base + (-d * 0.02).exp() * 30.0
    };
    painter.stroke_curve(curve, Color::CYAN, 3.0);
})
.on_drag(|pos| touch.animate_to(pos, spring(SpringSpec::stiff())))"#,
    )
    .with_usage_example(
        r#"#[composable]
fn interactive_wave_demo() {
    let t = use_frame_clock();
    let touch = use_animatable((0.0_f32, 0.0_f32));

    canvas(move |painter, size| {
        let curve = |x: f32| {
            let base = size.height / 2.0 + (x * 0.05 + t * 2.0).sin() * 14.0;
            let d = (x - touch.get().0).abs();
            base + (-d * 0.02).exp() * 30.0
        };
        painter.stroke_curve(curve, Color::CYAN, 3.0);
    })
    .on_drag(move |pos| touch.animate_to(pos, spring(SpringSpec::stiff())));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Draws an ambient rolling wave and adds a bulge under the finger, blending a drifting sine with an exponential falloff centered on the touch point.",
        )
        .with_concept("Base plus disturbance", "Ambient motion and interaction are separate terms summed per x.")
        .with_concept("Exponential falloff", "The bulge fades smoothly with distance from the touch.")
        .with_tip("Spring the touch point so the bulge glides instead of teleporting")
        .with_tip("Keep the ambient wave subtle; the interaction should dominate"),
    )
}

fn galaxy() -> Example {
    Example::new(
        Category::Advanced,
        "Galaxy",
        "Spinning galaxy with orbiting stars",
        "galaxy",
    )
    .with_code_preview(
        r#"let t = use_frame_clock();

canvas(|painter, _| {
    for star in stars.iter() {
        let angle = star.phase + t * star.angular_speed;
        let arm_twist = star.radius * 0.04;
        let pos = ((angle + arm_twist).cos() * star.radius, (angle + arm_twist).sin() * star.radius * 0.55);
        painter.circle(pos, star.size, star.color.alpha(0.9 - star.radius / 260.0));
    }
})"#,
    )
    .with_usage_example(
        r#"#[composable]
fn galaxy_demo() {
    let stars = use_memo(|| seed_galaxy(140));
    let t = use_frame_clock();

    zstack().background(Color::BLACK).children((
        circle().size(26.0).fill(Color::WHITE).blur(8.0),
        canvas(move |painter, _| {
            for star in stars.iter() {
                let angle = star.phase + t * star.angular_speed;
                let arm_twist = star.radius * 0.04;
                let pos = (
                    (angle + arm_twist).cos() * star.radius,
                    (angle + arm_twist).sin() * star.radius * 0.55,
                );
                painter.circle(pos, star.size, star.color.alpha(0.9 - star.radius / 260.0));
            }
        }),
    ));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Spins a disc of stars around a glowing core, twisting orbit phase by radius to form spiral arms and squashing the y axis to tilt the whole disc into view.",
        )
        .with_concept("Differential rotation", "Inner stars orbit faster, which is what winds the arms.")
        .with_concept("Radius-phase twist", "Shifting phase by radius lines stars up into spirals.")
        .with_concept("Elliptical projection", "Scaling y foreshortens the disc like a tilted plate.")
        .with_tip("Fade stars with radius so the rim dissolves instead of ending")
        .with_tip("A soft blurred core anchors the composition for almost no cost")
        .with_tip("Keep angular speeds low; galaxies read as majestic, not busy"),
    )
}
