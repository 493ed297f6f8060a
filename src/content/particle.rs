//! Particle examples: effects built from many small, independently
//! animated elements.

use crate::catalog::{Category, Example, Explanation};

/// All particle examples, in display order.
pub fn examples() -> Vec<Example> {
    vec![
        rising_bubbles(),
        starfield(),
        rain_effect(),
        confetti_burst(),
        sparkle_effect(),
        fireworks(),
    ]
}

fn rising_bubbles() -> Example {
    Example::new(
        Category::Particle,
        "Rising Bubbles",
        "Bubbles floating upward",
        "bubbles",
    )
    .with_code_preview(
        r#"let t = use_frame_clock();

canvas(|painter, size| {
    for bubble in bubbles.iter() {
        let y = size.height - (t * bubble.speed + bubble.phase) % (size.height + 40.0);
        let x = bubble.x + (t * 2.0 + bubble.phase).sin() * 8.0;
        painter.circle((x, y), bubble.radius, Color::CYAN.alpha(0.5));
    }
})"#,
    )
    .with_usage_example(
        r#"#[composable]
fn bubbles_demo() {
    let bubbles = use_memo(|| spawn_bubbles(18));
    let t = use_frame_clock();

    canvas(move |painter, size| {
        for bubble in bubbles.iter() {
            let travel = size.height + 40.0;
            let y = size.height - (t * bubble.speed + bubble.phase) % travel;
            let x = bubble.x + (t * 2.0 + bubble.phase).sin() * 8.0;
            painter.circle((x, y), bubble.radius, Color::CYAN.alpha(0.5));
        }
    });
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Floats a field of bubbles upward at individual speeds, each wobbling sideways on its own sine, and recycles them below the frame.",
        )
        .with_concept("Frame clock", "One time value drives every particle; none carry their own animation.")
        .with_concept("Wraparound", "The modulo recycles bubbles seamlessly instead of respawning them.")
        .with_concept("Per-particle phase", "A random phase offset keeps the field from moving in unison.")
        .with_tip("Randomize speed and size together; big slow bubbles look wrong")
        .with_tip("Wrap below the visible frame so bubbles never pop into existence on screen"),
    )
}

fn starfield() -> Example {
    Example::new(
        Category::Particle,
        "Starfield",
        "Twinkling stars effect",
        "starfield",
    )
    .with_code_preview(
        r#"let t = use_frame_clock();

canvas(|painter, _| {
    for star in stars.iter() {
        let twinkle = 0.5 + 0.5 * (t * star.rate + star.phase).sin();
        painter.circle(star.position, star.radius, Color::WHITE.alpha(twinkle));
    }
})"#,
    )
    .with_usage_example(
        r#"#[composable]
fn starfield_demo() {
    let stars = use_memo(|| scatter_stars(60));
    let t = use_frame_clock();

    zstack().background(Color::BLACK).child(canvas(move |painter, _| {
        for star in stars.iter() {
            let twinkle = 0.5 + 0.5 * (t * star.rate + star.phase).sin();
            painter.circle(star.position, star.radius, Color::WHITE.alpha(twinkle));
        }
    }));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Scatters stars once, then twinkles each by oscillating its opacity at a private rate and phase.",
        )
        .with_concept("Static layout, animated paint", "Positions never change; only alpha does.")
        .with_concept("Desynchronization", "Random rates and phases prevent a strobing sky.")
        .with_tip("Bias the size distribution toward small stars; a few large ones carry depth")
        .with_tip("Keep the twinkle range above 0.3 alpha so stars never fully vanish"),
    )
}

fn rain_effect() -> Example {
    Example::new(
        Category::Particle,
        "Rain Effect",
        "Falling rain animation",
        "rain",
    )
    .with_code_preview(
        r#"let t = use_frame_clock();

canvas(|painter, size| {
    for drop in drops.iter() {
        let y = (t * drop.speed + drop.phase) % (size.height + 24.0);
        painter.line((drop.x, y), (drop.x - 2.0, y + drop.length), Color::BLUE.alpha(0.6));
    }
})"#,
    )
    .with_usage_example(
        r#"#[composable]
fn rain_demo() {
    let drops = use_memo(|| spawn_drops(80));
    let t = use_frame_clock();

    canvas(move |painter, size| {
        for drop in drops.iter() {
            let y = (t * drop.speed + drop.phase) % (size.height + 24.0);
            painter.line(
                (drop.x, y),
                (drop.x - 2.0, y + drop.length),
                Color::BLUE.alpha(0.6),
            );
        }
    });
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Streaks short slanted lines down the frame at varied speeds, wrapping each back to the top as it exits.",
        )
        .with_concept("Streak rendering", "A drop is a line from its position to slightly behind it.")
        .with_concept("Speed variance", "Faster drops get longer streaks, implying depth.")
        .with_tip("Slant every drop the same direction; mixed angles read as chaos")
        .with_tip("Scale streak length with speed so depth stays consistent"),
    )
}

fn confetti_burst() -> Example {
    Example::new(
        Category::Particle,
        "Confetti Burst",
        "Celebration confetti explosion",
        "confetti",
    )
    .with_code_preview(
        r#"let t = use_animatable(0.0);

canvas(|painter, _| {
    for piece in pieces.iter() {
        let distance = piece.velocity * t.get();
        let pos = (piece.dir.0 * distance, piece.dir.1 * distance + 80.0 * t.get() * t.get());
        painter.rect(pos, piece.size, piece.color, piece.spin * t.get());
    }
})
.on_click(|| t.animate_from(0.0, 1.0, tween(1200, Easing::EaseOut)))"#,
    )
    .with_usage_example(
        r#"#[composable]
fn confetti_demo() {
    let pieces = use_memo(|| burst_pieces(50));
    let t = use_animatable(0.0);

    canvas(move |painter, _| {
        for piece in pieces.iter() {
            let distance = piece.velocity * t.get();
            let fall = 80.0 * t.get() * t.get();
            let pos = (piece.dir.0 * distance, piece.dir.1 * distance + fall);
            painter.rect(pos, piece.size, piece.color, piece.spin * t.get());
        }
    })
    .opacity(1.0 - t.get())
    .on_click(move || t.animate_from(0.0, 1.0, tween(1200, Easing::EaseOut)));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Fires colored rectangles outward from a point, adds a quadratic fall so arcs bend downward, and fades the lot as the burst ends.",
        )
        .with_concept("Radial velocities", "Each piece gets a random direction and launch speed.")
        .with_concept("Quadratic gravity", "Adding t squared to y curves straight rays into arcs.")
        .with_concept("Progress parameter", "One animated value replays the entire burst deterministically.")
        .with_tip("Ease-out matches a real explosion, fast at launch then coasting")
        .with_tip("Spin each piece at its own rate; unspinning confetti looks like sparks")
        .with_tip("Fade out before pieces leave the frame to avoid hard clipping"),
    )
}

fn sparkle_effect() -> Example {
    Example::new(
        Category::Particle,
        "Sparkle Effect",
        "Sparkling star particles",
        "sparkle",
    )
    .with_code_preview(
        r#"let t = use_frame_clock();

canvas(|painter, _| {
    for sparkle in sparkles.iter() {
        let life = ((t + sparkle.phase) % 2.0) / 2.0;
        let flash = (life * std::f32::consts::PI).sin();
        painter.star(sparkle.position, sparkle.radius * flash, Color::YELLOW.alpha(flash));
    }
})"#,
    )
    .with_usage_example(
        r#"#[composable]
fn sparkle_demo() {
    let sparkles = use_memo(|| scatter_sparkles(24));
    let t = use_frame_clock();

    canvas(move |painter, _| {
        for sparkle in sparkles.iter() {
            let life = ((t + sparkle.phase) % 2.0) / 2.0;
            let flash = (life * std::f32::consts::PI).sin();
            painter.star(
                sparkle.position,
                sparkle.radius * flash,
                Color::YELLOW.alpha(flash),
            );
        }
    });
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Flashes little stars in and out on staggered two-second lives, growing and fading each along a half sine so birth and death are symmetric.",
        )
        .with_concept("Life cycle", "Each sparkle loops through a normalized 0..1 life.")
        .with_concept("Half-sine envelope", "sin(pi * life) rises from zero and returns to zero smoothly.")
        .with_tip("Scale size and alpha from the same envelope so sparkles bloom as one")
        .with_tip("Stagger phases so the field never blinks simultaneously"),
    )
}

fn fireworks() -> Example {
    Example::new(
        Category::Particle,
        "Fireworks",
        "Exploding fireworks display",
        "fireworks",
    )
    .with_code_preview(
        r#"let t = use_frame_clock();

canvas(|painter, size| {
    for shell in shells.iter() {
        let cycle = (t + shell.phase) % 3.0;
        if cycle < 1.0 {
            painter.circle(shell.launch_pos(cycle, size), 3.0, Color::WHITE);
        } else {
            shell.draw_burst(painter, cycle - 1.0);
        }
    }
})"#,
    )
    .with_usage_example(
        r#"#[composable]
fn fireworks_demo() {
    let shells = use_memo(|| plan_shells(3));
    let t = use_frame_clock();

    zstack().background(Color::BLACK).child(canvas(move |painter, size| {
        for shell in shells.iter() {
            let cycle = (t + shell.phase) % 3.0;
            if cycle < 1.0 {
                painter.circle(shell.launch_pos(cycle, size), 3.0, Color::WHITE);
            } else {
                let burst = cycle - 1.0;
                for spark in shell.sparks.iter() {
                    let d = spark.speed * burst;
                    let pos = (
                        shell.apex.0 + spark.dir.0 * d,
                        shell.apex.1 + spark.dir.1 * d + 40.0 * burst * burst,
                    );
                    painter.circle(pos, 2.0, shell.color.alpha(1.0 - burst / 2.0));
                }
            }
        }
    }));
}"#,
    )
    .with_explanation(
        Explanation::new(
            "Runs each shell through a looping launch-then-burst cycle: a dot climbs for the first second, then a ring of sparks expands, sags, and fades for two more.",
        )
        .with_concept("Phased cycle", "One modulo clock splits time into launch and burst segments.")
        .with_concept("Burst ring", "Sparks share an origin and expand along fixed directions.")
        .with_concept("Gravity sag", "A quadratic term bends spark trails downward late in the burst.")
        .with_tip("Decelerate the shell near its apex before the burst starts")
        .with_tip("Offset each shell's phase so the sky is never empty or crowded")
        .with_tip("Fade sparks by lifetime rather than distance for an even dissolve"),
    )
}
