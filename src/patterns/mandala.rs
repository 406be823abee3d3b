//! Polygonal and petal mandalas.

use std::f64::consts::TAU;

use crate::model::{Paint, PatternElement};
use crate::palette::ColorScheme;
use crate::path::PathBuilder;
use crate::seed::SeededRandom;

use super::{CENTER_X, CENTER_Y, RawPattern};

/// Concentric n-gons, each layer rotated a fixed step further.
pub(super) fn polygon(rng: &mut SeededRandom, scheme: &ColorScheme) -> RawPattern {
    let accent = scheme.accent;

    let sides = rng.range(5.0, 16.0) as usize;
    let layers = rng.range(40.0, 100.0) as usize;
    let max_radius = 250.0;
    let rotation = rng.range(0.02, 0.12);
    let thickness = rng.range(0.4, 3.0);

    let mut elements = Vec::with_capacity(layers);
    for i in 0..layers {
        let radius = i as f64 / layers as f64 * max_radius;
        let twist = i as f64 * rotation;

        let mut p = PathBuilder::with_capacity(sides * 16);
        for j in 0..=sides {
            let angle = j as f64 / sides as f64 * TAU + twist;
            let x = CENTER_X + angle.cos() * radius;
            let y = CENTER_Y + angle.sin() * radius;
            if j == 0 {
                p.move_to(x, y);
            } else {
                p.line_to(x, y);
            }
        }

        elements.push(PatternElement {
            path_data: p.finish(),
            stroke: Paint::Solid(accent),
            stroke_width: thickness,
            fill: Paint::None,
            opacity: 0.8,
        });
    }

    RawPattern::strokes_only(elements)
}

/// Quadratic petal curves fanning out from the center, layer by layer.
pub(super) fn petal(rng: &mut SeededRandom, scheme: &ColorScheme) -> RawPattern {
    let accent = scheme.accent;

    let petals = rng.range(6.0, 24.0) as usize;
    let layers = rng.range(20.0, 60.0) as usize;
    let max_radius = 250.0;
    let thickness = rng.range(0.5, 3.0);

    let mut elements = Vec::with_capacity(petals * layers);
    for layer in 0..layers {
        let radius = (layer + 1) as f64 / layers as f64 * max_radius;

        for petal in 0..petals {
            let angle = petal as f64 / petals as f64 * TAU;
            let next_angle = (petal + 1) as f64 / petals as f64 * TAU;
            let mid_angle = (angle + next_angle) / 2.0;

            let cx = CENTER_X + mid_angle.cos() * radius;
            let cy = CENTER_Y + mid_angle.sin() * radius;
            let ex = CENTER_X + next_angle.cos() * radius * 0.6;
            let ey = CENTER_Y + next_angle.sin() * radius * 0.6;

            let mut p = PathBuilder::new();
            p.move_to(CENTER_X, CENTER_Y).quad_to(cx, cy, ex, ey);

            elements.push(PatternElement {
                path_data: p.finish(),
                stroke: Paint::Solid(accent),
                stroke_width: thickness,
                fill: Paint::None,
                opacity: 0.5,
            });
        }
    }

    RawPattern::strokes_only(elements)
}

/// Layered star outlines built from triangles between consecutive
/// points; alternating points and layers are filled.
pub(super) fn star(rng: &mut SeededRandom, scheme: &ColorScheme) -> RawPattern {
    let accent = scheme.accent;

    let points = rng.range(6.0, 20.0) as usize;
    let layers = rng.range(30.0, 70.0) as usize;
    let max_radius = 250.0;
    let thickness = rng.range(0.4, 2.0);

    let mut elements = Vec::new();
    for layer in 0..layers {
        let r_outer = (layer + 1) as f64 / layers as f64 * max_radius;
        let r_inner = r_outer * 0.6;
        // The first layer has no previous ring to anchor triangles on.
        if layer == 0 {
            continue;
        }
        let prev = layer as f64 / layers as f64 * max_radius;

        for i in 0..points * 2 {
            let a1 = i as f64 / (points * 2) as f64 * TAU;
            let a2 = (i + 1) as f64 / (points * 2) as f64 * TAU;
            let r1 = if i % 2 == 0 { r_outer } else { r_inner };
            let r2 = if (i + 1) % 2 == 0 { r_outer } else { r_inner };
            let prev_r1 = if i % 2 == 0 { prev } else { prev * 0.6 };

            let mut p = PathBuilder::new();
            p.move_to(CENTER_X + a1.cos() * prev_r1, CENTER_Y + a1.sin() * prev_r1)
                .line_to(CENTER_X + a1.cos() * r1, CENTER_Y + a1.sin() * r1)
                .line_to(CENTER_X + a2.cos() * r2, CENTER_Y + a2.sin() * r2)
                .close();

            let filled = i % 2 == 0 && layer % 2 == 0;
            elements.push(PatternElement {
                path_data: p.finish(),
                stroke: Paint::Solid(accent),
                stroke_width: thickness,
                fill: if filled { Paint::Solid(accent) } else { Paint::None },
                opacity: if filled { 0.4 } else { 0.7 },
            });
        }
    }

    RawPattern::strokes_only(elements)
}
