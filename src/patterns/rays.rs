//! Rays from the center: straight starbursts and curved sweeps.

use std::f64::consts::TAU;

use crate::model::{Paint, PatternElement};
use crate::palette::ColorScheme;
use crate::path::PathBuilder;
use crate::seed::SeededRandom;

use super::{CENTER_X, CENTER_Y, RawPattern};

/// Straight rays; each ray's opacity is its own draw, so the ray count
/// draw fixes the length of the whole sequence.
pub(super) fn starburst(rng: &mut SeededRandom, scheme: &ColorScheme) -> RawPattern {
    let accent = scheme.accent;

    let rays = rng.range(24.0, 96.0) as usize;
    let max_radius = 250.0;
    let thickness = rng.range(0.5, 4.0);

    let mut elements = Vec::with_capacity(rays);
    for i in 0..rays {
        let angle = i as f64 / rays as f64 * TAU;

        let mut p = PathBuilder::new();
        p.move_to(CENTER_X, CENTER_Y).line_to(
            CENTER_X + angle.cos() * max_radius,
            CENTER_Y + angle.sin() * max_radius,
        );

        elements.push(PatternElement {
            path_data: p.finish(),
            stroke: Paint::Solid(accent),
            stroke_width: thickness,
            fill: Paint::None,
            opacity: rng.range(0.4, 0.9),
        });
    }

    RawPattern::strokes_only(elements)
}

/// Quadratic rays bent by a shared curvature; the control distance is
/// drawn per ray.
pub(super) fn curved(rng: &mut SeededRandom, scheme: &ColorScheme) -> RawPattern {
    let accent = scheme.accent;

    let rays = rng.range(20.0, 60.0) as usize;
    let curvature = rng.range(0.5, 1.8);
    let thickness = rng.range(0.8, 4.0);
    let end_dist = 280.0;

    let mut elements = Vec::with_capacity(rays);
    for i in 0..rays {
        let angle = i as f64 / rays as f64 * TAU;
        let control_dist = rng.range(100.0, 180.0);

        let sx = CENTER_X + angle.cos() * 10.0;
        let sy = CENTER_Y + angle.sin() * 10.0;

        let control_angle = angle + curvature;
        let cx = CENTER_X + control_angle.cos() * control_dist;
        let cy = CENTER_Y + control_angle.sin() * control_dist;

        let end_angle = angle + curvature * 0.5;
        let ex = CENTER_X + end_angle.cos() * end_dist;
        let ey = CENTER_Y + end_angle.sin() * end_dist;

        let mut p = PathBuilder::new();
        p.move_to(sx, sy).quad_to(cx, cy, ex, ey);

        elements.push(PatternElement {
            path_data: p.finish(),
            stroke: Paint::Solid(accent),
            stroke_width: thickness,
            fill: Paint::None,
            opacity: 0.6,
        });
    }

    RawPattern::strokes_only(elements)
}
