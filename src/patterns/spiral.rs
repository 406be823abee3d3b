//! Spiral families: twisted rings, arms, helices, and dotted vortices.

use std::f64::consts::{PI, TAU};

use crate::config::PatternConfig;
use crate::model::{Paint, PatternElement};
use crate::palette::{ColorScheme, build_gradient};
use crate::path::PathBuilder;
use crate::seed::SeededRandom;

use super::{CENTER_X, CENTER_Y, RawPattern, circle_path};

/// Concentric rings, each twisted a little further than the last.
/// Draw order: gradient gate, ring count, rotation step, stroke width.
pub(super) fn rotating(
    rng: &mut SeededRandom,
    scheme: &ColorScheme,
    config: &PatternConfig,
) -> RawPattern {
    let accent = scheme.accent;
    let base = scheme.base_opacity;
    let mut gradients = Vec::new();

    let mut stroke_paint = Paint::Solid(accent);
    if config.enable_gradients && rng.next() > 0.5 {
        let (def, paint) = build_gradient("spiral-grad", accent, rng);
        gradients.push(def);
        stroke_paint = paint;
    }

    let rings = rng.range(60.0, 150.0) as usize;
    let max_radius = 250.0;
    let rotation = rng.range(0.03, 0.15);
    let thickness = rng.range(0.4, 3.0);
    let segments = if config.simplify_paths { 32 } else { 64 };

    let mut elements = Vec::with_capacity(rings);
    for i in 0..rings {
        let radius = i as f64 / rings as f64 * max_radius;
        let twist = i as f64 * rotation;

        let mut p = PathBuilder::with_capacity(segments * 16);
        for j in 0..=segments {
            let angle = j as f64 / segments as f64 * TAU + twist;
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
            stroke: stroke_paint.clone(),
            stroke_width: thickness,
            fill: Paint::None,
            opacity: 0.8 * base,
        });
    }

    RawPattern { gradients, elements }
}

/// Arms sweeping out from the center with a constant angular rate.
pub(super) fn twisted_arms(
    rng: &mut SeededRandom,
    scheme: &ColorScheme,
    config: &PatternConfig,
) -> RawPattern {
    let accent = scheme.accent;
    let base = scheme.base_opacity;
    let mut gradients = Vec::new();

    let mut stroke_paint = Paint::Solid(accent);
    if config.enable_gradients && rng.next() > 0.5 {
        let (def, paint) = build_gradient("twisted-grad", accent, rng);
        gradients.push(def);
        stroke_paint = paint;
    }

    let arms = rng.range(3.0, 12.0) as usize;
    let rotations = rng.range(4.0, 12.0);
    let max_radius = 260.0;
    let thickness = rng.range(1.0, 5.0);
    let steps = if config.simplify_paths { 50 } else { 100 };

    let mut elements = Vec::with_capacity(arms);
    for arm in 0..arms {
        let start = arm as f64 / arms as f64 * TAU;

        let mut p = PathBuilder::with_capacity(steps * 16);
        p.move_to(CENTER_X, CENTER_Y);
        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            let radius = t * max_radius;
            let angle = start + t * rotations * TAU;
            p.line_to(CENTER_X + angle.cos() * radius, CENTER_Y + angle.sin() * radius);
        }

        elements.push(PatternElement {
            path_data: p.finish(),
            stroke: stroke_paint.clone(),
            stroke_width: thickness,
            fill: Paint::None,
            opacity: 0.7 * base,
        });
    }

    RawPattern { gradients, elements }
}

/// An even number of arms whose radius oscillates while they wind.
pub(super) fn double_helix(
    rng: &mut SeededRandom,
    scheme: &ColorScheme,
    config: &PatternConfig,
) -> RawPattern {
    let accent = scheme.accent;

    let arms = (rng.range(2.0, 6.0) as usize) * 2;
    let rotations = rng.range(6.0, 15.0);
    let max_radius = 260.0;
    let thickness = rng.range(1.5, 5.0);
    let steps = if config.simplify_paths { 50 } else { 100 };

    let mut elements = Vec::with_capacity(arms);
    for arm in 0..arms {
        let start = arm as f64 / arms as f64 * TAU;

        let mut p = PathBuilder::with_capacity(steps * 16);
        p.move_to(CENTER_X, CENTER_Y);
        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            let radius = t * max_radius + (t * PI * 4.0).sin() * 20.0;
            let angle = start + t * rotations * TAU;
            p.line_to(CENTER_X + angle.cos() * radius, CENTER_Y + angle.sin() * radius);
        }

        elements.push(PatternElement {
            path_data: p.finish(),
            stroke: Paint::Solid(accent),
            stroke_width: thickness,
            fill: Paint::None,
            opacity: 0.7,
        });
    }

    RawPattern::strokes_only(elements)
}

/// Filled dots along spiral tracks. The per-dot winding rate is a draw,
/// so dot count and order are fixed by the spiral/density draws alone.
pub(super) fn dotted_vortex(
    rng: &mut SeededRandom,
    scheme: &ColorScheme,
    config: &PatternConfig,
) -> RawPattern {
    let accent = scheme.accent;

    let spirals = rng.range(4.0, 12.0) as usize;
    let density = rng.range(60.0, 120.0) as usize;
    let dot_size = rng.range(1.5, 5.0);
    let dot_segments = if config.simplify_paths { 8 } else { 16 };

    let mut elements = Vec::with_capacity(spirals * density);
    for s in 0..spirals {
        let start = s as f64 / spirals as f64 * TAU;

        for i in 0..density {
            let t = i as f64 / density as f64;
            let radius = t * 260.0;
            let winding = t * rng.range(4.0, 8.0) * PI;
            let angle = start + winding;

            let x = CENTER_X + angle.cos() * radius;
            let y = CENTER_Y + angle.sin() * radius;

            elements.push(PatternElement {
                path_data: circle_path(x, y, dot_size, dot_segments),
                stroke: Paint::None,
                stroke_width: 0.0,
                fill: Paint::Solid(accent),
                opacity: 0.6,
            });
        }
    }

    RawPattern::strokes_only(elements)
}
