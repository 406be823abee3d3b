//! Concentric compositions: rings, wave rings, and the square tunnel.

use std::f64::consts::TAU;

use crate::config::PatternConfig;
use crate::model::{Paint, PatternElement};
use crate::palette::{ColorScheme, build_gradient};
use crate::path::PathBuilder;
use crate::seed::SeededRandom;

use super::{CENTER_X, CENTER_Y, RawPattern, circle_path};

/// Outline circles drawn outside-in, every other annulus optionally
/// filled. Draw order: gradient gate, ring count, stroke width, fill
/// toggle. The filled annulus is one path: outer loop, inner loop
/// reversed, closed.
pub(super) fn concentric(
    rng: &mut SeededRandom,
    scheme: &ColorScheme,
    config: &PatternConfig,
) -> RawPattern {
    let accent = scheme.accent;
    let base = scheme.base_opacity;
    let mut gradients = Vec::new();

    let mut fill_paint = Paint::Solid(accent);
    if config.enable_gradients && rng.next() > 0.5 {
        let (def, paint) = build_gradient("concentric-grad", accent, rng);
        gradients.push(def);
        fill_paint = paint;
    }

    let rings = rng.range(30.0, 100.0) as usize;
    let max_radius = 250.0;
    let thickness = rng.range(0.5, 4.0);
    let filled = rng.next() > 0.5;
    let segments = if config.simplify_paths { 32 } else { 64 };

    let mut elements = Vec::new();
    for i in (0..rings).rev() {
        let r_outer = (i + 1) as f64 / rings as f64 * max_radius;
        let r_inner = i as f64 / rings as f64 * max_radius;

        if filled && i % 2 == 0 && i < rings - 1 {
            let mut p = PathBuilder::with_capacity(segments * 32);
            for j in 0..=segments {
                let angle = j as f64 / segments as f64 * TAU;
                let x = CENTER_X + angle.cos() * r_outer;
                let y = CENTER_Y + angle.sin() * r_outer;
                if j == 0 {
                    p.move_to(x, y);
                } else {
                    p.line_to(x, y);
                }
            }
            for j in (0..=segments).rev() {
                let angle = j as f64 / segments as f64 * TAU;
                p.line_to(CENTER_X + angle.cos() * r_inner, CENTER_Y + angle.sin() * r_inner);
            }
            p.close();

            elements.push(PatternElement {
                path_data: p.finish(),
                stroke: Paint::None,
                stroke_width: 0.0,
                fill: fill_paint.clone(),
                opacity: 0.9 * base,
            });
        }

        elements.push(PatternElement {
            path_data: circle_path(CENTER_X, CENTER_Y, r_outer, segments),
            stroke: Paint::Solid(accent),
            stroke_width: thickness,
            fill: Paint::None,
            opacity: 0.85 * base,
        });
    }

    RawPattern { gradients, elements }
}

/// Rings whose radius ripples with a fixed angular frequency.
pub(super) fn wave(
    rng: &mut SeededRandom,
    scheme: &ColorScheme,
    config: &PatternConfig,
) -> RawPattern {
    let accent = scheme.accent;

    let rings = rng.range(40.0, 100.0) as usize;
    let max_radius = 250.0;
    let wave_freq = rng.range(6.0, 18.0);
    let wave_amp = rng.range(3.0, 10.0);
    let thickness = rng.range(0.4, 2.5);
    let segments = if config.simplify_paths { 32 } else { 64 };

    let mut elements = Vec::with_capacity(rings);
    for i in 0..rings {
        let base_radius = i as f64 / rings as f64 * max_radius;

        let mut p = PathBuilder::with_capacity(segments * 16);
        for j in 0..=segments {
            let frac = j as f64 / segments as f64;
            let angle = frac * TAU;
            let radius = base_radius + (frac * wave_freq * TAU).sin() * wave_amp;
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
            opacity: 0.7,
        });
    }

    RawPattern::strokes_only(elements)
}

/// Shrinking rectangles toward the center, alternate layers filled.
/// Painted back-to-front so inner layers land on top.
pub(super) fn tunnel(rng: &mut SeededRandom, scheme: &ColorScheme) -> RawPattern {
    let accent = scheme.accent;

    let layers = rng.range(40.0, 80.0) as usize;
    let thickness = rng.range(0.4, 2.0);
    let filled = rng.next() > 0.5;

    let mut elements = Vec::new();
    for i in (1..=layers).rev() {
        let scale = i as f64 / layers as f64;
        let width = 250.0 * scale;
        let height = 180.0 * scale;
        let x = CENTER_X - width / 2.0;
        let y = CENTER_Y - height / 2.0;

        let rect = {
            let mut p = PathBuilder::new();
            p.move_to(x, y)
                .line_to(x + width, y)
                .line_to(x + width, y + height)
                .line_to(x, y + height)
                .close();
            p.finish()
        };

        if filled && i % 2 == 0 {
            elements.push(PatternElement {
                path_data: rect.clone(),
                stroke: Paint::None,
                stroke_width: 0.0,
                fill: Paint::Solid(accent),
                opacity: 0.5,
            });
        }

        elements.push(PatternElement {
            path_data: rect,
            stroke: Paint::Solid(accent),
            stroke_width: thickness,
            fill: Paint::None,
            opacity: 0.7 + (1.0 - scale) * 0.3,
        });
    }

    RawPattern::strokes_only(elements)
}
