//! Annular-sector mandalas.

use std::f64::consts::TAU;

use crate::config::PatternConfig;
use crate::model::{Paint, PatternElement};
use crate::palette::{ColorScheme, build_gradient};
use crate::path::PathBuilder;
use crate::seed::SeededRandom;

use super::{CENTER_X, CENTER_Y, RawPattern};

fn sector_path(r1: f64, r2: f64, a1: f64, a2: f64) -> String {
    let mut p = PathBuilder::new();
    p.move_to(CENTER_X + a1.cos() * r1, CENTER_Y + a1.sin() * r1)
        .line_to(CENTER_X + a2.cos() * r1, CENTER_Y + a2.sin() * r1)
        .line_to(CENTER_X + a2.cos() * r2, CENTER_Y + a2.sin() * r2)
        .line_to(CENTER_X + a1.cos() * r2, CENTER_Y + a1.sin() * r2)
        .close();
    p.finish()
}

/// Radial checkerboard. Draw order: gradient gate, ring count, segment
/// count, stroke width, fill parity.
pub(super) fn checkerboard(
    rng: &mut SeededRandom,
    scheme: &ColorScheme,
    config: &PatternConfig,
) -> RawPattern {
    let accent = scheme.accent;
    let base = scheme.base_opacity;
    let mut gradients = Vec::new();

    let mut fill_paint = Paint::Solid(accent);
    if config.enable_gradients && rng.next() > 0.5 {
        let (def, paint) = build_gradient("radial-grad", accent, rng);
        gradients.push(def);
        fill_paint = paint;
    }

    let rings = rng.range(40.0, 120.0) as usize;
    let segments = rng.range(16.0, 64.0) as usize;
    let max_radius = 250.0;
    let thickness = rng.range(0.3, 2.5);
    let fill_parity = rng.range(0.0, 4.0) as u32;

    let mut elements = Vec::with_capacity(rings * segments);
    for ring in 0..rings {
        let r1 = ring as f64 / rings as f64 * max_radius;
        let r2 = (ring + 1) as f64 / rings as f64 * max_radius;

        for seg in 0..segments {
            let a1 = seg as f64 / segments as f64 * TAU;
            let a2 = (seg + 1) as f64 / segments as f64 * TAU;

            let filled = match fill_parity {
                0 => (ring + seg) % 2 == 0,
                1 => seg % 2 == 0,
                2 => ring % 2 == 0,
                _ => ring % 3 == 0 && seg % 2 == 0,
            };

            elements.push(PatternElement {
                path_data: sector_path(r1, r2, a1, a2),
                stroke: Paint::Solid(accent),
                stroke_width: thickness,
                fill: if filled { fill_paint.clone() } else { Paint::None },
                opacity: if filled { 0.8 * base } else { 0.9 * base },
            });
        }
    }

    RawPattern { gradients, elements }
}

/// Alternating filled sectors whose rings twist against each other.
pub(super) fn segments(rng: &mut SeededRandom, scheme: &ColorScheme) -> RawPattern {
    let accent = scheme.accent;

    let segments = rng.range(12.0, 48.0) as usize;
    let layers = rng.range(30.0, 80.0) as usize;
    let max_radius = 250.0;
    let rotation = rng.range(0.03, 0.12);
    let thickness = rng.range(0.3, 1.5);

    let mut elements = Vec::new();
    for layer in 0..layers {
        let r_inner = layer as f64 / layers as f64 * max_radius;
        let r_outer = (layer + 1) as f64 / layers as f64 * max_radius;
        let twist = layer as f64 * rotation;

        for seg in 0..segments {
            if seg % 2 == 0 {
                continue;
            }
            let a1 = seg as f64 / segments as f64 * TAU + twist;
            let a2 = (seg + 1) as f64 / segments as f64 * TAU + twist;

            elements.push(PatternElement {
                path_data: sector_path(r_inner, r_outer, a1, a2),
                stroke: Paint::Solid(accent),
                stroke_width: thickness,
                fill: Paint::Solid(accent),
                opacity: 0.6,
            });
        }
    }

    RawPattern::strokes_only(elements)
}
