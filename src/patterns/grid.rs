//! Full-label lattices: the warped grid and the moire circle field.

use crate::config::PatternConfig;
use crate::model::{Paint, PatternElement};
use crate::palette::ColorScheme;
use crate::path::PathBuilder;
use crate::seed::SeededRandom;

use super::{CENTER_X, CENTER_Y, LABEL_HEIGHT, LABEL_WIDTH, RawPattern, circle_path};

/// Grid lines displaced radially by a sine of their distance from the
/// center. No draws inside the loops; the warp is pure geometry.
pub(super) fn warped(
    rng: &mut SeededRandom,
    scheme: &ColorScheme,
    config: &PatternConfig,
) -> RawPattern {
    let accent = scheme.accent;

    let grid_size = rng.range(12.0, 24.0) as usize;
    let warp_intensity = rng.range(30.0, 80.0);
    let thickness = rng.range(0.4, 2.5);
    let (h_steps, v_steps) = if config.simplify_paths { (50, 30) } else { (100, 60) };

    let mut elements = Vec::with_capacity(grid_size * 3 + 2);

    for i in 0..=grid_size {
        let base_y = i as f64 / grid_size as f64 * LABEL_HEIGHT;

        let mut p = PathBuilder::with_capacity(h_steps * 16);
        for j in 0..=h_steps {
            let x = j as f64 / h_steps as f64 * LABEL_WIDTH;
            let dx = x - CENTER_X;
            let dy = base_y - CENTER_Y;
            let distance = (dx * dx + dy * dy).sqrt();
            let warp = (distance * 0.03).sin() * warp_intensity;
            let angle = dy.atan2(dx);
            let y = base_y + angle.sin() * warp;
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

    for i in 0..=grid_size * 2 {
        let base_x = i as f64 / (grid_size * 2) as f64 * LABEL_WIDTH;

        let mut p = PathBuilder::with_capacity(v_steps * 16);
        for j in 0..=v_steps {
            let y = j as f64 / v_steps as f64 * LABEL_HEIGHT;
            let dx = base_x - CENTER_X;
            let dy = y - CENTER_Y;
            let distance = (dx * dx + dy * dy).sqrt();
            let warp = (distance * 0.03).sin() * warp_intensity;
            let angle = dy.atan2(dx);
            let x = base_x + angle.cos() * warp;
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

/// Two circle lattices offset by half the spacing; their interference
/// reads as a moire. The sweep extends one radius past every edge so
/// the label has no bare border.
pub(super) fn moire(
    rng: &mut SeededRandom,
    scheme: &ColorScheme,
    config: &PatternConfig,
) -> RawPattern {
    let accent = scheme.accent;

    let spacing = rng.range(15.0, 30.0);
    let radius = rng.range(10.0, 20.0);
    let thickness = rng.range(0.6, 2.0);
    let offset = spacing / 2.0;
    let segments = if config.simplify_paths { 16 } else { 32 };

    let mut elements = Vec::new();
    let lattice = |x0: f64, y0: f64, elements: &mut Vec<PatternElement>| {
        let mut y = y0;
        while y < LABEL_HEIGHT + radius {
            let mut x = x0;
            while x < LABEL_WIDTH + radius {
                elements.push(PatternElement {
                    path_data: circle_path(x, y, radius, segments),
                    stroke: Paint::Solid(accent),
                    stroke_width: thickness,
                    fill: Paint::None,
                    opacity: 0.5,
                });
                x += spacing;
            }
            y += spacing;
        }
    };

    lattice(-radius, -radius, &mut elements);
    lattice(-radius + offset, -radius + offset, &mut elements);

    RawPattern::strokes_only(elements)
}
