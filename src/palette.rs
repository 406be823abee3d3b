//! Color schemes and the gradient builder.
//!
//! Scheme selection is a pure function of the seed and consumes no PRNG
//! draws, so adding schemes later cannot perturb any algorithm's draw
//! sequence. The table is append-only: its length enters the algorithm
//! dispatch formula, so reordering or removal remaps every identity.

use crate::model::{GradientDef, GradientKind, GradientStop, Paint};
use crate::seed::SeededRandom;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub name: &'static str,
    pub background: &'static str,
    pub accent: &'static str,
    pub base_opacity: f64,
}

pub const SCHEMES: &[ColorScheme] = &[ColorScheme {
    name: "gray-white",
    background: "#000000",
    accent: "#d4d4d8",
    base_opacity: 0.8,
}];

pub fn scheme_for_seed(seed: u32) -> &'static ColorScheme {
    &SCHEMES[seed as usize % SCHEMES.len()]
}

/// Builds a two-stop linear gradient at a random angle with a random
/// end-stop darkening, returning the definition and the paint that
/// references it. Consumes exactly two draws; callers must invoke it at
/// a fixed point in their draw sequence.
pub fn build_gradient(
    id: &str,
    color: &'static str,
    rng: &mut SeededRandom,
) -> (GradientDef, Paint) {
    let angle = rng.range(0.0, 360.0).to_radians();
    let x1 = angle.cos() * 50.0 + 50.0;
    let y1 = angle.sin() * 50.0 + 50.0;
    let x2 = (angle + std::f64::consts::PI).cos() * 50.0 + 50.0;
    let y2 = (angle + std::f64::consts::PI).sin() * 50.0 + 50.0;

    let darken = rng.range(0.3, 0.7);

    let def = GradientDef {
        id: id.to_string(),
        kind: GradientKind::Linear,
        x1: format!("{x1:.1}%"),
        y1: format!("{y1:.1}%"),
        x2: format!("{x2:.1}%"),
        y2: format!("{y2:.1}%"),
        stops: vec![
            GradientStop {
                offset: "0%",
                color,
                opacity: 1.0,
            },
            GradientStop {
                offset: "100%",
                color,
                opacity: darken,
            },
        ],
    };
    let paint = Paint::Gradient(format!("url(#{id})"));
    (def, paint)
}
