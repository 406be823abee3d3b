//! The pattern algorithm registry.
//!
//! Every algorithm is a pure function of (PRNG, scheme, config) that
//! emits path elements and, for the gradient-capable entries, gradient
//! definitions. Each draws from the shared generator in a fixed code
//! order; the generator is positional, so reordering two draws changes
//! every value after them.

mod grid;
mod mandala;
mod radial;
mod rays;
mod rings;
mod spiral;

use crate::config::PatternConfig;
use crate::model::{GradientDef, PatternElement};
use crate::palette::{ColorScheme, SCHEMES};
use crate::path::PathBuilder;
use crate::seed::SeededRandom;

/// Label drawing area. The renderer owns the outer shell; algorithms
/// only promise geometry composed around this space.
pub const LABEL_WIDTH: f64 = 337.0;
pub const LABEL_HEIGHT: f64 = 161.0;
pub const CENTER_X: f64 = 164.5;
pub const CENTER_Y: f64 = 80.5;

/// Uncapped algorithm output.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPattern {
    pub gradients: Vec<GradientDef>,
    pub elements: Vec<PatternElement>,
}

impl RawPattern {
    pub(crate) fn strokes_only(elements: Vec<PatternElement>) -> Self {
        Self {
            gradients: Vec::new(),
            elements,
        }
    }
}

/// The closed, ordered algorithm registry.
///
/// The order of `all()` is part of the reproducibility surface: the
/// dispatch index is computed against it, so the table is append-only.
/// Inserting, removing, or reordering entries remaps which algorithm
/// every existing identity resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    RadialCheckerboard,
    RotatingSpiral,
    StarburstRays,
    ConcentricRings,
    TwistedArms,
    PolygonMandala,
    RadialSegments,
    PetalMandala,
    WarpedGrid,
    SquareTunnel,
    WaveRings,
    DoubleHelix,
    DottedVortex,
    StarMandala,
    CurvedRays,
    MoireCircles,
}

impl PatternKind {
    pub const fn all() -> [Self; 16] {
        [
            Self::RadialCheckerboard,
            Self::RotatingSpiral,
            Self::StarburstRays,
            Self::ConcentricRings,
            Self::TwistedArms,
            Self::PolygonMandala,
            Self::RadialSegments,
            Self::PetalMandala,
            Self::WarpedGrid,
            Self::SquareTunnel,
            Self::WaveRings,
            Self::DoubleHelix,
            Self::DottedVortex,
            Self::StarMandala,
            Self::CurvedRays,
            Self::MoireCircles,
        ]
    }

    /// Dispatch: `(seed / scheme_count) % registry_len`. The scheme
    /// index consumes `seed % scheme_count` (see `palette`), so the two
    /// selections use disjoint parts of the seed.
    pub fn from_seed(seed: u32) -> Self {
        let all = Self::all();
        let idx = (seed as usize / SCHEMES.len()) % all.len();
        all[idx]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::RadialCheckerboard => "Radial Checkerboard",
            Self::RotatingSpiral => "Rotating Spiral",
            Self::StarburstRays => "Starburst Rays",
            Self::ConcentricRings => "Concentric Rings",
            Self::TwistedArms => "Twisted Spiral Arms",
            Self::PolygonMandala => "Polygon Mandala",
            Self::RadialSegments => "Rotating Radial Segments",
            Self::PetalMandala => "Petal Mandala",
            Self::WarpedGrid => "Warped Grid",
            Self::SquareTunnel => "Square Tunnel",
            Self::WaveRings => "Wave Rings",
            Self::DoubleHelix => "Double Helix",
            Self::DottedVortex => "Dotted Spiral Vortex",
            Self::StarMandala => "Star Mandala",
            Self::CurvedRays => "Curved Rays",
            Self::MoireCircles => "Moire Circles",
        }
    }

    /// True for algorithms whose first draw may request a gradient.
    pub fn supports_gradients(self) -> bool {
        matches!(
            self,
            Self::RadialCheckerboard
                | Self::RotatingSpiral
                | Self::ConcentricRings
                | Self::TwistedArms
        )
    }

    pub fn generate(
        self,
        rng: &mut SeededRandom,
        scheme: &ColorScheme,
        config: &PatternConfig,
    ) -> RawPattern {
        match self {
            Self::RadialCheckerboard => radial::checkerboard(rng, scheme, config),
            Self::RotatingSpiral => spiral::rotating(rng, scheme, config),
            Self::StarburstRays => rays::starburst(rng, scheme),
            Self::ConcentricRings => rings::concentric(rng, scheme, config),
            Self::TwistedArms => spiral::twisted_arms(rng, scheme, config),
            Self::PolygonMandala => mandala::polygon(rng, scheme),
            Self::RadialSegments => radial::segments(rng, scheme),
            Self::PetalMandala => mandala::petal(rng, scheme),
            Self::WarpedGrid => grid::warped(rng, scheme, config),
            Self::SquareTunnel => rings::tunnel(rng, scheme),
            Self::WaveRings => rings::wave(rng, scheme, config),
            Self::DoubleHelix => spiral::double_helix(rng, scheme, config),
            Self::DottedVortex => spiral::dotted_vortex(rng, scheme, config),
            Self::StarMandala => mandala::star(rng, scheme),
            Self::CurvedRays => rays::curved(rng, scheme),
            Self::MoireCircles => grid::moire(rng, scheme, config),
        }
    }
}

/// Sampled-polyline circle, closed by returning to the start point.
pub(crate) fn circle_path(cx: f64, cy: f64, radius: f64, segments: usize) -> String {
    let mut p = PathBuilder::with_capacity(segments * 16);
    for j in 0..=segments {
        let angle = j as f64 / segments as f64 * std::f64::consts::TAU;
        let x = cx + angle.cos() * radius;
        let y = cy + angle.sin() * radius;
        if j == 0 {
            p.move_to(x, y);
        } else {
            p.line_to(x, y);
        }
    }
    p.finish()
}
