//! The vector artifact handed to renderers: path elements, optional
//! linear gradients, and a background color. Everything here is
//! immutable once produced and serializes to a byte-stable form.

use serde::{Serialize, Serializer};

/// A stroke or fill value: nothing, a solid color, or a reference to a
/// gradient defined on the same pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paint {
    None,
    Solid(&'static str),
    Gradient(String),
}

impl Paint {
    /// The SVG paint string: `none`, `#rrggbb`, or `url(#id)`.
    pub fn as_svg(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Solid(color) => color,
            Self::Gradient(reference) => reference,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl Serialize for Paint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_svg())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GradientKind {
    #[serde(rename = "linear")]
    Linear,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    /// Stop position, e.g. `0%` or `100%`.
    pub offset: &'static str,
    pub color: &'static str,
    pub opacity: f64,
}

/// A linear gradient definition referenced by elements via `url(#id)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientDef {
    pub id: String,
    pub kind: GradientKind,
    /// Endpoint coordinates as percentage strings, e.g. `87.3%`.
    pub x1: String,
    pub y1: String,
    pub x2: String,
    pub y2: String,
    pub stops: Vec<GradientStop>,
}

/// One stroked and/or filled path in label coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternElement {
    /// Move/line/quadratic commands, one-decimal coordinates.
    pub path_data: String,
    pub stroke: Paint,
    pub stroke_width: f64,
    pub fill: Paint,
    pub opacity: f64,
}

/// The final artifact: ordered gradients, ordered elements, background.
/// Ordering is part of the reproducibility contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WavePattern {
    pub gradients: Vec<GradientDef>,
    pub elements: Vec<PatternElement>,
    pub background_color: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_serializes_as_svg_string() {
        let solid = serde_json::to_string(&Paint::Solid("#d4d4d8")).unwrap();
        assert_eq!(solid, r##""#d4d4d8""##);
        let none = serde_json::to_string(&Paint::None).unwrap();
        assert_eq!(none, r#""none""#);
        let grad = serde_json::to_string(&Paint::Gradient("url(#spiral-grad)".into())).unwrap();
        assert_eq!(grad, r#""url(#spiral-grad)""#);
    }

    #[test]
    fn gradient_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&GradientKind::Linear).unwrap(), r#""linear""#);
    }
}
