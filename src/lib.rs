//! Deterministic placeholder-label pattern generation.
//!
//! An identity tuple (creator, title, optional year) is hashed to a
//! seed; the seed selects a color scheme and one of a fixed registry of
//! pattern algorithms; the algorithm draws from a seeded generator in a
//! fixed order to emit vector path elements; the element list is
//! decimated to a configured cap and memoized. The same identity and
//! config always produce byte-identical output, across processes and
//! over time.

pub mod cache;
pub mod cap;
pub mod config;
pub mod engine;
pub mod identity;
pub mod model;
pub mod palette;
pub mod path;
pub mod patterns;
pub mod seed;

pub use cache::PatternCache;
pub use config::PatternConfig;
pub use engine::{PatternEngine, PatternMeta};
pub use identity::Identity;
pub use model::{GradientDef, GradientStop, Paint, PatternElement, WavePattern};
pub use patterns::PatternKind;
