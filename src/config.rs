use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ELEMENTS: usize = 60;

/// Per-call generation knobs. Part of the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Hard cap on emitted elements; over-long output is decimated.
    pub max_elements: usize,
    /// Allow algorithms that support gradients to draw for one.
    pub enable_gradients: bool,
    /// Sample curves at half density.
    pub simplify_paths: bool,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            max_elements: DEFAULT_MAX_ELEMENTS,
            enable_gradients: false,
            simplify_paths: true,
        }
    }
}

impl PatternConfig {
    /// Canonical key fragment. Field order is fixed; two configs agree
    /// on this string exactly when they generate identical patterns.
    pub fn cache_token(&self) -> String {
        format!(
            "max_elements={};gradients={};simplify={}",
            self.max_elements, self.enable_gradients, self.simplify_paths
        )
    }
}
