//! Complexity capping by systematic decimation.

use crate::model::PatternElement;

/// Thins `elements` down to at most `max` entries by even-coverage
/// sampling: keep `elements[floor(i * len / max)]` for each output slot.
/// Consumes no PRNG state, so capping can never perturb generation.
pub fn decimate(elements: Vec<PatternElement>, max: usize) -> Vec<PatternElement> {
    if elements.len() <= max {
        return elements;
    }
    let step = elements.len() as f64 / max as f64;
    (0..max)
        .map(|i| elements[(i as f64 * step) as usize].clone())
        .collect()
}
