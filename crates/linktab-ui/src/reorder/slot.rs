//! Nearest-boundary slot search along the strip axis.

use linktab_core::profiling::profile_function;

/// Boundary weights for a row of siblings.
///
/// One weight per sibling (its left offset) plus a trailing weight one host
/// width past the last sibling, so the slot after the last sibling is
/// reachable. An empty row has no weights.
pub fn generate_weights(sibling_lefts: &[f32], host_width: f32) -> Vec<f32> {
    let Some(&last) = sibling_lefts.last() else {
        return Vec::new();
    };
    let mut weights = Vec::with_capacity(sibling_lefts.len() + 1);
    weights.extend_from_slice(sibling_lefts);
    weights.push(last + host_width);
    weights
}

/// Index of the weight nearest to `center`, clamped to at least `min_slot`.
///
/// Ties resolve to the first such index. Returns `None` when `weights` is
/// empty.
pub fn nearest_slot(weights: &[f32], center: f32, min_slot: usize) -> Option<usize> {
    profile_function!();
    let mut best: Option<(usize, f32)> = None;
    for (index, weight) in weights.iter().enumerate() {
        let distance = (weight - center).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index.max(min_slot))
}
