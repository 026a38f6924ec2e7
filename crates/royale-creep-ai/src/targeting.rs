//! Nearest-candidate search.
//!
//! Ties go to the candidate seen first, so callers get a deterministic
//! pick as long as they iterate in a stable order.

use royale_core::types::Vector2;

/// Find the candidate closest to `from`.
///
/// Returns the candidate's key and its distance, or `None` for an empty set.
pub fn nearest<K>(
    from: Vector2,
    candidates: impl IntoIterator<Item = (K, Vector2)>,
) -> Option<(K, f64)> {
    let mut best: Option<(K, f64)> = None;
    for (key, location) in candidates {
        let distance = from.distance_to(location);
        match &best {
            Some((_, best_distance)) if distance >= *best_distance => {}
            _ => best = Some((key, distance)),
        }
    }
    best
}
