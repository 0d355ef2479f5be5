//! Restore a stable window ordering across restarts.
//!
//! Each stored window, in stored order, claims the closest still-unclaimed
//! fresh window by [`edit_distance`]. Fresh windows nobody claimed (windows
//! opened since the snapshot) go last in their original order.
//!
//! The assignment is greedy: an early stored window can take a fresh window
//! that a later one would have matched better, and nothing is revisited. It
//! does not minimize total distance. Callers rely on this exact selection
//! order for stability, so it must stay greedy.

use tracing::debug;

use crate::core::window::TokenSequence;
use crate::matching::distance::edit_distance;

/// Permutation of `fresh` as indices, following the stored ordering.
///
/// - `stored` empty: the identity permutation.
/// - `fresh` empty: an empty permutation.
///
/// Ties go to the earliest fresh window still in the pool.
#[must_use]
pub fn reorder_indices<T: AsRef<[String]>>(fresh: &[T], stored: &[T]) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..fresh.len()).collect();
    let mut order = Vec::with_capacity(fresh.len());

    for (stored_idx, stored_window) in stored.iter().enumerate() {
        if pool.is_empty() {
            break;
        }

        let mut best: Option<(usize, usize)> = None;
        for (slot, &fresh_idx) in pool.iter().enumerate() {
            let distance = edit_distance(stored_window.as_ref(), fresh[fresh_idx].as_ref());
            if best.map_or(true, |(_, min)| distance < min) {
                best = Some((slot, distance));
            }
        }

        if let Some((slot, distance)) = best {
            let fresh_idx = pool.remove(slot);
            debug!(stored = stored_idx, fresh = fresh_idx, distance, "Paired window");
            order.push(fresh_idx);
        }
    }

    order.extend(pool);
    order
}

/// Reorder `fresh` windows to follow the `stored` snapshot.
///
/// Returns a permutation of `fresh`; window contents are never changed.
///
/// # Examples
///
/// ```
/// use tabfold::matching::reorder::reorder;
///
/// let w = |urls: &[&str]| urls.iter().map(|u| u.to_string()).collect::<Vec<_>>();
/// let stored = vec![w(&["A", "B", "C"]), w(&["D", "E"])];
/// let fresh = vec![w(&["D", "E", "Z"]), w(&["A", "B"])];
///
/// assert_eq!(reorder(&fresh, &stored), vec![w(&["A", "B"]), w(&["D", "E", "Z"])]);
/// ```
#[must_use]
pub fn reorder(fresh: &[TokenSequence], stored: &[TokenSequence]) -> Vec<TokenSequence> {
    if stored.is_empty() {
        return fresh.to_vec();
    }

    reorder_indices(fresh, stored)
        .into_iter()
        .map(|idx| fresh[idx].clone())
        .collect()
}
