//! Top-k nearest neighbor selection.

use vicinity_geom::{LabeledPoint, Point, euclidean};

use crate::result::Neighbor;

/// Selects the `k` nearest training points to `query` in a single pass.
///
/// `neighbors` is kept sorted ascending by distance with at most `k` entries.
/// A new point is inserted after every entry whose distance is `<=` its own,
/// so equal distances keep scan order. Once the buffer is full a point enters
/// only if it is strictly closer than the current last entry, which is then
/// dropped. The outcome equals a stable sort of the whole training set by
/// distance truncated to `k`, without sorting all `n` points.
///
/// Writes results into caller-provided buffers:
/// - `distances`: distance of every training point to `query`, indexed by
///   training position (overwritten on every call)
/// - `neighbors`: the selected neighbor set
///
/// # Panics
///
/// Debug-asserts that `k >= 1` and `k <= training.len()`.
pub fn select_k_nearest<L>(
    training: &[LabeledPoint<L>],
    query: Point,
    k: usize,
    distances: &mut Vec<f64>,
    neighbors: &mut Vec<Neighbor>,
) {
    debug_assert!(k >= 1);
    debug_assert!(k <= training.len());

    distances.clear();
    neighbors.clear();

    for (index, lp) in training.iter().enumerate() {
        let distance = euclidean(lp.point(), query);
        distances.push(distance);

        if neighbors.len() == k {
            match neighbors.last() {
                Some(last) if distance < last.distance() => {
                    neighbors.pop();
                }
                _ => continue,
            }
        }

        let pos = neighbors.partition_point(|n| n.distance() <= distance);
        neighbors.insert(pos, Neighbor::new(index, distance));
    }
}
