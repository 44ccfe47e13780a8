//! Majority vote over a neighbor set.

use crate::error::KnnError;

/// Returns the most frequent label and its vote count.
///
/// Labels are tallied in a single pass, in order of first appearance. The
/// running leader is replaced only when a label's tally strictly exceeds the
/// leader's own tally, so on a tie the label that reached the winning count
/// first is kept. For `[a, b, b, a]` the answer is `b`: it reached two votes
/// before `a` did.
///
/// Only equality is used on labels, so any label type works.
///
/// # Errors
///
/// Returns [`KnnError::EmptyNeighborSet`] if `labels` yields nothing.
pub fn majority_vote<'a, L, I>(labels: I) -> Result<(L, usize), KnnError>
where
    L: PartialEq + Clone + 'a,
    I: IntoIterator<Item = &'a L>,
{
    // (label, tally) in order of first appearance.
    let mut tallies: Vec<(&'a L, usize)> = Vec::new();
    let mut leader: Option<(&'a L, usize)> = None;

    for label in labels {
        let tally = match tallies.iter_mut().find(|entry| entry.0 == label) {
            Some(entry) => {
                entry.1 += 1;
                entry.1
            }
            None => {
                tallies.push((label, 1));
                1
            }
        };

        match leader {
            Some((_, count)) if tally <= count => {}
            _ => leader = Some((label, tally)),
        }
    }

    leader
        .map(|(label, count)| (label.clone(), count))
        .ok_or(KnnError::EmptyNeighborSet)
}
