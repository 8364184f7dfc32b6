//! No-repeat question selection.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::QuizError;

/// Draw `count` distinct indices in `0..pool_len` that are not in `excluded`.
///
/// Sampling is uniform and without replacement. A `count` larger than the
/// number of available indices is capped; an empty available set is an
/// [`QuizError::ExhaustedPool`] rather than an empty result.
pub fn select_indices<R: Rng + ?Sized>(
    pool_len: usize,
    excluded: &BTreeSet<usize>,
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>, QuizError> {
    let available: Vec<usize> = (0..pool_len).filter(|i| !excluded.contains(i)).collect();
    if available.is_empty() {
        return Err(QuizError::ExhaustedPool { pool_len });
    }

    let count = count.min(available.len());
    let chosen: Vec<usize> = available.choose_multiple(rng, count).copied().collect();
    tracing::debug!(
        available = available.len(),
        requested = count,
        ?chosen,
        "selected question indices"
    );
    Ok(chosen)
}
