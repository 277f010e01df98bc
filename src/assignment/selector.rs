//! Reviewer candidate selection.
//!
//! Selection never touches storage: callers read the candidate pool inside
//! their transaction and hand it over together with the generator to draw
//! from.

use rand::{seq::SliceRandom, Rng};
use std::collections::BTreeSet;

/// Picks at most `limit` members of `pool` that are not in `exclude`.
///
/// When every eligible candidate fits, all of them are returned in ascending
/// order and the generator is left untouched. Otherwise the eligible set is
/// shuffled uniformly and the first `limit` entries are kept.
pub fn pick<T, R>(rng: &mut R, pool: &BTreeSet<T>, exclude: &BTreeSet<T>, limit: usize) -> Vec<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    let mut eligible: Vec<T> = pool.difference(exclude).cloned().collect();

    if eligible.len() > limit {
        eligible.shuffle(rng);
        eligible.truncate(limit);
    }

    eligible
}

/// Uniform draw of a single eligible candidate.
pub fn pick_one<T, R>(rng: &mut R, pool: &BTreeSet<T>, exclude: &BTreeSet<T>) -> Option<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    pick(rng, pool, exclude, 1).pop()
}
