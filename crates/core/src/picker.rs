//! Uniform random selection for the quiz endpoint.

use rand::seq::IndexedRandom;

/// Pick one element uniformly at random, or `None` if the set is empty.
///
/// The caller is expected to have applied the category and exclusion filters
/// already; selection is deliberately non-deterministic across invocations.
pub fn pick_random<T>(candidates: &[T]) -> Option<&T> {
    candidates.choose(&mut rand::rng())
}
