//! Cycle walking: fitting the power-of-two Feistel network onto `0..=max_index`.
//!
//! The network permutes `[0, 2^w)`. Starting from an in-range value and
//! repeatedly applying the network traces that value's cycle, which must come
//! back into range no later than at the starting value itself. Taking the first
//! in-range value on the cycle therefore restricts the network to a bijection
//! on `0..=max_index`. The inverse walks the inverse network the same way.
//!
//! The number of evaluations is small in expectation (at most two on average,
//! since `2^w <= 2 * (max_index + 1)`) but only bounded by the cycle length.

use crate::{bit_split::BitSplit, feistel::FeistelNetwork};

/// Returns the position of `index` in a keyed permutation of `0..=max_index`.
///
/// For fixed `max_index`, `seed` and `rounds` the map
/// `index -> index_shuffle(index, max_index, seed, rounds)` is a bijection on
/// `0..=max_index`. The result depends only on the arguments and on
/// [`ROUND_FUNCTION_VERSION`](crate::ROUND_FUNCTION_VERSION).
///
/// `rounds` should be even and at least 4. Larger values improve the mixing
/// for small `max_index` at a linear cost in time; 8 is a good trade-off
/// (see [`Rounds::DEFAULT`](crate::Rounds::DEFAULT)).
///
/// Use [`IndexShuffle`](crate::IndexShuffle) for a validating interface.
///
/// # Preconditions
///
/// `index <= max_index`, and `rounds` is even and at least 4. Violations are
/// caught by debug assertions. In release builds the output is deterministic
/// but unspecified: an out-of-range `index` may map to an out-of-range value,
/// and an odd round count still yields a permutation, just not the documented
/// one.
///
/// # Examples
///
/// ```
/// use index_shuffle::index_shuffle;
///
/// let order: Vec<u64> = (0..=9).map(|i| index_shuffle(i, 9, 42, 8)).collect();
///
/// let mut sorted = order.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, (0..=9).collect::<Vec<_>>());
/// ```
#[must_use]
pub fn index_shuffle(index: u64, max_index: u64, seed: u32, rounds: u32) -> u64 {
    debug_assert_preconditions(index, max_index, rounds);
    if max_index == 0 {
        return 0;
    }
    let network = FeistelNetwork::new(BitSplit::for_max_index(max_index), seed, rounds);
    cycle_walk(index, max_index, network.split(), |x| network.forward(x))
}

/// Returns the index whose shuffled position is `position`.
///
/// This is the inverse of [`index_shuffle`] for the same `max_index`, `seed`
/// and `rounds`:
///
/// ```
/// use index_shuffle::{index_shuffle, index_unshuffle};
///
/// for index in 0..=1000 {
///     let position = index_shuffle(index, 1000, 7, 8);
///     assert_eq!(index_unshuffle(position, 1000, 7, 8), index);
/// }
/// ```
///
/// The preconditions and the release-build behavior on violation are the
/// same as for [`index_shuffle`], with `position` in place of `index`.
#[must_use]
pub fn index_unshuffle(position: u64, max_index: u64, seed: u32, rounds: u32) -> u64 {
    debug_assert_preconditions(position, max_index, rounds);
    if max_index == 0 {
        return 0;
    }
    let network = FeistelNetwork::new(BitSplit::for_max_index(max_index), seed, rounds);
    cycle_walk(position, max_index, network.split(), |x| network.backward(x))
}

fn debug_assert_preconditions(index: u64, max_index: u64, rounds: u32) {
    debug_assert!(
        index <= max_index,
        "index {index} is out of range 0..={max_index}"
    );
    debug_assert!(
        rounds >= 4 && rounds % 2 == 0,
        "round count must be even and at least 4, got {rounds}"
    );
}

/// Applies `step` until the value lands in `0..=max_index`.
///
/// A walk that starts out of range may never enter it; it stops once it is
/// back at its starting value.
fn cycle_walk(start: u64, max_index: u64, split: BitSplit, step: impl Fn(u64) -> u64) -> u64 {
    let start = start & split.mask();
    let mut candidate = start;
    let mut evaluations = 0_u64;
    loop {
        candidate = step(candidate);
        evaluations += 1;
        if candidate <= max_index || candidate == start {
            break;
        }
    }
    if evaluations > 1 {
        log::trace!(
            "cycle walk from {start} to {candidate} took {evaluations} evaluations (max_index = {max_index})"
        );
    }
    candidate
}
