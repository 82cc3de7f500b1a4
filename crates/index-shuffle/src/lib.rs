//! Keyed, deterministic shuffling of integer indices.
//!
//! This crate maps every index in `0..=max_index` to a unique position in the
//! same range. For a fixed key (`seed`) and range the mapping is a
//! permutation, and it is computed one index at a time without materializing
//! the whole order. Typical callers iterate `index` from `0` to `max_index` to
//! visit a dataset in shuffled order.
//!
//! # Overview
//!
//! The permutation is built in three steps:
//!
//! 1. **Bit width** - the smallest width `w` with `2^w > max_index` is split
//!    into two halves; the high half carries the extra bit when `w` is odd.
//! 2. **Feistel network** - a keyed Feistel network permutes `[0, 2^w)`. Its
//!    round function is derived from the SplitMix64 finalizer and is versioned
//!    by [`ROUND_FUNCTION_VERSION`].
//! 3. **Cycle walking** - results above `max_index` are fed back through the
//!    network until they land in range, which restricts the power-of-two
//!    permutation to `0..=max_index`.
//!
//! The permutation is not cryptographically strong; it is meant to be
//! statistically well mixed.
//!
//! # Entry points
//!
//! - [`index_shuffle`] / [`index_unshuffle`]: raw functions taking every
//!   parameter explicitly. Preconditions are checked by debug assertions only.
//! - [`IndexShuffle`]: a validated permutation value with checked
//!   ([`IndexShuffle::try_shuffle`]) and panicking ([`IndexShuffle::shuffle`])
//!   lookups.
//!
//! # Examples
//!
//! ```
//! use index_shuffle::{IndexShuffle, index_shuffle};
//!
//! let shuffle = IndexShuffle::with_default_rounds(9, 42);
//! let order: Vec<u64> = (0..=9).map(|i| shuffle.shuffle(i)).collect();
//! assert_eq!(order, [9, 4, 1, 0, 8, 2, 6, 7, 3, 5]);
//!
//! // The raw function gives the same result.
//! assert_eq!(index_shuffle(0, 9, 42, 8), 9);
//! ```

pub mod error;
pub mod permutation;
pub mod round_function;
pub mod rounds;

mod bit_split;
mod feistel;
mod shuffle;

pub use self::{
    error::IndexShuffleError,
    permutation::IndexShuffle,
    round_function::ROUND_FUNCTION_VERSION,
    rounds::Rounds,
    shuffle::{index_shuffle, index_unshuffle},
};
