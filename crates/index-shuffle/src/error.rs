//! Error types for checked shuffle operations.

/// Errors reported by the validating API ([`Rounds`] and [`IndexShuffle`]).
///
/// The raw functions [`index_shuffle`] and [`index_unshuffle`] never return
/// errors; they treat these conditions as caller bugs.
///
/// [`Rounds`]: crate::Rounds
/// [`IndexShuffle`]: crate::IndexShuffle
/// [`index_shuffle`]: crate::index_shuffle
/// [`index_unshuffle`]: crate::index_unshuffle
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IndexShuffleError {
    /// The round count is odd or smaller than [`Rounds::MIN`](crate::Rounds::MIN).
    #[display("round count must be even and at least 4, got {rounds}")]
    InvalidRounds {
        /// The rejected round count.
        rounds: u32,
    },
    /// The index lies outside `0..=max_index`.
    #[display("index {index} is out of range 0..={max_index}")]
    IndexOutOfRange {
        /// The rejected index.
        index: u64,
        /// The inclusive upper bound of the permuted domain.
        max_index: u64,
    },
}
