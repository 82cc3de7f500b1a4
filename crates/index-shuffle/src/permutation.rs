//! A configured, validated keyed permutation.

use crate::{IndexShuffleError, Rounds, bit_split::BitSplit, index_shuffle, index_unshuffle};

/// A keyed permutation of `0..=max_index`.
///
/// `IndexShuffle` bundles the parameters of [`index_shuffle`] and checks them:
/// the round count is validated by [`Rounds`], and indices are checked on
/// every call. It holds no state besides its parameters, so copies are cheap
/// and it can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use index_shuffle::{IndexShuffle, Rounds};
///
/// let shuffle = IndexShuffle::new(9, 42, Rounds::DEFAULT);
/// let order: Vec<u64> = (0..=9).map(|i| shuffle.shuffle(i)).collect();
/// assert_eq!(order, [9, 4, 1, 0, 8, 2, 6, 7, 3, 5]);
///
/// for (index, &position) in order.iter().enumerate() {
///     assert_eq!(shuffle.unshuffle(position), index as u64);
/// }
///
/// assert!(shuffle.try_shuffle(10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexShuffle {
    max_index: u64,
    seed: u32,
    rounds: Rounds,
}

impl IndexShuffle {
    /// Creates a permutation of `0..=max_index` keyed by `seed`.
    #[must_use]
    pub fn new(max_index: u64, seed: u32, rounds: Rounds) -> Self {
        let split = BitSplit::for_max_index(max_index);
        log::debug!(
            "index shuffle over 0..={max_index}: width {} (hi {}, lo {}), {rounds} rounds",
            split.width(),
            split.hi_bits(),
            split.lo_bits(),
        );
        Self {
            max_index,
            seed,
            rounds,
        }
    }

    /// Creates a permutation using [`Rounds::DEFAULT`].
    #[must_use]
    pub fn with_default_rounds(max_index: u64, seed: u32) -> Self {
        Self::new(max_index, seed, Rounds::DEFAULT)
    }

    /// Inclusive upper bound of the permuted domain.
    #[must_use]
    pub const fn max_index(&self) -> u64 {
        self.max_index
    }

    /// The permutation key.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// The Feistel round count.
    #[must_use]
    pub const fn rounds(&self) -> Rounds {
        self.rounds
    }

    /// Number of bits of the underlying Feistel network.
    ///
    /// Zero for the single-element domain.
    #[must_use]
    pub fn bit_width(&self) -> u32 {
        BitSplit::for_max_index(self.max_index).width()
    }

    /// Returns the position of `index` in the permutation.
    ///
    /// # Panics
    ///
    /// Panics if `index > max_index`.
    #[must_use]
    pub fn shuffle(&self, index: u64) -> u64 {
        if let Err(err) = self.check(index) {
            panic!("{err}");
        }
        index_shuffle(index, self.max_index, self.seed, self.rounds.get())
    }

    /// Returns the index that is shuffled to `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position > max_index`.
    #[must_use]
    pub fn unshuffle(&self, position: u64) -> u64 {
        if let Err(err) = self.check(position) {
            panic!("{err}");
        }
        index_unshuffle(position, self.max_index, self.seed, self.rounds.get())
    }

    /// Returns the position of `index` in the permutation.
    ///
    /// # Errors
    ///
    /// Returns [`IndexShuffleError::IndexOutOfRange`] if `index > max_index`.
    pub fn try_shuffle(&self, index: u64) -> Result<u64, IndexShuffleError> {
        self.check(index)?;
        Ok(index_shuffle(
            index,
            self.max_index,
            self.seed,
            self.rounds.get(),
        ))
    }

    /// Returns the index that is shuffled to `position`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexShuffleError::IndexOutOfRange`] if `position > max_index`.
    pub fn try_unshuffle(&self, position: u64) -> Result<u64, IndexShuffleError> {
        self.check(position)?;
        Ok(index_unshuffle(
            position,
            self.max_index,
            self.seed,
            self.rounds.get(),
        ))
    }

    fn check(&self, index: u64) -> Result<(), IndexShuffleError> {
        if index > self.max_index {
            return Err(IndexShuffleError::IndexOutOfRange {
                index,
                max_index: self.max_index,
            });
        }
        Ok(())
    }
}
