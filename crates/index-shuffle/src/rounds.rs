//! Validated Feistel round counts.

use std::fmt::{self, Display};

use crate::IndexShuffleError;

/// Number of Feistel rounds, guaranteed to be even and at least [`Rounds::MIN`].
///
/// More rounds improve the mixing for small domains; the cost of a shuffle
/// grows linearly with the round count.
///
/// # Examples
///
/// ```
/// use index_shuffle::Rounds;
///
/// assert_eq!(Rounds::default(), Rounds::DEFAULT);
/// assert_eq!(Rounds::DEFAULT.get(), 8);
///
/// let rounds = Rounds::new(16).unwrap();
/// assert_eq!(u32::from(rounds), 16);
///
/// assert!(Rounds::new(7).is_err());
/// assert!(Rounds::new(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rounds(u32);

impl Rounds {
    /// The smallest accepted round count.
    pub const MIN: Self = Self(4);

    /// The recommended round count.
    pub const DEFAULT: Self = Self(8);

    /// Creates a round count.
    ///
    /// # Errors
    ///
    /// Returns [`IndexShuffleError::InvalidRounds`] if `rounds` is odd or
    /// smaller than 4.
    pub const fn new(rounds: u32) -> Result<Self, IndexShuffleError> {
        if rounds < Self::MIN.0 || rounds % 2 != 0 {
            return Err(IndexShuffleError::InvalidRounds { rounds });
        }
        Ok(Self(rounds))
    }

    /// Returns the round count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for Rounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Rounds {
    type Error = IndexShuffleError;

    fn try_from(rounds: u32) -> Result<Self, Self::Error> {
        Self::new(rounds)
    }
}

impl From<Rounds> for u32 {
    fn from(rounds: Rounds) -> u32 {
        rounds.get()
    }
}

impl Display for Rounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
