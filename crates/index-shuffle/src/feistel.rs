//! A keyed Feistel network over a `w`-bit working value.
//!
//! The two halves may differ in width by one bit. Each round replaces the
//! left half with `left ^ F(right)`, masked to the left half's width, and then
//! swaps the halves, so the widths swap as well. Recombination always shifts
//! the left half by the current right width, which keeps the network a
//! bijection on `[0, 2^w)` for any round count.

use crate::{
    bit_split::{BitSplit, low_mask},
    round_function::{round_function, round_key},
};

/// A single keyed Feistel network.
///
/// This is a bijection on `[0, 2^w)` where `w` is the width of its
/// [`BitSplit`]. It knows nothing about the caller's range; see
/// [`crate::shuffle`] for cycle walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FeistelNetwork {
    split: BitSplit,
    seed: u32,
    rounds: u32,
}

/// The two halves of a working value together with their current widths.
#[derive(Debug, Clone, Copy)]
struct Halves {
    left: u64,
    right: u64,
    left_bits: u32,
    right_bits: u32,
}

impl Halves {
    fn split(value: u64, left_bits: u32, right_bits: u32) -> Self {
        Self {
            left: (value >> right_bits) & low_mask(left_bits),
            right: value & low_mask(right_bits),
            left_bits,
            right_bits,
        }
    }

    fn join(self) -> u64 {
        (self.left << self.right_bits) | self.right
    }
}

impl FeistelNetwork {
    pub(crate) const fn new(split: BitSplit, seed: u32, rounds: u32) -> Self {
        Self {
            split,
            seed,
            rounds,
        }
    }

    pub(crate) const fn split(&self) -> BitSplit {
        self.split
    }

    /// Widths of `(left, right)` after all rounds have run.
    fn output_widths(&self) -> (u32, u32) {
        if self.rounds % 2 == 0 {
            (self.split.hi_bits(), self.split.lo_bits())
        } else {
            (self.split.lo_bits(), self.split.hi_bits())
        }
    }

    /// Applies the network to a `w`-bit value.
    ///
    /// Bits of `value` above the working width are ignored.
    #[must_use]
    pub(crate) fn forward(&self, value: u64) -> u64 {
        let mut h = Halves::split(value, self.split.hi_bits(), self.split.lo_bits());
        for round in 0..self.rounds {
            let key = round_key(self.seed, round);
            let new_right = (h.left ^ round_function(key, h.right)) & low_mask(h.left_bits);
            h = Halves {
                left: h.right,
                right: new_right,
                left_bits: h.right_bits,
                right_bits: h.left_bits,
            };
        }
        h.join()
    }

    /// Applies the inverse network, so that `backward(forward(x)) == x`.
    #[must_use]
    pub(crate) fn backward(&self, value: u64) -> u64 {
        let (left_bits, right_bits) = self.output_widths();
        let mut h = Halves::split(value, left_bits, right_bits);
        for round in (0..self.rounds).rev() {
            let key = round_key(self.seed, round);
            let prev_left = (h.right ^ round_function(key, h.left)) & low_mask(h.right_bits);
            h = Halves {
                left: prev_left,
                right: h.left,
                left_bits: h.right_bits,
                right_bits: h.left_bits,
            };
        }
        h.join()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_bijective(network: &FeistelNetwork) {
        let size = 1_u64 << network.split().width();
        let mut seen = vec![false; usize::try_from(size).unwrap()];
        for x in 0..size {
            let y = network.forward(x);
            assert!(y < size, "{y} escaped [0, {size})");
            let slot = &mut seen[usize::try_from(y).unwrap()];
            assert!(!*slot, "duplicate output {y}");
            *slot = true;
            assert_eq!(network.backward(y), x);
        }
    }

    #[test]
    fn test_bijective_for_small_widths() {
        for max_index in [1, 2, 3, 7, 8, 15, 16, 31, 255, 1023, 4096] {
            for rounds in [4, 6, 8, 16] {
                let network = FeistelNetwork::new(BitSplit::for_max_index(max_index), 42, rounds);
                assert_bijective(&network);
            }
        }
    }

    #[test]
    fn test_bijective_for_odd_round_counts() {
        for max_index in [1, 16, 100] {
            for rounds in [0, 1, 3, 5] {
                let network = FeistelNetwork::new(BitSplit::for_max_index(max_index), 7, rounds);
                assert_bijective(&network);
            }
        }
    }

    #[test]
    fn test_zero_rounds_is_identity() {
        let network = FeistelNetwork::new(BitSplit::for_max_index(1000), 1, 0);
        for x in 0..1024 {
            assert_eq!(network.forward(x), x);
        }
    }

    #[test]
    fn test_full_width_round_trip() {
        let network = FeistelNetwork::new(BitSplit::for_max_index(u64::MAX), 0xDEAD_BEEF, 8);
        for x in [0, 1, u64::MAX, u64::MAX / 3, 0x0123_4567_89AB_CDEF] {
            assert_eq!(network.backward(network.forward(x)), x);
        }
    }

    #[test]
    fn test_ignores_bits_above_width() {
        let network = FeistelNetwork::new(BitSplit::for_max_index(15), 3, 8);
        for x in 0..16 {
            assert_eq!(network.forward(x | 0xF0), network.forward(x));
        }
    }
}
