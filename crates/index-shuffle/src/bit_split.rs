//! Bit-width derivation and the split of a working value into two halves.

/// Returns a mask with the low `bits` bits set.
///
/// `bits` may be anything in `0..=64`; zero yields an empty mask.
#[inline]
pub(crate) fn low_mask(bits: u32) -> u64 {
    debug_assert!(bits <= u64::BITS);
    u64::MAX.checked_shr(u64::BITS - bits).unwrap_or(0)
}

/// The layout of a `w`-bit working value inside the Feistel network.
///
/// The value is split into a high half of `hi_bits` and a low half of
/// `lo_bits`. When `w` is odd the high half carries the extra bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BitSplit {
    lo_bits: u32,
    hi_bits: u32,
}

impl BitSplit {
    /// Derives the layout for the domain `0..=max_index`.
    ///
    /// The width is the smallest `w` with `2^w > max_index`, so `max_index == 0`
    /// yields an empty layout.
    #[must_use]
    pub(crate) fn for_max_index(max_index: u64) -> Self {
        let width = u64::BITS - max_index.leading_zeros();
        let lo_bits = width / 2;
        Self {
            lo_bits,
            hi_bits: width - lo_bits,
        }
    }

    /// Total width `w` of the working value.
    #[must_use]
    pub(crate) const fn width(self) -> u32 {
        self.lo_bits + self.hi_bits
    }

    #[must_use]
    pub(crate) const fn lo_bits(self) -> u32 {
        self.lo_bits
    }

    #[must_use]
    pub(crate) const fn hi_bits(self) -> u32 {
        self.hi_bits
    }

    /// Mask covering the whole working value.
    #[must_use]
    pub(crate) fn mask(self) -> u64 {
        low_mask(self.width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_mask() {
        assert_eq!(low_mask(0), 0);
        assert_eq!(low_mask(1), 0b1);
        assert_eq!(low_mask(5), 0b1_1111);
        assert_eq!(low_mask(32), 0xFFFF_FFFF);
        assert_eq!(low_mask(63), u64::MAX >> 1);
        assert_eq!(low_mask(64), u64::MAX);
    }

    #[test]
    fn test_width_is_minimal() {
        let cases = [
            (0, 0),
            (1, 1),
            (2, 2),
            (3, 2),
            (4, 3),
            (7, 3),
            (8, 4),
            (9, 4),
            (15, 4),
            (16, 5),
            (u64::from(u32::MAX), 32),
            (u64::MAX, 64),
        ];
        for (max_index, width) in cases {
            let split = BitSplit::for_max_index(max_index);
            assert_eq!(split.width(), width, "max_index = {max_index}");
            assert!(split.mask() >= max_index);
        }
    }

    #[test]
    fn test_odd_width_gives_extra_bit_to_high_half() {
        let split = BitSplit::for_max_index(0b1_0000);
        assert_eq!(split.width(), 5);
        assert_eq!(split.hi_bits(), 3);
        assert_eq!(split.lo_bits(), 2);

        let split = BitSplit::for_max_index(1);
        assert_eq!(split.hi_bits(), 1);
        assert_eq!(split.lo_bits(), 0);
    }

    #[test]
    fn test_even_width_splits_evenly() {
        let split = BitSplit::for_max_index(u64::MAX);
        assert_eq!(split.hi_bits(), 32);
        assert_eq!(split.lo_bits(), 32);
    }
}
