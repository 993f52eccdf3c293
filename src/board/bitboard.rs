//! Occupancy bitboard sized for an arbitrary square board

/// One bit per cell, row-major. `len` is the number of valid cells;
/// bits past it in the last word are always zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: Vec<u64>,
    len: usize,
}

impl Bitboard {
    /// Create empty bitboard holding `len` cells
    pub fn new(len: usize) -> Self {
        Self {
            bits: vec![0; len.div_ceil(64)],
            len,
        }
    }

    /// Set the bit at cell index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < self.len);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Clear the bit at cell index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < self.len);
        self.bits[idx / 64] &= !(1u64 << (idx % 64));
    }

    /// Check if the bit at cell index is set
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        idx < self.len && (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over set bit indices in ascending (row-major) order
    pub fn iter_ones(&self) -> BitboardIter<'_> {
        BitboardIter {
            bits: &self.bits,
            word_idx: 0,
            current_word: self.bits.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter<'a> {
    bits: &'a [u64],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            self.current_word = *self.bits.get(self.word_idx)?;
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        // Clear the bit we just found
        self.current_word &= self.current_word - 1;

        Some(self.word_idx * 64 + bit_pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new(100);
        assert!(bb.is_empty());
        bb.set(0);
        bb.set(63);
        bb.set(64);
        bb.set(99);
        assert!(bb.get(63) && bb.get(64) && bb.get(99));
        assert_eq!(bb.count(), 4);
        bb.clear(63);
        assert!(!bb.get(63));
        assert_eq!(bb.count(), 3);
    }

    #[test]
    fn test_get_out_of_range() {
        let bb = Bitboard::new(25);
        assert!(!bb.get(25));
        assert!(!bb.get(1000));
    }

    #[test]
    fn test_iter_ones_ascending() {
        let mut bb = Bitboard::new(361);
        for idx in [360, 5, 128, 64, 0] {
            bb.set(idx);
        }
        let ones: Vec<usize> = bb.iter_ones().collect();
        assert_eq!(ones, vec![0, 5, 64, 128, 360]);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(Bitboard::new(25).bits.len(), 1);
        assert_eq!(Bitboard::new(64).bits.len(), 1);
        assert_eq!(Bitboard::new(65).bits.len(), 2);
        assert_eq!(Bitboard::new(361).bits.len(), 6);
    }
}
