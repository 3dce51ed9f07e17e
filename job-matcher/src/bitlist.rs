//! Compact bit-list backed by a smallvec of bytes.
//!
//! Used as the per-attempt "seen" set of the exact matcher: one bit per job,
//! cleared between attempts instead of reallocated.
use smallvec::SmallVec;

pub const INLINE_BIT_BYTES: usize = 16;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BitList {
    len: usize,
    data: SmallVec<[u8; INLINE_BIT_BYTES]>,
}

impl BitList {
    pub fn zeros(len: usize) -> Self {
        let byte_len = len.div_ceil(8);
        let mut data: SmallVec<[u8; INLINE_BIT_BYTES]> = SmallVec::new();
        data.resize(byte_len.max(1), 0);
        Self { len, data }
    }

    /// Set bit `idx`, returning `true` if it was previously clear
    pub fn insert(&mut self, idx: usize) -> bool {
        assert!(idx < self.len, "bit {idx} out of range for length {}", self.len);
        let byte_idx = idx / 8;
        let mask = 1 << (idx % 8);
        let was_clear = self.data[byte_idx] & mask == 0;
        self.data[byte_idx] |= mask;
        was_clear
    }

    /// Reset every bit to zero, keeping the length
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|b| *b = 0);
    }

    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}
