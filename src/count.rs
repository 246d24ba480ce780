//! Population counting over the declared length.

use crate::{
    BitBuffer,
    lookup::byte_ones,
    storage::{WORD_BYTES, Word, byte_of},
};

/// Sums the table counts of every byte in `word`.
#[inline(always)]
fn word_ones(word: Word) -> usize {
    (0..WORD_BYTES).map(|k| byte_ones(byte_of(word, k))).sum()
}

impl BitBuffer {
    /// Counts set and unset bits within the declared length.
    ///
    /// Returns `(ones, zeros)`. Storage beyond the declared length is never
    /// counted, even when it holds set bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let mut buf = BitBuffer::new(0);
    /// for i in (0..256).step_by(2) {
    ///     buf.set(i);
    /// }
    /// assert_eq!(buf.count_bits(), (128, 128));
    /// ```
    #[must_use]
    pub fn count_bits(&self) -> (usize, usize) {
        let full = self.len_bytes / WORD_BYTES;
        let tail = self.len_bytes % WORD_BYTES;

        let mut ones: usize = self.words[..full].iter().map(|&w| word_ones(w)).sum();
        if tail > 0 {
            let word = self.words[full];
            ones += (0..tail).map(|k| byte_ones(byte_of(word, k))).sum::<usize>();
        }

        (ones, self.len_bits() - ones)
    }

    /// Counts the set bits within the declared length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let buf = BitBuffer::from_bytes(&[0xdd, 0x00, 0x44]);
    /// assert_eq!(buf.count_ones(), 8);
    /// ```
    #[inline]
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.count_bits().0
    }

    /// Counts the unset bits within the declared length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let buf = BitBuffer::from_bytes(&[0xdd, 0x00, 0x44]);
    /// assert_eq!(buf.count_zeros(), 16);
    /// ```
    #[inline]
    #[must_use]
    pub fn count_zeros(&self) -> usize {
        self.count_bits().1
    }
}
