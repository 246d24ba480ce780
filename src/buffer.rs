//! `BitBuffer` struct and core implementation.

use alloc::{vec, vec::Vec};

use tracing::trace;

use crate::{
    iter::Bits,
    storage::{
        WORD_BITS, WORD_BYTES, WORD_ONES, Word, bitpos, byte_of, bytepos, pack_word, with_byte,
        words_for_bytes,
    },
};

/// A growable buffer of bits packed into machine words.
///
/// # Overview
///
/// `BitBuffer` keeps a declared length in bytes alongside word-packed
/// storage. The declared length is what callers see: it bounds counting,
/// rendering, comparison and the byte view. Storage always holds at least one
/// word and may be larger than the declared length.
///
/// # Growth
///
/// Single-bit operations never fail on large indices. Addressing a bit beyond
/// the current storage extends it with zeroed words and raises the declared
/// length to the new word-aligned size. This also applies to
/// [`is_set`](Self::is_set); use [`get`](Self::get) for a read that leaves the
/// buffer untouched.
///
/// # Examples
///
/// ```
/// use bitbuf::BitBuffer;
///
/// let mut buf = BitBuffer::new(2);
/// buf.set(0).set(9).toggle(10);
///
/// assert!(buf.is_set(0));
/// assert!(buf.is_set(10));
/// assert_eq!(buf.to_bytes(), vec![0x01, 0x06]);
/// assert_eq!(buf.count_ones(), 3);
/// ```
pub struct BitBuffer {
    pub(crate) words: Vec<Word>,
    pub(crate) len_bytes: usize,
}

impl BitBuffer {
    /// Creates a zeroed buffer with a declared length of `len_bytes` bytes.
    ///
    /// A length of zero is promoted to one full word, so a freshly created
    /// buffer always has addressable bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::{BitBuffer, WORD_BYTES};
    /// assert_eq!(BitBuffer::new(5).len_bytes(), 5);
    /// assert_eq!(BitBuffer::new(0).len_bytes(), WORD_BYTES);
    /// ```
    #[must_use]
    pub fn new(len_bytes: usize) -> Self {
        let mut buf = Self {
            words: Vec::new(),
            len_bytes: 0,
        };
        buf.set_len(len_bytes);
        buf
    }

    /// Creates a buffer holding a copy of `bytes`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let buf = BitBuffer::from_bytes(&[0xcc, 0x00, 0xff]);
    /// assert_eq!(buf.len_bytes(), 3);
    /// assert_eq!(buf.to_bytes(), vec![0xcc, 0x00, 0xff]);
    /// ```
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = Self::new(bytes.len());
        buf.load_bytes(bytes);
        buf
    }

    /// Resets the buffer to `len_bytes` bytes, discarding all bits.
    ///
    /// Storage is reallocated to exactly the number of words needed for the
    /// new length. As with [`new`](Self::new), zero becomes one word.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let mut buf = BitBuffer::new(4);
    /// buf.set(3);
    /// buf.set_len(16);
    /// assert_eq!(buf.len_bytes(), 16);
    /// assert_eq!(buf.count_ones(), 0);
    /// ```
    pub fn set_len(&mut self, len_bytes: usize) -> &mut Self {
        let words = words_for_bytes(len_bytes);
        let from_words = self.words.len();
        self.len_bytes = if len_bytes == 0 {
            WORD_BYTES
        } else {
            len_bytes
        };
        self.words = vec![0; words];
        if from_words != 0 && from_words != words {
            trace!(
                from_words,
                to_words = words,
                len_bytes = self.len_bytes,
                "resized bit buffer"
            );
        }
        self
    }

    /// Returns the declared length in bytes.
    #[inline]
    #[must_use]
    pub const fn len_bytes(&self) -> usize {
        self.len_bytes
    }

    /// Returns the declared length in bits.
    #[inline]
    #[must_use]
    pub const fn len_bits(&self) -> usize {
        self.len_bytes * 8
    }

    /// Returns the number of bits the current storage can hold without
    /// growing. Always at least [`len_bits`](Self::len_bits).
    #[inline]
    #[must_use]
    pub fn capacity_bits(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Returns the backing words.
    ///
    /// The last word may extend past the declared length.
    #[inline]
    #[must_use]
    pub fn as_words(&self) -> &[Word] {
        &self.words
    }

    /// Extends storage so that bit `i` is addressable.
    #[inline]
    fn grow_if_needed(&mut self, i: usize) {
        self.grow_to_word(bitpos(i).0);
    }

    /// Extends storage so that word `idx` exists.
    ///
    /// New words are zeroed and existing words are kept. When storage grows,
    /// the declared length becomes the full size of the new storage.
    fn grow_to_word(&mut self, idx: usize) {
        let needed = idx + 1;
        if needed > self.words.len() {
            let from_words = self.words.len();
            self.words.resize(needed, 0);
            self.len_bytes = needed * WORD_BYTES;
            trace!(
                from_words,
                to_words = needed,
                len_bytes = self.len_bytes,
                "grew bit buffer"
            );
        }
        debug_assert!(self.len_bytes <= self.words.len() * WORD_BYTES);
    }

    /// Sets the bit at `i` to 1, growing the buffer if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let mut buf = BitBuffer::new(0);
    /// buf.set(14);
    /// assert!(buf.is_set(14));
    ///
    /// // Far beyond the current storage
    /// buf.set(1000);
    /// assert!(buf.is_set(14));
    /// assert!(buf.len_bits() > 1000);
    /// ```
    #[inline]
    pub fn set(&mut self, i: usize) -> &mut Self {
        self.grow_if_needed(i);
        let (idx, bp) = bitpos(i);
        self.words[idx] |= 1 << bp;
        self
    }

    /// Sets the bit at `i` to 0, growing the buffer if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let mut buf = BitBuffer::new(0);
    /// buf.set(1).set(64).set(128).clear(64);
    /// assert!(!buf.is_set(64));
    /// assert!(buf.is_set(128));
    /// ```
    #[inline]
    pub fn clear(&mut self, i: usize) -> &mut Self {
        self.grow_if_needed(i);
        let (idx, bp) = bitpos(i);
        self.words[idx] &= !(1 << bp);
        self
    }

    /// Flips the bit at `i`, growing the buffer if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let mut buf = BitBuffer::new(0);
    /// buf.set(1).set(5).set(9).toggle(5);
    /// assert!(!buf.is_set(5));
    /// buf.toggle(5);
    /// assert!(buf.is_set(5));
    /// ```
    #[inline]
    pub fn toggle(&mut self, i: usize) -> &mut Self {
        self.grow_if_needed(i);
        let (idx, bp) = bitpos(i);
        self.words[idx] ^= 1 << bp;
        self
    }

    /// Sets the bit at `i` to `value`, growing the buffer if needed.
    #[inline]
    pub fn set_to(&mut self, i: usize, value: bool) -> &mut Self {
        if value { self.set(i) } else { self.clear(i) }
    }

    /// Returns whether the bit at `i` is set.
    ///
    /// Like the writers, this grows the buffer when `i` lies beyond the
    /// current storage; the answer for such an index is always `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::{BitBuffer, WORD_BYTES};
    /// let mut buf = BitBuffer::new(1);
    /// assert!(!buf.is_set(8 * WORD_BYTES * 4));
    /// assert_eq!(buf.len_bytes(), WORD_BYTES * 5);
    /// ```
    #[inline]
    pub fn is_set(&mut self, i: usize) -> bool {
        self.grow_if_needed(i);
        self.get(i)
    }

    /// Returns whether the bit at `i` is set, without growing.
    ///
    /// Bits beyond the current storage read as `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let mut buf = BitBuffer::new(1);
    /// buf.set(3);
    /// assert!(buf.get(3));
    /// assert!(!buf.get(1 << 20));
    /// assert_eq!(buf.len_bytes(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> bool {
        let (idx, bp) = bitpos(i);
        self.words.get(idx).is_some_and(|word| (word >> bp) & 1 != 0)
    }

    /// Overwrites every storage word with `word`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let mut buf = BitBuffer::new(2);
    /// buf.fill(0x0f0f);
    /// assert_eq!(buf.to_bytes(), vec![0x0f, 0x0f]);
    /// ```
    pub fn fill(&mut self, word: Word) -> &mut Self {
        self.words.fill(word);
        self
    }

    /// Clears every bit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let mut buf = BitBuffer::new(0);
    /// buf.set(7).set(13).set(256).clear_all();
    /// assert_eq!(buf.count_ones(), 0);
    /// ```
    #[inline]
    pub fn clear_all(&mut self) -> &mut Self {
        self.fill(0)
    }

    /// Sets every bit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let mut buf = BitBuffer::new(10);
    /// buf.set_all();
    /// assert_eq!(buf.count_zeros(), 0);
    /// ```
    #[inline]
    pub fn set_all(&mut self) -> &mut Self {
        self.fill(WORD_ONES)
    }

    /// Returns byte `k` of the buffer, where byte 0 holds bits 0 through 7.
    ///
    /// Bytes beyond the current storage read as zero.
    #[inline]
    #[must_use]
    pub fn byte(&self, k: usize) -> u8 {
        let (idx, pos) = bytepos(k);
        self.words.get(idx).map_or(0, |&word| byte_of(word, pos))
    }

    /// Overwrites byte `k` of the buffer, growing the buffer if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let mut buf = BitBuffer::new(2);
    /// buf.set_byte(1, 0x81);
    /// assert!(buf.get(8));
    /// assert!(buf.get(15));
    /// assert_eq!(buf.byte(1), 0x81);
    /// ```
    pub fn set_byte(&mut self, k: usize, byte: u8) -> &mut Self {
        let (idx, pos) = bytepos(k);
        self.grow_to_word(idx);
        self.words[idx] = with_byte(self.words[idx], pos, byte);
        self
    }

    /// Returns an iterator over the declared bytes, in order.
    pub(crate) fn bytes(&self) -> impl ExactSizeIterator<Item = u8> + '_ {
        (0..self.len_bytes).map(|k| {
            let (idx, pos) = bytepos(k);
            byte_of(self.words[idx], pos)
        })
    }

    /// Returns an owned copy of the declared bytes.
    ///
    /// The copy is independent of the buffer and stays valid after it
    /// changes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let mut buf = BitBuffer::new(3);
    /// buf.set(0).set(23);
    /// let bytes = buf.to_bytes();
    /// buf.clear_all();
    /// assert_eq!(bytes, vec![0x01, 0x00, 0x80]);
    /// ```
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes().collect()
    }

    /// Resets the buffer to `bytes.len()` bytes and copies `bytes` in.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let bytes = [0xcc, 0x00, 0xff, 0xff, 0xee, 0xee];
    /// let mut buf = BitBuffer::new(0);
    /// buf.load_bytes(&bytes);
    /// assert_eq!(buf.to_bytes(), bytes);
    /// ```
    pub fn load_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.set_len(bytes.len());
        for (word, chunk) in self.words.iter_mut().zip(bytes.chunks(WORD_BYTES)) {
            *word = pack_word(chunk);
        }
        self
    }

    /// Returns an iterator over the declared bits, in index order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let mut buf = BitBuffer::new(1);
    /// buf.set(1).set(2);
    /// let bits: Vec<bool> = buf.bits().take(4).collect();
    /// assert_eq!(bits, vec![false, true, true, false]);
    /// ```
    #[inline]
    pub fn bits(&self) -> Bits<'_> {
        Bits::new(self)
    }

    /// Returns one `bool` per declared bit, in index order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let mut buf = BitBuffer::new(0);
    /// buf.set(0).set(5).set(9);
    /// let bools = buf.to_bools();
    /// assert_eq!(bools.len(), buf.len_bits());
    /// assert!(bools[0] && bools[5] && bools[9]);
    /// ```
    #[must_use]
    pub fn to_bools(&self) -> Vec<bool> {
        self.bits().collect()
    }
}
