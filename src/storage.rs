//! Word layout of the buffer storage.
//!
//! Bits are packed into native [`Word`]s. Bit `i` lives in word
//! `i / WORD_BITS` at position `i % WORD_BITS`, and the byte view is taken
//! from the least-significant end of each word, so bit `i` is always bit
//! `i % 8` of byte `i / 8` regardless of the target's endianness.

/// The unsigned integer used to pack bits.
pub type Word = usize;

/// Number of bytes in a [`Word`].
pub const WORD_BYTES: usize = core::mem::size_of::<Word>();

/// Number of bits in a [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// A [`Word`] with every bit set.
pub const WORD_ONES: Word = Word::MAX;

const _: () = assert!(
    WORD_BYTES.is_power_of_two() && WORD_BITS == WORD_BYTES * 8,
    "unsupported word width"
);

const WORD_SHIFT: u32 = WORD_BITS.trailing_zeros();
const WORD_MASK: usize = WORD_BITS - 1;

/// Convert bit index to (word index, bit position within word)
#[inline(always)]
pub(crate) const fn bitpos(idx: usize) -> (usize, usize) {
    (idx >> WORD_SHIFT, idx & WORD_MASK)
}

/// Convert byte index to (word index, byte position within word)
#[inline(always)]
pub(crate) const fn bytepos(idx: usize) -> (usize, usize) {
    (idx / WORD_BYTES, idx % WORD_BYTES)
}

/// Number of words backing `len_bytes` bytes. Never less than one.
#[inline]
pub(crate) const fn words_for_bytes(len_bytes: usize) -> usize {
    let n = len_bytes.div_ceil(WORD_BYTES);
    if n == 0 { 1 } else { n }
}

/// Extracts byte `k` (0 = least significant) of `word`.
#[inline(always)]
pub(crate) const fn byte_of(word: Word, k: usize) -> u8 {
    debug_assert!(k < WORD_BYTES);
    (word >> (k * 8)) as u8
}

/// Returns `word` with byte `k` replaced by `byte`.
#[inline(always)]
pub(crate) const fn with_byte(word: Word, k: usize, byte: u8) -> Word {
    debug_assert!(k < WORD_BYTES);
    let shift = k * 8;
    (word & !((0xff as Word) << shift)) | ((byte as Word) << shift)
}

/// Packs up to [`WORD_BYTES`] bytes into a word, missing high bytes are zero.
#[inline]
pub(crate) fn pack_word(bytes: &[u8]) -> Word {
    debug_assert!(bytes.len() <= WORD_BYTES);
    bytes
        .iter()
        .enumerate()
        .fold(0, |word, (k, &b)| with_byte(word, k, b))
}
