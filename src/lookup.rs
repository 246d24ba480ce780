//! Byte-indexed lookup tables, computed at compile time.

/// Number of set bits in each byte value.
pub(crate) static POPCOUNT: [u8; 256] = build_popcount();

/// The eight ASCII digits of each byte value, bit 0 first.
pub(crate) static BIN_TEXT: [[u8; 8]; 256] = build_bin_text();

const fn build_popcount() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut b = 1;
    while b < 256 {
        // The count for b is the count for b with its lowest bit dropped, plus that bit.
        table[b] = table[b >> 1] + (b & 1) as u8;
        b += 1;
    }
    table
}

const fn build_bin_text() -> [[u8; 8]; 256] {
    let mut table = [[b'0'; 8]; 256];
    let mut b = 0;
    while b < 256 {
        let mut bit = 0;
        while bit < 8 {
            if (b >> bit) & 1 == 1 {
                table[b][bit] = b'1';
            }
            bit += 1;
        }
        b += 1;
    }
    table
}

/// Number of set bits in `b`.
#[inline(always)]
pub(crate) fn byte_ones(b: u8) -> usize {
    POPCOUNT[b as usize] as usize
}

/// Text rendering of `b`, one ASCII digit per bit, bit 0 first.
#[inline(always)]
pub(crate) fn byte_text(b: u8) -> &'static [u8; 8] {
    &BIN_TEXT[b as usize]
}
