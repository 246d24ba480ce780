//! Binary text rendering and parsing for `BitBuffer`.

use alloc::string::String;
use core::{fmt, str::FromStr};

use crate::{BitBuffer, ParseBitBufferError, lookup::byte_text};

impl BitBuffer {
    /// Renders every declared bit as `'0'` or `'1'`, lowest index first.
    ///
    /// Character `i` of the result describes bit `i`, so each byte appears as
    /// its eight bits from bit 0 to bit 7. The text is built a byte at a time
    /// from a precomputed table.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let mut buf = BitBuffer::new(2);
    /// buf.set(0).set(9);
    /// assert_eq!(buf.to_bit_string(), "1000000001000000");
    /// ```
    #[must_use]
    pub fn to_bit_string(&self) -> String {
        let mut text = String::with_capacity(self.len_bits());
        for b in self.bytes() {
            text.extend(byte_text(b).iter().copied().map(char::from));
        }
        text
    }
}

impl fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

impl fmt::Binary for BitBuffer {
    /// Formats the buffer as its bit string, with a `0b` prefix when the
    /// alternate flag is used.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let buf = BitBuffer::from_bytes(&[0x03]);
    /// assert_eq!(format!("{buf:b}"), "11000000");
    /// assert_eq!(format!("{buf:#b}"), "0b11000000");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        f.write_str(&self.to_bit_string())
    }
}

impl FromStr for BitBuffer {
    type Err = ParseBitBufferError;

    /// Parses the text produced by [`to_bit_string`](BitBuffer::to_bit_string).
    ///
    /// The input may start with `0b` and may contain `_` separators. The
    /// `j`-th digit sets bit `j`, and the declared length is the number of
    /// digits rounded up to whole bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseBitBufferError`] if the input holds no digits or
    /// contains a character other than `0`, `1` or `_`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitbuf::BitBuffer;
    ///
    /// let buf: BitBuffer = "0b1000_0000_01".parse()?;
    /// assert_eq!(buf.len_bytes(), 2);
    /// assert!(buf.get(0));
    /// assert!(buf.get(9));
    ///
    /// # Ok::<(), bitbuf::ParseBitBufferError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (offset, digits) = match s.strip_prefix("0b") {
            Some(rest) => (2, rest),
            None => (0, s),
        };

        let mut ones = alloc::vec::Vec::new();
        let mut n: usize = 0;
        for (pos, ch) in digits.char_indices() {
            match ch {
                '1' => {
                    ones.push(n);
                    n += 1;
                }
                '0' => n += 1,
                '_' => {}
                _ => {
                    return Err(ParseBitBufferError::InvalidChar {
                        ch,
                        pos: offset + pos,
                    });
                }
            }
        }
        if n == 0 {
            return Err(ParseBitBufferError::Empty);
        }

        let mut buf = Self::new(n.div_ceil(8));
        for i in ones {
            buf.set(i);
        }
        Ok(buf)
    }
}
