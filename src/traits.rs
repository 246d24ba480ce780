//! Trait implementations for `BitBuffer`, plus comparison and copying.

use alloc::vec::Vec;
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use thiserror::Error;

use crate::BitBuffer;

/// Errors that can occur when parsing a binary string into a [`BitBuffer`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBitBufferError {
    /// Invalid character found in the binary string.
    #[error("invalid character '{ch}' at position {pos} in binary string")]
    InvalidChar {
        /// The invalid character found
        ch: char,
        /// The byte offset of the invalid character
        pos: usize,
    },

    /// The string holds no binary digits.
    #[error("cannot parse bit buffer from empty string")]
    Empty,
}

impl BitBuffer {
    /// Compares the declared bytes of two buffers lexicographically.
    ///
    /// Bytes are compared in index order and the first difference decides.
    /// When one buffer's bytes are a prefix of the other's, the shorter
    /// buffer is less, whatever the content of the longer one's extra bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitbuf::BitBuffer;
    /// use core::cmp::Ordering;
    ///
    /// let left = BitBuffer::from_bytes(&[0xdd, 0x00, 0x44, 0x11, 0xdd]);
    /// let right = BitBuffer::new(1);
    /// assert_eq!(left.compare(&right), Ordering::Greater);
    ///
    /// let short = BitBuffer::from_bytes(&[0xdd]);
    /// assert_eq!(short.compare(&left), Ordering::Less);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.bytes().cmp(other.bytes())
    }

    /// Makes `other` a copy of this buffer.
    ///
    /// `other` is reset to this buffer's declared length and receives its
    /// words.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let mut src = BitBuffer::new(3);
    /// src.set(17);
    /// let mut dst = BitBuffer::new(40);
    /// src.copy_to(&mut dst);
    /// assert_eq!(dst.len_bytes(), 3);
    /// assert!(dst.get(17));
    /// ```
    pub fn copy_to(&self, other: &mut Self) {
        other.set_len(self.len_bytes);
        let n = other.words.len().min(self.words.len());
        other.words[..n].copy_from_slice(&self.words[..n]);
    }

    /// Makes this buffer a copy of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbuf::BitBuffer;
    /// let src = BitBuffer::from_bytes(&[0xdd, 0x00, 0x44]);
    /// let mut dst = BitBuffer::new(1);
    /// dst.copy_from(&src);
    /// assert_eq!(dst, src);
    /// ```
    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        other.copy_to(self);
        self
    }
}

impl Default for BitBuffer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for BitBuffer {
    fn clone(&self) -> Self {
        let mut buf = Self {
            words: Vec::new(),
            len_bytes: 0,
        };
        self.copy_to(&mut buf);
        buf
    }

    fn clone_from(&mut self, source: &Self) {
        self.copy_from(source);
    }
}

impl From<&[u8]> for BitBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for BitBuffer {
    fn from(bytes: &[u8; N]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for BitBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl From<&BitBuffer> for Vec<u8> {
    fn from(buf: &BitBuffer) -> Self {
        buf.to_bytes()
    }
}

impl fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitBuffer")
            .field("len_bytes", &self.len_bytes)
            .field("bits", &format_args!("{self}"))
            .finish()
    }
}

impl PartialEq for BitBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.len_bytes == other.len_bytes && self.bytes().eq(other.bytes())
    }
}

impl Eq for BitBuffer {}

impl PartialOrd for BitBuffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitBuffer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for BitBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len_bytes);
        for b in self.bytes() {
            state.write_u8(b);
        }
    }
}
