//! A growable, word-packed bit buffer.
//!
//! This crate provides [`BitBuffer`], a compact array of bits with a declared
//! length in bytes. Bits are packed into native machine words; the byte view
//! places bit 0 in the least significant position of byte 0.
//!
//! # Features
//!
//! - **Auto-growing access**: setting, clearing, toggling or testing a bit
//!   beyond the end extends the buffer instead of failing
//! - **Table-driven counting** of set and unset bits within the declared
//!   length
//! - **Table-driven rendering** to a `'0'`/`'1'` string, and parsing it back
//! - **Byte interop**: load from and copy out to raw bytes
//! - **Ordering** by lexicographic comparison of the declared bytes
//! - **Serialization support** via serde (optional)
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use bitbuf::BitBuffer;
//!
//! let mut buf = BitBuffer::new(16);
//! buf.set(0).set(63).set(127);
//!
//! assert!(buf.is_set(63));
//! assert_eq!(buf.count_bits(), (3, 125));
//!
//! let text = buf.to_bit_string();
//! assert_eq!(text.len(), 128);
//! assert_eq!(&text[..8], "10000000");
//!
//! let copy = BitBuffer::from_bytes(&buf.to_bytes());
//! assert_eq!(copy, buf);
//! ```
//!
//! # Declared length and storage
//!
//! The declared length is what counting, rendering, comparison and the byte
//! view operate on. Storage is rounded up to whole words and never holds
//! fewer than one word, so a buffer created with length zero reports one
//! word's worth of bytes. When a bit access lands past the end of storage,
//! storage grows with zeroed words and the declared length becomes the new
//! storage size.
//!
//! A buffer is not synchronized. Share it across threads only behind
//! external exclusion.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod buffer;
mod count;
mod iter;
mod lookup;
mod render;
pub mod storage;
mod traits;

#[cfg(feature = "serde")]
mod ser;

#[cfg(feature = "serde")]
pub mod serde;

// Re-exports
pub use buffer::BitBuffer;
pub use iter::Bits;
pub use storage::{WORD_BITS, WORD_BYTES, WORD_ONES, Word};
pub use traits::ParseBitBufferError;
