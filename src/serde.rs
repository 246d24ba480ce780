//! Serde adapters for `BitBuffer`, for use with `#[serde(with = "...")]`.

use super::BitBuffer;
use serde::{Deserializer, Serializer, de};

/// Serde implementation serializing the buffer as its declared bytes.
///
/// This is the same encoding as the default [`Serialize`](serde::Serialize)
/// implementation.
pub mod bytes {
    use super::*;
    use crate::ser::BytesVisitor;

    /// Serialize the buffer as a byte string.
    pub fn serialize<S>(b: &BitBuffer, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&b.to_bytes())
    }

    /// Deserialize the buffer from a byte string or a sequence of bytes.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitBuffer, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_bytes(BytesVisitor)
    }
}

/// Module for serializing and deserializing a [`BitBuffer`] as its
/// `'0'`/`'1'` text, as produced by
/// [`to_bit_string`](BitBuffer::to_bit_string).
///
/// # Examples
///
/// ```
/// use bitbuf::BitBuffer;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Flags {
///     #[serde(with = "bitbuf::serde::bit_string")]
///     mask: BitBuffer,
/// }
///
/// let mut mask = BitBuffer::new(1);
/// mask.set(1);
/// let json = serde_json::to_string(&Flags { mask }).unwrap();
/// assert_eq!(json, r#"{"mask":"01000000"}"#);
/// ```
pub mod bit_string {
    use super::*;
    use core::fmt;

    /// Serialize the buffer as a string of binary digits.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails to write the string.
    pub fn serialize<S>(b: &BitBuffer, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&b.to_bit_string())
    }

    /// Deserialize the buffer from a string of binary digits.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid bit text.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitBuffer, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BitStringVisitor;

        impl de::Visitor<'_> for BitStringVisitor {
            type Value = BitBuffer;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string of binary digits")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(BitStringVisitor)
    }
}
