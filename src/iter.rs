//! Iterator implementations for `BitBuffer`.

use core::iter::FusedIterator;

use crate::BitBuffer;

/// An iterator over the declared bits of a [`BitBuffer`] as `bool`s.
///
/// This struct is created by the [`bits`](BitBuffer::bits) method. It yields
/// one item per bit of the declared length, lowest index first.
#[derive(Clone)]
pub struct Bits<'a> {
    buf: &'a BitBuffer,
    front: usize,
    back: usize,
}

impl<'a> Bits<'a> {
    pub(crate) fn new(buf: &'a BitBuffer) -> Self {
        Self {
            buf,
            front: 0,
            back: buf.len_bits(),
        }
    }
}

impl Iterator for Bits<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        let bit = self.buf.get(self.front);
        self.front += 1;
        Some(bit)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<bool> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Bits<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.buf.get(self.back))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl FusedIterator for Bits<'_> {}

impl<'a> IntoIterator for &'a BitBuffer {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits()
    }
}

#[cfg(test)]
mod tests {
    use crate::BitBuffer;
    use alloc::vec::Vec;

    #[test]
    fn test_bits_len_matches_declared() {
        let buf = BitBuffer::new(3);
        assert_eq!(buf.bits().len(), 24);
        assert_eq!(buf.bits().count(), 24);
    }

    #[test]
    fn test_bits_double_ended() {
        let mut buf = BitBuffer::new(1);
        buf.set(0).set(7);

        let mut it = buf.bits();
        assert_eq!(it.next(), Some(true));
        assert_eq!(it.next_back(), Some(true));
        assert_eq!(it.len(), 6);
        assert!(it.all(|b| !b));
    }

    #[test]
    fn test_bits_nth() {
        let mut buf = BitBuffer::new(2);
        buf.set(10);

        let mut it = buf.bits();
        assert_eq!(it.nth(10), Some(true));
        assert_eq!(it.len(), 5);
        assert_eq!(it.nth(100), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let mut buf = BitBuffer::new(1);
        buf.set(2);
        let positions: Vec<usize> = (&buf)
            .into_iter()
            .enumerate()
            .filter_map(|(i, b)| b.then_some(i))
            .collect();
        assert_eq!(positions, [2]);
    }
}
