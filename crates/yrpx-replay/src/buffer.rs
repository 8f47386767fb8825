//! Decompressed replay storage with a read cursor.
//!
//! [`CursorBuffer`] owns the bytes produced by the decompression step and
//! tracks how far readers have consumed them. The cursor can only be moved
//! through checked operations, so `cursor <= size` holds for every value of
//! this type.

use log::warn;

use crate::error::ReplayError;

/// A fixed-length byte region plus a read position into it.
///
/// # Examples
///
/// ```
/// use yrpx_replay::CursorBuffer;
///
/// let mut buf = CursorBuffer::new(vec![0x01, 0x02, 0x03, 0x04, 0x05]);
/// assert_eq!(buf.size(), 5);
/// assert_eq!(buf.cursor(), 0);
///
/// buf.advance(2).unwrap();
/// assert_eq!(buf.remaining_slice(), &[0x03, 0x04, 0x05]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CursorBuffer {
    storage: Box<[u8]>,
    cursor: usize,
}

impl CursorBuffer {
    /// Wrap decompressed bytes with the cursor at the start.
    pub fn new(storage: impl Into<Box<[u8]>>) -> Self {
        Self {
            storage: storage.into(),
            cursor: 0,
        }
    }

    /// Wrap decompressed bytes with the cursor already at `cursor`.
    ///
    /// Fails with [`ReplayError::InvalidSeek`] if `cursor` exceeds the length.
    pub fn with_cursor(storage: impl Into<Box<[u8]>>, cursor: usize) -> Result<Self, ReplayError> {
        let mut buf = Self::new(storage);
        buf.seek(cursor)?;
        Ok(buf)
    }

    /// Total byte length of the storage.
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Current read offset. Always `<= size()`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Read-only view of the whole storage, independent of the cursor.
    pub fn data(&self) -> &[u8] {
        &self.storage
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.storage.len() - self.cursor
    }

    /// The unread suffix, borrowed from the storage.
    pub fn remaining_slice(&self) -> &[u8] {
        &self.storage[self.cursor..]
    }

    /// True once every byte has been consumed (or the buffer is empty).
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.storage.len()
    }

    /// Move the cursor to an absolute position.
    pub fn seek(&mut self, position: usize) -> Result<(), ReplayError> {
        if position > self.storage.len() {
            return Err(ReplayError::InvalidSeek {
                position,
                size: self.storage.len(),
            });
        }
        self.cursor = position;
        Ok(())
    }

    /// Skip `n` bytes without reading them.
    pub fn advance(&mut self, n: usize) -> Result<(), ReplayError> {
        self.take(n).map(|_| ())
    }

    /// Put the cursor back at the start of the buffer.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Consume `n` bytes and return them.
    ///
    /// On failure the cursor is left where it was.
    pub(crate) fn take(&mut self, n: usize) -> Result<&[u8], ReplayError> {
        let start = self.cursor;
        let end = match start.checked_add(n) {
            Some(end) if end <= self.storage.len() => end,
            _ => {
                warn!(
                    "out of bounds read attempt: cursor={start}, bytes={n}, size={}",
                    self.storage.len()
                );
                return Err(ReplayError::OutOfBounds {
                    cursor: start,
                    requested: n,
                    size: self.storage.len(),
                });
            }
        };
        self.cursor = end;
        Ok(&self.storage[start..end])
    }

    /// Release the storage, discarding the cursor.
    pub fn into_inner(self) -> Box<[u8]> {
        self.storage
    }
}

impl From<Vec<u8>> for CursorBuffer {
    fn from(storage: Vec<u8>) -> Self {
        Self::new(storage)
    }
}

impl From<&[u8]> for CursorBuffer {
    fn from(storage: &[u8]) -> Self {
        Self::new(storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_starts_at_zero() {
        let buf = CursorBuffer::new(vec![1, 2, 3]);
        assert_eq!(buf.size(), 3);
        assert_eq!(buf.cursor(), 0);
        assert_eq!(buf.remaining(), 3);
        assert_eq!(buf.data(), &[1, 2, 3]);
        assert!(!buf.is_exhausted());
    }

    #[test]
    fn empty_buffer_is_exhausted() {
        let buf = CursorBuffer::new(Vec::new());
        assert_eq!(buf.size(), 0);
        assert!(buf.is_exhausted());
        assert!(buf.remaining_slice().is_empty());
    }

    #[test]
    fn with_cursor_rejects_past_end() {
        let err = CursorBuffer::with_cursor(vec![0xAA], 2).unwrap_err();
        assert_eq!(
            err,
            ReplayError::InvalidSeek {
                position: 2,
                size: 1
            }
        );
        let buf = CursorBuffer::with_cursor(vec![0xAA], 1).unwrap();
        assert!(buf.is_exhausted());
    }

    #[test]
    fn advance_moves_cursor() {
        let mut buf = CursorBuffer::new(vec![1, 2, 3, 4]);
        buf.advance(3).unwrap();
        assert_eq!(buf.cursor(), 3);
        assert_eq!(buf.remaining_slice(), &[4]);
        buf.advance(1).unwrap();
        assert!(buf.is_exhausted());
    }

    #[test]
    fn failed_advance_keeps_cursor() {
        let mut buf = CursorBuffer::new(vec![1, 2, 3]);
        buf.advance(2).unwrap();
        let err = buf.advance(2).unwrap_err();
        assert_eq!(
            err,
            ReplayError::OutOfBounds {
                cursor: 2,
                requested: 2,
                size: 3
            }
        );
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn huge_advance_does_not_overflow() {
        let mut buf = CursorBuffer::with_cursor(vec![0; 4], 1).unwrap();
        assert!(buf.advance(usize::MAX).is_err());
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn seek_and_rewind() {
        let mut buf = CursorBuffer::new(vec![9; 8]);
        buf.seek(8).unwrap();
        assert!(buf.is_exhausted());
        assert!(buf.seek(9).is_err());
        assert_eq!(buf.cursor(), 8);
        buf.rewind();
        assert_eq!(buf.cursor(), 0);
        assert_eq!(buf.remaining(), 8);
    }

    #[test]
    fn data_ignores_cursor() {
        let buf = CursorBuffer::with_cursor(vec![5, 6, 7], 2).unwrap();
        assert_eq!(buf.data(), &[5, 6, 7]);
        assert_eq!(buf.remaining_slice(), &[7]);
    }

    #[test]
    fn into_inner_returns_storage() {
        let buf = CursorBuffer::with_cursor(vec![1, 2], 1).unwrap();
        assert_eq!(&*buf.into_inner(), &[1, 2]);
    }
}
