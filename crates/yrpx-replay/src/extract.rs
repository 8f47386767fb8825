//! Unread-suffix extraction for the embedding host.
//!
//! [`ReplayExtractor`] owns at most one [`CursorBuffer`] at a time. The
//! decompression step hands its output over with
//! [`install`](ReplayExtractor::install); readers advance the cursor through
//! [`buffer_mut`](ReplayExtractor::buffer_mut); the host pulls whatever is
//! left with [`get_replay_data`](ReplayExtractor::get_replay_data).

use log::debug;

use crate::buffer::CursorBuffer;
use crate::types::{ReplayData, StreamState};

/// Holds the decompressed replay buffer and copies out its unread bytes.
///
/// Not internally synchronized. Callers sharing one extractor across
/// threads must serialize access themselves.
///
/// # Examples
///
/// ```
/// use yrpx_replay::{CursorBuffer, ReplayData, ReplayExtractor};
///
/// let mut extractor = ReplayExtractor::new();
/// assert_eq!(extractor.get_replay_data(), ReplayData::Empty);
///
/// let buf = CursorBuffer::with_cursor(vec![0x01, 0x02, 0x03, 0x04, 0x05], 2).unwrap();
/// extractor.install(buf);
/// assert_eq!(
///     extractor.get_replay_data(),
///     ReplayData::Bytes(vec![0x03, 0x04, 0x05])
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReplayExtractor {
    buffer: Option<CursorBuffer>,
}

impl ReplayExtractor {
    /// Create an extractor with no buffer.
    pub fn new() -> Self {
        Self { buffer: None }
    }

    /// Create an extractor that already owns `buffer`.
    pub fn with_buffer(buffer: CursorBuffer) -> Self {
        Self {
            buffer: Some(buffer),
        }
    }

    /// Take ownership of freshly decompressed data.
    ///
    /// Any previously held buffer is returned to the caller.
    pub fn install(&mut self, buffer: CursorBuffer) -> Option<CursorBuffer> {
        debug!(
            "installing replay buffer: size={}, cursor={}",
            buffer.size(),
            buffer.cursor()
        );
        self.buffer.replace(buffer)
    }

    /// Drop the held buffer, if any.
    pub fn reset(&mut self) {
        if self.buffer.take().is_some() {
            debug!("replay buffer released");
        }
    }

    /// Remove and return the held buffer.
    pub fn take_buffer(&mut self) -> Option<CursorBuffer> {
        self.buffer.take()
    }

    /// Whether a buffer is currently held.
    pub fn has_buffer(&self) -> bool {
        self.buffer.is_some()
    }

    /// Shared access to the held buffer.
    pub fn buffer(&self) -> Option<&CursorBuffer> {
        self.buffer.as_ref()
    }

    /// Mutable access for readers that advance the cursor.
    pub fn buffer_mut(&mut self) -> Option<&mut CursorBuffer> {
        self.buffer.as_mut()
    }

    /// Copy the bytes between the cursor and the end of the buffer.
    ///
    /// Returns [`ReplayData::Empty`] when no buffer is held or when the
    /// cursor is already at the end. The cursor is never moved, so calling
    /// this twice in a row yields equal copies.
    pub fn get_replay_data(&self) -> ReplayData {
        let Some(buffer) = self.buffer.as_ref() else {
            return ReplayData::Empty;
        };

        let remaining = buffer.size() - buffer.cursor();
        if remaining == 0 {
            return ReplayData::Empty;
        }

        debug!(
            "extracting {remaining} replay bytes from cursor {}",
            buffer.cursor()
        );
        let start = buffer.cursor();
        ReplayData::Bytes(buffer.data()[start..start + remaining].to_vec())
    }

    /// Report whether the stream is unstarted, readable or exhausted.
    pub fn stream_state(&self) -> StreamState {
        match self.buffer.as_ref() {
            None => StreamState::NotStarted,
            Some(buffer) if buffer.is_exhausted() => StreamState::Exhausted,
            Some(buffer) => StreamState::Active {
                remaining: buffer.remaining(),
            },
        }
    }
}

impl From<CursorBuffer> for ReplayExtractor {
    fn from(buffer: CursorBuffer) -> Self {
        Self::with_buffer(buffer)
    }
}
