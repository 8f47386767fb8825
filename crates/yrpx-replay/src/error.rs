//! Error types for cursor reads.
//!
//! Extraction never fails; these errors come only from the primitives
//! that move the cursor.

use std::fmt;

/// Errors that can occur while reading through a [`CursorBuffer`](crate::CursorBuffer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// A read would run past the end of the buffer.
    OutOfBounds {
        /// Cursor position at the time of the read.
        cursor: usize,
        /// Number of bytes the read asked for.
        requested: usize,
        /// Total size of the buffer.
        size: usize,
    },
    /// A seek target lies beyond the end of the buffer.
    InvalidSeek {
        /// The requested cursor position.
        position: usize,
        /// Total size of the buffer.
        size: usize,
    },
    /// A fixed-width UTF-16 name could not be decoded.
    InvalidName {
        /// Human-readable description of what went wrong.
        detail: String,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                cursor,
                requested,
                size,
            } => write!(
                f,
                "out of bounds read: cursor={cursor}, requested={requested}, size={size}"
            ),
            Self::InvalidSeek { position, size } => {
                write!(f, "seek to {position} past end of buffer (size {size})")
            }
            Self::InvalidName { detail } => write!(f, "invalid name: {detail}"),
        }
    }
}

impl std::error::Error for ReplayError {}
