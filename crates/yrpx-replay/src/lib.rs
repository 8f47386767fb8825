//! Cursor-tracked replay data buffer for yrpx replays.
//!
//! The decompression step produces a flat byte stream. Readers walk it
//! with a cursor, and the embedding host can ask at any time for
//! everything that has not been read yet.
//!
//! # Architecture
//!
//! - [`CursorBuffer`] owns the decompressed bytes and the read cursor
//! - [`codec`] adds bounds-checked little-endian and UTF-16 name readers
//! - [`ReplayExtractor`] holds the buffer and copies out the unread suffix
//! - [`ReplayData`] is the host-neutral result: `Empty` or owned `Bytes`
//!
//! Extraction never fails and never advances the cursor. Only the reading
//! primitives can return a [`ReplayError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod codec;
pub mod error;
pub mod extract;
pub mod types;

pub use buffer::CursorBuffer;
pub use codec::NAME_WIDTH;
pub use error::ReplayError;
pub use extract::ReplayExtractor;
pub use types::{ReplayData, StreamState};
