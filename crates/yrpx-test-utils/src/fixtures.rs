//! Canned replay streams and extractors.
//!
//! - [`sample_stream`] — two player names, four duel parameters, then a
//!   message payload.
//! - [`extractor_at`] — extractor over arbitrary bytes with the cursor preset.
//! - [`consumed_extractor`] — extractor whose buffer has been read to the end.

use yrpx_replay::{CursorBuffer, ReplayExtractor};

use crate::ReplayStreamBuilder;

/// Player names written by [`sample_stream`].
pub const SAMPLE_PLAYERS: [&str; 2] = ["Yugi", "Kaiba"];

/// Duel parameters written by [`sample_stream`]: start LP, start hand,
/// draw count, duel flags.
pub const SAMPLE_PARAMS: [u32; 4] = [8000, 5, 1, 0x0002_0000];

/// Message payload trailing the header section of [`sample_stream`].
pub const SAMPLE_PAYLOAD: [u8; 6] = [0x01, 0x28, 0x00, 0x00, 0x00, 0xFF];

/// Build the sample stream and return it with the length of its header
/// section (everything before [`SAMPLE_PAYLOAD`]).
pub fn sample_stream() -> (Vec<u8>, usize) {
    let mut builder = ReplayStreamBuilder::new();
    for name in SAMPLE_PLAYERS {
        builder = builder.name(name);
    }
    for param in SAMPLE_PARAMS {
        builder = builder.u32(param);
    }
    let header_len = builder.len();
    (builder.bytes(&SAMPLE_PAYLOAD).build(), header_len)
}

/// Extractor over `bytes` with the cursor at `cursor`.
///
/// Panics if `cursor > bytes.len()`.
pub fn extractor_at(bytes: &[u8], cursor: usize) -> ReplayExtractor {
    let buffer = CursorBuffer::with_cursor(bytes, cursor).expect("cursor within bounds");
    ReplayExtractor::with_buffer(buffer)
}

/// Extractor over `bytes` with every byte already consumed.
pub fn consumed_extractor(bytes: &[u8]) -> ReplayExtractor {
    extractor_at(bytes, bytes.len())
}
