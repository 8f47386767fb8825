//! Benchmark profiles for the yrpx replay buffer.
//!
//! - [`replay_payload`]: deterministic pseudo-random decompressed stream
//! - [`reference_profile`]: 64 KiB stream with the first quarter consumed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use yrpx_replay::{CursorBuffer, ReplayExtractor};

/// Size of the reference decompressed stream.
pub const REFERENCE_SIZE: usize = 64 * 1024;

/// Build `len` bytes of deterministic filler from `seed`.
pub fn replay_payload(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 56) as u8
        })
        .collect()
}

/// Extractor over a [`REFERENCE_SIZE`] stream with a quarter already read.
pub fn reference_profile(seed: u64) -> ReplayExtractor {
    let cursor = REFERENCE_SIZE / 4;
    let mut buffer = CursorBuffer::new(replay_payload(REFERENCE_SIZE, seed));
    // Cursor is within bounds by construction.
    let _ = buffer.seek(cursor);
    ReplayExtractor::with_buffer(buffer)
}
