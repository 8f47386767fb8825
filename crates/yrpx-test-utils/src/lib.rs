//! Test utilities for yrpx replay buffer development.
//!
//! Provides [`ReplayStreamBuilder`] for assembling decompressed replay
//! streams byte by byte, plus canned fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{consumed_extractor, extractor_at, sample_stream, SAMPLE_PLAYERS};

use yrpx_replay::{CursorBuffer, NAME_WIDTH};

/// Builder for little-endian replay byte streams.
///
/// Mirrors the layout the reading primitives expect, so tests can write a
/// prefix, read it back, and check what is left for extraction.
#[derive(Default)]
pub struct ReplayStreamBuilder {
    bytes: Vec<u8>,
}

impl ReplayStreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn u8(mut self, v: u8) -> Self {
        self.bytes.push(v);
        self
    }

    pub fn u16(mut self, v: u16) -> Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn u32(mut self, v: u32) -> Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn u64(mut self, v: u64) -> Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn bytes(mut self, b: &[u8]) -> Self {
        self.bytes.extend_from_slice(b);
        self
    }

    /// Append a NUL-padded [`NAME_WIDTH`] UTF-16LE name.
    ///
    /// Panics if the name does not fit in the field.
    pub fn name(mut self, name: &str) -> Self {
        let mut field: Vec<u8> = name.encode_utf16().flat_map(u16::to_le_bytes).collect();
        assert!(field.len() <= NAME_WIDTH, "name {name:?} too long");
        field.resize(NAME_WIDTH, 0);
        self.bytes.extend_from_slice(&field);
        self
    }

    /// Current length of the stream.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }

    pub fn into_buffer(self) -> CursorBuffer {
        CursorBuffer::new(self.bytes)
    }
}
