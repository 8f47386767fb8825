//! Primitive readers over a [`CursorBuffer`].
//!
//! All integers are little-endian. Names are fixed-width UTF-16LE fields,
//! NUL-padded. Each read checks bounds before touching the cursor; a read
//! that does not fit returns [`ReplayError::OutOfBounds`] and consumes
//! nothing.

use crate::buffer::CursorBuffer;
use crate::error::ReplayError;

/// Width in bytes of a player name field (20 UTF-16 code units).
pub const NAME_WIDTH: usize = 40;

impl CursorBuffer {
    /// Read exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReplayError> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read `n` bytes, borrowed from the storage.
    pub fn read_bytes(&mut self, n: usize) -> Result<&[u8], ReplayError> {
        self.take(n)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, ReplayError> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    /// Read a little-endian u16.
    pub fn read_u16_le(&mut self) -> Result<u16, ReplayError> {
        self.read_array().map(u16::from_le_bytes)
    }

    /// Read a little-endian u32.
    pub fn read_u32_le(&mut self) -> Result<u32, ReplayError> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Read a little-endian u64.
    pub fn read_u64_le(&mut self) -> Result<u64, ReplayError> {
        self.read_array().map(u64::from_le_bytes)
    }

    /// Read a `width`-byte UTF-16LE name, cut at the first NUL code unit.
    ///
    /// The whole field is consumed even when decoding fails. A trailing odd
    /// byte is consumed and ignored.
    pub fn read_utf16_name(&mut self, width: usize) -> Result<String, ReplayError> {
        let field = self.take(width)?;
        let units = field
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .take_while(|&unit| unit != 0);
        char::decode_utf16(units)
            .collect::<Result<String, _>>()
            .map_err(|e| ReplayError::InvalidName {
                detail: format!("unpaired surrogate {:#06x}", e.unpaired_surrogate()),
            })
    }

    /// Read a standard [`NAME_WIDTH`] player name.
    pub fn read_name(&mut self) -> Result<String, ReplayError> {
        self.read_utf16_name(NAME_WIDTH)
    }
}
