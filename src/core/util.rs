/*!
Display helpers for byte buffers.
*/

use std::fmt;

/// Upper-case hex view of a buffer that elides the middle of long inputs.
///
/// Shows `from_start` bytes from the front and `from_end` bytes from the
/// back separated by `" ... "`; a buffer no longer than their sum is shown
/// in full.
#[derive(Debug, Clone, Copy)]
pub struct HexChop<'a> {
    bytes: &'a [u8],
    from_start: usize,
    from_end: usize,
}

impl<'a> HexChop<'a> {
    pub fn new(bytes: &'a [u8], from_start: usize, from_end: usize) -> Self {
        Self { bytes, from_start, from_end }
    }

    /// Show every byte
    pub fn full(bytes: &'a [u8]) -> Self {
        Self::new(bytes, bytes.len(), 0)
    }
}

/// `HexChop` with 8 bytes kept at each end
pub fn hex_chop(bytes: &[u8]) -> HexChop<'_> {
    HexChop::new(bytes, 8, 8)
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{:02X}", byte)?;
    }
    Ok(())
}

impl fmt::Display for HexChop<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.bytes.len();
        if self.from_start.saturating_add(self.from_end) >= len {
            return write_hex(f, self.bytes);
        }

        write_hex(f, &self.bytes[..self.from_start])?;
        f.write_str(" ... ")?;
        write_hex(f, &self.bytes[len - self.from_end..])
    }
}
