//! Payload text buffer.

use crate::codec::crc::crc16_hex;
use crate::codec::field::{tags, Field};
use crate::limits::CRC_HEX_LEN;

/// Accumulates fields in order and seals the payload with its checksum.
#[derive(Debug, Clone, Default)]
pub struct PayloadWriter {
    buf: String,
}

impl PayloadWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty writer with room for `capacity` characters.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: String::with_capacity(capacity) }
    }

    /// Appends a rendered field.
    pub fn write_field(&mut self, field: &Field<'_>) {
        self.buf.push_str(&field.to_string());
    }

    /// Returns the text written so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Appends the checksum field and returns the finished payload.
    ///
    /// The CRC prefix (`6304`) is part of the checksummed text; only the four
    /// hex digits that follow it are excluded.
    pub fn finish(mut self) -> String {
        self.buf.push_str(tags::CRC);
        self.buf.push_str(&format!("{CRC_HEX_LEN:02}"));
        let crc = crc16_hex(&self.buf);
        self.buf.push_str(&crc);
        self.buf
    }
}
