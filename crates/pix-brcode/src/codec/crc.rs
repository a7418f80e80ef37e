//! CRC-16/CCITT-FALSE.
//!
//! ```text
//! width=16 poly=0x1021 init=0xFFFF refin=false refout=false xorout=0x0000
//! check("123456789") = 0x29B1
//! ```

/// Initial accumulator value.
pub const CRC16_INIT: u16 = 0xFFFF;

/// Generator polynomial.
pub const CRC16_POLY: u16 = 0x1021;

/// Computes the checksum of `data`.
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc = CRC16_INIT;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ CRC16_POLY
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// Computes the checksum of `payload` as 4 upper-case hex digits.
pub fn crc16_hex(payload: &str) -> String {
    format!("{:04X}", crc16(payload.as_bytes()))
}
