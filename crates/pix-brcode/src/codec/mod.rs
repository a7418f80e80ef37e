//! Text encoding for static PIX payloads.
//!
//! Payloads are EMV merchant-presented QR text: a fixed-order sequence of
//! tag-length-value fields followed by a CRC-16/CCITT-FALSE checksum.

pub mod crc;
pub mod field;
pub mod payload;
pub mod writer;

pub use crc::{crc16, crc16_hex};
pub use field::{format_field, Field};
pub use payload::{build_merchant_account_info, encode, verify_checksum};
pub use writer::PayloadWriter;
