//! Static PIX payload encoder.
//!
//! Builds the text carried by a static (reusable) PIX QR code: an EMV
//! merchant-presented QR payload made of tag-length-value fields and sealed
//! with a CRC-16/CCITT-FALSE checksum.
//!
//! Encoding is a pure function of its four inputs. Nothing is cached, read or
//! written, so every function here is safe to call from any thread.
//!
//! # Example
//!
//! ```
//! use pix_brcode::{encode, verify_checksum};
//!
//! let payload = encode("abc@mail.com", 1500.00, "Joao da Silva", "Sao Paulo")?;
//! assert!(payload.starts_with("000201"));
//! assert!(payload.ends_with("63040B90"));
//! assert!(verify_checksum(&payload));
//! # Ok::<(), pix_brcode::EncodeError>(())
//! ```
//!
//! # Modules
//!
//! - [`model`]: payee keys, sanitized text and the request record
//! - [`codec`]: TLV fields, checksum and payload assembly
//! - [`limits`]: fixed ceilings and default literals

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

pub use codec::{
    build_merchant_account_info, crc16, crc16_hex, encode, format_field, verify_checksum, Field,
    PayloadWriter,
};
pub use error::EncodeError;
pub use model::{
    normalize_key, sanitize_field, sanitize_text, KeyKind, PayeeKey, PaymentRequest, SanitizedText,
};
