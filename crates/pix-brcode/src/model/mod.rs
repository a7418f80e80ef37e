//! Value types for static PIX payloads.
//!
//! This module contains the input-side types of the encoder:
//! - Payee keys (normalization and classification)
//! - Sanitized text (names and cities in the restricted alphabet)
//! - Payment requests (the owned four-field input record)

pub mod key;
pub mod request;
pub mod text;

pub use key::{normalize_key, KeyKind, PayeeKey};
pub use request::PaymentRequest;
pub use text::{sanitize_field, sanitize_text, SanitizedText};
