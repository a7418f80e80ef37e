//! Fixed limits and literals for static PIX payloads.
//!
//! The receiving side recomputes the checksum over the exact byte sequence,
//! so none of these values are configurable.

/// Maximum length of a TLV value (the length sub-field is two digits).
pub const MAX_FIELD_VALUE_LEN: usize = 99;

/// Width of the tag sub-field.
pub const TAG_LEN: usize = 2;

/// Width of the length sub-field.
pub const LENGTH_LEN: usize = 2;

/// Maximum payee name length (field 59).
pub const MAX_NAME_LEN: usize = 25;

/// Maximum payee city length (field 60).
pub const MAX_CITY_LEN: usize = 15;

/// Name used when the caller supplies a blank payee name.
pub const DEFAULT_NAME: &str = "PRESTADOR";

/// City used when the caller supplies a blank payee city.
pub const DEFAULT_CITY: &str = "SAO PAULO";

/// Country calling code prefixed to bare local phone keys.
pub const PHONE_COUNTRY_CODE: &str = "+55";

/// Digit counts of a bare local phone number (area code + subscriber).
pub const PHONE_DIGITS: [usize; 2] = [10, 11];

/// Number of hex digits in the trailing checksum.
pub const CRC_HEX_LEN: usize = 4;
