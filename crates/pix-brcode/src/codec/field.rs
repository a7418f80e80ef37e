//! Tag-length-value fields.
//!
//! ```text
//! field = tag(2 digits) || len(value) zero-padded to 2 digits || value
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::error::EncodeError;
use crate::limits::{LENGTH_LEN, MAX_FIELD_VALUE_LEN, TAG_LEN};

// =============================================================================
// TAGS
// =============================================================================

/// Top-level field tags.
pub mod tags {
    pub const PAYLOAD_FORMAT_INDICATOR: &str = "00";
    pub const MERCHANT_ACCOUNT_INFO: &str = "26";
    pub const MERCHANT_CATEGORY_CODE: &str = "52";
    pub const TRANSACTION_CURRENCY: &str = "53";
    pub const TRANSACTION_AMOUNT: &str = "54";
    pub const COUNTRY_CODE: &str = "58";
    pub const MERCHANT_NAME: &str = "59";
    pub const MERCHANT_CITY: &str = "60";
    pub const ADDITIONAL_DATA: &str = "62";
    pub const CRC: &str = "63";

    /// Sub-tags of the merchant account field (26).
    pub mod account {
        pub const GUI: &str = "00";
        pub const KEY: &str = "01";
    }

    /// Sub-tags of the additional data field (62).
    pub mod additional {
        pub const REFERENCE_LABEL: &str = "05";
    }
}

// =============================================================================
// FIELD
// =============================================================================

/// A single TLV field.
///
/// The value length is checked on construction, so every `Field` renders to
/// a well-formed wire string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    tag: &'a str,
    value: Cow<'a, str>,
}

impl<'a> Field<'a> {
    /// Creates a field, failing if `value` exceeds 99 characters.
    pub fn new(tag: &'a str, value: impl Into<Cow<'a, str>>) -> Result<Self, EncodeError> {
        debug_assert!(
            tag.len() == TAG_LEN && tag.bytes().all(|b| b.is_ascii_digit()),
            "tag must be two decimal digits"
        );

        let value = value.into();
        let len = value.chars().count();
        if len > MAX_FIELD_VALUE_LEN {
            #[cfg(feature = "tracing")]
            tracing::warn!(tag, len, "field value too long");
            return Err(EncodeError::FieldTooLong {
                tag: tag.to_string(),
                len,
                max: MAX_FIELD_VALUE_LEN,
            });
        }
        Ok(Self { tag, value })
    }

    /// Creates a field whose value is the concatenation of rendered sub-fields.
    ///
    /// The outer length covers the whole sub-payload, not any single child.
    pub fn nested(tag: &'a str, children: &[Field<'_>]) -> Result<Self, EncodeError> {
        let value: String = children.iter().map(|child| child.to_string()).collect();
        Self::new(tag, value)
    }

    /// Returns the tag.
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// Returns the value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the rendered length in characters.
    pub fn encoded_len(&self) -> usize {
        TAG_LEN + LENGTH_LEN + self.value.chars().count()
    }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}{}", self.tag, self.value.chars().count(), self.value)
    }
}

/// Formats a single TLV field as wire text.
pub fn format_field(tag: &str, value: &str) -> Result<String, EncodeError> {
    Ok(Field::new(tag, value)?.to_string())
}
