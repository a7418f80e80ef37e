//! Static payload assembly.
//!
//! Field order, literals and padding widths are fixed: the payer's app
//! recomputes the checksum over the exact same text.
//!
//! ```text
//! 00 format indicator     "01"
//! 26 merchant account     00 "BR.GOV.BCB.PIX" || 01 key
//! 52 category code        "0000"
//! 53 currency             "986"
//! 54 amount               2 decimals, ties away from zero
//! 58 country              "BR"
//! 59 name                 sanitized, <= 25
//! 60 city                 sanitized, <= 15
//! 62 additional data      05 "***"
//! 63 crc                  4 hex digits over everything before them
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

use crate::codec::crc::crc16_hex;
use crate::codec::field::{tags, Field};
use crate::codec::writer::PayloadWriter;
use crate::error::EncodeError;
use crate::limits::{CRC_HEX_LEN, DEFAULT_CITY, DEFAULT_NAME, MAX_CITY_LEN, MAX_NAME_LEN};
use crate::model::{normalize_key, sanitize_field, PayeeKey};

// =============================================================================
// FIXED VALUES
// =============================================================================

/// Payload format version (field 00).
pub const PAYLOAD_FORMAT_VERSION: &str = "01";

/// Globally unique identifier of the PIX scheme (field 26, sub-field 00).
pub const PIX_GUI: &str = "BR.GOV.BCB.PIX";

/// Merchant category code (field 52), unspecified.
pub const MERCHANT_CATEGORY: &str = "0000";

/// ISO 4217 numeric code for BRL (field 53).
pub const CURRENCY_BRL: &str = "986";

/// ISO 3166 country code (field 58).
pub const COUNTRY_BR: &str = "BR";

/// Reference label of a static, reusable payload (field 62, sub-field 05).
pub const NO_REFERENCE: &str = "***";

// Typical payloads are well under this.
const PAYLOAD_CAPACITY: usize = 160;

// =============================================================================
// ENCODING
// =============================================================================

/// Builds the merchant account field (26) for a normalized key.
///
/// ```text
/// 26 LL 00 14 BR.GOV.BCB.PIX 01 LL <key>
/// ```
pub fn build_merchant_account_info(key: &PayeeKey) -> Result<String, EncodeError> {
    Ok(merchant_account_field(key)?.to_string())
}

fn merchant_account_field(key: &PayeeKey) -> Result<Field<'static>, EncodeError> {
    let gui = Field::new(tags::account::GUI, PIX_GUI)?;
    let key = Field::new(tags::account::KEY, key.as_str().to_string())?;
    Field::nested(tags::MERCHANT_ACCOUNT_INFO, &[gui, key])
}

fn additional_data_field() -> Result<Field<'static>, EncodeError> {
    let reference = Field::new(tags::additional::REFERENCE_LABEL, NO_REFERENCE)?;
    Field::nested(tags::ADDITIONAL_DATA, &[reference])
}

/// Renders an amount with exactly two fraction digits and a `.` separator.
///
/// Rounds the exact binary value of `amount`, ties away from zero, so
/// `0.125` renders as `0.13` while `2.675` (stored as 2.67499..) renders as
/// `2.67`. Fails for amounts beyond the range of [`Decimal`].
fn format_amount(amount: f64) -> Result<String, EncodeError> {
    // Avoid rendering negative zero as "-0.00"
    let amount = if amount == 0.0 { 0.0 } else { amount };
    let value = Decimal::from_f64_retain(amount).ok_or(EncodeError::InvalidAmount { amount })?;
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Ok(format!("{rounded:.2}"))
}

/// Encodes a static payment payload.
///
/// Blank name or city fall back to `PRESTADOR` / `SAO PAULO`. The key is
/// normalized (whitespace removed, `+55` added to bare phone numbers) but not
/// validated.
///
/// Fails with [`EncodeError::InvalidAmount`] for negative, NaN, infinite or
/// out-of-range (beyond ~7.9e28) amounts and with [`EncodeError::FieldTooLong`] when a field value would
/// exceed 99 characters. No partial payload is ever returned.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip_all, fields(amount = %amount), err)
)]
pub fn encode(
    payee_key: &str,
    amount: f64,
    payee_name: &str,
    payee_city: &str,
) -> Result<String, EncodeError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(EncodeError::InvalidAmount { amount });
    }

    let amount = format_amount(amount)?;
    let key = normalize_key(payee_key);
    let name = sanitize_field(payee_name, MAX_NAME_LEN, DEFAULT_NAME);
    let city = sanitize_field(payee_city, MAX_CITY_LEN, DEFAULT_CITY);

    let fields = [
        Field::new(tags::PAYLOAD_FORMAT_INDICATOR, PAYLOAD_FORMAT_VERSION)?,
        merchant_account_field(&key)?,
        Field::new(tags::MERCHANT_CATEGORY_CODE, MERCHANT_CATEGORY)?,
        Field::new(tags::TRANSACTION_CURRENCY, CURRENCY_BRL)?,
        Field::new(tags::TRANSACTION_AMOUNT, amount)?,
        Field::new(tags::COUNTRY_CODE, COUNTRY_BR)?,
        Field::new(tags::MERCHANT_NAME, name.as_str())?,
        Field::new(tags::MERCHANT_CITY, city.as_str())?,
        additional_data_field()?,
    ];

    let mut writer = PayloadWriter::with_capacity(PAYLOAD_CAPACITY);
    for field in &fields {
        writer.write_field(field);
    }
    let payload = writer.finish();

    #[cfg(feature = "tracing")]
    tracing::debug!(key_kind = ?key.kind(), len = payload.len(), "encoded payload");

    Ok(payload)
}

/// Checks the trailing checksum of a payload.
///
/// Returns true if the payload ends in a `6304` CRC field whose four hex
/// digits match the checksum of everything before them. Fields are not
/// decoded.
pub fn verify_checksum(payload: &str) -> bool {
    let Some(split) = payload.len().checked_sub(CRC_HEX_LEN) else {
        return false;
    };
    if !payload.is_char_boundary(split) {
        return false;
    }

    let (base, crc) = payload.split_at(split);
    let crc_prefix = format!("{}{CRC_HEX_LEN:02}", tags::CRC);
    base.ends_with(&crc_prefix) && crc16_hex(base).eq_ignore_ascii_case(crc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::normalize_key;

    const GOLDEN: &str = "00020126340014BR.GOV.BCB.PIX0112abc@mail.com52040000530398654071500.005802BR5913JOAO DA SILVA6009SAO PAULO62070503***63040B90";

    #[test]
    fn test_golden_vector() {
        let payload = encode("abc@mail.com", 1500.00, "Joao da Silva", "Sao Paulo").unwrap();
        assert_eq!(payload, GOLDEN);
    }

    #[test]
    fn test_merchant_account_info() {
        let key = normalize_key("11988887777");
        assert_eq!(
            build_merchant_account_info(&key).unwrap(),
            "26360014BR.GOV.BCB.PIX0114+5511988887777"
        );
    }

    #[test]
    fn test_merchant_account_key_too_long() {
        // 99 - 18 (gui field) - 4 (key tag + len) = 77 chars fit
        let fits = normalize_key(&"k".repeat(77));
        assert!(build_merchant_account_info(&fits).is_ok());

        let too_long = normalize_key(&"k".repeat(78));
        assert!(matches!(
            build_merchant_account_info(&too_long),
            Err(EncodeError::FieldTooLong { ref tag, len: 100, max: 99 }) if tag == "26"
        ));
    }

    #[test]
    fn test_defaults_and_phone_key() {
        let payload = encode("11988887777", 0.0, "", "  ").unwrap();
        assert_eq!(
            payload,
            "00020126360014BR.GOV.BCB.PIX0114+551198888777752040000530398654040.005802BR5909PRESTADOR6009SAO PAULO62070503***6304EBB1"
        );
    }

    #[test]
    fn test_negative_zero_amount() {
        let positive = encode("abc@mail.com", 0.0, "A", "B").unwrap();
        let negative = encode("abc@mail.com", -0.0, "A", "B").unwrap();
        assert_eq!(positive, negative);
    }

    #[test]
    fn test_amount_formatting() {
        assert_eq!(format_amount(1500.0).unwrap(), "1500.00");
        assert_eq!(format_amount(0.5).unwrap(), "0.50");
        assert_eq!(format_amount(10.0 / 3.0).unwrap(), "3.33");
        assert_eq!(format_amount(-0.0).unwrap(), "0.00");
    }

    #[test]
    fn test_amount_ties_round_up() {
        // Exact binary ties go away from zero
        assert_eq!(format_amount(0.125).unwrap(), "0.13");
        assert_eq!(format_amount(0.375).unwrap(), "0.38");
        assert_eq!(format_amount(10.125).unwrap(), "10.13");

        // Not a tie: 2.675 is stored just below the midpoint
        assert_eq!(format_amount(2.675).unwrap(), "2.67");
        assert_eq!(format_amount(1.005).unwrap(), "1.00");
    }

    #[test]
    fn test_amount_tie_in_payload() {
        let payload = encode("abc@mail.com", 0.125, "A", "B").unwrap();
        assert!(payload.contains("54040.135802BR"));
    }

    #[test]
    fn test_invalid_amounts() {
        for amount in [-1.0, -0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                encode("abc@mail.com", amount, "A", "B"),
                Err(EncodeError::InvalidAmount { .. })
            ));
        }
    }

    #[test]
    fn test_large_amounts() {
        assert_eq!(format_amount(1e21).unwrap(), "1000000000000000000000.00");

        let payload = encode("abc@mail.com", 1e21, "A", "B").unwrap();
        assert!(payload.contains("54251000000000000000000000.005802BR"));

        for amount in [1e29, 1e120] {
            assert_eq!(
                encode("abc@mail.com", amount, "A", "B"),
                Err(EncodeError::InvalidAmount { amount })
            );
        }
    }

    #[test]
    fn test_verify_checksum() {
        assert!(verify_checksum(GOLDEN));
        let lower_hex = format!("{}0b90", &GOLDEN[..GOLDEN.len() - 4]);
        assert!(verify_checksum(&lower_hex));

        let mut corrupted = GOLDEN.to_string();
        corrupted.replace_range(50..51, "9");
        assert!(!verify_checksum(&corrupted));

        assert!(!verify_checksum(""));
        assert!(!verify_checksum("0B90"));
    }
}
