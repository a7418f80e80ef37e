//! Payee keys.
//!
//! A key routes a payment to a recipient account: a tax ID (CPF/CNPJ), an
//! e-mail address, a phone number or a random UUID token. The encoder never
//! validates keys against a registry; it only normalizes whitespace and the
//! country prefix of bare phone numbers.

use std::fmt;

use crate::limits::{PHONE_COUNTRY_CODE, PHONE_DIGITS};

/// A normalized payee key, ready to be placed in the merchant account field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PayeeKey(String);

impl PayeeKey {
    /// Returns the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the shape of this key.
    pub fn kind(&self) -> KeyKind {
        KeyKind::classify(self)
    }

    /// Consumes the key and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PayeeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PayeeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalizes a raw payee key.
///
/// Removes all whitespace. A result of exactly 10 or 11 ASCII digits is a
/// bare local phone number and gets the `+55` prefix; anything else is
/// returned unchanged (punctuation in tax IDs included).
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", ret))]
pub fn normalize_key(raw_key: &str) -> PayeeKey {
    let stripped: String = raw_key.chars().filter(|c| !c.is_whitespace()).collect();

    if is_bare_phone(&stripped) {
        #[cfg(feature = "tracing")]
        tracing::debug!(prefix = PHONE_COUNTRY_CODE, "bare phone key, adding country code");
        return PayeeKey(format!("{PHONE_COUNTRY_CODE}{stripped}"));
    }

    PayeeKey(stripped)
}

fn is_bare_phone(s: &str) -> bool {
    PHONE_DIGITS.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Shape of a normalized payee key.
///
/// Purely informational: classification never rejects a key, and `Unknown`
/// keys are encoded exactly like the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// `+` followed by digits (after normalization).
    Phone,
    /// Contains `@`.
    Email,
    /// Individual tax ID, 11 digits with `.`/`-` punctuation.
    Cpf,
    /// Company tax ID, 14 digits with or without `.`/`-`/`/` punctuation.
    Cnpj,
    /// Random key: hyphenated UUID.
    Random,
    /// Anything else.
    Unknown,
}

impl KeyKind {
    /// Classifies a normalized key by its shape.
    ///
    /// A bare 11-digit string is a phone number after normalization, so an
    /// unpunctuated CPF classifies as `Phone`. Only punctuated CPFs are
    /// recognized as `Cpf`.
    pub fn classify(key: &PayeeKey) -> KeyKind {
        let s = key.as_str();

        if let Some(rest) = s.strip_prefix('+') {
            if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
                return KeyKind::Phone;
            }
        }
        if s.contains('@') {
            return KeyKind::Email;
        }
        if is_uuid(s) {
            return KeyKind::Random;
        }

        if s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'/')) {
            let digits = s.bytes().filter(u8::is_ascii_digit).count();
            match digits {
                11 if digits != s.len() => return KeyKind::Cpf,
                14 => return KeyKind::Cnpj,
                _ => {}
            }
        }

        KeyKind::Unknown
    }
}

fn is_uuid(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 36
        && bytes.iter().enumerate().all(|(i, b)| match i {
            8 | 13 | 18 | 23 => *b == b'-',
            _ => b.is_ascii_hexdigit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_gets_country_code() {
        assert_eq!(normalize_key("11988887777").as_str(), "+5511988887777");
        assert_eq!(normalize_key("1133334444").as_str(), "+551133334444");
    }

    #[test]
    fn test_phone_with_spaces() {
        assert_eq!(normalize_key(" 11 98888 7777 ").as_str(), "+5511988887777");
    }

    #[test]
    fn test_non_phone_digit_counts_unchanged() {
        assert_eq!(normalize_key("123456789").as_str(), "123456789");
        assert_eq!(normalize_key("12345678000195").as_str(), "12345678000195");
    }

    #[test]
    fn test_already_prefixed_phone_unchanged() {
        assert_eq!(normalize_key("+5511988887777").as_str(), "+5511988887777");
    }

    #[test]
    fn test_email_whitespace_stripped() {
        assert_eq!(normalize_key(" abc@mail.com ").as_str(), "abc@mail.com");
    }

    #[test]
    fn test_tax_id_punctuation_kept() {
        assert_eq!(normalize_key("123.456.789-00").as_str(), "123.456.789-00");
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(normalize_key("  ").as_str(), "");
    }

    #[test]
    fn test_classify() {
        assert_eq!(normalize_key("11988887777").kind(), KeyKind::Phone);
        assert_eq!(normalize_key("abc@mail.com").kind(), KeyKind::Email);
        assert_eq!(normalize_key("123.456.789-00").kind(), KeyKind::Cpf);
        assert_eq!(normalize_key("12.345.678/0001-95").kind(), KeyKind::Cnpj);
        assert_eq!(normalize_key("12345678000195").kind(), KeyKind::Cnpj);
        assert_eq!(
            normalize_key("123e4567-e89b-12d3-a456-426614174000").kind(),
            KeyKind::Random
        );
        assert_eq!(normalize_key("not a key").kind(), KeyKind::Unknown);
    }
}
