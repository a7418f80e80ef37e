//! The owned input record of the encoder.

use crate::codec::encode;
use crate::error::EncodeError;

/// The four values a static payload is built from.
///
/// Name and city are optional; blank or missing values fall back to the
/// format defaults at encode time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaymentRequest {
    /// Raw payee key as entered by the user.
    pub payee_key: String,
    /// Amount in currency units.
    pub amount: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub payee_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub payee_city: Option<String>,
}

impl PaymentRequest {
    /// Creates a request with no name or city.
    pub fn new(payee_key: impl Into<String>, amount: f64) -> Self {
        Self {
            payee_key: payee_key.into(),
            amount,
            payee_name: None,
            payee_city: None,
        }
    }

    /// Sets the payee name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.payee_name = Some(name.into());
        self
    }

    /// Sets the payee city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.payee_city = Some(city.into());
        self
    }

    /// Encodes this request into a checksummed payload.
    pub fn encode(&self) -> Result<String, EncodeError> {
        encode(
            &self.payee_key,
            self.amount,
            self.payee_name.as_deref().unwrap_or_default(),
            self.payee_city.as_deref().unwrap_or_default(),
        )
    }
}
