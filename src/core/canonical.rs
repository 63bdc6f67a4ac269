use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A canonical integer string: one or more ASCII digits, nothing else.
///
/// Produced only by the normalizer. Leading zeros from the input are kept
/// as-is; the sentinel `"0"` marks that no digit survived sanitization.
///
/// # Examples
///
/// ```
/// use rupiah_normalizer::normalize::normalize_to_integer_string;
///
/// let amount = normalize_to_integer_string("Rp. 2.700.000");
/// assert_eq!(amount.as_str(), "2700000");
/// assert!(!amount.is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalAmount(String);

impl CanonicalAmount {
    pub const ZERO_STR: &'static str = "0";

    pub fn zero() -> Self {
        Self(Self::ZERO_STR.to_string())
    }

    /// Keep only the ASCII digits of `text`, falling back to `"0"`.
    pub(crate) fn from_digits_of(text: &str) -> Self {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            Self::zero()
        } else {
            Self(digits)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// True only for the `"0"` sentinel, not for inputs like `"000"`.
    pub fn is_zero(&self) -> bool {
        self.0 == Self::ZERO_STR
    }

    /// Numeric value, or `None` when the digit run exceeds `Decimal` range.
    pub fn to_decimal(&self) -> Option<Decimal> {
        Decimal::from_str(&self.0).ok()
    }
}

impl Default for CanonicalAmount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for CanonicalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CanonicalAmount {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for CanonicalAmount {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<CanonicalAmount> for String {
    fn from(amount: CanonicalAmount) -> Self {
        amount.0
    }
}

impl Serialize for CanonicalAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
