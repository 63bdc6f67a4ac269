//! Display formatting of canonical amounts.
//!
//! The free functions pin the rupiah style (`.` grouping, `"Rp."` label)
//! so output is identical on every machine. [`DisplayConfig`] renders the
//! same way with a caller-chosen label or separator.

pub mod grouping;

pub use grouping::group_thousands;

use crate::core::amount::RawAmount;
use crate::core::canonical::CanonicalAmount;
use crate::core::currency::DisplayConfig;
use crate::normalize::normalize_to_integer_string;

/// Normalize `raw` and group its digits with periods.
///
/// # Examples
///
/// ```
/// use rupiah_normalizer::format::format_thousands_id;
///
/// assert_eq!(format_thousands_id("2700000"), "2.700.000");
/// assert_eq!(format_thousands_id(0), "0");
/// assert_eq!(format_thousands_id(None::<&str>), "0");
/// ```
pub fn format_thousands_id(raw: impl Into<RawAmount>) -> String {
    DisplayConfig::default().format_grouped(raw)
}

/// Grouped amount behind the `"Rp."` label. Never emits decimals.
///
/// # Examples
///
/// ```
/// use rupiah_normalizer::format::format_rupiah_no_decimal;
///
/// assert_eq!(format_rupiah_no_decimal("2700000"), "Rp. 2.700.000");
/// assert_eq!(format_rupiah_no_decimal("garbage"), "Rp. 0");
/// ```
pub fn format_rupiah_no_decimal(raw: impl Into<RawAmount>) -> String {
    DisplayConfig::default().format_currency(raw)
}

impl DisplayConfig {
    /// Group an already-canonical amount; the `"0"` sentinel stays bare.
    pub fn group(&self, amount: &CanonicalAmount) -> String {
        if amount.is_zero() {
            return CanonicalAmount::ZERO_STR.to_string();
        }
        group_thousands(amount.as_str(), self.group_separator)
    }

    pub fn format_grouped(&self, raw: impl Into<RawAmount>) -> String {
        self.group(&normalize_to_integer_string(raw))
    }

    pub fn format_currency(&self, raw: impl Into<RawAmount>) -> String {
        format!("{} {}", self.currency_label, self.format_grouped(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::CurrencyLabel;

    #[test]
    fn test_thousands_reference_cases() {
        assert_eq!(format_thousands_id("2700000"), "2.700.000");
        assert_eq!(format_thousands_id(0), "0");
        assert_eq!(format_thousands_id(RawAmount::Absent), "0");
        assert_eq!(format_thousands_id("Rp 1.250.000,00"), "1.250.000");
    }

    #[test]
    fn test_rupiah_reference_cases() {
        assert_eq!(format_rupiah_no_decimal("2700000"), "Rp. 2.700.000");
        assert_eq!(format_rupiah_no_decimal(RawAmount::Absent), "Rp. 0");
        assert_eq!(format_rupiah_no_decimal(999), "Rp. 999");
        assert_eq!(format_rupiah_no_decimal(2_700_000.75), "Rp. 2.700.000");
    }

    #[test]
    fn test_leading_zeros_grouped_verbatim() {
        assert_eq!(format_thousands_id("0001"), "0.001");
    }

    #[test]
    fn test_formatting_output_renormalizes() {
        let display = format_rupiah_no_decimal("12345678");
        assert_eq!(
            normalize_to_integer_string(display.as_str()),
            "12345678"
        );
    }

    #[test]
    fn test_custom_config() {
        let config = DisplayConfig {
            currency_label: CurrencyLabel::new("IDR"),
            group_separator: ',',
        };
        assert_eq!(config.format_currency("Rp. 2.700.000"), "IDR 2,700,000");
        assert_eq!(config.format_grouped("abc"), "0");
    }
}
