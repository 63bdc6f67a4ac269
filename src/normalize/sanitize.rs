use crate::core::amount::RawAmount;
use once_cell::sync::Lazy;
use regex::Regex;

static CURRENCY_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)rp\.?").expect("currency marker regex"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Strip currency markers and whitespace/underscore noise from a raw value.
///
/// Absent values and values whose text is blank yield an empty string.
/// Every occurrence of `rp` (any case, optionally followed by a period) is
/// removed, wherever it appears.
///
/// # Examples
///
/// ```
/// use rupiah_normalizer::normalize::sanitize;
///
/// assert_eq!(sanitize("Rp. 2.700.000"), "2.700.000");
/// assert_eq!(sanitize("1_500 000"), "1500000");
/// assert_eq!(sanitize(None::<&str>), "");
/// ```
pub fn sanitize(raw: impl Into<RawAmount>) -> String {
    let raw = raw.into();
    let text = match raw.to_text() {
        Some(text) if !text.trim().is_empty() => text,
        _ => return String::new(),
    };
    let without_marker = CURRENCY_MARKER.replace_all(&text, "");
    let compact = WHITESPACE.replace_all(&without_marker, "");
    compact.replace('_', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_inputs() {
        assert_eq!(sanitize(RawAmount::Absent), "");
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize(" \t\n "), "");
    }

    #[test]
    fn test_marker_case_insensitive() {
        assert_eq!(sanitize("RP1.000"), "1.000");
        assert_eq!(sanitize("rp. 1.000"), "1.000");
        assert_eq!(sanitize("rP 1.000"), "1.000");
    }

    #[test]
    fn test_marker_removed_anywhere() {
        assert_eq!(sanitize("1.000 Rp"), "1.000");
        assert_eq!(sanitize("Rp 1 rp 2"), "12");
    }

    #[test]
    fn test_only_one_period_consumed_by_marker() {
        assert_eq!(sanitize("Rp..500"), ".500");
    }

    #[test]
    fn test_unicode_whitespace_removed() {
        assert_eq!(sanitize("1\u{00a0}500\u{2009}000"), "1500000");
    }

    #[test]
    fn test_other_noise_kept() {
        assert_eq!(sanitize("IDR 1,5"), "IDR1,5");
    }

    #[test]
    fn test_numeric_input() {
        assert_eq!(sanitize(1500), "1500");
        assert_eq!(sanitize(12.5), "12.5");
    }
}
