//! Reduction of free-form monetary text to a canonical integer string.
//!
//! Sanitization strips currency markers and whitespace noise, then the
//! separator heuristic decides which `.`/`,` (if any) marks decimals and
//! drops the fraction. The pipeline is total: anything without digits
//! becomes `"0"`.

pub mod disambiguate;
pub mod sanitize;

pub use disambiguate::{extract_integer, SeparatorLayout};
pub use sanitize::sanitize;

use crate::core::amount::RawAmount;
use crate::core::canonical::CanonicalAmount;

/// Normalize any raw value to its canonical integer string.
///
/// # Examples
///
/// ```
/// use rupiah_normalizer::normalize::normalize_to_integer_string;
///
/// assert_eq!(normalize_to_integer_string("2.700.000,50"), "2700000");
/// assert_eq!(normalize_to_integer_string("2700000.00"), "2700000");
/// assert_eq!(normalize_to_integer_string("rp 1500"), "1500");
/// assert_eq!(normalize_to_integer_string(None::<&str>), "0");
/// ```
pub fn normalize_to_integer_string(raw: impl Into<RawAmount>) -> CanonicalAmount {
    extract_integer(&sanitize(raw))
}
