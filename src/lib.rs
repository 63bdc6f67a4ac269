//! # rupiah-normalizer
//!
//! Locale-ambiguous monetary string normalization and rupiah display
//! formatting.
//!
//! Free-form amounts such as `"Rp. 2.700.000,50"`, `"2700000.00"` or
//! `"rp 1500"` are reduced to a canonical integer string (`"2700000"`),
//! then rendered as `"2.700.000"` or `"Rp. 2.700.000"`. Every input,
//! including garbage and missing values, produces a result.
//!
//! ## Architecture
//!
//! - **core** — Raw input values, canonical amounts, display configuration
//! - **normalize** — Sanitizer and separator disambiguation
//! - **format** — Thousands grouping and currency-prefixed display
//! - **batch** — Normalizing JSON batches and generating sample inputs

pub mod batch;
pub mod core;
pub mod format;
pub mod normalize;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::amount::RawAmount;
    pub use crate::core::canonical::CanonicalAmount;
    pub use crate::core::currency::{CurrencyLabel, DisplayConfig};
    pub use crate::format::{format_rupiah_no_decimal, format_thousands_id};
    pub use crate::normalize::{normalize_to_integer_string, sanitize};
}
