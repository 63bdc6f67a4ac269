use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Label printed in front of a formatted amount, e.g. `"Rp."`.
///
/// # Examples
///
/// ```
/// use rupiah_normalizer::core::currency::CurrencyLabel;
///
/// assert_eq!(CurrencyLabel::rupiah().as_str(), "Rp.");
/// assert_eq!(CurrencyLabel::new("IDR").to_string(), "IDR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyLabel(String);

impl CurrencyLabel {
    pub const RUPIAH: &'static str = "Rp.";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn rupiah() -> Self {
        Self::new(Self::RUPIAH)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyLabel {
    fn default() -> Self {
        Self::rupiah()
    }
}

impl fmt::Display for CurrencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyLabel {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Errors arising from loading or validating a display configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("group separator must not be a digit or whitespace, got {0:?}")]
    InvalidSeparator(char),
    #[error("currency label must not contain digits, got {0:?}")]
    InvalidLabel(String),
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// How canonical amounts are rendered for display.
///
/// The default pins a period as the group separator and `"Rp."` as the
/// label, independent of any runtime locale.
///
/// # Examples
///
/// ```
/// use rupiah_normalizer::core::currency::{CurrencyLabel, DisplayConfig};
///
/// let config = DisplayConfig {
///     currency_label: CurrencyLabel::new("IDR"),
///     ..Default::default()
/// };
/// assert_eq!(config.format_currency("2700000"), "IDR 2.700.000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Label placed before the grouped digits, separated by one space.
    pub currency_label: CurrencyLabel,
    /// Character inserted between groups of three digits.
    pub group_separator: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_label: CurrencyLabel::rupiah(),
            group_separator: '.',
        }
    }
}

impl DisplayConfig {
    /// Reject configurations whose output could be re-read as other digits.
    ///
    /// Called by `from_json_str` and `load`; rendering does not re-check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sep = self.group_separator;
        if sep.is_ascii_digit() || sep.is_whitespace() {
            return Err(ConfigError::InvalidSeparator(sep));
        }
        if self.currency_label.as_str().chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidLabel(
                self.currency_label.as_str().to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: DisplayConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&content)?;
        log::debug!("loaded display config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_rupiah() {
        let config = DisplayConfig::default();
        assert_eq!(config.currency_label.as_str(), "Rp.");
        assert_eq!(config.group_separator, '.');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = DisplayConfig::from_json_str(r#"{ "group_separator": "," }"#).unwrap();
        assert_eq!(config.group_separator, ',');
        assert_eq!(config.currency_label, CurrencyLabel::rupiah());
    }

    #[test]
    fn test_digit_separator_rejected() {
        let result = DisplayConfig::from_json_str(r#"{ "group_separator": "7" }"#);
        assert!(matches!(result, Err(ConfigError::InvalidSeparator('7'))));
    }

    #[test]
    fn test_label_with_digits_rejected() {
        let config = DisplayConfig {
            currency_label: CurrencyLabel::new("R2"),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLabel(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            DisplayConfig::from_json_str("{"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = DisplayConfig::load("/nonexistent/display.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
