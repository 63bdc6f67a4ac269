use crate::core::amount::RawAmount;
use crate::core::canonical::CanonicalAmount;
use crate::core::currency::DisplayConfig;
use crate::normalize::normalize_to_integer_string;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// One raw value together with every rendering of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    /// The raw value's text; empty when the value was absent.
    pub input: String,
    pub canonical: CanonicalAmount,
    pub grouped: String,
    pub display: String,
}

impl NormalizedRecord {
    pub fn from_raw(raw: impl Into<RawAmount>, config: &DisplayConfig) -> Self {
        let raw = raw.into();
        let canonical = normalize_to_integer_string(&raw);
        let grouped = config.group(&canonical);
        let display = format!("{} {}", config.currency_label, grouped);
        Self {
            input: raw.to_string(),
            canonical,
            grouped,
            display,
        }
    }
}

/// Normalization results for a batch of raw values.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub records: Vec<NormalizedRecord>,
    /// Records whose canonical amount is the `"0"` sentinel.
    pub zero_count: usize,
    /// Sum of all canonical amounts, saturating at `Decimal::MAX`.
    pub total: Decimal,
}

impl BatchReport {
    pub fn from_values<I>(values: I, config: &DisplayConfig) -> Self
    where
        I: IntoIterator,
        I::Item: Into<RawAmount>,
    {
        let records: Vec<NormalizedRecord> = values
            .into_iter()
            .map(|raw| NormalizedRecord::from_raw(raw, config))
            .collect();

        let zero_count = records.iter().filter(|r| r.canonical.is_zero()).count();

        let mut total = Decimal::ZERO;
        for record in &records {
            match record.canonical.to_decimal() {
                Some(amount) => {
                    total = total.checked_add(amount).unwrap_or(Decimal::MAX);
                }
                None => log::warn!(
                    "amount {} exceeds decimal range; excluded from total",
                    record.canonical
                ),
            }
        }

        log::debug!(
            "normalized {} values ({} zero), total {}",
            records.len(),
            zero_count,
            total
        );

        BatchReport {
            records,
            zero_count,
            total,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Share of records that collapsed to `"0"`, in percent.
    pub fn zero_percent(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.zero_count as f64 / self.records.len() as f64 * 100.0
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Normalization Report ===")?;
        writeln!(f, "Values:    {}", self.records.len())?;
        writeln!(
            f,
            "Zero:      {} ({:.1}%)",
            self.zero_count,
            self.zero_percent()
        )?;
        writeln!(
            f,
            "Total:     {}",
            DisplayConfig::default().format_currency(self.total.trunc())
        )?;

        writeln!(f, "\n{:<24} {:>20} {}", "INPUT", "CANONICAL", "DISPLAY")?;
        for record in &self.records {
            writeln!(
                f,
                "{:<24} {:>20} {}",
                format!("{:?}", record.input),
                record.canonical,
                record.display
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::CurrencyLabel;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_from_raw() {
        let record = NormalizedRecord::from_raw("Rp. 2.700.000,50", &DisplayConfig::default());
        assert_eq!(record.input, "Rp. 2.700.000,50");
        assert_eq!(record.canonical, "2700000");
        assert_eq!(record.grouped, "2.700.000");
        assert_eq!(record.display, "Rp. 2.700.000");
    }

    #[test]
    fn test_absent_record() {
        let record = NormalizedRecord::from_raw(RawAmount::Absent, &DisplayConfig::default());
        assert_eq!(record.input, "");
        assert_eq!(record.display, "Rp. 0");
    }

    #[test]
    fn test_report_totals() {
        let values = vec![
            RawAmount::from("1.000"),
            RawAmount::from("abc"),
            RawAmount::from(2500),
            RawAmount::Absent,
        ];
        let report = BatchReport::from_values(values, &DisplayConfig::default());

        assert_eq!(report.len(), 4);
        assert_eq!(report.zero_count, 2);
        assert_eq!(report.total, dec!(3500));
        assert!((report.zero_percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_uses_config() {
        let config = DisplayConfig {
            currency_label: CurrencyLabel::new("IDR"),
            group_separator: '\'',
        };
        assert!(config.validate().is_ok());
        let report = BatchReport::from_values(["1000000"], &config);
        assert_eq!(report.records[0].display, "IDR 1'000'000");
    }

    #[test]
    fn test_oversized_amount_excluded_from_total() {
        let huge = "9".repeat(40);
        let report = BatchReport::from_values([huge.as_str(), "5"], &DisplayConfig::default());
        assert_eq!(report.total, dec!(5));
        assert_eq!(report.records[0].canonical.as_str().len(), 40);
    }

    #[test]
    fn test_empty_report() {
        let report = BatchReport::from_values(Vec::<RawAmount>::new(), &DisplayConfig::default());
        assert!(report.is_empty());
        assert_eq!(report.zero_percent(), 0.0);
        assert!(format!("{}", report).contains("Rp. 0"));
    }
}
