//! Random money-like strings for benchmarks and tests.

use crate::batch::report::BatchReport;
use crate::format::group_thousands;
use rand::Rng;

/// Configuration for generating sample inputs.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    /// Number of strings to generate.
    pub count: usize,
    /// Minimum integer amount.
    pub min_amount: u64,
    /// Maximum integer amount (exclusive).
    pub max_amount: u64,
    /// Fraction of samples that get a currency prefix, in `[0, 1]`.
    pub with_prefix_ratio: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: 100,
            min_amount: 1_000,
            max_amount: 10_000_000_000,
            with_prefix_ratio: 0.5,
        }
    }
}

/// Render `amount` in one of several common styles.
fn render<R: Rng>(rng: &mut R, amount: u64) -> String {
    let digits = amount.to_string();
    let cents = rng.gen_range(0..100u32);
    match rng.gen_range(0..5u8) {
        0 => digits,
        1 => group_thousands(&digits, '.'),
        2 => format!("{},{:02}", group_thousands(&digits, '.'), cents),
        3 => format!("{}.{:02}", digits, cents),
        _ => format!("{},{}", digits, cents % 10),
    }
}

/// Generate random money-like strings in mixed notations.
///
/// Every sample's integer part normalizes back to the amount it was
/// rendered from.
pub fn generate_samples(config: &SampleConfig) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let max = config.max_amount.max(config.min_amount.saturating_add(1));
    let ratio = config.with_prefix_ratio.max(0.0).min(1.0);

    (0..config.count)
        .map(|_| {
            let amount = rng.gen_range(config.min_amount..max);
            let body = render(&mut rng, amount);
            if rng.gen_bool(ratio) {
                let prefix = ["Rp ", "Rp. ", "rp", "RP. "][rng.gen_range(0..4)];
                format!("{}{}", prefix, body)
            } else {
                body
            }
        })
        .collect()
}

impl BatchReport {
    /// Report over freshly generated samples.
    pub fn from_samples(config: &SampleConfig) -> Self {
        let samples = generate_samples(config);
        BatchReport::from_values(samples, &Default::default())
    }
}
