//! Normalizing and formatting amounts as they arrive from forms and APIs.

use rupiah_normalizer::batch::BatchReport;
use rupiah_normalizer::prelude::*;
use rust_decimal_macros::dec;

fn main() {
    println!("━━━ Free-form input ━━━\n");

    let inputs = [
        "Rp. 2.700.000",
        "2.700.000,50",
        "2700000.00",
        "2700000,5",
        "rp 1500",
        "1.50",
        "1.500",
        "abc",
        "   ",
    ];

    for raw in inputs {
        println!(
            "  {:<18} → {:>10}  {}",
            format!("{:?}", raw),
            normalize_to_integer_string(raw),
            format_rupiah_no_decimal(raw)
        );
    }
    println!();

    println!("━━━ Typed input ━━━\n");
    println!("  i64      {}", format_thousands_id(2_700_000i64));
    println!("  f64      {}", format_thousands_id(2_700_000.75f64));
    println!("  Decimal  {}", format_thousands_id(dec!(1234567.891)));
    println!("  None     {}", format_thousands_id(None::<&str>));
    println!();

    println!("━━━ Batch ━━━\n");
    let report = BatchReport::from_values(inputs, &DisplayConfig::default());
    println!("{}", report);
}
