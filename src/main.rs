//! rupiah-normalizer CLI
//!
//! Normalize and format free-form monetary amounts from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Canonical integer strings
//! rupiah-normalizer normalize "Rp. 2.700.000,50" "1.500"
//!
//! # Currency display
//! rupiah-normalizer format 2700000
//!
//! # Normalize a JSON file of values
//! rupiah-normalizer batch --input amounts.json --format json
//!
//! # Generate sample inputs
//! rupiah-normalizer generate --count 50
//! ```

use rupiah_normalizer::batch::{
    generate_samples, load_values, BatchReport, SampleConfig,
};
use rupiah_normalizer::core::currency::DisplayConfig;
use rupiah_normalizer::normalize::normalize_to_integer_string;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"rupiah-normalizer — normalize and format ambiguous monetary amounts

USAGE:
    rupiah-normalizer <COMMAND> [OPTIONS]

COMMANDS:
    normalize   Print the canonical integer string of each value
    format      Print each value as a grouped rupiah amount
    batch       Normalize a JSON file of values
    generate    Generate random sample amounts (for testing)
    help        Show this message

OPTIONS (format):
    --plain             Group digits only, without the currency label
    --config <FILE>     JSON display config (currency_label, group_separator)

OPTIONS (batch):
    --input <FILE>      JSON array of values, or {{ "values": [...] }}
    --format <FORMAT>   Output format: text (default) or json
    --config <FILE>     JSON display config

OPTIONS (generate):
    --count <N>         Number of samples (default: 100)
    --output <FILE>     Write to file instead of stdout

ENVIRONMENT:
    RUST_LOG            Log level (e.g. debug, trace)

EXAMPLES:
    rupiah-normalizer normalize "Rp. 2.700.000,50"
    rupiah-normalizer format 2700000 "1.500,25"
    rupiah-normalizer format --plain 2700000
    rupiah-normalizer batch --input amounts.json --format json
    rupiah-normalizer generate --count 20 --output samples.json"#
    );
}

fn load_config(path: &str) -> DisplayConfig {
    DisplayConfig::load(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    })
}

fn option_value(args: &[String], i: usize, flag: &str, what: &str) -> String {
    args.get(i).cloned().unwrap_or_else(|| {
        eprintln!("{} requires {}", flag, what);
        process::exit(1);
    })
}

fn cmd_normalize(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: normalize requires at least one value");
        process::exit(1);
    }
    for value in args {
        println!("{}", normalize_to_integer_string(value));
    }
}

/// Parsed arguments of the `format` command.
#[derive(Debug, PartialEq)]
struct FormatArgs {
    plain: bool,
    config_path: Option<String>,
    values: Vec<String>,
}

/// Anything not starting with `--` is a value, so `-5` is formatted.
fn parse_format_args(args: &[String]) -> Result<FormatArgs, String> {
    let mut parsed = FormatArgs {
        plain: false,
        config_path: None,
        values: Vec::new(),
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--plain" => parsed.plain = true,
            "--config" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| "--config requires a file path".to_string())?;
                parsed.config_path = Some(path.clone());
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option: {}", flag));
            }
            value => parsed.values.push(value.to_string()),
        }
        i += 1;
    }

    if parsed.values.is_empty() {
        return Err("Error: format requires at least one value".to_string());
    }
    Ok(parsed)
}

fn cmd_format(args: &[String]) {
    let parsed = parse_format_args(args).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });
    let config = parsed
        .config_path
        .as_deref()
        .map_or_else(DisplayConfig::default, load_config);

    for value in &parsed.values {
        if parsed.plain {
            println!("{}", config.format_grouped(value));
        } else {
            println!("{}", config.format_currency(value));
        }
    }
}

fn cmd_batch(args: &[String]) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut config = DisplayConfig::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(option_value(args, i, "--input", "a file path"));
            }
            "--format" => {
                i += 1;
                format = option_value(args, i, "--format", "'text' or 'json'");
            }
            "--config" => {
                i += 1;
                config = load_config(&option_value(args, i, "--config", "a file path"));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let values = load_values(&path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Expected format:");
        eprintln!(r#"["Rp. 2.700.000", "1.500,25", 42000, null]"#);
        process::exit(1);
    });

    let report = BatchReport::from_values(values, &config);

    if format == "json" {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                process::exit(1);
            }
        }
    } else {
        print!("{}", report);
    }
}

fn cmd_generate(args: &[String]) {
    let mut count = 100usize;
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--count" => {
                i += 1;
                count = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--count requires a number");
                        process::exit(1);
                    });
            }
            "--output" => {
                i += 1;
                output_path = Some(option_value(args, i, "--output", "a file path"));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = SampleConfig {
        count,
        ..Default::default()
    };
    let samples = generate_samples(&config);

    let json = serde_json::to_string_pretty(&samples).unwrap_or_else(|e| {
        eprintln!("Error serializing samples: {}", e);
        process::exit(1);
    });

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Generated {} samples → {}", samples.len(), path);
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "normalize" => cmd_normalize(rest),
        "format" => cmd_format(rest),
        "batch" => cmd_batch(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
