//! One-shot conversion from the command line
//!
//! Usage:
//!   convert <Category> <from_unit> <to_unit> <value>
//!   convert --list

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use conversion::tools::conversion::{convert_value, list_categories};

const USAGE: &str = "Usage: convert <Category> <from_unit> <to_unit> <value>\n       convert --list";

/// What a run writes and how it exits
#[derive(Debug, PartialEq, Eq)]
struct Outcome {
    stdout: String,
    stderr: String,
    code: u8,
}

impl Outcome {
    fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), code: 0 }
    }
}

fn run(args: &[String]) -> Outcome {
    match args {
        [flag] if flag == "--list" => {
            let stdout = list_categories()
                .categories
                .iter()
                .map(|c| format!("{}: {}\n", c.label, c.units.join(", ")))
                .collect();
            Outcome::success(stdout)
        }
        [category, from, to, value] => {
            // Unsupported categories print a blank line, like the empty result label
            let converted = convert_value(category, from, to, value).converted_value;
            Outcome::success(format!("{}\n", converted))
        }
        _ => Outcome {
            stdout: String::new(),
            stderr: format!("{}\n", USAGE),
            code: 2,
        },
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let outcome = run(&args);

    print!("{}", outcome.stdout);
    eprint!("{}", outcome.stderr);
    ExitCode::from(outcome.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_list_prints_categories_in_order() {
        let outcome = run(&args(&["--list"]));
        assert_eq!(outcome.code, 0);
        let lines: Vec<&str> = outcome.stdout.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Temperature: celsius, fahrenheit, kelvin");
        assert_eq!(lines[1], "Length: meters, centimeters, feet, miles, yards");
        assert_eq!(lines[3], "Volume: cups, gallons, liters, milliliters, pints");
    }

    #[test]
    fn test_temperature_conversion() {
        let outcome = run(&args(&["Temperature", "celsius", "fahrenheit", "100"]));
        assert_eq!(outcome, Outcome::success("212.0\n".to_string()));
    }

    #[test]
    fn test_unsupported_category_prints_blank_line() {
        let outcome = run(&args(&["Length", "meters", "feet", "10"]));
        assert_eq!(outcome.code, 0);
        assert_eq!(outcome.stdout, "\n");
        assert!(outcome.stderr.is_empty());
    }

    #[test]
    fn test_wrong_argument_count_prints_usage() {
        for bad in [&[][..], &["Temperature", "celsius"][..], &["--list", "extra"][..]] {
            let outcome = run(&args(bad));
            assert_eq!(outcome.code, 2);
            assert!(outcome.stdout.is_empty());
            assert!(outcome.stderr.starts_with("Usage: convert"));
        }
    }
}
