//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// A command result that can be rendered in every output format.
pub trait Report: Serialize {
    /// Section title printed above the table.
    fn title(&self) -> &'static str;

    /// Rows for table output.
    fn rows(&self) -> Vec<KeyValue>;

    /// The single value printed by `--format minimal`.
    fn headline(&self) -> String;
}

/// Formats and prints a report based on the specified format.
pub fn print_report<R: Report>(report: &R, format: OutputFormat, quiet: bool) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header(report.title());
            }
            print_table(&report.rows());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.serialize(report)?;
            wtr.flush()?;
        }
        OutputFormat::Minimal => println!("{}", report.headline()),
    }
    Ok(())
}

/// Prints rows as a formatted table.
fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair with a fixed number of decimals.
    pub fn from_f64(key: impl Into<String>, value: f64, precision: usize) -> Self {
        Self::new(key, format!("{value:.precision$}"))
    }

    /// Creates a key-value pair formatted as percentage.
    pub fn from_percent(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format!("{:.6}%", value * 100.0))
    }

    /// Creates a key-value pair formatted as basis points.
    pub fn from_bps(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format!("{:.4} bps", value * 10_000.0))
    }

    /// Creates a key-value pair in scientific notation.
    pub fn from_sci(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format!("{value:.3e}"))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_formatting() {
        assert_eq!(KeyValue::from_percent("Spread", 0.0125).value, "1.250000%");
        assert_eq!(KeyValue::from_bps("Spread", 0.0125).value, "125.0000 bps");
        assert_eq!(KeyValue::from_f64("PV", 99.123_456_78, 4).value, "99.1235");
        assert_eq!(KeyValue::from_sci("Residual", 0.000_012_5).value, "1.250e-5");
    }
}
