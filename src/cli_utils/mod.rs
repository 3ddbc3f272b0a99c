// Shared CLI utilities for the reporting binaries
pub mod formatting;

pub use formatting::{format_intensity, format_json, format_percent, format_record, format_table};

/// Print an info message
pub fn print_info(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("ℹ {}", message).bright_cyan());
}

/// Print an error message
pub fn print_error(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("✗ {}", message).red());
}
