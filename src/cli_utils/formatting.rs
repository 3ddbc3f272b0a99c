use colored::Colorize;

/// Format a table with columns and rows
pub fn format_table(headers: Vec<&str>, rows: Vec<Vec<String>>) {
    let col_widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let mut width = header.chars().count();
            for row in &rows {
                if let Some(cell) = row.get(i) {
                    width = width.max(cell.chars().count());
                }
            }
            width
        })
        .collect();

    // Print header
    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = col_widths[i]))
        .collect::<Vec<_>>()
        .join(" | ");

    println!("{}", header_line.bold());
    println!("{}", "-".repeat(header_line.chars().count()));

    // Print rows
    for row in rows {
        let row_line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = col_widths.get(i).copied().unwrap_or(20)))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("{}", row_line);
    }
}

/// Format data as JSON
pub fn format_json<T: serde::Serialize>(data: &T) -> String {
    match serde_json::to_string_pretty(data) {
        Ok(json) => json,
        Err(_) => "Unable to format as JSON".to_string(),
    }
}

/// Format a single record as key-value pairs
pub fn format_record(data: Vec<(&str, String)>) {
    let max_key_len = data.iter().map(|(k, _)| k.len()).max().unwrap_or(20);

    for (key, value) in data {
        let padded_key = format!("{:width$}", key, width = max_key_len);
        println!("  {}: {}", padded_key.bright_cyan(), value);
    }
}

/// Format a header
pub fn print_header(text: &str) {
    println!();
    println!("{}", text.bold().bright_cyan());
    println!("{}", "=".repeat(text.chars().count()));
    println!();
}

/// Format a section
pub fn print_section(text: &str) {
    println!();
    println!("{}", text.bold().bright_white());
    println!("{}", "-".repeat(text.chars().count()));
}

/// Percentage with one decimal place, e.g. `42.5%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Carbon intensity in gCO₂eq/kWh
pub fn format_intensity(value: f64) -> String {
    format!("{:.0} gCO₂eq/kWh", value)
}

/// Generation output in MW, no decimals
pub fn format_output(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.0}", v),
        None => "-".to_string(),
    }
}

/// Keeps the date part of an ISO-8601 timestamp
pub fn format_date(datetime: &str) -> String {
    datetime.get(..10).unwrap_or(datetime).to_string()
}
