//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by every report's `format_terminal`.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

/// Width used for report headers and separators
pub const REPORT_WIDTH: usize = 72;

/// Width of the inline bar charts
pub const BAR_WIDTH: usize = 24;

/// Wrap text in the color of its bucket (green positive, red negative)
pub fn format_toned(text: &str, positive: bool) -> String {
    if positive {
        format!("\x1b[32m{}\x1b[0m", text)
    } else {
        format!("\x1b[31m{}\x1b[0m", text)
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Share of `part` in `whole`, in percent
pub fn percentage_of(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Title block used at the top of every report
pub fn report_title(title: &str) -> String {
    format!(
        "{}\n{}\n{}\n",
        double_separator(REPORT_WIDTH),
        format_header(title, REPORT_WIDTH),
        double_separator(REPORT_WIDTH)
    )
}

/// Render rows as a table; every column after the first is right-aligned
pub fn render_table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.modify(Columns::new(1..), Alignment::right());
    table.to_string()
}
