//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Fixed-point rendering for hour and percent values.
pub fn fmt_number(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Horizontal rule used between report sections.
pub fn section_rule(sep: &str, width: usize) -> String {
    let ch = sep.chars().next().unwrap_or('-');
    ch.to_string().repeat(width)
}
