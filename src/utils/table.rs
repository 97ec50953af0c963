//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.width());
                }
            }
        }
        widths
    }

    /// Renders the table with the first column left-aligned and the
    /// remaining (numeric) columns right-aligned.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            push_cell(&mut out, h, widths[i], i == 0);
        }
        out.push('\n');

        for (i, w) in widths.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(&"-".repeat(*w));
        }
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                push_cell(&mut out, cell, widths[i], i == 0);
            }
            out.push('\n');
        }

        out
    }
}

fn push_cell(out: &mut String, text: &str, width: usize, left: bool) {
    let pad = width.saturating_sub(text.width());
    if !out.ends_with('\n') && !out.is_empty() {
        out.push_str("  ");
    }
    if left {
        out.push_str(text);
        out.push_str(&" ".repeat(pad));
    } else {
        out.push_str(&" ".repeat(pad));
        out.push_str(text);
    }
}
