//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .map(|col| pad(&col.header, col.width))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        let rule: Vec<String> = self.columns.iter().map(|col| "─".repeat(col.width)).collect();
        out.push_str(&rule.join(" "));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| pad(row.get(i).map_or("", String::as_str), col.width))
                .collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }

        out
    }
}

/// Pads on display width, ignoring ANSI escape sequences.
fn pad(s: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(strip_ansi(s).as_str());
    let fill = width.saturating_sub(visible);
    format!("{s}{}", " ".repeat(fill))
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for n in chars.by_ref() {
                if n.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
