//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
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

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render header, dash separator and rows with columns sized to the
    /// widest cell. An empty table renders as an empty string.
    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.width());
                }
            }
        }

        let mut out = String::new();

        // Header
        out.push_str(&join_padded(&self.headers, &widths));
        out.push('\n');

        // Separator
        let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&join_padded(&dashes, &widths));
        out.push('\n');

        // Rows
        for row in &self.rows {
            out.push_str(&join_padded(row, &widths));
            out.push('\n');
        }

        out
    }
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w.saturating_sub(cell.width());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    padded.join(" ").trim_end().to_string()
}
