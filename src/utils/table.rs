//! Table rendering for CLI outputs. Column widths are display columns,
//! so double-width Korean headers and colored cells line up.

use crate::utils::formatting::{display_width, pad_display};

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    /// Size a column to its header and the widest cell it will hold.
    pub fn fit<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> Self {
        let width = cells
            .map(display_width)
            .chain(std::iter::once(display_width(header)))
            .max()
            .unwrap_or(0);
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

        for col in &self.columns {
            out.push_str(&pad_display(&col.header, col.width));
            out.push_str("  ");
        }
        out.push('\n');

        let rule: usize = self.columns.iter().map(|c| c.width + 2).sum();
        out.push_str(&"-".repeat(rule));
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&pad_display(&row[i], col.width));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}
