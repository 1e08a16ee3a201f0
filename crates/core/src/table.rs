//! Plain ASCII tables.
//!
//! ```text
//! +title---+-------+
//! | name   | value |
//! +--------+-------+
//! | key    | 1     |
//! +--------+-------+
//! ```
//!
//! Cells may span several lines and may contain ANSI colour sequences; widths
//! are measured in terminal columns.

use std::fmt::{Display, Formatter};

use crate::display::visible_width;

#[derive(Debug, Clone, Default)]
pub struct AsciiTable {
    rows: Vec<Vec<String>>,
    title: Option<String>,
    heading_border: bool,
}

impl AsciiTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            title: None,
            heading_border: true,
        }
    }

    /// Two-column table of key/value pairs, in the given order.
    pub fn from_pairs<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::new(
            entries
                .into_iter()
                .map(|(k, v)| vec![k.into(), v.into()])
                .collect(),
        )
    }

    /// Title embedded in the top border. Dropped if it doesn't fit.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = if title.is_empty() { None } else { Some(title) };
        self
    }

    /// Whether a border separates the first row from the rest.
    #[must_use]
    pub fn with_heading_border(mut self, heading_border: bool) -> Self {
        self.heading_border = heading_border;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![0; columns];

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let widest = cell.lines().map(visible_width).max().unwrap_or(0);
                widths[i] = widths[i].max(widest);
            }
        }

        widths
    }

    fn border(widths: &[usize]) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    }

    fn top_border(&self, widths: &[usize]) -> String {
        let border = Self::border(widths);

        match &self.title {
            Some(title) if visible_width(title) + 2 <= visible_width(&border) => {
                let rest: String = border.chars().skip(visible_width(title) + 1).collect();
                format!("+{title}{rest}")
            }
            _ => border,
        }
    }

    fn render_row(row: &[String], widths: &[usize]) -> Vec<String> {
        let cell_lines: Vec<Vec<&str>> = widths
            .iter()
            .enumerate()
            .map(|(i, _)| match row.get(i) {
                Some(cell) if !cell.is_empty() => cell.lines().collect(),
                _ => vec![""],
            })
            .collect();
        let height = cell_lines.iter().map(Vec::len).max().unwrap_or(1);

        (0..height)
            .map(|line_index| {
                let mut line = String::from("|");
                for (lines, width) in cell_lines.iter().zip(widths) {
                    let text = lines.get(line_index).copied().unwrap_or("");
                    let padding = width - visible_width(text);
                    line.push(' ');
                    line.push_str(text);
                    line.push_str(&" ".repeat(padding));
                    line.push_str(" |");
                }
                line
            })
            .collect()
    }

    /// Renders the table without a trailing newline.
    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        let widths = self.column_widths();
        let border = Self::border(&widths);
        let mut lines = vec![self.top_border(&widths)];

        for (i, row) in self.rows.iter().enumerate() {
            lines.extend(Self::render_row(row, &widths));
            if i == 0 && self.heading_border && self.rows.len() > 1 {
                lines.push(border.clone());
            }
        }
        lines.push(border);

        lines.join("\n")
    }
}

impl Display for AsciiTable {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.render())
    }
}
