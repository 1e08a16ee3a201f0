//! Side-by-side production/development dependency grid.
//!
//! Rows are paired by position, not by name: row `i` holds the `i`-th
//! production and the `i`-th development dependency, and the shorter list is
//! padded with empty cells.

use crossterm::style::Color;
use itertools::{EitherOrBoth, Itertools};

use crate::display::paint;
use crate::manifest::DependencyEntry;
use crate::table::AsciiTable;

pub const PROD_LABEL: &str = "prod";
pub const DEV_LABEL: &str = "dev";

const PROD_COLOR: Color = Color::Green;
const DEV_COLOR: Color = Color::Blue;

/// Which dependency lists ended up in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLayout {
    /// `[prodName, prodVersion, devName, devVersion]`
    Paired,
    ProductionOnly,
    DevelopmentOnly,
}

/// A labelled header row followed by data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGrid {
    pub layout: GridLayout,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn entry_cells(entry: &DependencyEntry) -> [String; 2] {
    [entry.name.clone(), entry.constraint.clone()]
}

fn single_section(
    layout: GridLayout,
    label: &str,
    entries: &[DependencyEntry],
) -> DependencyGrid {
    DependencyGrid {
        layout,
        header: vec![label.to_string(), String::new()],
        rows: entries.iter().map(|e| entry_cells(e).to_vec()).collect(),
    }
}

/// Builds the dependency grid, or `None` when both lists are empty.
pub fn pair_dependency_columns(
    prod: &[DependencyEntry],
    dev: &[DependencyEntry],
) -> Option<DependencyGrid> {
    match (prod.is_empty(), dev.is_empty()) {
        (true, true) => None,
        (false, true) => Some(single_section(GridLayout::ProductionOnly, PROD_LABEL, prod)),
        (true, false) => Some(single_section(GridLayout::DevelopmentOnly, DEV_LABEL, dev)),
        (false, false) => {
            let rows: Vec<Vec<String>> = prod
                .iter()
                .zip_longest(dev)
                .map(|pair| {
                    let (left, right) = match pair {
                        EitherOrBoth::Both(p, d) => (entry_cells(p), entry_cells(d)),
                        EitherOrBoth::Left(p) => (entry_cells(p), Default::default()),
                        EitherOrBoth::Right(d) => (Default::default(), entry_cells(d)),
                    };
                    left.into_iter().chain(right).collect::<Vec<String>>()
                })
                .collect();

            Some(DependencyGrid {
                layout: GridLayout::Paired,
                header: vec![
                    PROD_LABEL.to_string(),
                    String::new(),
                    DEV_LABEL.to_string(),
                    String::new(),
                ],
                rows,
            })
        }
    }
}

impl DependencyGrid {
    fn column_color(&self, column: usize) -> Color {
        match self.layout {
            GridLayout::Paired if column >= 2 => DEV_COLOR,
            GridLayout::DevelopmentOnly => DEV_COLOR,
            _ => PROD_COLOR,
        }
    }

    /// Table with coloured section labels and package names.
    pub fn to_table(&self) -> AsciiTable {
        let color_cell = |(column, cell): (usize, &String)| {
            if column % 2 == 0 && !cell.is_empty() {
                paint(cell, self.column_color(column))
            } else {
                cell.clone()
            }
        };

        let mut rows: Vec<Vec<String>> =
            vec![self.header.iter().enumerate().map(color_cell).collect()];
        rows.extend(
            self.rows
                .iter()
                .map(|row| row.iter().enumerate().map(color_cell).collect()),
        );

        AsciiTable::new(rows)
    }
}
