use std::{
    fmt::{self, Write as _},
    io,
};

use crate::{
    TableError,
    glyph::{HORIZONTAL, Rule, VERTICAL},
};

/// A header row plus zero or more data rows, all with the same column count.
///
/// Every cell is left-aligned inside a column as wide as its longest cell
/// (counted in chars), with one space of padding on each side. Adjacent rows
/// are separated by a horizontal rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given header and no rows.
    #[must_use]
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnCount`] if the row's cell count differs
    /// from the header's. The table is left unchanged.
    pub fn push_row<I, S>(&mut self, row: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        if row.len() != self.header.len() {
            return Err(TableError::ColumnCount {
                row: self.rows.len(),
                expected: self.header.len(),
                found: row.len(),
            });
        }

        self.rows.push(row);
        Ok(())
    }

    /// Appends every row and returns the table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnCount`] at the first row whose cell count
    /// differs from the header's.
    pub fn with_rows<R, I, S>(mut self, rows: R) -> Result<Self, TableError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self.push_row(row)?;
        }

        Ok(self)
    }

    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the width of each column in chars, header included.
    #[must_use]
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|cell| cell.chars().count()).collect();

        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        widths
    }

    /// Writes the rendered table to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the writer.
    pub fn render<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Writes the rendered table to standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if standard output cannot be written.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render(&mut out)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        write_rule(f, &widths, Rule::Top)?;
        write_cells(f, &self.header, &widths)?;
        for row in &self.rows {
            write_rule(f, &widths, Rule::Separator)?;
            write_cells(f, row, &widths)?;
        }
        write_rule(f, &widths, Rule::Bottom)
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize], rule: Rule) -> fmt::Result {
    let (left, joint, right) = rule.glyphs();

    f.write_char(left)?;
    for (i, &width) in widths.iter().enumerate() {
        if i > 0 {
            f.write_char(joint)?;
        }
        for _ in 0..width + 2 {
            f.write_char(HORIZONTAL)?;
        }
    }
    f.write_char(right)?;
    f.write_char('\n')
}

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    f.write_char(VERTICAL)?;
    for (cell, &width) in cells.iter().zip(widths) {
        write!(f, " {cell:<width$} ")?;
        f.write_char(VERTICAL)?;
    }
    f.write_char('\n')
}
