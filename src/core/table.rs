//! Table state and the cell-by-cell insertion protocol
//!
//! Values are appended in row-major order. The first value allocates a row
//! of `N` empty cells (`N` = number of columns at that moment); the row is
//! sealed as soon as its last column is filled, or earlier through
//! [`TablePrinter::end_row`], which leaves the remaining cells empty.

use std::io::{self, Stdout, Write};

use tracing::{debug, trace, warn};

use super::cell::{Cell, CellValue};
use super::schema::{Alignment, Column, Title};
use crate::config::{TableOptions, DEFAULT_PRECISION, DEFAULT_SEPARATOR};
use crate::utils::error::{TableError, TableResult};

/// Corner glyph joining horizontal rules
pub const CORNER: &str = "+";
/// Glyph repeated along horizontal rules
pub const HORIZONTAL_BORDER: &str = "-";
/// Left frame of every text line
pub const LEFT_VERTICAL_BORDER: &str = "| ";
/// Right frame of every text line
pub const RIGHT_VERTICAL_BORDER: &str = " |";

/// One logical row: exactly one cell per column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    fn new(columns: usize) -> Self {
        Row {
            cells: vec![Cell::default(); columns],
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Physical lines needed to draw this row
    pub fn height(&self) -> usize {
        self.cells.iter().map(Cell::height).max().unwrap_or(0).max(1)
    }
}

/// A bordered text table written to `W` (standard output by default)
///
/// # Example
///
/// ```rust
/// use tabprint::{Alignment, TablePrinter};
///
/// let mut table = TablePrinter::with_output("Isotopes", 8, Vec::<u8>::new(), " | ");
/// table.add_column("Isotope", Alignment::Left, 0).unwrap();
/// table.add_column("Mass", Alignment::Right, 0).unwrap();
/// table.push("D").unwrap().push(2.014101778f64).unwrap();
/// table.print().unwrap();
///
/// let text = String::from_utf8(table.into_output()).unwrap();
/// assert!(text.contains("| D       | 2.01410178e+00 |"));
/// ```
#[derive(Debug)]
pub struct TablePrinter<W = Stdout> {
    pub(crate) title: Title,
    pub(crate) columns: Vec<Column>,
    pub(crate) rows: Vec<Row>,
    /// Column of the next insertion; 0 means no row is open
    pub(crate) column: usize,
    pub(crate) precision: usize,
    pub(crate) separator: String,
    output: W,
}

impl TablePrinter<Stdout> {
    /// Table with the given title, printed to standard output
    pub fn new(title: &str) -> Self {
        TablePrinter::with_output(title, DEFAULT_PRECISION, io::stdout(), DEFAULT_SEPARATOR)
    }
}

impl Default for TablePrinter<Stdout> {
    fn default() -> Self {
        TablePrinter::new("")
    }
}

impl<W> TablePrinter<W> {
    /// Table with an explicit precision, output sink and column separator
    pub fn with_output(title: &str, precision: usize, output: W, separator: &str) -> Self {
        TablePrinter {
            title: Title::new(title, Alignment::Center),
            columns: Vec::new(),
            rows: Vec::new(),
            column: 0,
            precision,
            separator: separator.to_string(),
            output,
        }
    }

    pub fn with_options(options: TableOptions, output: W) -> Self {
        let mut table = TablePrinter::with_output("", options.precision, output, &options.separator);
        table.set_title(&options.title, options.title_alignment);
        table
    }

    /// Replace the column separator
    pub fn set_separator(&mut self, separator: &str) -> &mut Self {
        self.separator = separator.to_string();
        self
    }

    /// Replace the title, splitting it on line breaks
    pub fn set_title(&mut self, text: &str, alignment: Alignment) -> &mut Self {
        self.title = Title::new(text, alignment);
        debug!(
            lines = self.title.lines().len(),
            alignment = %alignment,
            "title set"
        );
        self
    }

    /// Append one column. `fixed_width` is a minimum width, 0 for auto sizing.
    ///
    /// Columns can only be added before the first value is inserted.
    pub fn add_column(
        &mut self,
        header: &str,
        alignment: Alignment,
        fixed_width: usize,
    ) -> TableResult<&mut Self> {
        if !self.rows.is_empty() {
            warn!(header, "column added after insertion started; rejected");
            return Err(TableError::frozen(header));
        }

        self.columns.push(Column::new(header, alignment, fixed_width));
        debug!(
            index = self.columns.len() - 1,
            alignment = %alignment,
            fixed_width,
            "column added"
        );
        Ok(self)
    }

    /// Append several columns sharing one fixed width
    pub fn add_columns<I, S>(&mut self, headers: I, fixed_width: usize) -> TableResult<&mut Self>
    where
        I: IntoIterator<Item = (S, Alignment)>,
        S: AsRef<str>,
    {
        for (header, alignment) in headers {
            self.add_column(header.as_ref(), alignment, fixed_width)?;
        }
        Ok(self)
    }

    /// Insert one value at the cursor and advance it
    pub fn push<V: CellValue>(&mut self, value: V) -> TableResult<&mut Self> {
        let columns = self.columns.len();
        if columns == 0 {
            warn!("value inserted before any column was configured");
            return Err(TableError::NoColumns);
        }

        if self.column == 0 {
            self.rows.push(Row::new(columns));
        }

        let cell = Cell::format(&value, self.precision);
        let row_index = self.rows.len() - 1;
        let column = self.column;
        trace!(
            row = row_index,
            column,
            lines = cell.height(),
            "cell inserted"
        );

        let slot = self
            .rows
            .get_mut(row_index)
            .and_then(|row| row.cells.get_mut(column))
            .ok_or_else(|| TableError::out_of_bounds(row_index, column, row_index + 1, columns))?;
        *slot = cell;

        self.column = column + 1;
        if self.column == columns {
            self.column = 0;
            debug!(row = row_index, "row complete");
        }
        Ok(self)
    }

    /// Terminate the open row, leaving its remaining cells empty.
    ///
    /// Does nothing when no row is open, so consecutive breaks (or a break
    /// right after a full row) never produce blank rows.
    pub fn end_row(&mut self) -> &mut Self {
        if self.column > 0 {
            debug!(
                row = self.rows.len() - 1,
                padded = self.columns.len() - self.column,
                "row ended early"
            );
            self.column = 0;
        } else {
            trace!("row break on a row boundary ignored");
        }
        self
    }

    /// Insert every value of `values`, then end the row
    pub fn push_row<I>(&mut self, values: I) -> TableResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: CellValue,
    {
        for value in values {
            self.push(value)?;
        }
        Ok(self.end_row())
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// `(row, column)` position the next value will be written to
    pub fn cursor(&self) -> (usize, usize) {
        if self.column == 0 {
            (self.rows.len(), 0)
        } else {
            (self.rows.len() - 1, self.column)
        }
    }

    /// Stored cell at `(row, column)`
    pub fn cell(&self, row: usize, column: usize) -> TableResult<&Cell> {
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(column))
            .ok_or_else(|| TableError::out_of_bounds(row, column, self.rows.len(), self.columns.len()))
    }

    /// Output sink, e.g. to drain a buffer between two prints
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the table and hand back its output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<W: Write> TablePrinter<W> {
    /// Render the table and write it to the output sink
    pub fn print(&mut self) -> TableResult<()> {
        let text = self.render();
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        debug!(rows = self.rows.len(), bytes = text.len(), "table printed");
        Ok(())
    }
}
