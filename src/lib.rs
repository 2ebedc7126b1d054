//! # tabprint
//!
//! Fixed-width, bordered text tables for terminals and streams.
//!
//! ## Features
//!
//! - **Cell-by-cell insertion**: push strings, integers and floats in
//!   row-major order; rows wrap automatically after the last column
//! - **Multiline content**: titles, headers and cells may contain line breaks
//! - **Compact floats**: scientific notation with trailing zeros trimmed
//! - **Width aware**: wide and multi-byte characters keep columns aligned
//! - **Re-printable**: layout is recomputed on every print
//!
//! ## Usage Example
//!
//! ```rust
//! use tabprint::{Alignment, TablePrinter};
//!
//! let mut table = TablePrinter::with_output("Elements", 8, Vec::<u8>::new(), " | ");
//! table.add_column("Z", Alignment::Right, 0)?;
//! table.add_column("Symbol", Alignment::Left, 0)?;
//! table.add_column("Mass", Alignment::Left, 0)?;
//!
//! table.push(1)?.push("H")?.push(1.008)?;
//! table.push(26)?.push("Fe")?.end_row();
//!
//! let text = table.render();
//! assert!(text.contains("|  1 | H      | 1.008e+00 |"));
//! assert!(text.contains("| 26 | Fe     |           |"));
//! # Ok::<(), tabprint::TableError>(())
//! ```

/// Table construction options
pub mod config;

/// Core table engine
pub mod core;

/// Utility modules
pub mod utils;

// Re-export the table engine
pub use core::{
    Alignment, Cell, CellValue, Column, Layout, Row, TablePrinter, Title, CORNER,
    HORIZONTAL_BORDER, LEFT_VERTICAL_BORDER, RIGHT_VERTICAL_BORDER,
};

pub use config::{TableOptions, DEFAULT_PRECISION, DEFAULT_SEPARATOR};

// Re-export utilities
pub use utils::error::{TableError, TableResult};
pub use utils::text;

/// Canonical cell text of a value at the given floating point precision
///
/// # Arguments
/// * `value` - Any [`CellValue`]
/// * `precision` - Fractional mantissa digits for floating point values
pub fn format_value<V: CellValue>(value: V, precision: usize) -> String {
    value.format_cell(precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value("abc", 8), "abc");
        assert_eq!(format_value(12u32, 8), "12");
        assert_eq!(format_value(0.25, 8), "2.5e-01");
        assert_eq!(format_value(&1234.5678f64, 2), "1.23e+03");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_PRECISION, 8);
        assert_eq!(DEFAULT_SEPARATOR, " | ");
        let table = TablePrinter::default();
        assert_eq!(table.precision(), 8);
        assert_eq!(table.separator(), " | ");
        assert!(table.title().is_empty());
    }
}
