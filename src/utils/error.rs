//! Error handling for tabprint
//!
//! This module provides a unified error type and result type for table
//! configuration, insertion and output.

use std::io;

use thiserror::Error;

/// Table error type
#[derive(Debug, Error)]
pub enum TableError {
    /// A value was inserted before any column was configured
    #[error("Configuration error: at least one column must be added before inserting values")]
    NoColumns,
    /// A column was added once the row shape was already fixed
    #[error("Configuration error: cannot add column '{header}' after values were inserted")]
    ColumnsFrozen { header: String },
    /// Cell lookup outside of the stored grid
    #[error("Cell ({row}, {column}) is out of bounds for a table of {rows} rows and {columns} columns")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    /// Writing to the output sink failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Option file could not be read
    #[error("Invalid options: {message}")]
    Config { message: String },
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn config(message: impl Into<String>) -> Self {
        TableError::Config {
            message: message.into(),
        }
    }

    pub fn frozen(header: impl Into<String>) -> Self {
        TableError::ColumnsFrozen {
            header: header.into(),
        }
    }

    pub fn out_of_bounds(row: usize, column: usize, rows: usize, columns: usize) -> Self {
        TableError::OutOfBounds {
            row,
            column,
            rows,
            columns,
        }
    }

    /// Whether the error comes from misusing the configuration protocol
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TableError::NoColumns | TableError::ColumnsFrozen { .. } | TableError::Config { .. }
        )
    }
}
