//! Table construction options
//!
//! [`TableOptions`] gathers everything a printer needs before the first
//! column is added. With the `config` feature the options can also be
//! loaded from a TOML document:
//!
//! ```toml
//! title = "Isotopes"
//! title_alignment = "left"
//! precision = 4
//! separator = " : "
//! ```

use crate::core::schema::Alignment;
#[cfg(feature = "config")]
use crate::utils::error::{TableError, TableResult};

/// Default number of fractional mantissa digits for floating point cells
pub const DEFAULT_PRECISION: usize = 8;

/// Default pattern written between two columns
pub const DEFAULT_SEPARATOR: &str = " | ";

/// Options used to build a [`TablePrinter`](crate::TablePrinter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct TableOptions {
    /// Title text, may contain line breaks
    /// Default: empty (no title block)
    pub title: String,

    /// Alignment of every title line
    /// Default: center
    pub title_alignment: Alignment,

    /// Digits after the decimal point for floating point values
    /// Default: 8
    pub precision: usize,

    /// Pattern placed between columns
    /// Default: " | "
    pub separator: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_alignment: Alignment::Center,
            precision: DEFAULT_PRECISION,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl TableOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrow tables: single space separator, short mantissas
    pub fn compact() -> Self {
        Self {
            precision: 4,
            separator: " ".to_string(),
            ..Self::default()
        }
    }

    /// Airy tables with long mantissas
    pub fn wide() -> Self {
        Self {
            precision: 12,
            separator: "  |  ".to_string(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>, alignment: Alignment) -> Self {
        self.title = title.into();
        self.title_alignment = alignment;
        self
    }

    /// Parse options from a TOML document. Missing keys keep their defaults.
    #[cfg(feature = "config")]
    pub fn from_toml_str(input: &str) -> TableResult<Self> {
        toml::from_str(input).map_err(|e| TableError::config(e.to_string()))
    }
}
