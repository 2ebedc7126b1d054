//! Column and title definitions

use std::fmt;
use std::str::FromStr;

use crate::utils::text::{max_width, split_lines};

/// Text alignment inside a column or the title block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

impl Alignment {
    /// Parse from a single alignment character (`l`, `r`, `c`)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'l' => Some(Alignment::Left),
            'r' => Some(Alignment::Right),
            'c' => Some(Alignment::Center),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Center => "center",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(Alignment::Left),
            "right" | "r" => Ok(Alignment::Right),
            "center" | "centre" | "c" => Ok(Alignment::Center),
            other => Err(format!("unknown alignment '{}'", other)),
        }
    }
}

/// A column definition: multiline header, alignment and optional fixed width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    header: Vec<String>,
    alignment: Alignment,
    /// Minimum width; 0 means the column is sized from its content only
    fixed_width: usize,
}

impl Column {
    pub fn new(header: &str, alignment: Alignment, fixed_width: usize) -> Self {
        Column {
            header: split_lines(header),
            alignment,
            fixed_width,
        }
    }

    /// Header lines, top to bottom
    pub fn header_lines(&self) -> &[String] {
        &self.header
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn fixed_width(&self) -> usize {
        self.fixed_width
    }

    /// Widest header line
    pub fn header_width(&self) -> usize {
        max_width(&self.header)
    }
}

/// The table title, possibly spanning several lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    lines: Vec<String>,
    alignment: Alignment,
}

impl Title {
    pub fn new(text: &str, alignment: Alignment) -> Self {
        Title {
            lines: split_lines(text),
            alignment,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn width(&self) -> usize {
        max_width(&self.lines)
    }

    /// A title made only of blank lines is not rendered
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.is_empty())
    }
}

impl Default for Title {
    fn default() -> Self {
        Title::new("", Alignment::Center)
    }
}
