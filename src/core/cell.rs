//! Cell values and their canonical text form
//!
//! Any scalar that implements [`CellValue`] can be pushed into a table.
//! Text and integers use their natural `Display` form; floating point
//! numbers are written in scientific notation at the table precision with
//! insignificant trailing zeros removed.

use std::fmt;

use crate::utils::text::{max_width, split_lines, trim_exponent_zeros};

/// A value that can be written into a table cell
pub trait CellValue {
    /// Canonical display text. `precision` is the number of fractional
    /// mantissa digits used for floating point values.
    fn format_cell(&self, precision: usize) -> String;
}

impl<T: CellValue + ?Sized> CellValue for &T {
    fn format_cell(&self, precision: usize) -> String {
        (**self).format_cell(precision)
    }
}

impl CellValue for str {
    fn format_cell(&self, _precision: usize) -> String {
        self.to_string()
    }
}

impl CellValue for String {
    fn format_cell(&self, _precision: usize) -> String {
        self.clone()
    }
}

macro_rules! impl_display_cell {
    ($($t:ty),* $(,)?) => {
        $(
            impl CellValue for $t {
                fn format_cell(&self, _precision: usize) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_display_cell!(char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_cell {
    ($($t:ty),* $(,)?) => {
        $(
            impl CellValue for $t {
                fn format_cell(&self, precision: usize) -> String {
                    if self.is_nan() {
                        "nan".to_string()
                    } else if self.is_infinite() && self.is_sign_negative() {
                        "-inf".to_string()
                    } else if self.is_infinite() {
                        "inf".to_string()
                    } else {
                        format_scientific(*self, precision)
                    }
                }
            }
        )*
    };
}

impl_float_cell!(f32, f64);

/// Format a finite number as `d.ddde±XX` and trim trailing mantissa zeros
fn format_scientific<T: fmt::LowerExp>(value: T, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, value);
    let normalized = match raw.split_once('e') {
        // Rust writes `1.5e-7`/`1.5e0`; widen the exponent to a signed two digit form
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
            }
            Err(_) => raw.clone(),
        },
        None => raw.clone(),
    };
    trim_exponent_zeros(&normalized)
}

/// Content of one table cell, split into physical lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    lines: Vec<String>,
}

impl Cell {
    /// Format a value at the given precision and split it on line breaks
    pub fn format<V: CellValue + ?Sized>(value: &V, precision: usize) -> Self {
        Cell::from_text(&value.format_cell(precision))
    }

    pub fn from_text(text: &str) -> Self {
        Cell {
            lines: split_lines(text),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line `index`, or an empty string below the last line
    pub fn line(&self, index: usize) -> &str {
        self.lines.get(index).map(String::as_str).unwrap_or("")
    }

    /// Widest line
    pub fn width(&self) -> usize {
        max_width(&self.lines)
    }

    /// Number of physical lines
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// A cell that never received a value
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_integers() {
        assert_eq!("Isotope".format_cell(8), "Isotope");
        assert_eq!(String::from("D").format_cell(8), "D");
        assert_eq!(42i32.format_cell(8), "42");
        assert_eq!((-7i64).format_cell(2), "-7");
        assert_eq!(3usize.format_cell(8), "3");
        assert_eq!('x'.format_cell(8), "x");
        assert_eq!(true.format_cell(8), "true");
    }

    #[test]
    fn test_float_scientific() {
        assert_eq!(0.1569638743797386917163f64.format_cell(8), "1.56963874e-01");
        assert_eq!(666.666f64.format_cell(8), "6.66666e+02");
        assert_eq!(1.0f64.format_cell(8), "1.0e+00");
        assert_eq!(1.5f64.format_cell(3), "1.5e+00");
        assert_eq!(2.5e-12f64.format_cell(8), "2.5e-12");
        assert_eq!(1.25e120f64.format_cell(4), "1.25e+120");
        assert_eq!((-3.0f64).format_cell(8), "-3.0e+00");
    }

    #[test]
    fn test_float_zero_precision() {
        assert_eq!(3.0f64.format_cell(0), "3e+00");
        assert_eq!(12345.0f64.format_cell(0), "1e+04");
    }

    #[test]
    fn test_f32() {
        assert_eq!(0.5f32.format_cell(8), "5.0e-01");
        assert_eq!(0.1f32.format_cell(6), "1.0e-01");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(f64::NAN.format_cell(8), "nan");
        assert_eq!(f64::INFINITY.format_cell(8), "inf");
        assert_eq!(f64::NEG_INFINITY.format_cell(8), "-inf");
        assert_eq!(f32::INFINITY.format_cell(3), "inf");
    }

    #[test]
    fn test_trimming_keeps_value() {
        for value in [0.1f64, 1.0 / 3.0, 12.5, 1e-9, 987654.321, -0.002] {
            let text = value.format_cell(8);
            let parsed: f64 = text.parse().unwrap();
            let tolerance = value.abs() * 1e-8;
            assert!(
                (parsed - value).abs() <= tolerance,
                "{} formatted as {} parsed back as {}",
                value,
                text,
                parsed
            );
        }
    }

    #[test]
    fn test_cell_lines() {
        let cell = Cell::format("Careful\nhere:", 8);
        assert_eq!(cell.height(), 2);
        assert_eq!(cell.width(), 7);
        assert_eq!(cell.line(1), "here:");
        assert_eq!(cell.line(5), "");
        assert!(!cell.is_empty());
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::default().width(), 0);
    }
}
