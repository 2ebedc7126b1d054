//! Text helpers shared by the formatter, the layout pass and the renderer

use lazy_static::lazy_static;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

use crate::core::schema::Alignment;

lazy_static! {
    /// Zeros sitting between the last significant fractional digit and the exponent
    static ref EXPONENT_TRAILING_ZEROS: Regex = Regex::new(r"(\.\d*?\d)0+([eE])").unwrap();
}

/// Number of terminal columns a string occupies.
///
/// Counts characters rather than bytes, and wide characters (CJK, most
/// emoji) take two columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Widest line of a multiline block
pub fn max_width<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| display_width(line.as_ref()))
        .max()
        .unwrap_or(0)
}

/// Split text on embedded line breaks.
///
/// `\r\n` endings are accepted. Text without a break, including the empty
/// string, yields exactly one line.
pub fn split_lines(s: &str) -> Vec<String> {
    s.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Remove insignificant zeros in front of the exponent of a scientific
/// notation number, e.g. `1.50000000e+00` becomes `1.5e+00`.
///
/// At least one fractional digit is kept, so `1.00000000e+00` becomes
/// `1.0e+00`. Strings without an exponent are returned untouched.
pub fn trim_exponent_zeros(s: &str) -> String {
    EXPONENT_TRAILING_ZEROS.replace(s, "${1}${2}").into_owned()
}

/// Pad `text` to `width` columns according to `alignment`.
///
/// Centered text puts the odd remaining space on the right. Text that is
/// already wider than `width` is returned as is.
pub fn pad_aligned(text: &str, width: usize, alignment: Alignment) -> String {
    let len = display_width(text);
    if len >= width {
        return text.to_string();
    }

    let pad = width - len;
    let (left, right) = match alignment {
        Alignment::Left => (0, pad),
        Alignment::Right => (pad, 0),
        Alignment::Center => (pad / 2, pad - pad / 2),
    };

    let mut out = String::with_capacity(text.len() + pad);
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(right));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_multibyte() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("été"), 3);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("one"), vec!["one"]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("a\nbc"), vec!["a", "bc"]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
    }

    #[test]
    fn test_max_width() {
        assert_eq!(max_width(&["a", "abcd", "ab"]), 4);
        let empty: [&str; 0] = [];
        assert_eq!(max_width(&empty), 0);
    }

    #[test]
    fn test_trim_exponent_zeros() {
        assert_eq!(trim_exponent_zeros("1.50000000e+00"), "1.5e+00");
        assert_eq!(trim_exponent_zeros("1.00000000e+00"), "1.0e+00");
        assert_eq!(trim_exponent_zeros("1.05000000e-03"), "1.05e-03");
        assert_eq!(trim_exponent_zeros("1.23456789e+02"), "1.23456789e+02");
        assert_eq!(trim_exponent_zeros("1.0e+00"), "1.0e+00");
        assert_eq!(trim_exponent_zeros("2e+00"), "2e+00");
        assert_eq!(trim_exponent_zeros("100"), "100");
    }

    #[test]
    fn test_pad_aligned() {
        assert_eq!(pad_aligned("X", 5, Alignment::Left), "X    ");
        assert_eq!(pad_aligned("X", 5, Alignment::Right), "    X");
        assert_eq!(pad_aligned("X", 5, Alignment::Center), "  X  ");
        assert_eq!(pad_aligned("X", 4, Alignment::Center), " X  ");
        assert_eq!(pad_aligned("toolong", 3, Alignment::Right), "toolong");
        assert_eq!(pad_aligned("日", 4, Alignment::Left), "日  ");
    }
}
