//! Width computation
//!
//! Widths are derived from the whole table every time it is rendered, so a
//! table printed, extended and printed again is always laid out correctly.

use super::table::{TablePrinter, CORNER, LEFT_VERTICAL_BORDER, RIGHT_VERTICAL_BORDER};
use crate::utils::text::display_width;

/// Final widths of one rendering pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    column_widths: Vec<usize>,
    title_width: usize,
    body_width: usize,
}

impl Layout {
    /// Compute widths from the current content of `table`.
    ///
    /// A column is as wide as its widest header line, data line or fixed
    /// width. When the title is wider than all columns together, the last
    /// column absorbs the difference.
    pub fn compute<W>(table: &TablePrinter<W>) -> Self {
        let mut column_widths: Vec<usize> = table
            .columns
            .iter()
            .map(|col| col.header_width().max(col.fixed_width()))
            .collect();

        for row in &table.rows {
            for (width, cell) in column_widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.width());
            }
        }

        let separators =
            display_width(&table.separator) * column_widths.len().saturating_sub(1);
        let content_width = column_widths.iter().sum::<usize>() + separators;

        let title_width = if table.title.is_empty() {
            0
        } else {
            table.title.width()
        };

        if title_width > content_width {
            if let Some(last) = column_widths.last_mut() {
                *last += title_width - content_width;
            }
        }

        Layout {
            column_widths,
            title_width,
            body_width: content_width.max(title_width),
        }
    }

    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    pub fn title_width(&self) -> usize {
        self.title_width
    }

    /// Width between the left and right vertical borders
    pub fn body_width(&self) -> usize {
        self.body_width
    }

    /// Width of every framed line, borders included
    pub fn line_width(&self) -> usize {
        display_width(LEFT_VERTICAL_BORDER) + self.body_width + display_width(RIGHT_VERTICAL_BORDER)
    }

    /// Width of a horizontal rule: one corner plus a framed line
    pub fn rule_width(&self) -> usize {
        display_width(CORNER) + self.line_width()
    }

    /// Number of horizontal glyphs between the two corners of a rule
    pub fn rule_length(&self) -> usize {
        self.rule_width().saturating_sub(2 * display_width(CORNER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::Alignment;

    fn table(title: &str) -> TablePrinter<Vec<u8>> {
        TablePrinter::with_output(title, 8, Vec::<u8>::new(), " | ")
    }

    #[test]
    fn test_widths_from_content() {
        let mut t = table("");
        t.add_column("Id", Alignment::Left, 0).unwrap();
        t.add_column("Name", Alignment::Left, 0).unwrap();
        t.push(1).unwrap().push("Hydrogen").unwrap();
        t.push(2).unwrap().push("He").unwrap();

        let layout = Layout::compute(&t);
        assert_eq!(layout.column_widths(), [2, 8]);
        assert_eq!(layout.body_width(), 2 + 3 + 8);
        assert_eq!(layout.line_width(), 17);
        assert_eq!(layout.rule_width(), 18);
        assert_eq!(layout.rule_length(), 16);
    }

    #[test]
    fn test_rule_width_single_column() {
        let mut t = table("T");
        t.add_column("H", Alignment::Left, 0).unwrap();
        t.push("AB").unwrap().push("C").unwrap().end_row();

        let layout = Layout::compute(&t);
        assert_eq!(layout.line_width(), 2 + 2 + 2);
        assert_eq!(layout.rule_width(), 1 + 2 + 2 + 2);
        assert_eq!(layout.rule_length(), 5);
    }

    #[test]
    fn test_fixed_width_and_multiline() {
        let mut t = table("");
        t.add_column("H", Alignment::Left, 6).unwrap();
        t.add_column("Two\nlines", Alignment::Left, 0).unwrap();
        t.push("x").unwrap().push("a\nlonger one").unwrap();

        let layout = Layout::compute(&t);
        assert_eq!(layout.column_widths(), [6, 10]);
    }

    #[test]
    fn test_wide_title_grows_last_column() {
        let mut t = table("A rather long title");
        t.add_column("a", Alignment::Left, 0).unwrap();
        t.add_column("b", Alignment::Left, 0).unwrap();

        let layout = Layout::compute(&t);
        assert_eq!(layout.title_width(), 19);
        assert_eq!(layout.body_width(), 19);
        assert_eq!(layout.column_widths(), [1, 15]);
    }

    #[test]
    fn test_multibyte_width() {
        let mut t = table("");
        t.add_column("k", Alignment::Left, 0).unwrap();
        t.push("ñandú").unwrap();
        t.push("東京").unwrap();
        assert_eq!(Layout::compute(&t).column_widths(), [5]);
    }

    #[test]
    fn test_separator_width_counts() {
        let mut t = table("");
        t.set_separator(" :: ");
        t.add_columns([("a", Alignment::Left), ("b", Alignment::Left), ("c", Alignment::Left)], 0)
            .unwrap();
        assert_eq!(Layout::compute(&t).body_width(), 3 + 2 * 4);
    }
}
