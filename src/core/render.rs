//! Text rendering
//!
//! Output layout, top to bottom. Rules overhang the framed lines by one
//! corner glyph:
//!
//! ```text
//! +------------------+
//! |      Title      |
//! +------------------+
//! | Id | Name       |
//! +------------------+
//! | 1  | Hydrogen   |
//! | 2  | Helium     |
//! +------------------+
//! ```
//!
//! The title block is skipped when the title is empty and the header block
//! when no column exists. Vertical borders are fixed glyphs, independent of
//! the configurable column separator.

use std::fmt;
use std::io::Write;

use super::layout::Layout;
use super::table::{
    Row, TablePrinter, CORNER, HORIZONTAL_BORDER, LEFT_VERTICAL_BORDER, RIGHT_VERTICAL_BORDER,
};
use crate::utils::error::TableResult;
use crate::utils::text::pad_aligned;

impl<W> TablePrinter<W> {
    /// Render the whole table. Does not touch the output sink.
    pub fn render(&self) -> String {
        let layout = Layout::compute(self);
        let rule = horizontal_rule(&layout);
        let mut out = String::new();

        out.push_str(&rule);

        if !self.title.is_empty() {
            for line in self.title.lines() {
                let text = pad_aligned(line, layout.body_width(), self.title.alignment());
                push_framed(&mut out, &text);
            }
            out.push_str(&rule);
        }

        if !self.columns.is_empty() {
            self.render_headers(&mut out, &layout);
            out.push_str(&rule);
        }

        if !self.rows.is_empty() {
            for row in &self.rows {
                self.render_row(&mut out, &layout, row);
            }
            out.push_str(&rule);
        }

        out
    }

    /// Render the table into an arbitrary writer
    pub fn print_to<O: Write>(&self, writer: &mut O) -> TableResult<()> {
        writer.write_all(self.render().as_bytes())?;
        Ok(())
    }

    fn render_headers(&self, out: &mut String, layout: &Layout) {
        let height = self
            .columns
            .iter()
            .map(|col| col.header_lines().len())
            .max()
            .unwrap_or(1);

        for line in 0..height {
            let parts = self
                .columns
                .iter()
                .zip(layout.column_widths())
                .map(|(col, &width)| {
                    let text = col.header_lines().get(line).map(String::as_str).unwrap_or("");
                    pad_aligned(text, width, col.alignment())
                });
            push_framed(out, &self.join(parts));
        }
    }

    fn render_row(&self, out: &mut String, layout: &Layout, row: &Row) {
        for line in 0..row.height() {
            let parts = self
                .columns
                .iter()
                .zip(layout.column_widths())
                .zip(row.cells())
                .map(|((col, &width), cell)| {
                    pad_aligned(cell.line(line), width, col.alignment())
                });
            push_framed(out, &self.join(parts));
        }
    }

    fn join(&self, parts: impl Iterator<Item = String>) -> String {
        parts.collect::<Vec<_>>().join(&self.separator)
    }
}

impl<W> fmt::Display for TablePrinter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn horizontal_rule(layout: &Layout) -> String {
    let mut rule = String::new();
    rule.push_str(CORNER);
    rule.push_str(&HORIZONTAL_BORDER.repeat(layout.rule_length()));
    rule.push_str(CORNER);
    rule.push('\n');
    rule
}

fn push_framed(out: &mut String, content: &str) {
    out.push_str(LEFT_VERTICAL_BORDER);
    out.push_str(content);
    out.push_str(RIGHT_VERTICAL_BORDER);
    out.push('\n');
}
