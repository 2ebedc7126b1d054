//! Core table engine
//!
//! - `cell`: value formatting and multiline cells
//! - `schema`: column and title definitions
//! - `table`: table state and the insertion protocol
//! - `layout`: width computation
//! - `render`: border and text drawing

pub mod cell;
pub mod layout;
pub mod render;
pub mod schema;
pub mod table;


pub use cell::{Cell, CellValue};
pub use layout::Layout;
pub use schema::{Alignment, Column, Title};
pub use table::{
    Row, TablePrinter, CORNER, HORIZONTAL_BORDER, LEFT_VERTICAL_BORDER, RIGHT_VERTICAL_BORDER,
};
