//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Width-aware text helpers

pub mod error;
pub mod text;

// Re-export commonly used items
pub use error::{TableError, TableResult};
pub use text::{display_width, pad_aligned, split_lines, trim_exponent_zeros};
