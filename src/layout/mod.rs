//! # Text Layout
//!
//! Fixed-width layout for character-cell printers.
//!
//! ## Module Structure
//!
//! - [`text`]: Diacritic stripping, word wrap, key/value rows, product lines
//! - [`table`]: Column width allocation and table rendering
//!
//! Everything here is a pure function over strings; nothing emits control
//! codes. The [`builder`](crate::builder) decides what wraps the output.

pub mod table;
pub mod text;

pub use table::{Cell, MIN_COLUMN_WIDTH, TableColumn, align_cell, allocate_columns, render_table};
pub use text::{Price, format_currency, format_product_line, format_row, strip_diacritics, wrap};
