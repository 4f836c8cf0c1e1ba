//! Output formatting for allocation results.
//!
//! This module handles formatting and exporting allocation results:
//! - [`csv`] - CSV export
//! - [`json`] - JSON export
//! - [`terminal`] - Console output with colors

mod csv;
mod json;
mod terminal;

pub use csv::{csv_header, csv_row, escape_csv_field, to_csv, write_csv};
pub use json::write_json;
pub use terminal::{
    allocation_lines, format_field, free_block_lines, print_allocations, print_free_blocks,
};
