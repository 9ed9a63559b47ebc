//! # sheetstream-core
//!
//! Core data structures for the sheetstream streaming spreadsheet writer.
//!
//! This crate provides the values a streaming writer buffers row by row:
//! - [`Cell`] - Payload text, type tag, style reference and merge extents
//! - [`CellType`] - How the payload must be interpreted by the consumer
//! - [`StyleRef`] and [`StyleTable`] - Opaque style tokens and their registry
//! - [`CellAddress`] and [`CellRange`] - A1 addressing for merged regions
//! - [`date`] - Conversion of timestamps to spreadsheet serial numbers
//!
//! ## Example
//!
//! ```rust
//! use sheetstream_core::{Cell, CellType, DEFAULT_INTEGER_STYLE};
//!
//! let mut header = Cell::string("Quarterly totals");
//! header.merge(3, 0);
//!
//! let total = Cell::integer(-42);
//! assert_eq!(total.payload(), "-42");
//! assert_eq!(total.cell_type(), CellType::Numeric);
//! assert_eq!(total.style(), DEFAULT_INTEGER_STYLE);
//! ```

pub mod cell;
pub mod date;
pub mod error;
pub mod style;

// Re-exports for convenience
pub use cell::{Cell, CellAddress, CellRange, CellType};
pub use date::{DateSystem, SerialMode};
pub use error::{Error, Result};

pub use style::{
    Color, HorizontalAlignment, NumberFormat, StreamStyle, StyleRef, StyleTable, Underline,
    DEFAULT_BOLD_STRING_STYLE, DEFAULT_DATE_STYLE, DEFAULT_DECIMAL_STYLE, DEFAULT_INTEGER_STYLE,
    DEFAULT_ITALIC_STRING_STYLE, DEFAULT_STRING_STYLE, DEFAULT_UNDERLINED_STRING_STYLE,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
