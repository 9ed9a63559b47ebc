//! # sheetstream
//!
//! The cell model a streaming spreadsheet writer buffers before flushing rows
//! to an XLSX container.
//!
//! ## Features
//!
//! - Typed cell factories pairing each value kind with its type tag and
//!   default style (strings, integers, dates)
//! - Horizontal and vertical merge extents, with A1 rendering of the merged
//!   region
//! - An interning style table with pre-registered default styles
//! - Date serial conversion for the 1900 and 1904 date systems
//!
//! ## Example
//!
//! ```rust
//! use sheetstream::prelude::*;
//!
//! let mut styles = StyleTable::new();
//! let heading = styles.intern(StreamStyle::new().bold(true).font_size(14.0));
//!
//! let mut title = Cell::styled_string("Inventory", heading);
//! title.merge(2, 0);
//!
//! let row = vec![title, Cell::string(""), Cell::string(""), Cell::integer(17)];
//! assert_eq!(row[3].payload(), "17");
//! assert_eq!(
//!     row[0].merged_range(CellAddress::new(0, 0)).unwrap().to_string(),
//!     "A1:C1"
//! );
//! ```

pub mod prelude;

// Re-export core types
pub use sheetstream_core::{
    // Cell types
    Cell,
    CellAddress,
    CellRange,
    CellType,

    // Style types
    Color,
    HorizontalAlignment,
    NumberFormat,
    StreamStyle,
    StyleRef,
    StyleTable,
    Underline,
    DEFAULT_BOLD_STRING_STYLE,
    DEFAULT_DATE_STYLE,
    DEFAULT_DECIMAL_STYLE,
    DEFAULT_INTEGER_STYLE,
    DEFAULT_ITALIC_STRING_STYLE,
    DEFAULT_STRING_STYLE,
    DEFAULT_UNDERLINED_STRING_STYLE,

    // Dates
    DateSystem,
    SerialMode,

    // Error types
    Error,
    Result,

    MAX_COLS,
    MAX_ROWS,
};

/// Date serial conversion
pub mod date {
    pub use sheetstream_core::date::*;
}
