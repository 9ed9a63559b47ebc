//! Prelude module - common imports for sheetstream users
//!
//! ```rust
//! use sheetstream::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellAddress,
    CellRange,
    CellType,

    // Style types
    Color,
    NumberFormat,
    StreamStyle,
    StyleRef,
    StyleTable,
    DEFAULT_DATE_STYLE,
    DEFAULT_INTEGER_STYLE,
    DEFAULT_STRING_STYLE,

    // Dates
    DateSystem,

    // Error types
    Error,
    Result,
};
