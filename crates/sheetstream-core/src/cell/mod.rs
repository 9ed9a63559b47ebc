//! Cell-related types
//!
//! This module contains:
//! - [`Cell`] - A streamed cell: payload, type tag, style ref, merge extents
//! - [`CellType`] - How a cell's payload is interpreted
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A range of cells (e.g., "A1:B10")

mod address;
mod cell_type;
mod stream_cell;

pub use address::{CellAddress, CellRange};
pub use cell_type::CellType;
pub use stream_cell::Cell;
