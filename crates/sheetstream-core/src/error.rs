//! Error types for sheetstream-core
//!
//! Cell construction never fails; these errors come from the collaborators
//! around it (address parsing, style lookup, serial-to-date conversion).

use thiserror::Error;

use crate::date::DateSystem;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetstream-core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Style reference not registered in the style table
    #[error("Unknown style reference: {0}")]
    UnknownStyle(u32),

    /// Serial number has no calendar date in the given date system
    #[error("Serial {serial} has no calendar date in the {system} date system")]
    DateOutOfRange { serial: i64, system: DateSystem },
}
