//! Spreadsheet date serial numbers
//!
//! Spreadsheets store dates as a count of days from a fixed epoch; the
//! fractional part (if any) is the time of day.
//!
//! - **1900 system** (default): serial 1 is 1900-01-01. The historical
//!   "1900 leap year" bug is kept for compatibility: serial 60 is the
//!   non-existent 1900-02-29, so every date from 1900-03-01 onwards is one
//!   higher than a plain day count would give.
//! - **1904 system**: serial 0 is 1904-01-01, no leap-year quirk.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike};

use crate::error::{Error, Result};

/// Days from 0001-01-01 (CE day 1) to 1899-12-31, the day before serial 1
const EXCEL_1900_BASE_CE_DAYS: i32 = 693_595;

/// CE day number of 1900-03-01, the first date shifted by the leap-year bug
const EXCEL_1900_LEAP_BUG_CE_DAYS: i32 = 693_655;

/// The fictional 1900-02-29
const EXCEL_1900_LEAP_BUG_SERIAL: i64 = 60;

/// CE day number of 1904-01-01 (serial 0 in the 1904 system)
const EXCEL_1904_BASE_CE_DAYS: i32 = 695_056;

/// Last representable serial (9999-12-31) in the 1900 system
const EXCEL_1900_MAX_SERIAL: i64 = 2_958_465;

/// Last representable serial (9999-12-31) in the 1904 system
const EXCEL_1904_MAX_SERIAL: i64 = 2_957_003;

const SECONDS_PER_DAY: f64 = 86_400.0;
const NANOS_PER_DAY: f64 = 86_400_000_000_000.0;

/// Workbook date system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateSystem {
    /// 1900 system (Windows default), with the 1900 leap-year quirk
    #[default]
    Excel1900,
    /// 1904 system (legacy Mac)
    Excel1904,
}

impl DateSystem {
    /// Pick the system from a workbook's `date1904` flag
    pub fn from_date_1904(date_1904: bool) -> Self {
        if date_1904 {
            DateSystem::Excel1904
        } else {
            DateSystem::Excel1900
        }
    }

    /// Smallest serial that maps to a real calendar date
    pub fn min_serial(self) -> i64 {
        match self {
            DateSystem::Excel1900 => 1,
            DateSystem::Excel1904 => 0,
        }
    }

    /// Largest serial that maps to a real calendar date (9999-12-31)
    pub fn max_serial(self) -> i64 {
        match self {
            DateSystem::Excel1900 => EXCEL_1900_MAX_SERIAL,
            DateSystem::Excel1904 => EXCEL_1904_MAX_SERIAL,
        }
    }
}

impl fmt::Display for DateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateSystem::Excel1900 => write!(f, "1900"),
            DateSystem::Excel1904 => write!(f, "1904"),
        }
    }
}

/// Whether a conversion keeps the time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerialMode {
    /// Whole days only; the time of day is dropped
    DateOnly,
    /// Whole days plus the elapsed fraction of the day
    DateTime,
}

/// Convert a calendar date to its serial number.
///
/// Dates before the epoch produce zero or negative serials; no clamping is
/// applied.
///
/// ```
/// use chrono::NaiveDate;
/// use sheetstream_core::date::{date_to_serial, DateSystem};
///
/// let d = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
/// assert_eq!(date_to_serial(d, DateSystem::Excel1900), 1);
/// ```
pub fn date_to_serial(date: NaiveDate, system: DateSystem) -> i64 {
    let ce_days = date.num_days_from_ce();
    let serial = match system {
        DateSystem::Excel1900 => {
            let days = i64::from(ce_days - EXCEL_1900_BASE_CE_DAYS);
            if ce_days >= EXCEL_1900_LEAP_BUG_CE_DAYS {
                days + 1
            } else {
                days
            }
        }
        DateSystem::Excel1904 => i64::from(ce_days - EXCEL_1904_BASE_CE_DAYS),
    };

    if serial < system.min_serial() {
        log::trace!(
            "date {} precedes the {} epoch (serial {})",
            date,
            system,
            serial
        );
    }

    serial
}

/// Convert a naive date-time to its serial number.
///
/// In [`SerialMode::DateOnly`] the result is always a whole number.
pub fn datetime_to_serial(dt: NaiveDateTime, system: DateSystem, mode: SerialMode) -> f64 {
    let days = date_to_serial(dt.date(), system) as f64;
    match mode {
        SerialMode::DateOnly => days,
        SerialMode::DateTime => {
            let time = dt.time();
            let seconds = f64::from(time.num_seconds_from_midnight()) / SECONDS_PER_DAY;
            // Leap-second nanos (>= 1e9) are folded into the same second.
            let nanos = f64::from(time.nanosecond() % 1_000_000_000) / NANOS_PER_DAY;
            days + seconds + nanos
        }
    }
}

/// Convert a timestamp to its serial number, using the UTC calendar day.
pub fn timestamp_to_serial<Tz: TimeZone>(
    timestamp: &DateTime<Tz>,
    system: DateSystem,
    mode: SerialMode,
) -> f64 {
    datetime_to_serial(timestamp.naive_utc(), system, mode)
}

/// Check whether a serial number maps to a real calendar date.
///
/// The fictional 1900-02-29 (serial 60 in the 1900 system) is reported as
/// valid, since spreadsheet applications accept and display it.
pub fn is_valid_serial(serial: i64, system: DateSystem) -> bool {
    (system.min_serial()..=system.max_serial()).contains(&serial)
}

/// Convert a serial number back to a calendar date.
///
/// Fails for serials outside the representable range and for the fictional
/// 1900-02-29, which has no [`NaiveDate`].
pub fn serial_to_date(serial: i64, system: DateSystem) -> Result<NaiveDate> {
    let out_of_range = || Error::DateOutOfRange { serial, system };

    if !is_valid_serial(serial, system) {
        return Err(out_of_range());
    }

    let ce_days = match system {
        DateSystem::Excel1900 => {
            if serial == EXCEL_1900_LEAP_BUG_SERIAL {
                return Err(out_of_range());
            }
            let days = if serial > EXCEL_1900_LEAP_BUG_SERIAL {
                serial - 1
            } else {
                serial
            };
            i64::from(EXCEL_1900_BASE_CE_DAYS) + days
        }
        DateSystem::Excel1904 => i64::from(EXCEL_1904_BASE_CE_DAYS) + serial,
    };

    i32::try_from(ce_days)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or_else(out_of_range)
}
