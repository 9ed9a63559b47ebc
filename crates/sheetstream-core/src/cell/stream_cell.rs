//! The streamed cell value

use chrono::{DateTime, TimeZone};

use super::{CellAddress, CellRange, CellType};
use crate::date::{self, DateSystem, SerialMode};
use crate::style::{StyleRef, DEFAULT_DATE_STYLE, DEFAULT_INTEGER_STYLE, DEFAULT_STRING_STYLE};

/// A cell as buffered by a streaming sheet writer
///
/// Holds the payload exactly as it will be written, the type tag telling the
/// reader how to interpret it, an opaque style ref and the merge extents.
/// Type and style are fixed at construction; only the merge extents change
/// afterwards, through [`merge`](Cell::merge).
///
/// Merge extents are not validated: keeping merged regions inside the sheet
/// and free of overlaps is up to the row writer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    payload: String,
    style: StyleRef,
    cell_type: CellType,
    h_merge: u32,
    v_merge: u32,
}

impl Cell {
    /// Create a cell with the given payload, style and type.
    ///
    /// The payload is not checked against the type; an empty payload is
    /// valid for any type.
    pub fn new<S: Into<String>>(payload: S, style: StyleRef, cell_type: CellType) -> Self {
        Self {
            payload: payload.into(),
            style,
            cell_type,
            h_merge: 0,
            v_merge: 0,
        }
    }

    /// A string cell in the default string style
    pub fn string<S: Into<String>>(payload: S) -> Self {
        Self::new(payload, DEFAULT_STRING_STYLE, CellType::String)
    }

    /// A string cell in the given style
    pub fn styled_string<S: Into<String>>(payload: S, style: StyleRef) -> Self {
        Self::new(payload, style, CellType::String)
    }

    /// A numeric cell holding `value` in plain decimal, default integer style
    ///
    /// ```
    /// use sheetstream_core::{Cell, CellType};
    ///
    /// let cell = Cell::integer(-7);
    /// assert_eq!(cell.payload(), "-7");
    /// assert_eq!(cell.cell_type(), CellType::Numeric);
    /// ```
    pub fn integer(value: i64) -> Self {
        Self::styled_integer(value, DEFAULT_INTEGER_STYLE)
    }

    /// A numeric cell holding `value` in plain decimal, given style
    pub fn styled_integer(value: i64, style: StyleRef) -> Self {
        Self::new(value.to_string(), style, CellType::Numeric)
    }

    /// A numeric cell holding the date serial of `timestamp`, default date style.
    ///
    /// Uses the 1900 date system and drops the time of day; the calendar day
    /// is taken in UTC.
    pub fn date<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> Self {
        Self::date_in(timestamp, DateSystem::Excel1900)
    }

    /// Like [`Cell::date`], for a workbook using the given date system
    pub fn date_in<Tz: TimeZone>(timestamp: &DateTime<Tz>, system: DateSystem) -> Self {
        let serial = date::timestamp_to_serial(timestamp, system, SerialMode::DateOnly) as i64;
        Self::new(serial.to_string(), DEFAULT_DATE_STYLE, CellType::Numeric)
    }

    /// Span `hcells` extra columns to the right and `vcells` extra rows down.
    ///
    /// Replaces any previous extents; `merge(0, 0)` unmerges.
    pub fn merge(&mut self, hcells: u32, vcells: u32) {
        self.h_merge = hcells;
        self.v_merge = vcells;
    }

    /// By-value form of [`merge`](Cell::merge)
    pub fn with_merge(mut self, hcells: u32, vcells: u32) -> Self {
        self.merge(hcells, vcells);
        self
    }

    /// Payload text
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Consume the cell, returning its payload
    pub fn into_payload(self) -> String {
        self.payload
    }

    /// Style ref
    pub fn style(&self) -> StyleRef {
        self.style
    }

    /// Type tag
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// Extra columns spanned
    pub fn h_merge(&self) -> u32 {
        self.h_merge
    }

    /// Extra rows spanned
    pub fn v_merge(&self) -> u32 {
        self.v_merge
    }

    /// Whether either merge extent is non-zero
    pub fn is_merged(&self) -> bool {
        self.h_merge != 0 || self.v_merge != 0
    }

    /// The region this cell covers when placed at `anchor`, if merged.
    ///
    /// Extents past the addressable grid saturate rather than wrap; whether
    /// the region fits the sheet is not checked.
    ///
    /// ```
    /// use sheetstream_core::{Cell, CellAddress};
    ///
    /// let cell = Cell::string("Total").with_merge(2, 1);
    /// let range = cell.merged_range(CellAddress::new(0, 1)).unwrap();
    /// assert_eq!(range.to_string(), "B1:D2");
    /// ```
    pub fn merged_range(&self, anchor: CellAddress) -> Option<CellRange> {
        if !self.is_merged() {
            return None;
        }
        let h = u16::try_from(self.h_merge).unwrap_or(u16::MAX);
        let end = CellAddress::new(
            anchor.row.saturating_add(self.v_merge),
            anchor.col.saturating_add(h),
        );
        Some(CellRange::new(anchor, end))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::string("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StreamStyle, StyleTable, DEFAULT_BOLD_STRING_STYLE};
    use chrono::{NaiveDate, Utc};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn assert_unmerged(cell: &Cell) {
        assert_eq!((cell.h_merge(), cell.v_merge()), (0, 0));
        assert!(!cell.is_merged());
    }

    #[test]
    fn test_new_keeps_arguments() {
        let cell = Cell::new("TRUE", DEFAULT_BOLD_STRING_STYLE, CellType::Boolean);
        assert_eq!(cell.payload(), "TRUE");
        assert_eq!(cell.style(), DEFAULT_BOLD_STRING_STYLE);
        assert_eq!(cell.cell_type(), CellType::Boolean);
        assert_unmerged(&cell);
    }

    #[test]
    fn test_new_accepts_mismatched_payload() {
        let cell = Cell::new("not a number", DEFAULT_INTEGER_STYLE, CellType::Numeric);
        assert_eq!(cell.payload(), "not a number");
        assert_eq!(cell.cell_type(), CellType::Numeric);

        let empty = Cell::new("", DEFAULT_INTEGER_STYLE, CellType::Numeric);
        assert_eq!(empty.payload(), "");
    }

    #[test]
    fn test_string_cells() {
        let cell = Cell::string("");
        assert_eq!(cell.style(), DEFAULT_STRING_STYLE);
        assert_eq!(cell.cell_type(), CellType::String);
        assert_unmerged(&cell);

        let mut table = StyleTable::new();
        let red = table.intern(StreamStyle::new().font_color(crate::style::Color::RED));
        let styled = Cell::styled_string("warning", red);
        assert_eq!(styled.style(), red);
        assert_eq!(styled.cell_type(), CellType::String);
        assert_unmerged(&styled);
    }

    #[test]
    fn test_integer_cells() {
        let cell = Cell::integer(2023);
        assert_eq!(cell.payload(), "2023");
        assert_eq!(cell.cell_type(), CellType::Numeric);
        assert_eq!(cell.style(), DEFAULT_INTEGER_STYLE);
        assert_unmerged(&cell);

        assert_eq!(Cell::integer(0).payload(), "0");
        assert_eq!(Cell::integer(-7).payload(), "-7");
        assert_eq!(Cell::integer(i64::MIN).payload(), "-9223372036854775808");

        let styled = Cell::styled_integer(1_000_000, DEFAULT_BOLD_STRING_STYLE);
        assert_eq!(styled.payload(), "1000000");
        assert_eq!(styled.style(), DEFAULT_BOLD_STRING_STYLE);
        assert_eq!(styled.cell_type(), CellType::Numeric);
    }

    #[test]
    fn test_date_cell() {
        let t = Utc.with_ymd_and_hms(2024, 3, 12, 17, 45, 0).unwrap();
        let cell = Cell::date(&t);
        assert_eq!(cell.payload(), "45363");
        assert_eq!(cell.cell_type(), CellType::Numeric);
        assert_eq!(cell.style(), DEFAULT_DATE_STYLE);
        assert_unmerged(&cell);
    }

    #[test]
    fn test_date_cell_1904() {
        let t = NaiveDate::from_ymd_opt(1904, 1, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        assert_eq!(Cell::date_in(&t, DateSystem::Excel1904).payload(), "1");
    }

    #[test]
    fn test_merge_overwrites() {
        let mut cell = Cell::string("header");
        cell.merge(3, 2);
        assert_eq!((cell.h_merge(), cell.v_merge()), (3, 2));

        cell.merge(1, 1);
        cell.merge(2, 2);
        assert_eq!((cell.h_merge(), cell.v_merge()), (2, 2));

        cell.merge(0, 0);
        assert_unmerged(&cell);
    }

    #[test]
    fn test_vertical_only_merge() {
        let cell = Cell::integer(5).with_merge(0, 5);
        assert_eq!((cell.h_merge(), cell.v_merge()), (0, 5));
        assert!(cell.is_merged());
        assert_eq!(
            cell.merged_range(CellAddress::new(0, 0)).map(|r| r.to_string()),
            Some("A1:A6".to_string())
        );
    }

    #[test]
    fn test_merged_range() {
        let anchor = CellAddress::new(2, 1);
        assert_eq!(Cell::string("x").merged_range(anchor), None);

        let range = Cell::string("x").with_merge(3, 2).merged_range(anchor).unwrap();
        assert_eq!(range.to_string(), "B3:E5");
        assert_eq!(range.col_count(), 4);
        assert_eq!(range.row_count(), 3);
    }

    #[test]
    fn test_merged_range_saturates() {
        let cell = Cell::string("x").with_merge(u32::MAX, u32::MAX);
        let range = cell.merged_range(CellAddress::new(10, 10)).unwrap();
        assert_eq!(range.end, CellAddress::new(u32::MAX, u16::MAX));
    }

    #[test]
    fn test_default_and_into_payload() {
        let cell = Cell::default();
        assert_eq!(cell, Cell::string(""));
        assert_eq!(Cell::string("abc").into_payload(), "abc");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_keeps_merge_extents() {
        let cell = Cell::integer(12).with_merge(1, 3);
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);
    }

    proptest! {
        #[test]
        fn prop_integer_payload_is_decimal(n in any::<i64>()) {
            let cell = Cell::integer(n);
            prop_assert_eq!(cell.payload(), n.to_string());
            prop_assert_eq!(cell.payload().parse::<i64>().ok(), Some(n));
            prop_assert_eq!(cell.cell_type(), CellType::Numeric);
        }

        #[test]
        fn prop_styled_string_keeps_style(payload in ".*", idx in 0usize..7) {
            let style = StyleTable::new().iter().nth(idx).map(|(r, _)| r).unwrap();
            let cell = Cell::styled_string(payload.clone(), style);
            prop_assert_eq!(cell.cell_type(), CellType::String);
            prop_assert_eq!(cell.style(), style);
            prop_assert_eq!(cell.payload(), payload.as_str());
        }

        #[test]
        fn prop_string_uses_default_style(payload in ".*") {
            prop_assert_eq!(Cell::string(payload).style(), DEFAULT_STRING_STYLE);
        }

        #[test]
        fn prop_last_merge_wins(a in any::<(u32, u32)>(), b in any::<(u32, u32)>()) {
            let mut cell = Cell::string("m");
            cell.merge(a.0, a.1);
            cell.merge(b.0, b.1);
            prop_assert_eq!((cell.h_merge(), cell.v_merge()), b);
        }
    }
}
