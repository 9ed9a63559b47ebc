//! Cell type tag

use std::fmt;

/// How the consumer must interpret a cell's payload
///
/// The cell factories only produce [`CellType::String`] and
/// [`CellType::Numeric`]; the remaining tags exist for writers that build
/// cells with [`Cell::new`](crate::Cell::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum CellType {
    /// Text, stored through the shared string table
    #[default]
    String,
    /// A number (integers and date serials included)
    Numeric,
    /// `0` or `1`
    Boolean,
    /// Text written inline in the cell element
    InlineString,
    /// An error literal such as `#N/A`
    Error,
    /// A formula; the payload is the formula text without `=`.
    ///
    /// Written without a `t` attribute, so readers type the result from its
    /// cached value rather than assuming a string.
    Formula,
}

impl CellType {
    /// Value of the cell element's `t` attribute, `None` when omitted
    pub fn xml_type_attr(self) -> Option<&'static str> {
        match self {
            CellType::String => Some("s"),
            CellType::Numeric => None,
            CellType::Boolean => Some("b"),
            CellType::InlineString => Some("inlineStr"),
            CellType::Error => Some("e"),
            CellType::Formula => None,
        }
    }

    /// Whether the payload is a number in decimal form
    pub fn is_numeric(self) -> bool {
        matches!(self, CellType::Numeric | CellType::Boolean)
    }

    /// Get the type name for diagnostics
    pub fn type_name(self) -> &'static str {
        match self {
            CellType::String => "string",
            CellType::Numeric => "numeric",
            CellType::Boolean => "boolean",
            CellType::InlineString => "inline_string",
            CellType::Error => "error",
            CellType::Formula => "formula",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_type_attr() {
        assert_eq!(CellType::String.xml_type_attr(), Some("s"));
        assert_eq!(CellType::Numeric.xml_type_attr(), None);
        assert_eq!(CellType::InlineString.xml_type_attr(), Some("inlineStr"));
        assert_eq!(CellType::Error.xml_type_attr(), Some("e"));
        assert_eq!(CellType::Boolean.xml_type_attr(), Some("b"));
    }

    #[test]
    fn test_formula_has_no_type_attr() {
        // A `str` tag would force numeric formula results to text.
        assert_eq!(CellType::Formula.xml_type_attr(), None);
    }

    #[test]
    fn test_is_numeric() {
        assert!(CellType::Numeric.is_numeric());
        assert!(CellType::Boolean.is_numeric());
        assert!(!CellType::String.is_numeric());
        assert!(!CellType::Formula.is_numeric());
    }
}
