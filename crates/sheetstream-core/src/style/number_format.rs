//! Number format types

/// Number format applied to a numeric payload
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberFormat {
    /// General format (default)
    #[default]
    General,

    /// Built-in format by ID
    BuiltIn(u32),

    /// Custom format string
    Custom(String),
}

impl NumberFormat {
    /// 0 - General
    pub const ID_GENERAL: u32 = 0;
    /// 1 - 0
    pub const ID_INTEGER: u32 = 1;
    /// 2 - 0.00
    pub const ID_DECIMAL: u32 = 2;
    /// 14 - mm-dd-yy
    ///
    /// Readers substitute their locale's short-date pattern (dd-mm-yyyy in
    /// many), so the stored pattern is only the nominal one.
    pub const ID_DATE: u32 = 14;
    /// 22 - m/d/yy h:mm
    pub const ID_DATETIME: u32 = 22;
    /// 49 - @
    pub const ID_TEXT: u32 = 49;

    /// Integer format (0)
    pub fn integer() -> Self {
        NumberFormat::BuiltIn(Self::ID_INTEGER)
    }

    /// Decimal format (0.00)
    pub fn decimal() -> Self {
        NumberFormat::BuiltIn(Self::ID_DECIMAL)
    }

    /// Short date
    pub fn date() -> Self {
        NumberFormat::BuiltIn(Self::ID_DATE)
    }

    /// Date and time
    pub fn datetime() -> Self {
        NumberFormat::BuiltIn(Self::ID_DATETIME)
    }

    /// Text format (@)
    pub fn text() -> Self {
        NumberFormat::BuiltIn(Self::ID_TEXT)
    }

    /// Custom format string, e.g. `"dd-mm-yyyy"`
    pub fn custom<S: Into<String>>(format: S) -> Self {
        NumberFormat::Custom(format.into())
    }

    /// The `numFmtId` a serializer writes for this format.
    ///
    /// Custom formats have no built-in ID; the style-table writer assigns one.
    pub fn builtin_id(&self) -> Option<u32> {
        match self {
            NumberFormat::General => Some(Self::ID_GENERAL),
            NumberFormat::BuiltIn(id) => Some(*id),
            NumberFormat::Custom(_) => None,
        }
    }

    /// Get the format string
    pub fn format_string(&self) -> &str {
        match self {
            NumberFormat::General => "General",
            NumberFormat::BuiltIn(id) => match id {
                1 => "0",
                2 => "0.00",
                14 => "mm-dd-yy",
                22 => "m/d/yy h:mm",
                49 => "@",
                _ => "General",
            },
            NumberFormat::Custom(s) => s,
        }
    }
}
