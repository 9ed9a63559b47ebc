//! Cell styling for streamed cells
//!
//! A streamed [`Cell`](crate::Cell) never carries formatting itself; it holds
//! a [`StyleRef`], an opaque token issued by a [`StyleTable`]. The table
//! resolves the token to a [`StreamStyle`] when the sheet is serialized.
//!
//! The default styles used by the cell factories are registered at fixed
//! positions in every table, so their refs are plain constants.

mod color;
mod number_format;
mod table;

use std::fmt;
use std::hash::{Hash, Hasher};

pub use color::Color;
pub use number_format::NumberFormat;
pub use table::StyleTable;

/// Opaque reference into a [`StyleTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleRef(u32);

impl StyleRef {
    pub(crate) const fn new(index: u32) -> Self {
        StyleRef(index)
    }

    /// Position in the style table, i.e. the `s="..."` cell attribute
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StyleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Plain string, General number format
pub const DEFAULT_STRING_STYLE: StyleRef = StyleRef::new(0);
/// Integer, number format `0`
pub const DEFAULT_INTEGER_STYLE: StyleRef = StyleRef::new(1);
/// Date, built-in short date format
pub const DEFAULT_DATE_STYLE: StyleRef = StyleRef::new(2);
/// Decimal, number format `0.00`
pub const DEFAULT_DECIMAL_STYLE: StyleRef = StyleRef::new(3);
/// Bold string
pub const DEFAULT_BOLD_STRING_STYLE: StyleRef = StyleRef::new(4);
/// Italic string
pub const DEFAULT_ITALIC_STRING_STYLE: StyleRef = StyleRef::new(5);
/// Single-underlined string
pub const DEFAULT_UNDERLINED_STRING_STYLE: StyleRef = StyleRef::new(6);

/// Underline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    #[default]
    General,
    Left,
    Center,
    Right,
    Fill,
    Justify,
}

/// Formatting definition a [`StyleRef`] resolves to
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamStyle {
    /// Number format
    pub number_format: NumberFormat,
    /// Font family name
    pub font_name: String,
    /// Font size in points
    pub font_size: f64,
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Underline style
    pub underline: Underline,
    /// Font color
    pub font_color: Color,
    /// Solid background fill, if any
    pub fill_color: Option<Color>,
    /// Horizontal alignment
    pub horizontal_alignment: HorizontalAlignment,
    /// Wrap text
    pub wrap_text: bool,
}

impl Default for StreamStyle {
    fn default() -> Self {
        Self {
            number_format: NumberFormat::General,
            font_name: "Calibri".to_string(),
            font_size: 11.0,
            bold: false,
            italic: false,
            underline: Underline::None,
            font_color: Color::Auto,
            fill_color: None,
            horizontal_alignment: HorizontalAlignment::General,
            wrap_text: false,
        }
    }
}

impl StreamStyle {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number format
    pub fn number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set underline
    pub fn underline(mut self, underline: Underline) -> Self {
        self.underline = underline;
        self
    }

    /// Set font name
    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font_name = name.into();
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font_color = color;
        self
    }

    /// Set a solid fill color
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal_alignment = align;
        self
    }

    /// Enable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }

    /// The styles every [`StyleTable`] starts with, in ref order
    pub(crate) fn defaults() -> [StreamStyle; 7] {
        [
            StreamStyle::new(),
            StreamStyle::new().number_format(NumberFormat::integer()),
            StreamStyle::new().number_format(NumberFormat::date()),
            StreamStyle::new().number_format(NumberFormat::decimal()),
            StreamStyle::new().bold(true),
            StreamStyle::new().italic(true),
            StreamStyle::new().underline(Underline::Single),
        ]
    }
}

impl Hash for StreamStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number_format.hash(state);
        self.font_name.hash(state);
        self.font_size.to_bits().hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.underline.hash(state);
        self.font_color.hash(state);
        self.fill_color.hash(state);
        self.horizontal_alignment.hash(state);
        self.wrap_text.hash(state);
    }
}

impl Eq for StreamStyle {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_refs_are_distinct_and_ordered() {
        let refs = [
            DEFAULT_STRING_STYLE,
            DEFAULT_INTEGER_STYLE,
            DEFAULT_DATE_STYLE,
            DEFAULT_DECIMAL_STYLE,
            DEFAULT_BOLD_STRING_STYLE,
            DEFAULT_ITALIC_STRING_STYLE,
            DEFAULT_UNDERLINED_STRING_STYLE,
        ];
        for (i, r) in refs.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
        }
        assert_eq!(refs.len(), StreamStyle::defaults().len());
    }

    #[test]
    fn test_builder() {
        let style = StreamStyle::new()
            .bold(true)
            .font_size(14.0)
            .fill_color(Color::RED)
            .horizontal_alignment(HorizontalAlignment::Center);

        assert!(style.bold);
        assert!(!style.italic);
        assert_eq!(style.font_size, 14.0);
        assert_eq!(style.fill_color, Some(Color::RED));
        assert_eq!(style.horizontal_alignment, HorizontalAlignment::Center);
        assert_eq!(style.number_format, NumberFormat::General);
    }
}
