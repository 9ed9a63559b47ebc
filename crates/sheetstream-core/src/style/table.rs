//! Style table: hands out [`StyleRef`]s and resolves them

use super::{StreamStyle, StyleRef};
use crate::error::{Error, Result};
use ahash::AHashMap;

/// Interning table for [`StreamStyle`]s
///
/// Every table starts with the default styles at the positions named by the
/// `DEFAULT_*_STYLE` constants. Registering an identical style twice returns
/// the same ref.
#[derive(Debug)]
pub struct StyleTable {
    styles: Vec<StreamStyle>,
    index_map: AHashMap<StyleKey, u32>,
}

/// Hash of a style, used for lookup only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StyleKey(u64);

impl StyleKey {
    fn from_style(style: &StreamStyle) -> Self {
        use std::hash::{Hash, Hasher};
        let mut hasher = ahash::AHasher::default();
        style.hash(&mut hasher);
        StyleKey(hasher.finish())
    }
}

impl StyleTable {
    /// Create a table holding only the default styles
    pub fn new() -> Self {
        let defaults = StreamStyle::defaults();
        let mut table = Self {
            styles: Vec::with_capacity(defaults.len() * 2),
            index_map: AHashMap::with_capacity(defaults.len() * 2),
        };
        for style in defaults {
            let key = StyleKey::from_style(&style);
            table.push(key, style);
        }
        table
    }

    /// Register a style, returning its ref
    ///
    /// If an identical style is already registered, its existing ref is
    /// returned.
    pub fn intern(&mut self, style: StreamStyle) -> StyleRef {
        let key = StyleKey::from_style(&style);

        if let Some(&idx) = self.index_map.get(&key) {
            // Hash collision check
            if self.styles[idx as usize] == style {
                return StyleRef::new(idx);
            }
        }

        let style_ref = self.push(key, style);
        log::debug!("registered stream style {}", style_ref);
        style_ref
    }

    fn push(&mut self, key: StyleKey, style: StreamStyle) -> StyleRef {
        let idx = self.styles.len() as u32;
        // Keep the first index for a key; a colliding style is still
        // reachable through `get`.
        self.index_map.entry(key).or_insert(idx);
        self.styles.push(style);
        StyleRef::new(idx)
    }

    /// Look up a style by ref
    pub fn get(&self, style_ref: StyleRef) -> Option<&StreamStyle> {
        self.styles.get(style_ref.index() as usize)
    }

    /// Look up a style by ref, failing for refs this table did not issue
    pub fn resolve(&self, style_ref: StyleRef) -> Result<&StreamStyle> {
        self.get(style_ref)
            .ok_or(Error::UnknownStyle(style_ref.index()))
    }

    /// Number of registered styles, defaults included
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Always false: the defaults are registered on creation
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterate over all styles with their refs, in ref order
    pub fn iter(&self) -> impl Iterator<Item = (StyleRef, &StreamStyle)> {
        self.styles
            .iter()
            .enumerate()
            .map(|(i, s)| (StyleRef::new(i as u32), s))
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{
        Color, NumberFormat, DEFAULT_DATE_STYLE, DEFAULT_INTEGER_STYLE, DEFAULT_STRING_STYLE,
        DEFAULT_UNDERLINED_STRING_STYLE,
    };

    #[test]
    fn test_defaults_are_preregistered() {
        let table = StyleTable::new();
        assert_eq!(table.len(), 7);
        assert_eq!(table.get(DEFAULT_STRING_STYLE), Some(&StreamStyle::default()));
        assert_eq!(
            table.get(DEFAULT_INTEGER_STYLE).map(|s| &s.number_format),
            Some(&NumberFormat::integer())
        );
        assert_eq!(
            table.get(DEFAULT_DATE_STYLE).map(|s| &s.number_format),
            Some(&NumberFormat::date())
        );
    }

    #[test]
    fn test_interning_a_default_returns_its_constant() {
        let mut table = StyleTable::new();
        let bold = table.intern(StreamStyle::new().bold(true));
        assert_eq!(bold, crate::style::DEFAULT_BOLD_STRING_STYLE);
        assert_eq!(table.len(), 7);
    }

    #[test]
    fn test_deduplication() {
        let mut table = StyleTable::new();

        let a = table.intern(StreamStyle::new().fill_color(Color::RED));
        let b = table.intern(StreamStyle::new().fill_color(Color::RED));
        let c = table.intern(StreamStyle::new().font_size(14.0));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a > DEFAULT_UNDERLINED_STRING_STYLE);
        assert_eq!(table.len(), 9);
    }

    #[test]
    fn test_resolve_unknown_ref() {
        let table = StyleTable::new();
        assert_eq!(
            table.resolve(StyleRef::new(42)),
            Err(Error::UnknownStyle(42))
        );
        assert!(table.resolve(DEFAULT_STRING_STYLE).is_ok());
    }

    #[test]
    fn test_iter_in_ref_order() {
        let mut table = StyleTable::new();
        let custom = table.intern(StreamStyle::new().italic(true).bold(true));

        let refs: Vec<StyleRef> = table.iter().map(|(r, _)| r).collect();
        assert_eq!(refs.len(), table.len());
        assert_eq!(refs.last(), Some(&custom));
        assert!(!table.is_empty());
    }
}
