#![forbid(unsafe_code)]

//! Width-valued attribute.
//!
//! A [`WidthAttribute`] describes which widths a component property accepts
//! and opens a fresh [`WidthSelectionModel`] for every editing session.

use bitwidth_core::{BitWidth, MAX_WIDTH, MIN_WIDTH, WidthCache, WidthConfig, WidthError};

use crate::choices::FixedChoices;
use crate::selector::WidthSelectionModel;

/// A named attribute whose values are bit widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthAttribute {
    name: String,
    min: u32,
    max: u32,
    config: WidthConfig,
}

impl WidthAttribute {
    /// An attribute accepting the whole canonical range.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_range(name, MIN_WIDTH, WidthCache::global().max_width())
    }

    /// An attribute accepting `min..=max`.
    ///
    /// Both bounds are clamped into `1..=MAX_WIDTH`, and `max` is raised to at
    /// least `min`.
    #[must_use]
    pub fn with_range(name: impl Into<String>, min: u32, max: u32) -> Self {
        let min = min.clamp(MIN_WIDTH, MAX_WIDTH);
        Self {
            name: name.into(),
            min,
            max: max.clamp(min, MAX_WIDTH),
            config: WidthConfig::default(),
        }
    }

    /// Use `config` for selector thresholds and history size (builder).
    #[must_use]
    pub fn with_config(mut self, config: WidthConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The accepted range, inclusive.
    #[must_use]
    pub fn range(&self) -> (u32, u32) {
        (self.min, self.max)
    }

    /// The fixed list an editor for this attribute offers.
    #[must_use]
    pub fn choices(&self) -> FixedChoices {
        FixedChoices::with_config(self.min, self.max, &self.config)
    }

    /// Parse a stored value.
    pub fn parse(&self, text: &str) -> Result<BitWidth, WidthError> {
        BitWidth::parse(text)
    }

    /// Render a value for storage.
    #[must_use]
    pub fn format(&self, value: BitWidth) -> String {
        value.to_string()
    }

    /// Open a selector for one editing session, starting at `value`.
    #[must_use]
    pub fn editor(&self, value: BitWidth) -> WidthSelectionModel {
        WidthSelectionModel::with_choices(self.choices(), value, self.config.history_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_attribute_offers_sparse_byte_widths() {
        let attr = WidthAttribute::new("width");
        assert_eq!(attr.name(), "width");
        let widths: Vec<u32> = attr.choices().iter().map(BitWidth::width).collect();
        assert_eq!(widths.first(), Some(&1));
        assert!(widths.iter().skip(1).all(|w| w % 8 == 0 || *w == attr.range().1));
    }

    #[test]
    fn ranged_attribute_is_dense_when_small() {
        let attr = WidthAttribute::with_range("select", 1, 5);
        let widths: Vec<u32> = attr.choices().iter().map(BitWidth::width).collect();
        assert_eq!(widths, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn range_is_normalized() {
        assert_eq!(WidthAttribute::with_range("a", 0, 0).range(), (1, 1));
        assert_eq!(WidthAttribute::with_range("a", 6, 2).range(), (6, 6));
    }

    #[test]
    fn range_agrees_with_choices() {
        let attr = WidthAttribute::with_range("w", 1, 500);
        assert_eq!(attr.range(), (1, 64));
        assert_eq!(attr.choices().upper_bound().width(), attr.range().1);
        assert_eq!(WidthAttribute::with_range("w", 90, 100).range(), (64, 64));
    }

    #[test]
    fn parse_and_format() {
        let attr = WidthAttribute::new("width");
        let value = attr.parse("/12").unwrap();
        assert_eq!(value.width(), 12);
        assert_eq!(attr.format(value), "12");
        assert!(matches!(attr.parse(""), Err(WidthError::Malformed { .. })));
    }

    #[test]
    fn each_editor_is_independent() {
        let attr = WidthAttribute::with_range("width", 1, 64);
        let mut first = attr.editor(BitWidth::new(8));
        first.set_selection("13");

        let second = attr.editor(BitWidth::new(8));
        assert_eq!(second.custom_history().len(), 0);
        assert_eq!(second.current(), BitWidth::new(8));
        assert_eq!(first.current(), BitWidth::new(13));
    }

    #[test]
    fn editor_honors_configured_history() {
        let attr = WidthAttribute::with_range("width", 1, 64)
            .with_config(WidthConfig::default().with_history_limit(2));
        let mut editor = attr.editor(BitWidth::new(8));
        for text in ["3", "5", "7"] {
            editor.set_selection(text);
        }
        let history: Vec<u32> = editor.custom_history().map(BitWidth::width).collect();
        assert_eq!(history, vec![7, 5]);
    }
}
