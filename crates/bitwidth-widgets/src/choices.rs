#![forbid(unsafe_code)]

//! Fixed width choices offered by a selector.
//!
//! Small ranges are listed densely. Once a range reaches the sparse threshold
//! (8 widths by default) only its first width and every 8th width after it are
//! kept, so `1..=64` becomes `1, 8, 16, ..., 64`.

use bitwidth_core::{BitWidth, MAX_WIDTH, WidthConfig};

/// The immutable, ascending list of standard widths for one selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedChoices {
    widths: Vec<BitWidth>,
    /// Top of the range the choices were drawn from.
    upper: BitWidth,
    sparse: bool,
}

impl FixedChoices {
    /// Choices for `min..=max` with the default thresholds.
    #[must_use]
    pub fn range(min: u32, max: u32) -> Self {
        Self::with_config(min, max, &WidthConfig::default())
    }

    /// Choices for `min..=max` with thresholds taken from `config`.
    ///
    /// `min` is raised to at least 1, `max` is capped at [`MAX_WIDTH`] and
    /// raised to at least `min`.
    #[must_use]
    pub fn with_config(min: u32, max: u32, config: &WidthConfig) -> Self {
        let min = min.clamp(1, MAX_WIDTH);
        let max = max.clamp(min, MAX_WIDTH);
        let count = (max - min + 1) as usize;

        if count < config.sparse_threshold.max(1) {
            return Self {
                widths: (min..=max).map(BitWidth::new).collect(),
                upper: BitWidth::new(max),
                sparse: false,
            };
        }

        let step = config.sparse_step.max(1);
        let mut widths = vec![BitWidth::new(min)];
        widths.extend(
            (min.saturating_add(step - 1)..=max)
                .step_by(step as usize)
                .filter(|&w| w != min)
                .map(BitWidth::new),
        );
        Self {
            widths,
            upper: BitWidth::new(max),
            sparse: true,
        }
    }

    /// Whether the range was sparsified.
    #[inline]
    #[must_use]
    pub const fn is_sparse(&self) -> bool {
        self.sparse
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    #[must_use]
    pub fn contains(&self, width: BitWidth) -> bool {
        self.widths.binary_search(&width).is_ok()
    }

    /// The smallest choice.
    #[must_use]
    pub fn smallest(&self) -> BitWidth {
        self.widths.first().copied().unwrap_or(BitWidth::ONE)
    }

    /// The largest choice.
    #[must_use]
    pub fn largest(&self) -> BitWidth {
        self.widths.last().copied().unwrap_or(BitWidth::ONE)
    }

    /// The top of the underlying range.
    ///
    /// Equal to [`largest`](Self::largest) unless sparsification skipped the
    /// last widths of the range (`1..=13` lists `1, 8` but accepts up to 13).
    #[inline]
    #[must_use]
    pub const fn upper_bound(&self) -> BitWidth {
        self.upper
    }

    #[must_use]
    pub fn as_slice(&self) -> &[BitWidth] {
        &self.widths
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = BitWidth> + '_ {
        self.widths.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(choices: &FixedChoices) -> Vec<u32> {
        choices.iter().map(BitWidth::width).collect()
    }

    #[test]
    fn full_range_is_sparsified() {
        let choices = FixedChoices::range(1, 64);
        assert!(choices.is_sparse());
        assert_eq!(widths(&choices), vec![1, 8, 16, 24, 32, 40, 48, 56, 64]);
    }

    #[test]
    fn small_range_is_dense() {
        let choices = FixedChoices::range(1, 7);
        assert!(!choices.is_sparse());
        assert_eq!(widths(&choices), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let choices = FixedChoices::range(1, 8);
        assert!(choices.is_sparse());
        assert_eq!(widths(&choices), vec![1, 8]);
    }

    #[test]
    fn sparse_range_stops_at_max() {
        let choices = FixedChoices::range(1, 20);
        assert_eq!(widths(&choices), vec![1, 8, 16]);
        assert_eq!(choices.largest(), BitWidth::new(16));
        assert_eq!(choices.upper_bound(), BitWidth::new(20));
    }

    #[test]
    fn offset_range_counts_from_min() {
        assert_eq!(widths(&FixedChoices::range(4, 30)), vec![4, 11, 19, 27]);
        assert_eq!(widths(&FixedChoices::range(3, 5)), vec![3, 4, 5]);
    }

    #[test]
    fn bounds_are_clamped() {
        assert_eq!(widths(&FixedChoices::range(0, 3)), vec![1, 2, 3]);
        assert_eq!(FixedChoices::range(1, 500).largest(), BitWidth::new(64));
        assert_eq!(widths(&FixedChoices::range(9, 2)), vec![9]);
    }

    #[test]
    fn config_controls_thresholds() {
        let config = WidthConfig {
            sparse_threshold: 4,
            sparse_step: 4,
            ..WidthConfig::default()
        };
        let choices = FixedChoices::with_config(1, 12, &config);
        assert_eq!(widths(&choices), vec![1, 4, 8, 12]);
    }

    #[test]
    fn step_of_one_does_not_repeat_min() {
        let config = WidthConfig {
            sparse_step: 1,
            ..WidthConfig::default()
        };
        let choices = FixedChoices::with_config(1, 10, &config);
        assert_eq!(widths(&choices), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn oversized_step_keeps_only_min() {
        let config = WidthConfig {
            sparse_step: u32::MAX,
            ..WidthConfig::default()
        };
        let choices = FixedChoices::with_config(1, 64, &config);
        assert_eq!(widths(&choices), vec![1]);
        assert_eq!(choices.upper_bound(), BitWidth::new(64));
    }

    #[test]
    fn contains_and_extremes() {
        let choices = FixedChoices::range(1, 64);
        assert!(choices.contains(BitWidth::new(24)));
        assert!(!choices.contains(BitWidth::new(13)));
        assert_eq!(choices.smallest(), BitWidth::ONE);
        assert_eq!(choices.largest(), BitWidth::new(64));
    }
}
