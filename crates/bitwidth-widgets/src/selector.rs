#![forbid(unsafe_code)]

//! Width selection model.
//!
//! [`WidthSelectionModel`] is the state behind an editable width drop-down.
//! It owns the visible list and the current width, resolves typed text or a
//! picked width into a concrete [`BitWidth`], and remembers a short history of
//! custom (non-listed) widths.
//!
//! # Visible list
//!
//! ```text
//! [pinned]  [custom history, most recent first]  [fixed choices, ascending]
//! ```
//!
//! The pinned entry is the editor's initial width when it is non-standard and
//! not otherwise listed; it is never evicted. Custom widths enter directly
//! after it and the oldest one falls off once the history is full.
//!
//! # Resolution
//!
//! Out-of-range input never fails: widths above the range select the last
//! entry, zero or negative text selects the smallest fixed choice, and text
//! that is not an integer is ignored.
//!
//! # Example
//!
//! ```
//! use bitwidth_core::BitWidth;
//! use bitwidth_widgets::selector::WidthSelectionModel;
//!
//! let mut model = WidthSelectionModel::new(64, BitWidth::new(8));
//! assert_eq!(model.set_selection("13"), BitWidth::new(13));
//! assert_eq!(model.choice_at(0), Some(BitWidth::new(13)));
//! assert_eq!(model.set_selection("1000"), BitWidth::new(64));
//! ```

use std::collections::VecDeque;

use bitwidth_core::{BitWidth, WidthConfig};

use crate::choices::FixedChoices;
use crate::edit::EditState;
use crate::observe::{Subscribers, Subscription};

/// A selection request: a width picked from the list, or typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionInput<'a> {
    Width(BitWidth),
    Text(&'a str),
}

impl From<BitWidth> for SelectionInput<'_> {
    fn from(width: BitWidth) -> Self {
        Self::Width(width)
    }
}

impl<'a> From<&'a str> for SelectionInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for SelectionInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

/// How a selection was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionAction {
    /// The width was already in the visible list.
    Picked,
    /// A custom width was added to the history.
    Inserted,
    /// The input was above the range; the last entry was selected.
    ClampedHigh,
    /// The input was zero or negative; the smallest fixed choice was selected.
    ClampedLow,
}

impl SelectionAction {
    /// Stable name used in log events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Picked => "picked",
            Self::Inserted => "inserted",
            Self::ClampedHigh => "clamped_high",
            Self::ClampedLow => "clamped_low",
        }
    }
}

/// Notification sent to subscribers after a resolution that changed the
/// current width or the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: BitWidth,
    pub current: BitWidth,
    pub action: SelectionAction,
    /// Custom width added to the list, if any.
    pub inserted: Option<BitWidth>,
    /// Custom width pushed out of the history, if any.
    pub evicted: Option<BitWidth>,
}

/// Selector state for one editing session.
#[derive(Debug)]
pub struct WidthSelectionModel {
    fixed: FixedChoices,
    /// Non-standard initial width, listed first and never evicted.
    pinned: Option<BitWidth>,
    /// Custom widths, most recent first.
    history: VecDeque<BitWidth>,
    history_limit: usize,
    current: BitWidth,
    pub(crate) edit: EditState,
    subscribers: Subscribers<SelectionChange>,
}

impl WidthSelectionModel {
    /// A model over `1..=max_width` with default thresholds, selecting `initial`.
    #[must_use]
    pub fn new(max_width: u32, initial: BitWidth) -> Self {
        Self::with_config(max_width, initial, &WidthConfig::default())
    }

    /// A model over `1..=max_width` using `config` for thresholds and history size.
    #[must_use]
    pub fn with_config(max_width: u32, initial: BitWidth, config: &WidthConfig) -> Self {
        Self::with_choices(
            FixedChoices::with_config(1, max_width, config),
            initial,
            config.history_limit,
        )
    }

    /// A model over an explicit choice list.
    ///
    /// `history_limit` is raised to at least 1.
    #[must_use]
    pub fn with_choices(fixed: FixedChoices, initial: BitWidth, history_limit: usize) -> Self {
        let pinned = (!initial.is_standard()
            && !fixed.contains(initial)
            && initial <= fixed.upper_bound())
        .then_some(initial);
        let history_limit = history_limit.max(1);

        let mut model = Self {
            fixed,
            pinned,
            history: VecDeque::with_capacity(history_limit + 1),
            history_limit,
            current: initial,
            edit: EditState::Idle,
            subscribers: Subscribers::default(),
        };
        model.set_selection(initial);
        model
    }

    /// The selected width.
    #[inline]
    #[must_use]
    pub fn current(&self) -> BitWidth {
        self.current
    }

    /// Resolve `input` and make the result current.
    ///
    /// Never fails; see the module docs for the clamping rules. Text is
    /// trimmed before parsing, so `" 13 "` selects 13, and integers too large
    /// for the range clamp to the last entry instead of being ignored.
    pub fn set_selection<'a>(&mut self, input: impl Into<SelectionInput<'a>>) -> BitWidth {
        match input.into() {
            SelectionInput::Width(width) => self.select_width(width),
            SelectionInput::Text(text) => self.select_text(text),
        }
    }

    fn select_text(&mut self, text: &str) -> BitWidth {
        let Ok(value) = text.trim().parse::<i64>() else {
            #[cfg(feature = "tracing")]
            tracing::trace!(message = "width.selection.ignored", text);
            return self.current;
        };

        if value > i64::from(self.fixed.upper_bound().width()) {
            self.apply(self.last(), SelectionAction::ClampedHigh, None, None)
        } else if value <= 0 {
            self.apply(self.fixed.smallest(), SelectionAction::ClampedLow, None, None)
        } else {
            // 0 < value <= upper bound <= MAX_WIDTH
            self.select_width(BitWidth::new(value as u32))
        }
    }

    fn select_width(&mut self, width: BitWidth) -> BitWidth {
        if self.contains(width) {
            return self.apply(width, SelectionAction::Picked, None, None);
        }
        if width > self.fixed.upper_bound() {
            return self.apply(self.last(), SelectionAction::ClampedHigh, None, None);
        }
        if width.is_unknown() {
            return self.apply(self.fixed.smallest(), SelectionAction::ClampedLow, None, None);
        }

        self.history.push_front(width);
        let evicted = if self.history.len() > self.history_limit {
            self.history.pop_back()
        } else {
            None
        };
        #[cfg(feature = "tracing")]
        Self::log_eviction(evicted);
        self.apply(width, SelectionAction::Inserted, Some(width), evicted)
    }

    fn apply(
        &mut self,
        width: BitWidth,
        action: SelectionAction,
        inserted: Option<BitWidth>,
        evicted: Option<BitWidth>,
    ) -> BitWidth {
        let previous = std::mem::replace(&mut self.current, width);
        #[cfg(feature = "tracing")]
        self.log_selection_change(action);
        if previous != width || inserted.is_some() {
            self.subscribers.notify(&SelectionChange {
                previous,
                current: width,
                action,
                inserted,
                evicted,
            });
        }
        width
    }

    #[cfg(feature = "tracing")]
    fn log_selection_change(&self, action: SelectionAction) {
        tracing::debug!(
            message = "width.selection",
            action = action.as_str(),
            width = self.current.width(),
            custom_count = self.history.len()
        );
    }

    #[cfg(feature = "tracing")]
    fn log_eviction(evicted: Option<BitWidth>) {
        if let Some(evicted) = evicted {
            tracing::debug!(message = "width.history.evict", width = evicted.width());
        }
    }

    /// The last visible entry: the largest fixed choice.
    fn last(&self) -> BitWidth {
        self.fixed.largest()
    }

    /// The visible list, top to bottom.
    pub fn choices(&self) -> impl Iterator<Item = BitWidth> + '_ {
        self.pinned
            .into_iter()
            .chain(self.history.iter().copied())
            .chain(self.fixed.iter())
    }

    /// Number of visible entries.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.pinned.is_some()) + self.history.len() + self.fixed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `width` is in the visible list.
    #[must_use]
    pub fn contains(&self, width: BitWidth) -> bool {
        self.pinned == Some(width) || self.history.contains(&width) || self.fixed.contains(width)
    }

    /// Position of `width` in the visible list.
    #[must_use]
    pub fn index_of(&self, width: BitWidth) -> Option<usize> {
        self.choices().position(|w| w == width)
    }

    /// Position of the current width in the visible list.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.index_of(self.current)
    }

    /// The visible entry at `index`.
    #[must_use]
    pub fn choice_at(&self, index: usize) -> Option<BitWidth> {
        self.choices().nth(index)
    }

    /// Remembered custom widths, most recent first.
    pub fn custom_history(&self) -> impl ExactSizeIterator<Item = BitWidth> + '_ {
        self.history.iter().copied()
    }

    #[must_use]
    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    #[must_use]
    pub fn pinned(&self) -> Option<BitWidth> {
        self.pinned
    }

    #[must_use]
    pub fn fixed_choices(&self) -> &FixedChoices {
        &self.fixed
    }

    /// The largest width this selector accepts without clamping.
    #[must_use]
    pub fn max_width(&self) -> BitWidth {
        self.fixed.upper_bound()
    }

    /// Register a callback for [`SelectionChange`]s.
    pub fn subscribe(&mut self, callback: impl Fn(&SelectionChange) + 'static) -> Subscription {
        self.subscribers.subscribe(callback)
    }
}
