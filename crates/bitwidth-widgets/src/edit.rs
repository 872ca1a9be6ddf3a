#![forbid(unsafe_code)]

//! Editing events for a width selector.
//!
//! The selector is either [`EditState::Idle`] or [`EditState::Editing`] with a
//! text buffer. Typing moves it into `Editing`; `Commit` resolves the buffer
//! through [`WidthSelectionModel::set_selection`] and returns to `Idle`;
//! `Cancel` drops the buffer. Picking a list entry also abandons any pending
//! text. Neither state outlives the editing session.

use bitwidth_core::BitWidth;

use crate::selector::WidthSelectionModel;

/// Whether the user has uncommitted text in the selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing {
        text: String,
    },
}

impl EditState {
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// The pending text, if editing.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Editing { text } => Some(text),
        }
    }
}

/// Input forwarded to the selector by its view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEvent {
    /// A typed character.
    Insert(char),
    /// Delete the last typed character.
    Backspace,
    /// Replace the pending text wholesale (paste, programmatic edit).
    SetText(String),
    /// Confirm the pending text.
    Commit,
    /// Abandon the pending text.
    Cancel,
    /// A width chosen from the list.
    Pick(BitWidth),
    /// A list row chosen by position.
    PickIndex(usize),
}

impl WidthSelectionModel {
    /// Current edit state.
    #[must_use]
    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    /// Apply one selector event.
    ///
    /// Returns `true` if the edit buffer, the selection, or the list changed.
    pub fn handle_event(&mut self, event: SelectorEvent) -> bool {
        match event {
            SelectorEvent::Insert(ch) if ch.is_control() => false,
            SelectorEvent::Insert(ch) => {
                if let EditState::Editing { text } = &mut self.edit {
                    text.push(ch);
                } else {
                    self.edit = EditState::Editing {
                        text: ch.to_string(),
                    };
                }
                true
            }
            SelectorEvent::Backspace => match &mut self.edit {
                EditState::Editing { text } => text.pop().is_some(),
                EditState::Idle => false,
            },
            SelectorEvent::SetText(text) => {
                let changed = self.edit.text() != Some(text.as_str());
                self.edit = EditState::Editing { text };
                changed
            }
            SelectorEvent::Commit => match std::mem::take(&mut self.edit) {
                EditState::Editing { text } => {
                    self.resolve(|model| {
                        model.set_selection(text.as_str());
                    });
                    true
                }
                EditState::Idle => false,
            },
            SelectorEvent::Cancel => std::mem::take(&mut self.edit).is_editing(),
            SelectorEvent::Pick(width) => {
                let was_editing = std::mem::take(&mut self.edit).is_editing();
                self.resolve(|model| {
                    model.set_selection(width);
                }) || was_editing
            }
            SelectorEvent::PickIndex(index) => {
                let Some(width) = self.choice_at(index) else {
                    return false;
                };
                self.handle_event(SelectorEvent::Pick(width))
            }
        }
    }

    /// Run `f` and report whether the selection or the list changed.
    fn resolve(&mut self, f: impl FnOnce(&mut Self)) -> bool {
        let before = (self.current(), self.len(), self.custom_history().next());
        f(self);
        before != (self.current(), self.len(), self.custom_history().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(width: u32) -> BitWidth {
        BitWidth::new(width)
    }

    fn type_text(model: &mut WidthSelectionModel, text: &str) {
        for ch in text.chars() {
            model.handle_event(SelectorEvent::Insert(ch));
        }
    }

    #[test]
    fn typing_enters_editing() {
        let mut model = WidthSelectionModel::new(64, w(8));
        assert_eq!(model.edit_state(), &EditState::Idle);
        type_text(&mut model, "13");
        assert_eq!(model.edit_state().text(), Some("13"));
        assert_eq!(model.current(), w(8));
    }

    #[test]
    fn commit_resolves_and_returns_to_idle() {
        let mut model = WidthSelectionModel::new(64, w(8));
        type_text(&mut model, "13");
        assert!(model.handle_event(SelectorEvent::Commit));
        assert_eq!(model.current(), w(13));
        assert!(!model.edit_state().is_editing());
        assert!(!model.handle_event(SelectorEvent::Commit));
    }

    #[test]
    fn commit_of_garbage_is_a_no_op_selection() {
        let mut model = WidthSelectionModel::new(64, w(16));
        type_text(&mut model, "x");
        assert!(model.handle_event(SelectorEvent::Commit));
        assert_eq!(model.current(), w(16));
        assert_eq!(model.edit_state(), &EditState::Idle);
    }

    #[test]
    fn backspace_edits_buffer() {
        let mut model = WidthSelectionModel::new(64, w(8));
        assert!(!model.handle_event(SelectorEvent::Backspace));
        type_text(&mut model, "130");
        assert!(model.handle_event(SelectorEvent::Backspace));
        assert_eq!(model.edit_state().text(), Some("13"));
    }

    #[test]
    fn control_chars_are_ignored() {
        let mut model = WidthSelectionModel::new(64, w(8));
        assert!(!model.handle_event(SelectorEvent::Insert('\n')));
        assert_eq!(model.edit_state(), &EditState::Idle);
    }

    #[test]
    fn cancel_discards_text() {
        let mut model = WidthSelectionModel::new(64, w(8));
        model.handle_event(SelectorEvent::SetText("29".to_string()));
        assert!(model.handle_event(SelectorEvent::Cancel));
        assert_eq!(model.current(), w(8));
        assert!(!model.handle_event(SelectorEvent::Cancel));
    }

    #[test]
    fn pick_abandons_pending_text() {
        let mut model = WidthSelectionModel::new(64, w(8));
        type_text(&mut model, "5");
        assert!(model.handle_event(SelectorEvent::Pick(w(8))));
        assert_eq!(model.current(), w(8));
        assert_eq!(model.edit_state(), &EditState::Idle);
    }

    #[test]
    fn pick_same_width_reports_no_change() {
        let mut model = WidthSelectionModel::new(64, w(8));
        assert!(!model.handle_event(SelectorEvent::Pick(w(8))));
        assert!(model.handle_event(SelectorEvent::Pick(w(32))));
    }

    #[test]
    fn pick_index_uses_visible_order() {
        let mut model = WidthSelectionModel::new(64, w(8));
        model.set_selection("13");
        assert!(model.handle_event(SelectorEvent::PickIndex(1)));
        assert_eq!(model.current(), w(1));
        assert!(model.handle_event(SelectorEvent::PickIndex(0)));
        assert_eq!(model.current(), w(13));
        assert!(!model.handle_event(SelectorEvent::PickIndex(99)));
    }
}
