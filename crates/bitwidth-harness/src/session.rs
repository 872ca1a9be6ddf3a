//! One editing session: text lines in, rendered list out.

use bitwidth::{BitWidth, SelectorEvent, WidthAttribute, WidthSelectionModel};

/// Commands recognized on a line; anything else is typed into the selector.
const PICK: &str = ":pick ";
const QUIT: &str = ":quit";

pub struct Session {
    model: WidthSelectionModel,
}

impl Session {
    pub fn open(attr: &WidthAttribute, initial: BitWidth) -> Self {
        Self {
            model: attr.editor(initial),
        }
    }

    pub fn model(&self) -> &WidthSelectionModel {
        &self.model
    }

    /// Apply one input line. Returns `false` when the session should end.
    pub fn apply_line(&mut self, line: &str) -> bool {
        let line = line.trim_end_matches(['\r', '\n']);
        if line == QUIT {
            return false;
        }
        if let Some(index) = line.strip_prefix(PICK) {
            match index.trim().parse::<usize>() {
                Ok(index) => {
                    self.model.handle_event(SelectorEvent::PickIndex(index));
                }
                Err(_) => tracing::warn!(message = "harness.bad_pick", line),
            }
            return true;
        }
        self.model
            .handle_event(SelectorEvent::SetText(line.to_string()));
        self.model.handle_event(SelectorEvent::Commit);
        true
    }

    /// The visible list with the current entry in brackets.
    pub fn render(&self) -> String {
        let current = self.model.current();
        self.model
            .choices()
            .map(|w| {
                if w == current {
                    format!("[{w}]")
                } else {
                    w.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
