#![no_main]

use arbitrary::Arbitrary;
use bitwidth_core::BitWidth;
use bitwidth_widgets::{FixedChoices, SelectorEvent, WidthSelectionModel};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzEvent {
    Insert(char),
    Backspace,
    SetText(String),
    Commit,
    Cancel,
    Pick(u16),
    PickIndex(u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    max: u8,
    initial: u16,
    limit: u8,
    events: Vec<FuzzEvent>,
}

fuzz_target!(|input: Input| {
    let fixed = FixedChoices::range(1, u32::from(input.max));
    let limit = usize::from(input.limit % 8);
    let mut model = WidthSelectionModel::with_choices(
        fixed.clone(),
        BitWidth::new(u32::from(input.initial)),
        limit,
    );

    for event in input.events.into_iter().take(256) {
        let event = match event {
            FuzzEvent::Insert(ch) => SelectorEvent::Insert(ch),
            FuzzEvent::Backspace => SelectorEvent::Backspace,
            FuzzEvent::SetText(text) => SelectorEvent::SetText(text),
            FuzzEvent::Commit => SelectorEvent::Commit,
            FuzzEvent::Cancel => SelectorEvent::Cancel,
            FuzzEvent::Pick(w) => SelectorEvent::Pick(BitWidth::new(u32::from(w))),
            FuzzEvent::PickIndex(i) => SelectorEvent::PickIndex(usize::from(i)),
        };
        model.handle_event(event);

        assert!(model.custom_history().len() <= model.history_limit());
        assert!(model.selected_index().is_some(), "current width is not listed");
        assert!(model.current() <= fixed.upper_bound());
        for width in model.custom_history() {
            assert!(!fixed.contains(width));
        }
    }
});
