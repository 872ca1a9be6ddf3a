#![forbid(unsafe_code)]

//! Width selector state for bitwidth.
//!
//! Nothing here draws. A view owns a [`selector::WidthSelectionModel`], renders
//! [`choices`](selector::WidthSelectionModel::choices) with the
//! [`current`](selector::WidthSelectionModel::current) entry highlighted,
//! forwards user input as [`edit::SelectorEvent`]s, and repaints when a
//! subscribed callback reports a [`selector::SelectionChange`].

pub mod attribute;
pub mod choices;
pub mod edit;
pub mod observe;
pub mod selector;

pub use attribute::WidthAttribute;
pub use choices::FixedChoices;
pub use edit::{EditState, SelectorEvent};
pub use observe::Subscription;
pub use selector::{SelectionAction, SelectionChange, SelectionInput, WidthSelectionModel};
