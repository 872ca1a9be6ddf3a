#![forbid(unsafe_code)]

//! bitwidth public facade crate.
//!
//! Re-exports the width value types from `bitwidth-core` and the selector
//! state from `bitwidth-widgets`, plus a prelude for day-to-day use.
//!
//! ```
//! use bitwidth::prelude::*;
//!
//! let attr = WidthAttribute::new("width");
//! let mut editor = attr.editor(BitWidth::parse("8")?);
//! editor.handle_event(SelectorEvent::SetText("13".into()));
//! editor.handle_event(SelectorEvent::Commit);
//! assert_eq!(editor.current().width(), 13);
//! # Ok::<(), bitwidth::Error>(())
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use bitwidth_core::cache::WidthCache;
pub use bitwidth_core::config::WidthConfig;
pub use bitwidth_core::width::{BitWidth, MAX_WIDTH, MIN_WIDTH, WidthError};

#[cfg(feature = "config")]
pub use bitwidth_core::config::ConfigError;

// --- Widget re-exports -----------------------------------------------------

pub use bitwidth_widgets::attribute::WidthAttribute;
pub use bitwidth_widgets::choices::FixedChoices;
pub use bitwidth_widgets::edit::{EditState, SelectorEvent};
pub use bitwidth_widgets::observe::Subscription;
pub use bitwidth_widgets::selector::{
    SelectionAction, SelectionChange, SelectionInput, WidthSelectionModel,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for bitwidth users.
#[derive(Debug)]
pub enum Error {
    /// A width could not be built or parsed.
    Width(WidthError),
    /// Configuration failed to load.
    #[cfg(feature = "config")]
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width(err) => write!(f, "{err}"),
            #[cfg(feature = "config")]
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Width(err) => Some(err),
            #[cfg(feature = "config")]
            Self::Config(err) => Some(err),
        }
    }
}

impl From<WidthError> for Error {
    fn from(err: WidthError) -> Self {
        Self::Width(err)
    }
}

#[cfg(feature = "config")]
impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for bitwidth APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BitWidth, EditState, Error, FixedChoices, Result, SelectionAction, SelectionChange,
        SelectorEvent, WidthAttribute, WidthCache, WidthConfig, WidthError, WidthSelectionModel,
    };

    pub use crate::{core, widgets};
}

pub use bitwidth_core as core;
pub use bitwidth_widgets as widgets;
