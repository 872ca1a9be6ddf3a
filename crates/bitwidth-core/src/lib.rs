#![forbid(unsafe_code)]

//! Core: bit-width values, the canonical width registry, and configuration.
//!
//! # Role in bitwidth
//! `bitwidth-core` owns the value type every other crate talks about. It has
//! no notion of editors or lists; selectors live in `bitwidth-widgets`.
//!
//! # Primary responsibilities
//! - **BitWidth**: immutable width value with mask arithmetic and parsing.
//! - **WidthCache**: once-initialized registry of canonical widths.
//! - **WidthConfig**: tunables, loadable from TOML/JSON or the environment.
//! - **Logging**: tracing re-exports with no-op fallbacks.

pub mod cache;
pub mod config;
pub mod logging;
pub mod width;

pub use cache::WidthCache;
pub use config::WidthConfig;
pub use width::{BitWidth, MAX_WIDTH, MIN_WIDTH, WidthError};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
