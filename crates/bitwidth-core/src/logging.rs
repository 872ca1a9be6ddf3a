#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! With the `tracing` feature the tracing macros are re-exported at the crate
//! root; without it, same-named no-op macros take their place so call sites
//! compile either way. The `tracing-json` feature adds [`init_subscriber`] for
//! binaries that want a ready-made subscriber.

#[cfg(feature = "tracing")]
pub use tracing::{debug, error, info, trace, warn};

/// Environment variable holding the `EnvFilter` directives.
pub const LOG_ENV: &str = "BITWIDTH_LOG";

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op error macro when tracing is disabled.
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }

    /// No-op info macro when tracing is disabled.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

/// Output format for [`init_subscriber`].
#[cfg(feature = "tracing-json")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Plain,
    /// One JSON object per event.
    Json,
}

/// Install a global fmt subscriber writing to stderr.
///
/// Filter directives come from [`LOG_ENV`] and default to `info`. Returns
/// `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_subscriber(format: LogFormat) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Plain => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    }
}
