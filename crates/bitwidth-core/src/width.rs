#![forbid(unsafe_code)]

//! Bit-width values.
//!
//! A [`BitWidth`] describes how many bits a signal carries. Width `0` is the
//! "unknown" sentinel, `1..=64` is the standard range served by the canonical
//! registry (see [`crate::cache::WidthCache`]), and anything wider is legal but
//! second-class: it is never cached and never offered by a selector.
//!
//! # Textual form
//!
//! A width renders as its bare decimal value. Parsing additionally accepts one
//! leading `/`, which some upstream serializers emit:
//!
//! ```
//! use bitwidth_core::width::BitWidth;
//!
//! assert_eq!(BitWidth::parse("/8").unwrap(), BitWidth::parse("8").unwrap());
//! assert_eq!(BitWidth::parse("8").unwrap().to_string(), "8");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::cache::WidthCache;

/// Largest width the canonical registry can hold.
pub const MAX_WIDTH: u32 = 64;

/// Smallest known width.
pub const MIN_WIDTH: u32 = 1;

/// An immutable signal width.
///
/// Ordering, equality and hashing all follow the numeric width, so the
/// unknown sentinel sorts lowest. `BitWidth` is `Copy`: two values with the
/// same width are indistinguishable, and values handed out by the registry
/// are copies of its canonical entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitWidth {
    width: u32,
}

impl BitWidth {
    /// The unknown width sentinel (`0`).
    pub const UNKNOWN: Self = Self { width: 0 };

    /// A single bit.
    pub const ONE: Self = Self { width: 1 };

    /// Build a value from a non-negative width.
    ///
    /// Equal to the registry's canonical entry whenever one exists.
    #[inline]
    #[must_use]
    pub const fn new(width: u32) -> Self {
        Self { width }
    }

    /// Resolve `width` through the global registry.
    ///
    /// `0` yields [`BitWidth::UNKNOWN`]; negative widths are rejected.
    pub fn create(width: i32) -> Result<Self, WidthError> {
        WidthCache::global().create(width)
    }

    /// Parse a decimal width, stripping one optional leading `/`.
    pub fn parse(text: &str) -> Result<Self, WidthError> {
        WidthCache::global().parse(text)
    }

    /// The number of bits.
    #[inline]
    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Whether this is the unknown sentinel.
    #[inline]
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        self.width == 0
    }

    /// Whether the width exceeds [`MAX_WIDTH`].
    #[inline]
    #[must_use]
    pub const fn is_oversized(self) -> bool {
        self.width > MAX_WIDTH
    }

    /// Standard widths are a single bit or a whole number of bytes.
    ///
    /// Selectors list standard widths up front; anything else is a custom
    /// width that has to be remembered separately.
    #[inline]
    #[must_use]
    pub const fn is_standard(self) -> bool {
        self.width == 1 || self.width % 8 == 0
    }

    /// The value with exactly the low `width` bits set.
    ///
    /// Widths of [`MAX_WIDTH`] or more saturate to all ones.
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u64 {
        match self.width {
            0 => 0,
            w if w >= MAX_WIDTH => u64::MAX,
            w => (1u64 << w) - 1,
        }
    }
}

impl Default for BitWidth {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.width)
    }
}

impl FromStr for BitWidth {
    type Err = WidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<i32> for BitWidth {
    type Error = WidthError;

    fn try_from(width: i32) -> Result<Self, Self::Error> {
        Self::create(width)
    }
}

impl From<BitWidth> for u32 {
    fn from(width: BitWidth) -> Self {
        width.width
    }
}

/// Errors from building or parsing a [`BitWidth`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidthError {
    /// The width was negative.
    #[error("width {width} must be non-negative, or exactly the unknown sentinel 0")]
    Invalid {
        /// The rejected width.
        width: i32,
    },
    /// The text was empty or not a decimal integer.
    #[error("malformed width {text:?}: expected a decimal integer")]
    Malformed {
        /// The rejected input, as given.
        text: String,
    },
}
