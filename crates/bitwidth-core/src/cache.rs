#![forbid(unsafe_code)]

//! Canonical width registry.
//!
//! [`WidthCache`] holds one canonical [`BitWidth`] per width in
//! `1..=max_width` (with `max_width` capped at [`MAX_WIDTH`]). The process-wide
//! registry returned by [`WidthCache::global`] is built exactly once behind a
//! [`OnceLock`], so concurrent first use from several threads still observes a
//! single set of canonical entries.
//!
//! # Invariants
//!
//! 1. `canonical(w)` returns the same reference for every call with the same
//!    `w` on the same registry.
//! 2. `create(w)` for `w` in `1..=max_width` is a copy of `canonical(w)`.
//! 3. Widths above `max_width` are built fresh and never stored.
//! 4. The registry is never mutated after construction.

use std::sync::OnceLock;

use crate::config::WidthConfig;
use crate::width::{BitWidth, MAX_WIDTH, WidthError};

static GLOBAL: OnceLock<WidthCache> = OnceLock::new();

static UNKNOWN: BitWidth = BitWidth::UNKNOWN;

/// Registry of canonical widths `1..=max_width`.
#[derive(Debug)]
pub struct WidthCache {
    /// Entry `i` holds width `i + 1`.
    prefab: Box<[BitWidth]>,
}

impl WidthCache {
    /// Build a registry for widths `1..=max_width`.
    ///
    /// `max_width` is clamped into `1..=MAX_WIDTH`.
    #[must_use]
    pub fn new(max_width: u32) -> Self {
        let max_width = max_width.clamp(1, MAX_WIDTH);
        let prefab: Box<[BitWidth]> = (1..=max_width).map(BitWidth::new).collect();
        crate::debug!(
            message = "width.cache.populate",
            max_width,
            len = prefab.len()
        );
        Self { prefab }
    }

    /// The process-wide registry.
    ///
    /// Built on first use from [`WidthConfig::from_env`], unless
    /// [`WidthCache::init_global`] ran first.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| Self::new(WidthConfig::from_env().max_width))
    }

    /// Install the process-wide registry with an explicit maximum.
    ///
    /// Returns `true` if this call built the registry, `false` if it already
    /// existed (in which case the existing registry is left untouched).
    pub fn init_global(max_width: u32) -> bool {
        let mut installed = false;
        GLOBAL.get_or_init(|| {
            installed = true;
            Self::new(max_width)
        });
        installed
    }

    /// Largest width held by this registry.
    #[inline]
    #[must_use]
    pub fn max_width(&self) -> u32 {
        // prefab.len() <= MAX_WIDTH, so this never truncates.
        self.prefab.len() as u32
    }

    /// Number of canonical entries (excluding the unknown sentinel).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefab.len()
    }

    /// Always `false`: a registry holds at least width 1.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefab.is_empty()
    }

    /// Whether `width` has a canonical entry (the sentinel counts).
    #[inline]
    #[must_use]
    pub fn contains(&self, width: u32) -> bool {
        width as usize <= self.prefab.len()
    }

    /// The canonical entry for `width`, if it is `0` or in `1..=max_width`.
    #[must_use]
    pub fn canonical(&self, width: u32) -> Option<&BitWidth> {
        match width {
            0 => Some(&UNKNOWN),
            w => self.prefab.get(w as usize - 1),
        }
    }

    /// Resolve `width` to a [`BitWidth`].
    ///
    /// Widths beyond this registry are built fresh.
    pub fn create(&self, width: i32) -> Result<BitWidth, WidthError> {
        let Ok(raw) = u32::try_from(width) else {
            return Err(WidthError::Invalid { width });
        };
        Ok(self
            .canonical(raw)
            .copied()
            .unwrap_or_else(|| BitWidth::new(raw)))
    }

    /// Parse a decimal width, stripping one optional leading `/`.
    pub fn parse(&self, text: &str) -> Result<BitWidth, WidthError> {
        let digits = text.strip_prefix('/').unwrap_or(text);
        let width = digits
            .parse::<i32>()
            .map_err(|_| WidthError::Malformed {
                text: text.to_owned(),
            })?;
        self.create(width)
    }

    /// Canonical widths in increasing order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = BitWidth> + '_ {
        self.prefab.iter().copied()
    }

    /// Canonical widths in `min..=max`, clipped to this registry.
    pub fn range(&self, min: u32, max: u32) -> impl Iterator<Item = BitWidth> + '_ {
        let start = min.max(1) as usize - 1;
        let end = (max as usize).min(self.prefab.len());
        self.prefab
            .get(start..end.max(start))
            .unwrap_or_default()
            .iter()
            .copied()
    }
}
