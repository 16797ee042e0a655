//! Target ranges and the single-value scaling primitive.
//!
//! Every progress value in this crate is a percentage. A [`Range`] describes the slice
//! `[start, end]` of a parent's 0-100 scale that a sub-task occupies, and
//! [`Range::scale`] maps a local percentage onto it by linear interpolation:
//!
//! ```text
//! scaled = start + value * (end - start) / 100
//! ```
//!
//! so `0` lands on `start` and `100` lands on `end`.
//!
//! # Validation
//!
//! Arguments are checked in a fixed order: first that every number lies in
//! `[0, 100]` ([`ScaleError::Range`]), then that `start <= end` ([`ScaleError::Order`]).
//! A range is validated once, on construction, so a [`Range`] held by a pipeline can
//! map bounded values without failing.

use crate::error::{Result, ScaleError};

/// Lowest valid progress percentage.
pub const MIN_PERCENT: f64 = 0.0;

/// Highest valid progress percentage. Every bounded sequence ends on this value.
pub const MAX_PERCENT: f64 = 100.0;

/// A validated target interval `[start, end]` with `0 <= start <= end <= 100`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "rkyv",
    derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(f64, f64)", into = "(f64, f64)")
)]
#[cfg_attr(feature = "rkyv", rkyv(derive(Debug, PartialEq)))]
pub struct Range {
    start: f64,
    end: f64,
}

impl Default for Range {
    fn default() -> Self {
        Self::FULL
    }
}

impl Range {
    /// The identity range `[0, 100]`.
    pub const FULL: Self = Self {
        start: MIN_PERCENT,
        end: MAX_PERCENT,
    };

    /// Creates a range, validating both bounds and their order.
    ///
    /// # Errors
    ///
    /// * [`ScaleError::Range`] if `start` or `end` is outside `[0, 100]`.
    /// * [`ScaleError::Order`] if `start > end`.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        check_percent(start)?;
        check_percent(end)?;
        if start > end {
            return Err(ScaleError::Order { start, end });
        }
        Ok(Self { start, end })
    }

    /// Lower bound of the range.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound of the range.
    #[must_use]
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// Width of the range, `end - start`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` for the identity range `[0, 100]`.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.start == MIN_PERCENT && self.end == MAX_PERCENT
    }

    /// Maps `value` from `[0, 100]` onto this range.
    ///
    /// # Errors
    ///
    /// [`ScaleError::Range`] if `value` is outside `[0, 100]`.
    pub fn scale(&self, value: f64) -> Result<f64> {
        check_percent(value)?;
        Ok(self.lerp(value))
    }

    /// Unchecked interpolation, for values already known to be in `[0, 100]`.
    pub(crate) fn lerp(&self, value: f64) -> f64 {
        self.start + value * self.span() / MAX_PERCENT
    }
}

impl TryFrom<(f64, f64)> for Range {
    type Error = ScaleError;

    fn try_from((start, end): (f64, f64)) -> Result<Self> {
        Self::new(start, end)
    }
}

impl From<Range> for (f64, f64) {
    fn from(range: Range) -> Self {
        (range.start, range.end)
    }
}

/// Returns `value` scaled from `[0, 100]` into `[start, end]`.
///
/// ```
/// assert_eq!(progresso::scale(50.0, 10.0, 20.0), Ok(15.0));
/// assert!(progresso::scale(50.0, 20.0, 10.0).is_err());
/// ```
///
/// # Errors
///
/// * [`ScaleError::Range`] if any of `value`, `start`, `end` is outside `[0, 100]`.
/// * [`ScaleError::Order`] if all three are in range but `start > end`.
pub fn scale(value: f64, start: f64, end: f64) -> Result<f64> {
    check_percent(value)?;
    Range::new(start, end)?.scale(value)
}

fn check_percent(value: f64) -> Result<f64> {
    if (MIN_PERCENT..=MAX_PERCENT).contains(&value) {
        Ok(value)
    } else {
        Err(ScaleError::Range { value })
    }
}
