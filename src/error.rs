//! Errors raised when scaling progress values.
//!
//! Only explicit arguments are validated: a value handed to [`scale`](crate::scale) or a
//! `(start, end)` pair describing a target range. Progress *data* flowing through a
//! pipeline is never rejected; the bounder clamps it instead.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = ScaleError> = std::result::Result<T, E>;

/// Misuse of the scaling API.
///
/// Both variants signal a caller bug rather than a transient failure, so there is
/// nothing to retry.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ScaleError {
    /// A value, `start` or `end` lies outside `[0, 100]` (or is NaN).
    #[error("Expected value in range [0, 100], got {value}")]
    Range {
        /// The first offending argument.
        value: f64,
    },

    /// `start` is greater than `end`.
    #[error("Expected start <= end, got start={start} end={end}")]
    Order {
        /// Requested lower bound.
        start: f64,
        /// Requested upper bound.
        end: f64,
    },
}

impl ScaleError {
    /// Returns `true` for [`ScaleError::Range`].
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }

    /// Returns `true` for [`ScaleError::Order`].
    #[must_use]
    pub const fn is_order(&self) -> bool {
        matches!(self, Self::Order { .. })
    }
}
