//! Iterator adapters for progress sequences.
//!
//! This module provides the [`ProgressoIteratorExt`] trait, which adds the crate's
//! adapters as methods on any [`Iterator`] whose items convert into `f64`. This allows
//! normalizing a task's progress with a single method call.
//!
//! # Example
//!
//! ```
//! use progresso::ProgressoIteratorExt;
//!
//! let reports = vec![-2, 40, 35, 80];
//! let bar: Vec<f64> = reports.into_iter().progresso().collect();
//! assert_eq!(bar, [0.0, 40.0, 80.0, 100.0]);
//! ```

use crate::{
    bound::{Bounded, Plateau},
    error::Result,
    pipeline::{self, Progresso},
    scaled::{self, NaiveScaled},
};

/// Extension trait to attach progress adapters to any iterator of percentages.
pub trait ProgressoIteratorExt: Iterator + Sized
where
    Self::Item: Into<f64>,
{
    /// Clamps, de-duplicates and terminates the sequence without rescaling.
    fn bounded(self) -> Bounded<Self> {
        Bounded::new(self, Plateau::default())
    }

    /// Wraps the iterator in a [`Progresso`] pipeline on the identity range.
    fn progresso(self) -> Progresso<Self> {
        pipeline::progresso(self)
    }

    /// Wraps the iterator in a [`Progresso`] pipeline mapped onto `[start, end]`.
    ///
    /// # Errors
    ///
    /// Fails with [`ScaleError`](crate::ScaleError) if `[start, end]` is not a valid range.
    fn progresso_within(self, start: f64, end: f64) -> Result<Progresso<Self>> {
        pipeline::progresso_within(self, start, end)
    }

    /// Maps each value onto `[start, end]` without bounding, see [`NaiveScaled`].
    ///
    /// # Errors
    ///
    /// Fails with [`ScaleError`](crate::ScaleError) if `[start, end]` is not a valid range.
    fn naive_scaled(self, start: f64, end: f64) -> Result<NaiveScaled<Self>> {
        scaled::naive_scaled(self, start, end)
    }
}

impl<I> ProgressoIteratorExt for I
where
    I: Iterator,
    I::Item: Into<f64>,
{
}
