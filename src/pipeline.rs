//! The `progresso` pipeline: bound a raw sequence, then scale it into a range.
//!
//! This is the entry point for most callers. A top-level task passes its raw progress
//! through [`progresso`] to get a clean 0-100 stream; a sub-task passes its own local
//! progress through [`progresso_within`] to occupy a slice of its parent's scale.
//!
//! # Hierarchical Composition
//!
//! Pipelines are ordinary iterators, so nesting is just concatenation. The parent's
//! sequence mixes literal values with nested pipelines and is bounded again as a whole:
//!
//! ```
//! use std::iter::once;
//!
//! use progresso::{progresso, progresso_within};
//!
//! let task = once(10.0)
//!     .chain(progresso_within((0..100).step_by(20), 10.0, 20.0)?)
//!     .chain(once(90.0));
//!
//! let out: Vec<f64> = progresso(task).collect();
//! assert_eq!(out, [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 90.0, 100.0]);
//! # Ok::<(), progresso::ScaleError>(())
//! ```
//!
//! [`ProgressChain`](crate::ProgressChain) offers the same composition as a value.

use std::iter::FusedIterator;

use crate::{
    bound::{Bounded, Plateau},
    error::Result,
    range::Range,
};

/// A bounded, range-scaled progress sequence.
///
/// Yields non-decreasing values in `[range.start, range.end]`, ending on `range.end`.
#[derive(Clone, Debug)]
pub struct Progresso<I> {
    bounded: Bounded<I>,
    range: Range,
}

impl<I> Progresso<I> {
    /// Creates a pipeline over `iter`.
    ///
    /// Note: This is usually constructed via [`progresso`], [`progresso_within`] or
    /// [`ProgressoBuilder`](crate::ProgressoBuilder).
    pub const fn new(iter: I, range: Range, plateau: Plateau) -> Self {
        Self {
            bounded: Bounded::new(iter, plateau),
            range,
        }
    }

    /// The target range.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// The plateau policy of the underlying bounder.
    #[must_use]
    pub const fn plateau(&self) -> Plateau {
        self.bounded.plateau()
    }

    /// Returns `true` once the source has been drained and no further values remain.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.bounded.is_finished()
    }
}

impl<I> Iterator for Progresso<I>
where
    I: Iterator,
    I::Item: Into<f64>,
{
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        // bounded values never leave [0, 100]
        self.bounded.next().map(|value| self.range.lerp(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bounded.size_hint()
    }
}

impl<I> FusedIterator for Progresso<I>
where
    I: Iterator,
    I::Item: Into<f64>,
{
}

/// Normalizes a raw progress sequence onto the identity range `[0, 100]`.
pub fn progresso<I>(iter: I) -> Progresso<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Into<f64>,
{
    Progresso::new(iter.into_iter(), Range::FULL, Plateau::default())
}

/// Normalizes a raw progress sequence and maps it onto `[start, end]`.
///
/// The range is validated up front. On error nothing is pulled from `iter`.
///
/// # Errors
///
/// * [`ScaleError::Range`](crate::ScaleError::Range) if `start` or `end` is outside `[0, 100]`.
/// * [`ScaleError::Order`](crate::ScaleError::Order) if `start > end`.
pub fn progresso_within<I>(iter: I, start: f64, end: f64) -> Result<Progresso<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Into<f64>,
{
    let range = Range::new(start, end)?;
    tracing::debug!(start, end, "progress pipeline created");
    Ok(Progresso::new(iter.into_iter(), range, Plateau::default()))
}
