//! Per-element scaling without bounding.

use std::iter::FusedIterator;

use crate::{error::Result, range::Range};

/// Maps each value of a sequence into a [`Range`], validating it on the way.
///
/// Values are *not* clamped: anything outside `[0, 100]` comes out as an error
/// item. Use [`Progresso`](crate::Progresso) for untrusted progress data.
#[derive(Clone, Debug)]
pub struct NaiveScaled<I> {
    iter: I,
    range: Range,
}

impl<I> NaiveScaled<I> {
    /// Creates a new `NaiveScaled` over an already validated range.
    pub const fn new(iter: I, range: Range) -> Self {
        Self { iter, range }
    }

    /// The target range.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }
}

impl<I> Iterator for NaiveScaled<I>
where
    I: Iterator,
    I::Item: Into<f64>,
{
    type Item = Result<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|value| self.range.scale(value.into()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I> DoubleEndedIterator for NaiveScaled<I>
where
    I: DoubleEndedIterator,
    I::Item: Into<f64>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter
            .next_back()
            .map(|value| self.range.scale(value.into()))
    }
}

impl<I> ExactSizeIterator for NaiveScaled<I>
where
    I: ExactSizeIterator,
    I::Item: Into<f64>,
{
}

impl<I> FusedIterator for NaiveScaled<I>
where
    I: FusedIterator,
    I::Item: Into<f64>,
{
}

/// Scales every value of `iter` into `[start, end]`.
///
/// The range is checked before anything is pulled from `iter`; each value is then
/// checked as it is produced.
///
/// # Errors
///
/// Fails with [`ScaleError`](crate::ScaleError) if `[start, end]` is not a valid range.
pub fn naive_scaled<I>(iter: I, start: f64, end: f64) -> Result<NaiveScaled<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Into<f64>,
{
    let range = Range::new(start, end)?;
    Ok(NaiveScaled::new(iter.into_iter(), range))
}
