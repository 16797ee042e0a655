//! Normalization of raw progress sequences.
//!
//! Tasks report progress loosely: values may start below zero, overshoot 100, stall,
//! or even move backwards. [`Bounded`] turns such a sequence into one a progress bar
//! can consume directly. Its output:
//!
//! * stays within `[0, 100]`,
//! * never decreases,
//! * always has a first element,
//! * always ends on exactly `100`.
//!
//! Each raw value `v` is clamped to `min(max(last, v), 100)`, where `last` is the most
//! recent emitted value (initially `0`). Under the default [`Plateau::Suppress`] policy
//! a clamped value that does not advance past `last` is dropped, except for the very
//! first element, which is always emitted.
//!
//! The adapter is lazy: a raw value is pulled only when the consumer asks for the next
//! bounded value. The completion value is produced once the source is exhausted, so the
//! source must be finite for the sequence to terminate.

use std::iter::FusedIterator;

use crate::range::MAX_PERCENT;

/// What to do with a clamped value equal to the running maximum.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "rkyv",
    derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "rkyv", rkyv(derive(Debug, Eq, PartialEq)))]
pub enum Plateau {
    /// Drop values that do not advance. Output is strictly increasing after the first
    /// element.
    #[default]
    Suppress,
    /// Re-emit every clamped value, so stalls and regressions show up as repeats.
    Emit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Cursor {
    Fresh,
    Running,
    Done,
}

/// An iterator adapter producing bounded progress values from raw ones.
///
/// Usually constructed via [`bound_scaled`] or
/// [`ProgressoIteratorExt::bounded`](crate::ProgressoIteratorExt::bounded).
#[derive(Clone, Debug)]
pub struct Bounded<I> {
    iter: I,
    plateau: Plateau,
    last: f64,
    cursor: Cursor,
}

impl<I> Bounded<I> {
    /// Wraps `iter` with the given plateau policy.
    pub const fn new(iter: I, plateau: Plateau) -> Self {
        Self {
            iter,
            plateau,
            last: 0.0,
            cursor: Cursor::Fresh,
        }
    }

    /// The most recently emitted value, or `0` before the first one.
    #[must_use]
    pub const fn last(&self) -> f64 {
        self.last
    }

    /// The plateau policy in effect.
    #[must_use]
    pub const fn plateau(&self) -> Plateau {
        self.plateau
    }

    /// Returns `true` once the source has been drained and no further values remain.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor == Cursor::Done
    }
}

impl<I> Iterator for Bounded<I>
where
    I: Iterator,
    I::Item: Into<f64>,
{
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.cursor == Cursor::Done {
            return None;
        }

        for raw in self.iter.by_ref() {
            let raw: f64 = raw.into();
            // f64::max ignores NaN, so a NaN input collapses onto `last`
            let clamped = self.last.max(raw).min(MAX_PERCENT);
            let first = self.cursor == Cursor::Fresh;
            self.cursor = Cursor::Running;

            if first || self.plateau == Plateau::Emit || clamped > self.last {
                self.last = clamped;
                return Some(clamped);
            }
            tracing::trace!(raw, last = self.last, "suppressed non-advancing progress");
        }

        self.cursor = Cursor::Done;
        if self.last < MAX_PERCENT {
            tracing::trace!(last = self.last, "source exhausted early, completing at 100");
            self.last = MAX_PERCENT;
            return Some(MAX_PERCENT);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            Cursor::Done => (0, Some(0)),
            // a fresh bounder yields either its first element or the completion value
            Cursor::Fresh => (1, self.iter.size_hint().1.and_then(|n| n.checked_add(1))),
            Cursor::Running => (0, self.iter.size_hint().1.and_then(|n| n.checked_add(1))),
        }
    }
}

impl<I> FusedIterator for Bounded<I>
where
    I: Iterator,
    I::Item: Into<f64>,
{
}

/// Bounds a raw progress sequence with the default [`Plateau::Suppress`] policy.
///
/// ```
/// let out: Vec<f64> = progresso::bound_scaled([-3, 10, 9, 50]).collect();
/// assert_eq!(out, [0.0, 10.0, 50.0, 100.0]);
/// ```
pub fn bound_scaled<I>(iter: I) -> Bounded<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Into<f64>,
{
    Bounded::new(iter.into_iter(), Plateau::Suppress)
}
