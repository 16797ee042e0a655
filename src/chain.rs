//! Hierarchical composition of progress sequences.
//!
//! A parent task is often a fixed script: report a value, run a sub-task that owns a
//! slice of the bar, report another value, run the next sub-task, and so on. The
//! [`ProgressChain`] records that script as an ordered list of segments and flattens
//! it into one sequence of raw values for the parent's own pipeline.
//!
//! # Laziness
//!
//! Segments are stored, not evaluated. A nested sub-task is first polled when the
//! consumer pulls past everything before it, and dropping the chain half-way leaves the
//! remaining sub-tasks untouched.
//!
//! ```
//! use progresso::ProgressChain;
//!
//! let out: Vec<f64> = ProgressChain::new()
//!     .value(10)
//!     .nested([0, 50, 100], 10.0, 30.0)?
//!     .value(90)
//!     .progresso()
//!     .collect();
//!
//! assert_eq!(out, [10.0, 20.0, 30.0, 90.0, 100.0]);
//! # Ok::<(), progresso::ScaleError>(())
//! ```

use std::{collections::VecDeque, fmt, iter::FusedIterator};

use crate::{
    bound::Plateau,
    error::Result,
    pipeline::{Progresso, progresso_within},
    range::Range,
};

type BoxedValues<'a> = Box<dyn Iterator<Item = f64> + 'a>;

enum Segment<'a> {
    Value(f64),
    Values(BoxedValues<'a>),
    Nested { range: Range, iter: BoxedValues<'a> },
}

impl fmt::Debug for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Boxed iterators are opaque, only their position in the chain is shown
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Values(_) => f.write_str("Values(..)"),
            Self::Nested { range, .. } => f.debug_struct("Nested").field("range", range).finish(),
        }
    }
}

/// An ordered script of literal progress values and nested sub-task pipelines.
///
/// Build with the consuming methods, then either iterate it directly (raw, unbounded
/// values) or run it through [`progresso`](Self::progresso).
#[derive(Debug, Default)]
pub struct ProgressChain<'a> {
    segments: VecDeque<Segment<'a>>,
}

impl<'a> ProgressChain<'a> {
    /// Creates a new, empty `ProgressChain`.
    ///
    /// # Examples
    ///
    /// ```
    /// use progresso::ProgressChain;
    ///
    /// let chain = ProgressChain::new();
    /// assert!(chain.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single literal value, reported on the parent's own scale.
    #[must_use]
    pub fn value(mut self, value: impl Into<f64>) -> Self {
        self.segments.push_back(Segment::Value(value.into()));
        self
    }

    /// Appends a run of literal values, reported on the parent's own scale.
    ///
    /// The values are passed through unbounded; the parent's pipeline bounds them.
    #[must_use]
    pub fn values<I>(mut self, iter: I) -> Self
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: Into<f64> + 'a,
    {
        let iter = iter.into_iter().map(Into::into);
        self.segments.push_back(Segment::Values(Box::new(iter)));
        self
    }

    /// Appends a sub-task whose local 0-100 progress occupies `[start, end]`.
    ///
    /// The sub-task is bounded on its own, so it always completes at `end`.
    ///
    /// # Errors
    ///
    /// Fails with [`ScaleError`](crate::ScaleError) if `[start, end]` is not a valid range.
    pub fn nested<I>(mut self, iter: I, start: f64, end: f64) -> Result<Self>
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: Into<f64>,
    {
        let pipeline = progresso_within(iter, start, end)?;
        self.segments.push_back(Segment::Nested {
            range: pipeline.range(),
            iter: Box::new(pipeline),
        });
        Ok(self)
    }

    /// Appends an already configured sub-task pipeline.
    #[must_use]
    pub fn nested_pipeline<I>(mut self, pipeline: Progresso<I>) -> Self
    where
        I: Iterator + 'a,
        I::Item: Into<f64>,
    {
        self.segments.push_back(Segment::Nested {
            range: pipeline.range(),
            iter: Box::new(pipeline),
        });
        self
    }

    /// Returns the number of segments (not values) in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the chain has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Runs the whole chain through a pipeline on the identity range.
    #[must_use]
    pub fn progresso(self) -> Progresso<ChainIter<'a>> {
        Progresso::new(self.into_iter(), Range::FULL, Plateau::default())
    }

    /// Runs the whole chain through a pipeline mapped onto `[start, end]`.
    ///
    /// This is how a chain becomes a sub-task of a bigger chain.
    ///
    /// # Errors
    ///
    /// Fails with [`ScaleError`](crate::ScaleError) if `[start, end]` is not a valid range.
    pub fn progresso_within(self, start: f64, end: f64) -> Result<Progresso<ChainIter<'a>>> {
        progresso_within(self, start, end)
    }
}

impl<'a> IntoIterator for ProgressChain<'a> {
    type Item = f64;
    type IntoIter = ChainIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        ChainIter {
            segments: self.segments,
            current: None,
        }
    }
}

/// Flattening iterator over a [`ProgressChain`], yielding raw values in script order.
pub struct ChainIter<'a> {
    segments: VecDeque<Segment<'a>>,
    current: Option<BoxedValues<'a>>,
}

impl fmt::Debug for ChainIter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainIter")
            .field("remaining", &self.segments.len())
            .field("in_segment", &self.current.is_some())
            .finish()
    }
}

impl Iterator for ChainIter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(value) = current.next() {
                    return Some(value);
                }
                self.current = None;
            }

            match self.segments.pop_front()? {
                Segment::Value(value) => return Some(value),
                Segment::Values(iter) => self.current = Some(iter),
                Segment::Nested { range, iter } => {
                    tracing::trace!(
                        start = range.start(),
                        end = range.end(),
                        "entering nested progress"
                    );
                    self.current = Some(iter);
                }
            }
        }
    }
}

impl FusedIterator for ChainIter<'_> {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::ProgressChain;
    use crate::{Plateau, ProgressoBuilder};

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
        }
    }

    /// Flattening
    /// Raw iteration yields segments in order without any bounding.
    #[test]
    fn test_raw_iteration_flattens_in_order() {
        let chain = ProgressChain::new()
            .value(5)
            .values([1, 2])
            .value(-3.5)
            .values(Vec::<f64>::new())
            .value(7);
        assert_eq!(chain.len(), 5);

        let raw: Vec<f64> = chain.into_iter().collect();
        assert_eq!(raw, [5.0, 1.0, 2.0, -3.5, 7.0]);
    }

    /// Borrowed Runs
    /// Literal runs may borrow from the caller, e.g. reports collected in a slice.
    #[test]
    fn test_values_from_borrowed_slice() {
        let reports = vec![25.0, 75.0];
        let out: Vec<f64> = ProgressChain::new()
            .values(reports.iter().copied())
            .values([80.0f32, 85.0])
            .progresso()
            .collect();
        assert_eq!(out, [25.0, 75.0, 80.0, 85.0, 100.0]);
    }

    /// Nested Pipelines
    /// Matches the documented nested scenario through the chain API.
    #[test]
    fn test_nested_scenario() {
        let out: Vec<f64> = ProgressChain::new()
            .value(10)
            .nested((0..100).step_by(20), 10.0, 20.0)
            .unwrap()
            .value(90)
            .progresso()
            .collect();

        assert_eq!(out, [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 90.0, 100.0]);
    }

    /// Multi-Stage Task
    /// Several sub-tasks of differing quality merge into one increasing stream.
    #[test]
    fn test_multi_stage_task() {
        let out: Vec<f64> = ProgressChain::new()
            .value(10)
            .nested([1, 30, 75, 100], 10.0, 30.0)
            .unwrap()
            .nested((10..100).step_by(21), 30.0, 45.0)
            .unwrap()
            .nested([-5, 55, 23, 98], 45.0, 80.0)
            .unwrap()
            .values([80, 99])
            .progresso()
            .collect();

        assert_close(
            &out,
            &[
                10.0, 10.2, 16.0, 25.0, 30.0, // first sub-task
                31.5, 34.65, 37.8, 40.95, 44.1, 45.0, // second
                64.25, 79.3, 80.0, // third, its 45 merges with the previous end
                99.0, 100.0,
            ],
        );
    }

    /// Chains of Chains
    /// A whole chain can be scaled into a slice of an outer chain.
    #[test]
    fn test_chain_as_sub_task() {
        let inner = ProgressChain::new()
            .value(0)
            .nested([50], 0.0, 50.0)
            .unwrap()
            .progresso_within(20.0, 40.0)
            .unwrap();

        let out: Vec<f64> = ProgressChain::new()
            .nested_pipeline(inner)
            .value(60)
            .progresso()
            .collect();

        // inner: 0, 25, 50 -> bounded 0, 25, 50, 100 -> 20, 25, 30, 40
        assert_eq!(out, [20.0, 25.0, 30.0, 40.0, 60.0, 100.0]);
    }

    /// Builder Integration
    /// A configured pipeline keeps its plateau policy when nested.
    #[test]
    fn test_nested_configured_pipeline() {
        let sub = ProgressoBuilder::new()
            .with_plateau(Plateau::Emit)
            .build([40, 40]);

        let raw: Vec<f64> = ProgressChain::new().nested_pipeline(sub).into_iter().collect();
        assert_eq!(raw, [40.0, 40.0, 100.0]);
    }

    /// Laziness
    /// A nested sub-task is not polled before the consumer reaches it.
    #[test]
    fn test_nested_segment_is_lazy() {
        let pulled = Cell::new(0);
        let sub = [20, 80].into_iter().inspect(|_| pulled.set(pulled.get() + 1));

        let mut out = ProgressChain::new()
            .value(10)
            .value(20)
            .nested(sub, 50.0, 60.0)
            .unwrap()
            .progresso();

        assert_eq!(out.next(), Some(10.0));
        assert_eq!(out.next(), Some(20.0));
        assert_eq!(pulled.get(), 0);

        assert_eq!(out.next(), Some(52.0));
        assert_eq!(pulled.get(), 1);
        drop(out);
        assert_eq!(pulled.get(), 1);
    }

    /// Empty Chain
    /// Completes immediately like any empty source.
    #[test]
    fn test_empty_chain() {
        let chain = ProgressChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.progresso().collect::<Vec<_>>(), [100.0]);
    }
}
