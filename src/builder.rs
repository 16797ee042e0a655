//! Fluent interface for constructing [`Progresso`] pipelines.
//!
//! [`progresso`](crate::progresso) and [`progresso_within`](crate::progresso_within)
//! cover the common cases. The [`ProgressoBuilder`] exposes the remaining knobs.
//!
//! # Key Features
//!
//! * **Reusable Configuration:** A builder is `Copy`; validate a range once and stamp out
//!   any number of pipelines from it, one per sub-task run.
//! * **Plateau Policy:** Choose whether stalls are dropped ([`Plateau::Suppress`], the
//!   default) or kept as repeated values ([`Plateau::Emit`]) for consumers that want to
//!   see every report, e.g. to redraw a spinner.

use crate::{bound::Plateau, error::Result, pipeline::Progresso, range::Range};

/// A builder pattern for configuring [`Progresso`] pipelines.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressoBuilder {
    #[cfg_attr(feature = "serde", serde(default))]
    range: Range,
    #[cfg_attr(feature = "serde", serde(default))]
    plateau: Plateau,
}

impl ProgressoBuilder {
    /// Starts from the identity range and [`Plateau::Suppress`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target range.
    ///
    /// # Errors
    ///
    /// Fails with [`ScaleError`](crate::ScaleError) if `[start, end]` is not a valid range.
    pub fn with_range(self, start: f64, end: f64) -> Result<Self> {
        Ok(self.with_valid_range(Range::new(start, end)?))
    }

    /// Sets an already validated target range.
    #[must_use]
    pub const fn with_valid_range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// Sets the plateau policy.
    #[must_use]
    pub const fn with_plateau(mut self, plateau: Plateau) -> Self {
        self.plateau = plateau;
        self
    }

    /// The configured range.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// The configured plateau policy.
    #[must_use]
    pub const fn plateau(&self) -> Plateau {
        self.plateau
    }

    /// Builds a pipeline over `iter`.
    #[must_use]
    pub fn build<I>(&self, iter: I) -> Progresso<I::IntoIter>
    where
        I: IntoIterator,
        I::Item: Into<f64>,
    {
        tracing::debug!(
            start = self.range.start(),
            end = self.range.end(),
            plateau = ?self.plateau,
            "progress pipeline created"
        );
        Progresso::new(iter.into_iter(), self.range, self.plateau)
    }
}

#[cfg(test)]
mod tests {
    use super::ProgressoBuilder;
    use crate::{Plateau, Range};

    /// Defaults
    /// A bare builder behaves like `progresso`.
    #[test]
    fn test_defaults_match_progresso() {
        let builder = ProgressoBuilder::new();
        assert_eq!(builder.range(), Range::FULL);
        assert_eq!(builder.plateau(), Plateau::Suppress);

        let built: Vec<f64> = builder.build([0, 10, 10, 90]).collect();
        let plain: Vec<f64> = crate::progresso([0, 10, 10, 90]).collect();
        assert_eq!(built, plain);
    }

    /// Reuse
    /// One validated configuration drives several independent pipelines.
    #[test]
    fn test_reusable_configuration() {
        let builder = ProgressoBuilder::new()
            .with_range(50.0, 100.0)
            .unwrap()
            .with_plateau(Plateau::Emit);

        let first: Vec<f64> = builder.build([0, 50, 50]).collect();
        assert_eq!(first, [50.0, 75.0, 75.0, 100.0]);

        let second = builder.build([100]);
        assert_eq!(second.range(), Range::new(50.0, 100.0).unwrap());
        assert_eq!(second.plateau(), Plateau::Emit);
        assert_eq!(second.collect::<Vec<_>>(), [100.0]);
    }

    #[test]
    fn test_invalid_range() {
        assert!(ProgressoBuilder::new()
            .with_range(90.0, 10.0)
            .unwrap_err()
            .is_order());
    }
}
