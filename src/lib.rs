//! # `progresso`
//!
//! Lazy, monotonic, range-scaled progress sequences for nested tasks.
//!
//! Tasks report progress as percentages in their own local 0-100 scale, often sloppily:
//! starting below zero, overshooting, stalling, going backwards, or stopping short of
//! 100. `progresso` turns such a sequence into one a progress bar can draw directly, and
//! lets a parent task give each sub-task a slice of its own scale.
//!
//! It is designed to be:
//!
//! * **Lazy**: Values are pulled from the source only as the consumer asks for them.
//! * **Composable**: A pipeline is an [`Iterator`], so nesting sub-tasks is iterator
//!   concatenation.
//! * **Headless**: It produces numbers; rendering them is up to the caller.
//!
//! ```
//! use std::iter::once;
//!
//! use progresso::{progresso, progresso_within};
//!
//! let download = [0, 25, 25, 80];
//! let task = once(5.0)
//!     .chain(progresso_within(download, 10.0, 50.0)?)
//!     .chain(once(95.0));
//!
//! let bar: Vec<f64> = progresso(task).collect();
//! assert_eq!(bar, [5.0, 10.0, 20.0, 42.0, 50.0, 95.0, 100.0]);
//! # Ok::<(), progresso::ScaleError>(())
//! ```
//!
//! ## Input Types
//!
//! Sources may yield any item implementing `Into<f64>`: `f32`, `f64`, and integers up
//! to 32 bits. `usize`, `u64` and `i64` have no lossless conversion to `f64`, so map
//! them explicitly:
//!
//! ```
//! use progresso::progresso;
//!
//! let steps: usize = 4;
//! #[allow(clippy::cast_precision_loss)]
//! let bar: Vec<f64> = progresso((0..steps).map(|i| i as f64 * 30.0)).collect();
//! assert_eq!(bar, [0.0, 30.0, 60.0, 90.0, 100.0]);
//! ```
//!
//! ## Modules
//!
//! * [`range`]: The [`Range`] type and the single-value [`scale`] function.
//! * [`bound`]: The [`Bounded`] adapter that clamps and terminates raw sequences.
//! * [`scaled`](mod@scaled): Per-element scaling without bounding.
//! * [`pipeline`]: The [`Progresso`] pipeline combining both.
//! * [`chain`]: [`ProgressChain`], a script of values and nested sub-tasks.
//! * [`builder`]: Fluent configuration for pipelines.
//! * [`iter`]: Extension trait adding the adapters to any iterator.
//! * [`error`]: The [`ScaleError`] type.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bound;
pub mod builder;
pub mod chain;
pub mod error;
pub mod iter;
pub mod pipeline;
pub mod range;
pub mod scaled;

pub use bound::{Bounded, Plateau, bound_scaled};
pub use builder::ProgressoBuilder;
pub use chain::{ChainIter, ProgressChain};
pub use error::{Result, ScaleError};
pub use iter::ProgressoIteratorExt;
pub use pipeline::{
    Progresso, progresso, progresso_within, progresso_within as safe_scaled,
    progresso_within as scaled,
};
pub use range::{MAX_PERCENT, MIN_PERCENT, Range, scale};
pub use scaled::{NaiveScaled, naive_scaled};
