//! trend — least-squares trend estimation over empirical PMFs.
//!
//! Purpose
//! -------
//! Collect the trend-estimation routine and its shared infrastructure
//! for empirical PMFs. This subtree fits an ordinary-least-squares line
//! to `(outcome, probability)` pairs, extrapolates one step beyond the
//! observed range, and classifies the trend direction, together with
//! common input validation and error handling, including Python bridges
//! for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Expose the one-step extrapolation via [`TrendOutcome`] and its
//!   constructors [`TrendOutcome::estimate`](estimator::TrendOutcome::estimate)
//!   and [`TrendOutcome::from_samples`](estimator::TrendOutcome::from_samples).
//! - Expose the underlying fitted line via [`TrendFit`] for callers that
//!   need the slope and intercept directly.
//! - Centralize sample-input guards in [`validate_samples`], including
//!   detection of the all-zero probability vector.
//! - Provide a dedicated error type [`TrendError`] and result alias
//!   [`TrendResult`], plus a conversion layer to Python exceptions when
//!   the `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Sample inputs are finite, length-matched `(outcome, probability)`
//!   pairs; entry points call [`validate_samples`] before accumulating
//!   any least-squares sums.
//! - The degenerate zero-total PMF is always refused with
//!   [`TrendError::InsufficientData`]; a meaningless zero-slope fit is
//!   never fabricated. `InsufficientData` is an expected, recoverable
//!   state, not a crash-level failure.
//! - Routines in this subtree report failures via [`TrendResult`] and
//!   never panic on user-facing invalid inputs.
//! - At the Python boundary, all [`TrendError`] values are mapped into a
//!   single exception class (`PyValueError`) with the Rust `Display`
//!   message preserved verbatim.
//!
//! Conventions
//! -----------
//! - This subtree is focused on *trend estimation*; PMF construction
//!   lives under `distribution` with its own errors module.
//! - The direction label is `Increasing` iff `slope > 0`; the flat case
//!   collapses into `Decreasing`, preserving the reference behavior.
//! - The extrapolated probability is unclamped; values outside [0, 1]
//!   are a documented limitation of the linear model, not an error.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use pmf_trend::distribution::Pmf;
//!   use pmf_trend::trend::{TrendOutcome, TrendResult};
//!
//!   # fn demo(pmf: &Pmf) -> TrendResult<()> {
//!   let outcome: TrendOutcome = TrendOutcome::estimate(pmf)?;
//!   # Ok(())
//!   # }
//!   ```
//!
//!   and only refers to `trend::errors` or `trend::validation` directly
//!   when matching on [`TrendError`] or reusing [`validate_samples`].
//! - Presentation layers render [`TrendOutcome::predicted_percent`] and
//!   [`TrendOutcome::direction`] and map `InsufficientData` to a "no
//!   suggestion" message.
//! - Python bindings expose thin wrappers around the same Rust entry
//!   points; they rely on `From<TrendError> for PyErr` to raise
//!   `ValueError` instances instead of returning [`TrendResult`]
//!   explicitly.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`errors`] verify `Display` messages and payload
//!   embedding for [`TrendError`] variants.
//! - Unit tests in [`validation`] exercise all branches of
//!   [`validate_samples`], including the all-zero vector.
//! - Unit tests in [`estimator`] cover the worked sales example, sign
//!   consistency of the direction label, the single-point rule, refusal
//!   of the degenerate PMF, unclamped extrapolation, and idempotence.

pub mod errors;
pub mod estimator;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{TrendError, TrendResult};
pub use self::estimator::{TrendDirection, TrendFit, TrendOutcome};
pub use self::validation::validate_samples;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use pmf_trend::trend::prelude::*;
//
// to import the main trend-estimation surface in a single line.

pub mod prelude {
    pub use super::errors::{TrendError, TrendResult};
    pub use super::estimator::{TrendDirection, TrendFit, TrendOutcome};
}
