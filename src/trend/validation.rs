//! trend::validation — shared input guards for trend estimation.
//!
//! Purpose
//! -------
//! Centralize basic input validation for `(outcome, probability)` sample
//! sequences before the least-squares sums are accumulated. This avoids
//! duplicating shape and finiteness checks across the fit and
//! extrapolation entry points.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on sample pairs before any regression
//!   arithmetic is performed.
//! - Detect the all-zero probability vector and surface it as the
//!   explicit `InsufficientData` state rather than letting a meaningless
//!   zero-slope fit through.
//! - Map invalid inputs into structured `TrendError` values for
//!   consistent error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - The sample set must be non-empty.
//! - Outcome and probability sequences must have equal lengths.
//! - All probability values must be finite (no NaN, no ±∞).
//! - At least one probability must be non-zero; an all-zero vector means
//!   the originating total frequency was zero.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and
//!   does not allocate beyond what is required for error construction.
//! - Errors are reported via the subtree-local `TrendError` enum, which
//!   is also convertible to `PyErr` in Python-facing layers.
//! - Probabilities outside [0, 1] are tolerated here: the fit is defined
//!   over whatever values the caller supplies, and bounded-output
//!   violations are a documented property of the linear model, not a
//!   validation concern.
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_samples`] at the top of fit and extrapolation
//!   routines before accumulating the least-squares sums.
//! - Treat a successful return (`Ok(())`) as a guarantee that the sample
//!   shape constraints are satisfied and the data is not the degenerate
//!   all-zero state.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover all error branches of
//!   [`validate_samples`] and a simple success path.

use crate::trend::errors::{TrendError, TrendResult};

/// Validate basic input constraints for trend-estimation samples.
///
/// Parameters
/// ----------
/// - `outcomes`: `&[u32]`
///   Outcome values acting as the regression's independent variable.
///   Must be non-empty and the same length as `probabilities`.
/// - `probabilities`: `&[f64]`
///   Empirical probabilities aligned with `outcomes`. All values must
///   be finite, and at least one must be non-zero.
///
/// Returns
/// -------
/// `TrendResult<()>`
///   - `Ok(())` if all basic constraints are satisfied.
///   - `Err(TrendError)` if any constraint is violated, with a variant
///     that encodes which condition failed and, where relevant, the
///     offending value.
///
/// Errors
/// ------
/// - `TrendError::EmptyPmf`
///   Returned when `outcomes` is empty, so there is nothing to fit.
/// - `TrendError::LengthMismatch { outcomes, probabilities }`
///   Returned when the two sequences have different lengths.
/// - `TrendError::NonFiniteProbability(value)`
///   Returned when any probability is not finite, with `value` set to
///   the offending entry.
/// - `TrendError::InsufficientData`
///   Returned when every probability is zero, i.e. the PMF originates
///   from a zero total frequency and no meaningful fit exists.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `TrendError`.
///
/// Notes
/// -----
/// - The all-zero check makes the raw-sample entry point self-contained:
///   callers that bypass [`Pmf`](crate::distribution::Pmf) and supply
///   bare pairs still get the explicit no-data signal instead of a
///   fabricated zero-slope fit.
///
/// Examples
/// --------
/// ```rust
/// # use pmf_trend::trend::validation::validate_samples;
/// # use pmf_trend::trend::errors::TrendError;
/// let outcomes = [0_u32, 1, 2];
/// let probabilities = [0.2_f64, 0.3, 0.5];
///
/// // Valid inputs succeed:
/// assert!(validate_samples(&outcomes, &probabilities).is_ok());
///
/// // An all-zero vector is the explicit no-data state:
/// match validate_samples(&outcomes, &[0.0, 0.0, 0.0]) {
///     Err(TrendError::InsufficientData) => (),
///     other => panic!("expected InsufficientData, got {other:?}"),
/// }
/// ```
pub fn validate_samples(outcomes: &[u32], probabilities: &[f64]) -> TrendResult<()> {
    if outcomes.is_empty() {
        return Err(TrendError::EmptyPmf);
    }

    if outcomes.len() != probabilities.len() {
        return Err(TrendError::LengthMismatch {
            outcomes: outcomes.len(),
            probabilities: probabilities.len(),
        });
    }

    for &value in probabilities {
        if !value.is_finite() {
            return Err(TrendError::NonFiniteProbability(value));
        }
    }

    if probabilities.iter().all(|&p| p == 0.0) {
        return Err(TrendError::InsufficientData);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Successful validation of well-formed samples.
    // - Each error branch in `validate_samples`:
    //   * empty sample set,
    //   * mismatched lengths,
    //   * non-finite probability,
    //   * all-zero probability vector (InsufficientData).
    //
    // They intentionally DO NOT cover:
    // - Any interaction with Python / PyO3 (conversion to `PyErr`), which
    //   is exercised by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `validate_samples` succeeds on a simple, valid sample
    // set with finite, not-all-zero probabilities.
    //
    // Given
    // -----
    // - Three outcomes and three finite probabilities summing to 1.
    //
    // Expect
    // ------
    // - `validate_samples` returns `Ok(())`.
    fn validate_samples_valid_arguments_succeeds() {
        // Arrange
        let outcomes = [0_u32, 1, 2];
        let probabilities = [0.2_f64, 0.3, 0.5];

        // Act
        let result = validate_samples(&outcomes, &probabilities);

        // Assert
        assert!(result.is_ok(), "Expected Ok(()) for valid samples, got {result:?}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that an empty sample set is rejected with
    // `TrendError::EmptyPmf`.
    //
    // Given
    // -----
    // - Empty outcome and probability slices.
    //
    // Expect
    // ------
    // - `validate_samples` returns `Err(TrendError::EmptyPmf)`.
    fn validate_samples_empty_set_returns_empty_pmf() {
        // Arrange
        let outcomes: [u32; 0] = [];
        let probabilities: [f64; 0] = [];

        // Act
        let result = validate_samples(&outcomes, &probabilities);

        // Assert
        match result {
            Err(TrendError::EmptyPmf) => (),
            other => panic!("expected EmptyPmf error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that mismatched sequence lengths are rejected with
    // `TrendError::LengthMismatch` carrying both lengths.
    //
    // Given
    // -----
    // - Three outcomes but only two probabilities.
    //
    // Expect
    // ------
    // - `validate_samples` returns
    //   `Err(TrendError::LengthMismatch { outcomes: 3, probabilities: 2 })`.
    fn validate_samples_mismatched_lengths_returns_length_mismatch() {
        // Arrange
        let outcomes = [0_u32, 1, 2];
        let probabilities = [0.5_f64, 0.5];

        // Act
        let result = validate_samples(&outcomes, &probabilities);

        // Assert
        match result {
            Err(TrendError::LengthMismatch { outcomes: o, probabilities: p }) => {
                assert_eq!((o, p), (3, 2), "payload should carry both offending lengths");
            }
            other => panic!("expected LengthMismatch error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that any non-finite probability (e.g., NaN) triggers
    // `TrendError::NonFiniteProbability` with the offending payload.
    //
    // Given
    // -----
    // - A probability vector containing a `NaN`.
    //
    // Expect
    // ------
    // - `validate_samples` returns
    //   `Err(TrendError::NonFiniteProbability(value))`.
    fn validate_samples_non_finite_value_returns_non_finite_probability() {
        // Arrange
        let outcomes = [0_u32, 1, 2];
        let probabilities = [0.2_f64, f64::NAN, 0.5];

        // Act
        let result = validate_samples(&outcomes, &probabilities);

        // Assert
        match result {
            Err(TrendError::NonFiniteProbability(v)) => {
                assert!(
                    !v.is_finite(),
                    "NonFiniteProbability payload should itself be non-finite. Got: {v}"
                );
            }
            other => panic!("expected NonFiniteProbability error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that an all-zero probability vector is surfaced as the
    // explicit `InsufficientData` state rather than validating cleanly
    // and producing a meaningless zero-slope fit downstream.
    //
    // Given
    // -----
    // - Six outcomes, every probability 0.0.
    //
    // Expect
    // ------
    // - `validate_samples` returns `Err(TrendError::InsufficientData)`.
    fn validate_samples_all_zero_probabilities_returns_insufficient_data() {
        // Arrange
        let outcomes = [0_u32, 1, 2, 3, 4, 5];
        let probabilities = [0.0_f64; 6];

        // Act
        let result = validate_samples(&outcomes, &probabilities);

        // Assert
        match result {
            Err(TrendError::InsufficientData) => (),
            other => panic!("expected InsufficientData error, got {other:?}"),
        }
    }
}
