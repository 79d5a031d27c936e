//! Integration tests for the counts → PMF → trend pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end pipeline: from validated frequency counts,
//!   through empirical PMF construction, to the least-squares trend fit,
//!   one-step extrapolation, and direction classification.
//! - Exercise realistic input regimes (the worked 20-day sales example,
//!   sparse counts, unordered outcome sets) rather than toy edge cases
//!   only.
//!
//! Coverage
//! --------
//! - `distribution`:
//!   - `Pmf::from_counts` normalization, order preservation, and the
//!     degenerate all-zero case as seen by a downstream consumer.
//! - `trend`:
//!   - `TrendOutcome::estimate` on a freshly built `Pmf`, including the
//!     extrapolated value, the percent-scaled view, and the direction
//!     label.
//!   - The `InsufficientData` refusal propagating through the pipeline
//!     when no observations have been entered.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level building blocks (count and
//!   sample guards, error `Display` formatting) — these are covered by
//!   unit tests.
//! - Python bindings or user-facing API wrappers — those are expected
//!   to be tested at a higher integration or system level.
//! - Exhaustive sweeps over large outcome sets — the reference use case
//!   is bounded at six outcomes and the design is O(n) regardless.
use pmf_trend::distribution::Pmf;
use pmf_trend::trend::{TrendDirection, TrendError, TrendOutcome};

/// Purpose
/// -------
/// Build the worked 20-day sales example: counts 2, 5, 6, 4, 3 over
/// outcomes 0..=4, plus a trailing zero-count outcome 5 as entered in
/// the reference six-field input form.
///
/// Returns
/// -------
/// - A `Pmf` over outcomes 0..=5 with probabilities
///   0.10, 0.25, 0.30, 0.20, 0.15, 0.00.
///
/// Invariants
/// ----------
/// - Construction succeeds; the counts are valid and total 20.
///
/// Usage
/// -----
/// - Used by pipeline tests that need a non-degenerate distribution
///   with hand-checkable normalization and fit values.
fn worked_example_pmf() -> Pmf {
    let counts = vec![(0_u32, 2_i64), (1, 5), (2, 6), (3, 4), (4, 3), (5, 0)];
    Pmf::from_counts(&counts).expect("worked-example counts should build a Pmf")
}

#[test]
// Purpose
// -------
// Run the full pipeline on the worked example with the trailing
// zero-count outcome included, verifying that the zero-probability
// point enters the fit and the extrapolation lands one past the
// maximum outcome.
//
// Given
// -----
// - The worked-example PMF over outcomes 0..=5 (probability of outcome
//   5 is 0.0).
//
// Expect
// ------
// - total = 20, probabilities sum to 1.0 within 1e-9.
// - next_outcome = 6 and the prediction equals the independently
//   computed full-vector least-squares projection at 6.
// - The direction label matches the sign of that slope.
fn pipeline_worked_example_with_zero_tail_fits_full_vector() {
    // Arrange
    let pmf = worked_example_pmf();

    // Independently computed over all six points:
    // n = 6, Σx = 15, Σx² = 55, Σy = 1.0,
    // Σxy = 0.25 + 0.60 + 0.60 + 0.60 = 2.05.
    let n = 6.0_f64;
    let (sum_x, sum_xx, sum_y, sum_xy) = (15.0_f64, 55.0_f64, 1.0_f64, 2.05_f64);
    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;
    let expected_prediction = slope * 6.0 + intercept;

    // Act
    let sum: f64 = pmf.probabilities().sum();
    let outcome = TrendOutcome::estimate(&pmf)
        .expect("non-degenerate PMF should produce a trend outcome");

    // Assert
    assert_eq!(pmf.total(), 20);
    assert!((sum - 1.0).abs() < 1e-9, "probabilities should sum to 1.0, got {sum}");
    assert_eq!(outcome.next_outcome(), 6);
    assert!(
        (outcome.predicted_probability() - expected_prediction).abs() < 1e-12,
        "expected prediction {expected_prediction}, got {}",
        outcome.predicted_probability()
    );
    let expected_direction = if slope > 0.0 {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    };
    assert_eq!(outcome.direction(), expected_direction);
}

#[test]
// Purpose
// -------
// Verify the five-outcome worked example end to end against the
// hand-computed reference values, including the percent-scaled view
// the presentation layer renders.
//
// Given
// -----
// - Counts 2, 5, 6, 4, 3 over outcomes 0..=4 (no zero tail).
//
// Expect
// ------
// - Probabilities 0.10, 0.25, 0.30, 0.20, 0.15 in supplied order.
// - slope 0.005, intercept 0.19, next_outcome 5, prediction 0.215,
//   predicted_percent 21.5, direction Increasing.
fn pipeline_worked_example_matches_reference_values() {
    // Arrange
    let counts = vec![(0_u32, 2_i64), (1, 5), (2, 6), (3, 4), (4, 3)];
    let expected_probs = [0.10, 0.25, 0.30, 0.20, 0.15];

    // Act
    let pmf = Pmf::from_counts(&counts).expect("valid counts should build a Pmf");
    let outcome = TrendOutcome::estimate(&pmf)
        .expect("non-degenerate PMF should produce a trend outcome");

    // Assert: normalization and order
    assert_eq!(pmf.outcomes(), &[0, 1, 2, 3, 4]);
    for (idx, &want) in expected_probs.iter().enumerate() {
        let got = pmf.probabilities()[idx];
        assert!(
            (got - want).abs() < 1e-12,
            "probability mismatch at index {idx}: want {want}, got {got}"
        );
    }

    // Assert: fit and extrapolation
    assert!((outcome.slope() - 0.005).abs() < 1e-12);
    assert!((outcome.intercept() - 0.19).abs() < 1e-12);
    assert_eq!(outcome.next_outcome(), 5);
    assert!((outcome.predicted_probability() - 0.215).abs() < 1e-12);
    assert!((outcome.predicted_percent() - 21.5).abs() < 1e-10);
    assert_eq!(outcome.direction(), TrendDirection::Increasing);
}

#[test]
// Purpose
// -------
// Verify that the no-data state propagates through the pipeline as the
// explicit `InsufficientData` refusal: a form with all six fields at
// zero builds the degenerate distribution, and trend estimation
// declines to fabricate a fit.
//
// Given
// -----
// - Six outcomes, every frequency 0.
//
// Expect
// ------
// - `Pmf::from_counts` succeeds with an all-zero, degenerate
//   distribution.
// - `TrendOutcome::estimate` returns
//   `Err(TrendError::InsufficientData)`.
fn pipeline_no_observations_yields_degenerate_pmf_and_no_suggestion() {
    // Arrange
    let counts: Vec<(u32, i64)> = (0..6).map(|v| (v, 0)).collect();

    // Act
    let pmf = Pmf::from_counts(&counts).expect("all-zero counts are valid input");
    let result = TrendOutcome::estimate(&pmf);

    // Assert
    assert!(pmf.is_degenerate());
    assert!(pmf.probabilities().iter().all(|&p| p == 0.0));
    match result {
        Err(TrendError::InsufficientData) => (),
        other => panic!("expected InsufficientData, got {other:?}"),
    }
}

#[test]
// Purpose
// -------
// Verify that extrapolation targets one past the MAXIMUM observed
// outcome even when the supplied outcome order is not ascending, and
// that the supplied order is preserved in the PMF.
//
// Given
// -----
// - Counts supplied in the order [4, 0, 2] with positive frequencies.
//
// Expect
// ------
// - `pmf.outcomes()` preserves [4, 0, 2].
// - `next_outcome` is 5 (max 4 + 1), not 3 (last element + 1).
fn pipeline_unsorted_outcomes_extrapolate_beyond_maximum() {
    // Arrange
    let counts = vec![(4_u32, 1_i64), (0, 1), (2, 2)];

    // Act
    let pmf = Pmf::from_counts(&counts).expect("valid counts should build a Pmf");
    let outcome = TrendOutcome::estimate(&pmf)
        .expect("non-degenerate PMF should produce a trend outcome");

    // Assert
    assert_eq!(pmf.outcomes(), &[4, 0, 2]);
    assert_eq!(outcome.next_outcome(), 5);
}

#[test]
// Purpose
// -------
// Assert the pure-function property across the whole pipeline: two
// runs from the same counts produce identical distributions and
// identical trend outcomes, with no state carried between calls.
//
// Given
// -----
// - The worked-example counts, run through the pipeline twice.
//
// Expect
// ------
// - Both `Pmf` values and both `TrendOutcome` values compare equal.
fn pipeline_is_idempotent_across_repeated_runs() {
    // Arrange
    let counts = vec![(0_u32, 2_i64), (1, 5), (2, 6), (3, 4), (4, 3), (5, 0)];

    // Act
    let first_pmf = Pmf::from_counts(&counts).expect("valid counts should build a Pmf");
    let second_pmf = Pmf::from_counts(&counts).expect("valid counts should build a Pmf");
    let first_outcome =
        TrendOutcome::estimate(&first_pmf).expect("estimation should succeed");
    let second_outcome =
        TrendOutcome::estimate(&second_pmf).expect("estimation should succeed");

    // Assert
    assert_eq!(first_pmf, second_pmf);
    assert_eq!(first_outcome, second_outcome);
}
