//! distribution::pmf — empirical probability mass functions from counts.
//!
//! Purpose
//! -------
//! Convert raw frequency counts of a discrete event (e.g., daily unit
//! sales) into a normalized empirical probability mass function, while
//! keeping the degenerate no-data state explicitly distinguishable from a
//! computed distribution.
//!
//! Key behaviors
//! -------------
//! - Normalize an ordered sequence of `(outcome, frequency)` pairs into
//!   probabilities `frequency / total`, preserving input order exactly.
//! - Produce the degenerate all-zero distribution when the total
//!   frequency is zero, without raising an error.
//! - Expose a compact [`Pmf`] value with accessors for outcomes,
//!   probabilities, the originating total, and the degenerate flag,
//!   suitable for both Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - When `total > 0`, every probability lies in [0, 1] and the
//!   probabilities sum to 1.0 within floating-point tolerance.
//! - When `total == 0`, every probability is exactly 0.0 and
//!   [`Pmf::is_degenerate`] reports `true`; callers never have to infer
//!   the no-data state from the probability vector alone.
//! - The outcome set is exactly the externally supplied set: no values
//!   are added, dropped, or reordered.
//! - Input validation (non-empty set, non-negative frequencies) is
//!   delegated to `distribution::validation::validate_counts`, which
//!   returns [`PmfResult`] rather than panicking.
//!
//! Conventions
//! -----------
//! - Outcomes are non-negative integers; order is semantically meaningful
//!   because it is the independent variable of the downstream trend fit.
//! - Frequencies are taken as `i64` so malformed negative inputs are
//!   representable and rejected explicitly.
//! - Error handling uses the dedicated [`PmfError`] type from
//!   `distribution::errors` and the result alias
//!   [`PmfResult<T> = Result<T, PmfError>`].
//!
//! Downstream usage
//! ----------------
//! - Call [`Pmf::from_counts`] with the collaborator-supplied counts to
//!   obtain the distribution rendered by the presentation layer.
//! - Pass the resulting [`Pmf`] to
//!   [`TrendOutcome::estimate`](crate::trend::TrendOutcome::estimate) to
//!   obtain the one-step extrapolation and trend direction; the estimator
//!   refuses degenerate input explicitly.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module verify the worked 20-day sales example
//!   (counts 2, 5, 6, 4, 3 → probabilities 0.10, 0.25, 0.30, 0.20, 0.15),
//!   the sum-to-one invariant, order preservation, the degenerate
//!   all-zero case, and rejection of malformed inputs.
//! - The pure-function property (identical inputs give identical outputs)
//!   is asserted directly, since the builder holds no state.
use ndarray::Array1;

use crate::distribution::errors::PmfResult;
use crate::distribution::validation::validate_counts;

/// Pmf — ordered empirical probability mass function.
///
/// Purpose
/// -------
/// Represent the normalized distribution of a discrete event derived from
/// observed frequency counts, together with the total observation count
/// that produced it.
///
/// Key behaviors
/// -------------
/// - Holds the outcome values in the exact order they were supplied.
/// - Stores one probability per outcome, normalized by the total
///   frequency, or all zeros when the total is zero.
/// - Carries the originating `total` so "no data yet" is always
///   distinguishable from a computed distribution.
/// - Provides lightweight accessor methods so downstream code (including
///   Python bindings) does not depend on the internal layout.
///
/// Parameters
/// ----------
/// Constructed via [`Pmf::from_counts`]:
/// - `counts`: `&[(u32, i64)]`
///   Ordered `(outcome, frequency)` pairs. Must be non-empty and contain
///   no negative frequency.
///
/// Fields
/// ------
/// - `outcomes`: `Vec<u32>`
///   Outcome values in supplied order.
/// - `probabilities`: `Array1<f64>`
///   One probability per outcome, same order as `outcomes`.
/// - `total`: `u64`
///   Sum of the input frequencies; zero marks the degenerate state.
///
/// Invariants
/// ----------
/// - `outcomes.len() == probabilities.len()` and both are ≥ 1 for any
///   constructed `Pmf`.
/// - `total > 0` implies each probability is in [0, 1] and the
///   probabilities sum to 1.0 within 1e-9.
/// - `total == 0` implies every probability is exactly 0.0.
///
/// Performance
/// -----------
/// - Construction is O(n) in the number of outcomes with a single pass
///   for the total and a single pass for normalization.
/// - Accessors are O(1) except [`Pmf::probability_of`], which scans the
///   outcome list (n is small; the reference use case has six outcomes).
///
/// Notes
/// -----
/// - Designed as a simple value object; construction is pure and every
///   call allocates a fresh instance, so repeated calls with identical
///   inputs are bit-identical and nothing is cached or mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Pmf {
    outcomes: Vec<u32>,
    probabilities: Array1<f64>,
    total: u64,
}

impl Pmf {
    /// Build a normalized empirical PMF from frequency counts.
    ///
    /// Parameters
    /// ----------
    /// - `counts`: `&[(u32, i64)]`
    ///   Ordered sequence of `(outcome, frequency)` pairs. The outcome
    ///   set must be non-empty and every frequency must be ≥ 0.
    ///
    /// Returns
    /// -------
    /// `PmfResult<Pmf>`
    ///   - `Ok(Pmf)` on success. When the total frequency is positive,
    ///     each probability is `frequency / total`; when the total is
    ///     zero, every probability is 0.0 and the result is degenerate.
    ///   - `Err(PmfError)` when validation fails.
    ///
    /// Errors
    /// ------
    /// - `PmfError::EmptyOutcomes`
    ///   Returned when `counts` is empty.
    /// - `PmfError::NegativeFrequency { outcome, frequency }`
    ///   Returned when any frequency is negative.
    ///
    /// Panics
    /// ------
    /// - Never panics under normal operation; all user-facing invalid
    ///   inputs are surfaced as `PmfError` values.
    ///
    /// Notes
    /// -----
    /// - The zero-total case is a defined degenerate output, not an
    ///   error; callers distinguish it via [`Pmf::is_degenerate`] or
    ///   [`Pmf::total`] rather than by inspecting the probabilities.
    /// - Input order is preserved exactly; the probability at index `i`
    ///   always corresponds to `counts[i].0`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use pmf_trend::distribution::Pmf;
    ///
    /// let counts = vec![(0_u32, 2_i64), (1, 5), (2, 6), (3, 4), (4, 3)];
    /// let pmf = Pmf::from_counts(&counts).unwrap();
    ///
    /// assert_eq!(pmf.total(), 20);
    /// assert!((pmf.probabilities()[2] - 0.30).abs() < 1e-12);
    /// assert!(!pmf.is_degenerate());
    /// ```
    pub fn from_counts(counts: &[(u32, i64)]) -> PmfResult<Self> {
        validate_counts(counts)?;

        let total: u64 = counts.iter().map(|&(_, frequency)| frequency as u64).sum();
        let outcomes: Vec<u32> = counts.iter().map(|&(outcome, _)| outcome).collect();
        let probabilities: Array1<f64> = if total > 0 {
            counts.iter().map(|&(_, frequency)| frequency as f64 / total as f64).collect()
        } else {
            Array1::zeros(counts.len())
        };

        Ok(Pmf { outcomes, probabilities, total })
    }

    /// Outcome values in the exact order they were supplied.
    pub fn outcomes(&self) -> &[u32] {
        &self.outcomes
    }

    /// Probability vector, aligned with [`outcomes`](Self::outcomes).
    pub fn probabilities(&self) -> &Array1<f64> {
        &self.probabilities
    }

    /// Probability of a single outcome, or `None` if it is not in the set.
    pub fn probability_of(&self, outcome: u32) -> Option<f64> {
        self.outcomes
            .iter()
            .position(|&v| v == outcome)
            .map(|idx| self.probabilities[idx])
    }

    /// Total observation count the distribution was normalized by.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of outcomes in the distribution.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether this is the degenerate no-data distribution (total == 0).
    pub fn is_degenerate(&self) -> bool {
        self.total == 0
    }

    /// Iterate over `(outcome, probability)` pairs in supplied order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.outcomes.iter().copied().zip(self.probabilities.iter().copied())
    }
}
