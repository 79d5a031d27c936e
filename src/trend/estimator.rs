//! trend::estimator — least-squares trend fit and one-step extrapolation.
//!
//! Purpose
//! -------
//! Fit an ordinary-least-squares line `probability ≈ slope · outcome +
//! intercept` over the `(outcome, probability)` pairs of an empirical
//! PMF, extrapolate one step beyond the maximum observed outcome, and
//! classify the trend direction from the slope's sign.
//!
//! Key behaviors
//! -------------
//! - Compute the closed-form least-squares solution over ALL supplied
//!   sample points, zero-probability points included (no train/test
//!   split; this is a descriptive fit, not a predictive validation
//!   exercise).
//! - Extrapolate `predicted = slope · (max(outcome) + 1) + intercept`,
//!   passed through unclamped.
//! - Expose a compact [`TrendOutcome`] value with the next outcome, the
//!   raw extrapolated probability, the direction label, and the fitted
//!   line, suitable for both Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input validation (non-empty samples, matching lengths, finiteness,
//!   not-all-zero) is delegated to `trend::validation::validate_samples`,
//!   which returns [`TrendResult`] rather than panicking.
//! - The degenerate zero-total PMF is refused with
//!   `TrendError::InsufficientData`; a meaningless zero-slope fit is
//!   never fabricated.
//! - Outcomes are distinct in the reference use case, so the
//!   least-squares denominator `n·Σx² − (Σx)²` vanishes only for a
//!   single sample point; that case is defined as slope 0.0 with the
//!   mean probability as intercept.
//!
//! Conventions
//! -----------
//! - The direction label is `Increasing` iff `slope > 0`; a slope of
//!   exactly zero collapses into `Decreasing`, preserving the reference
//!   behavior (a deliberate two-label collapse, recorded in DESIGN.md).
//! - The extrapolated probability is kept on the raw [0, 1] scale; it
//!   may fall outside [0, 1] for extreme inputs, which is a known,
//!   accepted limitation of a linear model applied to a bounded
//!   quantity. [`TrendOutcome::predicted_percent`] scales by 100 for
//!   display.
//! - Error handling uses the dedicated [`TrendError`] type from
//!   `trend::errors` and the result alias
//!   [`TrendResult<T> = Result<T, TrendError>`].
//!
//! Downstream usage
//! ----------------
//! - Call [`TrendOutcome::estimate`] on a
//!   [`Pmf`](crate::distribution::Pmf) built by the distribution subtree
//!   to obtain the suggestion rendered by the presentation layer.
//! - Callers that hold bare pairs instead of a `Pmf` can use
//!   [`TrendOutcome::from_samples`], which detects the all-zero vector
//!   itself.
//! - Python bindings expose only the [`TrendOutcome`] surface, leaving
//!   the helper routines private to the Rust crate.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module verify the worked sales example
//!   (slope 0.005, intercept 0.19, next outcome 5, predicted 0.215),
//!   sign consistency between slope and direction, the single-point
//!   zero-denominator rule, refusal of the degenerate PMF, and the
//!   pure-function property.
//! - The end-to-end counts → PMF → trend pipeline is exercised by the
//!   integration tests.
use crate::distribution::Pmf;
use crate::trend::errors::{TrendError, TrendResult};
use crate::trend::validation::validate_samples;

/// TrendDirection — categorical label for the fitted slope's sign.
///
/// Purpose
/// -------
/// Classify a fitted trend as rising or falling with outcome value, for
/// display by the presentation layer.
///
/// Variants
/// --------
/// - `Increasing`
///   The fitted slope is strictly positive.
/// - `Decreasing`
///   The fitted slope is zero or negative. The flat case deliberately
///   collapses into this label to preserve the reference behavior.
///
/// Notes
/// -----
/// - [`TrendDirection::as_str`] yields the lowercase display form used
///   by the Python bindings (`"increasing"` / `"decreasing"`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
}

impl TrendDirection {
    /// Classify a slope: `Increasing` iff `slope > 0`, else `Decreasing`.
    #[inline]
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 { TrendDirection::Increasing } else { TrendDirection::Decreasing }
    }

    /// Lowercase display form (`"increasing"` / `"decreasing"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// TrendFit — ordinary-least-squares line over PMF samples.
///
/// Purpose
/// -------
/// Represent the slope and intercept of the least-squares line fit to
/// `(outcome, probability)` pairs, recomputed from scratch on every
/// invocation and never persisted.
///
/// Key behaviors
/// -------------
/// - Holds the closed-form least-squares solution minimizing the sum of
///   squared residuals over all supplied points.
/// - Defines the zero-denominator case (single sample point) as slope
///   0.0 with the mean probability as intercept, so the fit is total
///   over validated input.
/// - Provides accessor methods for the slope and intercept so that
///   downstream code does not depend on the internal layout.
///
/// Parameters
/// ----------
/// Constructed via [`TrendFit::fit`]:
/// - `outcomes`: `&[u32]`
///   Independent variable; validated as non-empty.
/// - `probabilities`: `&[f64]`
///   Dependent variable; validated as finite and not all zero.
///
/// Fields
/// ------
/// - `slope`: `f64`
///   Fitted slope of probability against outcome value.
/// - `intercept`: `f64`
///   Fitted intercept.
///
/// Invariants
/// ----------
/// - Both fields are finite whenever construction succeeds, since the
///   inputs are validated finite and the denominator is only used when
///   non-zero.
///
/// Performance
/// -----------
/// - Construction is a single O(n) pass accumulating five running sums;
///   the type stores only two scalars and derives `Copy`.
///
/// Notes
/// -----
/// - No regularization and no weighting; the spec admits no model other
///   than the ordinary least-squares linear trend.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrendFit {
    slope: f64,
    intercept: f64,
}

impl TrendFit {
    /// Fit the least-squares line over `(outcome, probability)` pairs.
    ///
    /// Parameters
    /// ----------
    /// - `outcomes`: `&[u32]`
    ///   Outcome values acting as the independent variable. Must be
    ///   non-empty and the same length as `probabilities`.
    /// - `probabilities`: `&[f64]`
    ///   Empirical probabilities aligned with `outcomes`. Must be
    ///   finite and not all zero.
    ///
    /// Returns
    /// -------
    /// `TrendResult<TrendFit>`
    ///   - `Ok(TrendFit)` with the closed-form solution
    ///     `slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)` and
    ///     `intercept = (Σy − slope·Σx) / n`.
    ///   - `Err(TrendError)` when validation fails.
    ///
    /// Errors
    /// ------
    /// - `TrendError::EmptyPmf`, `TrendError::LengthMismatch`,
    ///   `TrendError::NonFiniteProbability`
    ///   Returned by `validate_samples` for malformed sample sets.
    /// - `TrendError::InsufficientData`
    ///   Returned when every probability is zero.
    ///
    /// Panics
    /// ------
    /// - Never panics under normal operation; all user-facing invalid
    ///   inputs are surfaced as `TrendError` values.
    ///
    /// Notes
    /// -----
    /// - All supplied points enter the fit, including zero-probability
    ///   ones; the reference behavior fits against the full probability
    ///   vector, never just the non-zero entries.
    /// - When the denominator `n·Σx² − (Σx)²` is zero (a single sample
    ///   point), the slope is defined as 0.0 and the intercept as the
    ///   mean probability.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use pmf_trend::trend::TrendFit;
    ///
    /// let outcomes = [0_u32, 1, 2, 3, 4];
    /// let probabilities = [0.10_f64, 0.25, 0.30, 0.20, 0.15];
    ///
    /// let fit = TrendFit::fit(&outcomes, &probabilities).unwrap();
    ///
    /// assert!((fit.slope() - 0.005).abs() < 1e-12);
    /// assert!((fit.intercept() - 0.19).abs() < 1e-12);
    /// ```
    pub fn fit(outcomes: &[u32], probabilities: &[f64]) -> TrendResult<Self> {
        validate_samples(outcomes, probabilities)?;
        let (slope, intercept) = calc_least_squares(outcomes, probabilities);
        Ok(TrendFit { slope, intercept })
    }

    /// Fitted slope of probability against outcome value.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Fitted intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Evaluate the fitted line at an arbitrary outcome value.
    pub fn predict(&self, outcome: u32) -> f64 {
        self.slope * outcome as f64 + self.intercept
    }
}

/// TrendOutcome — one-step extrapolation and direction label.
///
/// Purpose
/// -------
/// Represent the outcome of a single trend estimation: the next outcome
/// value beyond the observed range, its extrapolated probability, the
/// direction label derived from the slope's sign, and the underlying
/// fitted line.
///
/// Key behaviors
/// -------------
/// - Holds `next_outcome = max(observed outcome) + 1` and the raw,
///   unclamped linear projection at that value.
/// - Stores the [`TrendDirection`] classified from the fitted slope.
/// - Provides lightweight accessor methods for each field, plus a
///   percent-scaled view of the prediction for display.
///
/// Parameters
/// ----------
/// Constructed via [`TrendOutcome::estimate`] from a validated
/// [`Pmf`](crate::distribution::Pmf), or via
/// [`TrendOutcome::from_samples`] from bare pairs.
///
/// Fields
/// ------
/// - `next_outcome`: `u32`
///   One past the maximum observed outcome value.
/// - `predicted_probability`: `f64`
///   Raw [0, 1]-scale linear projection at `next_outcome`, unclamped.
/// - `direction`: [`TrendDirection`]
///   `Increasing` iff the fitted slope is strictly positive.
/// - `fit`: [`TrendFit`]
///   The underlying fitted line, exposed via
///   [`slope`](Self::slope) / [`intercept`](Self::intercept).
///
/// Invariants
/// ----------
/// - `predicted_probability` is finite whenever construction succeeds,
///   but it is NOT guaranteed to lie in [0, 1]; bounded-output
///   violations are surfaced as-is.
/// - `direction` always matches the sign classification of
///   [`slope`](Self::slope).
///
/// Performance
/// -----------
/// - Stores four scalars and derives `Copy`, making it cheap to pass by
///   value across FFI boundaries or between threads.
///
/// Notes
/// -----
/// - Designed as a simple value object; it does not own the originating
///   PMF and is recomputed from scratch on every call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrendOutcome {
    next_outcome: u32,
    predicted_probability: f64,
    direction: TrendDirection,
    fit: TrendFit,
}

impl TrendOutcome {
    /// Estimate the trend of an empirical PMF and extrapolate one step.
    ///
    /// Parameters
    /// ----------
    /// - `pmf`: `&Pmf`
    ///   Distribution built by
    ///   [`Pmf::from_counts`](crate::distribution::Pmf::from_counts).
    ///   Must not be degenerate (zero total frequency).
    ///
    /// Returns
    /// -------
    /// `TrendResult<TrendOutcome>`
    ///   - `Ok(TrendOutcome)` on success, containing the next outcome,
    ///     its unclamped extrapolated probability, the direction label,
    ///     and the fitted line.
    ///   - `Err(TrendError::InsufficientData)` when the PMF is
    ///     degenerate; the collaborator renders a "no suggestion"
    ///     message in that case rather than treating it as fatal.
    ///
    /// Errors
    /// ------
    /// - `TrendError::InsufficientData`
    ///   Returned when `pmf.is_degenerate()`, i.e. the user has not yet
    ///   entered any observations.
    ///
    /// Panics
    /// ------
    /// - Never panics under normal operation; a constructed `Pmf` always
    ///   has a non-empty outcome set.
    ///
    /// Notes
    /// -----
    /// - The fit runs over the full probability vector of the PMF,
    ///   zero-probability outcomes included.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use pmf_trend::distribution::Pmf;
    /// use pmf_trend::trend::{TrendDirection, TrendOutcome};
    ///
    /// let counts = vec![(0_u32, 2_i64), (1, 5), (2, 6), (3, 4), (4, 3)];
    /// let pmf = Pmf::from_counts(&counts).unwrap();
    /// let outcome = TrendOutcome::estimate(&pmf).unwrap();
    ///
    /// assert_eq!(outcome.next_outcome(), 5);
    /// assert_eq!(outcome.direction(), TrendDirection::Increasing);
    /// assert!((outcome.predicted_probability() - 0.215).abs() < 1e-12);
    /// ```
    pub fn estimate(pmf: &Pmf) -> TrendResult<Self> {
        if pmf.is_degenerate() {
            return Err(TrendError::InsufficientData);
        }
        let probabilities: Vec<f64> = pmf.probabilities().to_vec();
        Self::from_samples(pmf.outcomes(), &probabilities)
    }

    /// Estimate the trend from bare `(outcome, probability)` pairs.
    ///
    /// Parameters
    /// ----------
    /// - `outcomes`: `&[u32]`
    ///   Outcome values; non-empty and the same length as
    ///   `probabilities`.
    /// - `probabilities`: `&[f64]`
    ///   Empirical probabilities; finite and not all zero. An all-zero
    ///   vector is detected here and reported as `InsufficientData`, so
    ///   callers that bypass [`Pmf`](crate::distribution::Pmf) still
    ///   get the explicit no-data signal.
    ///
    /// Returns
    /// -------
    /// `TrendResult<TrendOutcome>`
    ///   - `Ok(TrendOutcome)` on success.
    ///   - `Err(TrendError)` when validation fails or the samples are
    ///     the degenerate all-zero vector.
    ///
    /// Errors
    /// ------
    /// - Every variant of [`TrendError`], as produced by
    ///   `validate_samples`.
    ///
    /// Panics
    /// ------
    /// - Never panics under normal operation.
    ///
    /// Notes
    /// -----
    /// - `next_outcome` derives from `max(outcomes) + 1`, not from the
    ///   last element, so an unsorted-but-ordered input still
    ///   extrapolates beyond the maximum observed value.
    pub fn from_samples(outcomes: &[u32], probabilities: &[f64]) -> TrendResult<Self> {
        let fit = TrendFit::fit(outcomes, probabilities)?;

        let max_outcome = outcomes
            .iter()
            .copied()
            .max()
            .expect("outcome set is non-empty after a successful fit");
        let next_outcome = max_outcome + 1;

        Ok(TrendOutcome {
            next_outcome,
            predicted_probability: fit.predict(next_outcome),
            direction: TrendDirection::from_slope(fit.slope()),
            fit,
        })
    }

    /// Outcome value one past the maximum observed value.
    pub fn next_outcome(&self) -> u32 {
        self.next_outcome
    }

    /// Raw [0, 1]-scale linear projection at
    /// [`next_outcome`](Self::next_outcome), unclamped.
    pub fn predicted_probability(&self) -> f64 {
        self.predicted_probability
    }

    /// Percent-scaled view of the prediction (×100) for display.
    pub fn predicted_percent(&self) -> f64 {
        self.predicted_probability * 100.0
    }

    /// Direction label classified from the fitted slope's sign.
    pub fn direction(&self) -> TrendDirection {
        self.direction
    }

    /// Slope of the underlying fitted line.
    pub fn slope(&self) -> f64 {
        self.fit.slope()
    }

    /// Intercept of the underlying fitted line.
    pub fn intercept(&self) -> f64 {
        self.fit.intercept()
    }
}

//
// ---------- Private helpers (compact docs) ----------
//

/// Solve the closed-form least-squares line over paired samples.
///
/// Parameters
/// ----------
/// - `outcomes`: `&[u32]`
///   Independent variable. Must be non-empty and the same length as
///   `probabilities` when called from validated entry points.
/// - `probabilities`: `&[f64]`
///   Dependent variable; finite values.
///
/// Returns
/// -------
/// `(f64, f64)`
///   The `(slope, intercept)` pair minimizing the sum of squared
///   residuals:
///   `slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)`,
///   `intercept = (Σy − slope·Σx) / n`.
///   When the denominator is zero (single sample point), returns
///   `(0.0, Σy / n)`.
///
/// Errors
/// ------
/// - Never returns an error; invalid usage is handled by callers.
///
/// Panics
/// ------
/// - Panics if `probabilities` is shorter than `outcomes` due to the
///   paired iteration. Public entry points rely on `validate_samples`
///   to prevent mismatched lengths.
///
/// Notes
/// -----
/// - A single accumulation pass builds the five running sums; no
///   intermediate allocation is performed.
/// - With distinct outcome values the denominator is strictly positive
///   for n ≥ 2, so the zero-denominator branch is reachable only for a
///   single sample point.
#[inline]
fn calc_least_squares(outcomes: &[u32], probabilities: &[f64]) -> (f64, f64) {
    let n = outcomes.len() as f64;

    let mut sum_x = 0.0_f64;
    let mut sum_y = 0.0_f64;
    let mut sum_xx = 0.0_f64;
    let mut sum_xy = 0.0_f64;

    for (&outcome, &probability) in outcomes.iter().zip(probabilities) {
        let x = outcome as f64;
        sum_x += x;
        sum_y += probability;
        sum_xx += x * x;
        sum_xy += x * probability;
    }

    let denom = n * sum_xx - sum_x * sum_x;
    if denom == 0.0 {
        return (0.0, sum_y / n);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;
    (slope, intercept)
}
