//! pmf_trend — empirical PMF and trend extrapolation with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the statistical core to Python via the `_pmf_trend` extension
//! module. The core converts raw frequency counts of a discrete event
//! (e.g., daily unit sales) into a normalized empirical probability mass
//! function and fits a linear trend over the (outcome, probability)
//! pairs to extrapolate one step beyond the observed range. When the
//! `python-bindings` feature is enabled, this module defines the
//! Python-facing classes and submodules used by the `pmf_trend` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`distribution` and `trend`) as the
//!   public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for
//!   the `_pmf_trend` Python extension.
//! - Create and register Python submodules (`distribution`, `trend`)
//!   under `pmf_trend` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All computation is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror
//!   the invariants and signatures of their Rust counterparts
//!   ([`Pmf`], [`TrendOutcome`]).
//! - Both components are pure, synchronous functions of their inputs:
//!   nothing is cached or mutated across calls, so concurrent callers
//!   need no coordination.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_pmf_trend.<submodule>` and are
//!   typically wrapped by thin pure-Python facades in the top-level
//!   `pmf_trend` package.
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `PyErr` values at the PyO3 boundary.
//! - The degenerate no-data state (zero total frequency) is a defined
//!   output of PMF construction and an explicit `ValueError` from trend
//!   estimation, never a silent zero-slope fit.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner
//!   modules and can ignore the PyO3 items guarded by the
//!   `python-bindings` feature.
//! - The Python packaging layer imports the `_pmf_trend` module defined
//!   here and wraps its classes in user-facing APIs; the presentation
//!   layer collects the integer inputs and renders the two outputs.
//! - External users are expected to interact with either the safe Rust
//!   APIs or the pure-Python wrappers; the PyO3 plumbing is considered
//!   internal.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner
//!   modules and by the integration tests in `tests/`, which exercise
//!   the full counts → PMF → trend pipeline.
//! - Smoke tests for the PyO3 bindings verify that classes can be
//!   constructed, called, and round-tripped correctly from Python.

pub mod distribution;
pub mod trend;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    distribution::Pmf,
    trend::TrendOutcome,
    utils::{extract_counts, extract_probabilities},
};

/// SalesPmf — Python-facing wrapper for empirical PMF construction.
///
/// Purpose
/// -------
/// Represent a normalized empirical probability mass function built from
/// observed frequency counts when called from Python, forwarding all
/// computation to [`Pmf`].
///
/// Key behaviors
/// -------------
/// - Validate and convert Python inputs into `(outcome, frequency)`
///   pairs.
/// - Build the distribution via [`Pmf::from_counts`] and store it
///   internally.
/// - Expose `outcomes`, `probabilities`, `total`, and `is_degenerate`
///   as Python properties, plus a `probability_of` lookup method.
///
/// Parameters
/// ----------
/// Constructed from Python via `SalesPmf(counts)`:
/// - `counts`: `&PyAny`
///   Either a sequence of `(outcome, frequency)` pairs, a 1-D int64
///   numpy array of frequencies (outcomes implied as 0..n), or a plain
///   sequence of int frequencies.
///
/// Fields
/// ------
/// - `inner`: [`Pmf`]
///   Rust-side distribution used by the accessors.
///
/// Invariants
/// ----------
/// - `inner` satisfies all invariants documented on [`Pmf`], including
///   order preservation and the sum-to-one property for positive
///   totals.
///
/// Performance
/// -----------
/// - One conversion pass copies Python data into a Rust buffer at
///   construction; property access allocates only when converting to
///   Python lists.
///
/// Notes
/// -----
/// - This type is primarily intended to be used from Python; native
///   Rust code should prefer calling [`Pmf::from_counts`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "pmf_trend.distribution")]
pub struct SalesPmf {
    /// The underlying distribution.
    inner: Pmf,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SalesPmf {
    /// Empirical PMF of a discrete event derived from frequency counts.
    ///
    /// Raises `ValueError` for an empty outcome set or a negative
    /// frequency. All-zero counts produce the degenerate distribution.
    #[new]
    #[pyo3(text_signature = "(counts, /)")]
    pub fn new<'py>(raw_counts: &Bound<'py, PyAny>) -> PyResult<SalesPmf> {
        let counts = extract_counts(raw_counts)?;
        let inner = Pmf::from_counts(&counts)?;
        Ok(SalesPmf { inner })
    }

    /// Outcome values in supplied order.
    #[getter]
    pub fn outcomes(&self) -> Vec<u32> {
        self.inner.outcomes().to_vec()
    }

    /// Probabilities aligned with `outcomes`.
    #[getter]
    pub fn probabilities(&self) -> Vec<f64> {
        self.inner.probabilities().to_vec()
    }

    /// Total observation count the distribution was normalized by.
    #[getter]
    pub fn total(&self) -> u64 {
        self.inner.total()
    }

    /// Whether this is the degenerate no-data distribution.
    #[getter]
    pub fn is_degenerate(&self) -> bool {
        self.inner.is_degenerate()
    }

    /// Probability of a single outcome, or `None` if absent.
    pub fn probability_of(&self, outcome: u32) -> Option<f64> {
        self.inner.probability_of(outcome)
    }
}

/// TrendSuggestion — Python-facing wrapper for trend extrapolation.
///
/// Purpose
/// -------
/// Expose the one-step trend extrapolation to Python callers while
/// preserving the core Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Fit the least-squares line over a [`SalesPmf`]'s samples (or over
///   bare outcome/probability sequences) via [`TrendOutcome`].
/// - Expose `next_outcome`, `predicted_probability`,
///   `predicted_percent`, `slope`, `intercept`, and the lowercase
///   `direction` string as Python properties.
/// - Raise `ValueError` for the degenerate zero-total PMF so Python
///   callers can render a "no suggestion" message.
///
/// Parameters
/// ----------
/// Constructed from Python via `TrendSuggestion(pmf)` or the
/// `TrendSuggestion.from_samples(outcomes, probabilities)` factory.
///
/// Fields
/// ------
/// - `inner`: [`TrendOutcome`]
///   Rust-side container holding the full estimation outcome used by
///   the accessors.
///
/// Invariants
/// ----------
/// - `inner` satisfies all invariants documented on [`TrendOutcome`];
///   in particular, the prediction is unclamped and the direction
///   matches the slope's sign classification.
///
/// Performance
/// -----------
/// - At most one allocation copies probabilities into a Rust buffer at
///   construction; property access is O(1).
///
/// Notes
/// -----
/// - This type is primarily intended to be used from Python; native
///   Rust code should prefer calling [`TrendOutcome::estimate`]
///   directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "pmf_trend.trend")]
pub struct TrendSuggestion {
    /// The estimation outcome struct.
    inner: TrendOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl TrendSuggestion {
    /// One-step trend extrapolation over a `SalesPmf`.
    ///
    /// Raises `ValueError` when the PMF is degenerate (no observations
    /// entered yet).
    #[new]
    #[pyo3(text_signature = "(pmf, /)")]
    pub fn new(pmf: &SalesPmf) -> PyResult<TrendSuggestion> {
        let inner = TrendOutcome::estimate(&pmf.inner)?;
        Ok(TrendSuggestion { inner })
    }

    /// Build a suggestion from bare outcome/probability sequences.
    #[staticmethod]
    #[pyo3(text_signature = "(outcomes, probabilities, /)")]
    pub fn from_samples<'py>(
        outcomes: Vec<u32>, raw_probabilities: &Bound<'py, PyAny>,
    ) -> PyResult<TrendSuggestion> {
        let probabilities = extract_probabilities(raw_probabilities)?;
        let inner = TrendOutcome::from_samples(&outcomes, &probabilities)?;
        Ok(TrendSuggestion { inner })
    }

    /// Outcome value one past the maximum observed value.
    #[getter]
    pub fn next_outcome(&self) -> u32 {
        self.inner.next_outcome()
    }

    /// Raw [0, 1]-scale projection at `next_outcome`, unclamped.
    #[getter]
    pub fn predicted_probability(&self) -> f64 {
        self.inner.predicted_probability()
    }

    /// Percent-scaled view of the prediction (×100) for display.
    #[getter]
    pub fn predicted_percent(&self) -> f64 {
        self.inner.predicted_percent()
    }

    /// Fitted slope of probability against outcome value.
    #[getter]
    pub fn slope(&self) -> f64 {
        self.inner.slope()
    }

    /// Fitted intercept.
    #[getter]
    pub fn intercept(&self) -> f64 {
        self.inner.intercept()
    }

    /// Direction label: `"increasing"` or `"decreasing"`.
    #[getter]
    pub fn direction(&self) -> &'static str {
        self.inner.direction().as_str()
    }
}

/// _pmf_trend — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_pmf_trend` Python module and register its submodules
/// used by the public `pmf_trend` package.
///
/// Key behaviors
/// -------------
/// - Create `distribution` and `trend` submodules.
/// - Attach those submodules to the parent `_pmf_trend` module.
/// - Register the submodules in `sys.modules` so they are importable
///   via dotted paths from Python.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `_pmf_trend`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating submodules or manipulating `sys.modules` fails.
///
/// Panics
/// ------
/// - Never panics under normal operation; all failures are mapped into
///   `PyErr`.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing
///   the compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _pmf_trend<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let distribution_mod = PyModule::new(_py, "distribution")?;
    let trend_mod = PyModule::new(_py, "trend")?;
    distribution_submodule(_py, m, &distribution_mod)?;
    trend_submodule(_py, m, &trend_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("pmf_trend.distribution", distribution_mod)?;

    _py.import("sys")?
        .getattr("modules")?
        .set_item("pmf_trend.trend", trend_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn distribution_submodule<'py>(
    _py: Python, pmf_trend: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<SalesPmf>()?;
    pmf_trend.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn trend_submodule<'py>(
    _py: Python, pmf_trend: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<TrendSuggestion>()?;
    pmf_trend.add_submodule(m)?;
    Ok(())
}
