//! distribution — empirical PMF construction and shared infrastructure.
//!
//! Purpose
//! -------
//! Collect the PMF-building routine and its shared infrastructure for
//! discrete-event frequency data. This subtree implements normalization
//! of raw frequency counts into an empirical probability mass function
//! together with common input validation and error handling, including
//! Python bridges for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Expose empirical PMF construction via [`Pmf`] and its constructor
//!   [`Pmf::from_counts`](pmf::Pmf::from_counts).
//! - Centralize count-input guards in [`validate_counts`], ensuring the
//!   outcome set and frequencies are checked once in a consistent way.
//! - Provide a dedicated error type [`PmfError`] and result alias
//!   [`PmfResult`], plus a conversion layer to Python exceptions when
//!   the `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Count inputs are ordered `(outcome, frequency)` pairs with a
//!   non-empty outcome set and non-negative frequencies; construction
//!   calls [`validate_counts`] before any normalization.
//! - A zero total frequency is a defined degenerate output (all-zero
//!   probabilities), never an error; the [`Pmf`] carries its `total` so
//!   the two states are never conflated.
//! - Routines in this subtree report failures via [`PmfResult`] and
//!   never panic on user-facing invalid inputs.
//! - At the Python boundary, all [`PmfError`] values are mapped into a
//!   single exception class (`PyValueError`) with the Rust `Display`
//!   message preserved verbatim.
//!
//! Conventions
//! -----------
//! - This subtree is focused on *distribution construction*; the trend
//!   fit over the resulting probabilities lives under `trend` with its
//!   own errors module.
//! - Error messages are phrased in terms of domain constraints such as
//!   "frequency must be non-negative" rather than low-level details.
//! - The public entry point ([`Pmf::from_counts`](pmf::Pmf::from_counts))
//!   is a thin wrapper that delegates shape checks to [`validate_counts`]
//!   and propagates [`PmfError`] via [`PmfResult`].
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use pmf_trend::distribution::{Pmf, PmfResult};
//!
//!   # fn demo() -> PmfResult<()> {
//!   let pmf: Pmf = Pmf::from_counts(&[(0, 2), (1, 5), (2, 6)])?;
//!   # Ok(())
//!   # }
//!   ```
//!
//!   and only refers to `distribution::errors` or
//!   `distribution::validation` directly when matching on [`PmfError`]
//!   or reusing [`validate_counts`].
//! - Trend estimation consumes the resulting [`Pmf`] via
//!   [`TrendOutcome::estimate`](crate::trend::TrendOutcome::estimate).
//! - Python bindings expose thin wrappers around the same Rust entry
//!   points; they rely on `From<PmfError> for PyErr` to raise
//!   `ValueError` instances instead of returning [`PmfResult`]
//!   explicitly.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`errors`] verify `Display` messages and payload
//!   embedding for [`PmfError`] variants.
//! - Unit tests in [`validation`] exercise all branches of
//!   [`validate_counts`], including the all-zero-counts case that must
//!   validate cleanly.
//! - Unit tests in [`pmf`] cover the worked sales example, the
//!   sum-to-one invariant, order preservation, the degenerate
//!   distribution, and idempotence.

pub mod errors;
pub mod pmf;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{PmfError, PmfResult};
pub use self::pmf::Pmf;
pub use self::validation::validate_counts;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use pmf_trend::distribution::prelude::*;
//
// to import the main distribution surface in a single line.

pub mod prelude {
    pub use super::errors::{PmfError, PmfResult};
    pub use super::pmf::Pmf;
}
