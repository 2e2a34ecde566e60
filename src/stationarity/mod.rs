//! stationarity — unit-root testing and its shared infrastructure.
//!
//! Purpose
//! -------
//! Collect the Augmented Dickey–Fuller test engine and everything it
//! rests on: input validation, the deterministic-specification enum,
//! regression design construction, the least-squares solver, the
//! Dickey–Fuller critical-value table, and a dedicated error type with a
//! Python bridge for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Expose the unit-root test via [`ADFOutcome`] and its constructor
//!   [`ADFOutcome::augmented_dickey_fuller`](adf::ADFOutcome::augmented_dickey_fuller).
//! - Centralize input guards in [`validate_input`], ensuring series
//!   length, variation, and finiteness are checked once before any matrix
//!   is built.
//! - Provide a dedicated error type [`ADFError`] and result alias
//!   [`ADFResult`], plus a conversion layer to Python exceptions when the
//!   `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Series are chronologically ordered, oldest observation first; every
//!   public entry point validates before computing.
//! - Routines in this subtree report failures via [`ADFResult`] and never
//!   panic on user-facing invalid inputs; panics indicate programming
//!   errors (e.g., a design built with an out-of-range lag, which the
//!   engine's candidate gate rules out).
//! - [`ADFError`] variants are small and cloneable so they sit comfortably
//!   in unit tests and higher-level orchestration code.
//! - At the Python boundary, all [`ADFError`] values map into a single
//!   exception class (`PyValueError`) with the Rust `Display` message
//!   preserved verbatim.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints such as
//!   "at least 20 observations" rather than low-level details.
//! - The engine entry point
//!   [`ADFOutcome::augmented_dickey_fuller`](adf::ADFOutcome::augmented_dickey_fuller)
//!   delegates shape checks to [`validate_input`] and propagates
//!   [`ADFError`] via [`ADFResult`].
//! - Numerical work happens in `ndarray` for design construction and in
//!   `nalgebra` for factorizations; the seam lives inside
//!   [`ols`](crate::stationarity::ols).
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_unitroot::stationarity::{ADFOutcome, Deterministic};
//!
//!   let series: Vec<f64> = (0..50).map(|t| (t % 5) as f64).collect();
//!   let outcome =
//!       ADFOutcome::augmented_dickey_fuller(&series, None, Deterministic::Constant).unwrap();
//!   assert_eq!(outcome.sample_size(), 50);
//!   ```
//!
//!   and only refers to `stationarity::errors` or
//!   `stationarity::validation` directly when matching on [`ADFError`] or
//!   reusing [`validate_input`].
//! - Batch callers (e.g., one stationarity check per symbol per tick) can
//!   invoke the engine concurrently without synchronization; every call
//!   is stateless.
//! - Python bindings expose a thin wrapper around the same entry point;
//!   they rely on `From<ADFError> for PyErr` to raise `ValueError`
//!   instances instead of returning [`ADFResult`] explicitly.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`errors`] verify `Display` messages and payload
//!   embedding for [`ADFError`] variants.
//! - Unit tests in [`validation`] exercise all branches of
//!   [`validate_input`], including the precedence of the constant-series
//!   check over the length gate.
//! - Unit tests in [`design`], [`ols`], and [`critical_values`] cover the
//!   regression building blocks; [`adf`] covers lag selection, clamping,
//!   determinism, and decision logic end to end.
//! - Rejection-rate behavior on simulated data lives in the crate's
//!   integration suite.

pub mod adf;
pub mod critical_values;
pub mod design;
pub mod deterministic;
pub mod errors;
pub mod ols;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::adf::{auto_max_lag, ADFOutcome, MAX_LAG_CEILING};
pub use self::critical_values::CriticalValues;
pub use self::deterministic::Deterministic;
pub use self::errors::{ADFError, ADFResult};
pub use self::validation::validate_input;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_unitroot::stationarity::prelude::*;
//
// to import the main unit-root testing surface in a single line.

pub mod prelude {
    pub use super::adf::ADFOutcome;
    pub use super::deterministic::Deterministic;
    pub use super::errors::{ADFError, ADFResult};
}
