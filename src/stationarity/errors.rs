//! stationarity::errors — error types and Python bridges for unit-root tests.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the stationarity-testing
//! routines, together with a conversion layer to Python exceptions for
//! PyO3-based bindings. Validation and numerical failures stay localized in
//! one domain type while exposing a clean surface to both Rust and Python.
//!
//! Key behaviors
//! -------------
//! - Define [`ADFResult`] and [`ADFError`] as the canonical result and error
//!   types for the augmented Dickey–Fuller test and its helpers.
//! - Attach human-readable `Display` messages to each variant so diagnostics
//!   are meaningful without additional context.
//! - Implement `From<ADFError> for PyErr` to surface Rust-side failures as
//!   `ValueError` instances to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Modules using this error type validate their inputs up front and return
//!   [`ADFResult<T>`] instead of panicking; a panic indicates a programming
//!   error, never a malformed user input.
//! - `ADFError` values are small, cheap to clone, and safe to carry across
//!   threads; no variant owns the input series or any matrix.
//! - A failed test never produces a partial outcome: callers either get a
//!   fully populated result or an `ADFError`.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints (e.g., "need
//!   at least 20 observations") rather than implementation details.
//! - Numerical breakdowns share a single variant with a static reason string
//!   naming the stage that failed, so the taxonomy visible to callers stays
//!   closed and matchable.
//!
//! Downstream usage
//! ----------------
//! - The test entry point and the validation, design, and solver layers all
//!   return [`ADFResult<T>`] and propagate failures with `?`.
//! - Python bindings rely on `From<ADFError> for PyErr`; they never match on
//!   variants directly.
//!
//! Testing notes
//! -------------
//! - Unit tests here verify that each variant's `Display` message embeds its
//!   payload (offending length, value, or reason).
//! - The PyO3 conversion is exercised by Python-level tests, not here.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type ADFResult<T> = Result<T, ADFError>;

/// ADFError — failure conditions for the augmented Dickey–Fuller test.
///
/// Purpose
/// -------
/// Represent every validation and computation failure the ADF engine can
/// signal, from malformed inputs to degenerate regressions.
///
/// Variants
/// --------
/// - `InvalidSampleSize { n }`
///   The input series has fewer observations than the minimum required for
///   the ADF regression (`n < 20`).
/// - `ConstantSeries { value }`
///   Every observation compares equal to the first, so the series carries
///   no variation and a unit-root hypothesis is undefined.
/// - `NonFiniteValue { index, value }`
///   An observation is NaN or ±∞ and cannot enter the regression.
/// - `NumericalFailure { reason }`
///   The regression stage broke down: no candidate lag produced a defined
///   information-criterion score, the selected fit exhausted its degrees of
///   freedom, or both normal-equation factorizations failed.
///
/// Invariants
/// ----------
/// - Each variant carries just enough payload (length, offending value, or
///   stage name) for logging and debugging without dragging along data.
/// - `NumericalFailure` reasons are static strings; they describe the stage
///   that failed, not the input.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation.
/// - With the `python-bindings` feature, `From<ADFError> for PyErr` maps
///   every variant to `ValueError` with the `Display` message preserved.
#[derive(Debug, Clone, PartialEq)]
pub enum ADFError {
    //------ Input validation errors ------
    InvalidSampleSize { n: usize },
    ConstantSeries { value: f64 },
    NonFiniteValue { index: usize, value: f64 },
    //------ Regression-stage errors ------
    NumericalFailure { reason: &'static str },
}

impl std::error::Error for ADFError {}

impl std::fmt::Display for ADFError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ADFError::InvalidSampleSize { n } => {
                write!(f, "Invalid sample size: {n}. Need at least 20 observations.")
            }
            ADFError::ConstantSeries { value } => {
                write!(
                    f,
                    "Constant series: every observation equals {value}. \
                     A unit-root test is undefined for a series with no variation."
                )
            }
            ADFError::NonFiniteValue { index, value } => {
                write!(f, "Non-finite value {value} at index {index}. Must be a finite number.")
            }
            ADFError::NumericalFailure { reason } => {
                write!(f, "Numerical failure in the ADF regression: {reason}.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ADFError> for PyErr {
    fn from(err: ADFError) -> PyErr {
        PyValueError::new_err(format!("ADFError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic `Display` formatting for ADFError variants.
    // - Embedding of payload values (n, offending value, index, reason)
    //   into error messages.
    //
    // They intentionally DO NOT cover:
    // - The `From<ADFError> for PyErr` conversion, since exercising it
    //   requires linking against the Python C API and is better handled
    //   by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `ADFError::InvalidSampleSize` embeds the offending length
    // in its `Display` representation.
    //
    // Given
    // -----
    // - An `ADFError::InvalidSampleSize` with n = 19.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "19".
    fn adf_error_invalid_sample_size_includes_length_in_display() {
        // Arrange
        let err = ADFError::InvalidSampleSize { n: 19 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("19"), "Display message should include offending length.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `ADFError::ConstantSeries` embeds the repeated value in
    // its `Display` representation.
    //
    // Given
    // -----
    // - An `ADFError::ConstantSeries` with value = 3.5.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "3.5".
    fn adf_error_constant_series_includes_value_in_display() {
        // Arrange
        let err = ADFError::ConstantSeries { value: 3.5 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("3.5"), "Display message should include the repeated value.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `ADFError::NonFiniteValue` reports both the offending
    // index and the value.
    //
    // Given
    // -----
    // - An `ADFError::NonFiniteValue` with index = 7 and value = NaN.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "7" and "NaN".
    fn adf_error_non_finite_value_includes_index_and_value_in_display() {
        // Arrange
        let err = ADFError::NonFiniteValue { index: 7, value: f64::NAN };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('7'), "Display message should include the index.\nGot: {msg}");
        assert!(msg.contains("NaN"), "Display message should include the value.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that `ADFError::NumericalFailure` carries its reason string
    // through to the `Display` representation.
    //
    // Given
    // -----
    // - An `ADFError::NumericalFailure` with a fixed reason.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains the reason verbatim.
    fn adf_error_numerical_failure_includes_reason_in_display() {
        // Arrange
        let err = ADFError::NumericalFailure { reason: "degrees of freedom exhausted" };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains("degrees of freedom exhausted"),
            "Display message should include the failure reason.\nGot: {msg}"
        );
    }
}
