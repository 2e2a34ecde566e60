//! rust_unitroot — unit-root testing for time series with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the Augmented Dickey–Fuller engine to Python via the `_rust_unitroot`
//! extension module. When the `python-bindings` feature is enabled, this module
//! defines the Python-facing classes and submodules used by the
//! `rust_unitroot` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`stationarity`) as the public crate
//!   surface.
//! - Define the `#[pyclass]` wrapper and the `#[pymodule]` initializer for the
//!   `_rust_unitroot` Python extension.
//! - Create and register the Python submodule (`stationarity`) under
//!   `rust_unitroot` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible type mirrors the
//!   invariants and accessors of its Rust counterpart
//!   ([`stationarity::ADFOutcome`]).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_unitroot.<submodule>` and are
//!   typically wrapped by thin pure-Python facades in the top-level
//!   `rust_unitroot` package.
//! - Series ordering, lag conventions, and decision rules follow the
//!   documentation of the underlying Rust modules (`stationarity::adf` and
//!   friends).
//! - Errors from core Rust code are propagated as [`stationarity::ADFError`]
//!   internally and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_rust_unitroot` module defined
//!   here and wraps its classes in user-facing Python APIs.
//! - External users are expected to interact with either the safe Rust APIs or
//!   the pure-Python wrappers; the PyO3 plumbing is considered internal.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by the integration suite under `tests/`.
//! - Smoke tests for the PyO3 bindings verify that the class can be
//!   constructed and its properties read from Python.

pub mod stationarity;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    stationarity::adf::ADFOutcome,
    utils::{extract_deterministic, extract_f64_array},
};

/// AugmentedDickeyFuller — Python-facing wrapper for the ADF unit-root test.
///
/// Purpose
/// -------
/// Represent the result of an Augmented Dickey–Fuller test when called from
/// Python and forward all computation to [`ADFOutcome`].
///
/// Key behaviors
/// -------------
/// - Validate and convert Python inputs into a contiguous `f64` slice.
/// - Run the test via [`ADFOutcome::augmented_dickey_fuller`] and store the
///   outcome internally.
/// - Expose scalar accessors (`statistic`, `selected_lag`, `aic`,
///   `pvalue`, rejection flags, `is_stationary`, `critical_values`) as
///   Python properties.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `AugmentedDickeyFuller(data, max_lag=None, deterministic='constant')`:
/// - `data`: `&PyAny`
///   One-dimensional array-like of `f64` values, length ≥ 20, with some
///   variation and no non-finite entries.
/// - `max_lag`: `Option<usize>`
///   Upper bound on the lagged-difference order; `None` or `0` selects the
///   automatic bound.
/// - `deterministic`: `Option<&str>`
///   One of `'nc'`, `'c'`, or `'ct'` (long spellings accepted); defaults to
///   `'c'`.
///
/// Fields
/// ------
/// - `inner`: [`ADFOutcome`]
///   Rust-side container holding the full test outcome used by the accessors.
///
/// Invariants
/// ----------
/// - `inner` always holds a successfully computed outcome; construction fails
///   with `ValueError` otherwise.
///
/// Performance
/// -----------
/// - At most one allocation is performed to copy Python data into a Rust
///   buffer when needed; property access is O(1).
///
/// Notes
/// -----
/// - This type is primarily intended to be used from Python; native Rust code
///   should prefer calling [`ADFOutcome::augmented_dickey_fuller`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_unitroot.stationarity")]
pub struct AugmentedDickeyFuller {
    /// The ADF test result struct.
    inner: ADFOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl AugmentedDickeyFuller {
    /// Result of the Augmented Dickey–Fuller unit-root test.
    ///
    /// Returned by [`stationarity.AugmentedDickeyFuller`].
    /// The statistic follows the Dickey–Fuller τ distribution under the null.
    #[new]
    #[pyo3(
        text_signature = "(data, /, max_lag=None, deterministic='constant')",
        signature = (raw_data, max_lag = None, deterministic = None)
    )]
    #[allow(clippy::self_named_constructors)]
    pub fn augmented_dickey_fuller<'py>(
        py: Python<'py>, raw_data: &Bound<'py, PyAny>, max_lag: Option<usize>,
        deterministic: Option<&str>,
    ) -> PyResult<AugmentedDickeyFuller> {
        let det = extract_deterministic(deterministic)?;

        let arr = extract_f64_array(py, raw_data)?;
        let data: &[f64] = arr
            .as_slice()
            .expect("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64");

        let result = ADFOutcome::augmented_dickey_fuller(data, max_lag, det)?;
        Ok(AugmentedDickeyFuller { inner: result })
    }

    /// The ADF t-type statistic on the lagged-level coefficient.
    #[getter]
    pub fn statistic(&self) -> f64 {
        self.inner.statistic()
    }

    /// The lag order selected by the AIC scan.
    #[getter]
    pub fn selected_lag(&self) -> usize {
        self.inner.selected_lag()
    }

    /// The AIC of the selected candidate regression.
    #[getter]
    pub fn aic(&self) -> f64 {
        self.inner.aic()
    }

    /// The length of the input series.
    #[getter]
    pub fn sample_size(&self) -> usize {
        self.inner.sample_size()
    }

    /// The deterministic specification the test ran under.
    #[getter]
    pub fn deterministic(&self) -> &'static str {
        self.inner.deterministic().label()
    }

    /// The approximate p-value interpolated from the critical-value row.
    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.approximate_p_value()
    }

    /// The (1%, 5%, 10%) critical values the statistic was judged against.
    #[getter]
    pub fn critical_values(&self) -> (f64, f64, f64) {
        let row = self.inner.critical_values();
        (row.one_percent, row.five_percent, row.ten_percent)
    }

    /// Whether the unit-root null is rejected at the 1% level.
    #[getter]
    pub fn reject_at_1pct(&self) -> bool {
        self.inner.reject_at_1pct()
    }

    /// Whether the unit-root null is rejected at the 5% level.
    #[getter]
    pub fn reject_at_5pct(&self) -> bool {
        self.inner.reject_at_5pct()
    }

    /// Whether the unit-root null is rejected at the 10% level.
    #[getter]
    pub fn reject_at_10pct(&self) -> bool {
        self.inner.reject_at_10pct()
    }

    /// Whether the series is judged stationary (rejection at 5%).
    #[getter]
    pub fn is_stationary(&self) -> bool {
        self.inner.is_stationary()
    }
}

/// _rust_unitroot — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_unitroot` Python module and register the submodule used
/// by the public `rust_unitroot` package.
///
/// Key behaviors
/// -------------
/// - Create the `stationarity` submodule.
/// - Attach it to the parent `_rust_unitroot` module.
/// - Register the submodule in `sys.modules` so it is importable via a
///   dotted path from Python.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `_rust_unitroot`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
///
/// Panics
/// ------
/// - Never panics under normal operation; all failures are mapped into
///   `PyErr`.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_unitroot<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let stationarity_mod = PyModule::new(_py, "stationarity")?;
    stationarity(_py, m, &stationarity_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_unitroot.stationarity", stationarity_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn stationarity<'py>(
    _py: Python, rust_unitroot: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<AugmentedDickeyFuller>()?;
    rust_unitroot.add_submodule(m)?;
    Ok(())
}
