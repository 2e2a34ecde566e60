//! stationarity::design — ADF regression design construction.
//!
//! Purpose
//! -------
//! Build the dependent vector and design matrix for the augmented
//! Dickey–Fuller regression at a given lag order and deterministic
//! specification. The regression explains the first difference of the
//! series by deterministic terms, the lagged level, and lagged first
//! differences.
//!
//! Key behaviors
//! -------------
//! - Produce `T = n − p − 1` rows for a series of length `n` and lag `p`,
//!   one per usable time index `t = p+1 .. n−1`.
//! - Lay columns out as `[constant?]`, `[trend?]`, lagged level `y[t−1]`,
//!   then the `p` lagged differences `Δy[t−1] .. Δy[t−p]`.
//! - Use the raw zero-based row index as the trend regressor, with no
//!   centering or rescaling.
//!
//! Invariants & assumptions
//! ------------------------
//! - Callers guarantee `p + 1 < n`; the public entry point enforces a
//!   stricter minimum-sample rule before any design is built.
//! - The column layout matches [`Deterministic`]: the lagged-level column
//!   sits at `deterministic.unit_root_index()`.
//!
//! Conventions
//! -----------
//! - `Δy[t]` denotes `y[t] − y[t−1]`; row `r` corresponds to absolute time
//!   `t = p + 1 + r`.
//!
//! Downstream usage
//! ----------------
//! - The lag scan builds one design per candidate lag and hands it to
//!   [`OlsFit::solve`]; the final fit rebuilds the design at the selected
//!   lag.
//!
//! [`OlsFit::solve`]: crate::stationarity::ols::OlsFit::solve
//!
//! Testing notes
//! -------------
//! - Unit tests verify the dimensions, the column order for each
//!   deterministic specification, and the exact entries on a small series.

use ndarray::{Array1, Array2};

use crate::stationarity::deterministic::Deterministic;

/// Design matrix and dependent vector for one ADF regression.
///
/// Produced by [`ADFDesign::build`] for a fixed lag order and
/// deterministic specification. The matrix has one row per usable
/// observation and one column per regressor, in the fixed order
/// documented on [`Deterministic`].
#[derive(Debug, Clone)]
pub struct ADFDesign {
    /// Regressor matrix, `T × k`.
    pub x: Array2<f64>,
    /// First differences of the series, length `T`.
    pub y: Array1<f64>,
}

impl ADFDesign {
    /// Build the ADF design for `series` at lag order `p`.
    ///
    /// Parameters
    /// ----------
    /// - `series`: `&[f64]`
    ///   Observations in time order, validated upstream (finite, length
    ///   well above `p + 1`).
    /// - `p`: `usize`
    ///   Number of lagged first differences to include.
    /// - `deterministic`: [`Deterministic`]
    ///   Deterministic terms to prepend to the regressors.
    ///
    /// Returns
    /// -------
    /// `ADFDesign`
    ///   Matrix of shape `(n − p − 1) × (base_regressors + p)` and the
    ///   matching dependent vector of first differences.
    ///
    /// Panics
    /// ------
    /// - Panics if `p + 1 >= series.len()`, which leaves no usable rows.
    ///   Public entry points enforce a minimum-sample rule that rules
    ///   this out before any design is built.
    ///
    /// Notes
    /// -----
    /// - The trend column (when present) holds the zero-based row index
    ///   `0, 1, 2, …`; it is not centered and not scaled.
    pub fn build(series: &[f64], p: usize, deterministic: Deterministic) -> ADFDesign {
        let n = series.len();
        let rows = n - p - 1;
        let cols = deterministic.base_regressors() + p;

        let mut x = Array2::<f64>::zeros((rows, cols));
        let mut y = Array1::<f64>::zeros(rows);

        for r in 0..rows {
            let t = p + 1 + r;
            y[r] = series[t] - series[t - 1];

            let mut c = 0;
            if deterministic.has_constant() {
                x[[r, c]] = 1.0;
                c += 1;
            }
            if deterministic.has_trend() {
                x[[r, c]] = r as f64;
                c += 1;
            }
            x[[r, c]] = series[t - 1];
            c += 1;
            for j in 1..=p {
                x[[r, c]] = series[t - j] - series[t - j - 1];
                c += 1;
            }
        }

        ADFDesign { x, y }
    }

    /// Number of regression rows `T`.
    pub fn rows(&self) -> usize {
        self.x.nrows()
    }

    /// Number of regressors `k`.
    pub fn cols(&self) -> usize {
        self.x.ncols()
    }
}
