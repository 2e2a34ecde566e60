//! stationarity::ols — least-squares fits for ADF regressions.
//!
//! Purpose
//! -------
//! Solve the normal equations `(XᵗX)β = Xᵗy` for an [`ADFDesign`] and
//! package everything the test statistic needs: coefficients, the inverse
//! of `XᵗX`, residuals, SSE, and the residual variance. Handles conversion
//! between `ndarray` and `nalgebra` types.
//!
//! Key behaviors
//! -------------
//! - Form `XᵗX` and `Xᵗy` in `ndarray`, copy the square system into a
//!   `nalgebra::DMatrix` (`fill_dmatrix`), and factorize there.
//! - Primary path: Cholesky, the direct factorization for symmetric
//!   positive-definite systems.
//! - Fallback path on singular or indefinite `XᵗX`: symmetric
//!   eigendecomposition with eigenvalue truncation, yielding the
//!   Moore–Penrose pseudoinverse and its minimum-norm solution.
//! - Whichever path runs produces **both** `β` and `(XᵗX)⁻¹`, so the
//!   coefficient vector and the variance denominator always come from the
//!   same factorization.
//!
//! Invariants & assumptions
//! ------------------------
//! - The design has strictly more rows than columns; otherwise the fit has
//!   no degrees of freedom and [`OlsFit::solve`] reports a numerical
//!   failure instead of producing a statistic-ready fit.
//! - Input entries are finite (guaranteed by upstream validation), so the
//!   eigendecomposition is well-defined.
//! - Eigenvalues at or below [`EIGEN_REL_EPS`] times the largest
//!   eigenvalue are treated as zero and excluded from pseudoinverse
//!   directions.
//!
//! Conventions
//! -----------
//! - `σ² = SSE / (T − k)` with `T` rows and `k` regressors; the divisor is
//!   the residual degrees of freedom, not the row count.
//! - Errors are reported via [`ADFResult<T>`].
//!
//! Downstream usage
//! ----------------
//! - The lag scan calls [`OlsFit::solve`] once per candidate lag and reads
//!   `sse`/`sigma2` for the information criterion; the final fit reads the
//!   coefficient and inverse diagonals for the t-type statistic.
//!
//! Testing notes
//! -------------
//! - Unit tests cover exact coefficient recovery on well-posed designs,
//!   the minimum-norm behavior of the eigen fallback on singular systems,
//!   rank-deficient designs fitting with near-zero SSE, and the
//!   degrees-of-freedom guard.

use nalgebra::{Cholesky, DMatrix, DVector};
use ndarray::{Array1, Array2};

use crate::stationarity::design::ADFDesign;
use crate::stationarity::errors::{ADFError, ADFResult};

/// Relative eigenvalue cutoff for the rank-revealing fallback.
///
/// Eigenvalues `λ ≤ EIGEN_REL_EPS · λ_max` are treated as numerically zero
/// when constructing pseudoinverse directions. The cutoff scales with the
/// largest eigenvalue so the rank decision does not depend on the units of
/// the input series.
const EIGEN_REL_EPS: f64 = 1e-12;

/// OlsFit — solved ADF regression with its variance ingredients.
///
/// Purpose
/// -------
/// Hold the output of one normal-equations solve: the coefficient vector,
/// the inverse of `XᵗX`, residuals, SSE, and `σ²`, along with the row and
/// column counts needed for information criteria and degrees of freedom.
///
/// Invariants
/// ----------
/// - `nobs() > n_regressors()`, enforced at construction.
/// - `beta` and `xtx_inv` come from the same factorization of the same
///   `XᵗX` (Cholesky, or the truncated eigendecomposition fallback).
/// - `sigma2 = sse / dof()` with `dof() = nobs() − n_regressors() > 0`.
///
/// Notes
/// -----
/// - On rank-deficient designs the fallback returns the minimum-norm
///   least-squares solution; diagonal entries of `xtx_inv` along truncated
///   directions are finite (the pseudoinverse sets them from surviving
///   eigenvalues only).
/// - `tss` is carried so callers can tell a machine-noise residual (an
///   exact fit up to rounding) from a genuinely small one; an SSE at
///   rounding scale relative to `tss` supports no meaningful variance
///   estimate.
#[derive(Debug, Clone)]
pub struct OlsFit {
    beta: Array1<f64>,
    xtx_inv: Array2<f64>,
    residuals: Array1<f64>,
    sse: f64,
    tss: f64,
    sigma2: f64,
    nobs: usize,
    n_regressors: usize,
}

impl OlsFit {
    /// Solve the normal equations for a built design.
    ///
    /// Parameters
    /// ----------
    /// - `design`: `&ADFDesign`
    ///   Regressor matrix and dependent vector, `T × k` with finite
    ///   entries.
    ///
    /// Returns
    /// -------
    /// `ADFResult<OlsFit>`
    ///   The solved fit, or a [`ADFError::NumericalFailure`] when the fit
    ///   cannot produce a defined variance.
    ///
    /// Errors
    /// ------
    /// - `ADFError::NumericalFailure { reason: "degrees of freedom exhausted" }`
    ///   when `T ≤ k`, so `σ²` has no positive divisor.
    /// - `ADFError::NumericalFailure { reason: "design matrix factorization failed" }`
    ///   when the fallback eigendecomposition finds no usable direction
    ///   (all eigenvalues numerically zero).
    ///
    /// Notes
    /// -----
    /// - Cholesky is attempted first; `None` from `Cholesky::new` (a
    ///   non-positive pivot) routes the **same** `XᵗX` and `Xᵗy` through
    ///   the eigendecomposition fallback, so no caller observes a mixed
    ///   factorization.
    pub fn solve(design: &ADFDesign) -> ADFResult<OlsFit> {
        let nobs = design.rows();
        let n_regressors = design.cols();
        if nobs <= n_regressors {
            return Err(ADFError::NumericalFailure { reason: "degrees of freedom exhausted" });
        }

        let xtx = design.x.t().dot(&design.x);
        let xty = design.x.t().dot(&design.y);

        let mut xtx_nalg = DMatrix::<f64>::zeros(n_regressors, n_regressors);
        fill_dmatrix(&xtx, &mut xtx_nalg);
        let xty_nalg = DVector::from_vec(xty.to_vec());

        let (beta_nalg, inv_nalg) = match Cholesky::new(xtx_nalg.clone()) {
            Some(chol) => {
                let beta = chol.solve(&xty_nalg);
                let inverse = chol.inverse();
                (beta, inverse)
            }
            None => solve_by_eigen(xtx_nalg, &xty_nalg)?,
        };

        let beta = Array1::from_iter(beta_nalg.iter().copied());
        let xtx_inv =
            Array2::from_shape_fn((n_regressors, n_regressors), |(i, j)| inv_nalg[(i, j)]);

        let fitted = design.x.dot(&beta);
        let residuals = &design.y - &fitted;
        let sse = residuals.iter().map(|e| e * e).sum::<f64>();
        let tss = design.y.iter().map(|v| v * v).sum::<f64>();
        let sigma2 = sse / (nobs - n_regressors) as f64;

        Ok(OlsFit { beta, xtx_inv, residuals, sse, tss, sigma2, nobs, n_regressors })
    }

    /// Estimated coefficient vector `β`.
    pub fn beta(&self) -> &Array1<f64> {
        &self.beta
    }

    /// Inverse (or pseudoinverse) of `XᵗX` from the factorization that
    /// produced [`beta`](Self::beta).
    pub fn xtx_inv(&self) -> &Array2<f64> {
        &self.xtx_inv
    }

    /// Regression residuals `y − Xβ`.
    pub fn residuals(&self) -> &Array1<f64> {
        &self.residuals
    }

    /// Residual sum of squares.
    pub fn sse(&self) -> f64 {
        self.sse
    }

    /// Uncentered total sum of squares of the dependent vector, the scale
    /// against which a residual is judged numerically zero.
    pub fn tss(&self) -> f64 {
        self.tss
    }

    /// Residual variance `SSE / (T − k)`.
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Number of regression rows `T`.
    pub fn nobs(&self) -> usize {
        self.nobs
    }

    /// Number of regressors `k`.
    pub fn n_regressors(&self) -> usize {
        self.n_regressors
    }

    /// Residual degrees of freedom `T − k` (always positive).
    pub fn dof(&self) -> usize {
        self.nobs - self.n_regressors
    }
}

// ---- Helper methods ----

/// fill_dmatrix — copy a square symmetric `ndarray` matrix into nalgebra.
///
/// Copies `XᵗX` into a preallocated `DMatrix<f64>` with column-major
/// writes, mirroring both triangles so any rounding asymmetry in the
/// input is preserved rather than silently symmetrized.
///
/// Panics
/// ------
/// - May panic if the two matrices have inconsistent shapes, due to
///   out-of-bounds indexing. Callers allocate the destination from the
///   source dimensions.
fn fill_dmatrix(xtx: &Array2<f64>, xtx_nalg: &mut DMatrix<f64>) {
    let k = xtx.ncols();
    for j in 0..k {
        for i in j..k {
            if i == j {
                xtx_nalg[(i, i)] = xtx[[i, i]];
            } else {
                xtx_nalg[(i, j)] = xtx[[i, j]];
                xtx_nalg[(j, i)] = xtx[[j, i]];
            }
        }
    }
}

/// solve_by_eigen — rank-revealing fallback for the normal equations.
///
/// Factorizes `XᵗX = Q Λ Qᵗ` by symmetric eigendecomposition, truncates
/// eigenvalues at [`EIGEN_REL_EPS`] times the largest one, and returns the
/// pseudoinverse together with the minimum-norm solution
/// `β = (XᵗX)⁺ Xᵗy`.
///
/// Errors
/// ------
/// - `ADFError::NumericalFailure { reason: "design matrix factorization failed" }`
///   when no eigenvalue exceeds the cutoff, i.e. `XᵗX` is numerically the
///   zero matrix.
///
/// Notes
/// -----
/// - Directions with `λ ≤ cutoff` contribute nothing to either the
///   pseudoinverse or `β`; this is what keeps rank-deficient designs
///   (e.g. an exactly collinear trend and level) solvable instead of
///   producing unbounded coefficients.
fn solve_by_eigen(
    xtx: DMatrix<f64>, xty: &DVector<f64>,
) -> ADFResult<(DVector<f64>, DMatrix<f64>)> {
    let k = xtx.nrows();
    let eigen_decomp = xtx.symmetric_eigen();
    let q = eigen_decomp.eigenvectors;
    let eigenvals = eigen_decomp.eigenvalues;

    let lambda_max = eigenvals.iter().fold(0.0_f64, |acc, &lambda| acc.max(lambda.abs()));
    if lambda_max <= 0.0 || !lambda_max.is_finite() {
        return Err(ADFError::NumericalFailure { reason: "design matrix factorization failed" });
    }
    let cutoff = EIGEN_REL_EPS * lambda_max;

    let mut inverse = DMatrix::<f64>::zeros(k, k);
    for (m, &lambda) in eigenvals.iter().enumerate() {
        if lambda > cutoff {
            let recip = 1.0 / lambda;
            for i in 0..k {
                let coeff = recip * q[(i, m)];
                for j in 0..k {
                    inverse[(i, j)] += coeff * q[(j, m)];
                }
            }
        }
    }

    let beta = &inverse * xty;
    Ok((beta, inverse))
}
