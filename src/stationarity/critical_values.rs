//! stationarity::critical_values — Dickey–Fuller rejection thresholds.
//!
//! Purpose
//! -------
//! Provide the finite-sample critical values of the Dickey–Fuller τ
//! distribution for the three deterministic specifications, bucketed by
//! sample size, together with an approximate p-value interpolated from
//! the tabulated row.
//!
//! Key behaviors
//! -------------
//! - [`lookup`] selects a [`CriticalValues`] triple from a fixed table by
//!   deterministic specification and full series length.
//! - Rejection at a significance level means the statistic falls strictly
//!   below that level's threshold (the τ distribution rejects in the left
//!   tail).
//! - [`CriticalValues::approximate_p_value`] interpolates linearly between
//!   the 1% / 5% / 10% thresholds and decays exponentially outside them.
//!
//! Invariants & assumptions
//! ------------------------
//! - Table values are fixed constants from Fuller's tabulation; nothing
//!   here estimates or derives them.
//! - Within every bucket, thresholds order as ConstantTrend < Constant <
//!   NoConstant at each level, and 1% < 5% < 10% within a row.
//! - Bucket edges are inclusive: n ≤ 25, n ≤ 50, n ≤ 100, n > 100.
//!
//! Downstream usage
//! ----------------
//! - `adf.rs` resolves the row once per test and stores it on the
//!   outcome; the rejection flags and the optional p-value both read from
//!   that row.

use crate::stationarity::deterministic::Deterministic;

/// One row of the Dickey–Fuller table: thresholds at the three
/// conventional significance levels. A statistic strictly below a
/// threshold rejects the unit-root null at that level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalValues {
    pub one_percent: f64,
    pub five_percent: f64,
    pub ten_percent: f64,
}

// Fuller's finite-sample τ critical values, bucketed at n ≤ 25, ≤ 50,
// ≤ 100, and > 100 (asymptotic row last).

const NO_CONSTANT: [CriticalValues; 4] = [
    CriticalValues { one_percent: -2.66, five_percent: -1.95, ten_percent: -1.60 },
    CriticalValues { one_percent: -2.62, five_percent: -1.95, ten_percent: -1.61 },
    CriticalValues { one_percent: -2.60, five_percent: -1.95, ten_percent: -1.61 },
    CriticalValues { one_percent: -2.58, five_percent: -1.95, ten_percent: -1.62 },
];

const CONSTANT: [CriticalValues; 4] = [
    CriticalValues { one_percent: -3.75, five_percent: -3.00, ten_percent: -2.63 },
    CriticalValues { one_percent: -3.58, five_percent: -2.93, ten_percent: -2.60 },
    CriticalValues { one_percent: -3.51, five_percent: -2.89, ten_percent: -2.58 },
    CriticalValues { one_percent: -3.46, five_percent: -2.88, ten_percent: -2.57 },
];

const CONSTANT_TREND: [CriticalValues; 4] = [
    CriticalValues { one_percent: -4.38, five_percent: -3.60, ten_percent: -3.24 },
    CriticalValues { one_percent: -4.15, five_percent: -3.50, ten_percent: -3.18 },
    CriticalValues { one_percent: -4.04, five_percent: -3.45, ten_percent: -3.15 },
    CriticalValues { one_percent: -3.99, five_percent: -3.43, ten_percent: -3.13 },
];

/// Resolve the critical-value row for a series of length `n` under the
/// given deterministic specification.
///
/// # Arguments
/// - `n`: full series length, not the regression row count.
/// - `deterministic`: which deterministic terms the regression carries.
pub fn lookup(n: usize, deterministic: Deterministic) -> CriticalValues {
    let bucket = bucket_index(n);
    match deterministic {
        Deterministic::NoConstant => NO_CONSTANT[bucket],
        Deterministic::Constant => CONSTANT[bucket],
        Deterministic::ConstantTrend => CONSTANT_TREND[bucket],
    }
}

/// Map a series length to its table bucket.
///
/// # Invariants
/// - Edges are inclusive on the small side: 25 and 26 land in different
///   buckets, as do 50/51 and 100/101.
#[inline]
fn bucket_index(n: usize) -> usize {
    if n <= 25 {
        0
    } else if n <= 50 {
        1
    } else if n <= 100 {
        2
    } else {
        3
    }
}

impl CriticalValues {
    /// Approximate p-value for a statistic against this row.
    ///
    /// # Arguments
    /// - `statistic`: the ADF t-type statistic.
    ///
    /// # Returns
    /// A value in `(0, 1)` that is monotone increasing in the statistic,
    /// anchored at 0.01 / 0.05 / 0.10 on the tabulated thresholds. Linear
    /// between thresholds, exponential decay toward 0 below the 1% value,
    /// exponential approach toward 1 above the 10% value. `NaN` input
    /// yields `NaN`.
    ///
    /// # Rationale
    /// Interpolating the tabulated row gives a rough but monotone p-value
    /// without estimating the τ distribution itself. The rejection flags
    /// never consult this; they compare against thresholds directly.
    pub fn approximate_p_value(&self, statistic: f64) -> f64 {
        if statistic.is_nan() {
            return f64::NAN;
        }
        if statistic < self.one_percent {
            0.01 * (statistic - self.one_percent).exp()
        } else if statistic <= self.five_percent {
            0.01 + 0.04 * (statistic - self.one_percent) / (self.five_percent - self.one_percent)
        } else if statistic <= self.ten_percent {
            0.05 + 0.05 * (statistic - self.five_percent) / (self.ten_percent - self.five_percent)
        } else {
            0.10 + 0.90 * (1.0 - (-0.5 * (statistic - self.ten_percent)).exp())
        }
    }
}
