//! Deterministic-term specifications for the ADF regression.
//!
//! The ADF regression can include no deterministic terms, an intercept, or
//! an intercept plus a linear time trend. Each choice fixes the layout of
//! the design matrix and which coefficient carries the unit-root null, so
//! both are derived per variant here rather than recomputed downstream.
//!
//! Notes
//! -----
//! - Column order with [`Deterministic::ConstantTrend`] is
//!   constant, trend, lagged level, then lagged differences; dropping
//!   terms removes columns from the front without reordering the rest.

/// Deterministic terms included in the ADF regression.
///
/// - `NoConstant`: pure autoregression on the lagged level.
/// - `Constant`: intercept (drift) term included. The usual default.
/// - `ConstantTrend`: intercept plus a linear time trend.
///
/// Invariant: the unit-root coefficient always sits immediately after the
/// deterministic columns, so its index equals the number of deterministic
/// terms in the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deterministic {
    NoConstant,
    Constant,
    ConstantTrend,
}

impl Deterministic {
    /// Number of regressors before any lagged differences: the
    /// deterministic columns plus the lagged level.
    ///
    /// - `NoConstant` → 1, `Constant` → 2, `ConstantTrend` → 3.
    pub fn base_regressors(&self) -> usize {
        match self {
            Deterministic::NoConstant => 1,
            Deterministic::Constant => 2,
            Deterministic::ConstantTrend => 3,
        }
    }

    /// Column index of the lagged-level (unit-root) coefficient.
    ///
    /// - `NoConstant` → 0, `Constant` → 1, `ConstantTrend` → 2.
    pub fn unit_root_index(&self) -> usize {
        match self {
            Deterministic::NoConstant => 0,
            Deterministic::Constant => 1,
            Deterministic::ConstantTrend => 2,
        }
    }

    /// Whether the regression includes an intercept column.
    pub fn has_constant(&self) -> bool {
        !matches!(self, Deterministic::NoConstant)
    }

    /// Whether the regression includes a linear time-trend column.
    pub fn has_trend(&self) -> bool {
        matches!(self, Deterministic::ConstantTrend)
    }

    /// Short human-readable label for reporting and bindings.
    pub fn label(&self) -> &'static str {
        match self {
            Deterministic::NoConstant => "no constant",
            Deterministic::Constant => "constant",
            Deterministic::ConstantTrend => "constant + trend",
        }
    }
}

impl Default for Deterministic {
    /// The conventional ADF default: include an intercept, no trend.
    fn default() -> Self {
        Deterministic::Constant
    }
}
