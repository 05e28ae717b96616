//! Reusable evaluator fixtures.
//!
//! - [`ConstRhs`]: constant time derivative, reads nothing.
//! - [`BlowUpRhs`]: returns NaN at one cell once U there crosses a threshold.

use ripple_stencil::{Operators, Rhs};

/// Constant time derivative. `u(t) = u(0) + value * t` exactly.
pub struct ConstRhs {
    pub name: String,
    pub value: f64,
}

impl ConstRhs {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Rhs for ConstRhs {
    fn name(&self) -> &str {
        &self.name
    }

    fn eval(&self, _i: i64, _j: i64, _ops: &Operators<'_>) -> f64 {
        self.value
    }
}

/// Grows U by `rate` everywhere and emits NaN at `(row, col)` once U
/// there reaches `threshold`.
///
/// With a zero initial field and `dt = 1`, the failure lands on
/// sub-step `ceil(threshold / rate)`.
pub struct BlowUpRhs {
    pub row: i64,
    pub col: i64,
    pub threshold: f64,
    pub rate: f64,
}

impl BlowUpRhs {
    pub fn new(row: i64, col: i64, threshold: f64) -> Self {
        Self {
            row,
            col,
            threshold,
            rate: 1.0,
        }
    }
}

impl Rhs for BlowUpRhs {
    fn name(&self) -> &str {
        "blow_up"
    }

    fn eval(&self, i: i64, j: i64, ops: &Operators<'_>) -> f64 {
        if (i, j) == (self.row, self.col) && ops.u().value(i, j) >= self.threshold {
            f64::NAN
        } else {
            self.rate
        }
    }
}
