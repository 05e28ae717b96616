//! The damped wave equation as a first-order U/V system.
//!
//! ```text
//! du/dt = v
//! dv/dt = c² * (d2u/dx2 + d2u/dy2) - damping * v
//! ```
//!
//! [`Velocity`] is the U evaluator, [`WaveAcceleration`] the V evaluator.
//! [`WaveAcceleration`] is constructed via [`WaveAcceleration::builder`].

use crate::operators::Operators;
use crate::rhs::Rhs;

/// `du/dt = v`.
///
/// Reads V; with no V field present it evaluates to zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Velocity;

impl Rhs for Velocity {
    fn name(&self) -> &str {
        "velocity"
    }

    fn eval(&self, i: i64, j: i64, ops: &Operators<'_>) -> f64 {
        ops.v().map_or(0.0, |v| v.value(i, j))
    }

    fn reads_v(&self) -> bool {
        true
    }
}

/// `dv/dt = c² * laplacian(u) - damping * v`.
///
/// # Stability under forward Euler
///
/// Paired with [`Velocity`] and stepped with forward Euler, a grid mode
/// with `ω² = c² λ` (`λ` an eigenvalue of the negated five-point
/// Laplacian, at most `8 / h²`) is amplified by
/// `|1 + dt μ|² = 1 - γ dt + ω² dt²` when underdamped, where `γ` is the
/// damping. Overdamped modes need `dt <= 2 / γ`. The advisory limit is
/// therefore
///
/// ```text
/// max_dt = min(γ / ω_max², 2 / γ),   ω_max² = 8 c² / h²
/// ```
///
/// With zero damping every oscillating mode grows for any `dt > 0`, so
/// [`max_dt`](Rhs::max_dt) returns `Some(0.0)`.
#[derive(Clone, Debug)]
pub struct WaveAcceleration {
    speed: f64,
    damping: f64,
}

/// Builder for [`WaveAcceleration`].
pub struct WaveAccelerationBuilder {
    speed: f64,
    damping: f64,
}

impl WaveAcceleration {
    /// Create a new builder. Defaults: speed 1.0, damping 0.0.
    pub fn builder() -> WaveAccelerationBuilder {
        WaveAccelerationBuilder {
            speed: 1.0,
            damping: 0.0,
        }
    }

    /// Wave propagation speed `c`.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Linear damping coefficient.
    pub fn damping(&self) -> f64 {
        self.damping
    }
}

impl WaveAccelerationBuilder {
    /// Set the wave propagation speed (default: 1.0). Must be > 0.
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the damping coefficient (default: 0.0). Must be >= 0.
    pub fn damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Build the evaluator, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `speed` is not > 0, is NaN, or is infinite
    /// - `damping` is negative, NaN, or infinite
    pub fn build(self) -> Result<WaveAcceleration, String> {
        if !(self.speed > 0.0) || !self.speed.is_finite() {
            return Err(format!("speed must be finite and > 0, got {}", self.speed));
        }
        if !(self.damping >= 0.0) || !self.damping.is_finite() {
            return Err(format!(
                "damping must be finite and >= 0, got {}",
                self.damping
            ));
        }
        Ok(WaveAcceleration {
            speed: self.speed,
            damping: self.damping,
        })
    }
}

impl Rhs for WaveAcceleration {
    fn name(&self) -> &str {
        "wave_acceleration"
    }

    fn eval(&self, i: i64, j: i64, ops: &Operators<'_>) -> f64 {
        let c2 = self.speed * self.speed;
        let v = ops.v().map_or(0.0, |v| v.value(i, j));
        c2 * ops.u().laplacian(i, j) - self.damping * v
    }

    fn reads_v(&self) -> bool {
        true
    }

    fn max_dt(&self, h: f64) -> Option<f64> {
        if self.damping == 0.0 {
            return Some(0.0);
        }
        let omega_max_sq = 8.0 * self.speed * self.speed / (h * h);
        Some((self.damping / omega_max_sq).min(2.0 / self.damping))
    }
}
