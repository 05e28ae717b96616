//! Reproducible random placement of Gaussian peaks.
//!
//! Respects the determinism contract: all randomness comes from a
//! `ChaCha8Rng` seeded with the caller's `u64`, so identical seeds and
//! parameters produce bit-identical layouts.
//!
//! Constructed via the builder pattern: [`RandomLayout::builder`].

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use ripple_core::ConfigError;

use crate::gaussian::{Gaussian, GaussianSeed};

/// Parameters for scattering peaks over a grid.
///
/// Each peak gets a centre drawn uniformly from `[margin, 1 - margin]` of
/// each axis, a raw amplitude drawn from `[0, max_amplitude)`, and a width
/// of `width_fraction * min(rows, cols)` cells. Amplitudes are then scaled
/// by `1 / sqrt(peak_count)`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayout {
    peak_count: usize,
    margin: f64,
    max_amplitude: f64,
    width_fraction: f64,
}

/// Builder for [`RandomLayout`].
pub struct RandomLayoutBuilder {
    peak_count: usize,
    margin: f64,
    max_amplitude: f64,
    width_fraction: f64,
}

impl RandomLayout {
    /// Create a new builder.
    ///
    /// Defaults: 100 peaks, margin 0.25, max amplitude 0.5, width 1/20 of
    /// the shorter grid side.
    pub fn builder() -> RandomLayoutBuilder {
        RandomLayoutBuilder {
            peak_count: 100,
            margin: 0.25,
            max_amplitude: 0.5,
            width_fraction: 1.0 / 20.0,
        }
    }

    /// Number of peaks generated.
    pub fn peak_count(&self) -> usize {
        self.peak_count
    }

    /// Draw a normalized seed for a `rows x cols` grid.
    ///
    /// Returns `Err(ConfigError::EmptyGrid)` if either dimension is zero.
    pub fn generate(
        &self,
        rows: usize,
        cols: usize,
        seed: u64,
    ) -> Result<GaussianSeed, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let lo = self.margin;
        let hi = 1.0 - self.margin;
        let width = self.width_fraction * rows.min(cols) as f64;

        let peaks = (0..self.peak_count)
            .map(|_| {
                let row = uniform(&mut rng, lo, hi) * rows as f64;
                let col = uniform(&mut rng, lo, hi) * cols as f64;
                let amplitude = uniform(&mut rng, 0.0, self.max_amplitude);
                Gaussian::new(row, col, amplitude, width)
            })
            .collect();

        GaussianSeed::normalized(peaks)
    }
}

fn uniform(rng: &mut ChaCha8Rng, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * rng.gen::<f64>()
}

impl RandomLayoutBuilder {
    /// Set the number of peaks (default: 100).
    pub fn peak_count(mut self, count: usize) -> Self {
        self.peak_count = count;
        self
    }

    /// Set the fraction of each axis kept free of centres (default: 0.25).
    /// Must be in `[0, 0.5)`.
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the upper bound on raw amplitudes (default: 0.5). Must be >= 0.
    pub fn max_amplitude(mut self, amp: f64) -> Self {
        self.max_amplitude = amp;
        self
    }

    /// Set peak width as a fraction of the shorter grid side (default: 0.05).
    /// Must be > 0.
    pub fn width_fraction(mut self, fraction: f64) -> Self {
        self.width_fraction = fraction;
        self
    }

    /// Build the layout, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `margin` is outside `[0, 0.5)` or NaN
    /// - `max_amplitude` is negative, NaN, or infinite
    /// - `width_fraction` is not > 0, is NaN, or is infinite
    pub fn build(self) -> Result<RandomLayout, String> {
        if !(self.margin >= 0.0 && self.margin < 0.5) {
            return Err(format!("margin must be in [0, 0.5), got {}", self.margin));
        }
        if !(self.max_amplitude >= 0.0) || !self.max_amplitude.is_finite() {
            return Err(format!(
                "max_amplitude must be finite and >= 0, got {}",
                self.max_amplitude
            ));
        }
        if !(self.width_fraction > 0.0) || !self.width_fraction.is_finite() {
            return Err(format!(
                "width_fraction must be finite and > 0, got {}",
                self.width_fraction
            ));
        }
        Ok(RandomLayout {
            peak_count: self.peak_count,
            margin: self.margin,
            max_amplitude: self.max_amplitude,
            width_fraction: self.width_fraction,
        })
    }
}
