//! Gaussian bumps and their superposition.

use ripple_core::{ConfigError, Grid};

/// One smooth bump: `amplitude * exp(-((r - row)² + (c - col)²) / width²)`.
///
/// Centres are in cell units and need not be integral.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gaussian {
    /// Centre row.
    pub row: f64,
    /// Centre column.
    pub col: f64,
    /// Peak height.
    pub amplitude: f64,
    /// Decay length, in cells.
    pub width: f64,
}

impl Gaussian {
    /// Build a descriptor.
    pub fn new(row: f64, col: f64, amplitude: f64, width: f64) -> Self {
        Self {
            row,
            col,
            amplitude,
            width,
        }
    }

    /// Value of this bump at `(r, c)`.
    #[inline]
    pub fn value_at(&self, r: f64, c: f64) -> f64 {
        let dr = r - self.row;
        let dc = c - self.col;
        self.amplitude * (-(dr * dr + dc * dc) / (self.width * self.width)).exp()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.row.is_finite() || !self.col.is_finite() {
            return Err(ConfigError::InvalidSeed {
                reason: format!("centre must be finite, got ({}, {})", self.row, self.col),
            });
        }
        if !self.amplitude.is_finite() {
            return Err(ConfigError::InvalidSeed {
                reason: format!("amplitude must be finite, got {}", self.amplitude),
            });
        }
        let width_sq = self.width * self.width;
        if !(self.width > 0.0) || !(width_sq > 0.0) || !width_sq.is_finite() {
            return Err(ConfigError::InvalidSeed {
                reason: format!(
                    "width must be > 0 with a finite, non-zero square, got {}",
                    self.width
                ),
            });
        }
        Ok(())
    }
}

/// A superposition of [`Gaussian`] peaks.
///
/// ```
/// use ripple_seed::{Gaussian, GaussianSeed};
///
/// let seed = GaussianSeed::new(vec![Gaussian::new(4.0, 4.0, 1.0, 2.0)]).unwrap();
/// let grid = seed.to_grid(8, 8).unwrap();
/// assert_eq!(grid.get(4, 4), 1.0);
/// assert!(grid.get(0, 0) < 0.01);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianSeed {
    peaks: Vec<Gaussian>,
}

impl GaussianSeed {
    /// Superpose `peaks` with their amplitudes as given.
    ///
    /// Returns `Err(ConfigError::InvalidSeed)` if any centre or amplitude is
    /// non-finite or any width is not > 0.
    pub fn new(peaks: Vec<Gaussian>) -> Result<Self, ConfigError> {
        for p in &peaks {
            p.validate()?;
        }
        Ok(Self { peaks })
    }

    /// Superpose `peaks` with every amplitude scaled by `1 / sqrt(peak count)`.
    ///
    /// Adding more peaks then leaves the overall energy scale of the
    /// field unchanged.
    pub fn normalized(peaks: Vec<Gaussian>) -> Result<Self, ConfigError> {
        let scale = if peaks.is_empty() {
            1.0
        } else {
            1.0 / (peaks.len() as f64).sqrt()
        };
        let scaled = peaks
            .into_iter()
            .map(|p| Gaussian {
                amplitude: p.amplitude * scale,
                ..p
            })
            .collect();
        Self::new(scaled)
    }

    /// The peaks, after any normalization.
    pub fn peaks(&self) -> &[Gaussian] {
        &self.peaks
    }

    /// Sum of all peaks at `(row, col)`. Zero for an empty seed.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        let (r, c) = (row as f64, col as f64);
        self.peaks.iter().map(|p| p.value_at(r, c)).sum()
    }

    /// Sample the seed onto a `rows x cols` grid.
    pub fn to_grid(&self, rows: usize, cols: usize) -> Result<Grid, ConfigError> {
        Grid::from_fn(rows, cols, |r, c| self.value(r, c))
    }
}
