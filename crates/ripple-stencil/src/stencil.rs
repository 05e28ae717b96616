//! Central-difference operators over a toroidal grid.

use ripple_core::Grid;

/// The derivative operator family bound to one grid.
///
/// `x` runs along columns (`j`) and `y` along rows (`i`). All lookups go
/// through [`Grid::get`], so neighbours wrap periodically. Evaluation is a
/// pure read and never allocates.
///
/// ```
/// use ripple_core::Grid;
/// use ripple_stencil::Stencil;
///
/// // u(i, j) = j, so du/dx = 1 away from the wrap seam.
/// let grid = Grid::from_fn(4, 8, |_, c| c as f64).unwrap();
/// let s = Stencil::new(&grid, 1.0);
/// assert_eq!(s.ddx(2, 3), 1.0);
/// assert_eq!(s.ddy(2, 3), 0.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Stencil<'a> {
    grid: &'a Grid,
    h: f64,
    two_h: f64,
    h2: f64,
}

impl<'a> Stencil<'a> {
    /// Bind the operators to `grid` with spacing `h`.
    ///
    /// `h` is expected to be finite and > 0; the stepper validates this
    /// before any stencil is built.
    pub fn new(grid: &'a Grid, h: f64) -> Self {
        Self {
            grid,
            h,
            two_h: 2.0 * h,
            h2: h * h,
        }
    }

    /// The bound grid.
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Grid spacing.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// `u(i, j)`.
    #[inline]
    pub fn value(&self, i: i64, j: i64) -> f64 {
        self.grid.get(i, j)
    }

    /// `(u(i, j+1) - u(i, j-1)) / 2h`.
    #[inline]
    pub fn ddx(&self, i: i64, j: i64) -> f64 {
        (self.value(i, j + 1) - self.value(i, j - 1)) / self.two_h
    }

    /// `(u(i+1, j) - u(i-1, j)) / 2h`.
    #[inline]
    pub fn ddy(&self, i: i64, j: i64) -> f64 {
        (self.value(i + 1, j) - self.value(i - 1, j)) / self.two_h
    }

    /// `(u(i, j-1) - 2u(i, j) + u(i, j+1)) / h²`.
    #[inline]
    pub fn d2dx2(&self, i: i64, j: i64) -> f64 {
        (self.value(i, j - 1) - 2.0 * self.value(i, j) + self.value(i, j + 1)) / self.h2
    }

    /// `(u(i-1, j) - 2u(i, j) + u(i+1, j)) / h²`.
    #[inline]
    pub fn d2dy2(&self, i: i64, j: i64) -> f64 {
        (self.value(i - 1, j) - 2.0 * self.value(i, j) + self.value(i + 1, j)) / self.h2
    }

    /// Five-point Laplacian, `d2dx2 + d2dy2`.
    #[inline]
    pub fn laplacian(&self, i: i64, j: i64) -> f64 {
        self.d2dx2(i, j) + self.d2dy2(i, j)
    }
}
