//! Fixed-size 2D scalar grid with toroidal indexing.
//!
//! Every integer index pair is valid: rows wrap modulo the row count and
//! columns wrap modulo the column count, so the domain is a torus and the
//! stencil never needs boundary special-casing.

use crate::error::ConfigError;

/// Wrap an arbitrary integer coordinate onto `[0, len)`.
///
/// Works for negative values and values far outside the axis.
///
/// ```
/// use ripple_core::wrap_axis;
///
/// assert_eq!(wrap_axis(-1, 4), 3);
/// assert_eq!(wrap_axis(9, 4), 1);
/// assert_eq!(wrap_axis(-8, 4), 0);
/// ```
#[inline]
pub fn wrap_axis(val: i64, len: usize) -> usize {
    val.rem_euclid(len as i64) as usize
}

/// A rectangular `rows x cols` array of `f64` values stored row-major.
///
/// The size is fixed at construction; contents are mutable.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid {
    /// Create a zero-filled grid.
    ///
    /// Returns `Err(ConfigError::EmptyGrid)` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        Self::filled(rows, cols, 0.0)
    }

    /// Create a grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self, ConfigError> {
        check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        })
    }

    /// Create a grid by sampling `f(row, col)` once per cell in row-major order.
    ///
    /// This is the entry point for initial-condition generators.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self, ConfigError> {
        check_dims(rows, cols)?;
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// Wrap existing row-major storage.
    ///
    /// Returns `Err(ConfigError::DataLength)` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, ConfigError> {
        check_dims(rows, cols)?;
        let expected = rows * cols;
        if data.len() != expected {
            return Err(ConfigError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Read the value at `(i, j)` after toroidal wraparound.
    #[inline]
    pub fn get(&self, i: i64, j: i64) -> f64 {
        self.data[self.flat_index(i, j)]
    }

    /// Write `value` at `(i, j)` after toroidal wraparound.
    ///
    /// Only the target cell changes.
    #[inline]
    pub fn set(&mut self, i: i64, j: i64, value: f64) {
        let idx = self.flat_index(i, j);
        self.data[idx] = value;
    }

    /// Row-major storage index of `(i, j)` after wraparound.
    #[inline]
    pub fn flat_index(&self, i: i64, j: i64) -> usize {
        wrap_axis(i, self.rows) * self.cols + wrap_axis(j, self.cols)
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.data.len()
    }

    /// Row-major view of the storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major view of the storage.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Consume the grid and return its row-major storage.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

fn check_dims(rows: usize, cols: usize) -> Result<(), ConfigError> {
    if rows == 0 || cols == 0 {
        return Err(ConfigError::EmptyGrid { rows, cols });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ---------------------------------------------------------------
    // wrap_axis
    // ---------------------------------------------------------------

    #[test]
    fn wrap_axis_in_range_is_identity() {
        for v in 0..5 {
            assert_eq!(wrap_axis(v, 5), v as usize);
        }
    }

    #[test]
    fn wrap_axis_negative() {
        assert_eq!(wrap_axis(-1, 5), 4);
        assert_eq!(wrap_axis(-5, 5), 0);
        assert_eq!(wrap_axis(-6, 5), 4);
    }

    #[test]
    fn wrap_axis_extremes() {
        assert_eq!(wrap_axis(i64::MIN, 3), 1);
        assert_eq!(wrap_axis(i64::MAX, 3), 1);
        assert_eq!(wrap_axis(i64::MIN, 1 << 40), 0);
    }

    #[test]
    fn wrap_axis_single_cell() {
        assert_eq!(wrap_axis(-3, 1), 0);
        assert_eq!(wrap_axis(17, 1), 0);
    }

    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    #[test]
    fn zero_rows_rejected() {
        assert_eq!(
            Grid::new(0, 4),
            Err(ConfigError::EmptyGrid { rows: 0, cols: 4 })
        );
    }

    #[test]
    fn zero_cols_rejected() {
        assert!(matches!(
            Grid::filled(3, 0, 1.0),
            Err(ConfigError::EmptyGrid { rows: 3, cols: 0 })
        ));
    }

    #[test]
    fn from_vec_length_checked() {
        let err = Grid::from_vec(2, 3, vec![0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DataLength {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn from_fn_is_row_major() {
        let g = Grid::from_fn(2, 3, |r, c| (r * 10 + c) as f64).unwrap();
        assert_eq!(g.as_slice(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(g.dimensions(), (2, 3));
        assert_eq!(g.cell_count(), 6);
    }

    // ---------------------------------------------------------------
    // Access
    // ---------------------------------------------------------------

    #[test]
    fn get_wraps_both_axes() {
        let g = Grid::from_fn(3, 4, |r, c| (r * 4 + c) as f64).unwrap();
        assert_eq!(g.get(-1, 0), g.get(2, 0));
        assert_eq!(g.get(0, -1), g.get(0, 3));
        assert_eq!(g.get(3, 4), g.get(0, 0));
        assert_eq!(g.get(-4, -5), g.get(2, 3));
    }

    #[test]
    fn set_touches_only_target() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set(-1, 4, 7.0);
        assert_eq!(g.get(2, 1), 7.0);
        let nonzero = g.as_slice().iter().filter(|v| **v != 0.0).count();
        assert_eq!(nonzero, 1);
    }

    #[test]
    fn fill_sets_all() {
        let mut g = Grid::new(2, 2).unwrap();
        g.fill(3.5);
        assert!(g.as_slice().iter().all(|v| *v == 3.5));
    }

    // ---------------------------------------------------------------
    // Properties
    // ---------------------------------------------------------------

    proptest! {
        #[test]
        fn row_period_is_row_count(
            rows in 1usize..12,
            cols in 1usize..12,
            i in 0i64..12,
            j in 0i64..12,
            k in -50i64..50,
        ) {
            let g = Grid::from_fn(rows, cols, |r, c| (r * 31 + c * 7) as f64).unwrap();
            let m = rows as i64;
            prop_assert_eq!(g.get(i + k * m, j), g.get(i, j));
        }

        #[test]
        fn col_period_is_col_count(
            rows in 1usize..12,
            cols in 1usize..12,
            i in 0i64..12,
            j in 0i64..12,
            k in -50i64..50,
        ) {
            let g = Grid::from_fn(rows, cols, |r, c| (r * 31 + c * 7) as f64).unwrap();
            let n = cols as i64;
            prop_assert_eq!(g.get(i, j + k * n), g.get(i, j));
        }

        #[test]
        fn flat_index_always_in_bounds(
            rows in 1usize..16,
            cols in 1usize..16,
            i in any::<i32>(),
            j in any::<i32>(),
        ) {
            let g = Grid::new(rows, cols).unwrap();
            prop_assert!(g.flat_index(i as i64, j as i64) < g.cell_count());
        }
    }
}
