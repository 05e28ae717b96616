//! Stability guard: rejects non-finite values before they are published.
//!
//! Explicit schemes blow up when `dt` is too large for the grid spacing.
//! The guard scans each freshly computed generation in row-major order
//! and reports the first NaN or infinity. There is no recovery, retry,
//! or step-size reduction.

use ripple_core::{FieldId, Grid, StabilityError};

/// `true` unless `value` is NaN or infinite.
#[inline]
pub fn is_finite(value: f64) -> bool {
    value.is_finite()
}

/// Row-major index and value of the first non-finite entry, if any.
pub fn first_non_finite(values: &[f64]) -> Option<(usize, f64)> {
    values
        .iter()
        .position(|v| !is_finite(*v))
        .map(|idx| (idx, values[idx]))
}

/// Check one staged field.
///
/// `substep` is the index within the current `step(n)` call and
/// `generation` the number of sub-steps already committed.
pub fn check_field(
    field: FieldId,
    grid: &Grid,
    substep: u64,
    generation: u64,
) -> Result<(), StabilityError> {
    match first_non_finite(grid.as_slice()) {
        None => Ok(()),
        Some((idx, value)) => Err(StabilityError {
            field,
            row: idx / grid.cols(),
            col: idx % grid.cols(),
            substep,
            generation,
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_pass() {
        assert!(is_finite(0.0));
        assert!(is_finite(-1.0e300));
        assert!(!is_finite(f64::NAN));
        assert!(!is_finite(f64::INFINITY));
        assert!(!is_finite(f64::NEG_INFINITY));
    }

    #[test]
    fn first_non_finite_is_row_major_first() {
        let values = [1.0, 2.0, f64::INFINITY, f64::NAN];
        assert_eq!(first_non_finite(&values), Some((2, f64::INFINITY)));
        assert_eq!(first_non_finite(&[1.0, 2.0]), None);
    }

    #[test]
    fn check_field_reports_cell() {
        let mut g = Grid::new(3, 4).unwrap();
        g.set(2, 1, f64::NEG_INFINITY);
        g.set(2, 3, f64::NAN);
        let err = check_field(FieldId::V, &g, 5, 17).unwrap_err();
        assert_eq!(err.field, FieldId::V);
        assert_eq!((err.row, err.col), (2, 1));
        assert_eq!(err.substep, 5);
        assert_eq!(err.generation, 17);
        assert_eq!(err.value, f64::NEG_INFINITY);
    }

    #[test]
    fn check_field_accepts_finite_grid() {
        let g = Grid::filled(2, 2, 1.0e308).unwrap();
        assert!(check_field(FieldId::U, &g, 0, 0).is_ok());
    }
}
