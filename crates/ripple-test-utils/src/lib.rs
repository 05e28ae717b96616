//! Test fixtures and helpers for Ripple development.
//!
//! Provides grid builders, bitwise grid comparison, and reusable
//! evaluators (see [`fixtures`]) for constructing stepper scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{BlowUpRhs, ConstRhs};

use ripple_core::Grid;

/// `rows x cols` grid holding `r * cols + c` at each cell.
pub fn ramp_grid(rows: usize, cols: usize) -> Grid {
    Grid::from_fn(rows, cols, |r, c| (r * cols + c) as f64).expect("non-empty ramp grid")
}

/// Zero grid with `value` at a single cell.
pub fn point_source(rows: usize, cols: usize, row: usize, col: usize, value: f64) -> Grid {
    let mut g = Grid::new(rows, cols).expect("non-empty point-source grid");
    g.set(row as i64, col as i64, value);
    g
}

/// Deterministic pseudo-random grid in `[-1, 1)` from a seed.
///
/// Fixed 64-bit LCG, stable across platforms.
pub fn noise_grid(rows: usize, cols: usize, seed: u64) -> Grid {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    Grid::from_fn(rows, cols, |_, _| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    })
    .expect("non-empty noise grid")
}

/// Assert two grids have equal dimensions and bitwise-equal values.
///
/// Unlike `assert_eq!`, distinguishes `0.0` from `-0.0` and treats
/// identical NaN payloads as equal.
pub fn assert_grids_bit_equal(a: &Grid, b: &Grid) {
    assert_eq!(a.dimensions(), b.dimensions(), "grid dimensions differ");
    for (idx, (x, y)) in a.as_slice().iter().zip(b.as_slice()).enumerate() {
        assert_eq!(
            x.to_bits(),
            y.to_bits(),
            "cell ({}, {}) differs: {x} vs {y}",
            idx / a.cols(),
            idx % a.cols()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_grid_is_row_major() {
        let g = ramp_grid(2, 3);
        assert_eq!(g.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn point_source_sets_one_cell() {
        let g = point_source(3, 3, 1, 2, 7.0);
        assert_eq!(g.get(1, 2), 7.0);
        assert_eq!(g.as_slice().iter().sum::<f64>(), 7.0);
    }

    #[test]
    fn noise_grid_is_deterministic_and_bounded() {
        let a = noise_grid(8, 8, 3);
        assert_grids_bit_equal(&a, &noise_grid(8, 8, 3));
        assert!(a.as_slice().iter().all(|v| (-1.0..1.0).contains(v)));
        assert_ne!(a, noise_grid(8, 8, 4));
    }

    #[test]
    #[should_panic(expected = "differs")]
    fn bit_equal_rejects_signed_zero() {
        let a = Grid::filled(1, 1, 0.0).unwrap();
        let b = Grid::filled(1, 1, -0.0).unwrap();
        assert_grids_bit_equal(&a, &b);
    }
}
