//! Read-only views of the published generation.
//!
//! [`Snapshot`] borrows the stepper, so no `step()` can run while one is
//! alive. [`OwnedSnapshot`] copies the fields out for consumers on other
//! threads.
//!
//! # Coordinate convention
//!
//! Row `i` maps to the `y` axis and column `j` to the `x` axis. Both are
//! normalised onto `[0, 1]`: `x = j / (cols - 1)`, `y = i / (rows - 1)`.
//! A single-cell axis maps to `0`.

use ripple_core::{FieldId, Grid};

/// Borrowed view of the current field values.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    u: &'a Grid,
    v: Option<&'a Grid>,
    generation: u64,
    dt: f64,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(u: &'a Grid, v: Option<&'a Grid>, generation: u64, dt: f64) -> Self {
        Self {
            u,
            v,
            generation,
            dt,
        }
    }

    /// U values.
    pub fn u(&self) -> &'a Grid {
        self.u
    }

    /// V values, or `None` for single-field systems.
    pub fn v(&self) -> Option<&'a Grid> {
        self.v
    }

    /// Values of `field`, if present.
    pub fn field(&self, field: FieldId) -> Option<&'a Grid> {
        match field {
            FieldId::U => Some(self.u),
            FieldId::V => self.v,
        }
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        self.u.dimensions()
    }

    /// Sub-steps committed when this view was taken.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Simulated time, `generation * dt`.
    pub fn time(&self) -> f64 {
        self.generation as f64 * self.dt
    }

    /// Cell `(i, j)` mapped onto `[0, 1] x [0, 1]` as `(x, y)`.
    pub fn normalized_coords(&self, i: usize, j: usize) -> (f64, f64) {
        let (rows, cols) = self.dimensions();
        (unit_axis(j, cols), unit_axis(i, rows))
    }

    /// `[x, y, value]` for every cell of `field`, row-major.
    ///
    /// This is the vertex layout a surface renderer consumes.
    pub fn surface_points(&self, field: FieldId) -> Option<Vec<[f64; 3]>> {
        let grid = self.field(field)?;
        let (rows, cols) = grid.dimensions();
        let values = grid.as_slice();
        let mut points = Vec::with_capacity(values.len());
        for i in 0..rows {
            for j in 0..cols {
                let (x, y) = self.normalized_coords(i, j);
                points.push([x, y, values[i * cols + j]]);
            }
        }
        Some(points)
    }

    /// `(min, max)` over `field`, for normalising values.
    pub fn value_range(&self, field: FieldId) -> Option<(f64, f64)> {
        let grid = self.field(field)?;
        let range = grid
            .as_slice()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        Some(range)
    }

    /// Copy the fields out into an [`OwnedSnapshot`].
    pub fn to_owned_snapshot(&self) -> OwnedSnapshot {
        OwnedSnapshot {
            u: self.u.clone(),
            v: self.v.cloned(),
            generation: self.generation,
            dt: self.dt,
        }
    }
}

fn unit_axis(idx: usize, len: usize) -> f64 {
    if len <= 1 {
        0.0
    } else {
        idx as f64 / (len - 1) as f64
    }
}

/// Owned copy of one published generation. `Send + Sync`.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedSnapshot {
    u: Grid,
    v: Option<Grid>,
    generation: u64,
    dt: f64,
}

impl OwnedSnapshot {
    /// Borrow as a [`Snapshot`] for the shared accessors.
    pub fn as_snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.u, self.v.as_ref(), self.generation, self.dt)
    }

    /// U values.
    pub fn u(&self) -> &Grid {
        &self.u
    }

    /// V values, or `None` for single-field systems.
    pub fn v(&self) -> Option<&Grid> {
        self.v.as_ref()
    }

    /// Sub-steps committed when this copy was taken.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
