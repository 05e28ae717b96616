//! The stepper: explicit Euler time integration over a double buffer.
//!
//! [`Stepper`] owns the field pair, one evaluator per field, and an
//! [`Executor`]. Each sub-step:
//!
//! 1. binds [`Operators`] to the published generation,
//! 2. sweeps `next = current + dt * rhs(i, j)` into the staging slot for
//!    U, then V,
//! 3. runs the stability guard over both staged fields,
//! 4. publishes the staging slot if every value is finite.
//!
//! A guard failure abandons the staging slot and moves the stepper to
//! [`StepperState::Failed`]; every later `step()` call fails fast.

use std::fmt;
use std::time::Instant;

use ripple_core::{ConfigError, FieldId, StabilityError, StepError};
use ripple_stencil::{Operators, Rhs};

use crate::buffer::DoubleBuffer;
use crate::config::StepperConfig;
use crate::executor::{executor_for, Executor};
use crate::guard;
use crate::metrics::StepMetrics;
use crate::snapshot::{OwnedSnapshot, Snapshot};

/// Lifecycle state of a [`Stepper`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepperState {
    /// Holds a finite published generation and accepts `step()` calls.
    Ready,
    /// A sub-step produced a non-finite value. Terminal.
    Failed,
}

/// Explicit finite-difference stepper for one or two coupled fields.
///
/// # Examples
///
/// ```
/// use ripple_core::Grid;
/// use ripple_engine::{Stepper, StepperConfig};
/// use ripple_stencil::Diffusion;
///
/// let mut u = Grid::new(16, 16).unwrap();
/// u.set(8, 8, 1.0);
/// let diffusion = Diffusion::builder().coefficient(0.1).build().unwrap();
///
/// let mut stepper = Stepper::new(StepperConfig::single(u, diffusion, 1.0, 0.5)).unwrap();
/// stepper.step(10).unwrap();
///
/// let snap = stepper.snapshot();
/// assert_eq!(snap.generation(), 10);
/// assert!(snap.u().get(8, 8) < 1.0);
/// ```
pub struct Stepper {
    buffers: DoubleBuffer,
    u_rhs: Box<dyn Rhs>,
    v_rhs: Option<Box<dyn Rhs>>,
    executor: Box<dyn Executor>,
    h: f64,
    dt: f64,
    failure: Option<StabilityError>,
    last_metrics: StepMetrics,
}

impl Stepper {
    /// Construct a stepper from a [`StepperConfig`].
    ///
    /// Validates the configuration, builds the executor, and seeds both
    /// buffer slots with the initial condition. Consumes the config.
    pub fn new(config: StepperConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        if !config.strict_dt {
            if let Some((max_dt, name)) = config.advisory_max_dt() {
                if config.dt > max_dt {
                    tracing::warn!(
                        "dt {} exceeds advisory max_dt {} of evaluator '{}'; expect instability",
                        config.dt,
                        max_dt,
                        name
                    );
                }
            }
        }

        let executor = executor_for(config.backend)?;
        let (rows, cols) = config.dimensions();

        tracing::info!(
            "Created Stepper: {}x{} cells, h={}, dt={}, backend={}, fields={}",
            rows,
            cols,
            config.h,
            config.dt,
            executor.name(),
            if config.v.is_some() { "U+V" } else { "U" }
        );

        let (v_initial, v_rhs) = match config.v {
            Some(v) => (Some(v.initial), Some(v.rhs)),
            None => (None, None),
        };

        Ok(Self {
            buffers: DoubleBuffer::new(config.u.initial, v_initial),
            u_rhs: config.u.rhs,
            v_rhs,
            executor,
            h: config.h,
            dt: config.dt,
            failure: None,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Advance `n` sub-steps. `step(0)` is a no-op on a ready stepper.
    ///
    /// Returns the call's metrics on success. On the first non-finite
    /// value the call stops, the failing generation is discarded, and
    /// the stepper becomes [`StepperState::Failed`]. Once failed, every
    /// call returns [`StepError::AlreadyFailed`].
    pub fn step(&mut self, n: u64) -> Result<StepMetrics, StepError> {
        if let Some(cause) = &self.failure {
            return Err(StepError::AlreadyFailed {
                cause: cause.clone(),
            });
        }

        let start = Instant::now();
        let mut metrics = StepMetrics {
            cells_per_substep: self.buffers.current().u().cell_count(),
            ..StepMetrics::default()
        };

        for k in 0..n {
            if let Err(err) = self.substep(k, &mut metrics) {
                tracing::error!(
                    "stability failure: {} (field {}, cell ({}, {}), sub-step {})",
                    err.value,
                    err.field,
                    err.row,
                    err.col,
                    err.substep
                );
                metrics.total_us = start.elapsed().as_micros() as u64;
                self.last_metrics = metrics;
                self.failure = Some(err.clone());
                return Err(StepError::Unstable(err));
            }
            metrics.substeps += 1;
        }

        metrics.total_us = start.elapsed().as_micros() as u64;
        tracing::debug!(
            "step({}) committed {} sub-steps in {}us (generation {})",
            n,
            metrics.substeps,
            metrics.total_us,
            self.buffers.generation()
        );
        self.last_metrics = metrics.clone();
        Ok(metrics)
    }

    /// Run one sub-step. Publishes only if both staged fields are finite.
    fn substep(&mut self, index: u64, metrics: &mut StepMetrics) -> Result<(), StabilityError> {
        let h = self.h;
        let dt = self.dt;
        let generation = self.buffers.generation();

        {
            let (current, staging) = self.buffers.split();
            let ops = Operators::bind(current.u(), current.v(), h);
            let cols = current.u().cols();
            let (u_next, v_next) = staging.fields_mut();

            let t = Instant::now();
            let u_cur = current.u().as_slice();
            let u_rhs = &*self.u_rhs;
            self.executor
                .sweep(u_next.as_mut_slice(), cols, &|r: usize, c: usize| {
                    u_cur[r * cols + c] + dt * u_rhs.eval(r as i64, c as i64, &ops)
                });
            metrics.u_sweep_us += t.elapsed().as_micros() as u64;

            if let (Some(v_rhs), Some(v_cur), Some(v_next)) =
                (self.v_rhs.as_deref(), current.v(), v_next)
            {
                let t = Instant::now();
                let v_cur = v_cur.as_slice();
                self.executor
                    .sweep(v_next.as_mut_slice(), cols, &|r: usize, c: usize| {
                        v_cur[r * cols + c] + dt * v_rhs.eval(r as i64, c as i64, &ops)
                    });
                metrics.v_sweep_us += t.elapsed().as_micros() as u64;
            }

            let t = Instant::now();
            let checked = guard::check_field(FieldId::U, staging.u(), index, generation)
                .and_then(|()| match staging.v() {
                    Some(v) => guard::check_field(FieldId::V, v, index, generation),
                    None => Ok(()),
                });
            metrics.guard_us += t.elapsed().as_micros() as u64;
            checked?;
        }

        self.buffers.publish();
        tracing::trace!("published generation {}", self.buffers.generation());
        Ok(())
    }

    /// Read-only view of the published generation.
    ///
    /// After a failure this is the last generation that passed the guard.
    pub fn snapshot(&self) -> Snapshot<'_> {
        let current = self.buffers.current();
        Snapshot::new(
            current.u(),
            current.v(),
            self.buffers.generation(),
            self.dt,
        )
    }

    /// Owned copy of the published generation.
    pub fn owned_snapshot(&self) -> OwnedSnapshot {
        self.snapshot().to_owned_snapshot()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> StepperState {
        if self.failure.is_some() {
            StepperState::Failed
        } else {
            StepperState::Ready
        }
    }

    /// The failure that disabled this stepper, if any.
    pub fn failure(&self) -> Option<&StabilityError> {
        self.failure.as_ref()
    }

    /// Sub-steps committed since construction.
    pub fn generation(&self) -> u64 {
        self.buffers.generation()
    }

    /// Simulated time, `generation * dt`.
    pub fn time(&self) -> f64 {
        self.buffers.generation() as f64 * self.dt
    }

    /// Grid spacing.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Time-step.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        self.buffers.current().u().dimensions()
    }

    /// Name of the executing back-end.
    pub fn backend_name(&self) -> &str {
        self.executor.name()
    }

    /// Metrics from the most recent `step()` call that ran.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl fmt::Debug for Stepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stepper")
            .field("dimensions", &self.dimensions())
            .field("u_rhs", &self.u_rhs.name())
            .field("v_rhs", &self.v_rhs.as_ref().map(|r| r.name()))
            .field("backend", &self.executor.name())
            .field("h", &self.h)
            .field("dt", &self.dt)
            .field("generation", &self.buffers.generation())
            .field("state", &self.state())
            .finish()
    }
}
