//! Stepper configuration, defaults, and validation.
//!
//! [`StepperConfig`] is the builder-input for [`Stepper::new`](crate::Stepper::new).
//! [`validate()`](StepperConfig::validate) checks every structural
//! invariant up front so that stepping itself can only fail on stability.

use std::fmt;

use ripple_core::{ConfigError, FieldId, Grid};
use ripple_stencil::Rhs;

use crate::guard::first_non_finite;

/// Default side length of a square grid.
pub const DEFAULT_GRID_SIZE: usize = 100;
/// Default grid spacing.
pub const DEFAULT_SPACING: f64 = 0.01;
/// Default time-step.
pub const DEFAULT_TIMESTEP: f64 = 0.0001;

// ── Backend ────────────────────────────────────────────────────────

/// Execution strategy for the per-cell sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backend {
    /// Single-threaded row-major loop.
    #[default]
    Serial,
    /// Rows swept in parallel with rayon.
    Parallel {
        /// Dedicated pool size. `None` = the global rayon pool.
        threads: Option<usize>,
    },
}

// ── FieldConfig ────────────────────────────────────────────────────

/// Initial values and time derivative of one field.
pub struct FieldConfig {
    /// Initial condition. Copied into both buffer slots.
    pub initial: Grid,
    /// Time derivative evaluated per cell per sub-step.
    pub rhs: Box<dyn Rhs>,
}

impl FieldConfig {
    /// Pair an initial grid with its evaluator.
    pub fn new(initial: Grid, rhs: impl Rhs + 'static) -> Self {
        Self {
            initial,
            rhs: Box::new(rhs),
        }
    }
}

impl fmt::Debug for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConfig")
            .field("dimensions", &self.initial.dimensions())
            .field("rhs", &self.rhs.name())
            .finish()
    }
}

// ── StepperConfig ──────────────────────────────────────────────────

/// Complete configuration for constructing a [`Stepper`](crate::Stepper).
pub struct StepperConfig {
    /// The primary field.
    pub u: FieldConfig,
    /// The optional coupled field. Must match U's dimensions.
    pub v: Option<FieldConfig>,
    /// Grid spacing. Must be finite and > 0.
    pub h: f64,
    /// Time-step. Must be finite and >= 0.
    pub dt: f64,
    /// Sweep execution strategy. Default: [`Backend::Serial`].
    pub backend: Backend,
    /// Reject `dt` above any evaluator's advisory `max_dt`. Default: false.
    pub strict_dt: bool,
}

impl StepperConfig {
    /// Single-field configuration with the serial back-end.
    pub fn single(u: Grid, rhs: impl Rhs + 'static, h: f64, dt: f64) -> Self {
        Self {
            u: FieldConfig::new(u, rhs),
            v: None,
            h,
            dt,
            backend: Backend::Serial,
            strict_dt: false,
        }
    }

    /// Coupled U/V configuration with the serial back-end.
    pub fn coupled(
        u: Grid,
        u_rhs: impl Rhs + 'static,
        v: Grid,
        v_rhs: impl Rhs + 'static,
        h: f64,
        dt: f64,
    ) -> Self {
        Self {
            u: FieldConfig::new(u, u_rhs),
            v: Some(FieldConfig::new(v, v_rhs)),
            h,
            dt,
            backend: Backend::Serial,
            strict_dt: false,
        }
    }

    /// Replace the execution back-end.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Turn strict `dt` checking on or off.
    pub fn with_strict_dt(mut self, strict: bool) -> Self {
        self.strict_dt = strict;
        self
    }

    /// `(rows, cols)` of the U field.
    pub fn dimensions(&self) -> (usize, usize) {
        self.u.initial.dimensions()
    }

    /// All configured evaluators, U first.
    fn evaluators(&self) -> impl Iterator<Item = &(dyn Rhs + 'static)> {
        std::iter::once(&*self.u.rhs).chain(self.v.iter().map(|v| &*v.rhs))
    }

    /// Initial grids, U first.
    fn initial_grids(&self) -> impl Iterator<Item = (FieldId, &Grid)> {
        std::iter::once((FieldId::U, &self.u.initial))
            .chain(self.v.iter().map(|v| (FieldId::V, &v.initial)))
    }

    /// Tightest advisory time-step limit across evaluators, with the name
    /// of the evaluator imposing it.
    pub fn advisory_max_dt(&self) -> Option<(f64, &str)> {
        self.evaluators()
            .filter_map(|r| r.max_dt(self.h).map(|dt| (dt, r.name())))
            .fold(None, |best, (dt, name)| match best {
                Some((b, _)) if b <= dt => best,
                _ => Some((dt, name)),
            })
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Spacing finite and positive.
        if !(self.h > 0.0) || !self.h.is_finite() {
            return Err(ConfigError::NonPositiveSpacing { value: self.h });
        }
        // 2. Time-step finite and non-negative.
        if !(self.dt >= 0.0) || !self.dt.is_finite() {
            return Err(ConfigError::InvalidTimestep { value: self.dt });
        }
        // 3. V matches U's dimensions.
        let expected = self.dimensions();
        if let Some(v) = &self.v {
            let actual = v.initial.dimensions();
            if actual != expected {
                return Err(ConfigError::DimensionMismatch {
                    field: FieldId::V,
                    expected,
                    actual,
                });
            }
        }
        // 4. Initial values are finite.
        for (field, grid) in self.initial_grids() {
            if let Some((idx, value)) = first_non_finite(grid.as_slice()) {
                return Err(ConfigError::NonFiniteInitial {
                    field,
                    row: idx / grid.cols(),
                    col: idx % grid.cols(),
                    value,
                });
            }
        }
        // 5. Evaluators only read fields that exist.
        if self.v.is_none() {
            if let Some(r) = self.evaluators().find(|r| r.reads_v()) {
                return Err(ConfigError::MissingField {
                    field: FieldId::V,
                    evaluator: r.name().to_string(),
                });
            }
        }
        // 6. Dedicated pool size, if given, is at least one thread.
        if let Backend::Parallel { threads: Some(0) } = self.backend {
            return Err(ConfigError::ThreadPool {
                reason: "thread count must be at least 1".to_string(),
            });
        }
        // 7. Strict mode enforces the advisory limit.
        if self.strict_dt {
            if let Some((max_dt, name)) = self.advisory_max_dt() {
                if self.dt > max_dt {
                    return Err(ConfigError::DtExceedsLimit {
                        dt: self.dt,
                        max_dt,
                        evaluator: name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for StepperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepperConfig")
            .field("u", &self.u)
            .field("v", &self.v)
            .field("h", &self.h)
            .field("dt", &self.dt)
            .field("backend", &self.backend)
            .field("strict_dt", &self.strict_dt)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_stencil::{Diffusion, Velocity, WaveAcceleration, Zero};

    fn valid_config() -> StepperConfig {
        StepperConfig::single(Grid::new(4, 4).unwrap(), Zero, 1.0, 0.1)
    }

    fn wave() -> WaveAcceleration {
        WaveAcceleration::builder().build().unwrap()
    }

    #[test]
    fn validate_valid_config_succeeds() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn default_constants() {
        assert_eq!(DEFAULT_GRID_SIZE, 100);
        assert_eq!(DEFAULT_SPACING, 0.01);
        assert_eq!(DEFAULT_TIMESTEP, 0.0001);
        assert_eq!(Backend::default(), Backend::Serial);
    }

    // ---------------------------------------------------------------
    // Spacing and time-step
    // ---------------------------------------------------------------

    #[test]
    fn validate_zero_spacing_fails() {
        let mut cfg = valid_config();
        cfg.h = 0.0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonPositiveSpacing { value: 0.0 })
        );
    }

    #[test]
    fn validate_nan_spacing_fails() {
        let mut cfg = valid_config();
        cfg.h = f64::NAN;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositiveSpacing { .. })
        ));
    }

    #[test]
    fn validate_negative_dt_fails() {
        let mut cfg = valid_config();
        cfg.dt = -0.1;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidTimestep { value: -0.1 })
        );
    }

    #[test]
    fn validate_infinite_dt_fails() {
        let mut cfg = valid_config();
        cfg.dt = f64::INFINITY;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidTimestep { .. })
        ));
    }

    #[test]
    fn validate_zero_dt_succeeds() {
        let mut cfg = valid_config();
        cfg.dt = 0.0;
        assert!(cfg.validate().is_ok());
    }

    // ---------------------------------------------------------------
    // Fields
    // ---------------------------------------------------------------

    #[test]
    fn validate_dimension_mismatch_fails() {
        let cfg = StepperConfig::coupled(
            Grid::new(4, 5).unwrap(),
            Velocity,
            Grid::new(5, 4).unwrap(),
            wave(),
            1.0,
            0.1,
        );
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::DimensionMismatch {
                field: FieldId::V,
                expected: (4, 5),
                actual: (5, 4),
            })
        );
    }

    #[test]
    fn validate_missing_v_fails() {
        let cfg = StepperConfig::single(Grid::new(3, 3).unwrap(), Velocity, 1.0, 0.1);
        match cfg.validate() {
            Err(ConfigError::MissingField { field, evaluator }) => {
                assert_eq!(field, FieldId::V);
                assert_eq!(evaluator, "velocity");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn validate_nan_initial_u_fails() {
        let mut u = Grid::new(3, 4).unwrap();
        u.set(2, 1, f64::NAN);
        let cfg = StepperConfig::single(u, Zero, 1.0, 0.1);
        match cfg.validate() {
            Err(ConfigError::NonFiniteInitial {
                field, row, col, value,
            }) => {
                assert_eq!(field, FieldId::U);
                assert_eq!((row, col), (2, 1));
                assert!(value.is_nan());
            }
            other => panic!("expected NonFiniteInitial, got {other:?}"),
        }
    }

    #[test]
    fn validate_infinite_initial_v_fails() {
        let mut v = Grid::new(4, 4).unwrap();
        v.set(0, 3, f64::NEG_INFINITY);
        let cfg = StepperConfig::coupled(Grid::new(4, 4).unwrap(), Velocity, v, wave(), 1.0, 0.1);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonFiniteInitial {
                field: FieldId::V,
                row: 0,
                col: 3,
                ..
            })
        ));
    }

    // ---------------------------------------------------------------
    // Back-end
    // ---------------------------------------------------------------

    #[test]
    fn validate_zero_threads_fails() {
        let cfg = valid_config().with_backend(Backend::Parallel { threads: Some(0) });
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ThreadPool { .. })
        ));
    }

    #[test]
    fn validate_global_pool_succeeds() {
        let cfg = valid_config().with_backend(Backend::Parallel { threads: None });
        assert!(cfg.validate().is_ok());
    }

    // ---------------------------------------------------------------
    // Advisory dt
    // ---------------------------------------------------------------

    #[test]
    fn advisory_picks_tightest_limit() {
        let cfg = StepperConfig::coupled(
            Grid::new(4, 4).unwrap(),
            Diffusion::builder().coefficient(1.0).build().unwrap(),
            Grid::new(4, 4).unwrap(),
            WaveAcceleration::builder().damping(4.0).build().unwrap(),
            1.0,
            0.1,
        );
        // diffusion: 1/4, wave: min(4/8, 2/4) = 1/2
        let (dt, name) = cfg.advisory_max_dt().unwrap();
        assert_eq!(dt, 0.25);
        assert_eq!(name, "diffusion");
    }

    #[test]
    fn advisory_none_without_limits() {
        assert!(valid_config().advisory_max_dt().is_none());
    }

    #[test]
    fn strict_dt_rejects_large_dt() {
        let diffusion = Diffusion::builder().coefficient(1.0).build().unwrap();
        let cfg = StepperConfig::single(Grid::new(4, 4).unwrap(), diffusion, 1.0, 0.5)
            .with_strict_dt(true);
        match cfg.validate() {
            Err(ConfigError::DtExceedsLimit { max_dt, .. }) => assert_eq!(max_dt, 0.25),
            other => panic!("expected DtExceedsLimit, got {other:?}"),
        }
    }

    #[test]
    fn lenient_dt_accepts_large_dt() {
        let diffusion = Diffusion::builder().coefficient(1.0).build().unwrap();
        let cfg = StepperConfig::single(Grid::new(4, 4).unwrap(), diffusion, 1.0, 0.5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn debug_names_evaluators() {
        let dbg = format!("{:?}", valid_config());
        assert!(dbg.contains("zero"));
        assert!(dbg.contains("Serial"));
    }
}
