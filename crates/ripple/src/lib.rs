//! Ripple: explicit finite-difference time stepping on periodic 2-D grids.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Ripple sub-crates. For most users, adding `ripple` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! // 100 random peaks on a 64x64 torus, at rest.
//! let layout = RandomLayout::builder().build().unwrap();
//! let u = layout.generate(64, 64, 42).unwrap().to_grid(64, 64).unwrap();
//! let v = Grid::new(64, 64).unwrap();
//!
//! // A damped wave equation as a first-order U/V system. Forward Euler
//! // needs damping: max_dt = min(10 / 8e4, 2 / 10) = 1.25e-4.
//! let accel = WaveAcceleration::builder().speed(1.0).damping(10.0).build().unwrap();
//! let config = StepperConfig::coupled(u, Velocity, v, accel, 0.01, 0.0001)
//!     .with_backend(Backend::Parallel { threads: None })
//!     .with_strict_dt(true);
//!
//! let mut stepper = Stepper::new(config).unwrap();
//! stepper.step(10).unwrap();
//!
//! let snap = stepper.snapshot();
//! assert_eq!(snap.generation(), 10);
//! assert_eq!(snap.surface_points(FieldId::U).unwrap().len(), 64 * 64);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | `Grid`, `FieldId`, error types |
//! | [`stencil`] | `ripple-stencil` | Finite-difference operators and evaluators |
//! | [`seed`] | `ripple-seed` | Gaussian initial conditions |
//! | [`engine`] | `ripple-engine` | Stepper, back-ends, snapshots |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`ripple-core`).
///
/// Contains the toroidal [`types::Grid`], [`types::FieldId`], and the
/// [`types::ConfigError`] / [`types::StabilityError`] failure classes.
pub use ripple_core as types;

/// Finite-difference operators and evaluators (`ripple-stencil`).
///
/// The [`stencil::Rhs`] trait is the main extension point for
/// user-defined equations.
pub use ripple_stencil as stencil;

/// Gaussian initial-condition generators (`ripple-seed`).
pub use ripple_seed as seed;

/// The stepping engine (`ripple-engine`).
///
/// [`engine::Stepper`] advances the fields; [`engine::Snapshot`] reads them.
pub use ripple_engine as engine;

/// Common imports for typical Ripple usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use ripple_core::{FieldId, Grid};

    // Errors
    pub use ripple_core::{ConfigError, StabilityError, StepError};

    // Operators and evaluators
    pub use ripple_stencil::{
        rhs_fn, Diffusion, Operators, Rhs, Stencil, Velocity, WaveAcceleration, Zero,
    };

    // Initial conditions
    pub use ripple_seed::{Gaussian, GaussianSeed, RandomLayout};

    // Engine
    pub use ripple_engine::{
        Backend, OwnedSnapshot, Snapshot, StepMetrics, Stepper, StepperConfig, StepperState,
    };
}
