//! Explicit finite-difference stepping engine.
//!
//! [`Stepper`] owns a double-buffered U (and optional V) field pair and
//! advances it with forward Euler sub-steps. Every cell of a sub-step is
//! evaluated against one frozen generation, the stability guard rejects
//! non-finite results, and only fully finite generations are published.
//!
//! The per-cell sweep runs on an [`Executor`]: [`SerialExecutor`] for a
//! plain row-major loop, [`ParallelExecutor`] for a rayon row-parallel
//! sweep. Both produce bit-identical results.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod executor;
pub mod guard;
pub mod metrics;
pub mod snapshot;
pub mod stepper;

pub use config::{
    Backend, FieldConfig, StepperConfig, DEFAULT_GRID_SIZE, DEFAULT_SPACING, DEFAULT_TIMESTEP,
};
pub use executor::{Executor, ParallelExecutor, SerialExecutor};
pub use metrics::StepMetrics;
pub use snapshot::{OwnedSnapshot, Snapshot};
pub use stepper::{Stepper, StepperState};
