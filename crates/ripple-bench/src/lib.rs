//! Benchmark profiles for the Ripple finite-difference engine.
//!
//! Provides pre-built [`StepperConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 damped wave seeded with 100 random peaks
//! - [`stress_profile`]: 316x316 (~100K cells) of the same system
//! - [`diffusion_profile`]: 100x100 single-field diffusion

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ripple_core::{ConfigError, Grid};
use ripple_engine::{Backend, StepperConfig, DEFAULT_GRID_SIZE, DEFAULT_SPACING, DEFAULT_TIMESTEP};
use ripple_seed::RandomLayout;
use ripple_stencil::{Diffusion, Velocity, WaveAcceleration};

/// Build the reference profile: 100x100 wave system at the default
/// spacing and time-step.
///
/// U is seeded from `RandomLayout` defaults, V starts at zero. Damping
/// 10 puts the forward-Euler limit at `min(10 / 8e4, 2 / 10) = 1.25e-4`,
/// above dt = 1e-4.
pub fn reference_profile(seed: u64, backend: Backend) -> Result<StepperConfig, ConfigError> {
    wave_profile(DEFAULT_GRID_SIZE, seed, backend)
}

/// Build the stress profile: 316x316 (~100K cells).
///
/// Same system as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(seed: u64, backend: Backend) -> Result<StepperConfig, ConfigError> {
    wave_profile(316, seed, backend)
}

/// Build a 100x100 diffusion profile, `k * dt / h² = 0.2`.
pub fn diffusion_profile(seed: u64, backend: Backend) -> Result<StepperConfig, ConfigError> {
    let n = DEFAULT_GRID_SIZE;
    let u = seeded_grid(n, seed)?;
    let k = 0.2 * DEFAULT_SPACING * DEFAULT_SPACING / DEFAULT_TIMESTEP;
    let diffusion = Diffusion::builder()
        .coefficient(k)
        .build()
        .map_err(|reason| ConfigError::InvalidSeed { reason })?;
    Ok(
        StepperConfig::single(u, diffusion, DEFAULT_SPACING, DEFAULT_TIMESTEP)
            .with_backend(backend),
    )
}

const WAVE_DAMPING: f64 = 10.0;

fn wave_profile(n: usize, seed: u64, backend: Backend) -> Result<StepperConfig, ConfigError> {
    let u = seeded_grid(n, seed)?;
    let v = Grid::new(n, n)?;
    let accel = WaveAcceleration::builder()
        .speed(1.0)
        .damping(WAVE_DAMPING)
        .build()
        .map_err(|reason| ConfigError::InvalidSeed { reason })?;
    Ok(
        StepperConfig::coupled(u, Velocity, v, accel, DEFAULT_SPACING, DEFAULT_TIMESTEP)
            .with_backend(backend),
    )
}

fn seeded_grid(n: usize, seed: u64) -> Result<Grid, ConfigError> {
    let layout = RandomLayout::builder()
        .build()
        .map_err(|reason| ConfigError::InvalidSeed { reason })?;
    layout.generate(n, n, seed)?.to_grid(n, n)
}
