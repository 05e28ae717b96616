//! Finite-difference operators and right-hand-side evaluators.
//!
//! A [`Stencil`] binds a [`Grid`](ripple_core::Grid) and a spacing `h`
//! and evaluates central differences with toroidal neighbour lookups.
//! [`Operators`] bundles the U stencil with an optional V stencil, and is
//! what every [`Rhs`] evaluator receives per cell.
//!
//! # Reference evaluators
//!
//! - [`Zero`]: no time evolution.
//! - [`Diffusion`]: `k * laplacian` of one field.
//! - [`Velocity`] + [`WaveAcceleration`]: the two halves of the damped
//!   wave equation written as a first-order system.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod diffusion;
pub mod operators;
pub mod rhs;
pub mod stencil;
pub mod wave;

pub use diffusion::Diffusion;
pub use operators::Operators;
pub use rhs::{rhs_fn, FnRhs, Rhs, Zero};
pub use stencil::Stencil;
pub use wave::{Velocity, WaveAcceleration};
