//! Initial-condition generators for Ripple.
//!
//! A [`GaussianSeed`] superposes [`Gaussian`] bumps into a smooth field and
//! samples it onto a [`Grid`](ripple_core::Grid). [`RandomLayout`] scatters
//! peaks reproducibly from a `u64` seed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod gaussian;
pub mod layout;

pub use gaussian::{Gaussian, GaussianSeed};
pub use layout::{RandomLayout, RandomLayoutBuilder};
