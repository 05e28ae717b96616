//! Core types for the Ripple finite-difference engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental building blocks used throughout the Ripple workspace:
//! the toroidal [`Grid`], the [`FieldId`] of the U/V field pair, and the
//! error taxonomy shared by construction and stepping.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod id;

pub use error::{ConfigError, StabilityError, StepError};
pub use grid::{wrap_axis, Grid};
pub use id::FieldId;
