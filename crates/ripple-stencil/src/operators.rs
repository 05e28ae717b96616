//! The per-sub-step operator bundle handed to evaluators.

use ripple_core::{FieldId, Grid};

use crate::stencil::Stencil;

/// Stencils for U and, in coupled systems, V.
///
/// Rebuilt from the current buffers at the start of every sub-step, so an
/// evaluator always reads one consistent generation of both fields.
#[derive(Clone, Copy, Debug)]
pub struct Operators<'a> {
    u: Stencil<'a>,
    v: Option<Stencil<'a>>,
}

impl<'a> Operators<'a> {
    /// Bind stencils to the given grids with a shared spacing `h`.
    pub fn bind(u: &'a Grid, v: Option<&'a Grid>, h: f64) -> Self {
        Self {
            u: Stencil::new(u, h),
            v: v.map(|g| Stencil::new(g, h)),
        }
    }

    /// Stencil over U.
    pub fn u(&self) -> &Stencil<'a> {
        &self.u
    }

    /// Stencil over V, or `None` for single-field systems.
    pub fn v(&self) -> Option<&Stencil<'a>> {
        self.v.as_ref()
    }

    /// Stencil for `field`, if that field is present.
    pub fn field(&self, field: FieldId) -> Option<&Stencil<'a>> {
        match field {
            FieldId::U => Some(&self.u),
            FieldId::V => self.v.as_ref(),
        }
    }
}
