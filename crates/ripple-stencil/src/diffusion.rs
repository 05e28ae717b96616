//! Linear diffusion evaluator: `d(field)/dt = k * laplacian(field)`.
//!
//! Constructed via the builder pattern: [`Diffusion::builder`].

use ripple_core::FieldId;

use crate::operators::Operators;
use crate::rhs::Rhs;

/// Explicit diffusion of one field with coefficient `k`.
///
/// # Stability
///
/// Forward Euler with the five-point Laplacian is stable for
/// `k * dt / h² <= 1/4`, so [`Rhs::max_dt`] reports `h² / (4k)`.
#[derive(Clone, Debug)]
pub struct Diffusion {
    field: FieldId,
    coefficient: f64,
}

/// Builder for [`Diffusion`].
pub struct DiffusionBuilder {
    field: FieldId,
    coefficient: f64,
}

impl Diffusion {
    /// Create a new builder. Defaults: field U, coefficient 1.0.
    pub fn builder() -> DiffusionBuilder {
        DiffusionBuilder {
            field: FieldId::U,
            coefficient: 1.0,
        }
    }

    /// The diffused field.
    pub fn field(&self) -> FieldId {
        self.field
    }

    /// The diffusion coefficient.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }
}

impl DiffusionBuilder {
    /// Set the field to diffuse (default: U).
    pub fn field(mut self, field: FieldId) -> Self {
        self.field = field;
        self
    }

    /// Set the diffusion coefficient (default: 1.0). Must be >= 0.
    pub fn coefficient(mut self, k: f64) -> Self {
        self.coefficient = k;
        self
    }

    /// Build the evaluator, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `coefficient` is negative, NaN, or infinite.
    pub fn build(self) -> Result<Diffusion, String> {
        if !(self.coefficient >= 0.0) || !self.coefficient.is_finite() {
            return Err(format!(
                "coefficient must be finite and >= 0, got {}",
                self.coefficient
            ));
        }
        Ok(Diffusion {
            field: self.field,
            coefficient: self.coefficient,
        })
    }
}

impl Rhs for Diffusion {
    fn name(&self) -> &str {
        "diffusion"
    }

    fn eval(&self, i: i64, j: i64, ops: &Operators<'_>) -> f64 {
        match ops.field(self.field) {
            Some(s) => self.coefficient * s.laplacian(i, j),
            None => 0.0,
        }
    }

    fn reads_v(&self) -> bool {
        self.field == FieldId::V
    }

    fn max_dt(&self, h: f64) -> Option<f64> {
        if self.coefficient > 0.0 {
            Some(h * h / (4.0 * self.coefficient))
        } else {
            None
        }
    }
}
