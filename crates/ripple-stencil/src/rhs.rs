//! The [`Rhs`] trait: the pluggable time derivative of one field.
//!
//! A stepper holds one evaluator per field. Each sub-step it calls
//! [`Rhs::eval`] once per cell and integrates `next = current + dt * rhs`.
//! Different PDEs are expressed by swapping evaluators; the stepper itself
//! never changes.

use std::fmt;

use crate::operators::Operators;

/// Time derivative of one field, evaluated per cell.
///
/// # Contract
///
/// - `eval()` MUST be deterministic: same inputs produce identical outputs.
/// - `&self`: evaluators are stateless; they read fields only through
///   the [`Operators`] bundle.
/// - `Send + Sync` so the parallel back-end can call `eval()` from worker
///   threads.
///
/// # Examples
///
/// A linear decay `du/dt = -k u`:
///
/// ```
/// use ripple_core::Grid;
/// use ripple_stencil::{Operators, Rhs};
///
/// struct Decay(f64);
///
/// impl Rhs for Decay {
///     fn name(&self) -> &str { "decay" }
///
///     fn eval(&self, i: i64, j: i64, ops: &Operators<'_>) -> f64 {
///         -self.0 * ops.u().value(i, j)
///     }
/// }
///
/// let u = Grid::filled(2, 2, 4.0).unwrap();
/// let ops = Operators::bind(&u, None, 1.0);
/// assert_eq!(Decay(0.5).eval(0, 0, &ops), -2.0);
/// ```
pub trait Rhs: Send + Sync {
    /// Human-readable name for error reporting and logging.
    fn name(&self) -> &str;

    /// Time derivative at cell `(i, j)`.
    fn eval(&self, i: i64, j: i64, ops: &Operators<'_>) -> f64;

    /// Whether this evaluator reads V.
    ///
    /// A stepper without a V field rejects evaluators that return `true`.
    /// Default: `false`.
    fn reads_v(&self) -> bool {
        false
    }

    /// Advisory maximum stable time-step for grid spacing `h`.
    ///
    /// Return `None` to impose no constraint.
    fn max_dt(&self, _h: f64) -> Option<f64> {
        None
    }
}

impl fmt::Debug for dyn Rhs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rhs").field("name", &self.name()).finish()
    }
}

// ── Zero ───────────────────────────────────────────────────────────

/// An evaluator that always returns zero. The field never changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Zero;

impl Rhs for Zero {
    fn name(&self) -> &str {
        "zero"
    }

    fn eval(&self, _i: i64, _j: i64, _ops: &Operators<'_>) -> f64 {
        0.0
    }
}

// ── FnRhs ──────────────────────────────────────────────────────────

/// Adapts a closure `(i, j, ops) -> f64` into an [`Rhs`].
///
/// Built with [`rhs_fn`].
pub struct FnRhs<F> {
    name: String,
    reads_v: bool,
    max_dt: Option<f64>,
    f: F,
}

/// Wrap a closure as a named evaluator.
///
/// ```
/// use ripple_core::Grid;
/// use ripple_stencil::{rhs_fn, Operators, Rhs};
///
/// // Coupled: du/dt = v.
/// let dudt = rhs_fn("dudt", |i, j, ops: &Operators<'_>| {
///     ops.v().map_or(0.0, |v| v.value(i, j))
/// })
/// .reading_v();
///
/// let u = Grid::new(2, 2).unwrap();
/// let v = Grid::filled(2, 2, 3.0).unwrap();
/// let ops = Operators::bind(&u, Some(&v), 1.0);
/// assert_eq!(dudt.eval(1, 1, &ops), 3.0);
/// assert!(dudt.reads_v());
/// ```
pub fn rhs_fn<F>(name: impl Into<String>, f: F) -> FnRhs<F>
where
    F: Fn(i64, i64, &Operators<'_>) -> f64 + Send + Sync,
{
    FnRhs {
        name: name.into(),
        reads_v: false,
        max_dt: None,
        f,
    }
}

impl<F> FnRhs<F> {
    /// Declare that the closure reads V.
    pub fn reading_v(mut self) -> Self {
        self.reads_v = true;
        self
    }

    /// Attach an advisory maximum time-step (independent of `h`).
    pub fn with_max_dt(mut self, max_dt: f64) -> Self {
        self.max_dt = Some(max_dt);
        self
    }
}

impl<F> Rhs for FnRhs<F>
where
    F: Fn(i64, i64, &Operators<'_>) -> f64 + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn eval(&self, i: i64, j: i64, ops: &Operators<'_>) -> f64 {
        (self.f)(i, j, ops)
    }

    fn reads_v(&self) -> bool {
        self.reads_v
    }

    fn max_dt(&self, _h: f64) -> Option<f64> {
        self.max_dt
    }
}

impl<F> fmt::Debug for FnRhs<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRhs")
            .field("name", &self.name)
            .field("reads_v", &self.reads_v)
            .field("max_dt", &self.max_dt)
            .finish_non_exhaustive()
    }
}
