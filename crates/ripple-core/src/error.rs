//! Error types for the Ripple finite-difference engine.
//!
//! Two failure classes exist: [`ConfigError`] is raised while building a
//! stepper and never during stepping; [`StabilityError`] is raised when a
//! sub-step produces a non-finite value and is surfaced through
//! [`StepError`].

use std::error::Error;
use std::fmt;

use crate::id::FieldId;

// ── ConfigError ────────────────────────────────────────────────────

/// Invalid construction parameters.
///
/// Returned by grid constructors and stepper construction. Never produced
/// once a stepper is running.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid spacing `h` is zero, negative, NaN, or infinite.
    NonPositiveSpacing {
        /// The rejected spacing.
        value: f64,
    },
    /// Time-step `dt` is negative, NaN, or infinite.
    InvalidTimestep {
        /// The rejected time-step.
        value: f64,
    },
    /// A grid was requested with zero rows or zero columns.
    EmptyGrid {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// Raw storage does not hold `rows * cols` values.
    DataLength {
        /// Number of values required.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
    /// A field's dimensions differ from the U field's dimensions.
    DimensionMismatch {
        /// The mismatched field.
        field: FieldId,
        /// Dimensions of U as `(rows, cols)`.
        expected: (usize, usize),
        /// Dimensions of the offending field as `(rows, cols)`.
        actual: (usize, usize),
    },
    /// An initial field holds a NaN or infinite value.
    NonFiniteInitial {
        /// The offending field.
        field: FieldId,
        /// Row of the first non-finite cell, row-major.
        row: usize,
        /// Column of the first non-finite cell.
        col: usize,
        /// The non-finite value.
        value: f64,
    },
    /// An evaluator reads a field the stepper does not hold.
    MissingField {
        /// The absent field.
        field: FieldId,
        /// Name of the evaluator that reads it.
        evaluator: String,
    },
    /// `dt` exceeds an evaluator's stability limit while strict checking is on.
    DtExceedsLimit {
        /// The configured time-step.
        dt: f64,
        /// The evaluator's advisory maximum.
        max_dt: f64,
        /// Name of the evaluator imposing the limit.
        evaluator: String,
    },
    /// The dedicated worker pool could not be created.
    ThreadPool {
        /// Description of the pool failure.
        reason: String,
    },
    /// An initial-condition generator was given invalid parameters.
    InvalidSeed {
        /// Description of the rejected parameter.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSpacing { value } => {
                write!(f, "grid spacing must be finite and > 0, got {value}")
            }
            Self::InvalidTimestep { value } => {
                write!(f, "time-step must be finite and >= 0, got {value}")
            }
            Self::EmptyGrid { rows, cols } => {
                write!(f, "grid must have at least one cell, got {rows}x{cols}")
            }
            Self::DataLength { expected, actual } => {
                write!(f, "grid data holds {actual} values, expected {expected}")
            }
            Self::DimensionMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "field {field} is {}x{}, expected {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::NonFiniteInitial {
                field,
                row,
                col,
                value,
            } => write!(
                f,
                "initial field {field} holds non-finite value {value} at cell ({row}, {col})"
            ),
            Self::MissingField { field, evaluator } => {
                write!(f, "evaluator '{evaluator}' reads field {field}, which is not present")
            }
            Self::DtExceedsLimit {
                dt,
                max_dt,
                evaluator,
            } => write!(
                f,
                "dt {dt} exceeds max_dt {max_dt} of evaluator '{evaluator}'"
            ),
            Self::ThreadPool { reason } => write!(f, "worker pool creation failed: {reason}"),
            Self::InvalidSeed { reason } => write!(f, "invalid initial condition: {reason}"),
        }
    }
}

impl Error for ConfigError {}

// ── StabilityError ─────────────────────────────────────────────────

/// A sub-step produced a non-finite (NaN or infinite) value.
///
/// Fatal to the stepper that raised it. The last committed state stays
/// readable; the failing sub-step's buffer is discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct StabilityError {
    /// The field holding the first non-finite value.
    pub field: FieldId,
    /// Row of the offending cell.
    pub row: usize,
    /// Column of the offending cell.
    pub col: usize,
    /// Zero-based index of the failing sub-step within its `step(n)` call.
    pub substep: u64,
    /// Number of sub-steps committed over the stepper's lifetime before the failure.
    pub generation: u64,
    /// The non-finite value that was computed.
    pub value: f64,
}

impl fmt::Display for StabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "non-finite value {} in field {} at cell ({}, {}) during sub-step {} (generation {})",
            self.value, self.field, self.row, self.col, self.substep, self.generation
        )
    }
}

impl Error for StabilityError {}

// ── StepError ──────────────────────────────────────────────────────

/// Errors returned from `step(n)`.
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// This call produced a non-finite value; the stepper is now failed.
    Unstable(StabilityError),
    /// The stepper failed on an earlier call and refuses to advance.
    AlreadyFailed {
        /// The failure that disabled the stepper.
        cause: StabilityError,
    },
}

impl StepError {
    /// The stability failure behind this error.
    pub fn stability(&self) -> &StabilityError {
        match self {
            Self::Unstable(err) => err,
            Self::AlreadyFailed { cause } => cause,
        }
    }
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unstable(err) => write!(f, "step failed: {err}"),
            Self::AlreadyFailed { cause } => {
                write!(f, "stepper already failed: {cause}")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.stability())
    }
}

impl From<StabilityError> for StepError {
    fn from(e: StabilityError) -> Self {
        Self::Unstable(e)
    }
}
