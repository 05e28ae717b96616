//! Per-call performance metrics for the stepper.
//!
//! [`StepMetrics`] captures timing data for a single `step(n)` call,
//! enabling telemetry and profiling of the two back-ends.

/// Timing metrics collected during a single `step(n)` call.
///
/// All durations are in microseconds and summed over the call's
/// sub-steps. On failure the metrics cover the sub-steps that ran,
/// including the failing one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire call, in microseconds.
    pub total_us: u64,
    /// Number of sub-steps committed by this call.
    pub substeps: u64,
    /// Time spent sweeping the U evaluator, in microseconds.
    pub u_sweep_us: u64,
    /// Time spent sweeping the V evaluator, in microseconds.
    pub v_sweep_us: u64,
    /// Time spent in the stability guard, in microseconds.
    pub guard_us: u64,
    /// Cells evaluated per field per sub-step.
    pub cells_per_substep: usize,
}
