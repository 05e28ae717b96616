//! Execution back-ends for the per-cell sweep.
//!
//! An [`Executor`] fills every slot of a row-major buffer from a per-cell
//! kernel. The kernel reads only from the frozen current generation and
//! each call writes only its own slot, so rows can be processed in any
//! order or in parallel with no synchronisation beyond the end of the
//! sweep.

use rayon::prelude::*;
use ripple_core::ConfigError;

use crate::config::Backend;

/// Per-cell kernel: `(row, col) -> next value`.
pub type CellKernel<'a> = dyn Fn(usize, usize) -> f64 + Sync + 'a;

/// Strategy for applying a kernel over every cell of a grid.
///
/// # Contract
///
/// - After `sweep()` returns, `out[r * cols + c] == cell(r, c)` for every cell.
/// - `cell` is called exactly once per cell.
/// - Results must not depend on execution order; implementations may
///   visit cells in any order.
pub trait Executor: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Fill `out` (row-major, `cols` columns per row) from `cell`.
    fn sweep(&self, out: &mut [f64], cols: usize, cell: &CellKernel<'_>);
}

/// Build the executor for a configured [`Backend`].
///
/// Returns `Err(ConfigError::ThreadPool)` if a dedicated pool cannot be created.
pub fn executor_for(backend: Backend) -> Result<Box<dyn Executor>, ConfigError> {
    match backend {
        Backend::Serial => Ok(Box::new(SerialExecutor)),
        Backend::Parallel { threads } => Ok(Box::new(ParallelExecutor::new(threads)?)),
    }
}

// ── SerialExecutor ─────────────────────────────────────────────────

/// Single-threaded row-major sweep.
#[derive(Clone, Copy, Debug, Default)]
pub struct SerialExecutor;

impl Executor for SerialExecutor {
    fn name(&self) -> &str {
        "serial"
    }

    fn sweep(&self, out: &mut [f64], cols: usize, cell: &CellKernel<'_>) {
        for (r, row) in out.chunks_mut(cols).enumerate() {
            for (c, slot) in row.iter_mut().enumerate() {
                *slot = cell(r, c);
            }
        }
    }
}

// ── ParallelExecutor ───────────────────────────────────────────────

/// Row-parallel sweep on a rayon thread pool.
///
/// Uses the global pool unless constructed with an explicit thread count.
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: Option<rayon::ThreadPool>,
}

impl ParallelExecutor {
    /// Create an executor.
    ///
    /// `threads = None` runs on the global rayon pool; `Some(n)` builds a
    /// dedicated pool of `n` workers.
    pub fn new(threads: Option<usize>) -> Result<Self, ConfigError> {
        let pool = match threads {
            None => None,
            Some(0) => {
                return Err(ConfigError::ThreadPool {
                    reason: "thread count must be at least 1".to_string(),
                })
            }
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("ripple-sweep-{i}"))
                    .build()
                    .map_err(|e| ConfigError::ThreadPool {
                        reason: e.to_string(),
                    })?,
            ),
        };
        Ok(Self { pool })
    }

    /// Number of worker threads the sweep runs on.
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

impl Executor for ParallelExecutor {
    fn name(&self) -> &str {
        "parallel"
    }

    fn sweep(&self, out: &mut [f64], cols: usize, cell: &CellKernel<'_>) {
        let mut run = || {
            out.par_chunks_mut(cols).enumerate().for_each(|(r, row)| {
                for (c, slot) in row.iter_mut().enumerate() {
                    *slot = cell(r, c);
                }
            });
        };
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }
}
