//! Arbitrary-precision factorials
//!
//! `n!` is computed either sequentially or by the [`ParallelProductReducer`]:
//! `[1, n]` is split into `p` interleaved partitions, each partition is
//! multiplied on its own worker, and the partial products meet in a shared
//! pool. The parallel strategies differ only in the [`Executor`] that runs
//! the `p` workers; they always return the same value.
//!
//! ```rust
//! use parfact::factorial::{Strategy, factorial};
//!
//! let expected = factorial(30);
//! for strategy in Strategy::ALL {
//!     assert_eq!(strategy.compute(30, 4)?, expected);
//! }
//! assert_eq!(expected.to_string(), "265252859812191058636308480000000");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! [`Executor`]: crate::parallel::Executor

use anyhow::{Result, bail};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parallel::{
    ParallelForExecutor, ParallelMapExecutor, TaskExecutor, ThreadExecutor,
};

pub mod partition;
pub mod reducer;
pub mod sequential;

pub use partition::{Partition, partitions};
pub use reducer::{ParallelProductReducer, Plan, ProductPool, Schedule};
pub use sequential::factorial;

/// How the multiplicative workload is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Single-threaded baseline
    Sequential,
    /// One OS thread per partition
    Thread,
    /// Partitions queued on a task pool
    Task,
    /// Structured parallel loop over the partitions
    ParallelFor,
    /// Data-parallel map over the partition range
    ParallelMap,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Sequential,
        Strategy::Thread,
        Strategy::Task,
        Strategy::ParallelFor,
        Strategy::ParallelMap,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Thread => "thread",
            Strategy::Task => "task",
            Strategy::ParallelFor => "parallel-for",
            Strategy::ParallelMap => "parallel-map",
        }
    }

    /// Compute `n!` with `workers` workers (0 = available parallelism)
    pub fn compute(&self, n: u64, workers: usize) -> Result<BigUint> {
        self.compute_with(n, &ParallelProductReducer::new(workers))
    }

    /// Compute `n!` with a configured reducer
    pub fn compute_with(&self, n: u64, reducer: &ParallelProductReducer) -> Result<BigUint> {
        match self {
            Strategy::Sequential => Ok(factorial(n)),
            Strategy::Thread => reducer.compute(n, ThreadExecutor),
            Strategy::Task => reducer.compute_with(n, |schedule| {
                TaskExecutor::default().long_running(schedule.long_running)
            }),
            Strategy::ParallelFor => reducer.compute(n, ParallelForExecutor),
            Strategy::ParallelMap => reducer.compute(n, ParallelMapExecutor),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `n!` on scoped OS threads
pub fn thread_factorial(n: u64, workers: usize) -> Result<BigUint> {
    Strategy::Thread.compute(n, workers)
}

/// `n!` on a queued task pool
pub fn task_factorial(n: u64, workers: usize) -> Result<BigUint> {
    Strategy::Task.compute(n, workers)
}

/// `n!` with a structured parallel loop
pub fn parallel_for_factorial(n: u64, workers: usize) -> Result<BigUint> {
    Strategy::ParallelFor.compute(n, workers)
}

/// `n!` with a data-parallel map over the partition range
pub fn par_map_factorial(n: u64, workers: usize) -> Result<BigUint> {
    Strategy::ParallelMap.compute(n, workers)
}

/// Accept a signed factorial argument, rejecting negatives
pub fn validate_argument(n: i64) -> Result<u64> {
    if n < 0 {
        tracing::warn!("Rejected negative factorial argument {}", n);
        bail!("invalid argument: factorial is undefined for negative n ({})", n);
    }
    Ok(n as u64)
}
