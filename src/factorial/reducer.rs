use anyhow::{Result, bail};
use crossbeam::queue::SegQueue;
use num_bigint::BigUint;
use num_traits::One;
use rayon::prelude::*;
use tracing::{debug, trace};

use super::partition::Partition;
use super::sequential::factorial;
use crate::config::ParallelSettings;
use crate::parallel::{Executor, resolve_workers};

/// Shared pool of partial products.
///
/// Workers deposit through [`ProductPool::absorb`], which first multiplies in
/// whatever other workers already left behind. Every entry is popped by at
/// most one caller, so no partial product is lost or counted twice.
#[derive(Debug, Default)]
pub struct ProductPool {
    entries: SegQueue<BigUint>,
}

impl ProductPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combine `partial` with every entry currently pooled and deposit the result
    pub fn absorb(&self, mut partial: BigUint) {
        let mut combined = 0usize;
        while let Some(taken) = self.entries.pop() {
            partial *= taken;
            combined += 1;
        }
        trace!("Depositing partial product after combining {} pooled entries", combined);
        self.entries.push(partial);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Multiply every remaining entry together; one for an empty pool
    pub fn drain(self) -> BigUint {
        let remaining: Vec<BigUint> = std::iter::from_fn(|| self.entries.pop()).collect();
        remaining.into_par_iter().reduce(BigUint::one, |a, b| a * b)
    }
}

/// How a single `compute` call is carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// `n ≤ 1`: the result is one, nothing is dispatched
    Identity,
    /// Partitioning would not help; multiply sequentially
    Sequential,
    /// Partition `[1, n]` across workers
    Partitioned(Schedule),
}

/// Parameters of a partitioned run, handed to executor factories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub n: u64,
    pub workers: usize,
    /// Partitions are large enough that each one deserves a dedicated worker
    pub long_running: bool,
}

/// Computes `n!` by partitioning `[1, n]` into interleaved residue classes,
/// multiplying each class on its own worker and reducing the partial
/// products through a shared [`ProductPool`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelProductReducer {
    workers: usize,
    max_workers: usize,
    long_running_threshold: u64,
}

impl Default for ParallelProductReducer {
    fn default() -> Self {
        Self::from_settings(&ParallelSettings::default())
    }
}

impl ParallelProductReducer {
    /// Reducer with `workers` workers (0 = available parallelism) and default limits
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            ..Self::default()
        }
    }

    pub fn from_settings(settings: &ParallelSettings) -> Self {
        Self {
            workers: settings.workers,
            max_workers: settings.max_workers,
            long_running_threshold: settings.long_running_threshold,
        }
    }

    /// Upper bound on resolved workers, 0 for no limit
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn with_long_running_threshold(mut self, threshold: u64) -> Self {
        self.long_running_threshold = threshold;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Decide how `n!` will be computed.
    ///
    /// Fails when partitioning is needed and the resolved worker count exceeds
    /// the configured limit.
    pub fn plan(&self, n: u64) -> Result<Plan> {
        if n <= 1 {
            return Ok(Plan::Identity);
        }

        let workers = resolve_workers(self.workers);
        if workers <= 1 || n <= workers as u64 {
            debug!("Sequential product for n={} (workers={})", n, workers);
            return Ok(Plan::Sequential);
        }

        if self.max_workers > 0 && workers > self.max_workers {
            bail!(
                "worker count {} exceeds the configured limit of {}",
                workers,
                self.max_workers
            );
        }

        let long_running = n / workers as u64 > self.long_running_threshold;
        debug!(
            "Partitioned product for n={} across {} workers (long_running={})",
            n, workers, long_running
        );
        Ok(Plan::Partitioned(Schedule {
            n,
            workers,
            long_running,
        }))
    }

    /// Compute `n!` with a fixed executor
    pub fn compute<E: Executor>(&self, n: u64, executor: E) -> Result<BigUint> {
        self.compute_with(n, |_| executor)
    }

    /// Compute `n!`, building the executor from the chosen schedule.
    ///
    /// `make_executor` is only called when the work is actually partitioned.
    pub fn compute_with<E, M>(&self, n: u64, make_executor: M) -> Result<BigUint>
    where
        E: Executor,
        M: FnOnce(&Schedule) -> E,
    {
        match self.plan(n)? {
            Plan::Identity => Ok(BigUint::one()),
            Plan::Sequential => Ok(factorial(n)),
            Plan::Partitioned(schedule) => {
                let executor = make_executor(&schedule);
                reduce_partitioned(&schedule, &executor)
            }
        }
    }
}

fn reduce_partitioned<E: Executor>(schedule: &Schedule, executor: &E) -> Result<BigUint> {
    let pool = ProductPool::new();

    executor.run(schedule.workers, |worker| {
        let partition = Partition::new(worker, schedule.workers, schedule.n);
        let partial = partition.product();
        trace!(
            "Worker {} multiplied {} indices ({} bits)",
            worker,
            partition.len(),
            partial.bits()
        );
        pool.absorb(partial);
        Ok(())
    })?;

    debug!("All {} workers finished, draining {} pooled entries", schedule.workers, pool.len());
    Ok(pool.drain())
}
