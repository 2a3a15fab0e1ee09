//! Generic parallel execution framework
//!
//! This module owns the "run these p jobs concurrently and wait for all of
//! them" part of the product reduction. It knows nothing about factorials:
//! an executor receives a job count and a job closure indexed by worker id.
//!
//! # Executors
//!
//! | Executor              | Primitive                                          |
//! |-----------------------|----------------------------------------------------|
//! | `ThreadExecutor`      | one scoped OS thread per job (`crossbeam::thread`) |
//! | `TaskExecutor`        | queued tasks served by a worker pool (channels)    |
//! | `ParallelForExecutor` | structured parallel loop (`rayon` `try_for_each`)  |
//! | `ParallelMapExecutor` | data-parallel map over the index range (`rayon`)   |
//! | `SequentialExecutor`  | plain loop, reference behaviour                    |
//!
//! All of them block until every started job finished and propagate the
//! first failure. A panicking job is reported as an error.
//!
//! # Example Usage
//!
//! ```rust
//! use parfact::parallel::{Executor, ParallelForExecutor};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let total = AtomicUsize::new(0);
//! ParallelForExecutor.run(4, |k| {
//!     total.fetch_add(k, Ordering::Relaxed);
//!     Ok(())
//! })?;
//! assert_eq!(total.into_inner(), 6);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod core;

// Re-export main types for easier access
pub use self::core::{
    Executor, ParallelForExecutor, ParallelMapExecutor, SequentialExecutor, TaskExecutor,
    ThreadExecutor, resolve_workers, run_guarded,
};
