//! # parfact - arbitrary-precision factorials in parallel
//!
//! parfact computes `n!` exactly with [`num_bigint::BigUint`]. Besides a
//! sequential baseline it offers four parallel strategies that all run the
//! same algorithm: `[1, n]` is split into interleaved partitions, every
//! partition is multiplied on its own worker, and finished workers fold the
//! partial products they find in a shared pool into their own before
//! depositing it.
//!
//! ## Library Usage
//!
//! ```rust
//! use parfact::factorial::{Strategy, thread_factorial};
//!
//! // 0 workers means "use the available parallelism"
//! let value = thread_factorial(25, 0)?;
//! assert_eq!(value.to_string(), "15511210043330985984000000");
//!
//! let same = Strategy::ParallelMap.compute(25, 4)?;
//! assert_eq!(value, same);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## CLI
//!
//! ```bash
//! parfact compute 1000 --strategy task --workers 8
//! parfact compare 50000
//! ```

pub mod cli;
pub mod config;
pub mod factorial;
pub mod parallel;

pub use config::ParfactConfig;
pub use factorial::{
    ParallelProductReducer, Strategy, factorial, par_map_factorial, parallel_for_factorial,
    task_factorial, thread_factorial,
};

/// Result type alias for parfact operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
