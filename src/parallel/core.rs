use anyhow::{Result, anyhow};
use crossbeam::channel::{Receiver, Sender, bounded};
use rayon::prelude::*;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, Ordering};

/// Runs `workers` indexed jobs concurrently and waits for all of them.
///
/// Every implementation calls `job(k)` exactly once for each `k` in
/// `0..workers` unless an earlier job failed, and only returns after every
/// started job has finished. The first failure (an `Err` or a panic) is
/// returned to the caller.
pub trait Executor {
    fn run<F>(&self, workers: usize, job: F) -> Result<()>
    where
        F: Fn(usize) -> Result<()> + Send + Sync;
}

/// Call a job and turn a panic inside it into an error
pub fn run_guarded<F>(worker_id: usize, job: &F) -> Result<()>
where
    F: Fn(usize) -> Result<()>,
{
    catch_unwind(AssertUnwindSafe(|| job(worker_id)))
        .map_err(|panic| anyhow!("worker {} panicked: {}", worker_id, panic_message(&*panic)))?
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// One scoped OS thread per job
#[derive(Debug, Clone, Default)]
pub struct ThreadExecutor;

impl Executor for ThreadExecutor {
    fn run<F>(&self, workers: usize, job: F) -> Result<()>
    where
        F: Fn(usize) -> Result<()> + Send + Sync,
    {
        let job = &job;

        crossbeam::thread::scope(|s| -> Result<()> {
            let mut handles = Vec::with_capacity(workers);
            let mut spawn_error = None;

            for worker_id in 0..workers {
                let spawned = s
                    .builder()
                    .name(format!("parfact-worker-{worker_id}"))
                    .spawn(move |_| run_guarded(worker_id, job));

                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(e) => {
                        spawn_error = Some(anyhow!("failed to spawn worker {}: {}", worker_id, e));
                        break;
                    }
                }
            }

            // Join everything that started before reporting anything
            let mut first_error = spawn_error;
            for handle in handles {
                let outcome = handle
                    .join()
                    .unwrap_or_else(|_| Err(anyhow!("worker thread panicked")));
                if let Err(e) = outcome {
                    first_error.get_or_insert(e);
                }
            }

            match first_error {
                Some(e) => Err(e),
                None => Ok(()),
            }
        })
        .map_err(|_| anyhow!("Thread panic occurred during parallel execution"))?
    }
}

/// Queued tasks served by a pool of worker threads.
///
/// Job indices go through a bounded work channel and outcomes come back on a
/// result channel, so the pool can be narrower than the number of tasks.
#[derive(Debug, Clone)]
pub struct TaskExecutor {
    pool_size: usize,
    long_running: bool,
}

impl TaskExecutor {
    pub fn new(pool_size: usize) -> Self {
        Self {
            pool_size: pool_size.max(1),
            long_running: false,
        }
    }

    /// Give every task a dedicated worker so long partitions cannot starve
    /// the ones still waiting in the queue
    pub fn long_running(mut self, long_running: bool) -> Self {
        self.long_running = long_running;
        self
    }

    /// Number of pool threads used for `tasks` queued jobs
    pub fn pool_width(&self, tasks: usize) -> usize {
        if self.long_running {
            tasks
        } else {
            std::cmp::min(self.pool_size, tasks)
        }
    }
}

impl Default for TaskExecutor {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

impl Executor for TaskExecutor {
    fn run<F>(&self, workers: usize, job: F) -> Result<()>
    where
        F: Fn(usize) -> Result<()> + Send + Sync,
    {
        if workers == 0 {
            return Ok(());
        }

        let pool_width = self.pool_width(workers);
        let (work_tx, work_rx): (Sender<usize>, Receiver<usize>) = bounded(pool_width * 2);
        let (result_tx, result_rx): (Sender<Result<()>>, Receiver<Result<()>>) =
            bounded(pool_width * 2);
        let failed = AtomicBool::new(false);

        let job = &job;
        let failed = &failed;

        crossbeam::thread::scope(|s| -> Result<()> {
            for pool_id in 0..pool_width {
                let work_rx = work_rx.clone();
                let result_tx = result_tx.clone();

                s.builder()
                    .name(format!("parfact-pool-{pool_id}"))
                    .spawn(move |_| {
                        while let Ok(task_id) = work_rx.recv() {
                            // Tasks still queued after a failure are skipped
                            let outcome = if failed.load(Ordering::Acquire) {
                                Ok(())
                            } else {
                                run_guarded(task_id, job)
                            };
                            if outcome.is_err() {
                                failed.store(true, Ordering::Release);
                            }
                            if result_tx.send(outcome).is_err() {
                                break; // Collector dropped
                            }
                        }
                    })
                    .map_err(|e| anyhow!("failed to spawn pool worker {}: {}", pool_id, e))?;
            }

            // Producer thread: queue every task
            let work_tx_clone = work_tx.clone();
            s.spawn(move |_| {
                for task_id in 0..workers {
                    if work_tx_clone.send(task_id).is_err() {
                        break; // Pool dropped
                    }
                }
            });

            // Drop senders so receivers know when work is done
            drop(work_tx);
            drop(result_tx);

            collect_outcomes(result_rx, workers)
        })
        .map_err(|_| anyhow!("Thread panic occurred during task execution"))?
    }
}

fn collect_outcomes(result_rx: Receiver<Result<()>>, total_tasks: usize) -> Result<()> {
    let mut first_error = None;
    let mut tasks_finished = 0;

    while let Ok(outcome) = result_rx.recv() {
        if let Err(e) = outcome {
            first_error.get_or_insert(e);
        }
        tasks_finished += 1;

        if tasks_finished >= total_tasks {
            break;
        }
    }

    match first_error {
        Some(e) => Err(e),
        None if tasks_finished < total_tasks => Err(anyhow!(
            "task pool stopped after {} of {} tasks",
            tasks_finished,
            total_tasks
        )),
        None => Ok(()),
    }
}

/// Structured parallel loop over the job indices on the rayon pool
#[derive(Debug, Clone, Default)]
pub struct ParallelForExecutor;

impl Executor for ParallelForExecutor {
    fn run<F>(&self, workers: usize, job: F) -> Result<()>
    where
        F: Fn(usize) -> Result<()> + Send + Sync,
    {
        (0..workers)
            .into_par_iter()
            .with_max_len(1)
            .try_for_each(|worker_id| run_guarded(worker_id, &job))
    }
}

/// Data-parallel map over the job index range on the rayon pool
#[derive(Debug, Clone, Default)]
pub struct ParallelMapExecutor;

impl Executor for ParallelMapExecutor {
    fn run<F>(&self, workers: usize, job: F) -> Result<()>
    where
        F: Fn(usize) -> Result<()> + Send + Sync,
    {
        (0..workers)
            .into_par_iter()
            .map(|worker_id| run_guarded(worker_id, &job))
            .collect::<Result<Vec<()>>>()
            .map(|_| ())
    }
}

/// Sequential execution in index order, used as a reference executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn run<F>(&self, workers: usize, job: F) -> Result<()>
    where
        F: Fn(usize) -> Result<()> + Send + Sync,
    {
        (0..workers).try_for_each(|worker_id| run_guarded(worker_id, &job))
    }
}

/// Resolve a requested worker count, where 0 means the available parallelism
pub fn resolve_workers(requested: usize) -> usize {
    if requested == 0 {
        num_cpus::get()
    } else {
        requested
    }
}
