use anyhow::Result;
use clap::Args;
use std::time::Instant;

use crate::cli::Output;
use crate::config::ParfactConfig;
use crate::factorial::{ParallelProductReducer, Strategy, validate_argument};

#[derive(Args)]
pub struct ComputeArgs {
    /// Factorial argument
    #[arg(allow_negative_numbers = true)]
    pub n: i64,

    /// Execution strategy (defaults to `default_strategy` from config)
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Worker count, 0 = available parallelism (defaults to `parallel.workers`)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Print only the number of decimal digits of n!
    #[arg(long)]
    pub digits: bool,
}

/// Build the reducer for a run, letting a CLI worker count override the config
pub fn reducer_for(config: &ParfactConfig, workers: Option<usize>) -> ParallelProductReducer {
    let mut settings = config.parallel.clone();
    if let Some(workers) = workers {
        settings.workers = workers;
    }
    ParallelProductReducer::from_settings(&settings)
}

pub fn execute(args: ComputeArgs, config: &ParfactConfig, output: &Output) -> Result<()> {
    let n = validate_argument(args.n)?;
    let strategy = args.strategy.unwrap_or(config.default_strategy);
    let reducer = reducer_for(config, args.workers);

    output.verbose(&format!(
        "Computing {}! with the {} strategy (workers: {})",
        n,
        strategy,
        reducer.workers()
    ));

    let start = Instant::now();
    let result = strategy.compute_with(n, &reducer)?;
    let elapsed = start.elapsed();

    let rendered = result.to_string();
    if args.digits {
        output.value(&rendered.len().to_string());
    } else {
        output.value(&rendered);
    }

    output.verbose(&format!(
        "{}! has {} digits, computed in {:.3}s",
        n,
        rendered.len(),
        elapsed.as_secs_f64()
    ));
    Ok(())
}
