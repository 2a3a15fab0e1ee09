use anyhow::{Result, bail};
use clap::Args;
use std::time::Instant;

use super::compute::reducer_for;
use crate::cli::Output;
use crate::config::ParfactConfig;
use crate::factorial::{Strategy, validate_argument};

#[derive(Args)]
pub struct CompareArgs {
    /// Factorial argument
    #[arg(allow_negative_numbers = true)]
    pub n: i64,

    /// Worker count, 0 = available parallelism (defaults to `parallel.workers`)
    #[arg(short, long)]
    pub workers: Option<usize>,
}

pub fn execute(args: CompareArgs, config: &ParfactConfig, output: &Output) -> Result<()> {
    let n = validate_argument(args.n)?;
    let reducer = reducer_for(config, args.workers);

    output.header(&format!("{}! across {} strategies", n, Strategy::ALL.len()));

    let mut baseline = None;
    let mut mismatches = Vec::new();

    for strategy in Strategy::ALL {
        let start = Instant::now();
        let result = strategy.compute_with(n, &reducer)?;
        let elapsed = start.elapsed();

        // Strategy::ALL starts with the sequential baseline
        let reference = baseline.get_or_insert_with(|| result.clone());
        let agrees = *reference == result;
        if !agrees {
            mismatches.push(strategy);
        }

        output.task_summary(
            strategy.name(),
            &format!("{:>10.3} ms", elapsed.as_secs_f64() * 1000.0),
            agrees,
        );
    }

    if !mismatches.is_empty() {
        let names: Vec<&str> = mismatches.iter().map(Strategy::name).collect();
        bail!("strategies disagree with the sequential result: {}", names.join(", "));
    }

    if let Some(value) = baseline {
        output.success(&format!(
            "All strategies agree ({} digits)",
            value.to_string().len()
        ));
    }
    Ok(())
}
