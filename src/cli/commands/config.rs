use anyhow::Result;
use clap::Args;

use crate::cli::Output;
use crate::config::ParfactConfig;
use crate::parallel::resolve_workers;

#[derive(Args, Default)]
pub struct ConfigArgs {}

pub fn execute(_args: ConfigArgs, config: &ParfactConfig, output: &Output) -> Result<()> {
    let parallel = &config.parallel;

    output.header("Effective configuration");
    output.table_row("default_strategy", config.default_strategy.name());
    output.table_row(
        "parallel.workers",
        &format!("{} (resolves to {})", parallel.workers, resolve_workers(parallel.workers)),
    );
    output.table_row(
        "parallel.max_workers",
        &if parallel.max_workers == 0 {
            "unlimited".to_string()
        } else {
            parallel.max_workers.to_string()
        },
    );
    output.table_row(
        "parallel.long_running_threshold",
        &parallel.long_running_threshold.to_string(),
    );
    Ok(())
}
