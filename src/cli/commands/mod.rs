use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cli::Output;
use crate::config::ParfactConfig;

pub mod compare;
pub mod compute;
pub mod config;

#[derive(Parser)]
#[command(
    name = "parfact",
    version = env!("CARGO_PKG_VERSION"),
    about = "Arbitrary-precision factorials by parallel product reduction",
    long_about = "parfact computes n! exactly, either sequentially or by splitting [1, n] into \
                  interleaved partitions multiplied on concurrent workers."
)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute n! with one strategy
    Compute(compute::ComputeArgs),
    /// Run every strategy on the same n and check they agree
    Compare(compare::CompareArgs),
    /// Show the effective configuration
    Config(config::ConfigArgs),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // Set up logging based on verbosity
        setup_logging(self.verbose, self.quiet);

        let config = ParfactConfig::load_with_custom_config(self.config.as_deref())?;
        let output = Output::new(self.verbose > 0, self.quiet);

        match self.command {
            Commands::Compute(args) => compute::execute(args, &config, &output),
            Commands::Compare(args) => compare::execute(args, &config, &output),
            Commands::Config(args) => config::execute(args, &config, &output),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"), // -vvv includes per-worker events
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
