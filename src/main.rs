use anyhow::Result;
use clap::Parser;

use parfact::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
