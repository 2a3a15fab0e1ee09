//! Command-line interface for parfact
//!
//! A thin clap wrapper around the library: it loads configuration, picks a
//! strategy and prints results.

pub mod commands;
pub mod output;

pub use commands::Cli;
pub use output::Output;
