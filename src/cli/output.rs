//! Output helpers for the parfact CLI
//!
//! Result values are written to stdout unstyled so they can be piped. Report
//! lines (headers, tables, strategy summaries) also go to stdout, styled with
//! `console`; confirmations and verbose notes go to stderr. `--quiet` keeps
//! only result values and errors.

use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a result value on stdout, regardless of quiet mode
    pub fn value(&self, value: &str) {
        println!("{}", value);
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("✔").green(), message);
        }
    }

    /// Only shown with -v
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            eprintln!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn table_row(&self, key: &str, value: &str) {
        if self.quiet {
            return;
        }
        println!("  {:<24} {}", style(key).dim(), value);
    }

    /// Print a strategy outcome line for `compare`
    pub fn task_summary(&self, name: &str, detail: &str, success: bool) {
        if self.quiet {
            return;
        }
        let icon = if success {
            style("✔").green().bold()
        } else {
            style("✖").red().bold()
        };
        println!("{} {:<14} {}", icon, name, detail);
    }
}
