//! CLI command handlers.
//!
//! Testable handlers invoked by `main.rs`. Each returns the process exit
//! code; the caller is responsible for `std::process::exit`.

mod compare;
mod flatten;
mod rename;
mod search;
mod tree;

pub use compare::run_compare;
pub use flatten::run_flatten;
pub use rename::run_rename;
pub use search::run_search;
pub use tree::run_tree;

use anyhow::Context;
use std::io::Write as _;
use std::path::Path;

/// Process exit codes shared by all commands.
pub mod exit_codes {
    /// Success / no differences
    pub const SUCCESS: i32 = 0;
    /// Differences detected, or no search matches
    pub const DIFFERENCES: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Write rendered output to a file, or to stdout when no path is given.
fn emit(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("failed to write output to {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            Ok(())
        }
    }
}
