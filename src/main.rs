//! bom-merge: hierarchical BOM editing and revision comparison tool.

use anyhow::Result;
use bom_merge::{
    cli::{self, exit_codes},
    config::{AppConfig, BehaviorConfig, OutputConfig, SlotConfig},
    reports::ReportFormat,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nTable format:",
        "\n  JSON array of rows keyed LVL, PARENT, PREFIX, ITM, ITM_DESC,",
        "\n  QTY, UOM, SRC, PROC, THREAD (optional trailing APE)",
        "\n\nOutput Formats:",
        "\n  table, summary, json"
    )
}

#[derive(Parser)]
#[command(name = "bom-merge")]
#[command(version, long_version = build_long_version())]
#[command(about = "Hierarchical BOM editing and revision comparison tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No differences detected
    1  Differences detected / no search matches
    3  Error occurred

EXAMPLES:
    # Show a table as a part hierarchy
    bom-merge tree bom.json

    # Engineering change: rename a part, bump enclosing revision letters
    bom-merge rename bom.json 161-00345A 161-00345B -o bom-new.json

    # Compare two revisions side by side
    bom-merge compare bom-old.json bom-new.json

    # CI check: fail when the new revision grew
    bom-merge compare bom-old.json bom-new.json --format summary")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a table into a tree and print the hierarchy
    Tree {
        /// Flat table file (JSON)
        input: PathBuf,
    },

    /// Normalize a table through the tree form (recompute levels/parents)
    Flatten {
        /// Flat table file (JSON)
        input: PathBuf,
        /// Write the normalized table here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format for stdout rendering
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,
    },

    /// Rename matching parts and propagate the revision bump upward
    Rename {
        /// Flat table file (JSON)
        input: PathBuf,
        /// Identifier to rename (all occurrences)
        old_name: String,
        /// Replacement identifier
        new_name: String,
        /// Write the resulting table here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format for stdout rendering
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,
    },

    /// Find parts by substring across identifier and all fields
    Search {
        /// Flat table file (JSON)
        input: PathBuf,
        /// Case-sensitive search term
        term: String,
    },

    /// Compare an old and a new revision table
    Compare {
        /// Older revision table (JSON)
        old: PathBuf,
        /// Newer revision table (JSON)
        new: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Slot name for the older revision
        #[arg(long, default_value = "old")]
        old_slot: String,
        /// Slot name for the newer revision
        #[arg(long, default_value = "new")]
        new_slot: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Tree { input } => cli::run_tree(&input),
        Commands::Flatten {
            input,
            output,
            format,
        } => cli::run_flatten(&input, output.as_deref(), format),
        Commands::Rename {
            input,
            old_name,
            new_name,
            output,
            format,
        } => cli::run_rename(&input, &old_name, &new_name, output.as_deref(), format),
        Commands::Search { input, term } => cli::run_search(&input, &term),
        Commands::Compare {
            old,
            new,
            format,
            output,
            old_slot,
            new_slot,
        } => {
            let config = AppConfig {
                slots: SlotConfig {
                    old: old_slot,
                    new: new_slot,
                },
                output: OutputConfig {
                    format,
                    file: output,
                },
                behavior: BehaviorConfig { quiet: cli.quiet },
            };
            cli::run_compare(&old, &new, &config)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}
