use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tndr` binary.
#[derive(Debug, Parser)]
#[command(name = "tndr", version, about = "Tender and bid procurement workflow")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Page size for list commands (0-50)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file, overriding `database.path` and any remote URL
    #[arg(long, global = true)]
    pub database: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            database: self.database.clone(),
        }
    }
}
