use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ktsift")]
#[command(about = "Classify Kotlin source files by declaration patterns", long_about = None)]
pub struct Cli {
    /// Path to config file (default: ./ktsift.toml)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress the scan summary on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory tree and report categorized files
    Scan {
        /// Root directory to scan (falls back to core.root, then ".")
        root: Option<PathBuf>,
        /// Output format (text, json); defaults to output.format from config
        #[arg(long)]
        format: Option<String>,
        /// File suffix to scan instead of the configured one (e.g. ".kts")
        #[arg(long)]
        extension: Option<String>,
    },
    /// Inspect the classification rules
    #[command(subcommand)]
    Rules(RulesCommand),
}

#[derive(Subcommand)]
pub enum RulesCommand {
    /// List all active rules
    List,
    /// Show one rule in detail
    Explain {
        /// Rule id (e.g. kotlin.data_class)
        rule_id: String,
    },
}
