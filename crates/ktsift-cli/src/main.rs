mod cli;
mod commands;
mod config_loader;
mod formatters;
mod output;

use clap::Parser;
use cli::{Cli, Commands, RulesCommand};
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr; stdout is reserved for the report.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match &cli.command {
        Some(Commands::Scan {
            root,
            format,
            extension,
        }) => commands::scan::scan(
            root.as_ref(),
            cli.config.as_ref(),
            format.as_deref(),
            extension.as_deref(),
            cli.quiet,
        ),
        Some(Commands::Rules(cmd)) => match cmd {
            RulesCommand::List => commands::rules::list(cli.config.as_ref()),
            RulesCommand::Explain { rule_id } => commands::rules::explain(cli.config.as_ref(), rule_id),
        },
        None => {
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            exit(0);
        }
    };

    match result {
        Ok(()) => exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(2);
        }
    }
}
