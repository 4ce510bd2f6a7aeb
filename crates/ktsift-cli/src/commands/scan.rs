use crate::formatters::{Formatter, JsonFormatter, Summary};
use crate::output::formatter::print_report;
use anyhow::Result;
use ktsift_config::{validate_config, OutputFormat};
use ktsift_core::{effective_rules, scan_path};
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

pub fn scan(
    root_arg: Option<&PathBuf>,
    config_path: Option<&PathBuf>,
    format_arg: Option<&str>,
    extension_arg: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let mut config = crate::config_loader::load_effective_config(config_path)?;

    // CLI overrides beat every config layer.
    if let Some(ext) = extension_arg {
        config.core.extension = ext.to_string();
        validate_config(&config)?;
    }
    let format = match format_arg {
        Some(arg) => match arg.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "text" => OutputFormat::Text,
            other => anyhow::bail!("Unknown format: {} (expected text or json)", other),
        },
        None => config.output.format.unwrap_or_default(),
    };

    let root = root_arg
        .cloned()
        .or_else(|| config.core.root.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    debug!(root = %root.display(), extension = %config.core.extension, "starting scan");

    let rules = effective_rules(&config);

    let start_time = Instant::now();
    let report = scan_path(&root, &rules, &config)?;
    let summary = Summary::new(&report, start_time.elapsed());

    match format {
        OutputFormat::Text => print_report(&report),
        OutputFormat::Json => JsonFormatter.print(&report, &summary)?,
    }

    if config.output.show_summary && !quiet {
        eprintln!(
            "Scanned {} of {} files in {}ms ({} skipped, {} matches)",
            summary.scanned_files,
            summary.total_files,
            summary.duration_ms,
            summary.skipped_files,
            summary.matched_files
        );
    }

    Ok(())
}
