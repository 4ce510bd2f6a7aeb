pub mod result;

use crate::error::ScanError;
use crate::model::{Category, Rule};
use ignore::WalkBuilder;
use ktsift_config::Config;
use result::ScanReport;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Walk `root` and classify every file carrying the configured extension.
///
/// The walk is sequential and depth-first; every file under the root is a
/// candidate (standard hidden/gitignore filters are disabled so traversal
/// order is the only thing the filesystem decides). Files whose name does not
/// end with the extension, and paths containing a configured ignore pattern,
/// are skipped without being opened. A read failure on any candidate file
/// aborts the scan.
pub fn scan_path(root: &Path, rules: &[Rule], config: &Config) -> Result<ScanReport, ScanError> {
    let meta = fs::metadata(root).map_err(|source| ScanError::Path {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(ScanError::Path {
            path: root.to_path_buf(),
            source: std::io::Error::other("not a directory"),
        });
    }

    let extension = config.core.extension.as_str();
    let ignore_patterns = &config.core.ignore;

    let mut report = ScanReport::default();

    // Hidden files and gitignored files are classification candidates too.
    let walker = WalkBuilder::new(root).standard_filters(false).build();
    for entry in walker {
        let entry = entry.map_err(|e| ScanError::Path {
            path: root.to_path_buf(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk error")),
        })?;
        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }
        let path = entry.path();
        report.total_files += 1;

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            report.skipped_files += 1;
            continue;
        };
        if !name.ends_with(extension) {
            report.skipped_files += 1;
            continue;
        }
        let path_str = path.to_string_lossy();
        if ignore_patterns.iter().any(|p| path_str.contains(p)) {
            debug!(path = %path_str, "skipping ignored path");
            report.skipped_files += 1;
            continue;
        }

        let bytes = fs::read(path).map_err(|source| ScanError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        // Lossy decode: malformed sequences are replaced, never fatal.
        let text = String::from_utf8_lossy(&bytes);
        report.scanned_files += 1;

        for category in classify(&text, rules) {
            report.push(category, name.to_string());
        }
    }

    Ok(report)
}

/// Classify one file's text against the rule set.
///
/// Rules are evaluated independently and are non-exclusive; the returned
/// categories follow rule order, with at most one entry per rule.
pub fn classify(content: &str, rules: &[Rule]) -> Vec<Category> {
    rules
        .iter()
        .filter(|rule| rule.is_match(content))
        .map(|rule| rule.category)
        .collect()
}
