use anyhow::Result;
use ktsift_core::ScanReport;
use serde::Serialize;

pub mod json;

pub use json::JsonFormatter;

#[derive(Serialize)]
pub struct Summary {
    pub total_files: usize,
    pub scanned_files: usize,
    pub skipped_files: usize,
    pub matched_files: usize,
    pub duration_ms: u128,
}

impl Summary {
    pub fn new(report: &ScanReport, duration: std::time::Duration) -> Self {
        Self {
            total_files: report.total_files,
            scanned_files: report.scanned_files,
            skipped_files: report.skipped_files,
            matched_files: report.matched_files(),
            duration_ms: duration.as_millis(),
        }
    }
}

pub trait Formatter {
    fn print(&self, report: &ScanReport, summary: &Summary) -> Result<()>;
}
