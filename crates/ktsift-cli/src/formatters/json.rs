use crate::formatters::{Formatter, Summary};
use anyhow::Result;
use ktsift_core::ScanReport;
use serde::Serialize;

pub struct JsonFormatter;

const SCHEMA_VERSION: &str = "ktsift-v1";

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(rename = "schemaVersion")]
    schema_version: &'a str,
    summary: &'a Summary,
    categories: Categories<'a>,
}

#[derive(Serialize)]
struct Categories<'a> {
    #[serde(rename = "DATA_CLASSES")]
    data_classes: &'a [String],
    #[serde(rename = "VIEWMODELS")]
    viewmodels: &'a [String],
    #[serde(rename = "SCREENS")]
    screens: &'a [String],
}

impl Formatter for JsonFormatter {
    fn print(&self, report: &ScanReport, summary: &Summary) -> Result<()> {
        let json_report = JsonReport {
            schema_version: SCHEMA_VERSION,
            summary,
            categories: Categories {
                data_classes: &report.data_classes,
                viewmodels: &report.viewmodels,
                screens: &report.screens,
            },
        };
        let json = serde_json::to_string_pretty(&json_report)?;
        println!("{}", json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_with_fixed_labels() {
        let mut report = ScanReport::default();
        report.data_classes.push("A.kt".to_string());
        report.scanned_files = 1;
        report.total_files = 1;
        let summary = Summary::new(&report, std::time::Duration::from_millis(3));

        let json_report = JsonReport {
            schema_version: SCHEMA_VERSION,
            summary: &summary,
            categories: Categories {
                data_classes: &report.data_classes,
                viewmodels: &report.viewmodels,
                screens: &report.screens,
            },
        };
        let value = serde_json::to_value(&json_report).unwrap();

        assert_eq!(value["schemaVersion"], "ktsift-v1");
        assert_eq!(value["categories"]["DATA_CLASSES"][0], "A.kt");
        assert_eq!(value["categories"]["VIEWMODELS"].as_array().unwrap().len(), 0);
        assert_eq!(value["summary"]["scanned_files"], 1);
    }
}
