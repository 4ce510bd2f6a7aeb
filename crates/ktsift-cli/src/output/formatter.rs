use colored::*;
use ktsift_core::{Category, ScanReport};

/// Default text rendering: one line per category, fixed order.
///
/// The list is the Debug rendering of the name vector, so an empty category
/// prints as `[]` and nothing else ever reaches stdout.
pub fn print_report(report: &ScanReport) {
    for category in Category::ALL {
        println!("{}: {:?}", category.label().cyan(), report.files(category));
    }
}
