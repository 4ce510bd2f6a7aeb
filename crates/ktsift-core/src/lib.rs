pub mod error;
pub mod model;
pub mod rules;
pub mod scanner;

pub use error::ScanError;
pub use model::{Category, Matcher, Rule};
pub use rules::{default_rules, effective_rules};
pub use scanner::result::ScanReport;
pub use scanner::{classify, scan_path};
