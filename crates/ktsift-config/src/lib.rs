pub mod config;
pub mod loader;
pub mod validate;

pub use config::{Config, CoreConfig, OutputConfig, OutputFormat, RuleConfig};
pub use loader::load_config;
pub use validate::validate_config;
