use crate::config::Config;
use anyhow::{bail, Result};

pub fn validate_config(config: &Config) -> Result<()> {
    if config.core.extension.is_empty() || !config.core.extension.starts_with('.') {
        bail!(
            "Invalid config field 'core.extension': must be a non-empty suffix starting with '.' (got {:?})",
            config.core.extension
        );
    }

    if config.core.ignore.iter().any(|p| p.is_empty()) {
        bail!("Invalid config field 'core.ignore': empty patterns match every path");
    }

    for (id, rule) in &config.rules {
        if let Some(pattern) = &rule.pattern {
            if pattern.is_empty() {
                bail!("Rule '{}' has empty pattern", id);
            }
            if pattern.len() > 1024 {
                bail!(
                    "Rule '{}' has a pattern exceeding the maximum length of 1024 characters (current: {})",
                    id,
                    pattern.len()
                );
            }
            if let Err(e) = regex::Regex::new(pattern) {
                bail!("Rule '{}' has invalid regex: {}", id, e);
            }
        }
    }

    Ok(())
}
