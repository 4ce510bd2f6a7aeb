use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CoreConfig {
    /// Scan root used when the CLI argument is omitted.
    pub root: Option<PathBuf>,
    /// File name suffix a file must carry to be read.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Substring path ignores; a path containing any entry is skipped.
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            root: None,
            extension: default_extension(),
            ignore: Vec::new(),
        }
    }
}

fn default_extension() -> String {
    ".kt".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,
    /// Summary line on stderr after a scan. Never touches stdout.
    #[serde(default = "default_true")]
    pub show_summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            show_summary: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RuleConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub pattern: Option<String>,
    pub description: Option<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pattern: None,
            description: None,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Layered merge: scalars from `other` win when set, lists append, rule
    /// entries override or insert.
    pub fn merge(&mut self, other: Config) {
        if let Some(root) = other.core.root {
            self.core.root = Some(root);
        }
        if other.core.extension != default_extension() {
            self.core.extension = other.core.extension;
        }
        self.core.ignore.extend(other.core.ignore);

        if let Some(format) = other.output.format {
            self.output.format = Some(format);
        }
        if !other.output.show_summary {
            self.output.show_summary = false;
        }

        for (id, rule) in other.rules {
            self.rules.insert(id, rule);
        }
    }
}
