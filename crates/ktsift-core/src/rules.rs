use crate::model::{Category, Matcher, Rule};
use ktsift_config::Config;
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

static DEFAULT_RULES: OnceLock<Vec<Rule>> = OnceLock::new();

/// The builtin rule set, one rule per category.
///
/// These are deliberately heuristic text matches over raw source, not parsed
/// declarations. A `data class` inside a comment counts; that is the
/// contract.
pub fn default_rules() -> Vec<Rule> {
    DEFAULT_RULES
        .get_or_init(|| {
            vec![
                Rule {
                    id: "kotlin.data_class".to_string(),
                    category: Category::DataClasses,
                    matcher: Matcher::Substring("data class ".to_string()),
                    description: "Kotlin data class declaration".to_string(),
                },
                Rule {
                    id: "kotlin.viewmodel".to_string(),
                    category: Category::Viewmodels,
                    matcher: Matcher::Pattern(
                        Regex::new(r"class\s+\w+ViewModel").expect("Valid Regex"),
                    ),
                    description: "Class declaration with a ViewModel-suffixed name".to_string(),
                },
                Rule {
                    id: "compose.composable".to_string(),
                    category: Category::Screens,
                    matcher: Matcher::Substring("@Composable".to_string()),
                    description: "Jetpack Compose @Composable annotation".to_string(),
                },
            ]
        })
        .clone()
}

/// Builtin rules with config overrides applied.
///
/// `enabled = false` removes a rule; a `pattern` override replaces its
/// matcher with a regex compiled from the config string. Rule order (and so
/// report order) never changes. Unknown rule ids and patterns that fail to
/// compile are warned about and skipped; `validate_config` rejects bad
/// patterns up front, so the compile branch here is a backstop.
pub fn effective_rules(config: &Config) -> Vec<Rule> {
    let mut rules = default_rules();

    for (id, rule_conf) in &config.rules {
        let Some(rule) = rules.iter_mut().find(|r| &r.id == id) else {
            warn!(rule = %id, "config references unknown rule id, ignoring");
            continue;
        };
        if let Some(pattern) = &rule_conf.pattern {
            match Regex::new(pattern) {
                Ok(re) => rule.matcher = Matcher::Pattern(re),
                Err(e) => warn!(rule = %id, "invalid pattern override, keeping builtin: {e}"),
            }
        }
        if let Some(desc) = &rule_conf.description {
            rule.description = desc.clone();
        }
    }

    rules.retain(|r| {
        config
            .rules
            .get(&r.id)
            .map(|c| c.enabled)
            .unwrap_or(true)
    });

    rules
}
