//! Rule registry: every built-in rule, configured or with defaults.

use hungarian_lint_core::{Config, ConfigError, RuleBox};
use tracing::debug;

use crate::hungarian_notation::{self, HungarianNotation};

/// Returns all available rules with default options.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(HungarianNotation::new())]
}

/// Builds the enabled rules from a configuration.
///
/// # Errors
///
/// Returns an error if a rule's options are invalid.
pub fn rules_from_config(config: &Config) -> Result<Vec<RuleBox>, ConfigError> {
    let mut rules: Vec<RuleBox> = Vec::new();

    if config.is_rule_enabled(hungarian_notation::NAME) {
        rules.push(Box::new(HungarianNotation::from_config(config)?));
    } else {
        debug!(rule = hungarian_notation::NAME, "rule disabled by configuration");
    }

    Ok(rules)
}
