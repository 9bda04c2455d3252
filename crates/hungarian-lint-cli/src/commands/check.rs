//! Check command implementation.

use anyhow::{Context, Result};
use hungarian_lint_core::{Analyzer, Config, LintResult};
use hungarian_lint_rules::hungarian_notation::NAME;
use hungarian_lint_rules::{rules_from_config, Mode};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Rule options given on the command line.
#[derive(Debug, Clone, Default)]
pub struct RuleOverrides {
    /// Extra names that always pass.
    pub ignore: Vec<String>,
    /// Force declaration-only checks.
    pub only_declarations: bool,
    /// Traversal mode, if overridden.
    pub mode: Option<Mode>,
}

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    overrides: &RuleOverrides,
    source: &ConfigSource,
) -> Result<()> {
    let mut config = load_config(source)?;
    apply_overrides(&mut config, overrides);
    let threshold = config.fail_threshold();

    let result = analyze(path, exclude, config)?;

    super::output::print(&result, format)?;

    if result.has_violations_at(threshold) {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads the resolved configuration, or defaults when none was found.
pub fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

/// Writes command-line rule options into the rule's config section.
///
/// `--ignore` names are appended to the configured list; the other flags
/// replace the configured values.
pub fn apply_overrides(config: &mut Config, overrides: &RuleOverrides) {
    let rule = config.rules.entry(NAME.to_string()).or_default();

    // A malformed `ignore` is left alone so rule construction rejects it.
    let configured_ignore: Option<Vec<String>> = if rule.options.contains_key("ignore") {
        rule.get_option("ignore")
    } else {
        Some(Vec::new())
    };

    if !overrides.ignore.is_empty() {
        if let Some(mut names) = configured_ignore {
            for name in &overrides.ignore {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
            rule.options.insert(
                "ignore".to_string(),
                toml::Value::Array(names.into_iter().map(toml::Value::String).collect()),
            );
        }
    }

    if overrides.only_declarations {
        rule.options.remove("onlyDeclarations");
        rule.options
            .insert("only_declarations".to_string(), toml::Value::Boolean(true));
    }

    if let Some(mode) = overrides.mode {
        rule.options
            .insert("mode".to_string(), toml::Value::String(mode.as_str().to_string()));
    }
}

/// Builds the analyzer for `path` and runs it.
pub fn analyze(path: &Path, exclude: Vec<String>, config: Config) -> Result<LintResult> {
    let rules = rules_from_config(&config).context("Invalid rule configuration")?;

    let mut builder = Analyzer::builder().root(path).config(config);

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    analyzer.analyze().context("Analysis failed")
}
