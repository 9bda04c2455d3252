//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# hungarian-lint configuration

# Severity at which `hungarian-lint check` exits with status 1
# fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./build/ast"

# ESTree JSON files to check
include = ["**/*.estree.json"]

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
]

# Respect .gitignore files
respect_gitignore = true

[rules.hungarian-notation]
enabled = true
# severity = "error"  # Override default severity (warning)

# "construct" checks declarations and function parameters,
# "identifier" checks every identifier in a binding position
mode = "construct"

# Names that always pass, besides resolve, reject, sap, jQuery and single letters
ignore = []

# Skip parameters of function expressions and arrow functions
only_declarations = false
"#;

/// File written by `init`.
const CONFIG_FILE: &str = "hungarian-lint.toml";

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure the rule");
    println!("  2. Run: hungarian-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hungarian_lint_core::Config;
    use hungarian_lint_rules::HungarianNotation;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert!(config.is_rule_enabled("hungarian-notation"));
        assert!(HungarianNotation::from_config(&config).is_ok());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
