//! Rule requiring Hungarian-notation-style names for declarations.
//!
//! # Accepted Names
//!
//! - A type prefix followed by humps: `oConfig`, `sName`, `fnDone`, `$Root`
//! - `UPPER_SNAKE_CASE` constants
//! - PascalCase, for parameters of function declarations and expressions
//! - Built-in names (`resolve`, `reject`, `sap`, `jQuery`), any single
//!   lowercase letter, and configured `ignore` entries
//!
//! # Modes
//!
//! `construct` (default) visits variable declarations and functions and
//! checks the names each introduces. Arrow-function parameters are held to
//! the variable rules. `identifier` visits every identifier and checks the
//! ones in binding positions against a single rule set.
//!
//! # Configuration
//!
//! - `ignore`: names that always pass (unique, matched literally)
//! - `only_declarations`: skip parameters of function expressions and
//!   arrow functions (and, in `identifier` mode, every non-declaration
//!   binding)
//! - `mode`: `construct` or `identifier`

pub mod classifier;
pub mod identifier;
pub mod patterns;
pub mod report;

use std::collections::HashSet;

use hungarian_lint_core::estree::walk;
use hungarian_lint_core::{Config, ConfigError, FileContext, Node, Program, Rule, Severity, Violation};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use classifier::Candidate;
use patterns::{AllowList, RuleSets};
use report::Reporter;

/// Rule code for hungarian-notation.
pub const CODE: &str = "HN001";

/// Rule name for hungarian-notation.
pub const NAME: &str = "hungarian-notation";

/// Extracts candidates from one visited node.
type Handler = for<'a> fn(Node<'a>, &[Node<'a>]) -> Vec<Candidate<'a>>;

const CONSTRUCT_LISTENERS: &[(&str, Handler)] = &[
    ("VariableDeclaration", on_construct),
    ("FunctionDeclaration", on_construct),
    ("FunctionExpression", on_construct),
    ("ArrowFunctionExpression", on_construct),
];

const DECLARATION_LISTENERS: &[(&str, Handler)] = &[
    ("VariableDeclaration", on_construct),
    ("FunctionDeclaration", on_construct),
];

const IDENTIFIER_LISTENERS: &[(&str, Handler)] = &[("Identifier", on_identifier)];

const DECLARED_IDENTIFIER_LISTENERS: &[(&str, Handler)] = &[("Identifier", on_declared_identifier)];

fn on_construct<'a>(node: Node<'a>, _ancestors: &[Node<'a>]) -> Vec<Candidate<'a>> {
    classifier::classify(node)
}

fn on_identifier<'a>(node: Node<'a>, ancestors: &[Node<'a>]) -> Vec<Candidate<'a>> {
    identifier::identifier_candidates(node, ancestors)
}

fn on_declared_identifier<'a>(node: Node<'a>, ancestors: &[Node<'a>]) -> Vec<Candidate<'a>> {
    identifier::declared_identifier_candidates(node, ancestors)
}

/// How the rule finds the names it checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Dispatch on declaration and function nodes.
    #[default]
    Construct,
    /// Visit every identifier and judge it by its position.
    Identifier,
}

impl Mode {
    /// Returns the configuration spelling of this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Construct => "construct",
            Self::Identifier => "identifier",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options read from `[rules.hungarian-notation]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HungarianNotationOptions {
    /// Names that always pass.
    pub ignore: Vec<String>,
    /// Only check names in declaration positions.
    #[serde(alias = "onlyDeclarations")]
    pub only_declarations: bool,
    /// Traversal mode.
    pub mode: Mode,
}

impl HungarianNotationOptions {
    /// Checks the options the way a schema would.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] if `ignore` lists a name twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        match self.ignore.iter().find(|name| !seen.insert(name.as_str())) {
            Some(duplicate) => Err(ConfigError::InvalidOption {
                rule: NAME.to_string(),
                message: format!("`ignore` lists `{duplicate}` more than once"),
            }),
            None => Ok(()),
        }
    }
}

/// Requires Hungarian-notation-style names.
#[derive(Debug, Clone)]
pub struct HungarianNotation {
    mode: Mode,
    only_declarations: bool,
    severity: Severity,
    rule_sets: RuleSets,
}

impl Default for HungarianNotation {
    fn default() -> Self {
        Self::new()
    }
}

impl HungarianNotation {
    /// Creates the rule with default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::Construct,
            only_declarations: false,
            severity: Severity::Warning,
            rule_sets: RuleSets::default(),
        }
    }

    /// Creates the rule from already validated options.
    #[must_use]
    pub fn with_options(options: &HungarianNotationOptions) -> Self {
        Self::new()
            .mode(options.mode)
            .only_declarations(options.only_declarations)
            .ignore(options.ignore.iter().cloned())
    }

    /// Creates the rule from the `[rules.hungarian-notation]` section.
    ///
    /// # Errors
    ///
    /// Returns an error if an option has the wrong type, is unknown, or
    /// `ignore` contains duplicates.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let options = match config.rules.get(NAME) {
            Some(rule_config) => rule_config.deserialize_options::<HungarianNotationOptions>(NAME)?,
            None => HungarianNotationOptions::default(),
        };
        options.validate()?;

        let mut rule = Self::with_options(&options);
        if let Some(severity) = config.rule_severity(NAME) {
            rule = rule.severity(severity);
        }
        Ok(rule)
    }

    /// Sets the traversal mode.
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Restricts checks to declaration positions.
    #[must_use]
    pub fn only_declarations(mut self, only: bool) -> Self {
        self.only_declarations = only;
        self
    }

    /// Replaces the configured `ignore` names and rebuilds the rule sets.
    #[must_use]
    pub fn ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule_sets = RuleSets::new(AllowList::new(names));
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the rule sets names are checked against.
    #[must_use]
    pub fn rule_sets(&self) -> &RuleSets {
        &self.rule_sets
    }

    fn listeners(&self) -> &'static [(&'static str, Handler)] {
        match (self.mode, self.only_declarations) {
            (Mode::Construct, false) => CONSTRUCT_LISTENERS,
            (Mode::Construct, true) => DECLARATION_LISTENERS,
            (Mode::Identifier, false) => IDENTIFIER_LISTENERS,
            (Mode::Identifier, true) => DECLARED_IDENTIFIER_LISTENERS,
        }
    }
}

impl Rule for HungarianNotation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires variables and parameters to be named after hungarian notation"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, program: &Program) -> Vec<Violation> {
        let listeners = self.listeners();
        let mut reporter = Reporter::new(ctx, self.severity);

        walk(program.root(), |node, ancestors| {
            let Some((_, handler)) = listeners.iter().find(|(kind, _)| node.is(kind)) else {
                return;
            };

            for candidate in handler(node, ancestors) {
                match self.rule_sets.get(candidate.rules).first_match(candidate.name) {
                    Some(pattern) => trace!(
                        name = candidate.name,
                        kind = %candidate.kind,
                        %pattern,
                        "name accepted"
                    ),
                    None => reporter.report(&candidate),
                }
            }
        });

        debug!(
            file = %ctx.relative_path.display(),
            mode = %self.mode,
            violations = reporter.count(),
            "checked names"
        );
        reporter.finish()
    }
}
