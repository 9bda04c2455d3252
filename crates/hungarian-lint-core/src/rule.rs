//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::estree::Program;
use crate::types::{Severity, Violation};

/// A per-file lint rule over an ESTree syntax tree.
///
/// Rules are constructed once from configuration and then shared across
/// every file of a run, so `check` takes `&self` and must not keep
/// per-file state in the rule itself.
///
/// # Example
///
/// ```ignore
/// use hungarian_lint_core::{estree, FileContext, Program, Rule, Severity, Violation};
///
/// pub struct NoDebugger;
///
/// impl Rule for NoDebugger {
///     fn name(&self) -> &'static str { "no-debugger" }
///     fn code(&self) -> &'static str { "HN900" }
///
///     fn check(&self, ctx: &FileContext, program: &Program) -> Vec<Violation> {
///         let mut violations = Vec::new();
///         estree::walk(program.root(), |node, _| {
///             if node.is("DebuggerStatement") {
///                 violations.push(Violation::new(
///                     self.code(),
///                     self.name(),
///                     self.default_severity(),
///                     ctx.location(&node),
///                     "debugger statement",
///                 ));
///             }
///         });
///         violations
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "hungarian-notation").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "HN001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single tree and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `program` - The syntax tree of the file
    ///
    /// # Returns
    ///
    /// A vector of violations found in this file.
    fn check(&self, ctx: &FileContext, program: &Program) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;
    use std::path::Path;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &FileContext, _program: &Program) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                self.default_severity(),
                Location::new(ctx.relative_path.clone(), 1, 1),
                "Test violation",
            )]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
    }

    #[test]
    fn test_boxed_rule_checks() {
        let rule: RuleBox = Box::new(TestRule);
        let program = Program::parse(r#"{"type": "Program", "body": []}"#).unwrap();
        let ctx = FileContext::new(Path::new("/repo/a.estree.json"), Path::new("/repo"));
        let violations = rule.check(&ctx, &program);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.file, Path::new("a.estree.json"));
    }
}
