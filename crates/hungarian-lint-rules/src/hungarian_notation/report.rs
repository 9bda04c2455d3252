//! Turns rejected candidates into violations.

use hungarian_lint_core::{FileContext, Label, Severity, Suggestion, Violation};

use super::classifier::{Candidate, ConstructKind};
use super::{CODE, NAME};

/// Fixed part of every diagnostic message.
pub const MESSAGE: &str = "Variable not named after hungarian notation";

/// Renders the message for a rejected name.
#[must_use]
pub fn message(name: &str, kind: ConstructKind) -> String {
    format!("'{name}': {MESSAGE} [{kind}]")
}

/// Collects violations for one file, in the order they are reported.
pub struct Reporter<'c> {
    ctx: &'c FileContext,
    severity: Severity,
    violations: Vec<Violation>,
}

impl<'c> Reporter<'c> {
    /// Creates a reporter for one file.
    #[must_use]
    pub fn new(ctx: &'c FileContext, severity: Severity) -> Self {
        Self {
            ctx,
            severity,
            violations: Vec::new(),
        }
    }

    /// Records a violation for `candidate`, attached to its origin node.
    pub fn report(&mut self, candidate: &Candidate<'_>) {
        let mut violation = Violation::new(
            CODE,
            NAME,
            self.severity,
            self.ctx.location(&candidate.origin),
            message(candidate.name, candidate.kind),
        )
        .with_suggestion(Suggestion::new(candidate.rules.hint()));

        if let Some(identifier) = &candidate.identifier {
            violation = violation.with_label(Label::new(
                self.ctx.location(identifier),
                format!("identifier `{}`", candidate.name),
            ));
        }

        self.violations.push(violation);
    }

    /// Number of violations recorded so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.violations.len()
    }

    /// Consumes the reporter, returning violations in report order.
    #[must_use]
    pub fn finish(self) -> Vec<Violation> {
        self.violations
    }
}
