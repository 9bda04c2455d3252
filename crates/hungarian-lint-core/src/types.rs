//! Core types for lint violations and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::estree::Position;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to project root.
    pub file: PathBuf,
    /// Line number (1-indexed, 0 when the tree carries no `loc`).
    pub line: usize,
    /// Column number (1-indexed, 0 when the tree carries no `loc`).
    pub column: usize,
    /// Byte offset in the original source (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a location from the position recorded on an ESTree node.
    #[must_use]
    pub fn from_position(file: PathBuf, position: Position) -> Self {
        Self {
            file,
            line: position.line,
            column: position.column,
            offset: position.offset,
            length: position.length,
        }
    }

    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }
}

/// A labeled span for additional context in violations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Location of the label.
    pub location: Location,
    /// Message for this label.
    pub message: String,
}

impl Label {
    /// Creates a new label.
    #[must_use]
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}

/// A suggested fix for a violation.
///
/// Suggestions are advisory only; nothing rewrites source code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A lint violation found during analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "HN001").
    pub code: String,
    /// Rule name (e.g., "hungarian-notation").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Primary location of the violation.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<Suggestion>,
    /// Additional labels for context.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            suggestion: None,
            labels: Vec::new(),
        }
    }

    /// Adds a suggestion to this violation.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Adds a label to this violation.
    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        // Point at the identifier when the rule recorded one.
        let (location, label_message) = v.labels.first().map_or_else(
            || (&v.location, v.rule.clone()),
            |l| (&l.location, l.message.clone()),
        );
        Self {
            message: format!("[{}] {}", v.code, v.message),
            help: v.suggestion.as_ref().map(|s| s.message.clone()),
            span: SourceSpan::from((location.offset, location.length)),
            label_message,
        }
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of files checked.
    pub files_checked: usize,
    /// Files skipped because they did not hold a valid tree.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<PathBuf>,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Counts violations by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity| {
            self.violations
                .iter()
                .filter(|v| v.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Sorts violations by file, then line, then column.
    ///
    /// The sort is stable, so violations reported for the same node keep
    /// the order in which the rule produced them.
    pub fn sort(&mut self) {
        self.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            "HN001",
            "hungarian-notation",
            severity,
            Location::new(PathBuf::from("src/app.estree.json"), 3, 5),
            "'foo': Variable not named after hungarian notation [VariableDeclaration]",
        )
    }

    #[test]
    fn display_is_compact_single_line() {
        let v = make_violation(Severity::Warning);
        insta::assert_snapshot!(
            v.to_string(),
            @"src/app.estree.json:3:5: warning [HN001] 'foo': Variable not named after hungarian notation [VariableDeclaration]"
        );
    }

    #[test]
    fn location_from_position_copies_span() {
        let position = Position {
            line: 2,
            column: 7,
            offset: 31,
            length: 4,
        };
        let location = Location::from_position(PathBuf::from("a.json"), position);
        assert_eq!(location.line, 2);
        assert_eq!(location.column, 7);
        assert_eq!(location.offset, 31);
        assert_eq!(location.length, 4);
    }

    #[test]
    fn diagnostic_falls_back_to_primary_location() {
        let mut v = make_violation(Severity::Warning);
        v.location.offset = 12;
        v.location.length = 8;
        let diagnostic = ViolationDiagnostic::from(&v);
        assert_eq!(diagnostic.span, SourceSpan::from((12, 8)));
        assert_eq!(diagnostic.label_message, "hungarian-notation");
        assert!(diagnostic.help.is_none());
    }

    #[test]
    fn diagnostic_prefers_identifier_label() {
        let v = make_violation(Severity::Warning).with_label(Label::new(
            Location::from_position(
                PathBuf::from("a.json"),
                Position {
                    line: 1,
                    column: 5,
                    offset: 4,
                    length: 3,
                },
            ),
            "identifier `foo`",
        ));
        let diagnostic = ViolationDiagnostic::from(&v);
        assert_eq!(diagnostic.span, SourceSpan::from((4, 3)));
        assert_eq!(diagnostic.label_message, "identifier `foo`");
        assert!(diagnostic.to_string().starts_with("[HN001] 'foo'"));
    }

    // --- LintResult tests ---

    #[test]
    fn skipped_files_are_omitted_from_json_when_empty() {
        let mut result = LintResult::new();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("skipped").is_none());

        result.skipped.push(PathBuf::from("broken.estree.json"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["skipped"][0], "broken.estree.json");
    }

    #[test]
    fn has_violations_at_error_only() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        assert!(!result.has_violations_at(Severity::Error));
        assert!(result.has_violations_at(Severity::Warning));
        assert!(!result.has_errors());
    }

    #[test]
    fn count_by_severity_counts_each_level() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        result.violations.push(make_violation(Severity::Warning));
        result.violations.push(make_violation(Severity::Error));
        assert_eq!(result.count_by_severity(), (1, 2, 0));
    }

    #[test]
    fn sort_is_stable_within_one_location() {
        let mut result = LintResult::new();
        let mut later = make_violation(Severity::Warning);
        later.location.line = 9;
        later.message = "later".into();
        let mut first = make_violation(Severity::Warning);
        first.message = "first".into();
        let mut second = make_violation(Severity::Warning);
        second.message = "second".into();
        result.violations = vec![later, first, second];

        result.sort();

        let messages: Vec<&str> = result.violations.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(messages, ["first", "second", "later"]);
    }
}
