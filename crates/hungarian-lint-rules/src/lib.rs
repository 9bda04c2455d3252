//! # hungarian-lint-rules
//!
//! Built-in naming rules for hungarian-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | HN001 | `hungarian-notation` | Requires type-prefixed camelCase, `UPPER_SNAKE` or allow-listed names |
//!
//! ## Usage
//!
//! ```ignore
//! use hungarian_lint_core::Analyzer;
//! use hungarian_lint_rules::HungarianNotation;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./build/ast")
//!     .rule(HungarianNotation::new().ignore(["e"]))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod hungarian_notation;
mod registry;

#[cfg(test)]
mod test_support;

pub use hungarian_notation::patterns::{AllowList, PatternKind, RuleSet, RuleSetKind, RuleSets};
pub use hungarian_notation::{HungarianNotation, HungarianNotationOptions, Mode};
pub use registry::{all_rules, rules_from_config};

/// Re-export core types for convenience.
pub use hungarian_lint_core::{Rule, Severity, Violation};
