//! # hungarian-lint-core
//!
//! Core framework for naming-convention linting over ESTree syntax trees.
//!
//! This crate provides the foundational traits and types for building
//! linters that inspect JavaScript syntax trees supplied as ESTree JSON.
//! It includes:
//!
//! - [`Rule`] trait for per-file tree rules
//! - [`estree`] borrowed node view and depth-first [`walk`]
//! - [`Analyzer`] for discovering tree files and orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use hungarian_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./build/ast")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

/// ESTree node view and tree walking.
pub mod estree;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use estree::{walk, EstreeError, Node, Position, Program};
pub use rule::{Rule, RuleBox};
pub use types::{Label, LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
