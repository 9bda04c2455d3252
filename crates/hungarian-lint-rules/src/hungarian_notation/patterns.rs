//! Name patterns and the rule sets built from them.
//!
//! Every pattern is a hand-written matcher over ASCII bytes; nothing is
//! compiled at runtime. The allow-list is a literal set, so configured
//! names never need escaping.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Names every rule set accepts regardless of shape.
pub const BUILTIN_ALLOWED: &[&str] = &["resolve", "reject", "sap", "jQuery"];

/// A single name-matching pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// Type prefix plus humps: `oFoo`, `sBar`, `fnBaz`, `$Node`, `_iCount`.
    HungarianCamel,
    /// `Foo`, `HTMLElement`, `Vector3`.
    PascalCase,
    /// PascalCase with one optional leading underscore: `_Private`.
    PascalCaseUnderscore,
    /// Constant style: `MAX_COUNT`, `HTTP2`, `A__B`.
    UpperSnake,
    /// Exact membership in the [`AllowList`].
    AllowList,
}

impl PatternKind {
    /// Returns true if `name` matches this pattern.
    #[must_use]
    pub fn matches(self, name: &str, allow: &AllowList) -> bool {
        match self {
            Self::HungarianCamel => is_hungarian_camel(name),
            Self::PascalCase => is_pascal_case(name),
            Self::PascalCaseUnderscore => is_pascal_case(name.strip_prefix('_').unwrap_or(name)),
            Self::UpperSnake => is_upper_snake(name),
            Self::AllowList => allow.contains(name),
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HungarianCamel => "hungarian-camel",
            Self::PascalCase => "pascal-case",
            Self::PascalCaseUnderscore => "pascal-case-underscore",
            Self::UpperSnake => "upper-snake",
            Self::AllowList => "allow-list",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// States of the Hungarian camelCase matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CamelState {
    Start,
    /// Consumed the optional leading `_`.
    Underscore,
    /// Consumed `f`, which is either the one-letter prefix or half of `fn`.
    F,
    /// Prefix complete, a hump must start next.
    HumpStart,
    /// Inside the uppercase run of a hump.
    HumpUpper,
    /// Inside the lowercase/digit tail of a hump.
    HumpBody,
}

impl CamelState {
    fn step(self, byte: u8) -> Option<Self> {
        use CamelState::{HumpBody, HumpStart, HumpUpper, Start, Underscore, F};

        let next = match (self, byte) {
            (Start, b'_') => Underscore,
            (Start | Underscore, b'$') => HumpStart,
            (Start | Underscore, b'f') => F,
            (Start | Underscore, b'a'..=b'z') | (F, b'n') => HumpStart,
            (F | HumpStart | HumpUpper | HumpBody, b'A'..=b'Z') => HumpUpper,
            (HumpUpper | HumpBody, b'a'..=b'z' | b'0'..=b'9') => HumpBody,
            _ => return None,
        };
        Some(next)
    }

    fn is_accepting(self) -> bool {
        matches!(self, Self::HumpUpper | Self::HumpBody)
    }
}

/// `_?` then `$`, `fn` or one lowercase letter, then one or more humps.
#[must_use]
pub fn is_hungarian_camel(name: &str) -> bool {
    name.bytes()
        .try_fold(CamelState::Start, CamelState::step)
        .is_some_and(CamelState::is_accepting)
}

/// One or more humps with no prefix.
#[must_use]
pub fn is_pascal_case(name: &str) -> bool {
    let mut bytes = name.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_uppercase()) && bytes.all(|b| b.is_ascii_alphanumeric())
}

/// Uppercase letters and digits, optionally separated by underscores.
#[must_use]
pub fn is_upper_snake(name: &str) -> bool {
    let mut bytes = name.bytes();
    bytes
        .next()
        .is_some_and(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        && bytes.all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
}

/// Names that always pass: the built-ins, configured `ignore` entries, and
/// any single lowercase letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    names: HashSet<String>,
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

impl AllowList {
    /// Merges the built-in names with the configured `ignore` entries.
    #[must_use]
    pub fn new<I, S>(ignore: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = BUILTIN_ALLOWED
            .iter()
            .map(|s| (*s).to_string())
            .chain(ignore.into_iter().map(Into::into))
            .collect();
        Self { names }
    }

    /// Returns true if `name` is allow-listed.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        is_single_lowercase(name) || self.names.contains(name)
    }
}

fn is_single_lowercase(name: &str) -> bool {
    matches!(name.as_bytes(), [b'a'..=b'z'])
}

/// Which rule set a candidate is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSetKind {
    /// Variables, constants and arrow-function parameters.
    Declaration,
    /// Parameters of function declarations and expressions.
    Parameter,
    /// Every identifier in per-identifier mode.
    Identifier,
}

impl RuleSetKind {
    /// Patterns of this rule set in evaluation order. The allow-list is
    /// always last.
    #[must_use]
    pub fn patterns(self) -> &'static [PatternKind] {
        use PatternKind::{AllowList, HungarianCamel, PascalCase, PascalCaseUnderscore, UpperSnake};

        match self {
            Self::Declaration => &[HungarianCamel, UpperSnake, AllowList],
            Self::Parameter => &[PascalCase, HungarianCamel, UpperSnake, AllowList],
            Self::Identifier => &[HungarianCamel, PascalCaseUnderscore, UpperSnake, AllowList],
        }
    }

    /// Advice shown with violations checked against this rule set.
    #[must_use]
    pub fn hint(self) -> &'static str {
        match self {
            Self::Declaration => {
                "Use a type prefix such as `oValue`, `sName` or `fnCallback`, UPPER_SNAKE_CASE for constants, or add the name to `ignore`"
            }
            Self::Parameter | Self::Identifier => {
                "Use a type prefix such as `oValue`, `sName` or `fnCallback`, PascalCase, UPPER_SNAKE_CASE for constants, or add the name to `ignore`"
            }
        }
    }
}

/// An ordered list of patterns sharing one allow-list.
#[derive(Debug, Clone)]
pub struct RuleSet {
    kind: RuleSetKind,
    allow: Arc<AllowList>,
}

impl RuleSet {
    /// Creates the rule set of the given kind over `allow`.
    #[must_use]
    pub fn new(kind: RuleSetKind, allow: Arc<AllowList>) -> Self {
        Self { kind, allow }
    }

    /// Returns the kind of this rule set.
    #[must_use]
    pub fn kind(&self) -> RuleSetKind {
        self.kind
    }

    /// Returns the patterns of this rule set in evaluation order.
    #[must_use]
    pub fn patterns(&self) -> &'static [PatternKind] {
        self.kind.patterns()
    }

    /// Returns true if `name` matches at least one pattern.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.first_match(name).is_some()
    }

    /// Returns the first pattern `name` matches, in evaluation order.
    #[must_use]
    pub fn first_match(&self, name: &str) -> Option<PatternKind> {
        self.patterns()
            .iter()
            .copied()
            .find(|p| p.matches(name, &self.allow))
    }
}

/// The three rule sets derived from one configuration.
#[derive(Debug, Clone)]
pub struct RuleSets {
    declaration: RuleSet,
    parameter: RuleSet,
    identifier: RuleSet,
}

impl RuleSets {
    /// Builds every rule set over a single shared allow-list.
    #[must_use]
    pub fn new(allow: AllowList) -> Self {
        let allow = Arc::new(allow);
        Self {
            declaration: RuleSet::new(RuleSetKind::Declaration, Arc::clone(&allow)),
            parameter: RuleSet::new(RuleSetKind::Parameter, Arc::clone(&allow)),
            identifier: RuleSet::new(RuleSetKind::Identifier, allow),
        }
    }

    /// Returns the rule set of the given kind.
    #[must_use]
    pub fn get(&self, kind: RuleSetKind) -> &RuleSet {
        match kind {
            RuleSetKind::Declaration => &self.declaration,
            RuleSetKind::Parameter => &self.parameter,
            RuleSetKind::Identifier => &self.identifier,
        }
    }
}

impl Default for RuleSets {
    fn default() -> Self {
        Self::new(AllowList::default())
    }
}
