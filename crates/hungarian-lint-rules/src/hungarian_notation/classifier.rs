//! Declaration classifier: which names a construct introduces, and which
//! rule set each of them answers to.

use hungarian_lint_core::Node;

use super::patterns::RuleSetKind;

/// The syntactic construct a checked name comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    /// `var`/`let`/`const` declarator ids.
    VariableDeclaration,
    /// Parameters (or, per identifier, the name) of `function f() {}`.
    FunctionDeclaration,
    /// Parameters of `function () {}` used as a value.
    FunctionExpression,
    /// Parameters of `() => {}`.
    ArrowFunctionExpression,
    /// The name of `class C {}`.
    ClassDeclaration,
    /// Names bound inside object/array destructuring.
    Pattern,
    /// The identifier on the left of `x = ...`.
    AssignmentTarget,
}

impl ConstructKind {
    /// Category tag used in messages; matches the ESTree kind where one exists.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VariableDeclaration => "VariableDeclaration",
            Self::FunctionDeclaration => "FunctionDeclaration",
            Self::FunctionExpression => "FunctionExpression",
            Self::ArrowFunctionExpression => "ArrowFunctionExpression",
            Self::ClassDeclaration => "ClassDeclaration",
            Self::Pattern => "Pattern",
            Self::AssignmentTarget => "AssignmentExpression",
        }
    }

    /// Maps a function node kind to its construct.
    #[must_use]
    pub fn of_function(kind: &str) -> Option<Self> {
        match kind {
            "FunctionDeclaration" => Some(Self::FunctionDeclaration),
            "FunctionExpression" => Some(Self::FunctionExpression),
            "ArrowFunctionExpression" => Some(Self::ArrowFunctionExpression),
            _ => None,
        }
    }

    /// Rule set applied to names of this construct in construct mode.
    ///
    /// Arrow-function parameters are held to the declaration rules, not
    /// the parameter rules.
    #[must_use]
    pub fn rule_set(self) -> RuleSetKind {
        match self {
            Self::FunctionDeclaration | Self::FunctionExpression => RuleSetKind::Parameter,
            Self::VariableDeclaration
            | Self::ArrowFunctionExpression
            | Self::ClassDeclaration
            | Self::Pattern
            | Self::AssignmentTarget => RuleSetKind::Declaration,
        }
    }
}

impl std::fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name awaiting pattern evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// The declared name.
    pub name: &'a str,
    /// Node the diagnostic is attached to.
    pub origin: Node<'a>,
    /// The identifier node carrying the name, when it differs from `origin`.
    pub identifier: Option<Node<'a>>,
    /// Construct the name comes from.
    pub kind: ConstructKind,
    /// Rule set the name is checked against.
    pub rules: RuleSetKind,
}

/// Classifies one construct node, dispatching on its kind.
///
/// Returns no candidates for node kinds the classifier does not handle.
#[must_use]
pub fn classify(node: Node<'_>) -> Vec<Candidate<'_>> {
    match node.kind() {
        "VariableDeclaration" => variable_candidates(node),
        kind => ConstructKind::of_function(kind)
            .map(|construct| parameter_candidates(node, construct))
            .unwrap_or_default(),
    }
}

/// Names declared by a `VariableDeclaration`, in declarator order.
///
/// Declarators initialized with a function or arrow function are left to
/// the function's own visit. A declaration that loads a module through
/// `require(...)` yields nothing.
#[must_use]
pub fn variable_candidates(node: Node<'_>) -> Vec<Candidate<'_>> {
    if is_require_declaration(node) {
        return Vec::new();
    }

    node.items("declarations")
        .filter(|d| d.is("VariableDeclarator"))
        .filter(|d| !d.field("init").is_some_and(|init| is_function_valued(&init)))
        .filter_map(|d| {
            let id = d.field("id")?;
            let name = id.name().filter(|n| !n.is_empty())?;
            Some(Candidate {
                name,
                origin: node,
                identifier: Some(id),
                kind: ConstructKind::VariableDeclaration,
                rules: RuleSetKind::Declaration,
            })
        })
        .collect()
}

/// Parameter names of a function node, in parameter order.
#[must_use]
pub fn parameter_candidates(node: Node<'_>, kind: ConstructKind) -> Vec<Candidate<'_>> {
    node.items("params")
        .filter_map(resolve_param)
        .map(|(name, identifier)| Candidate {
            name,
            origin: node,
            identifier: Some(identifier),
            kind,
            rules: kind.rule_set(),
        })
        .collect()
}

/// Resolves the name a parameter binds.
///
/// Looks at the parameter itself (`a`), then its `id`, then the left side
/// of a default (`a = 1`), then a rest argument (`...a`). Nested
/// destructuring resolves to nothing.
#[must_use]
pub fn resolve_param(param: Node<'_>) -> Option<(&str, Node<'_>)> {
    fn named(node: Node<'_>) -> Option<(&str, Node<'_>)> {
        node.name().filter(|n| !n.is_empty()).map(|n| (n, node))
    }

    named(param).or_else(|| {
        ["id", "left", "argument"]
            .into_iter()
            .find_map(|field| param.field(field).and_then(named))
    })
}

/// Returns true for function expressions and arrow functions.
#[must_use]
pub fn is_function_valued(node: &Node<'_>) -> bool {
    node.is("FunctionExpression") || node.is("ArrowFunctionExpression")
}

/// Returns true for `require(...)` calls.
#[must_use]
pub fn is_require_call(node: &Node<'_>) -> bool {
    node.is("CallExpression")
        && node
            .field("callee")
            .is_some_and(|callee| callee.is("Identifier") && callee.name() == Some("require"))
}

/// Returns true if any declarator binds a name directly to `require(...)`.
#[must_use]
pub fn is_require_declaration(node: Node<'_>) -> bool {
    node.items("declarations").any(|d| {
        d.field("id").is_some_and(|id| id.is("Identifier"))
            && d.field("init").is_some_and(|init| is_require_call(&init))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use hungarian_lint_core::Program;
    use serde_json::json;

    fn names<'a>(candidates: &[Candidate<'a>]) -> Vec<&'a str> {
        candidates.iter().map(|c| c.name).collect()
    }

    fn root_statement(program: &Program) -> Node<'_> {
        program.root().items("body").next().unwrap()
    }

    #[test]
    fn variable_names_in_declarator_order() {
        let program = program(vec![var(
            "let",
            vec![
                declarator(ident("oFoo"), Some(literal(1))),
                declarator(ident("bar"), None),
            ],
        )]);
        let candidates = classify(root_statement(&program));
        assert_eq!(names(&candidates), ["oFoo", "bar"]);
        assert!(candidates
            .iter()
            .all(|c| c.kind == ConstructKind::VariableDeclaration
                && c.rules == RuleSetKind::Declaration));
    }

    #[test]
    fn function_valued_declarators_are_excluded() {
        let program = program(vec![var(
            "const",
            vec![
                declarator(ident("handler"), Some(arrow(vec![ident("Foo")]))),
                declarator(ident("cb"), Some(function_expr(vec![]))),
                declarator(ident("value"), Some(literal(2))),
            ],
        )]);
        assert_eq!(names(&classify(root_statement(&program))), ["value"]);
    }

    #[test]
    fn require_declaration_yields_nothing() {
        let program = program(vec![var(
            "const",
            vec![declarator(ident("x"), Some(call("require", vec![literal("mod")])))],
        )]);
        let statement = root_statement(&program);
        assert!(is_require_declaration(statement));
        assert!(classify(statement).is_empty());
    }

    #[test]
    fn other_calls_are_not_require() {
        let program = program(vec![var(
            "const",
            vec![declarator(ident("x"), Some(call("load", vec![literal("mod")])))],
        )]);
        assert_eq!(names(&classify(root_statement(&program))), ["x"]);
    }

    #[test]
    fn destructuring_declarators_are_skipped() {
        let program = program(vec![var(
            "const",
            vec![declarator(
                object_pattern(vec![property(ident("a"), ident("a"))]),
                Some(ident("oSource")),
            )],
        )]);
        assert!(classify(root_statement(&program)).is_empty());
    }

    #[test]
    fn parameter_forms_resolve() {
        let program = program(vec![function_decl(
            "f",
            vec![
                ident("a"),
                assignment_pattern(ident("b"), literal(1)),
                rest(ident("c")),
                object_pattern(vec![property(ident("d"), ident("d"))]),
                array_pattern(vec![ident("e")]),
            ],
        )]);
        let candidates = classify(root_statement(&program));
        assert_eq!(names(&candidates), ["a", "b", "c"]);
        assert!(candidates.iter().all(|c| c.rules == RuleSetKind::Parameter));
        assert_eq!(candidates[1].identifier.and_then(|n| n.name()), Some("b"));
    }

    #[test]
    fn resolve_param_prefers_own_name_then_fields() {
        let program = Program::from_value(json!({
            "type": "Program",
            "body": [
                { "type": "Identifier", "name": "oOwn" },
                { "type": "TSParameterProperty", "id": { "type": "Identifier", "name": "oAlias" } },
                { "type": "AssignmentPattern", "left": { "type": "Identifier", "name": "" } },
                { "type": "ObjectPattern", "properties": [] }
            ]
        }))
        .unwrap();
        let params: Vec<_> = program.root().items("body").collect();

        let resolved: Vec<_> = params.iter().map(|p| resolve_param(*p)).collect();
        assert_eq!(resolved[0].map(|(name, _)| name), Some("oOwn"));
        assert!(resolved[0].is_some_and(|(_, node)| node.same(&params[0])));
        let (alias, alias_node) = resolved[1].unwrap();
        assert_eq!(alias, "oAlias");
        assert!(alias_node.same(&params[1].field("id").unwrap()));
        assert!(resolved[2].is_none(), "empty names do not resolve");
        assert!(resolved[3].is_none());
    }

    #[test]
    fn arrow_parameters_use_declaration_rules() {
        let program = program(vec![expr_stmt(arrow(vec![ident("Foo")]))]);
        let arrow = root_statement(&program).field("expression").unwrap();
        let candidates = classify(arrow);
        assert_eq!(names(&candidates), ["Foo"]);
        assert_eq!(candidates[0].kind, ConstructKind::ArrowFunctionExpression);
        assert_eq!(candidates[0].rules, RuleSetKind::Declaration);
    }

    #[test]
    fn function_expression_parameters_use_parameter_rules() {
        let program = program(vec![expr_stmt(function_expr(vec![ident("Foo")]))]);
        let function = root_statement(&program).field("expression").unwrap();
        let candidates = classify(function);
        assert_eq!(candidates[0].kind, ConstructKind::FunctionExpression);
        assert_eq!(candidates[0].rules, RuleSetKind::Parameter);
    }

    #[test]
    fn unhandled_kinds_yield_nothing() {
        let program = program(vec![expr_stmt(ident("x"))]);
        assert!(classify(root_statement(&program)).is_empty());
    }
}
