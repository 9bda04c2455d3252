//! Per-identifier mode: every `Identifier` is judged by where it sits.

use hungarian_lint_core::Node;

use super::classifier::{is_require_call, Candidate, ConstructKind};
use super::patterns::RuleSetKind;

/// Decides whether `ident` binds a name, and for which construct.
///
/// `ancestors` is the walk's ancestor stack, nearest last. References,
/// member properties, labels, import specifiers and object keys all
/// resolve to `None`.
#[must_use]
pub fn classify_identifier(ident: Node<'_>, ancestors: &[Node<'_>]) -> Option<ConstructKind> {
    let (&parent, rest) = ancestors.split_last()?;

    match parent.kind() {
        "VariableDeclarator" if parent.is_field("id", &ident) => {
            let requires = parent.field("init").is_some_and(|init| is_require_call(&init));
            (!requires).then_some(ConstructKind::VariableDeclaration)
        }
        "FunctionDeclaration" if parent.is_field("id", &ident) => {
            Some(ConstructKind::FunctionDeclaration)
        }
        "ClassDeclaration" if parent.is_field("id", &ident) => Some(ConstructKind::ClassDeclaration),
        "AssignmentExpression" if parent.is_field("left", &ident) => {
            Some(ConstructKind::AssignmentTarget)
        }
        "AssignmentPattern" if parent.is_field("left", &ident) => binding_owner(parent, rest),
        "RestElement" if parent.is_field("argument", &ident) => binding_owner(parent, rest),
        _ => binding_owner(ident, ancestors),
    }
}

/// Names bound in declaration positions: variables, function and class
/// names, and the parameters of function declarations.
#[must_use]
pub fn is_declaration_position(kind: ConstructKind) -> bool {
    matches!(
        kind,
        ConstructKind::VariableDeclaration
            | ConstructKind::FunctionDeclaration
            | ConstructKind::ClassDeclaration
    )
}

/// Resolves the construct owning a binding target (`node` itself, or the
/// default/rest wrapper around it) from the node's direct parent.
fn binding_owner(node: Node<'_>, ancestors: &[Node<'_>]) -> Option<ConstructKind> {
    let (&parent, rest) = ancestors.split_last()?;

    if let Some(kind) = ConstructKind::of_function(parent.kind()) {
        return parent
            .items("params")
            .any(|p| p.same(&node))
            .then_some(kind);
    }

    let in_pattern = match parent.kind() {
        "ArrayPattern" => parent.items("elements").any(|e| e.same(&node)),
        "ObjectPattern" => parent.items("properties").any(|p| p.same(&node)),
        "Property" => {
            parent.is_field("value", &node) && rest.last().is_some_and(|g| g.is("ObjectPattern"))
        }
        _ => false,
    };
    in_pattern.then_some(ConstructKind::Pattern)
}

/// Candidate for an identifier in any binding position.
#[must_use]
pub fn identifier_candidates<'a>(node: Node<'a>, ancestors: &[Node<'a>]) -> Vec<Candidate<'a>> {
    candidate(node, ancestors, |_| true)
}

/// Candidate for an identifier in a declaration position only.
#[must_use]
pub fn declared_identifier_candidates<'a>(
    node: Node<'a>,
    ancestors: &[Node<'a>],
) -> Vec<Candidate<'a>> {
    candidate(node, ancestors, is_declaration_position)
}

fn candidate<'a>(
    node: Node<'a>,
    ancestors: &[Node<'a>],
    keep: impl Fn(ConstructKind) -> bool,
) -> Vec<Candidate<'a>> {
    let Some(name) = node.name().filter(|n| !n.is_empty()) else {
        return Vec::new();
    };

    classify_identifier(node, ancestors)
        .filter(|kind| keep(*kind))
        .map(|kind| Candidate {
            name,
            origin: node,
            identifier: None,
            kind,
            rules: RuleSetKind::Identifier,
        })
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use hungarian_lint_core::estree::walk;
    use hungarian_lint_core::Program;

    /// Every classified identifier in walk order.
    fn classified(program: &Program) -> Vec<(String, ConstructKind)> {
        let mut out = Vec::new();
        walk(program.root(), |node, ancestors| {
            if node.is("Identifier") {
                if let Some(kind) = classify_identifier(node, ancestors) {
                    out.push((node.name().unwrap_or_default().to_string(), kind));
                }
            }
        });
        out
    }

    fn named(pairs: &[(&str, ConstructKind)]) -> Vec<(String, ConstructKind)> {
        pairs.iter().map(|(n, k)| ((*n).to_string(), *k)).collect()
    }

    #[test]
    fn declaration_names() {
        let program = program(vec![
            var("var", vec![declarator(ident("foo"), Some(ident("oOther")))]),
            function_decl("bar", vec![ident("Baz")]),
            class_decl("Widget"),
        ]);
        assert_eq!(
            classified(&program),
            named(&[
                ("foo", ConstructKind::VariableDeclaration),
                ("bar", ConstructKind::FunctionDeclaration),
                ("Baz", ConstructKind::FunctionDeclaration),
                ("Widget", ConstructKind::ClassDeclaration),
            ])
        );
    }

    #[test]
    fn require_binding_is_not_checked() {
        let program = program(vec![var(
            "const",
            vec![declarator(ident("x"), Some(call("require", vec![literal("mod")])))],
        )]);
        assert!(classified(&program).is_empty());
    }

    #[test]
    fn references_and_members_are_not_checked() {
        let program = program(vec![
            expr_stmt(call("doThing", vec![ident("someRef")])),
            expr_stmt(member(ident("oObj"), ident("prop"))),
        ]);
        assert!(classified(&program).is_empty());
    }

    #[test]
    fn parameter_wrappers_resolve_to_function() {
        let program = program(vec![expr_stmt(arrow(vec![
            assignment_pattern(ident("a"), literal(1)),
            rest(ident("more")),
        ]))]);
        assert_eq!(
            classified(&program),
            named(&[
                ("a", ConstructKind::ArrowFunctionExpression),
                ("more", ConstructKind::ArrowFunctionExpression),
            ])
        );
    }

    #[test]
    fn destructured_bindings_are_patterns() {
        let program = program(vec![var(
            "const",
            vec![declarator(
                object_pattern(vec![
                    property(ident("key"), ident("value")),
                    property(ident("k"), assignment_pattern(ident("dflt"), literal(0))),
                    rest(ident("others")),
                ]),
                Some(ident("oSource")),
            )],
        )]);
        assert_eq!(
            classified(&program),
            named(&[
                ("value", ConstructKind::Pattern),
                ("dflt", ConstructKind::Pattern),
                ("others", ConstructKind::Pattern),
            ])
        );
    }

    #[test]
    fn array_pattern_elements_are_patterns() {
        let program = program(vec![function_decl(
            "f",
            vec![array_pattern(vec![ident("first"), ident("second")])],
        )]);
        assert_eq!(
            classified(&program),
            named(&[
                ("f", ConstructKind::FunctionDeclaration),
                ("first", ConstructKind::Pattern),
                ("second", ConstructKind::Pattern),
            ])
        );
    }

    #[test]
    fn assignment_target() {
        let program = program(vec![expr_stmt(assign(ident("counter"), ident("oNext")))]);
        assert_eq!(
            classified(&program),
            named(&[("counter", ConstructKind::AssignmentTarget)])
        );
    }

    #[test]
    fn object_literal_keys_are_not_checked() {
        let program = program(vec![expr_stmt(object_expr(vec![property(
            ident("key"),
            ident("value"),
        )]))]);
        assert!(classified(&program).is_empty());
    }

    #[test]
    fn declared_candidates_drop_non_declarations() {
        let program = program(vec![expr_stmt(function_expr(vec![ident("Foo")]))]);
        let mut all = Vec::new();
        let mut declared = Vec::new();
        walk(program.root(), |node, ancestors| {
            if node.is("Identifier") {
                all.extend(identifier_candidates(node, ancestors));
                declared.extend(declared_identifier_candidates(node, ancestors));
            }
        });
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].rules, RuleSetKind::Identifier);
        assert!(all[0].identifier.is_none());
        assert!(declared.is_empty());
    }
}
