//! ESTree builders for unit tests. Nodes carry no positions.

use hungarian_lint_core::Program;
use serde_json::{json, Value};

pub fn program(body: Vec<Value>) -> Program {
    Program::from_value(json!({ "type": "Program", "sourceType": "script", "body": body }))
        .unwrap()
}

pub fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

pub fn literal(value: impl Into<Value>) -> Value {
    json!({ "type": "Literal", "value": value.into() })
}

pub fn var(kind: &str, declarations: Vec<Value>) -> Value {
    json!({ "type": "VariableDeclaration", "declarations": declarations, "kind": kind })
}

pub fn declarator(id: Value, init: Option<Value>) -> Value {
    json!({ "type": "VariableDeclarator", "id": id, "init": init })
}

pub fn function_decl(name: &str, params: Vec<Value>) -> Value {
    json!({
        "type": "FunctionDeclaration",
        "id": ident(name),
        "params": params,
        "body": { "type": "BlockStatement", "body": [] }
    })
}

pub fn function_expr(params: Vec<Value>) -> Value {
    json!({
        "type": "FunctionExpression",
        "id": null,
        "params": params,
        "body": { "type": "BlockStatement", "body": [] }
    })
}

pub fn arrow(params: Vec<Value>) -> Value {
    json!({
        "type": "ArrowFunctionExpression",
        "id": null,
        "expression": false,
        "params": params,
        "body": { "type": "BlockStatement", "body": [] }
    })
}

pub fn class_decl(name: &str) -> Value {
    json!({
        "type": "ClassDeclaration",
        "id": ident(name),
        "superClass": null,
        "body": { "type": "ClassBody", "body": [] }
    })
}

pub fn expr_stmt(expression: Value) -> Value {
    json!({ "type": "ExpressionStatement", "expression": expression })
}

pub fn call(callee: &str, arguments: Vec<Value>) -> Value {
    json!({ "type": "CallExpression", "callee": ident(callee), "arguments": arguments })
}

pub fn member(object: Value, property: Value) -> Value {
    json!({ "type": "MemberExpression", "object": object, "property": property, "computed": false })
}

pub fn assign(left: Value, right: Value) -> Value {
    json!({ "type": "AssignmentExpression", "operator": "=", "left": left, "right": right })
}

pub fn property(key: Value, value: Value) -> Value {
    json!({
        "type": "Property",
        "key": key,
        "value": value,
        "kind": "init",
        "method": false,
        "shorthand": false,
        "computed": false
    })
}

pub fn object_expr(properties: Vec<Value>) -> Value {
    json!({ "type": "ObjectExpression", "properties": properties })
}

pub fn object_pattern(properties: Vec<Value>) -> Value {
    json!({ "type": "ObjectPattern", "properties": properties })
}

pub fn array_pattern(elements: Vec<Value>) -> Value {
    json!({ "type": "ArrayPattern", "elements": elements })
}

pub fn assignment_pattern(left: Value, right: Value) -> Value {
    json!({ "type": "AssignmentPattern", "left": left, "right": right })
}

pub fn rest(argument: Value) -> Value {
    json!({ "type": "RestElement", "argument": argument })
}
