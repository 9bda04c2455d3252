//! Borrowed view over ESTree syntax trees.
//!
//! Trees arrive as ESTree JSON, the format produced by acorn, espree and
//! `@babel/parser` (with the `estree` plugin). Rather than mirroring the
//! whole grammar in Rust types, [`Node`] wraps a JSON object that carries a
//! string `type` and exposes field accessors. Rules only ever look at a
//! handful of fields, and every accessor degrades to `None` on a tree that
//! does not have the expected shape.

use serde_json::Value;
use thiserror::Error;

/// Fields that hold metadata rather than child nodes.
const NON_CHILD_FIELDS: &[&str] = &["loc", "range", "parent"];

/// Errors that can occur while loading a tree.
#[derive(Debug, Error)]
pub enum EstreeError {
    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON root is not an ESTree node.
    #[error("root value is not an ESTree node (missing string `type`)")]
    NotANode,
}

/// An owned ESTree document.
#[derive(Debug, Clone)]
pub struct Program {
    root: Value,
}

impl Program {
    /// Parses an ESTree JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or the root value is not a node.
    pub fn parse(text: &str) -> Result<Self, EstreeError> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Wraps an already deserialized JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`EstreeError::NotANode`] if the root value is not a node.
    pub fn from_value(root: Value) -> Result<Self, EstreeError> {
        if Node::new(&root).is_none() {
            return Err(EstreeError::NotANode);
        }
        Ok(Self { root })
    }

    /// Returns the root node (usually of kind `Program`).
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        Node { value: &self.root }
    }
}

/// Source position recorded on a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// 1-indexed line, 0 when the node has no `loc`.
    pub line: usize,
    /// 1-indexed column, 0 when the node has no `loc`.
    pub column: usize,
    /// Byte offset of the node start.
    pub offset: usize,
    /// Length of the node in bytes.
    pub length: usize,
}

/// A borrowed ESTree node: a JSON object with a string `type`.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    value: &'a Value,
}

impl<'a> Node<'a> {
    /// Wraps `value` if it is an object with a string `type`.
    #[must_use]
    pub fn new(value: &'a Value) -> Option<Self> {
        value
            .get("type")
            .and_then(Value::as_str)
            .map(|_| Self { value })
    }

    /// Returns the node kind, e.g. `"VariableDeclaration"`.
    #[must_use]
    pub fn kind(&self) -> &'a str {
        self.value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Returns true if this node is of the given kind.
    #[must_use]
    pub fn is(&self, kind: &str) -> bool {
        self.kind() == kind
    }

    /// Returns the node stored in field `name`, if any.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<Node<'a>> {
        self.value.get(name).and_then(Node::new)
    }

    /// Iterates the nodes stored in array field `name`.
    ///
    /// `null` holes (e.g. `[, b] = xs`) and non-node entries are skipped.
    pub fn items(&self, name: &str) -> impl Iterator<Item = Node<'a>> + 'a {
        self.value
            .get(name)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Node::new)
    }

    /// Returns the string stored in field `name`, if any.
    #[must_use]
    pub fn str_field(&self, name: &str) -> Option<&'a str> {
        self.value.get(name).and_then(Value::as_str)
    }

    /// Returns the `name` field (set on `Identifier` nodes).
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        self.str_field("name")
    }

    /// Returns true if both views point at the same node in the same tree.
    #[must_use]
    pub fn same(&self, other: &Node<'_>) -> bool {
        std::ptr::eq(self.value, other.value)
    }

    /// Returns true if `child` is the node stored in field `name`.
    #[must_use]
    pub fn is_field(&self, name: &str, child: &Node<'_>) -> bool {
        self.field(name).is_some_and(|f| f.same(child))
    }

    /// Returns all direct child nodes in field order.
    #[must_use]
    pub fn children(&self) -> Vec<Node<'a>> {
        let Some(object) = self.value.as_object() else {
            return Vec::new();
        };

        let mut children = Vec::new();
        for (key, value) in object {
            if NON_CHILD_FIELDS.contains(&key.as_str()) {
                continue;
            }
            match value {
                Value::Array(entries) => children.extend(entries.iter().filter_map(Node::new)),
                Value::Object(_) => children.extend(Node::new(value)),
                _ => {}
            }
        }
        children
    }

    /// Returns the source position recorded on this node.
    #[must_use]
    pub fn position(&self) -> Position {
        let start = self.value.pointer("/loc/start");
        let line = start
            .and_then(|s| s.get("line"))
            .and_then(Value::as_u64)
            .map_or(0, to_usize);
        let column = start
            .and_then(|s| s.get("column"))
            .and_then(Value::as_u64)
            .map_or(0, |c| to_usize(c) + 1);

        let range = self.value.get("range").and_then(Value::as_array);
        let offset_at = |field: &str, index: usize| {
            self.value
                .get(field)
                .or_else(|| range.and_then(|r| r.get(index)))
                .and_then(Value::as_u64)
                .map(to_usize)
        };

        let (offset, length) = match (offset_at("start", 0), offset_at("end", 1)) {
            (Some(start), Some(end)) => (start, end.saturating_sub(start)),
            (Some(start), None) => (start, 0),
            _ => (0, 0),
        };

        Position {
            line,
            column,
            offset,
            length,
        }
    }
}

fn to_usize(n: u64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

/// Walks the tree depth-first, visiting parents before their children.
///
/// `visit` receives each node together with its ancestors, nearest last.
/// Every node reachable from `root` is visited exactly once.
pub fn walk<'a, F>(root: Node<'a>, mut visit: F)
where
    F: FnMut(Node<'a>, &[Node<'a>]),
{
    let mut ancestors = Vec::new();
    walk_inner(root, &mut ancestors, &mut visit);
}

fn walk_inner<'a, F>(node: Node<'a>, ancestors: &mut Vec<Node<'a>>, visit: &mut F)
where
    F: FnMut(Node<'a>, &[Node<'a>]),
{
    visit(node, ancestors);
    ancestors.push(node);
    for child in node.children() {
        walk_inner(child, ancestors, visit);
    }
    ancestors.pop();
}
