// src/config/tree.rs

//! Loosely typed attribute tree produced by the document decoders.
//!
//! Decoders only care about syntax; the merge engine only cares about this
//! tree. Tests can build trees directly with [`Tree::with`].

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::errors::DecodeErrorKind;

/// One decoded value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Node>),
    /// A nested block or object.
    Block(Tree),
}

impl Node {
    /// Short human-readable name of the value's type, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Bool(_) => "boolean",
            Node::Integer(_) => "integer",
            Node::Float(_) => "float",
            Node::String(_) => "string",
            Node::List(_) => "list",
            Node::Block(_) => "block",
        }
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Integer(value)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Float(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

impl From<Tree> for Node {
    fn from(value: Tree) -> Self {
        Node::Block(value)
    }
}

/// Keyed collection of nodes. Iteration order is by key, so anything walking
/// the tree sees the same order regardless of how the document was written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    entries: BTreeMap<String, Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mainly for hand-built trees in tests.
    pub fn with(mut self, key: impl Into<String>, node: impl Into<Node>) -> Self {
        self.entries.insert(key.into(), node.into());
        self
    }

    /// Insert or replace a node, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) -> Option<Node> {
        self.entries.insert(key.into(), node.into())
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Node> {
        self.entries.iter()
    }

    /// Insert a node coming from a parsed document.
    ///
    /// Two blocks under the same key are merged (the later one wins per
    /// field); any other repeat is a [`DecodeErrorKind::DuplicateKey`].
    /// `path` is the dotted path of `key`, used for the error.
    pub(crate) fn insert_decoded(
        &mut self,
        key: String,
        node: Node,
        path: &str,
    ) -> Result<(), DecodeErrorKind> {
        match self.entries.entry(key) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(node);
                Ok(())
            }
            btree_map::Entry::Occupied(mut slot) => match (slot.get_mut(), node) {
                (Node::Block(existing), Node::Block(incoming)) => {
                    for (child_key, child) in incoming.entries {
                        let child_path = join_path(path, &child_key);
                        existing.insert_decoded(child_key, child, &child_path)?;
                    }
                    Ok(())
                }
                _ => Err(DecodeErrorKind::DuplicateKey {
                    path: path.to_string(),
                }),
            },
        }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a String, &'a Node);
    type IntoIter = btree_map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// `parent.key`, or just `key` at the root.
pub(crate) fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}
