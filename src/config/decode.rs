// src/config/decode.rs

//! Document decoders: raw text in, [`Tree`] out.
//!
//! The grammar itself belongs to external crates (`hcl-rs`, `toml`). This
//! module only converts their output into the generic tree and turns their
//! diagnostics into [`DecodeError`]s.

use std::fmt::Debug;

use hcl::{Body, Expression, ObjectKey, Structure};

use crate::config::tree::{Node, Tree, join_path};
use crate::errors::{DecodeError, DecodeErrorKind};
use crate::types::Format;

/// Decode raw text into a generic attribute tree, or fail with a
/// location-annotated error.
pub trait DocumentDecoder: Send + Sync + Debug {
    /// `origin` labels the document in error messages (normally its path).
    fn decode(&self, origin: &str, text: &str) -> Result<Tree, DecodeError>;
}

/// Pick the decoder for a document format.
pub fn decoder_for(format: Format) -> Box<dyn DocumentDecoder> {
    match format {
        Format::Hcl => Box::new(HclDecoder),
        Format::Toml => Box::new(TomlDecoder),
    }
}

/// Block syntax decoder backed by `hcl-rs`.
///
/// Accepts literal values only: strings, numbers, booleans, lists and
/// objects. Blocks must be unlabelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct HclDecoder;

impl DocumentDecoder for HclDecoder {
    fn decode(&self, origin: &str, text: &str) -> Result<Tree, DecodeError> {
        let body = hcl::parse(text).map_err(|err| {
            let offset = match &err {
                hcl::Error::Parse(parse) => Some(parse.location().offset()),
                _ => None,
            };
            DecodeError::new(
                origin,
                DecodeErrorKind::Syntax {
                    message: err.to_string(),
                    offset,
                },
            )
        })?;

        hcl_body_to_tree(body, "").map_err(|kind| DecodeError::new(origin, kind))
    }
}

fn hcl_body_to_tree(body: Body, prefix: &str) -> Result<Tree, DecodeErrorKind> {
    let mut tree = Tree::new();

    for structure in body {
        match structure {
            Structure::Attribute(attr) => {
                let key = attr.key.to_string();
                let path = join_path(prefix, &key);
                let node = hcl_expr_to_node(attr.expr, &path)?;
                tree.insert_decoded(key, node, &path)?;
            }
            Structure::Block(block) => {
                let key = block.identifier.to_string();
                let path = join_path(prefix, &key);
                if !block.labels.is_empty() {
                    return Err(DecodeErrorKind::Unsupported {
                        path,
                        what: "labelled block",
                    });
                }
                let child = hcl_body_to_tree(block.body, &path)?;
                tree.insert_decoded(key, Node::Block(child), &path)?;
            }
        }
    }

    Ok(tree)
}

fn hcl_expr_to_node(expr: Expression, path: &str) -> Result<Node, DecodeErrorKind> {
    let unsupported = |what: &'static str| DecodeErrorKind::Unsupported {
        path: path.to_string(),
        what,
    };

    match expr {
        Expression::Bool(value) => Ok(Node::Bool(value)),
        Expression::String(value) => Ok(Node::String(value)),
        // HCL has a single number type: `15.0` and `15` are the same value and
        // both decode as an integer. Only numbers with a fractional part are
        // floats.
        Expression::Number(number) => {
            if let Some(value) = number.as_i64() {
                Ok(Node::Integer(value))
            } else if number.as_u64().is_some() {
                Err(unsupported("integer out of range"))
            } else if let Some(value) = number.as_f64() {
                Ok(Node::Float(value))
            } else {
                Err(unsupported("number"))
            }
        }
        Expression::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| hcl_expr_to_node(item, &format!("{path}[{idx}]")))
            .collect::<Result<Vec<_>, _>>()
            .map(Node::List),
        Expression::Object(object) => {
            let mut tree = Tree::new();
            for (key, value) in object {
                let key = match key {
                    ObjectKey::Identifier(ident) => ident.to_string(),
                    ObjectKey::Expression(Expression::String(s)) => s,
                    _ => return Err(unsupported("object key")),
                };
                let child_path = join_path(path, &key);
                let node = hcl_expr_to_node(value, &child_path)?;
                tree.insert_decoded(key, node, &child_path)?;
            }
            Ok(Node::Block(tree))
        }
        Expression::Null => Err(unsupported("null value")),
        _ => Err(unsupported("non-literal expression")),
    }
}

/// TOML decoder. Sections are written as tables (`[cluster_scaling]`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlDecoder;

impl DocumentDecoder for TomlDecoder {
    fn decode(&self, origin: &str, text: &str) -> Result<Tree, DecodeError> {
        let table: toml::Table = toml::from_str(text).map_err(|err| {
            DecodeError::new(
                origin,
                DecodeErrorKind::Syntax {
                    message: err.to_string().trim_end().to_string(),
                    offset: err.span().map(|span| span.start),
                },
            )
        })?;

        toml_table_to_tree(table, "").map_err(|kind| DecodeError::new(origin, kind))
    }
}

fn toml_table_to_tree(table: toml::Table, prefix: &str) -> Result<Tree, DecodeErrorKind> {
    let mut tree = Tree::new();
    for (key, value) in table {
        let path = join_path(prefix, &key);
        let node = toml_value_to_node(value, &path)?;
        tree.insert_decoded(key, node, &path)?;
    }
    Ok(tree)
}

fn toml_value_to_node(value: toml::Value, path: &str) -> Result<Node, DecodeErrorKind> {
    match value {
        toml::Value::String(s) => Ok(Node::String(s)),
        toml::Value::Integer(i) => Ok(Node::Integer(i)),
        toml::Value::Float(f) => Ok(Node::Float(f)),
        toml::Value::Boolean(b) => Ok(Node::Bool(b)),
        toml::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| toml_value_to_node(item, &format!("{path}[{idx}]")))
            .collect::<Result<Vec<_>, _>>()
            .map(Node::List),
        toml::Value::Table(table) => toml_table_to_tree(table, path).map(Node::Block),
        // Datetimes have no counterpart in the config model.
        _ => Err(DecodeErrorKind::Unsupported {
            path: path.to_string(),
            what: "datetime",
        }),
    }
}
