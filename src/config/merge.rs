// src/config/merge.rs

//! Overlay a decoded [`Tree`] onto a baseline [`Config`].
//!
//! Merging is per field. Each section overlays its own entries onto its own
//! defaults, so `cluster_scaling { max_size = 15 }` changes `max_size` and
//! nothing else. A block is never treated as a replacement for the whole
//! section.

use tracing::warn;

use crate::config::model::{ClusterScaling, Config, JobScaling, Telemetry};
use crate::config::tree::{Node, Tree, join_path};
use crate::errors::DecodeErrorKind;
use crate::types::Strictness;

/// Merge engine. Stateless apart from its strictness setting.
#[derive(Debug, Clone, Copy, Default)]
pub struct Merger {
    strictness: Strictness,
}

impl Merger {
    pub fn new(strictness: Strictness) -> Self {
        Self { strictness }
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Overlay `tree` onto `defaults` and return the result.
    ///
    /// Keys absent from the tree keep their value from `defaults`. With an
    /// empty tree the output equals `defaults`.
    pub fn merge(&self, defaults: Config, tree: &Tree) -> Result<Config, DecodeErrorKind> {
        let mut config = defaults;
        let mut cx = MergeContext {
            strictness: self.strictness,
            prefix: String::new(),
        };
        config.overlay(tree, &mut cx)?;
        Ok(config)
    }
}

/// Strict merge of `tree` over `defaults`.
pub fn merge(defaults: Config, tree: &Tree) -> Result<Config, DecodeErrorKind> {
    Merger::default().merge(defaults, tree)
}

/// A section that can take field-level overrides from a tree.
trait Overlay {
    fn overlay(&mut self, tree: &Tree, cx: &mut MergeContext) -> Result<(), DecodeErrorKind>;
}

impl Overlay for Config {
    fn overlay(&mut self, tree: &Tree, cx: &mut MergeContext) -> Result<(), DecodeErrorKind> {
        for (key, node) in tree {
            match key.as_str() {
                "consul" => cx.assign(key, node, &mut self.consul)?,
                "nomad" => cx.assign(key, node, &mut self.nomad)?,
                "log_level" => cx.assign(key, node, &mut self.log_level)?,
                "enforce" => cx.assign(key, node, &mut self.enforce)?,
                "cluster_scaling" => cx.section(key, node, &mut self.cluster_scaling)?,
                "job_scaling" => cx.section(key, node, &mut self.job_scaling)?,
                "telemetry" => cx.section(key, node, &mut self.telemetry)?,
                _ => cx.unknown(key)?,
            }
        }
        Ok(())
    }
}

impl Overlay for ClusterScaling {
    fn overlay(&mut self, tree: &Tree, cx: &mut MergeContext) -> Result<(), DecodeErrorKind> {
        for (key, node) in tree {
            match key.as_str() {
                "max_size" => cx.assign(key, node, &mut self.max_size)?,
                "min_size" => cx.assign(key, node, &mut self.min_size)?,
                "cool_down" => cx.assign(key, node, &mut self.cool_down)?,
                _ => cx.unknown(key)?,
            }
        }
        Ok(())
    }
}

impl Overlay for JobScaling {
    fn overlay(&mut self, tree: &Tree, cx: &mut MergeContext) -> Result<(), DecodeErrorKind> {
        for (key, node) in tree {
            match key.as_str() {
                "consul_key_location" => cx.assign(key, node, &mut self.consul_key_location)?,
                "consul_token" => cx.assign(key, node, &mut self.consul_token)?,
                _ => cx.unknown(key)?,
            }
        }
        Ok(())
    }
}

impl Overlay for Telemetry {
    fn overlay(&mut self, tree: &Tree, cx: &mut MergeContext) -> Result<(), DecodeErrorKind> {
        for (key, node) in tree {
            match key.as_str() {
                "statsd_address" => cx.assign(key, node, &mut self.statsd_address)?,
                _ => cx.unknown(key)?,
            }
        }
        Ok(())
    }
}

/// Conversion from a tree node into a typed field value. No coercion: a node
/// of the wrong shape yields `None`.
trait FromNode: Sized {
    const EXPECTED: &'static str;

    fn from_node(node: &Node) -> Option<Self>;
}

impl FromNode for String {
    const EXPECTED: &'static str = "a string";

    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromNode for bool {
    const EXPECTED: &'static str = "a boolean";

    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromNode for u64 {
    const EXPECTED: &'static str = "a non-negative integer";

    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Integer(i) => u64::try_from(*i).ok(),
            _ => None,
        }
    }
}

// Optional strings: an empty string means "not set".
impl FromNode for Option<String> {
    const EXPECTED: &'static str = "a string";

    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::String(s) if s.is_empty() => Some(None),
            Node::String(s) => Some(Some(s.clone())),
            _ => None,
        }
    }
}

struct MergeContext {
    strictness: Strictness,
    /// Dotted path of the section being merged; empty at the root.
    prefix: String,
}

impl MergeContext {
    fn path(&self, key: &str) -> String {
        join_path(&self.prefix, key)
    }

    fn assign<T: FromNode>(
        &mut self,
        key: &str,
        node: &Node,
        slot: &mut T,
    ) -> Result<(), DecodeErrorKind> {
        match T::from_node(node) {
            Some(value) => {
                *slot = value;
                Ok(())
            }
            None => self.mismatch(key, T::EXPECTED, node.kind()),
        }
    }

    fn section<S: Overlay>(
        &mut self,
        key: &str,
        node: &Node,
        section: &mut S,
    ) -> Result<(), DecodeErrorKind> {
        let Node::Block(tree) = node else {
            return self.mismatch(key, "a block", node.kind());
        };

        let nested = self.path(key);
        let parent = std::mem::replace(&mut self.prefix, nested);
        let result = section.overlay(tree, self);
        self.prefix = parent;
        result
    }

    fn unknown(&mut self, key: &str) -> Result<(), DecodeErrorKind> {
        let path = self.path(key);
        match self.strictness {
            Strictness::Strict => Err(DecodeErrorKind::UnknownKey { path }),
            Strictness::Lenient => {
                warn!(key = %path, "ignoring unknown config key");
                Ok(())
            }
        }
    }

    fn mismatch(
        &mut self,
        key: &str,
        expected: &'static str,
        found: &'static str,
    ) -> Result<(), DecodeErrorKind> {
        let path = self.path(key);
        match self.strictness {
            Strictness::Strict => Err(DecodeErrorKind::TypeMismatch {
                path,
                expected,
                found,
            }),
            Strictness::Lenient => {
                warn!(key = %path, expected, found, "ignoring config value of the wrong type, keeping default");
                Ok(())
            }
        }
    }
}
