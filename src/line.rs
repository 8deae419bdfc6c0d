//! A single screen row.

use std::collections::BTreeMap;

use crate::node::Node;

/// Per-line metadata: namespace → key → value.
///
/// `BTreeMap` keeps namespaces and keys in ascending order, which the HTML
/// renderer relies on for deterministic processing-instruction output.
pub type LineMetadata = BTreeMap<String, BTreeMap<String, String>>;

/// One row of the screen: cells, a newline flag, and optional metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLine {
    nodes: Vec<Node>,
    newline: bool,
    metadata: LineMetadata,
}

impl ScreenLine {
    pub fn new() -> ScreenLine {
        ScreenLine::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// True iff an explicit newline ended this line. Lines reached by soft
    /// wrapping or by cursor addressing leave it false.
    pub fn has_newline(&self) -> bool {
        self.newline
    }

    pub(crate) fn set_newline(&mut self, v: bool) {
        self.newline = v;
    }

    /// Extends the row with blank cells so that column `x` exists, then
    /// places `node` there.
    pub(crate) fn put(&mut self, x: usize, node: Node) {
        if self.nodes.len() <= x {
            self.nodes.resize(x + 1, Node::EMPTY);
        }
        self.nodes[x] = node;
    }

    /// Overwrites cells in `x_start..=x_end` with blanks; `None` means
    /// through the last existing column. A full-line clear empties the row
    /// (retaining capacity) but keeps metadata.
    pub(crate) fn clear_range(&mut self, x_start: usize, x_end: Option<usize>) {
        if x_start == 0 && x_end.is_none() {
            self.nodes.clear();
            return;
        }
        let end = x_end.unwrap_or(self.nodes.len().saturating_sub(1));
        let mut x = x_start;
        while x <= end && x < self.nodes.len() {
            self.nodes[x] = Node::EMPTY;
            x += 1;
        }
    }

    pub fn metadata(&self) -> &LineMetadata {
        &self.metadata
    }

    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }

    /// Merges `data` into the namespace with set-if-absent semantics:
    /// existing keys win, new keys are inserted.
    pub(crate) fn set_metadata_nx(&mut self, namespace: &str, data: BTreeMap<String, String>) {
        match self.metadata.get_mut(namespace) {
            Some(existing) => {
                for (key, value) in data {
                    existing.entry(key).or_insert(value);
                }
            }
            None => {
                self.metadata.insert(namespace.to_string(), data);
            }
        }
    }
}
