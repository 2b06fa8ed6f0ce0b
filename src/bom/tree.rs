//! # Component Tree
//!
//! Nodes live in an arena ([`ComponentTree`]) and refer to their children by
//! [`NodeId`] handle rather than by owning pointer. A node wraps one shared
//! [`ComponentRecord`]; many nodes may wrap the same record.
//!
//! ## Acyclicity
//!
//! A child handle may appear under several parents, so the structure is a DAG rather
//! than a strict tree. [`ComponentTree::attach_child`] rejects any edge that would let
//! a node reach itself, which keeps [`ComponentTree::total_cost`] and
//! [`ComponentTree::render`] bounded by the depth of the graph.
//!
//! ## Counting
//!
//! Cost and rendering walk edges, not identities: a node attached twice is costed
//! and rendered twice.

use crate::catalog::ComponentCatalog;
use crate::error::{BomError, Result};
use crate::model::ComponentRecord;
use log::debug;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Spaces of indentation per tree level in rendered output.
pub const INDENT_WIDTH: usize = 2;

/// Handle to a node inside a [`ComponentTree`].
///
/// A handle remembers which tree allocated it, so it is only ever valid in that tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    tree: Uuid,
    index: usize,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

#[derive(Debug, Clone)]
pub struct ComponentNode {
    record: Rc<ComponentRecord>,
    children: Vec<NodeId>,
}

impl ComponentNode {
    pub fn record(&self) -> &Rc<ComponentRecord> {
        &self.record
    }

    pub fn name(&self) -> &str {
        self.record.name()
    }

    pub fn unit_cost(&self) -> f64 {
        self.record.unit_cost()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Debug)]
pub struct ComponentTree {
    id: Uuid,
    nodes: Vec<ComponentNode>,
}

impl Default for ComponentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentTree {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            nodes: Vec::new(),
        }
    }

    /// Allocates a detached node wrapping `record`.
    pub fn add_node(&mut self, record: Rc<ComponentRecord>) -> NodeId {
        let id = NodeId {
            tree: self.id,
            index: self.nodes.len(),
        };
        self.nodes.push(ComponentNode {
            record,
            children: Vec::new(),
        });
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&ComponentNode> {
        if id.tree != self.id {
            return None;
        }
        self.nodes.get(id.index)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolves `name` through the catalog and appends a fresh node for it under `parent`.
    ///
    /// The parent is checked before the catalog is touched, so a bad handle never
    /// registers a new record.
    pub fn attach_child_by_name(
        &mut self,
        catalog: &mut ComponentCatalog,
        parent: NodeId,
        name: &str,
        unit_cost: f64,
    ) -> Result<NodeId> {
        self.checked(parent)?;
        let record = catalog.resolve(name, unit_cost)?;
        let child = self.add_node(record);
        self.nodes[parent.index].children.push(child);
        debug!(
            "attached '{}' {} under '{}' {}",
            name,
            child,
            self.nodes[parent.index].name(),
            parent
        );
        Ok(child)
    }

    /// Appends an existing node as a child of `parent`.
    ///
    /// Fails with `InvalidArgument` for a handle this tree never allocated and with
    /// `CycleDetected` when `parent` is reachable from `child` (including `child == parent`).
    pub fn attach_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent_node = self.checked(parent)?;
        let child_node = self.checked(child)?;

        if self.reaches(child, parent) {
            return Err(BomError::CycleDetected {
                parent: format!("{} {}", parent_node.name(), parent),
                child: format!("{} {}", child_node.name(), child),
            });
        }

        self.nodes[parent.index].children.push(child);
        debug!("attached {} under {}", child, parent);
        Ok(())
    }

    /// True when `target` is `from` itself or can be reached from it along child edges.
    pub fn reaches(&self, from: NodeId, target: NodeId) -> bool {
        if !self.contains(from) {
            return false;
        }

        let mut stack = vec![from];
        let mut seen = HashSet::new();
        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            if seen.insert(current) {
                stack.extend(self.nodes[current.index].children.iter().copied());
            }
        }
        false
    }

    /// Own cost plus the total cost of every child edge, depth-first, left-to-right.
    pub fn total_cost(&self, id: NodeId) -> Result<f64> {
        self.checked(id)?;
        Ok(self.cost_of(id))
    }

    /// Display lines for the subtree at `id`, starting at `indent_level`.
    pub fn render(&self, id: NodeId, indent_level: usize) -> Result<Vec<String>> {
        self.checked(id)?;
        let mut lines = Vec::new();
        self.render_into(id, indent_level, &mut lines);
        Ok(lines)
    }

    /// Longest chain of child edges below `id`; a leaf has depth 0.
    pub fn depth(&self, id: NodeId) -> Result<usize> {
        self.checked(id)?;
        Ok(self.depth_of(id))
    }

    /// Number of node appearances in the subtree at `id`, including `id`, counted per edge.
    pub fn count(&self, id: NodeId) -> Result<usize> {
        self.checked(id)?;
        Ok(self.count_of(id))
    }

    fn checked(&self, id: NodeId) -> Result<&ComponentNode> {
        self.node(id)
            .ok_or_else(|| BomError::InvalidArgument(format!("No node {} in this tree", id)))
    }

    // The helpers below assume `id` was allocated by this tree. Every stored child
    // handle was checked on attach. Traversal depth is bounded by the heap, not the
    // call stack.

    /// Every appearance below `id` in render order, paired with its indent level.
    fn walk(&self, id: NodeId, indent_level: usize) -> Walk<'_> {
        Walk {
            tree: self,
            stack: vec![(id, indent_level)],
        }
    }

    pub(crate) fn cost_of(&self, id: NodeId) -> f64 {
        self.walk(id, 0).map(|(node, _)| node.unit_cost()).sum()
    }

    pub(crate) fn render_into(&self, id: NodeId, indent_level: usize, lines: &mut Vec<String>) {
        lines.extend(self.walk(id, indent_level).map(|(node, level)| {
            format!("{} - {}", " ".repeat(level * INDENT_WIDTH), node.record)
        }));
    }

    fn depth_of(&self, id: NodeId) -> usize {
        self.walk(id, 0).map(|(_, level)| level).max().unwrap_or(0)
    }

    fn count_of(&self, id: NodeId) -> usize {
        self.walk(id, 0).count()
    }
}

/// Pre-order, left-to-right traversal over child edges.
struct Walk<'a> {
    tree: &'a ComponentTree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a ComponentNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, level) = self.stack.pop()?;
        let node = &self.tree.nodes[id.index];
        self.stack.extend(node.children.iter().rev().map(|&child| (child, level + 1)));
        Some((node, level))
    }
}
