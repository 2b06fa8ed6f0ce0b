//! # Assembly
//!
//! An [`Assembly`] is one named product: a label, an arena of nodes and the ordered
//! list of top-level entries. It is the root of every cost and render traversal.
//!
//! The catalog is not owned here. Operations that may create records take it as
//! `&mut ComponentCatalog`, so several assemblies can draw from one catalog and share
//! its records.

use crate::catalog::ComponentCatalog;
use crate::error::{BomError, Result};
use crate::model::ComponentRecord;
use crate::tree::{ComponentTree, NodeId};
use std::rc::Rc;

#[derive(Debug)]
pub struct Assembly {
    label: String,
    tree: ComponentTree,
    roots: Vec<NodeId>,
}

impl Assembly {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tree: ComponentTree::new(),
            roots: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tree(&self) -> &ComponentTree {
        &self.tree
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Resolves `name` and appends a fresh top-level node for it.
    pub fn add_by_name(
        &mut self,
        catalog: &mut ComponentCatalog,
        name: &str,
        unit_cost: f64,
    ) -> Result<NodeId> {
        let record = catalog.resolve(name, unit_cost)?;
        let node = self.tree.add_node(record);
        self.roots.push(node);
        Ok(node)
    }

    /// Appends an existing node of this assembly as a top-level entry.
    pub fn add(&mut self, node: NodeId) -> Result<()> {
        if !self.tree.contains(node) {
            return Err(BomError::InvalidArgument(format!(
                "No node {} in assembly '{}'",
                node, self.label
            )));
        }
        self.roots.push(node);
        Ok(())
    }

    /// Allocates a detached node, to be placed later with [`Assembly::add`] or
    /// [`Assembly::attach_child`].
    pub fn new_node(&mut self, record: Rc<ComponentRecord>) -> NodeId {
        self.tree.add_node(record)
    }

    pub fn attach_child_by_name(
        &mut self,
        catalog: &mut ComponentCatalog,
        parent: NodeId,
        name: &str,
        unit_cost: f64,
    ) -> Result<NodeId> {
        self.tree
            .attach_child_by_name(catalog, parent, name, unit_cost)
    }

    pub fn attach_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.tree.attach_child(parent, child)
    }

    /// Follows `path` by name from the top-level entries downward, taking the first
    /// match at each level.
    pub fn find_path(&self, path: &[&str]) -> Option<NodeId> {
        let (first, rest) = path.split_first()?;
        let mut current = self.first_named(&self.roots, first)?;
        for name in rest {
            let children = self.tree.node(current)?.children();
            current = self.first_named(children, name)?;
        }
        Some(current)
    }

    pub fn total_cost(&self) -> f64 {
        self.roots.iter().map(|&root| self.tree.cost_of(root)).sum()
    }

    /// Header line naming the assembly, then every top-level entry rendered from level 0.
    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![format!("Assembly: {}", self.label)];
        for &root in &self.roots {
            self.tree.render_into(root, 0, &mut lines);
        }
        lines
    }

    fn first_named(&self, candidates: &[NodeId], name: &str) -> Option<NodeId> {
        candidates.iter().copied().find(|&id| {
            self.tree
                .node(id)
                .map(|node| node.name() == name)
                .unwrap_or(false)
        })
    }
}
