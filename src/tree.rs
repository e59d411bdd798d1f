use std::fmt;

use log::{debug, trace};

use crate::{error::TreeError, node::Node, traversal::Traversal};

/// A k-ary tree whose nodes are stored in an arena owned by the tree.
///
/// Every node has exactly `branching_factor` child slots. Slots are filled left
/// to right by [`Tree::add_child`], which attaches a value under the first node
/// (in pre-order) holding an equal parent value.
pub struct Tree<T> {
    branching_factor: usize,
    pub(crate) root: Option<usize>,
    pub(crate) nodes: Vec<Node<T>>,
}

impl<T> Tree<T> {
    #[must_use]
    pub fn new(branching_factor: usize) -> Self {
        Tree {
            branching_factor,
            root: None,
            nodes: Vec::new(),
        }
    }

    /// Replaces the whole tree with a single root node holding `value`.
    pub fn set_root(&mut self, value: T) {
        if !self.nodes.is_empty() {
            debug!("discarding {} nodes to set a new root", self.nodes.len());
        }
        self.nodes.clear();
        self.root = Some(self.add_slot(value));
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    #[must_use]
    pub fn branching_factor(&self) -> usize {
        self.branching_factor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[must_use]
    pub fn root(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[root].value)
    }

    /// Number of levels in the tree, 0 when it is empty.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<usize> = self.root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&slot_id| self.nodes[slot_id].child_ids())
                .collect();
        }
        height
    }

    fn add_slot(&mut self, value: T) -> usize {
        let slot_id = self.nodes.len();
        self.nodes.push(Node::new(value, self.branching_factor));
        slot_id
    }
}

impl<T: PartialEq> Tree<T> {
    /// Attaches `child_value` under the first node equal to `parent_value`.
    ///
    /// Nothing happens when no node matches, including on an empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::CapacityExceeded`] if the matched node has no free
    /// child slot. The tree is left unchanged in that case.
    pub fn add_child(&mut self, parent_value: &T, child_value: T) -> Result<(), TreeError> {
        let parent = match self.find(parent_value) {
            Some(parent) => parent,
            None => {
                trace!("parent not found, child ignored");
                return Ok(());
            }
        };
        let slot = self.nodes[parent]
            .first_free_slot()
            .ok_or(TreeError::CapacityExceeded {
                branching_factor: self.branching_factor,
            })?;

        let child = self.add_slot(child_value);
        self.nodes[parent].children[slot] = Some(child);
        trace!("node {child} placed in slot {slot} of node {parent}");
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    // Pre-order search, children visited in slot order.
    fn find(&self, value: &T) -> Option<usize> {
        self.pre_order()
            .ids()
            .find(|&slot_id| self.nodes[slot_id].value == *value)
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::new(2)
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("branching_factor", &self.branching_factor)
            .field("pre_order", &self.pre_order().collect::<Vec<_>>())
            .finish()
    }
}
