//! Iterative traversals over a [`Tree`].
//!
//! Every traversal is a small state machine owning its own frontier, so the
//! depth of the tree is bounded only by memory. Calling a producer again on the
//! tree starts a fresh, independent traversal.

use std::{collections::VecDeque, iter::FusedIterator, ptr};

use crate::{node::Node, tree::Tree};

pub(crate) trait Traversal: Sized {
    fn next_id(&mut self) -> Option<usize>;

    fn ids(self) -> Ids<Self> {
        Ids(self)
    }
}

/// Adapts a traversal to yield slot ids instead of values.
pub(crate) struct Ids<I>(I);

impl<I: Traversal> Iterator for Ids<I> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.0.next_id()
    }
}

// Two traversals are at the same position when they would visit the same node
// of the same tree next, or when both are exhausted.
fn same_position<T>(
    nodes: &[Node<T>],
    position: Option<usize>,
    other_nodes: &[Node<T>],
    other_position: Option<usize>,
) -> bool {
    match (position, other_position) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b && ptr::eq(nodes.as_ptr(), other_nodes.as_ptr()),
        _ => false,
    }
}

macro_rules! traversal_iterator {
    ($name:ident) => {
        impl<'a, T> Iterator for $name<'a, T> {
            type Item = &'a T;

            fn next(&mut self) -> Option<&'a T> {
                let nodes = self.nodes;
                self.next_id().map(|slot_id| &nodes[slot_id].value)
            }
        }

        impl<'a, T> FusedIterator for $name<'a, T> {}

        impl<'a, T> PartialEq for $name<'a, T> {
            fn eq(&self, other: &Self) -> bool {
                same_position(self.nodes, self.position(), other.nodes, other.position())
            }
        }
    };
}

/// Parent first, then every subtree from the lowest slot to the highest.
pub struct PreOrder<'a, T> {
    nodes: &'a [Node<T>],
    stack: Vec<usize>,
}

impl<'a, T> PreOrder<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        PreOrder {
            nodes: &tree.nodes,
            stack: tree.root.into_iter().collect(),
        }
    }

    fn position(&self) -> Option<usize> {
        self.stack.last().copied()
    }
}

impl<T> Traversal for PreOrder<'_, T> {
    fn next_id(&mut self) -> Option<usize> {
        let slot_id = self.stack.pop()?;
        // Reverse slot order so that slot 0 is popped next.
        self.stack.extend(self.nodes[slot_id].child_ids().rev());
        Some(slot_id)
    }
}

traversal_iterator!(PreOrder);

/// Every subtree from the lowest slot to the highest, then the parent.
pub struct PostOrder<'a, T> {
    nodes: &'a [Node<T>],
    stack: Vec<usize>,
    last_yielded: Option<usize>,
}

impl<'a, T> PostOrder<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        PostOrder {
            nodes: &tree.nodes,
            stack: tree.root.into_iter().collect(),
            last_yielded: None,
        }
    }

    fn position(&self) -> Option<usize> {
        self.stack.last().copied()
    }
}

impl<T> Traversal for PostOrder<'_, T> {
    fn next_id(&mut self) -> Option<usize> {
        while let Some(&top) = self.stack.last() {
            let node = &self.nodes[top];

            // The last populated child is yielded right before its parent, so
            // seeing it as the last yielded node means every subtree is done.
            // Slot ids are compared: equal values in distinct nodes must not
            // be confused.
            let last_child = node.child_ids().next_back();
            if node.is_leaf() || last_child == self.last_yielded {
                self.stack.pop();
                self.last_yielded = Some(top);
                return Some(top);
            }
            self.stack.extend(node.child_ids().rev());
        }
        None
    }
}

traversal_iterator!(PostOrder);

/// Slot 0 subtree, then the node, then the slot 1 subtree.
///
/// Only slots 0 and 1 take part: with a branching factor above 2, children in
/// higher slots (and their subtrees) are never visited.
pub struct InOrder<'a, T> {
    nodes: &'a [Node<T>],
    stack: Vec<usize>,
    current: Option<usize>,
}

impl<'a, T> InOrder<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = InOrder {
            nodes: &tree.nodes,
            stack: Vec::new(),
            current: None,
        };
        iter.push_left(tree.root);
        iter.current = iter.stack.last().copied();
        iter
    }

    fn push_left(&mut self, mut node: Option<usize>) {
        while let Some(slot_id) = node {
            self.stack.push(slot_id);
            node = self.nodes[slot_id].left();
        }
    }

    fn position(&self) -> Option<usize> {
        self.current
    }
}

impl<T> Traversal for InOrder<'_, T> {
    fn next_id(&mut self) -> Option<usize> {
        let slot_id = self.stack.pop()?;
        self.push_left(self.nodes[slot_id].right());
        self.current = self.stack.last().copied();
        Some(slot_id)
    }
}

traversal_iterator!(InOrder);

/// Level by level, each level from the lowest slot to the highest.
pub struct Bfs<'a, T> {
    nodes: &'a [Node<T>],
    queue: VecDeque<usize>,
}

impl<'a, T> Bfs<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        Bfs {
            nodes: &tree.nodes,
            queue: tree.root.into_iter().collect(),
        }
    }

    fn position(&self) -> Option<usize> {
        self.queue.front().copied()
    }
}

impl<T> Traversal for Bfs<'_, T> {
    fn next_id(&mut self) -> Option<usize> {
        let slot_id = self.queue.pop_front()?;
        self.queue.extend(self.nodes[slot_id].child_ids());
        Some(slot_id)
    }
}

traversal_iterator!(Bfs);

/// Depth-first with the highest slot explored first: the mirror of [`PreOrder`].
pub struct Dfs<'a, T> {
    nodes: &'a [Node<T>],
    stack: Vec<usize>,
}

impl<'a, T> Dfs<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        Dfs {
            nodes: &tree.nodes,
            stack: tree.root.into_iter().collect(),
        }
    }

    fn position(&self) -> Option<usize> {
        self.stack.last().copied()
    }
}

impl<T> Traversal for Dfs<'_, T> {
    fn next_id(&mut self) -> Option<usize> {
        let slot_id = self.stack.pop()?;
        self.stack.extend(self.nodes[slot_id].child_ids());
        Some(slot_id)
    }
}

traversal_iterator!(Dfs);

impl<T> Tree<T> {
    #[must_use]
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self)
    }

    #[must_use]
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self)
    }

    #[must_use]
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self)
    }

    #[must_use]
    pub fn bfs(&self) -> Bfs<'_, T> {
        Bfs::new(self)
    }

    #[must_use]
    pub fn dfs(&self) -> Dfs<'_, T> {
        Dfs::new(self)
    }
}
