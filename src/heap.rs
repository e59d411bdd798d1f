use std::mem;

use log::debug;

use crate::{
    traversal::{PreOrder, Traversal},
    tree::Tree,
};

impl<T: PartialOrd> Tree<T> {
    /// Reorders the stored values into max-heap order without touching the
    /// shape of the tree.
    ///
    /// The nodes reached by [`Tree::in_order`] take part. They are laid out as
    /// a binary heap array in level order (position 0 is the root) and the
    /// values are moved between them until every position holds a value not
    /// smaller than the ones at `2i + 1` and `2i + 2`. With a branching factor
    /// above 2 the subtrees hanging from slots 2 and up are not reached and keep
    /// their values.
    pub fn heapify(&mut self) {
        let mut reached = vec![false; self.nodes.len()];
        for slot_id in self.in_order().ids() {
            reached[slot_id] = true;
        }
        let positions: Vec<usize> = self
            .bfs()
            .ids()
            .filter(|&slot_id| reached[slot_id])
            .collect();

        // Floyd's construction: sift down every internal position, last first.
        for i in (0..positions.len() / 2).rev() {
            self.sift_down(&positions, i);
        }
        debug!("heapified {} of {} nodes", positions.len(), self.nodes.len());
    }

    /// Heapifies the tree, then walks it in pre-order.
    pub fn heap_order(&mut self) -> PreOrder<'_, T> {
        self.heapify();
        self.pre_order()
    }

    fn sift_down(&mut self, positions: &[usize], mut i: usize) {
        loop {
            let mut largest = i;
            for child in [2 * i + 1, 2 * i + 2] {
                if child < positions.len()
                    && self.nodes[positions[child]].value > self.nodes[positions[largest]].value
                {
                    largest = child;
                }
            }
            if largest == i {
                return;
            }
            self.swap_values(positions[i], positions[largest]);
            i = largest;
        }
    }

    // Only the values move, the child slots stay with their nodes.
    fn swap_values(&mut self, a: usize, b: usize) {
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(high);
        mem::swap(&mut head[low].value, &mut tail[0].value);
    }
}
