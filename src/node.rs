pub struct Node<T> {
    pub value: T,
    pub children: Vec<Option<usize>>,
}

impl<T> Node<T> {
    #[must_use]
    pub fn new(value: T, branching_factor: usize) -> Node<T> {
        Node {
            value,
            children: vec![None; branching_factor],
        }
    }

    // Slot ids of the populated children, in slot order.
    pub fn child_ids(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.children.iter().filter_map(|&child| child)
    }

    pub fn first_free_slot(&self) -> Option<usize> {
        self.children.iter().position(Option::is_none)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    // Slot 0 and slot 1 are the only children an in-order walk knows about.
    pub fn left(&self) -> Option<usize> {
        self.children.first().copied().flatten()
    }

    pub fn right(&self) -> Option<usize> {
        self.children.get(1).copied().flatten()
    }
}
