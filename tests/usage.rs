use karytree::{Tree, TreeError};

fn build() -> Tree<i32> {
    let mut tree = Tree::default();
    tree.set_root(1);
    tree.add_child(&1, 2).unwrap();
    tree.add_child(&1, 3).unwrap();
    tree.add_child(&2, 4).unwrap();
    tree.add_child(&2, 5).unwrap();
    tree
}

#[test]
fn basic_usage() {
    let tree = build();

    assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [1, 2, 4, 5, 3]);
    assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), [4, 5, 2, 3, 1]);
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [4, 2, 5, 1, 3]);
    assert_eq!(tree.bfs().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    assert_eq!(tree.dfs().copied().collect::<Vec<_>>(), [1, 3, 2, 5, 4]);

    // Every producer starts over when called again
    assert_eq!(tree.pre_order().count(), 5);
    assert_eq!(tree.pre_order().count(), 5);
}

#[test]
fn heap_conversion() {
    let mut tree = build();
    tree.heapify();

    // The root now holds the maximum
    assert_eq!(tree.pre_order().next(), Some(&5));
    assert_eq!(tree.bfs().next(), Some(&5));

    // The shape did not change: node 4's slot still has no children, etc.
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.height(), 3);
}

#[test]
fn capacity_exceeded() {
    let mut tree = build();
    let before: Vec<i32> = tree.bfs().copied().collect();

    let result = tree.add_child(&2, 6);
    assert!(matches!(
        result,
        Err(TreeError::CapacityExceeded {
            branching_factor: 2
        })
    ));
    assert_eq!(
        result.unwrap_err().to_string(),
        "capacity exceeded: node already has 2 children"
    );

    let after: Vec<i32> = tree.bfs().copied().collect();
    assert_eq!(before, after);
}

#[test]
fn missing_parent() {
    let mut tree = build();
    let before: Vec<i32> = tree.post_order().copied().collect();
    tree.add_child(&99, 6).unwrap();
    let after: Vec<i32> = tree.post_order().copied().collect();
    assert_eq!(before, after);
}

#[test]
fn empty_tree() {
    let tree = Tree::<i32>::default();
    assert_eq!(tree.pre_order().next(), None);
    assert_eq!(tree.post_order().next(), None);
    assert_eq!(tree.in_order().next(), None);
    assert_eq!(tree.bfs().next(), None);
    assert_eq!(tree.dfs().next(), None);
    assert!(tree.pre_order() == tree.pre_order());
}

#[derive(Debug, Clone, Copy)]
struct Complex {
    real: i32,
    imag: i32,
}

impl Complex {
    fn norm(self) -> i32 {
        self.real * self.real + self.imag * self.imag
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.real == other.real && self.imag == other.imag
    }
}

impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.norm().partial_cmp(&other.norm())
    }
}

#[test]
fn custom_value_type() {
    let c = |real, imag| Complex { real, imag };
    let mut tree = Tree::default();
    tree.set_root(c(1, 1));
    tree.add_child(&c(1, 1), c(2, 2)).unwrap();
    tree.add_child(&c(1, 1), c(3, 3)).unwrap();
    tree.add_child(&c(2, 2), c(4, 4)).unwrap();
    tree.add_child(&c(2, 2), c(5, 5)).unwrap();

    // Same magnitude, different value: not a match
    tree.add_child(&c(-1, 1), c(9, 9)).unwrap();
    assert!(!tree.contains(&c(9, 9)));

    tree.heapify();
    assert_eq!(tree.root(), Some(&c(5, 5)));
    assert_eq!(tree.bfs().next(), Some(&c(5, 5)));
}
