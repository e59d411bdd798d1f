use std::{error::Error, fmt};

use karytree::Tree;
use log::info;

// Complex numbers compare equal component-wise but are ordered by magnitude.
#[derive(Clone, Copy)]
struct Complex {
    real: i32,
    imag: i32,
}

impl Complex {
    fn new(real: i32, imag: i32) -> Self {
        Complex { real, imag }
    }

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

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}i", self.real, self.imag)
    }
}

fn join<'a>(values: impl Iterator<Item = &'a Complex>) -> String {
    values.map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

fn print_traversals(tree: &Tree<Complex>) {
    println!("Pre-Order Traversal: {}", join(tree.pre_order()));
    println!("Post-Order Traversal: {}", join(tree.post_order()));
    println!("In-Order Traversal: {}", join(tree.in_order()));
    println!("BFS Traversal: {}", join(tree.bfs()));
    println!("DFS Traversal: {}", join(tree.dfs()));
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // The branching factor is the only setting, default 2
    let branching_factor = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<usize>()?,
        None => 2,
    };
    info!("building a tree with branching factor {branching_factor}");

    let mut tree = Tree::new(branching_factor);
    tree.set_root(Complex::new(1, 1));
    tree.add_child(&Complex::new(1, 1), Complex::new(2, 2))?;
    tree.add_child(&Complex::new(1, 1), Complex::new(3, 3))?;
    tree.add_child(&Complex::new(2, 2), Complex::new(4, 4))?;
    tree.add_child(&Complex::new(2, 2), Complex::new(5, 5))?;
    info!("{} nodes, height {}", tree.len(), tree.height());

    println!("Original Tree:");
    print_traversals(&tree);

    // Convert the tree into a binary max heap
    tree.heapify();

    println!("Heapified Tree:");
    print_traversals(&tree);

    Ok(())
}
