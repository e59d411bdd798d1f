mod error;
mod heap;
mod node;
mod traversal;
mod tree;

pub use error::TreeError;
pub use traversal::{Bfs, Dfs, InOrder, PostOrder, PreOrder};
pub use tree::Tree;
