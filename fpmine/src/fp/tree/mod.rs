// Tree module - FP-Tree data structures and operations

mod tree;
mod tree_ops;

pub use tree::{FPNode, FPTree, HeaderEntry, PatternBase};
pub use tree_ops::Chain;
