use crate::fp::items::ItemId;
use std::collections::HashMap;

/// (prefix path, multiplicity) pairs collected above every occurrence of one
/// item. Paths are in root-to-leaf order.
pub type PatternBase = Vec<(Vec<ItemId>, usize)>;

/// One arena slot. `item` is `None` only for the root sentinel.
#[derive(Debug, Clone)]
pub struct FPNode {
    pub item: Option<ItemId>,
    pub count: usize,
    pub parent: Option<usize>,
    pub children: HashMap<ItemId, usize>,
    /// Next node carrying the same item, anywhere in the tree.
    pub next: Option<usize>,
}

/// First and last node of one item's same-item chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderEntry {
    pub head: usize,
    pub tail: usize,
}

/// Arena-backed FP-tree. Every link is an index into `nodes`, so dropping the
/// tree releases the whole structure at once.
#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    pub header_table: HashMap<ItemId, HeaderEntry>,
    pub root_index: usize,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
            next: None,
        }
    }

    pub fn new_item(item: ItemId, count: usize, parent: usize) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: HashMap::new(),
            next: None,
        }
    }
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FPTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HashMap::new(),
            root_index: 0,
        }
    }

    /// Number of item nodes, excluding the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[self.root_index].children.is_empty()
    }
}
