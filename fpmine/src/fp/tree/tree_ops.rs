use super::tree::{FPNode, FPTree, HeaderEntry, PatternBase};
use crate::fp::items::ItemId;

/// Walks one item's same-item chain, yielding node indices.
pub struct Chain<'a> {
    tree: &'a FPTree,
    current: Option<usize>,
}

impl Iterator for Chain<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let index = self.current?;
        self.current = self.tree.nodes[index].next;
        Some(index)
    }
}

impl FPTree {
    /// Inserts one canonical transaction, adding `weight` to every node on
    /// its path.
    pub fn insert_transaction(&mut self, transaction: &[ItemId], weight: usize) {
        let mut current_index = self.root_index;

        for &item in transaction {
            if let Some(&child_index) = self.nodes[current_index].children.get(&item) {
                self.nodes[child_index].count += weight;
                current_index = child_index;
                continue;
            }

            let new_index = self.nodes.len();
            self.nodes.push(FPNode::new_item(item, weight, current_index));
            self.nodes[current_index].children.insert(item, new_index);
            self.link(item, new_index);
            current_index = new_index;
        }
    }

    fn link(&mut self, item: ItemId, index: usize) {
        match self.header_table.get_mut(&item) {
            Some(entry) => {
                self.nodes[entry.tail].next = Some(index);
                entry.tail = index;
            }
            None => {
                self.header_table.insert(
                    item,
                    HeaderEntry {
                        head: index,
                        tail: index,
                    },
                );
            }
        }
    }

    pub fn chain(&self, item: ItemId) -> Chain<'_> {
        Chain {
            tree: self,
            current: self.header_table.get(&item).map(|entry| entry.head),
        }
    }

    /// Total count of `item` in this tree, summed over its whole chain.
    pub fn item_support(&self, item: ItemId) -> usize {
        self.chain(item).map(|idx| self.nodes[idx].count).sum()
    }

    pub fn conditional_pattern_base(&self, item: ItemId) -> PatternBase {
        self.chain(item)
            .filter_map(|idx| {
                let mut path = Vec::new();
                let mut current = self.nodes[idx].parent;

                while let Some(i) = current {
                    if let Some(item) = self.nodes[i].item {
                        path.push(item);
                    }
                    current = self.nodes[i].parent;
                }

                path.reverse();
                (!path.is_empty()).then_some((path, self.nodes[idx].count))
            })
            .collect()
    }

    pub fn has_single_path(&self) -> bool {
        let mut current_index = self.root_index;

        loop {
            let children = &self.nodes[current_index].children;
            if children.len() > 1 {
                return false;
            }
            match children.values().next() {
                Some(&child) => current_index = child,
                None => return true,
            }
        }
    }

    /// (item, count) pairs from the root down along the first child at each
    /// level. Only meaningful when `has_single_path` holds.
    pub fn single_path(&self) -> Vec<(ItemId, usize)> {
        let mut path = Vec::new();
        let mut current_index = self.root_index;

        while let Some(&child) = self.nodes[current_index].children.values().next() {
            let node = &self.nodes[child];
            if let Some(item) = node.item {
                path.push((item, node.count));
            }
            current_index = child;
        }
        path
    }
}
