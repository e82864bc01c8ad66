use super::items::{ItemId, Itemizer};
use std::hash::Hash;

/// Flat storage for mined itemsets: all items in one buffer, addressed by
/// `(start, len)` offsets, with one support per itemset.
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    items: Vec<ItemId>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// Itemsets of one size, as produced by [`FrequentItemsets::levels`].
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    pub(crate) storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `items` in the order given and returns its index.
    pub fn add_itemset(&mut self, items: &[ItemId], support: usize) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[ItemId] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[ItemId], usize)> {
        (0..self.len()).map(move |idx| (self.get_itemset(idx), self.supports[idx]))
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, items: &[ItemId], support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset(items, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[ItemId]> {
        self.storage.iter().map(|(items, _)| items)
    }

    pub fn supports(&self) -> &[usize] {
        &self.storage.supports
    }
}

/// Result of a mining run: itemsets in emission order, together with the
/// item labels they were mined from.
#[derive(Debug, Clone)]
pub struct FrequentItemsets<T> {
    storage: ItemsetStorage,
    itemizer: Itemizer<T>,
}

impl<T: Eq + Hash + Clone> FrequentItemsets<T> {
    pub(crate) fn new(storage: ItemsetStorage, itemizer: Itemizer<T>) -> Self {
        Self { storage, itemizer }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec<&T>, usize)> {
        self.storage.iter().map(move |(ids, support)| {
            (ids.iter().map(|&id| self.itemizer.label(id)).collect(), support)
        })
    }

    /// Support of the itemset equal (as a set) to `itemset`, if it was mined.
    pub fn support_of(&self, itemset: &[T]) -> Option<usize> {
        let mut wanted = itemset
            .iter()
            .map(|item| self.itemizer.get(item))
            .collect::<Option<Vec<ItemId>>>()?;
        wanted.sort_unstable();
        wanted.dedup();

        self.storage.iter().find_map(|(ids, support)| {
            let mut ids = ids.to_vec();
            ids.sort_unstable();
            (ids == wanted).then_some(support)
        })
    }

    /// Groups itemsets by size; `levels()[k]` holds the itemsets of size
    /// `k + 1`. Items within each itemset are sorted by id.
    pub fn levels(&self) -> Vec<FrequentLevel> {
        let mut levels: Vec<FrequentLevel> = Vec::new();

        for (ids, support) in self.storage.iter() {
            let size = ids.len();
            while levels.len() < size {
                levels.push(FrequentLevel::new(levels.len() + 1));
            }
            let mut sorted = ids.to_vec();
            sorted.sort_unstable();
            levels[size - 1].add_itemset(&sorted, support);
        }
        levels
    }

    pub fn label(&self, id: ItemId) -> &T {
        self.itemizer.label(id)
    }

    pub fn into_vec(self) -> Vec<(Vec<T>, usize)> {
        self.storage
            .iter()
            .map(|(ids, support)| (self.itemizer.decode(ids), support))
            .collect()
    }
}
