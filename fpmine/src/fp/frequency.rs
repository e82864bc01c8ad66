use super::items::{ItemId, Transaction};
use super::tree::PatternBase;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Support counts for the items that met the threshold in one tree build.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<ItemId, usize>,
}

impl FrequencyTable {
    /// One scan over the transactions, keeping items seen at least
    /// `min_count` times.
    pub fn from_transactions(transactions: &[Transaction], min_count: usize) -> Self {
        Self::from_weighted(transactions.iter().map(|tx| (tx.as_slice(), 1)), min_count)
    }

    /// Counts a conditional pattern base, weighting each path by its
    /// multiplicity.
    pub fn from_pattern_base(pattern_base: &PatternBase, min_count: usize) -> Self {
        Self::from_weighted(
            pattern_base.iter().map(|(path, count)| (path.as_slice(), *count)),
            min_count,
        )
    }

    fn from_weighted<'a>(
        rows: impl Iterator<Item = (&'a [ItemId], usize)>,
        min_count: usize,
    ) -> Self {
        let mut counts: HashMap<ItemId, usize> = HashMap::new();
        for (items, weight) in rows {
            for &item in items {
                *counts.entry(item).or_insert(0) += weight;
            }
        }
        counts.retain(|_, &mut count| count >= min_count);
        Self { counts }
    }

    pub fn support(&self, item: ItemId) -> Option<usize> {
        self.counts.get(&item).copied()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.counts.contains_key(&item)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, usize)> + '_ {
        self.counts.iter().map(|(&item, &count)| (item, count))
    }

    /// Drops items missing from the table and orders the rest by descending
    /// support, then ascending id.
    pub fn canonicalize(&self, transaction: &[ItemId]) -> Vec<ItemId> {
        let mut ranked: Vec<(ItemId, usize)> = transaction
            .iter()
            .filter_map(|&item| self.support(item).map(|count| (item, count)))
            .collect();

        ranked.sort_by_key(|&(item, count)| (Reverse(count), item));
        ranked.into_iter().map(|(item, _)| item).collect()
    }

    /// Every item in canonical order.
    pub fn ordered_items(&self) -> Vec<ItemId> {
        let mut items: Vec<(ItemId, usize)> = self.iter().collect();
        items.sort_unstable_by_key(|&(item, count)| (Reverse(count), item));
        items.into_iter().map(|(item, _)| item).collect()
    }
}
