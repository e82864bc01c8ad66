use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::combinations::generate_combinations_from_path;
use super::frequency::FrequencyTable;
use super::items::{ItemId, Itemizer, Transaction};
use super::storage::{FrequentItemsets, ItemsetStorage};
use super::tree::FPTree;
use crate::config::MiningConfig;
use crate::error::Result;
use std::hash::Hash;

/// Mines every itemset whose support reaches the configured threshold.
pub fn fp_growth_algorithm<T, S>(
    transactions: &[S],
    config: &MiningConfig,
) -> Result<FrequentItemsets<T>>
where
    T: Eq + Hash + Clone,
    S: AsRef<[T]>,
{
    config.validate()?;

    let mut itemizer = Itemizer::new();
    let encoded = itemizer.encode(transactions);
    let storage = fp_growth_encoded(&encoded, config);

    Ok(FrequentItemsets::new(storage, itemizer))
}

/// Mining over already-interned transactions. `config` must be valid.
pub fn fp_growth_encoded(transactions: &[Transaction], config: &MiningConfig) -> ItemsetStorage {
    let min_count = config.min_support.min_count(transactions.len());
    let (fp_tree, table) = build_fp_tree(transactions, min_count);

    let miner = Miner {
        min_count,
        max_len: config.max_len,
        single_path: config.single_path,
    };
    let mut result = ItemsetStorage::new();
    miner.mine_tree(&fp_tree, &table, &[], &mut result);

    tracing::info!(
        transactions = transactions.len(),
        min_count,
        itemsets = result.len(),
        "FP-growth finished"
    );
    result
}

struct Miner {
    min_count: usize,
    max_len: Option<usize>,
    single_path: bool,
}

impl Miner {
    fn at_cap(&self, len: usize) -> bool {
        self.max_len.is_some_and(|max| len >= max)
    }

    /// Visits the items of `fp_tree` least frequent first, emitting
    /// `suffix + item` and recursing into its conditional tree.
    fn mine_tree(
        &self,
        fp_tree: &FPTree,
        table: &FrequencyTable,
        suffix: &[ItemId],
        result: &mut ItemsetStorage,
    ) {
        if self.single_path && fp_tree.has_single_path() {
            let path = fp_tree.single_path();
            let room = self.max_len.map_or(path.len(), |max| max - suffix.len());
            for k in 1..=path.len().min(room) {
                generate_combinations_from_path(&path, k, suffix, result);
            }
            return;
        }

        for item in table.ordered_items().into_iter().rev() {
            let mut new_suffix = suffix.to_vec();
            new_suffix.push(item);
            result.add_itemset(&new_suffix, fp_tree.item_support(item));

            if self.at_cap(new_suffix.len()) {
                continue;
            }

            let pattern_base = fp_tree.conditional_pattern_base(item);
            if pattern_base.is_empty() {
                continue;
            }

            let (conditional_tree, conditional_table) =
                build_conditional_fp_tree(&pattern_base, self.min_count);
            if conditional_table.is_empty() {
                continue;
            }

            tracing::trace!(
                depth = new_suffix.len(),
                paths = pattern_base.len(),
                items = conditional_table.len(),
                nodes = conditional_tree.node_count(),
                "conditional tree"
            );

            self.mine_tree(&conditional_tree, &conditional_table, &new_suffix, result);
        }
    }
}
