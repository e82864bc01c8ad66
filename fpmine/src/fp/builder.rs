use super::frequency::FrequencyTable;
use super::items::Transaction;
use super::tree::{FPTree, PatternBase};

pub fn build_fp_tree(transactions: &[Transaction], min_count: usize) -> (FPTree, FrequencyTable) {
    let table = FrequencyTable::from_transactions(transactions, min_count);
    let mut fp_tree = FPTree::new();

    for tx in transactions {
        let tx_items = table.canonicalize(tx);
        if !tx_items.is_empty() {
            fp_tree.insert_transaction(&tx_items, 1);
        }
    }

    tracing::debug!(
        transactions = transactions.len(),
        frequent_items = table.len(),
        nodes = fp_tree.node_count(),
        "built FP-tree"
    );

    (fp_tree, table)
}

/// Builds the conditional tree for one pattern base. Each path is inserted
/// once, weighted by its multiplicity. The returned table is empty when no
/// item of the base reaches `min_count`.
pub fn build_conditional_fp_tree(
    pattern_base: &PatternBase,
    min_count: usize,
) -> (FPTree, FrequencyTable) {
    let table = FrequencyTable::from_pattern_base(pattern_base, min_count);
    let mut conditional_tree = FPTree::new();

    if table.is_empty() {
        return (conditional_tree, table);
    }

    for (path, count) in pattern_base {
        let filtered_path = table.canonicalize(path);
        if !filtered_path.is_empty() {
            conditional_tree.insert_transaction(&filtered_path, *count);
        }
    }

    (conditional_tree, table)
}
