//! Brute-force reference counting shared by the integration tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

pub type ItemsetMap = BTreeMap<BTreeSet<String>, usize>;

pub fn to_strings(transactions: &[&[&str]]) -> Vec<Vec<String>> {
    transactions
        .iter()
        .map(|tx| tx.iter().map(|item| item.to_string()).collect())
        .collect()
}

/// Collapses mined output into a set-keyed map. Panics on duplicate
/// itemsets so double reporting cannot hide.
pub fn as_map(itemsets: Vec<(Vec<String>, usize)>) -> ItemsetMap {
    let mut map = ItemsetMap::new();
    for (items, support) in itemsets {
        let key: BTreeSet<String> = items.into_iter().collect();
        assert!(map.insert(key.clone(), support).is_none(), "itemset {key:?} reported twice");
    }
    map
}

/// Every itemset with support >= `min_support`, found by enumerating the
/// subsets of each transaction.
pub fn brute_force(transactions: &[Vec<String>], min_support: usize) -> ItemsetMap {
    let mut counts = ItemsetMap::new();

    for tx in transactions {
        let items: Vec<&String> = tx.iter().collect::<BTreeSet<_>>().into_iter().collect();
        assert!(items.len() < 20, "transaction too wide for brute force");

        for mask in 1u32..(1 << items.len()) {
            let subset: BTreeSet<String> = items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, item)| (*item).clone())
                .collect();
            *counts.entry(subset).or_insert(0) += 1;
        }
    }

    counts.retain(|_, count| *count >= min_support);
    counts
}
