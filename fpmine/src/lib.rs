//! Frequent itemset mining with FP-Growth.
//!
//! Transactions are compressed into an arena-backed FP-tree whose header
//! table threads a chain through every node of each item. Mining walks those
//! chains to collect conditional pattern bases and recurses into conditional
//! trees, so the transaction list is scanned exactly twice.
//!
//! ```
//! let transactions = vec![vec!["a", "b"], vec!["a", "c"], vec!["a", "b", "c"]];
//! let itemsets = fpmine::mine(&transactions, 2).unwrap();
//!
//! assert!(itemsets.contains(&(vec!["a"], 3)));
//! assert_eq!(itemsets.len(), 5);
//! ```

use ndarray::ArrayView2;
use std::hash::Hash;

pub mod config;
pub mod error;
pub mod fp;
#[cfg(feature = "python")]
mod python;

pub use config::{MinSupport, MiningConfig};
pub use error::{MiningError, Result};
pub use fp::{FrequentItemsets, FrequentLevel};

/// Mines every itemset that occurs in at least `min_support` transactions.
///
/// Itemsets are returned in emission order, each listed as its items in the
/// order they were added along the recursion.
pub fn mine<T, S>(transactions: &[S], min_support: usize) -> Result<Vec<(Vec<T>, usize)>>
where
    T: Eq + Hash + Clone,
    S: AsRef<[T]>,
{
    Ok(mine_with_config(transactions, &MiningConfig::new(min_support))?.into_vec())
}

pub fn mine_with_config<T, S>(transactions: &[S], config: &MiningConfig) -> Result<FrequentItemsets<T>>
where
    T: Eq + Hash + Clone,
    S: AsRef<[T]>,
{
    fp::fp_growth_algorithm(transactions, config)
}

/// Mines a dense 0/1 transaction x item matrix. Item labels are column
/// indices.
pub fn mine_binary_matrix(
    transactions: ArrayView2<i32>,
    config: &MiningConfig,
) -> Result<FrequentItemsets<usize>> {
    let transaction_list = fp::items::matrix_to_transactions(transactions)?;
    fp::fp_growth_algorithm(&transaction_list, config)
}
