use crate::error::{MiningError, Result};
use ndarray::ArrayView2;
use std::collections::HashMap;
use std::hash::Hash;

/// Dense item identifier. Ids are handed out in first-appearance order and
/// double as the tie-break key when two items have equal support.
pub type ItemId = usize;
pub type Transaction = Vec<ItemId>;

/// Interns item labels into dense ids and back.
#[derive(Debug, Clone)]
pub struct Itemizer<T> {
    ids: HashMap<T, ItemId>,
    labels: Vec<T>,
}

impl<T: Eq + Hash + Clone> Default for Itemizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Itemizer<T> {
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            labels: Vec::new(),
        }
    }

    pub fn id_of(&mut self, item: &T) -> ItemId {
        if let Some(&id) = self.ids.get(item) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(item.clone());
        self.ids.insert(item.clone(), id);
        id
    }

    pub fn get(&self, item: &T) -> Option<ItemId> {
        self.ids.get(item).copied()
    }

    pub fn label(&self, id: ItemId) -> &T {
        &self.labels[id]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn encode<S: AsRef<[T]>>(&mut self, transactions: &[S]) -> Vec<Transaction> {
        transactions
            .iter()
            .map(|tx| tx.as_ref().iter().map(|item| self.id_of(item)).collect())
            .collect()
    }

    pub fn decode(&self, itemset: &[ItemId]) -> Vec<T> {
        itemset.iter().map(|&id| self.labels[id].clone()).collect()
    }
}

/// Converts a 0/1 transaction x item matrix into lists of column indices.
pub fn matrix_to_transactions(matrix: ArrayView2<i32>) -> Result<Vec<Vec<usize>>> {
    matrix
        .outer_iter()
        .enumerate()
        .map(|(row, values)| {
            let mut tx = Vec::new();
            for (column, &value) in values.iter().enumerate() {
                match value {
                    0 => {}
                    1 => tx.push(column),
                    _ => return Err(MiningError::InvalidMatrixValue { row, column, value }),
                }
            }
            Ok(tx)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_ids_follow_first_appearance() {
        let mut itemizer = Itemizer::new();
        let encoded = itemizer.encode(&[vec!["b", "a"], vec!["c", "b"]]);

        assert_eq!(encoded, vec![vec![0, 1], vec![2, 0]]);
        assert_eq!(itemizer.get(&"c"), Some(2));
        assert_eq!(itemizer.decode(&[1, 2]), vec!["a", "c"]);
    }

    #[test]
    fn test_matrix_rejects_non_binary() {
        let ok = array![[1, 0, 1], [0, 1, 0]];
        assert_eq!(
            matrix_to_transactions(ok.view()).unwrap(),
            vec![vec![0, 2], vec![1]]
        );

        let bad = array![[1, 0], [0, 3]];
        assert!(matches!(
            matrix_to_transactions(bad.view()),
            Err(MiningError::InvalidMatrixValue { row: 1, column: 1, value: 3 })
        ));
    }
}
