use crate::config::{MinSupport, MiningConfig};
use crate::mine_binary_matrix;
use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::prelude::*;

/// Mines a 0/1 matrix; returns one `(n_itemsets, k)` array of column indices
/// per itemset size `k`, skipping sizes with no itemsets.
#[pyfunction]
#[pyo3(signature = (transactions, min_support, max_len = None))]
fn fp_growth<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
    max_len: Option<usize>,
) -> PyResult<Vec<Bound<'py, PyArray2<usize>>>> {
    let mut config = MiningConfig::new(MinSupport::Relative(min_support));
    config.max_len = max_len;

    let itemsets = mine_binary_matrix(transactions.as_array(), &config)?;
    let mut result = Vec::new();

    for level in itemsets.levels() {
        if level.is_empty() {
            continue;
        }

        let itemset_size = level.itemset_size;
        let num_itemsets = level.len();
        let mut data = vec![0usize; num_itemsets * itemset_size];

        for (i, itemset) in level.iter_itemsets().enumerate() {
            let mut columns: Vec<usize> = itemset.iter().map(|&id| *itemsets.label(id)).collect();
            columns.sort_unstable();
            data[i * itemset_size..(i + 1) * itemset_size].copy_from_slice(&columns);
        }

        let array = Array2::from_shape_vec((num_itemsets, itemset_size), data)
            .map_err(|_| pyo3::exceptions::PyValueError::new_err("Failed to create array"))?;

        result.push(array.into_pyarray(py));
    }

    Ok(result)
}

/// Mines labelled transactions with an absolute support count.
#[pyfunction]
fn fp_growth_labels(
    transactions: Vec<Vec<String>>,
    min_support: usize,
) -> PyResult<Vec<(Vec<String>, usize)>> {
    Ok(crate::mine(&transactions, min_support)?)
}

#[pymodule]
#[pyo3(name = "fpmine")]
fn fpmine_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(fp_growth, m)?)?;
    m.add_function(wrap_pyfunction!(fp_growth_labels, m)?)?;
    Ok(())
}
