use super::items::ItemId;
use super::storage::ItemsetStorage;

/// Emits `suffix` extended by every `k`-combination of `path`.
///
/// Counts never increase going down a path, so a combination's support is
/// the count of its deepest node.
pub fn generate_combinations_from_path(
    path: &[(ItemId, usize)],
    k: usize,
    suffix: &[ItemId],
    result: &mut ItemsetStorage,
) {
    if k == 0 || k > path.len() {
        return;
    }

    let indices: Vec<usize> = (0..path.len()).collect();
    let mut callback = |combination: &[usize]| {
        let mut pattern = suffix.to_vec();
        pattern.extend(combination.iter().map(|&idx| path[idx].0));
        let support = combination.last().map_or(0, |&idx| path[idx].1);
        result.add_itemset(&pattern, support);
    };
    generate_combinations_recursive(&indices, k, 0, &mut Vec::with_capacity(k), &mut callback);
}

pub fn generate_combinations_recursive<F>(
    items: &[usize],
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    for i in start..items.len() {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
