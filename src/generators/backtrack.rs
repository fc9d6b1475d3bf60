use crate::error::PowersetResult;
use crate::generators::doubling::reserve_accumulator;

/// Eagerly computes all non-empty subsets of `elements` by depth-first
/// backtracking with pre-order emission.
///
/// Each subset is recorded before its extensions are explored, and a subset
/// is only ever extended with elements at indices greater than its last
/// member, so every non-empty subset appears exactly once. The recursion is
/// realized as an explicit frame stack of (partial subset, next candidate
/// index) pairs; frames are pushed in reverse index order so pop order
/// reproduces the recursive pre-order, while keeping the traversal depth off
/// the call stack.
pub fn powerset_backtrack<T: Clone>(elements: &[T]) -> PowersetResult<Vec<Vec<T>>> {
    let mut result = reserve_accumulator(elements.len())?;

    let mut stack: Vec<(Vec<T>, usize)> = Vec::new();
    for start in (0..elements.len()).rev() {
        stack.push((vec![elements[start].clone()], start + 1));
    }

    while let Some((subset, next)) = stack.pop() {
        for candidate in (next..elements.len()).rev() {
            let mut extended = subset.clone();
            extended.push(elements[candidate].clone());
            stack.push((extended, candidate + 1));
        }
        result.push(subset);
    }

    Ok(result)
}
