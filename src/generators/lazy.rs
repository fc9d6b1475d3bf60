use itertools::Itertools;

/// Lazily enumerates all non-empty subsets of `elements`.
///
/// Subsets come out grouped by size, from 1 up to `elements.len()`, and
/// within each size in lexicographic index order over the input sequence.
/// The iterator is finite and non-restartable; consuming only the first k
/// subsets costs O(k) beyond the O(r) per-subset working state. An empty
/// input yields an empty iterator.
pub fn powerset_lazy<T: Clone>(elements: &[T]) -> impl Iterator<Item = Vec<T>> + '_ {
    (1..=elements.len()).flat_map(move |size| elements.iter().cloned().combinations(size))
}
